//! UI-Komponenten: Menü, Status-Bar, Detail-Panel, Input-Handling, Dialoge.

pub mod detail_panel;
pub mod dialogs;
pub mod input;
pub mod legend;
pub mod menu;
pub mod status;

pub use detail_panel::render_detail_panel;
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use legend::draw_legend;
pub use menu::render_menu;
pub use status::render_status_bar;
