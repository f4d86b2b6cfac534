//! Use-Case-Funktionen: die eigentliche Mutationslogik pro Feature.

pub mod camera;
pub mod domain_data;
pub mod selection;
pub mod viewport;
