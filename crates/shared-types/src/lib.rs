pub mod config;
pub mod error;

// Consultation domain
pub mod consultation;
pub mod viewer;

pub use config::*;
pub use error::*;

pub use consultation::*;
pub use viewer::*;
