pub mod list;
pub mod state;

pub use list::ConsultationsPage;
