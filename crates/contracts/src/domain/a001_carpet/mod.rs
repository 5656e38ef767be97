pub mod aggregate;
pub mod catalog;
pub mod seed;

pub use aggregate::{Carpet, CarpetId, LocalizedText};
pub use catalog::ItemCatalog;
