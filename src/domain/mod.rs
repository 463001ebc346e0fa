pub mod booking;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod listing;

pub use catalog::{Catalog, CatalogError};
pub use filter::{resolve, AiMatches, ClassicCriteria, DerivedView, FilterInputs, FilterSelection};
pub use listing::{Category, Listing};
