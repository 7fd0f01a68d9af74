pub mod catalog;
pub mod exercise;
pub mod profile;
pub mod review;

pub use catalog::{Catalog, PhraseCatalogEntry};
pub use exercise::{Direction, Exercise};
pub use profile::LearnerProfile;
pub use review::{is_due, ReviewSlot, ReviewState};
