pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod progress;
pub mod session;
pub mod srs;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validation;

pub use error::{DrillError, Result};
