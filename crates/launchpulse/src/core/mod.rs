//! Core building blocks of the LaunchPulse platform
//!
//! The registry holds state, the aggregate module derives analytics from
//! its snapshots, and the seed module supplies the sample dataset.

mod aggregate;
mod error;
pub mod logging;
mod registry;
mod seed;
mod types;

pub use aggregate::*;
pub use error::*;
pub use logging::*;
pub use registry::*;
pub use seed::*;
pub use types::*;
