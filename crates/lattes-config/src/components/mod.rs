//! Configuration components, one per report family

pub mod paths;
pub mod scoring;
pub mod similarity;

pub use paths::*;
pub use scoring::*;
pub use similarity::*;
