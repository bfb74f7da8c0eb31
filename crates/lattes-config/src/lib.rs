//! # Lattes Configuration
//!
//! Typed configuration for the Lattes toolkit, loaded from TOML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lattes_config::ConfigLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("lattes.toml")?;
//!     println!("{:?}", config.paths.candidate_dir);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod components;
mod config;
mod loader;

pub use components::*;
pub use config::*;
pub use loader::*;
