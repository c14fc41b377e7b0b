//! Configuration loading for pay scheme presets.
//!
//! Presets let callers reference a pay scheme by name instead of spelling
//! out its parameters; they are loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded payroll config: {}", config.config().payroll().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollMetadata, SchemeConfig};
