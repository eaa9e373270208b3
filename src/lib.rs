pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use api::{build_router, AppState};
pub use config::AppConfig;
pub use core::pipeline::SolarPipeline;
pub use utils::error::{Result, SolarError};
