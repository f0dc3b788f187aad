pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, RunConfig};
pub use crate::core::{etl::EtlEngine, lookup::RecallClient, pipeline::RecallPipeline};
pub use crate::domain::model::{HeaderSet, InputRow, LookupBatch, LookupResult};
pub use crate::utils::error::{EtlError, Result};
