pub mod etl;
pub mod lookup;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{HeaderSet, InputRow, LookupBatch, LookupResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
