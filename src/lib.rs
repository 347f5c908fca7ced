pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::lambda::LambdaConfig;

#[cfg(feature = "lambda")]
pub use adapters::dynamodb::DynamoStore;
pub use adapters::{
    clock::{FixedClock, LocalClock},
    local_file::JsonFileStore,
    memory::MemoryStore,
};
pub use crate::core::{read_count::ReadVisitCount, write_record::WriteVisitRecord};
pub use domain::model::{ApiResponse, VisitRecord, VisitsCount};
pub use domain::ports::{Clock, Handler, VisitStore};
pub use utils::error::{Result, VisitError};
