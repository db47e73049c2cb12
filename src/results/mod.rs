//! @ai:module:intent Benchmark result records and their discovery on disk
//! @ai:module:layer domain
//! @ai:module:public_api Record, ResultMap, ResultLoader, task_value

pub mod extract;
pub mod loader;
pub mod record;

pub use extract::task_value;
pub use loader::{group_id_for, DEFAULT_GROUP, ResultLoader, ResultLoaderTrait, ResultRun};
pub use record::{RawValue, Record, ResultFile, ResultMap, RunEnvelope};
