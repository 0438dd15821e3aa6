pub mod analyzer;
pub mod binder;
pub mod config;
pub mod error;
pub mod record;
pub mod reporter;

pub use binder::{Binder, RunSummary};
pub use config::Config;
pub use error::{BindError, EmptyInput};
pub use record::{Record, RecordParser};
pub use reporter::Reporter;

pub type Result<T> = anyhow::Result<T>;
