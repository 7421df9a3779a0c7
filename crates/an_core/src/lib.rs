pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use config::NewsConfig;
pub use error::Error;
pub use models::SummaryTransport;
pub use storage::KeyValueStore;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

/// Returned whenever no summary text can be produced.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

/// Returned by the weekly insight when the remote service gives nothing back.
pub const INSIGHT_UNAVAILABLE: &str = "Insight unavailable.";
