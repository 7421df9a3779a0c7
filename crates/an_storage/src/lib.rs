use std::path::Path;
use std::sync::Arc;

use an_core::{Error, KeyValueStore, Result};

pub mod backends;
pub mod cache;
pub mod clock;

pub use backends::*;
pub use cache::{Cache, CacheEntry};
pub use clock::{Clock, ManualClock, SystemClock};

/// Directory used by the file backend when none is given.
pub const DEFAULT_CACHE_DIR: &str = ".ai-news-cache";

/// Builds a store from its CLI name (`memory` or `file`).
pub fn create_store(kind: &str, dir: Option<&Path>) -> Result<Arc<dyn KeyValueStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "file" => {
            let dir = dir.unwrap_or_else(|| Path::new(DEFAULT_CACHE_DIR));
            Ok(Arc::new(FileStore::open(dir)?))
        }
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {} (expected memory or file)",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_store, Cache, Clock, SystemClock};
}
