use crate::Result;

/// Persistent string-keyed byte store sitting underneath the TTL cache.
///
/// Implementations are synchronous: every call is a single atomic read or
/// write, so callers never need to hold a lock across an await point.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces whatever is stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
