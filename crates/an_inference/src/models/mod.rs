pub mod huggingface;
pub mod offline;

pub use huggingface::HuggingFaceTransport;
pub use offline::OfflineTransport;
