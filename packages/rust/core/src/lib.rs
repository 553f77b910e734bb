//! Pipeline orchestration: feed → extraction → classification → sort → output.

pub mod fetch;
pub mod pipeline;
pub mod sort;

pub use fetch::PageFetcher;
pub use pipeline::{ProgressReporter, RunResult, SilentProgress, run};
