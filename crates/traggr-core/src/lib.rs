pub mod client;
pub mod collector;
pub mod config;
pub mod describe;
pub mod errors;
pub mod handle;
pub mod identity;
pub mod model;
pub mod traceback;

pub use client::AggrClient;
pub use collector::Collector;
pub use config::{RcConfig, SessionConfig, TraggrArgs};
pub use errors::CollectError;
pub use handle::{TestHandle, TestMethod};
pub use model::{FailureInfo, ResultRecord, TestOutcome};
pub use traceback::TracebackStyle;
