use thiserror::Error;

/// Fatal collection errors. Per-test lookup failures are not errors — they
/// degrade to empty values; what lands here aborts the run.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A configured test attribute has a shape the wire format cannot carry.
    /// Signals a test-authoring bug; silently dropping it would corrupt the
    /// reported results.
    #[error("do not know what to do with test attr \"{attr}\" on method {method}")]
    MalformedAttribute { attr: String, method: String },
}
