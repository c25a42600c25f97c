//! Capability surface a host runner's test handles must expose.
//!
//! The adapter never introspects runner internals; everything it needs is
//! declared here and checked at this boundary.

use serde_json::Value;

/// A completed (or starting) test as seen by the host runner.
pub trait TestHandle {
    /// Dotted identifier, e.g. `tests.api.LoginSuite.test_basic_login`.
    fn address(&self) -> &str;

    /// Short one-line human description, when the host has one.
    fn short_description(&self) -> Option<&str>;

    /// The underlying test method, when the host can locate it.
    fn method(&self) -> Option<&dyn TestMethod>;
}

/// The test method behind a handle.
pub trait TestMethod {
    fn name(&self) -> &str;

    /// Raw documentation text: summary line plus indented body.
    fn doc(&self) -> Option<&str>;

    /// Named attribute attached to the method. Supported value shapes are a
    /// string or a sequence of strings; the resolver rejects anything else.
    fn attribute(&self, name: &str) -> Option<Value>;
}
