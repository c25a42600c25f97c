//! Test identity and attribute resolution.

use serde_json::Value;
use tracing::warn;

use crate::errors::CollectError;
use crate::handle::TestHandle;

/// Outcome of a best-effort lookup. `NotFound` is the recoverable case the
/// collector maps to an empty value; malformed shapes are a hard error and
/// never travel through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
}

impl<T> Resolution<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::NotFound => None,
        }
    }
}

/// Resolve the id the aggregation service keys this test by.
///
/// Reads the id-bearing attribute (name configurable, `id` by default) off
/// the test method, falling back to the method name when it is absent. An
/// unlocatable method degrades to `NotFound`.
pub fn resolve_test_id(test: &dyn TestHandle, id_attr: &str) -> Resolution<String> {
    let Some(method) = test.method() else {
        warn!(test = test.address(), "cannot get test method");
        return Resolution::NotFound;
    };

    match method.attribute(id_attr) {
        Some(Value::String(id)) => Resolution::Found(id),
        Some(Value::Number(id)) => Resolution::Found(id.to_string()),
        Some(other) => {
            warn!(
                method = method.name(),
                attr = id_attr,
                value = %other,
                "test id attr has an unusable shape, using the method name"
            );
            Resolution::Found(method.name().to_string())
        }
        None => Resolution::Found(method.name().to_string()),
    }
}

/// Collect the configured (name, value) attribute pairs off the test method.
///
/// A string value yields one pair; a sequence of strings yields one pair per
/// element, all sharing the name. Empty values count as absent. Any other
/// shape is a test-authoring bug and fails the run.
pub fn resolve_attributes(
    test: &dyn TestHandle,
    names: &[String],
) -> Result<Resolution<Vec<(String, String)>>, CollectError> {
    if names.is_empty() {
        return Ok(Resolution::NotFound);
    }

    let Some(method) = test.method() else {
        warn!(test = test.address(), "cannot get test method");
        return Ok(Resolution::NotFound);
    };

    let mut pairs = Vec::new();
    for name in names {
        match method.attribute(name) {
            None | Some(Value::Null) => {}
            Some(Value::String(value)) => {
                if !value.is_empty() {
                    pairs.push((name.clone(), value));
                }
            }
            Some(Value::Array(values)) => {
                for value in values {
                    match value {
                        Value::String(value) => pairs.push((name.clone(), value)),
                        _ => {
                            return Err(CollectError::MalformedAttribute {
                                attr: name.clone(),
                                method: method.name().to_string(),
                            })
                        }
                    }
                }
            }
            Some(_) => {
                return Err(CollectError::MalformedAttribute {
                    attr: name.clone(),
                    method: method.name().to_string(),
                })
            }
        }
    }

    if pairs.is_empty() {
        Ok(Resolution::NotFound)
    } else {
        Ok(Resolution::Found(pairs))
    }
}
