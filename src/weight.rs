//! Weight values and validation.
//!
//! A weight reporter is called once per candidate and returns a host [`Value`].
//! [`evaluate`] turns those into a plain `Vec<f64>` up front, before any random draw,
//! so that a bad weight is reported the same way no matter what the generator would
//! have produced.

use std::fmt;

use crate::error::SampleError;

/// A value as returned by a host weight reporter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    /// The host's "no agent" value.
    Nobody,
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Nobody => f.write_str("nobody"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Self::Number(f64::from(x))
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Self::Number(x as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Check a single reporter result and return it as a weight.
///
/// `-0.0` is accepted and treated as zero.
pub fn validate(raw: &Value) -> Result<f64, SampleError> {
    let w = match raw {
        Value::Number(x) => *x,
        other => return Err(SampleError::NonNumericWeight(other.clone())),
    };
    if !w.is_finite() {
        return Err(SampleError::NonFiniteWeight(w));
    }
    if w < 0.0 {
        return Err(SampleError::NegativeWeight(w));
    }
    Ok(w)
}

/// Evaluate the reporter once per item, in order, and validate every result.
///
/// Stops at the first invalid weight; later items are not reported on.
pub fn evaluate<T, F>(items: &[T], mut reporter: F) -> Result<Vec<f64>, SampleError>
where
    F: FnMut(&T) -> Value,
{
    let mut weights = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match validate(&reporter(item)) {
            Ok(w) => weights.push(w),
            Err(e) => {
                tracing::debug!(index = i, error = %e, "weight validation failed");
                return Err(e);
            }
        }
    }
    Ok(weights)
}
