//! Required-field validation shared by the letter and resume generators.
//!
//! A request moves `Empty → Validated → Rendered`. `validate()` is the only way
//! to obtain a `Validated` handle, and the renderers only accept that handle,
//! so an incomplete record can never reach a template. A rejected request is
//! terminal: the caller re-supplies data and starts over.

use serde::Serialize;
use thiserror::Error;

/// Generation refused because one or more required fields are blank.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// Errors from the document generators.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
}

/// A request whose required fields have been checked.
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Validated<'a, T> {
    pub fn get(&self) -> &'a T {
        self.0
    }
}

impl<T: ?Sized> std::ops::Deref for Validated<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

pub trait Validate {
    /// Names of required fields that are empty, in declaration order.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn validate(&self) -> Result<Validated<'_, Self>, ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(Validated(self))
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Collects the names of blank values from `(name, value)` pairs.
pub fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pair {
        a: String,
        b: String,
    }

    impl Validate for Pair {
        fn missing_fields(&self) -> Vec<&'static str> {
            blank_fields(&[("a", &self.a), ("b", &self.b)])
        }
    }

    #[test]
    fn test_complete_record_validates() {
        let pair = Pair {
            a: "x".to_string(),
            b: "y".to_string(),
        };
        let validated = pair.validate().unwrap();
        assert_eq!(validated.a, "x");
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let pair = Pair {
            a: "   ".to_string(),
            b: "y".to_string(),
        };
        let err = pair.validate().unwrap_err();
        assert_eq!(err.missing, vec!["a"]);
    }

    #[test]
    fn test_error_message_lists_every_missing_field() {
        let pair = Pair {
            a: String::new(),
            b: String::new(),
        };
        let err = pair.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required fields: a, b");
    }
}
