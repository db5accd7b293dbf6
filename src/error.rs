use std::fmt;

use crate::objects::{Object, ObjectType};

pub type PdfResult<T> = anyhow::Result<T>;

#[derive(Debug)]
pub enum ParseError {
    UnexpectedEof,
    MismatchedObjectType {
        expected: ObjectType,
        found: Object,
    },
    MismatchedObjectTypeAny {
        expected: &'static [ObjectType],
        found: Object,
    },
    MissingRequiredKey {
        key: &'static str,
    },
    ArrayOfInvalidLength {
        expected: usize,
        found: Vec<Object>,
    },
    UnrecognizedVariant {
        found: String,
        ty: &'static str,
    },
    MismatchedTypeKey {
        expected: &'static str,
        found: String,
    },
    /// A construct that is valid PDF, but that this crate does not implement.
    /// Fatal in the same way malformed input is; the distinction exists for
    /// diagnostics
    UnsupportedFeature {
        feature: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self)
    }
}

impl std::error::Error for ParseError {}
