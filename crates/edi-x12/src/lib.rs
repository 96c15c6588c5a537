#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

//! # edi-x12
//!
//! Outbound X12 834 (Benefit Enrollment and Maintenance) segments: the
//! segment model, builders with per-segment validation, and rendering to the
//! delimited wire format.
//!
//! Segment kinds are data. Each kind is a [`SegmentSpec`] describing its
//! elements (position, name, coded or text, required, length bounds, fixed
//! width, defaults) and its cross-field rules. A single [`SegmentBuilder`]
//! drives every kind; typed wrappers such as [`segments::BgnBuilder`] add
//! domain-named setters.
//!
//! ## Example Usage
//!
//! ```rust
//! use edi_x12::{Context, segments::IsaBuilder};
//!
//! let mut isa = IsaBuilder::new();
//! isa.sender_id("FASTCHKN").unwrap()
//!     .receiver_id("MICHGVEDI").unwrap()
//!     .date("230801").unwrap()
//!     .time("1200").unwrap()
//!     .control_number("000000001").unwrap()
//!     .component_separator(":").unwrap();
//! let segment = isa.build().unwrap();
//!
//! let line = edi_x12::render_segment(&segment, Some(&Context::default())).unwrap();
//! assert_eq!(
//!     line,
//!     "ISA*00*          *00*          *ZZ*FASTCHKN       *ZZ*MICHGVEDI      *230801*1200*^*00501*000000001*0*P*:~\n"
//! );
//! ```

pub mod builder;
pub mod context;
pub mod document;
pub mod envelope;
pub mod segment;
pub mod segments;
pub mod serializer;
pub mod spec;
pub mod syntax;
pub mod text;

pub use builder::SegmentBuilder;
pub use context::{Context, ContextConfig};
pub use document::{BuildReport, DocumentSpec, SegmentIssue};
pub use envelope::{
    ControlNumberGenerator, Envelope, FileControlNumberGenerator, MemoryControlNumberGenerator,
    TransactionSet, validate_envelope,
};
pub use segment::{Element, Segment};
pub use serializer::{X12Serializer, check_reserved, render, render_segment};
pub use spec::{ContextValue, ElementKind, ElementSpec, Profile, Rule, SegmentSpec};
pub use syntax::{
    Delimiters, ElementSeparator, LineTerminator, RepetitionSeparator, SegmentTerminator,
    SubElementSeparator,
};

use thiserror::Error;

/// Why a single element failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Required,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    WrongLength { expected: usize, actual: usize },
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Self::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "must be exactly {expected} characters (got {actual})")
            }
        }
    }
}

/// Precondition failures while rendering. These indicate caller bugs, not bad
/// field data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("{segment}: no context attached, cannot render")]
    ContextMissing { segment: String },

    #[error("{segment}: no elements to render")]
    NoElements { segment: String },

    #[error("{reference} contains '{character}', which is a delimiter")]
    ReservedCharacter { reference: String, character: char },
}

/// Errors that can occur when building, validating or rendering segments
#[derive(Error, Debug)]
pub enum Error {
    #[error("{reference} ({name}) {reason}")]
    Validation {
        reference: String,
        name: &'static str,
        reason: Reason,
    },

    #[error("{reference} ({name}) is invalid: {source}")]
    InvalidCode {
        reference: String,
        name: &'static str,
        #[source]
        source: edi_x12_codes::Error,
    },

    #[error("{segment}: {message}")]
    CrossField {
        segment: &'static str,
        message: String,
    },

    #[error("{segment} has no element '{element}'")]
    UnknownElement {
        segment: &'static str,
        element: String,
    },

    #[error("Unknown segment: {0}")]
    UnknownSegment(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Envelope error: {0}")]
    Envelope(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a validation error for one element.
    pub fn validation(spec: &ElementSpec, segment: &str, reason: Reason) -> Self {
        Self::Validation {
            reference: spec.reference(segment),
            name: spec.name,
            reason,
        }
    }

    /// Build a cross-field rule error.
    pub fn cross_field(segment: &'static str, message: impl Into<String>) -> Self {
        Self::CrossField {
            segment,
            message: message.into(),
        }
    }

    /// Build an unknown-element error.
    pub fn unknown_element(segment: &'static str, element: impl Into<String>) -> Self {
        Self::UnknownElement {
            segment,
            element: element.into(),
        }
    }

    /// Whether this is a recoverable field validation failure, as opposed to
    /// a configuration, state or IO problem.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidCode { .. }
                | Self::CrossField { .. }
                | Self::UnknownElement { .. }
        )
    }

    /// The element reference (e.g. `BGN02`) this error is about, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Validation { reference, .. } | Self::InvalidCode { reference, .. } => {
                Some(reference)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_element() {
        let err = Error::Validation {
            reference: "BGN02".to_string(),
            name: "Reference Identification",
            reason: Reason::Required,
        };
        assert_eq!(err.to_string(), "BGN02 (Reference Identification) is required");
        assert!(err.is_validation());
        assert_eq!(err.reference(), Some("BGN02"));
    }

    #[test]
    fn test_render_errors_are_not_validation() {
        let err: Error = RenderError::ContextMissing {
            segment: "ISA".to_string(),
        }
        .into();
        assert!(!err.is_validation());
        assert!(err.to_string().contains("no context"));
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            Reason::TooLong { max: 80, actual: 81 }.to_string(),
            "must be at most 80 characters (got 81)"
        );
        assert_eq!(
            Reason::WrongLength {
                expected: 8,
                actual: 6
            }
            .to_string(),
            "must be exactly 8 characters (got 6)"
        );
    }
}
