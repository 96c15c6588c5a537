//! X12 wire-format rendering
//!
//! A segment renders as its identifier followed by each element up to the
//! last present one, separated by the element separator. Absent elements
//! before that point become empty fields; trailing absent elements are
//! dropped. The segment terminator and line terminator close the line.

use crate::context::Context;
use crate::segment::Segment;
use crate::spec::ContextValue;
use crate::syntax::Delimiters;
use crate::{RenderError, Result};
use std::io::Write;

/// Index of the last present element, if any
pub fn last_non_null_index(elements: &[Option<&str>]) -> Option<usize> {
    elements.iter().rposition(Option::is_some)
}

/// Render one segment line.
pub fn render(identifier: &str, elements: &[Option<&str>], delimiters: &Delimiters) -> String {
    let separator = delimiters.element.as_char();
    let mut line = String::from(identifier);
    if let Some(last) = last_non_null_index(elements) {
        for element in &elements[..=last] {
            line.push(separator);
            line.push_str(element.unwrap_or_default());
        }
    }
    line.push(delimiters.segment.as_char());
    line.push_str(delimiters.line.as_str());
    line
}

/// Reject element values containing a character reserved by `delimiters`.
/// ISA11 and ISA16 carry the separators themselves and are skipped.
///
/// # Errors
///
/// Returns [`RenderError::ReservedCharacter`] naming the first offending
/// element.
pub fn check_reserved(segment: &Segment, delimiters: &Delimiters) -> Result<()> {
    let spec = segment.spec();
    for (element, value) in spec.elements.iter().zip(segment.values()) {
        if matches!(
            element.context,
            Some(ContextValue::ComponentSeparator | ContextValue::RepetitionSeparator)
        ) {
            continue;
        }
        let Some(character) = value.and_then(|v| v.chars().find(|&c| delimiters.is_special(c)))
        else {
            continue;
        };
        return Err(RenderError::ReservedCharacter {
            reference: element.reference(spec.id),
            character,
        }
        .into());
    }
    Ok(())
}

/// Render a built segment with the given context's delimiters.
///
/// # Errors
///
/// Returns [`RenderError::ContextMissing`] without a context,
/// [`RenderError::NoElements`] when the segment has no elements and
/// [`RenderError::ReservedCharacter`] when a value contains a delimiter.
pub fn render_segment(segment: &Segment, context: Option<&Context>) -> Result<String> {
    let id = segment.segment_identifier();
    let context = context.ok_or_else(|| RenderError::ContextMissing {
        segment: id.to_string(),
    })?;
    if segment.element_values().is_empty() {
        return Err(RenderError::NoElements {
            segment: id.to_string(),
        }
        .into());
    }
    check_reserved(segment, context.delimiters())?;
    let line = render(id, &segment.values(), context.delimiters());
    tracing::trace!(segment = id, line = %line.trim_end(), "rendered segment");
    Ok(line)
}

/// Serializer for sequences of X12 segments
#[derive(Debug, Clone, Default)]
pub struct X12Serializer {
    delimiters: Delimiters,
}

impl X12Serializer {
    /// Create a serializer with explicit delimiters
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    /// Create a serializer using a context's delimiters
    pub fn from_context(context: &Context) -> Self {
        Self::new(*context.delimiters())
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Render one segment, ignoring any context attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoElements`] for a segment without elements and
    /// [`RenderError::ReservedCharacter`] when a value contains a delimiter.
    pub fn serialize_segment(&self, segment: &Segment) -> Result<String> {
        if segment.element_values().is_empty() {
            return Err(RenderError::NoElements {
                segment: segment.segment_identifier().to_string(),
            }
            .into());
        }
        check_reserved(segment, &self.delimiters)?;
        Ok(segment.render_with(&self.delimiters))
    }

    /// Render segments in order into one document.
    ///
    /// # Errors
    ///
    /// Fails on the first segment that cannot be rendered.
    pub fn serialize(&self, segments: &[Segment]) -> Result<String> {
        let mut out = String::new();
        for segment in segments {
            out.push_str(&self.serialize_segment(segment)?);
        }
        tracing::debug!(segments = segments.len(), bytes = out.len(), "serialized document");
        Ok(out)
    }

    /// Render segments into a writer.
    ///
    /// # Errors
    ///
    /// Propagates render failures and IO errors.
    pub fn write_to<W: Write>(&self, segments: &[Segment], writer: &mut W) -> Result<()> {
        for segment in segments {
            writer.write_all(self.serialize_segment(segment)?.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}
