//! Built X12 segments

use crate::context::Context;
use crate::serializer;
use crate::spec::{Profile, SegmentSpec};
use crate::syntax::{Delimiters, LineTerminator};
use crate::{RenderError, Result};
use edi_x12_codes::Code;
use std::sync::Arc;

/// A single element value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Code(Code),
}

impl Element {
    pub fn as_str(&self) -> &str {
        match self {
            Element::Text(text) => text,
            Element::Code(code) => code.as_str(),
        }
    }

    /// The resolved code, for coded elements
    pub fn code(&self) -> Option<&Code> {
        match self {
            Element::Code(code) => Some(code),
            Element::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated segment
///
/// Element values are fixed once built. The only later change is attaching
/// the [`Context`] used for rendering.
#[derive(Debug, Clone)]
pub struct Segment {
    spec: &'static SegmentSpec,
    profile: Option<&'static Profile>,
    elements: Vec<Option<Element>>,
    context: Option<Arc<Context>>,
}

impl Segment {
    pub(crate) fn new(
        spec: &'static SegmentSpec,
        profile: Option<&'static Profile>,
        elements: Vec<Option<Element>>,
    ) -> Self {
        Self {
            spec,
            profile,
            elements,
            context: None,
        }
    }

    /// Wrap element values without running any validation.
    pub fn from_elements(spec: &'static SegmentSpec, elements: Vec<Option<Element>>) -> Self {
        Self::new(spec, None, elements)
    }

    pub fn spec(&self) -> &'static SegmentSpec {
        self.spec
    }

    pub fn profile(&self) -> Option<&'static Profile> {
        self.profile
    }

    /// Segment identifier, e.g. `ISA`
    pub fn segment_identifier(&self) -> &'static str {
        self.spec.id
    }

    pub fn element_values(&self) -> &[Option<Element>] {
        &self.elements
    }

    /// Element values as text, `None` for absent elements
    pub fn values(&self) -> Vec<Option<&str>> {
        self.elements
            .iter()
            .map(|element| element.as_ref().map(Element::as_str))
            .collect()
    }

    /// Element at a 1-based position
    pub fn element(&self, position: usize) -> Option<&Element> {
        position
            .checked_sub(1)
            .and_then(|i| self.elements.get(i))
            .and_then(Option::as_ref)
    }

    /// Text of the element at a 1-based position
    pub fn value(&self, position: usize) -> Option<&str> {
        self.element(position).map(Element::as_str)
    }

    /// Attach the context used by [`Segment::render`].
    pub fn attach_context(&mut self, context: Arc<Context>) -> &mut Self {
        self.context = Some(context);
        self
    }

    pub fn context(&self) -> Option<&Arc<Context>> {
        self.context.as_ref()
    }

    /// Render with the attached context's delimiters.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ContextMissing`] when no context is attached and
    /// [`RenderError::NoElements`] for a segment without elements.
    pub fn render(&self) -> Result<String> {
        let context = self.context.as_deref().ok_or_else(|| RenderError::ContextMissing {
            segment: self.spec.id.to_string(),
        })?;
        serializer::render_segment(self, Some(context))
    }

    /// Render with explicit delimiters, ignoring any attached context.
    pub fn render_with(&self, delimiters: &Delimiters) -> String {
        serializer::render(self.spec.id, &self.values(), delimiters)
    }
}

/// Compares identifier and element values; the attached context is ignored.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.spec.id == other.spec.id && self.elements == other.elements
    }
}

impl Eq for Segment {}

/// Renders without a line terminator, using the attached context's
/// delimiters when present.
impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut delimiters = self
            .context
            .as_ref()
            .map(|context| *context.delimiters())
            .unwrap_or_default();
        delimiters.line = LineTerminator::None;
        f.write_str(&self.render_with(&delimiters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{IeaBuilder, N3Builder};
    use crate::syntax::ElementSeparator;
    use crate::{Error, SubElementSeparator};
    use edi_x12_codes::{CodeEnum, EntityIdentifierCode};

    #[test]
    fn test_accessors() {
        let mut n3 = N3Builder::new();
        n3.address_line_1("1 Main St").unwrap();
        let segment = n3.build().unwrap();

        assert_eq!(segment.segment_identifier(), "N3");
        assert_eq!(segment.value(1), Some("1 Main St"));
        assert_eq!(segment.value(2), None);
        assert_eq!(segment.value(0), None);
        assert_eq!(segment.values(), vec![Some("1 Main St"), None]);
        assert_eq!(segment.to_string(), "N3*1 Main St~");
    }

    #[test]
    fn test_render_requires_context() {
        let mut iea = IeaBuilder::new();
        iea.functional_group_count("1").unwrap();
        iea.control_number("000000001").unwrap();
        let mut segment = iea.build().unwrap();

        let err = segment.render().unwrap_err();
        assert!(matches!(
            err,
            Error::Render(RenderError::ContextMissing { ref segment }) if segment == "IEA"
        ));
        assert!(!err.is_validation());

        let mut context = Context::default();
        let delimiters = Delimiters {
            element: ElementSeparator::Pipe,
            sub_element: SubElementSeparator::GreaterThan,
            ..Delimiters::default()
        };
        context.set_delimiters(delimiters).unwrap();
        segment.attach_context(Arc::new(context));
        assert_eq!(segment.render().unwrap(), "IEA|1|000000001~\n");
        assert_eq!(segment.to_string(), "IEA|1|000000001~");
    }

    #[test]
    fn test_equality_ignores_context() {
        let build = || {
            let mut n3 = N3Builder::new();
            n3.address_line_1("PO Box 7").unwrap();
            n3.build().unwrap()
        };
        let plain = build();
        let mut with_context = build();
        with_context.attach_context(Arc::new(Context::default()));
        assert_eq!(plain, with_context);
    }

    #[test]
    fn test_element_code_access() {
        let segment = Segment::from_elements(
            &crate::segments::N1,
            vec![
                Some(Element::Code(
                    EntityIdentifierCode::PlanSponsor.to_code(),
                )),
                Some(Element::Text("ACME".to_string())),
            ],
        );
        let code = segment.element(1).and_then(Element::code).unwrap();
        assert_eq!(code.code, "P5");
        assert_eq!(code.description, "Plan Sponsor");
        assert!(segment.element(2).and_then(Element::code).is_none());
    }
}
