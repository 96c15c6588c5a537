//! Generic segment builder and validation
//!
//! Every segment kind is built through [`SegmentBuilder`], driven by its
//! [`SegmentSpec`]. Values are checked in two stages: coded values are
//! resolved as they are set, and presence, length and cross-field rules run
//! when the segment is built.

use crate::context::Context;
use crate::segment::{Element, Segment};
use crate::spec::{ElementKind, ElementSpec, Profile, SegmentSpec};
use crate::text::pad_right;
use crate::{Error, Reason, Result};
use edi_x12_codes::{CodeEnum, IntoCode};

/// Builder for one segment of any kind
#[derive(Debug, Clone)]
pub struct SegmentBuilder {
    spec: &'static SegmentSpec,
    profile: Option<&'static Profile>,
    values: Vec<Option<Element>>,
}

impl SegmentBuilder {
    /// Create a builder with the literal element defaults applied.
    pub fn new(spec: &'static SegmentSpec) -> Self {
        let mut builder = Self {
            spec,
            profile: None,
            values: vec![None; spec.len()],
        };
        for element in spec.elements {
            if let Some(default) = element.default {
                builder.apply_default(element, default);
            }
        }
        builder
    }

    /// Create a builder with literal defaults and values drawn from `context`.
    pub fn with_context(spec: &'static SegmentSpec, context: &Context) -> Self {
        let mut builder = Self::new(spec);
        for element in spec.elements {
            if let Some(value) = element.context.and_then(|source| context.value(source)) {
                builder.apply_default(element, &value);
            }
        }
        builder
    }

    /// Create a builder for a profile, applying its presets.
    ///
    /// # Errors
    ///
    /// Fails when a preset does not resolve against its element.
    pub fn for_profile(profile: &'static Profile, context: Option<&Context>) -> Result<Self> {
        let mut builder = match context {
            Some(context) => Self::with_context(profile.segment, context),
            None => Self::new(profile.segment),
        };
        builder.profile = Some(profile);
        for &(position, value) in profile.presets {
            builder.set(position, value)?;
        }
        Ok(builder)
    }

    fn apply_default(&mut self, element: &'static ElementSpec, value: &str) {
        if let Err(error) = self.set(element.position, value) {
            tracing::debug!(
                element = %element.reference(self.spec.id),
                %error,
                "default not applied"
            );
        }
    }

    pub fn spec(&self) -> &'static SegmentSpec {
        self.spec
    }

    pub fn profile(&self) -> Option<&'static Profile> {
        self.profile
    }

    fn element(&self, position: usize) -> Result<&'static ElementSpec> {
        self.spec
            .element(position)
            .ok_or_else(|| Error::unknown_element(self.spec.id, format!("{position:02}")))
    }

    /// Set the element at a 1-based position.
    ///
    /// Text is stored as given, except that fixed-width elements are padded
    /// or truncated to their width. Coded elements resolve the input through
    /// their code list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] for a position outside the segment
    /// and [`Error::InvalidCode`] when a coded value does not resolve.
    pub fn set(&mut self, position: usize, value: impl AsRef<str>) -> Result<&mut Self> {
        let element = self.element(position)?;
        let value = value.as_ref();
        let stored = match element.kind {
            ElementKind::Text => match element.width {
                Some(width) => Element::Text(pad_right(value, width)),
                None => Element::Text(value.to_string()),
            },
            ElementKind::Coded(list) => {
                let code = list.resolve(value).map_err(|source| Error::InvalidCode {
                    reference: element.reference(self.spec.id),
                    name: element.name,
                    source,
                })?;
                Element::Code(code)
            }
        };
        self.values[position - 1] = Some(stored);
        Ok(self)
    }

    /// Set an element by field key, reference (`BGN02`) or position (`02`).
    ///
    /// # Errors
    ///
    /// As [`SegmentBuilder::set`], plus [`Error::UnknownElement`] for an
    /// unknown key.
    pub fn set_field(&mut self, key: &str, value: impl AsRef<str>) -> Result<&mut Self> {
        let element = self
            .spec
            .element_by_key(key)
            .ok_or_else(|| Error::unknown_element(self.spec.id, key))?;
        self.set(element.position, value)
    }

    /// Set a coded element from a member of its code list, or from text
    /// resolved through that list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the element is not coded with
    /// `T` and [`Error::InvalidCode`] when the text does not resolve.
    pub fn set_code<T: CodeEnum>(
        &mut self,
        position: usize,
        value: impl IntoCode<T>,
    ) -> Result<&mut Self> {
        let element = self.element(position)?;
        let reference = element.reference(self.spec.id);
        match element.kind {
            ElementKind::Coded(list) if list.enumeration == T::ENUMERATION => {}
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "{reference} ({}) does not take {} values",
                    element.name,
                    T::ENUMERATION
                )));
            }
        }
        let member = value.into_code().map_err(|source| Error::InvalidCode {
            reference,
            name: element.name,
            source,
        })?;
        self.values[position - 1] = Some(Element::Code(member.to_code()));
        Ok(self)
    }

    /// Set the element when `value` is present, clear it otherwise.
    ///
    /// # Errors
    ///
    /// As [`SegmentBuilder::set`].
    pub fn set_opt(&mut self, position: usize, value: Option<impl AsRef<str>>) -> Result<&mut Self> {
        match value {
            Some(value) => self.set(position, value),
            None => self.clear(position),
        }
    }

    /// Remove the value at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] for a position outside the segment.
    pub fn clear(&mut self, position: usize) -> Result<&mut Self> {
        self.element(position)?;
        self.values[position - 1] = None;
        Ok(self)
    }

    /// Current text of the element at a 1-based position
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .and_then(Option::as_ref)
            .map(Element::as_str)
    }

    /// Every problem that would stop [`SegmentBuilder::build`], in check order:
    /// presence, length, segment rules, then profile rules.
    pub fn issues(&self) -> Vec<Error> {
        let id = self.spec.id;
        let mut issues = Vec::new();

        for element in self.spec.elements {
            let value = self.get(element.position).filter(|v| !v.trim().is_empty());
            match value {
                None if element.required => {
                    issues.push(Error::validation(element, id, Reason::Required));
                }
                None => {}
                Some(value) => {
                    if let Err(error) = element.check_length(id, value) {
                        issues.push(error);
                    }
                }
            }
        }

        let profile_rules = self.profile.map(|p| p.rules).unwrap_or_default();
        for rule in self.spec.rules.iter().chain(profile_rules) {
            if let Err(error) = rule.check(self.spec, &self.values) {
                issues.push(error);
            }
        }
        issues
    }

    /// Check without consuming the builder.
    ///
    /// # Errors
    ///
    /// Returns the first issue found.
    pub fn validate(&self) -> Result<()> {
        match self.issues().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Validate and produce the segment.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the builder is consumed either way.
    pub fn build(self) -> Result<Segment> {
        if let Err(error) = self.validate() {
            tracing::debug!(segment = self.spec.id, %error, "segment rejected");
            return Err(error);
        }
        tracing::debug!(
            segment = self.spec.id,
            profile = self.profile.map(|p| p.name),
            "segment built"
        );
        Ok(Segment::new(self.spec, self.profile, self.values))
    }
}
