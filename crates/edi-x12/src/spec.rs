//! Segment kind descriptors
//!
//! A [`SegmentSpec`] is a static table describing one X12 segment: its
//! elements in order and the cross-field [`Rule`]s they obey. A [`Profile`]
//! narrows a segment to one usage (for example the member identification
//! `REF`), presetting qualifiers and adding rules.

use crate::segment::Element;
use crate::segments;
use crate::{Error, Reason, Result};
use edi_x12_codes::{CodeEnum, CodeList, normalize};

/// Whether an element carries free text or a member of a code list
#[derive(Debug, Clone, Copy)]
pub enum ElementKind {
    Text,
    Coded(CodeList),
}

/// Values an element can take from the document [`Context`](crate::Context)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextValue {
    /// Document date in the configured date format
    Date,
    /// Document time in the configured time format
    Time,
    /// ISA09, `YYMMDD`
    InterchangeDate,
    /// ISA10, `HHMM`
    InterchangeTime,
    SenderId,
    ReceiverId,
    SenderQualifier,
    ReceiverQualifier,
    InterchangeControlNumber,
    GroupControlNumber,
    TransactionSetControlNumber,
    UsageIndicator,
    ComponentSeparator,
    RepetitionSeparator,
    ImplementationReference,
}

/// Description of one element of a segment
#[derive(Debug, Clone, Copy)]
pub struct ElementSpec {
    /// 1-based position within the segment
    pub position: usize,
    /// Field key used by documents and `set_field`
    pub key: &'static str,
    /// X12 element name, used in error messages
    pub name: &'static str,
    pub kind: ElementKind,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// Fixed width; values are padded or truncated when set
    pub width: Option<usize>,
    /// Literal default applied by every builder
    pub default: Option<&'static str>,
    /// Default taken from the context when one is supplied
    pub context: Option<ContextValue>,
}

impl ElementSpec {
    pub const fn text(position: usize, key: &'static str, name: &'static str) -> Self {
        Self {
            position,
            key,
            name,
            kind: ElementKind::Text,
            required: false,
            min_len: None,
            max_len: None,
            width: None,
            default: None,
            context: None,
        }
    }

    pub const fn coded<T: CodeEnum>(position: usize, key: &'static str, name: &'static str) -> Self {
        Self {
            kind: ElementKind::Coded(CodeList::of::<T>()),
            ..Self::text(position, key, name)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn min(self, min_len: usize) -> Self {
        Self {
            min_len: Some(min_len),
            ..self
        }
    }

    pub const fn max(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }

    pub const fn exactly(self, len: usize) -> Self {
        self.min(len).max(len)
    }

    pub const fn fixed_width(self, width: usize) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub const fn default_value(self, value: &'static str) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    pub const fn from_context(self, source: ContextValue) -> Self {
        Self {
            context: Some(source),
            ..self
        }
    }

    /// Element reference such as `BGN02`
    pub fn reference(&self, segment: &str) -> String {
        format!("{segment}{:02}", self.position)
    }

    /// Check the length bounds of a present, non-blank value.
    pub(crate) fn check_length(&self, segment: &str, value: &str) -> Result<()> {
        if self.width.is_some() {
            return Ok(());
        }
        let actual = value.chars().count();
        let reason = match (self.min_len, self.max_len) {
            (Some(min), Some(max)) if min == max && actual != min => Some(Reason::WrongLength {
                expected: min,
                actual,
            }),
            (Some(min), _) if actual < min => Some(Reason::TooShort { min, actual }),
            (_, Some(max)) if actual > max => Some(Reason::TooLong { max, actual }),
            _ => None,
        };
        match reason {
            Some(reason) => Err(Error::validation(self, segment, reason)),
            None => Ok(()),
        }
    }
}

/// Cross-field constraint over the element positions of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least one of the positions must carry a value.
    AtLeastOne(&'static [usize]),
    /// If any of the positions carries a value, all of them must.
    Paired(&'static [usize]),
    /// `then` is required whenever `when` carries a value.
    Conditional { when: usize, then: usize },
    /// The position must carry a value.
    Required(usize),
}

impl Rule {
    /// Check this rule against built element values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossField`] for multi-element rules and
    /// [`Error::Validation`] for [`Rule::Required`].
    pub fn check(&self, spec: &SegmentSpec, values: &[Option<Element>]) -> Result<()> {
        let present = |position: usize| {
            values
                .get(position.wrapping_sub(1))
                .and_then(Option::as_ref)
                .is_some_and(|element| !element.as_str().trim().is_empty())
        };
        match *self {
            Rule::AtLeastOne(positions) => {
                if positions.iter().any(|&p| present(p)) {
                    Ok(())
                } else {
                    Err(Error::cross_field(
                        spec.id,
                        format!("at least one of {} must be present", spec.describe(positions)),
                    ))
                }
            }
            Rule::Paired(positions) => {
                let count = positions.iter().filter(|&&p| present(p)).count();
                if count == 0 || count == positions.len() {
                    Ok(())
                } else {
                    Err(Error::cross_field(
                        spec.id,
                        format!("{} must be used together", spec.describe(positions)),
                    ))
                }
            }
            Rule::Conditional { when, then } => {
                if !present(when) || present(then) {
                    Ok(())
                } else {
                    Err(Error::cross_field(
                        spec.id,
                        format!(
                            "{} is required when {} is present",
                            spec.describe(&[then]),
                            spec.describe(&[when])
                        ),
                    ))
                }
            }
            Rule::Required(position) => {
                if present(position) {
                    return Ok(());
                }
                match spec.element(position) {
                    Some(element) => Err(Error::validation(element, spec.id, Reason::Required)),
                    None => Err(Error::unknown_element(spec.id, format!("{position:02}"))),
                }
            }
        }
    }
}

/// Static description of one segment kind
#[derive(Debug)]
pub struct SegmentSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub elements: &'static [ElementSpec],
    pub rules: &'static [Rule],
}

impl SegmentSpec {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at a 1-based position
    pub fn element(&self, position: usize) -> Option<&'static ElementSpec> {
        let elements: &'static [ElementSpec] = self.elements;
        position.checked_sub(1).and_then(|i| elements.get(i))
    }

    /// Find an element by field key, reference (`BGN02`) or bare position (`02`).
    pub fn element_by_key(&self, key: &str) -> Option<&'static ElementSpec> {
        let elements: &'static [ElementSpec] = self.elements;
        let trimmed = key.trim();
        let digits = match (trimmed.get(..self.id.len()), trimmed.get(self.id.len()..)) {
            (Some(prefix), Some(rest)) if prefix.eq_ignore_ascii_case(self.id) => rest,
            _ => trimmed,
        };
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return digits.parse().ok().and_then(|p| self.element(p));
        }
        let wanted = normalize(trimmed);
        elements.iter().find(|e| normalize(e.key) == wanted)
    }

    fn describe(&self, positions: &[usize]) -> String {
        let parts: Vec<String> = positions
            .iter()
            .map(|&p| match self.element(p) {
                Some(element) => format!("{} ({})", element.reference(self.id), element.name),
                None => format!("{}{p:02}", self.id),
            })
            .collect();
        match parts.as_slice() {
            [first, second] => format!("{first} and {second}"),
            _ => parts.join(", "),
        }
    }
}

/// A named usage of a segment with preset values and extra rules
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub segment: &'static SegmentSpec,
    /// Values applied before the caller's, as `(position, value)`
    pub presets: &'static [(usize, &'static str)],
    pub rules: &'static [Rule],
}

/// Every segment kind, in transaction order.
pub fn all() -> [&'static SegmentSpec; 16] {
    [
        &segments::ISA,
        &segments::GS,
        &segments::ST,
        &segments::BGN,
        &segments::DTP,
        &segments::N1,
        &segments::INS,
        &segments::REF,
        &segments::NM1,
        &segments::N3,
        &segments::N4,
        &segments::DMG,
        &segments::HD,
        &segments::SE,
        &segments::GE,
        &segments::IEA,
    ]
}

/// Find a segment kind by identifier (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::UnknownSegment`] for identifiers outside the 834 set.
pub fn find(id: &str) -> Result<&'static SegmentSpec> {
    let wanted = id.trim();
    all()
        .into_iter()
        .find(|spec| spec.id.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownSegment(id.to_string()))
}

/// Every segment profile.
pub fn profiles() -> &'static [&'static Profile] {
    segments::PROFILES
}

/// Find a profile by segment identifier and name. Names are compared after
/// normalization, so `member-identification-number` matches.
///
/// # Errors
///
/// Returns [`Error::UnknownSegment`] when the segment has no such profile.
pub fn find_profile(segment: &str, name: &str) -> Result<&'static Profile> {
    let wanted = normalize(name);
    profiles()
        .iter()
        .copied()
        .find(|p| p.segment.id.eq_ignore_ascii_case(segment.trim()) && normalize(p.name) == wanted)
        .ok_or_else(|| Error::UnknownSegment(format!("{segment} profile '{name}'")))
}
