//! Declarative segment documents
//!
//! A document names a context and a list of segments by kind, optional
//! profile and field values. Fields are keyed by the element's field key
//! (`reference_id`), its reference (`BGN02`) or its position (`02`).
//!
//! ```yaml
//! context:
//!   sender_id: SENDERNAME
//!   receiver_id: RECEIVERNAME
//!   document_date: 2023-04-15
//! segments:
//!   - id: BGN
//!     fields:
//!       purpose_code: original
//!       reference_id: REF-0001
//!   - id: N1
//!     profile: plan_sponsor
//!     fields:
//!       name: ACME CORP
//! ```

use crate::context::{Context, ContextConfig};
use crate::envelope::{Envelope, TransactionSet};
use crate::segment::Segment;
use crate::serializer::check_reserved;
use crate::{Error, Result, SegmentBuilder, spec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

fn default_envelope() -> bool {
    true
}

/// A document of segments to build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSpec {
    #[serde(default)]
    pub context: ContextConfig,
    /// Wrap the segments in ISA/GS/ST and SE/GE/IEA
    #[serde(default = "default_envelope")]
    pub envelope: bool,
    #[serde(default)]
    pub segments: Vec<SegmentEntry>,
}

impl Default for DocumentSpec {
    fn default() -> Self {
        Self {
            context: ContextConfig::default(),
            envelope: true,
            segments: Vec::new(),
        }
    }
}

/// One segment in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentEntry {
    pub id: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

/// A field value as written in the document
///
/// YAML reads `0001` as the number 1. Quote values whose leading zeros
/// matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

/// A problem with one segment of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentIssue {
    /// Zero-based index into the document's segments; `None` for document
    /// level problems (context, envelope)
    pub index: Option<usize>,
    pub segment: String,
    pub message: String,
}

impl SegmentIssue {
    fn at(index: usize, segment: &str, error: &Error) -> Self {
        Self {
            index: Some(index),
            segment: segment.to_string(),
            message: error.to_string(),
        }
    }

    fn document(segment: &str, error: &Error) -> Self {
        Self {
            index: None,
            segment: segment.to_string(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for SegmentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "segment {} ({}): {}", index + 1, self.segment, self.message),
            None => write!(f, "{}: {}", self.segment, self.message),
        }
    }
}

/// Outcome of building a document
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Body segments that built cleanly
    pub segments: Vec<Segment>,
    /// The assembled envelope, when enveloping was requested and every
    /// segment built
    pub envelope: Option<Envelope>,
    pub issues: Vec<SegmentIssue>,
}

impl BuildReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Render the envelope, or the bare segments when the document is not
    /// enveloped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the document has issues.
    pub fn render(&self) -> Result<String> {
        if !self.is_ok() {
            return Err(Error::InvalidArgument(format!(
                "document has {} issue(s), nothing to render",
                self.issues.len()
            )));
        }
        match &self.envelope {
            Some(envelope) => envelope.render(),
            None => self
                .segments
                .iter()
                .map(Segment::render)
                .collect::<Result<Vec<_>>>()
                .map(|lines| lines.concat()),
        }
    }
}

impl DocumentSpec {
    /// Parse a document from YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed YAML or unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Parse(format!("document: {e}")))
    }

    /// Parse a document from JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed JSON or unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("document: {e}")))
    }

    /// Load a document from disk. Files ending in `.json` are read as JSON,
    /// anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, or a parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading document");
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Build every segment, collecting every problem instead of stopping at
    /// the first.
    pub fn build(&self) -> BuildReport {
        let mut report = BuildReport {
            segments: Vec::with_capacity(self.segments.len()),
            envelope: None,
            issues: Vec::new(),
        };

        let context = match Context::from_config(&self.context) {
            Ok(context) => context,
            Err(error) => {
                report.issues.push(SegmentIssue::document("context", &error));
                return report;
            }
        };

        for (index, entry) in self.segments.iter().enumerate() {
            match build_entry(entry, &context) {
                Ok(segment) => report.segments.push(segment),
                Err(errors) => report
                    .issues
                    .extend(errors.iter().map(|e| SegmentIssue::at(index, &entry.id, e))),
            }
        }

        if !report.is_ok() {
            info!(issues = report.issues.len(), "document has issues");
            return report;
        }

        if self.envelope {
            let mut transaction = TransactionSet::new(context);
            let assembled = match transaction.extend(report.segments.iter().cloned()) {
                Ok(_) => transaction.assemble(),
                Err(error) => Err(error),
            };
            match assembled {
                Ok(envelope) => report.envelope = Some(envelope),
                Err(error) => report.issues.push(SegmentIssue::document("envelope", &error)),
            }
        } else {
            let context = Arc::new(context);
            for segment in &mut report.segments {
                segment.attach_context(Arc::clone(&context));
            }
        }

        debug!(
            segments = report.segments.len(),
            issues = report.issues.len(),
            "document built"
        );
        report
    }
}

fn build_entry(entry: &SegmentEntry, context: &Context) -> std::result::Result<Segment, Vec<Error>> {
    let segment_spec = spec::find(&entry.id).map_err(|e| vec![e])?;
    let mut builder = match &entry.profile {
        Some(name) => {
            let profile = spec::find_profile(segment_spec.id, name).map_err(|e| vec![e])?;
            SegmentBuilder::for_profile(profile, Some(context)).map_err(|e| vec![e])?
        }
        None => SegmentBuilder::with_context(segment_spec, context),
    };

    let mut errors = Vec::new();
    for (key, value) in &entry.fields {
        if let Err(error) = builder.set_field(key, value.to_string()) {
            errors.push(error);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let issues = builder.issues();
    if !issues.is_empty() {
        return Err(issues);
    }
    let segment = builder.build().map_err(|e| vec![e])?;
    check_reserved(&segment, context.delimiters()).map_err(|e| vec![e])?;
    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
context:
  sender_id: SENDERNAME
  receiver_id: RECEIVERNAME
  document_date: 2023-04-15
  document_time: "12:00"
  interchange_control_number: 7
segments:
  - id: BGN
    fields:
      purpose_code: original
      reference_id: REF-0001
  - id: N1
    profile: plan_sponsor
    fields:
      name: ACME CORP
"#;

    #[test]
    fn test_parse_yaml() {
        let document = DocumentSpec::from_yaml_str(DOCUMENT).unwrap();
        assert!(document.envelope);
        assert_eq!(document.segments.len(), 2);
        assert_eq!(document.segments[1].profile.as_deref(), Some("plan_sponsor"));
        assert_eq!(
            document.segments[0].fields.get("reference_id"),
            Some(&FieldValue::Text("REF-0001".to_string()))
        );
    }

    #[test]
    fn test_unknown_document_key() {
        let err = DocumentSpec::from_yaml_str("segmnts: []").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_build_and_render_enveloped() {
        let document = DocumentSpec::from_yaml_str(DOCUMENT).unwrap();
        let report = document.build();
        assert!(report.is_ok(), "{:?}", report.issues);

        let rendered = report.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("ISA*"));
        assert_eq!(lines[3], "BGN*00*REF-0001*20230415*1200~");
        assert_eq!(lines[4], "N1*P5*ACME CORP~");
        assert_eq!(lines[5], "SE*4*0001~");
        assert_eq!(lines[7], "IEA*1*000000007~");
    }

    #[test]
    fn test_build_collects_every_issue() {
        let yaml = r#"
envelope: false
segments:
  - id: BGN
    fields:
      purpose_code: original
  - id: N1
    fields:
      entity_id: P5
  - id: XYZ
"#;
        let document = DocumentSpec::from_yaml_str(yaml).unwrap();
        let report = document.build();
        assert!(!report.is_ok());
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.issues[0].index, Some(0));
        assert_eq!(
            report.issues[0].message,
            "BGN02 (Reference Identification) is required"
        );
        assert_eq!(report.issues[1].segment, "N1");
        assert!(report.issues[1].message.contains("at least one of"));
        assert_eq!(report.issues[2].message, "Unknown segment: XYZ");
        assert!(report.render().is_err());
    }

    #[test]
    fn test_bad_code_and_unknown_field_both_reported() {
        let yaml = r#"
envelope: false
segments:
  - id: INS
    fields:
      subscriber_indicator: maybe
      favourite_colour: blue
"#;
        let report = DocumentSpec::from_yaml_str(yaml).unwrap().build();
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|issue| issue.index == Some(0)));
    }

    #[test]
    fn test_bad_context_is_document_issue() {
        let yaml = r#"
context:
  document_date: yesterday
segments: []
"#;
        let report = DocumentSpec::from_yaml_str(yaml).unwrap().build();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].index, None);
        assert_eq!(report.issues[0].segment, "context");
    }

    #[test]
    fn test_unenveloped_segments_render() {
        let yaml = r#"
envelope: false
segments:
  - id: DTP
    profile: benefit_begin
    fields:
      period: 20240101
"#;
        let document = DocumentSpec::from_yaml_str(yaml).unwrap();
        assert_eq!(document.build().render().unwrap(), "DTP*348*D8*20240101~\n");
    }

    #[test]
    fn test_envelope_segment_in_body_is_rejected() {
        let yaml = r#"
segments:
  - id: SE
    fields:
      segment_count: 2
      control_number: "0001"
"#;
        let report = DocumentSpec::from_yaml_str(yaml).unwrap().build();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].segment, "envelope");
    }

    #[test]
    fn test_json_document() {
        let json = r#"{"envelope": false, "segments": [{"id": "N3", "fields": {"01": "123 MAIN ST"}}]}"#;
        let document = DocumentSpec::from_json_str(json).unwrap();
        assert_eq!(document.build().render().unwrap(), "N3*123 MAIN ST~\n");
    }

    #[test]
    fn test_delimiter_in_value_is_segment_issue() {
        let yaml = r#"
envelope: false
segments:
  - id: N1
    profile: payer
    fields:
      name: "ACME*CORP"
"#;
        let report = DocumentSpec::from_yaml_str(yaml).unwrap().build();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(
            report.issues[0].to_string(),
            "segment 1 (N1): N102 contains '*', which is a delimiter"
        );
    }
}
