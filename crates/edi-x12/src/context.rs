//! Per-document formatting and envelope metadata
//!
//! A [`Context`] supplies delimiters, document date/time and control numbers
//! to segment builders and to the serializer. Build one per document and pass
//! it explicitly.

use crate::spec::ContextValue;
use crate::syntax::{
    Delimiters, ElementSeparator, LineTerminator, RepetitionSeparator, SegmentTerminator,
    SubElementSeparator,
};
use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use edi_x12_codes::{CodeEnum, InterchangeIdQualifier, InterchangeUsageIndicator};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";
pub const DEFAULT_TIME_FORMAT: &str = "%H%M";
pub const INTERCHANGE_DATE_FORMAT: &str = "%y%m%d";
pub const INTERCHANGE_TIME_FORMAT: &str = "%H%M";
pub const DEFAULT_IMPLEMENTATION_REFERENCE: &str = "005010X220A1";

/// Largest value that fits the nine-digit ISA13/IEA02 control number.
pub const MAX_CONTROL_NUMBER: u32 = 999_999_999;

/// Formatting and envelope metadata shared by the segments of one document
#[derive(Debug, Clone)]
pub struct Context {
    delimiters: Delimiters,
    document_date_time: NaiveDateTime,
    date_format: String,
    time_format: String,
    sender_id: String,
    sender_qualifier: InterchangeIdQualifier,
    receiver_id: String,
    receiver_qualifier: InterchangeIdQualifier,
    interchange_control_number: u32,
    group_control_number: u32,
    transaction_set_control_number: u32,
    usage_indicator: InterchangeUsageIndicator,
    implementation_reference: String,
}

impl Default for Context {
    fn default() -> Self {
        Self::at(chrono::Local::now().naive_local())
    }
}

impl Context {
    /// Create a context stamped with the current local time
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context for a fixed document date/time
    pub fn at(document_date_time: NaiveDateTime) -> Self {
        Self {
            delimiters: Delimiters::default(),
            document_date_time,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            sender_id: String::new(),
            sender_qualifier: InterchangeIdQualifier::MutuallyDefined,
            receiver_id: String::new(),
            receiver_qualifier: InterchangeIdQualifier::MutuallyDefined,
            interchange_control_number: 1,
            group_control_number: 1,
            transaction_set_control_number: 1,
            usage_indicator: InterchangeUsageIndicator::Production,
            implementation_reference: DEFAULT_IMPLEMENTATION_REFERENCE.to_string(),
        }
    }

    /// Build a context from a deserialized configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] for unknown or clashing delimiters
    /// and [`Error::Config`] for unparseable dates, formats or codes.
    pub fn from_config(config: &ContextConfig) -> Result<Self> {
        let date = match &config.document_date {
            Some(raw) => parse_date(raw)?,
            None => chrono::Local::now().date_naive(),
        };
        let time = match &config.document_time {
            Some(raw) => parse_time(raw)?,
            None => chrono::Local::now().time(),
        };
        let mut context = Self::at(date.and_time(time));

        let mut delimiters = Delimiters::default();
        if let Some(raw) = &config.element_separator {
            delimiters.element = raw.parse::<ElementSeparator>()?;
        }
        if let Some(raw) = &config.sub_element_separator {
            delimiters.sub_element = raw.parse::<SubElementSeparator>()?;
        }
        if let Some(raw) = &config.repetition_separator {
            delimiters.repetition = raw.parse::<RepetitionSeparator>()?;
        }
        if let Some(raw) = &config.segment_terminator {
            delimiters.segment = raw.parse::<SegmentTerminator>()?;
        }
        if let Some(raw) = &config.line_terminator {
            delimiters.line = raw.parse::<LineTerminator>()?;
        }
        context.set_delimiters(delimiters)?;

        if let Some(format) = &config.date_format {
            context.set_date_format(format)?;
        }
        if let Some(format) = &config.time_format {
            context.set_time_format(format)?;
        }
        if let Some(id) = &config.sender_id {
            context.set_sender_id(id);
        }
        if let Some(id) = &config.receiver_id {
            context.set_receiver_id(id);
        }
        if let Some(raw) = &config.sender_qualifier {
            context.set_sender_qualifier(resolve_config_code(raw)?);
        }
        if let Some(raw) = &config.receiver_qualifier {
            context.set_receiver_qualifier(resolve_config_code(raw)?);
        }
        if let Some(raw) = &config.usage_indicator {
            context.set_usage_indicator(resolve_config_code(raw)?);
        }
        if let Some(n) = config.interchange_control_number {
            context.set_interchange_control_number(n)?;
        }
        if let Some(n) = config.group_control_number {
            context.set_group_control_number(n);
        }
        if let Some(n) = config.transaction_set_control_number {
            context.set_transaction_set_control_number(n);
        }
        if let Some(reference) = &config.implementation_reference {
            context.set_implementation_reference(reference);
        }

        tracing::debug!(
            sender = %context.sender_id,
            receiver = %context.receiver_id,
            control_number = context.interchange_control_number,
            "context loaded from configuration"
        );
        Ok(context)
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Replace the delimiter set
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] when two delimiters clash.
    pub fn set_delimiters(&mut self, delimiters: Delimiters) -> Result<&mut Self> {
        delimiters.check()?;
        self.delimiters = delimiters;
        Ok(self)
    }

    pub fn element_separator(&self) -> ElementSeparator {
        self.delimiters.element
    }

    pub fn sub_element_separator(&self) -> SubElementSeparator {
        self.delimiters.sub_element
    }

    pub fn repetition_separator(&self) -> RepetitionSeparator {
        self.delimiters.repetition
    }

    pub fn segment_terminator(&self) -> SegmentTerminator {
        self.delimiters.segment
    }

    pub fn line_terminator(&self) -> LineTerminator {
        self.delimiters.line
    }

    pub fn document_date_time(&self) -> NaiveDateTime {
        self.document_date_time
    }

    pub fn set_document_date_time(&mut self, date_time: NaiveDateTime) -> &mut Self {
        self.document_date_time = date_time;
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Set the strftime pattern used for document dates (GS04, BGN03)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the pattern is not a valid strftime format.
    pub fn set_date_format(&mut self, format: &str) -> Result<&mut Self> {
        check_format(format)?;
        self.date_format = format.to_string();
        Ok(self)
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Set the strftime pattern used for document times (GS05, BGN04)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the pattern is not a valid strftime format.
    pub fn set_time_format(&mut self, format: &str) -> Result<&mut Self> {
        check_format(format)?;
        self.time_format = format.to_string();
        Ok(self)
    }

    /// Document date formatted with the configured date format
    pub fn formatted_date(&self) -> String {
        self.document_date_time.format(&self.date_format).to_string()
    }

    /// Document time formatted with the configured time format
    pub fn formatted_time(&self) -> String {
        self.document_date_time.format(&self.time_format).to_string()
    }

    /// ISA09 date (YYMMDD)
    pub fn interchange_date(&self) -> String {
        self.document_date_time
            .format(INTERCHANGE_DATE_FORMAT)
            .to_string()
    }

    /// ISA10 time (HHMM)
    pub fn interchange_time(&self) -> String {
        self.document_date_time
            .format(INTERCHANGE_TIME_FORMAT)
            .to_string()
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn set_sender_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.sender_id = id.into();
        self
    }

    pub fn sender_qualifier(&self) -> InterchangeIdQualifier {
        self.sender_qualifier
    }

    pub fn set_sender_qualifier(&mut self, qualifier: InterchangeIdQualifier) -> &mut Self {
        self.sender_qualifier = qualifier;
        self
    }

    pub fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    pub fn set_receiver_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.receiver_id = id.into();
        self
    }

    pub fn receiver_qualifier(&self) -> InterchangeIdQualifier {
        self.receiver_qualifier
    }

    pub fn set_receiver_qualifier(&mut self, qualifier: InterchangeIdQualifier) -> &mut Self {
        self.receiver_qualifier = qualifier;
        self
    }

    pub fn interchange_control_number(&self) -> u32 {
        self.interchange_control_number
    }

    /// Set the ISA13/IEA02 control number
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the number does not fit nine digits.
    pub fn set_interchange_control_number(&mut self, number: u32) -> Result<&mut Self> {
        if number > MAX_CONTROL_NUMBER {
            return Err(Error::Config(format!(
                "interchange control number {number} exceeds nine digits"
            )));
        }
        self.interchange_control_number = number;
        Ok(self)
    }

    pub fn group_control_number(&self) -> u32 {
        self.group_control_number
    }

    pub fn set_group_control_number(&mut self, number: u32) -> &mut Self {
        self.group_control_number = number;
        self
    }

    pub fn transaction_set_control_number(&self) -> u32 {
        self.transaction_set_control_number
    }

    pub fn set_transaction_set_control_number(&mut self, number: u32) -> &mut Self {
        self.transaction_set_control_number = number;
        self
    }

    /// ISA13, zero padded to nine digits
    pub fn formatted_interchange_control_number(&self) -> String {
        format!("{:09}", self.interchange_control_number)
    }

    /// GS06, unpadded
    pub fn formatted_group_control_number(&self) -> String {
        self.group_control_number.to_string()
    }

    /// ST02, zero padded to at least four digits
    pub fn formatted_transaction_set_control_number(&self) -> String {
        format!("{:04}", self.transaction_set_control_number)
    }

    pub fn usage_indicator(&self) -> InterchangeUsageIndicator {
        self.usage_indicator
    }

    pub fn set_usage_indicator(&mut self, usage: InterchangeUsageIndicator) -> &mut Self {
        self.usage_indicator = usage;
        self
    }

    pub fn implementation_reference(&self) -> &str {
        &self.implementation_reference
    }

    pub fn set_implementation_reference(&mut self, reference: impl Into<String>) -> &mut Self {
        self.implementation_reference = reference.into();
        self
    }

    /// Resolve a context-derived element default. Blank values yield `None`.
    pub fn value(&self, source: ContextValue) -> Option<String> {
        let value = match source {
            ContextValue::Date => self.formatted_date(),
            ContextValue::Time => self.formatted_time(),
            ContextValue::InterchangeDate => self.interchange_date(),
            ContextValue::InterchangeTime => self.interchange_time(),
            ContextValue::SenderId => self.sender_id.clone(),
            ContextValue::ReceiverId => self.receiver_id.clone(),
            ContextValue::SenderQualifier => self.sender_qualifier.code().to_string(),
            ContextValue::ReceiverQualifier => self.receiver_qualifier.code().to_string(),
            ContextValue::InterchangeControlNumber => self.formatted_interchange_control_number(),
            ContextValue::GroupControlNumber => self.formatted_group_control_number(),
            ContextValue::TransactionSetControlNumber => {
                self.formatted_transaction_set_control_number()
            }
            ContextValue::UsageIndicator => self.usage_indicator.code().to_string(),
            ContextValue::ComponentSeparator => self.delimiters.sub_element.as_char().to_string(),
            ContextValue::RepetitionSeparator => self.delimiters.repetition.as_char().to_string(),
            ContextValue::ImplementationReference => self.implementation_reference.clone(),
        };
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Serializable context configuration, loaded from YAML or JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    pub element_separator: Option<String>,
    pub sub_element_separator: Option<String>,
    pub repetition_separator: Option<String>,
    pub segment_terminator: Option<String>,
    pub line_terminator: Option<String>,
    /// `YYYY-MM-DD` or `YYYYMMDD`
    pub document_date: Option<String>,
    /// `HH:MM`, `HH:MM:SS` or `HHMM`
    pub document_time: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub sender_id: Option<String>,
    pub sender_qualifier: Option<String>,
    pub receiver_id: Option<String>,
    pub receiver_qualifier: Option<String>,
    pub interchange_control_number: Option<u32>,
    pub group_control_number: Option<u32>,
    pub transaction_set_control_number: Option<u32>,
    pub usage_indicator: Option<String>,
    pub implementation_reference: Option<String>,
}

impl ContextConfig {
    /// Parse a configuration from YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed YAML or unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Parse(format!("context config: {e}")))
    }
}

fn check_format(format: &str) -> Result<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::Config(format!("invalid date/time format '{format}'")));
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .map_err(|e| Error::Config(format!("invalid document date '{raw}': {e}")))
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H%M"))
        .map_err(|e| Error::Config(format!("invalid document time '{raw}': {e}")))
}

fn resolve_config_code<T: CodeEnum>(raw: &str) -> Result<T> {
    T::resolve(raw).map_err(|e| Error::Config(e.to_string()))
}
