//! X12 delimiter definitions
//!
//! Each delimiter is drawn from a small closed set. [`Delimiters`] groups the
//! five of them and rejects configurations where two delimiters share a
//! character.

use crate::{Error, Result};
use std::str::FromStr;

/// Default X12 delimiters
pub const DEFAULT_ELEMENT_SEPARATOR: char = '*';
pub const DEFAULT_SUB_ELEMENT_SEPARATOR: char = ':';
pub const DEFAULT_REPETITION_SEPARATOR: char = '^';
pub const DEFAULT_SEGMENT_TERMINATOR: char = '~';
pub const DEFAULT_LINE_TERMINATOR: &str = "\n";

/// Separator between elements of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementSeparator {
    #[default]
    Asterisk,
    Pipe,
    Plus,
}

impl ElementSeparator {
    pub const ALL: [Self; 3] = [Self::Asterisk, Self::Pipe, Self::Plus];

    pub fn as_char(self) -> char {
        match self {
            Self::Asterisk => '*',
            Self::Pipe => '|',
            Self::Plus => '+',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Asterisk => "asterisk",
            Self::Pipe => "pipe",
            Self::Plus => "plus",
        }
    }
}

/// Separator between components of a composite element (ISA16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubElementSeparator {
    #[default]
    Colon,
    GreaterThan,
    Backslash,
    Caret,
}

impl SubElementSeparator {
    pub const ALL: [Self; 4] = [Self::Colon, Self::GreaterThan, Self::Backslash, Self::Caret];

    pub fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::GreaterThan => '>',
            Self::Backslash => '\\',
            Self::Caret => '^',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Colon => "colon",
            Self::GreaterThan => "greater-than",
            Self::Backslash => "backslash",
            Self::Caret => "caret",
        }
    }
}

/// Repetition separator (ISA11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RepetitionSeparator {
    #[default]
    Caret,
    LeftBrace,
}

impl RepetitionSeparator {
    pub const ALL: [Self; 2] = [Self::Caret, Self::LeftBrace];

    pub fn as_char(self) -> char {
        match self {
            Self::Caret => '^',
            Self::LeftBrace => '{',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Caret => "caret",
            Self::LeftBrace => "left-brace",
        }
    }
}

/// Character closing each segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentTerminator {
    #[default]
    Tilde,
    Apostrophe,
    Exclamation,
}

impl SegmentTerminator {
    pub const ALL: [Self; 3] = [Self::Tilde, Self::Apostrophe, Self::Exclamation];

    pub fn as_char(self) -> char {
        match self {
            Self::Tilde => '~',
            Self::Apostrophe => '\'',
            Self::Exclamation => '!',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Tilde => "tilde",
            Self::Apostrophe => "apostrophe",
            Self::Exclamation => "exclamation",
        }
    }
}

/// Text written after each segment terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
    Cr,
    None,
}

impl LineTerminator {
    pub const ALL: [Self; 4] = [Self::Lf, Self::CrLf, Self::Cr, Self::None];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::None => "",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
            Self::Cr => "cr",
            Self::None => "none",
        }
    }
}

macro_rules! char_delimiter {
    ($ty:ident, $label:literal) => {
        impl TryFrom<char> for $ty {
            type Error = Error;

            fn try_from(c: char) -> Result<Self> {
                Self::ALL
                    .into_iter()
                    .find(|d| d.as_char() == c)
                    .ok_or_else(|| {
                        Error::InvalidDelimiter(format!("'{c}' is not an allowed {}", $label))
                    })
            }
        }

        /// Accepts the delimiter character itself or its name.
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let mut chars = s.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    return Self::try_from(c);
                }
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|d| d.name() == wanted)
                    .ok_or_else(|| {
                        Error::InvalidDelimiter(format!("'{s}' is not an allowed {}", $label))
                    })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }
    };
}

char_delimiter!(ElementSeparator, "element separator");
char_delimiter!(SubElementSeparator, "sub-element separator");
char_delimiter!(RepetitionSeparator, "repetition separator");
char_delimiter!(SegmentTerminator, "segment terminator");

impl FromStr for LineTerminator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(found) = Self::ALL.into_iter().find(|t| t.as_str() == s) {
            return Ok(found);
        }
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "\\n" => return Ok(Self::Lf),
            "\\r\\n" => return Ok(Self::CrLf),
            "\\r" => return Ok(Self::Cr),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| Error::InvalidDelimiter(format!("'{s}' is not an allowed line terminator")))
    }
}

/// The delimiter set used to render one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delimiters {
    pub element: ElementSeparator,
    pub sub_element: SubElementSeparator,
    pub repetition: RepetitionSeparator,
    pub segment: SegmentTerminator,
    pub line: LineTerminator,
}

impl Delimiters {
    /// Create a delimiter set, rejecting duplicate characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] when two delimiters share a character.
    pub fn new(
        element: ElementSeparator,
        sub_element: SubElementSeparator,
        repetition: RepetitionSeparator,
        segment: SegmentTerminator,
        line: LineTerminator,
    ) -> Result<Self> {
        let delimiters = Self {
            element,
            sub_element,
            repetition,
            segment,
            line,
        };
        delimiters.check()?;
        Ok(delimiters)
    }

    /// Verify that no two delimiters share a character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] naming the clashing character.
    pub fn check(&self) -> Result<()> {
        let chars = [
            self.element.as_char(),
            self.sub_element.as_char(),
            self.repetition.as_char(),
            self.segment.as_char(),
        ];
        for (i, c) in chars.iter().enumerate() {
            if chars[i + 1..].contains(c) {
                return Err(Error::InvalidDelimiter(format!(
                    "'{c}' is used for more than one delimiter"
                )));
            }
        }
        Ok(())
    }

    /// Check if a character is reserved by this delimiter set
    pub fn is_special(&self, c: char) -> bool {
        c == self.element.as_char()
            || c == self.sub_element.as_char()
            || c == self.repetition.as_char()
            || c == self.segment.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let d = Delimiters::default();
        assert_eq!(d.element.as_char(), DEFAULT_ELEMENT_SEPARATOR);
        assert_eq!(d.sub_element.as_char(), DEFAULT_SUB_ELEMENT_SEPARATOR);
        assert_eq!(d.repetition.as_char(), DEFAULT_REPETITION_SEPARATOR);
        assert_eq!(d.segment.as_char(), DEFAULT_SEGMENT_TERMINATOR);
        assert_eq!(d.line.as_str(), DEFAULT_LINE_TERMINATOR);
        assert!(d.check().is_ok());
    }

    #[test]
    fn test_parse_by_char_and_name() {
        assert_eq!("|".parse::<ElementSeparator>().unwrap(), ElementSeparator::Pipe);
        assert_eq!("Pipe".parse::<ElementSeparator>().unwrap(), ElementSeparator::Pipe);
        assert_eq!(">".parse::<SubElementSeparator>().unwrap(), SubElementSeparator::GreaterThan);
        assert_eq!("'".parse::<SegmentTerminator>().unwrap(), SegmentTerminator::Apostrophe);
        assert_eq!("{".parse::<RepetitionSeparator>().unwrap(), RepetitionSeparator::LeftBrace);
    }

    #[test]
    fn test_reject_unknown_delimiters() {
        assert!("#".parse::<ElementSeparator>().is_err());
        assert!(ElementSeparator::try_from('~').is_err());
        assert!("**".parse::<ElementSeparator>().is_err());
        assert!("".parse::<SegmentTerminator>().is_err());
    }

    #[test]
    fn test_line_terminator_parsing() {
        assert_eq!("\n".parse::<LineTerminator>().unwrap(), LineTerminator::Lf);
        assert_eq!("\\r\\n".parse::<LineTerminator>().unwrap(), LineTerminator::CrLf);
        assert_eq!("CRLF".parse::<LineTerminator>().unwrap(), LineTerminator::CrLf);
        assert_eq!("".parse::<LineTerminator>().unwrap(), LineTerminator::None);
        assert_eq!("none".parse::<LineTerminator>().unwrap(), LineTerminator::None);
        assert!("\t".parse::<LineTerminator>().is_err());
    }

    #[test]
    fn test_duplicate_delimiters_rejected() {
        let ok = Delimiters::new(
            ElementSeparator::Plus,
            SubElementSeparator::Colon,
            RepetitionSeparator::Caret,
            SegmentTerminator::Tilde,
            LineTerminator::Lf,
        );
        assert!(ok.is_ok());

        let clash = Delimiters::new(
            ElementSeparator::Asterisk,
            SubElementSeparator::Caret,
            RepetitionSeparator::Caret,
            SegmentTerminator::Tilde,
            LineTerminator::Lf,
        )
        .unwrap_err();
        assert!(clash.to_string().contains("'^'"));

        let d = Delimiters {
            sub_element: SubElementSeparator::Caret,
            repetition: RepetitionSeparator::LeftBrace,
            ..Delimiters::default()
        };
        assert!(d.check().is_ok());
    }

    #[test]
    fn test_is_special() {
        let d = Delimiters::default();
        assert!(d.is_special('*'));
        assert!(d.is_special('~'));
        assert!(d.is_special('^'));
        assert!(!d.is_special('A'));
    }
}
