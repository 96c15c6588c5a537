#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

//! # edi-x12-codes
//!
//! Closed X12 834 code lists with a normalized multi-key lookup.
//!
//! Every code list is a plain Rust enum implementing [`CodeEnum`]. Each type
//! owns one process-wide [`EnumLookup`] that resolves free text to the
//! canonical member. Codes match exactly; names, descriptions and declared
//! synonyms match after normalization.
//!
//! ## Example Usage
//!
//! ```rust
//! use edi_x12_codes::{CodeEnum, InterchangeUsageIndicator};
//!
//! let usage = InterchangeUsageIndicator::resolve("sandbox").unwrap();
//! assert_eq!(usage, InterchangeUsageIndicator::Test);
//! assert_eq!(usage.code(), "T");
//! ```

pub mod envelope;
pub mod header;
pub mod lookup;
pub mod member;

pub use envelope::{
    AcknowledgmentRequested, AuthorizationInformationQualifier, FunctionalIdentifierCode,
    InterchangeIdQualifier, InterchangeUsageIndicator, ResponsibleAgencyCode,
    SecurityInformationQualifier, TransactionSetIdentifierCode,
};
pub use header::{
    ActionCode, DateTimePeriodFormatQualifier, DateTimeQualifier, EntityIdentifierCode,
    IdentificationCodeQualifier, TimeCode, TransactionSetPurposeCode,
};
pub use lookup::{EnumLookup, normalize};
pub use member::{
    BenefitStatusCode, CoverageLevelCode, EmploymentStatusCode, EntityTypeQualifier, GenderCode,
    IndividualRelationshipCode, InsuranceLineCode, MaintenanceReasonCode, MaintenanceTypeCode,
    MaritalStatusCode, ReferenceIdentificationQualifier, StudentStatusCode, YesNoCondition,
};

use serde::Serialize;
use thiserror::Error;

/// Errors raised while resolving code values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{enumeration}: input must not be blank")]
    InvalidInput { enumeration: &'static str },

    #[error("Unknown {enumeration} code: '{input}'")]
    UnknownCode {
        enumeration: &'static str,
        input: String,
    },

    #[error("Unknown code list: '{0}'")]
    UnknownCodeList(String),
}

impl Error {
    /// Build an unknown-code error for the given enumeration and raw input.
    pub fn unknown_code(enumeration: &'static str, input: impl Into<String>) -> Self {
        Self::UnknownCode {
            enumeration,
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shared contract of every X12 code list.
///
/// Implementations are generated with [`code_enum!`]; hand-written
/// implementations must keep codes unique within the type.
pub trait CodeEnum: Sized + Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Human readable name of the code list, used in error messages.
    const ENUMERATION: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// The X12 code written on the wire.
    fn code(&self) -> &'static str;

    /// The Rust member name.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Free-text aliases mapped to members. Later entries win on collision.
    fn synonyms() -> &'static [(&'static str, Self)] {
        &[]
    }

    /// The process-wide lookup table for this code list.
    fn lookup() -> &'static EnumLookup<Self>;

    /// Resolve arbitrary input to a member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for blank input and
    /// [`Error::UnknownCode`] when the input is not an exact code and
    /// matches no name, description or synonym after normalization.
    fn resolve(input: &str) -> Result<Self> {
        Self::lookup().resolve(input)
    }

    /// Erase the member type, keeping code and description.
    fn to_code(&self) -> Code {
        Code {
            enumeration: Self::ENUMERATION,
            code: self.code(),
            description: self.description(),
        }
    }
}

/// Values accepted wherever a member of `T` is expected: the member itself
/// or free text resolved through `T`'s lookup.
pub trait IntoCode<T: CodeEnum> {
    /// # Errors
    ///
    /// Text input fails as [`CodeEnum::resolve`] does.
    fn into_code(self) -> Result<T>;
}

impl<T: CodeEnum> IntoCode<T> for T {
    fn into_code(self) -> Result<T> {
        Ok(self)
    }
}

impl<T: CodeEnum> IntoCode<T> for &str {
    fn into_code(self) -> Result<T> {
        T::resolve(self)
    }
}

impl<T: CodeEnum> IntoCode<T> for String {
    fn into_code(self) -> Result<T> {
        T::resolve(&self)
    }
}

/// A resolved code value detached from its enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Code {
    pub enumeration: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        self.code
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

/// Resolve `input` through `T`'s lookup and erase the result.
///
/// # Errors
///
/// Propagates [`CodeEnum::resolve`] failures.
pub fn resolve_code<T: CodeEnum>(input: &str) -> Result<Code> {
    T::resolve(input).map(|member| member.to_code())
}

fn members_of<T: CodeEnum>() -> Vec<Code> {
    T::all().iter().map(CodeEnum::to_code).collect()
}

/// Type-erased handle on one code list, usable from static tables.
#[derive(Clone, Copy)]
pub struct CodeList {
    pub enumeration: &'static str,
    resolve: fn(&str) -> Result<Code>,
    members: fn() -> Vec<Code>,
}

impl CodeList {
    pub const fn of<T: CodeEnum>() -> Self {
        Self {
            enumeration: T::ENUMERATION,
            resolve: resolve_code::<T>,
            members: members_of::<T>,
        }
    }

    /// Resolve input against this code list.
    ///
    /// # Errors
    ///
    /// See [`CodeEnum::resolve`].
    pub fn resolve(&self, input: &str) -> Result<Code> {
        (self.resolve)(input)
    }

    #[must_use]
    pub fn members(&self) -> Vec<Code> {
        (self.members)()
    }

    /// Check whether `code` is a member code of this list.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.members().iter().any(|member| member.code == code)
    }
}

impl std::fmt::Debug for CodeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeList")
            .field("enumeration", &self.enumeration)
            .finish_non_exhaustive()
    }
}

/// Every code list shipped by this crate.
#[must_use]
pub fn catalog() -> Vec<CodeList> {
    vec![
        CodeList::of::<AuthorizationInformationQualifier>(),
        CodeList::of::<SecurityInformationQualifier>(),
        CodeList::of::<InterchangeIdQualifier>(),
        CodeList::of::<AcknowledgmentRequested>(),
        CodeList::of::<InterchangeUsageIndicator>(),
        CodeList::of::<FunctionalIdentifierCode>(),
        CodeList::of::<ResponsibleAgencyCode>(),
        CodeList::of::<TransactionSetIdentifierCode>(),
        CodeList::of::<TransactionSetPurposeCode>(),
        CodeList::of::<TimeCode>(),
        CodeList::of::<ActionCode>(),
        CodeList::of::<DateTimeQualifier>(),
        CodeList::of::<DateTimePeriodFormatQualifier>(),
        CodeList::of::<EntityIdentifierCode>(),
        CodeList::of::<IdentificationCodeQualifier>(),
        CodeList::of::<EntityTypeQualifier>(),
        CodeList::of::<YesNoCondition>(),
        CodeList::of::<IndividualRelationshipCode>(),
        CodeList::of::<MaintenanceTypeCode>(),
        CodeList::of::<MaintenanceReasonCode>(),
        CodeList::of::<BenefitStatusCode>(),
        CodeList::of::<EmploymentStatusCode>(),
        CodeList::of::<StudentStatusCode>(),
        CodeList::of::<ReferenceIdentificationQualifier>(),
        CodeList::of::<GenderCode>(),
        CodeList::of::<MaritalStatusCode>(),
        CodeList::of::<InsuranceLineCode>(),
        CodeList::of::<CoverageLevelCode>(),
    ]
}

/// Find a code list by enumeration name, compared after normalization.
///
/// # Errors
///
/// Returns [`Error::UnknownCodeList`] when no list matches.
pub fn find_code_list(name: &str) -> Result<CodeList> {
    let wanted = normalize(name);
    catalog()
        .into_iter()
        .find(|list| normalize(list.enumeration) == wanted)
        .ok_or_else(|| Error::UnknownCodeList(name.to_string()))
}

/// Declare a code list enum and its [`CodeEnum`] implementation.
///
/// ```rust
/// edi_x12_codes::code_enum! {
///     /// Example list
///     pub enum Flavor: "Flavor" {
///         Sweet = "S", "Sweet flavor",
///         Bitter = "B", "Bitter flavor",
///     }
///     synonyms {
///         "sugary" => Sweet,
///     }
/// }
///
/// use edi_x12_codes::CodeEnum;
/// assert_eq!(Flavor::resolve("sugary").unwrap(), Flavor::Sweet);
/// ```
#[macro_export]
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, $desc:literal ),+ $(,)?
        }
        $( synonyms { $( $syn:literal => $target:ident ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::CodeEnum for $name {
            const ENUMERATION: &'static str = $label;

            fn all() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }

            fn code(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $desc ),+
                }
            }

            fn synonyms() -> &'static [(&'static str, Self)] {
                &[ $( $( ($syn, Self::$target) ),* )? ]
            }

            fn lookup() -> &'static $crate::EnumLookup<Self> {
                static LOOKUP: ::std::sync::OnceLock<$crate::EnumLookup<$name>> =
                    ::std::sync::OnceLock::new();
                LOOKUP.get_or_init($crate::EnumLookup::build)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::CodeEnum::code(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                <Self as $crate::CodeEnum>::resolve(s)
            }
        }
    };
}
