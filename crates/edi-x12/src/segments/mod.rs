//! Segment tables and typed builders for the 834 segment set
//!
//! Each segment kind is a static [`SegmentSpec`](crate::SegmentSpec). The
//! typed builders wrap [`SegmentBuilder`](crate::SegmentBuilder) with setters
//! named after the element they fill.

use crate::spec::Profile;

/// Declare a typed builder over a static segment spec.
///
/// Each entry maps a 1-based position to a setter. Entries with a code list
/// type take a member of that list or text resolved through it.
macro_rules! typed_builder {
    (@setter $pos:literal $setter:ident) => {
        #[doc = concat!("Set element ", stringify!($pos), ".")]
        pub fn $setter(&mut self, value: impl AsRef<str>) -> $crate::Result<&mut Self> {
            self.inner.set($pos, value)?;
            Ok(self)
        }
    };
    (@setter $pos:literal $setter:ident $code:ty) => {
        #[doc = concat!("Set coded element ", stringify!($pos), ".")]
        pub fn $setter(
            &mut self,
            value: impl ::edi_x12_codes::IntoCode<$code>,
        ) -> $crate::Result<&mut Self> {
            self.inner.set_code::<$code>($pos, value)?;
            Ok(self)
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident for $spec:path {
            $( $pos:literal => $setter:ident $(: $code:ty)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: $crate::SegmentBuilder,
        }

        impl $name {
            /// Create a builder with the literal defaults applied.
            pub fn new() -> Self {
                Self {
                    inner: $crate::SegmentBuilder::new(&$spec),
                }
            }

            /// Create a builder with literal and context defaults applied.
            pub fn with_context(context: &$crate::Context) -> Self {
                Self {
                    inner: $crate::SegmentBuilder::with_context(&$spec, context),
                }
            }

            /// Create a builder for one of this segment's profiles.
            ///
            /// # Errors
            ///
            /// Returns an invalid-argument error when the profile belongs to
            /// another segment.
            pub fn for_profile(
                profile: &'static $crate::Profile,
                context: Option<&$crate::Context>,
            ) -> $crate::Result<Self> {
                if !::std::ptr::eq(profile.segment, &$spec) {
                    return Err($crate::Error::InvalidArgument(format!(
                        "profile '{}' belongs to {}, not {}",
                        profile.name, profile.segment.id, $spec.id
                    )));
                }
                Ok(Self {
                    inner: $crate::SegmentBuilder::for_profile(profile, context)?,
                })
            }

            $( typed_builder!(@setter $pos $setter $($code)?); )*

            /// Set an element by position.
            pub fn set(&mut self, position: usize, value: impl AsRef<str>) -> $crate::Result<&mut Self> {
                self.inner.set(position, value)?;
                Ok(self)
            }

            /// Set an element by field key or reference.
            pub fn set_field(&mut self, key: &str, value: impl AsRef<str>) -> $crate::Result<&mut Self> {
                self.inner.set_field(key, value)?;
                Ok(self)
            }

            pub fn clear(&mut self, position: usize) -> $crate::Result<&mut Self> {
                self.inner.clear(position)?;
                Ok(self)
            }

            pub fn get(&self, position: usize) -> Option<&str> {
                self.inner.get(position)
            }

            pub fn issues(&self) -> Vec<$crate::Error> {
                self.inner.issues()
            }

            /// Validate and produce the segment.
            pub fn build(self) -> $crate::Result<$crate::Segment> {
                self.inner.build()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for $crate::SegmentBuilder {
            fn from(builder: $name) -> Self {
                builder.inner
            }
        }
    };
}

mod envelope;
mod header;
mod member;

pub use envelope::*;
pub use header::*;
pub use member::*;

/// Every segment profile
pub static PROFILES: &[&Profile] = &[
    &DTP_FILE_EFFECTIVE_DATE,
    &DTP_BENEFIT_BEGIN,
    &N1_PLAN_SPONSOR,
    &N1_PAYER,
    &N1_IDENTIFIED_PARTY,
    &INS_DECEASED_MEMBER,
    &REF_MEMBER_IDENTIFICATION_NUMBER,
    &REF_MEMBER_GROUP_POLICY_NUMBER,
    &REF_MASTER_POLICY_NUMBER,
    &REF_MEMBER_SUPPLEMENTAL_IDENTIFIER,
    &NM1_MEMBER_NAME,
    &NM1_RESPONSIBLE_PERSON,
    &N3_MEMBER_RESIDENCE_STREET_ADDRESS,
    &N4_MEMBER_RESIDENCE_CITY,
    &DMG_MEMBER_DEMOGRAPHICS,
    &SE_TRANSACTION_SET_TRAILER,
    &GE_FUNCTIONAL_GROUP_TRAILER,
    &IEA_INTERCHANGE_TRAILER,
];
