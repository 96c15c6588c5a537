//! Normalized multi-key lookup over a code list

use crate::{CodeEnum, Error, Result};
use std::collections::HashMap;

/// Normalize free text for lookup: trim, lowercase, and drop spaces,
/// underscores and hyphens.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lookup table resolving codes, names, descriptions and synonyms to members
#[derive(Debug)]
pub struct EnumLookup<T: 'static> {
    enumeration: &'static str,
    /// Exact codes, matched against trimmed input only. Codes never enter
    /// the normalized map.
    codes: HashMap<&'static str, T>,
    /// Normalized keys. Later insertions overwrite earlier ones.
    keys: HashMap<String, T>,
    collisions: Vec<String>,
}

impl<T: CodeEnum> EnumLookup<T> {
    /// Build the table for `T` from its members and declared synonyms.
    #[must_use]
    pub fn build() -> Self {
        let mut lookup = Self {
            enumeration: T::ENUMERATION,
            codes: HashMap::new(),
            keys: HashMap::new(),
            collisions: Vec::new(),
        };

        for &member in T::all() {
            lookup.codes.insert(member.code(), member);
            lookup.insert(member.name(), member);
            lookup.insert(member.description(), member);
        }
        for &(synonym, member) in T::synonyms() {
            lookup.insert(synonym, member);
        }

        tracing::debug!(
            enumeration = lookup.enumeration,
            keys = lookup.keys.len(),
            collisions = lookup.collisions.len(),
            "built code lookup"
        );
        lookup
    }

    fn insert(&mut self, raw: &str, member: T) {
        let key = normalize(raw);
        if key.is_empty() {
            return;
        }
        if let Some(previous) = self.keys.insert(key.clone(), member) {
            if previous != member {
                tracing::debug!(
                    enumeration = self.enumeration,
                    key = %key,
                    from = previous.code(),
                    to = member.code(),
                    "code lookup key reassigned"
                );
                self.collisions.push(key);
            }
        }
    }

    /// Resolve input to a member.
    ///
    /// # Errors
    ///
    /// Blank input yields [`Error::InvalidInput`]; anything that matches no
    /// code, name, description or synonym yields [`Error::UnknownCode`].
    pub fn resolve(&self, input: &str) -> Result<T> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput {
                enumeration: self.enumeration,
            });
        }
        if let Some(member) = self.codes.get(trimmed) {
            return Ok(*member);
        }
        self.keys
            .get(&normalize(trimmed))
            .copied()
            .ok_or_else(|| Error::unknown_code(self.enumeration, input))
    }

    #[must_use]
    pub fn enumeration(&self) -> &'static str {
        self.enumeration
    }

    /// Keys that were reassigned to a different member while building.
    #[must_use]
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    /// Number of distinct normalized keys, codes excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
