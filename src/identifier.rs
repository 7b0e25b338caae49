//! The opaque identifier token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdentifierError;

/// Fixed length of every identifier, in bytes (and characters).
pub const IDENTIFIER_LEN: usize = 36;

/// Byte offsets that hold the `-` separator.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// An opaque, fixed-length storage key.
///
/// Values are 36 characters of lowercase hex grouped `8-4-4-4-12`. The
/// grouping is presentation only; callers must treat the string as an
/// opaque token and never derive meaning from its characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validates `s` and wraps it as an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseIdentifierError`] if `s` has the wrong length, contains
    /// a character outside `[0-9a-f]`, or has a hyphen out of place.
    pub fn parse(s: &str) -> Result<Self, ParseIdentifierError> {
        validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Wraps text produced by the generator. The caller guarantees the format.
    pub(crate) fn from_canonical(s: String) -> Self {
        debug_assert!(validate(&s).is_ok(), "non-canonical identifier {s:?}");
        Self(s)
    }

    /// Borrows the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

fn validate(s: &str) -> Result<(), ParseIdentifierError> {
    if s.len() != IDENTIFIER_LEN {
        return Err(ParseIdentifierError::Length { expected: IDENTIFIER_LEN, found: s.len() });
    }
    for (position, found) in s.char_indices() {
        let ok = if HYPHEN_POSITIONS.contains(&position) {
            found == '-'
        } else {
            matches!(found, '0'..='9' | 'a'..='f')
        };
        if !ok {
            return Err(ParseIdentifierError::Character { position, found });
        }
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ParseIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3fa85f64-aaaa-bbbb-cccc-0123456789ab";

    #[test]
    fn parses_canonical_form() {
        let id = Identifier::parse(SAMPLE).unwrap();
        assert_eq!(id.as_str(), SAMPLE);
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Identifier::parse("3fa85f64").unwrap_err();
        assert_eq!(err, ParseIdentifierError::Length { expected: 36, found: 8 });
    }

    #[test]
    fn rejects_uppercase_hex() {
        let err = Identifier::parse("3FA85F64-aaaa-bbbb-cccc-0123456789ab").unwrap_err();
        assert_eq!(err, ParseIdentifierError::Character { position: 0, found: 'F' });
    }

    #[test]
    fn rejects_misplaced_hyphen() {
        let err = Identifier::parse("3fa85f6-4aaaa-bbbb-cccc-0123456789ab").unwrap_err();
        assert_eq!(err, ParseIdentifierError::Character { position: 7, found: '-' });
    }

    #[test]
    fn rejects_whitespace_and_separators() {
        assert!(Identifier::parse("3fa85f64-aaaa-bbbb-cccc-0123456789a ").is_err());
        assert!(Identifier::parse("3fa85f64-aaaa-bbbb-cccc-0123456789a:").is_err());
    }

    #[test]
    fn multibyte_input_of_same_byte_length_is_rejected() {
        // 34 ASCII bytes + one 2-byte char = 36 bytes.
        let s = format!("{}é", &SAMPLE[..34]);
        assert_eq!(s.len(), 36);
        assert!(matches!(
            Identifier::parse(&s),
            Err(ParseIdentifierError::Character { position: 34, .. })
        ));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let json = serde_json::to_string(&Identifier::parse(SAMPLE).unwrap()).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), SAMPLE);
        assert!(serde_json::from_str::<Identifier>("\"not-an-id\"").is_err());
    }
}
