//! Fixed character classes for string generation.

/// Uppercase ASCII letters.
pub const UPPERCASE_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE_ALPHA: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits.
pub const NUMERIC: &str = "0123456789";

const MIXED_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const UPPERCASE_ALPHA_NUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LOWERCASE_ALPHA_NUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
const MIXED_ALPHA_NUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Selects the alphabet a generated string draws its characters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringCharacterType {
    /// `0-9`
    Numeric,
    /// `A-Z`
    UppercaseAlpha,
    /// `a-z`
    LowercaseAlpha,
    /// `A-Z` then `a-z`
    MixedAlpha,
    /// `A-Z` then `0-9`
    UppercaseAlphaNumeric,
    /// `a-z` then `0-9`
    LowercaseAlphaNumeric,
    /// `A-Z`, `a-z`, then `0-9`
    MixedAlphaNumeric,
}

impl StringCharacterType {
    /// The fixed alphabet for this character type.
    pub fn alphabet(self) -> &'static str {
        match self {
            StringCharacterType::Numeric => NUMERIC,
            StringCharacterType::UppercaseAlpha => UPPERCASE_ALPHA,
            StringCharacterType::LowercaseAlpha => LOWERCASE_ALPHA,
            StringCharacterType::MixedAlpha => MIXED_ALPHA,
            StringCharacterType::UppercaseAlphaNumeric => UPPERCASE_ALPHA_NUMERIC,
            StringCharacterType::LowercaseAlphaNumeric => LOWERCASE_ALPHA_NUMERIC,
            StringCharacterType::MixedAlphaNumeric => MIXED_ALPHA_NUMERIC,
        }
    }
}

impl Default for StringCharacterType {
    fn default() -> Self {
        StringCharacterType::UppercaseAlpha
    }
}

crate::enumeration!(StringCharacterType {
    Numeric,
    UppercaseAlpha,
    LowercaseAlpha,
    MixedAlpha,
    UppercaseAlphaNumeric,
    LowercaseAlphaNumeric,
    MixedAlphaNumeric,
});
