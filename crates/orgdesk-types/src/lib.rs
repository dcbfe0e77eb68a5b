/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when creating a [`Slug`].
#[derive(Debug, thiserror::Error)]
pub enum SlugError {
    /// The input slug was empty
    #[error("Slug cannot be empty")]
    Empty,
    /// The input slug exceeded the maximum length
    #[error("Slug exceeds maximum length of {max} characters")]
    TooLong { max: usize },
    /// The input slug contained characters outside `[a-z0-9-]`
    #[error("Slug contains invalid characters (only lowercase alphanumeric and '-' allowed)")]
    InvalidCharacters,
    /// The input slug started or ended with a hyphen
    #[error("Slug cannot start or end with '-'")]
    EdgeHyphen,
}

/// A URL-safe identifier for organizations, projects and teams.
///
/// Slugs are embedded directly into storage paths and URLs, so construction
/// enforces a conservative character set: lowercase ASCII alphanumerics and
/// `-`, between 1 and 64 characters, with no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Maximum slug length in bytes.
    pub const MAX_LEN: usize = 64;

    /// Creates a new `Slug`, validating the input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Errors
    ///
    /// Returns a `SlugError` if the input is empty, too long, contains
    /// characters outside `[a-z0-9-]`, or starts/ends with a hyphen.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SlugError> {
        let s = input.as_ref();

        if s.is_empty() {
            return Err(SlugError::Empty);
        }
        if s.len() > Self::MAX_LEN {
            return Err(SlugError::TooLong { max: Self::MAX_LEN });
        }
        if !s
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'-'))
        {
            return Err(SlugError::InvalidCharacters);
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::new(s)
    }
}

impl serde::Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  hello  ").expect("valid text");
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace_only() {
        assert!(NonEmptyText::new("   ").is_err());
        assert!(NonEmptyText::new("").is_err());
    }

    #[test]
    fn test_slug_accepts_valid_input() {
        let slug = Slug::new("acme-widgets-2").expect("valid slug");
        assert_eq!(slug.as_str(), "acme-widgets-2");
    }

    #[test]
    fn test_slug_rejects_invalid_input() {
        assert!(matches!(Slug::new(""), Err(SlugError::Empty)));
        assert!(matches!(
            Slug::new("Acme"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(
            Slug::new("acme widgets"),
            Err(SlugError::InvalidCharacters)
        ));
        assert!(matches!(Slug::new("-acme"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(Slug::new("acme-"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(
            Slug::new("a".repeat(65)),
            Err(SlugError::TooLong { max: 64 })
        ));
    }
}
