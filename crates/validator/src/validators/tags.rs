//! Tag list validator.

use crate::foundation::{Validate, ValidationError};
use crate::patterns::{TAG, all_strings};

/// A single tag: word characters, optionally separated by single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag;

impl Validate for Tag {
    type Input = str;

    fn validate(&self, tag: &str) -> Result<(), ValidationError> {
        if TAG.is_match(tag)? {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_tag",
                format!("{tag} is not a valid tag"),
            ))
        }
    }
}

/// Returns `true` if `tag` is a valid tag.
pub fn is_valid_tag(tag: &str) -> bool {
    Tag.is_valid(tag)
}

/// A comma-separated tag list. The empty string means "no tags".
///
/// ```
/// use cluster_validator::foundation::Validate;
/// use cluster_validator::validators::Tags;
///
/// assert!(Tags.validate("").is_ok());
/// assert!(Tags.validate("tag1,tag 2,tag_3").is_ok());
/// assert!(Tags.validate("tag!,x").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tags;

impl Validate for Tags {
    type Input = str;

    fn validate(&self, tags: &str) -> Result<(), ValidationError> {
        if tags.is_empty() {
            return Ok(());
        }

        // Surface a pattern failure as internal rather than as a bad tag.
        TAG.regex()?;

        if all_strings(tags.split(','), is_valid_tag) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_tags",
                format!(
                    "Invalid format for Tags: {tags}. Tags should be a comma-separated list (e.g. tag1,tag2,tag3). \
                     Each tag can consist of the following characters: Alphanumeric (aA-zZ, 0-9), underscore (_) and white-spaces."
                ),
            ))
        }
    }
}

/// Validates a comma-separated tag list.
pub fn validate_tags(tags: &str) -> Result<(), ValidationError> {
    Tags.validate(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tags() {
        assert!(is_valid_tag("tag1"));
        assert!(is_valid_tag("tag 2"));
        assert!(is_valid_tag("tag_3"));
        assert!(is_valid_tag("multi word tag"));
    }

    #[test]
    fn bad_single_tags() {
        for tag in ["", " tag", "tag ", "two  spaces", "tag!", "tag-1", "tag\t1"] {
            assert!(!is_valid_tag(tag), "{tag:?}");
        }
    }

    #[test]
    fn lists() {
        assert!(validate_tags("").is_ok());
        assert!(validate_tags("tag1,tag 2,tag_3").is_ok());
        assert!(validate_tags("tag!,x").is_err());
        assert!(validate_tags("a,,b").is_err());
        assert!(validate_tags("a, b").is_err());
    }

    #[test]
    fn list_error_message() {
        let err = validate_tags("tag!,x").unwrap_err();
        assert_eq!(err.code, "invalid_tags");
        assert_eq!(
            err.message,
            "Invalid format for Tags: tag!,x. Tags should be a comma-separated list (e.g. tag1,tag2,tag3). \
             Each tag can consist of the following characters: Alphanumeric (aA-zZ, 0-9), underscore (_) and white-spaces."
        );
    }
}
