//! Version name validation
//!
//! A name is valid when, after trimming, it has 1 to [`MAX_NAME_LEN`]
//! characters and no other version carries the same name ignoring case.
//! Internal whitespace is compared as-is.

use uuid::Uuid;

use super::errors::{NamingError, NamingResult};
use crate::document::{trim_space, Version};

/// Maximum name length in characters, after trimming
pub const MAX_NAME_LEN: usize = 40;

/// Validate `proposed` against `versions`, ignoring the version `exclude_id`.
///
/// Returns the trimmed name to store.
pub fn validate_name(
    proposed: &str,
    exclude_id: Option<Uuid>,
    versions: &[Version],
) -> NamingResult<String> {
    let trimmed = trim_space(proposed);

    let length = trimmed.chars().count();
    if length == 0 || length > MAX_NAME_LEN {
        return Err(NamingError::InvalidLength { length });
    }

    let wanted = trimmed.to_lowercase();
    let taken = versions
        .iter()
        .filter(|v| Some(v.id()) != exclude_id)
        .filter_map(|v| v.name())
        .any(|existing| trim_space(existing).to_lowercase() == wanted);

    if taken {
        return Err(NamingError::DuplicateName {
            name: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_string())
}
