//! Form validation
//!
//! Required fields are checked client-side only. A failed check aborts the
//! operation and the message is shown to the user as-is.

use thiserror::Error;

use crate::state::profile::UserProfile;
use crate::state::storage::KeyValueStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Please choose a file to submit.")]
    NoFileChosen,
}

/// Trim a display name and reject it if nothing is left
pub fn validate_display_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    Ok(name.to_string())
}

/// The file input's value is empty until a file is picked
pub fn validate_submission(file_value: &str) -> Result<(), FormError> {
    if file_value.is_empty() {
        return Err(FormError::NoFileChosen);
    }
    Ok(())
}

/// Validate and persist a new display name (settings form, signup form).
/// The stored name is untouched on error.
pub fn submit_display_name(
    store: &dyn KeyValueStore,
    raw: &str,
) -> Result<UserProfile, FormError> {
    let profile = UserProfile::new(validate_display_name(raw)?);
    profile.save(store);
    Ok(profile)
}
