use serde::{Deserialize, Serialize};

/// Contact details collected after the last question of a track.
///
/// All three fields must be non-blank before the session can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// The respondent's full name.
    pub full_name: String,

    /// The respondent's e-mail address. Opaque to the engine.
    pub email: String,

    /// The respondent's phone number. Opaque to the engine.
    pub phone: String,
}

impl ContactInfo {
    /// Create a new contact record.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Check that every field is non-blank (whitespace-only counts as blank).
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}
