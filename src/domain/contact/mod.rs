//! Respondent contact information and identity validation.
//!
//! Contact details gate a screening submission: a [`ContactInfo`] can only
//! be constructed from input that passes validation, so downstream code
//! never re-checks it.

mod disposable;

use crate::domain::errors::ScreeningError;

pub use disposable::is_disposable;

/// Name length bounds, counted in characters.
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 30;

/// Validated respondent contact block.
///
/// All fields are stored trimmed; the email is additionally lower-cased so
/// it can serve as a stable storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
}

impl ContactInfo {
    /// Validates and normalizes raw contact input.
    ///
    /// # Errors
    ///
    /// - `Validation` for malformed names or email
    /// - `DisposableEmail` when the email domain is deny-listed
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Self, ScreeningError> {
        let first_name = validate_name("firstName", first_name)?;
        let last_name = validate_name("lastName", last_name)?;
        let email = validate_email(email)?;
        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from);

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Letters (any alphabet, covering Turkish extended Latin) plus interior
/// whitespace, 2-30 characters after trimming.
fn validate_name(field: &str, raw: &str) -> Result<String, ScreeningError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < MIN_NAME_LENGTH || length > MAX_NAME_LENGTH {
        return Err(ScreeningError::validation(
            field,
            format!(
                "must be {}-{} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            ),
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ScreeningError::validation(
            field,
            "may contain only letters and spaces",
        ));
    }
    Ok(trimmed.to_string())
}

/// Shape check (local@domain.tld) followed by the disposable-domain gate.
fn validate_email(raw: &str) -> Result<String, ScreeningError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(ScreeningError::validation("email", "is required"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ScreeningError::validation("email", "must not contain spaces"));
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(ScreeningError::validation("email", "is not a valid address")),
    };
    let valid_shape = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.split('.').all(|label| !label.is_empty());
    if !valid_shape {
        return Err(ScreeningError::validation("email", "is not a valid address"));
    }

    if is_disposable(domain) {
        return Err(ScreeningError::DisposableEmail {
            domain: domain.to_string(),
        });
    }

    Ok(email)
}
