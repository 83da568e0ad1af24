//! Field validators for the login and registration forms.
//!
//! Each validator is a pure predicate paired with the message shown under the
//! field when it fails. Forms validate on blur and again on submit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";
pub const PASSWORD_MESSAGE: &str = "Password must be 8 to 12 characters with no spaces.";
pub const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match.";
pub const USERNAME_MESSAGE: &str = "Username must be 3 to 16 characters with no spaces.";
pub const PHONE_MESSAGE: &str = "Phone number must be exactly 8 digits.";
pub const NAME_MESSAGE: &str = "This field is required.";

const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 8..=12;
const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=16;
const PHONE_DIGITS: usize = 8;

/// Something shaped like `local@domain.tld`, with no whitespace anywhere in
/// the matched parts.
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        token.match_indices('@').any(|(at, _)| {
            let domain = &token[at + 1..];
            at > 0 && domain.match_indices('.').any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
        })
    })
}

pub fn is_valid_password(password: &str) -> bool {
    !password.chars().any(char::is_whitespace) && PASSWORD_LEN.contains(&password.chars().count())
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && password == confirm
}

pub fn is_valid_username(username: &str) -> bool {
    !username.chars().any(char::is_whitespace) && USERNAME_LEN.contains(&username.chars().count())
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Validate login input, returning the trimmed email and the raw password.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(EMAIL_MESSAGE);
    }
    if !is_valid_password(password) {
        return Err(PASSWORD_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}
