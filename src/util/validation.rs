//! Client-side credential checks for the sign-up form.
//!
//! These run synchronously before any request is made. Failures become
//! field-level messages and are never returned as `AuthError`s.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters that satisfy the "special character" password rule.
pub const SPECIAL_CHARACTERS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters long, contain a letter, a number, and a special character.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Loose email shape check: somewhere in `email` there is
/// `<non-space>@<non-space>.<non-space>`.
///
/// Not anchored, so surrounding text is tolerated. Whitespace is the Unicode
/// `White_Space` set (`char::is_whitespace`), which also covers U+0085 but
/// not U+FEFF.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    chars.iter().enumerate().any(|(at, &c)| {
        if c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[at + 1..]
            .iter()
            .copied()
            .take_while(|c| !c.is_whitespace())
            .collect();
        // A dot with at least one character on each side inside the domain run.
        domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
    })
}

/// Password strength rule: length, one ASCII letter of either case, one
/// digit and one of `SPECIAL_CHARACTERS`.
///
/// Length is counted in Unicode scalar values, so a character outside the
/// Basic Multilingual Plane counts once rather than as a surrogate pair.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c));
    long_enough && has_letter && has_digit && has_special
}

/// Raw sign-up form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field-keyed error map for the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignUpErrors {
    /// Only the email slot set; used for server-side failures.
    #[must_use]
    pub fn email_only(message: impl Into<String>) -> Self {
        Self {
            email: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Run every sign-up check and collect all failures.
#[must_use]
pub fn validate_sign_up(form: &SignUpForm) -> SignUpErrors {
    let mut errors = SignUpErrors::default();
    if !is_valid_email(&form.email) {
        errors.email = Some(INVALID_EMAIL_MESSAGE.to_owned());
    }
    if form.name.is_empty() {
        errors.name = Some(NAME_REQUIRED_MESSAGE.to_owned());
    }
    if !is_valid_password(&form.password) {
        errors.password = Some(WEAK_PASSWORD_MESSAGE.to_owned());
    }
    if form.password != form.confirm_password {
        errors.confirm_password = Some(PASSWORD_MISMATCH_MESSAGE.to_owned());
    }
    errors
}
