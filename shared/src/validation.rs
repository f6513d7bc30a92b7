// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::user_register::RegistrationRequest;
use std::fmt;

pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";
pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// The values of the registration form as the user has typed them
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DraftRegistration {
	pub name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

/// The first rule a draft registration failed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	IncompleteFields,
	EmailDomain,
	NameTooShort,
	NameCharacters,
	WeakPassword,
	PasswordMismatch,
}

impl ValidationError {
	pub fn message(&self) -> &'static str {
		match self {
			Self::IncompleteFields => "Please fill all fields.",
			Self::EmailDomain => "Email should end with @gmail.com.",
			Self::NameTooShort => "Name should be at least 3 characters.",
			Self::NameCharacters => "Name should only contain letters and spaces.",
			Self::WeakPassword => "Password must be at least 6 characters long and include at least one uppercase letter, one number, and one special character.",
			Self::PasswordMismatch => "Confirm Passwords do not match.",
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}

impl std::error::Error for ValidationError {}

/// Whitespace as browsers define it for form text: Unicode whitespace without NEL, plus the byte order mark.
fn is_browser_whitespace(c: char) -> bool {
	c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_browser(value: &str) -> &str {
	value.trim_matches(is_browser_whitespace)
}

/// Length as a browser reports it, in UTF-16 code units
fn browser_length(value: &str) -> usize {
	value.encode_utf16().count()
}

/// Whether the whole name is made of ASCII letters and whitespace, with at least one character
pub fn is_valid_name_charset(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_ascii_alphabetic() || is_browser_whitespace(c))
}

/// Whether the password has an uppercase letter, a digit and a symbol, uses only letters, digits and symbols, and is
/// long enough
pub fn is_strong_password(password: &str) -> bool {
	let mut length = 0;
	let mut has_uppercase = false;
	let mut has_digit = false;
	let mut has_symbol = false;

	for c in password.chars() {
		if c.is_ascii_uppercase() {
			has_uppercase = true;
		} else if c.is_ascii_digit() {
			has_digit = true;
		} else if PASSWORD_SYMBOLS.contains(&c) {
			has_symbol = true;
		} else if !c.is_ascii_lowercase() {
			return false;
		}
		length += 1;
	}

	length >= PASSWORD_MIN_LENGTH && has_uppercase && has_digit && has_symbol
}

/// Runs the registration rules in order, stopping at the first one that fails.
///
/// On success, returns the request to send: the name and email are trimmed, the password is left as typed.
pub fn validate(draft: &DraftRegistration) -> Result<RegistrationRequest, ValidationError> {
	let name = trim_browser(&draft.name);
	let email = trim_browser(&draft.email);

	if name.is_empty()
		|| email.is_empty()
		|| trim_browser(&draft.password).is_empty()
		|| trim_browser(&draft.confirm_password).is_empty()
	{
		return Err(ValidationError::IncompleteFields);
	}
	if !draft.email.ends_with(REQUIRED_EMAIL_SUFFIX) {
		return Err(ValidationError::EmailDomain);
	}
	if browser_length(name) < NAME_MIN_LENGTH {
		return Err(ValidationError::NameTooShort);
	}
	if !is_valid_name_charset(&draft.name) {
		return Err(ValidationError::NameCharacters);
	}
	if !is_strong_password(&draft.password) {
		return Err(ValidationError::WeakPassword);
	}
	if draft.password != draft.confirm_password {
		return Err(ValidationError::PasswordMismatch);
	}

	Ok(RegistrationRequest {
		name: name.to_string(),
		email: email.to_string(),
		password: draft.password.clone(),
	})
}
