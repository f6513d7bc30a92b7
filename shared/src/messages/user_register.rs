// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a failed registration carries no usable description
pub const GENERIC_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Data from the client when trying to register an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationRequest {
	pub name: String,
	pub email: String,
	pub password: String,
}

/// Body the server sends alongside an unsuccessful status
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorPayload {
	#[serde(default)]
	pub message: Option<String>,
}

/// Describes why a registration attempt didn't produce credentials.
///
/// `data` holds whatever the server said about the failure; `error` holds a description produced on the client side
/// when the server couldn't be reached or its response couldn't be read.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationFailure {
	#[serde(default)]
	pub status: Option<u16>,
	#[serde(default)]
	pub data: Option<ErrorPayload>,
	#[serde(default)]
	pub error: Option<String>,
}

impl RegistrationFailure {
	/// The request never got a response
	pub fn transport(description: impl fmt::Display) -> Self {
		Self {
			status: None,
			data: None,
			error: Some(description.to_string()),
		}
	}

	/// The server answered with an unsuccessful status. `payload` is the decoded body, if it could be decoded.
	pub fn server(status: u16, status_text: &str, payload: Option<ErrorPayload>) -> Self {
		Self {
			status: Some(status),
			data: payload,
			error: Some(format!("{} {}", status, status_text).trim_end().to_string()),
		}
	}

	/// The server claimed success but sent something that isn't credentials
	pub fn unreadable(status: u16, description: impl fmt::Display) -> Self {
		Self {
			status: Some(status),
			data: None,
			error: Some(format!("Unable to read the registration response: {}", description)),
		}
	}

	/// The single line shown to the user for this failure
	pub fn user_message(&self) -> &str {
		let server_message = self
			.data
			.as_ref()
			.and_then(|payload| payload.message.as_deref())
			.filter(|message| !message.is_empty());
		if let Some(message) = server_message {
			return message;
		}
		match self.error.as_deref() {
			Some(error) if !error.is_empty() => error,
			_ => GENERIC_FAILURE_MESSAGE,
		}
	}
}

impl fmt::Display for RegistrationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.user_message())
	}
}

impl std::error::Error for RegistrationFailure {}
