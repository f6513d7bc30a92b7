// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;

const CONFIG_FILE_NAME: &str = "config.kdl";
const CONFIG_FILE_CONTENTS: &str = include_str!("../config.kdl");

const DEFAULT_SESSION_STORAGE_KEY: &str = "userInfo";
const DEFAULT_NOTIFICATION_SECONDS: u32 = 5;

#[derive(Debug, Decode)]
pub struct ClientConfig {
	#[knuffel(child, unwrap(argument))]
	registration_endpoint: String,
	#[knuffel(child, unwrap(argument))]
	login_path: String,
	#[knuffel(child, unwrap(argument), default)]
	session_storage_key: Option<String>,
	#[knuffel(child, unwrap(argument), default)]
	notification_seconds: Option<u32>,
}

impl ClientConfig {
	/// URL the registration request is posted to
	pub fn registration_endpoint(&self) -> &str {
		&self.registration_endpoint
	}

	pub fn login_path(&self) -> &str {
		&self.login_path
	}

	/// Browser storage key under which the session credentials are kept
	pub fn session_storage_key(&self) -> &str {
		self.session_storage_key
			.as_deref()
			.unwrap_or(DEFAULT_SESSION_STORAGE_KEY)
	}

	/// How long a notification stays up before dismissing itself, in milliseconds
	pub fn notification_millis(&self) -> u32 {
		self.notification_seconds
			.unwrap_or(DEFAULT_NOTIFICATION_SECONDS)
			.saturating_mul(1000)
	}
}

pub fn parse_config(file_name: &str, contents: &str) -> Result<ClientConfig, knuffel::Error> {
	knuffel::parse(file_name, contents)
}

/// Decodes the configuration that was built into the client
pub fn load_config() -> Result<ClientConfig, knuffel::Error> {
	parse_config(CONFIG_FILE_NAME, CONFIG_FILE_CONTENTS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_config_decodes() {
		let config = load_config().unwrap();
		assert_eq!(config.registration_endpoint(), "/api/users");
		assert_eq!(config.login_path(), "/login");
		assert_eq!(config.session_storage_key(), "userInfo");
		assert_eq!(config.notification_millis(), 5000);
	}

	#[test]
	fn optional_values_have_defaults() {
		let config = parse_config(
			"test.kdl",
			"registration-endpoint \"https://example.com/api/users\"\nlogin-path \"/signin\"\n",
		)
		.unwrap();
		assert_eq!(config.registration_endpoint(), "https://example.com/api/users");
		assert_eq!(config.login_path(), "/signin");
		assert_eq!(config.session_storage_key(), DEFAULT_SESSION_STORAGE_KEY);
		assert_eq!(config.notification_millis(), 5000);
	}

	#[test]
	fn endpoint_is_required() {
		assert!(parse_config("test.kdl", "login-path \"/login\"\n").is_err());
	}
}
