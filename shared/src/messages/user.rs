// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credentials handed out by the registration endpoint. The client doesn't interpret them beyond reading a display
/// name; they're stored and sent back exactly as received.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionCredentials(Map<String, Value>);

impl SessionCredentials {
	/// Reads credentials from the body of a successful registration response. A body that's empty or `null` carries
	/// no fields but still counts as a session.
	pub fn from_response_body(body: &str) -> Result<Self, serde_json::Error> {
		let body = body.trim();
		if body.is_empty() {
			return Ok(Self::default());
		}
		let fields: Option<Map<String, Value>> = serde_json::from_str(body)?;
		Ok(Self(fields.unwrap_or_default()))
	}

	/// The name of the signed-in user, if the server included one
	pub fn name(&self) -> Option<&str> {
		self.0.get("name").and_then(Value::as_str)
	}
}
