// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that can occur when reading or writing browser storage
#[derive(Debug)]
pub enum StorageError {
	Unavailable,
	Access(String),
	Json(serde_json::Error),
}

impl fmt::Display for StorageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable => write!(f, "browser storage is not available"),
			Self::Access(error) => write!(f, "browser storage refused access: {}", error),
			Self::Json(error) => write!(f, "stored data is malformed: {}", error),
		}
	}
}

impl std::error::Error for StorageError {}

impl From<JsValue> for StorageError {
	fn from(error: JsValue) -> Self {
		Self::Access(format!("{:?}", error))
	}
}

impl From<serde_json::Error> for StorageError {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}
