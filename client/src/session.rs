// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::StorageError;
use signup_shared::messages::user::SessionCredentials;
use sycamore::prelude::*;
use web_sys::Storage;

/// Holds the credentials of the signed-in user
pub trait SessionStore {
	/// Whether someone is signed in. Reading this inside an effect reruns the effect when the session changes.
	fn has_session(&self) -> bool;
	fn set_credentials(&self, credentials: SessionCredentials);
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
	fn has_session(&self) -> bool {
		(**self).has_session()
	}

	fn set_credentials(&self, credentials: SessionCredentials) {
		(**self).set_credentials(credentials)
	}
}

/// Session store backed by the application-wide session signal
#[derive(Clone, Copy)]
pub struct SignalSessionStore<'a> {
	signal: &'a Signal<Option<SessionCredentials>>,
}

impl<'a> SignalSessionStore<'a> {
	pub fn new(signal: &'a Signal<Option<SessionCredentials>>) -> Self {
		Self { signal }
	}
}

impl SessionStore for SignalSessionStore<'_> {
	fn has_session(&self) -> bool {
		self.signal.get().is_some()
	}

	fn set_credentials(&self, credentials: SessionCredentials) {
		self.signal.set(Some(credentials));
	}
}

/// Keeps the session in the browser's local storage so it survives reloads
pub struct BrowserStorage {
	key: String,
}

impl BrowserStorage {
	pub fn new(key: &str) -> Self {
		Self { key: key.to_string() }
	}

	fn storage(&self) -> Result<Storage, StorageError> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		window.local_storage()?.ok_or(StorageError::Unavailable)
	}

	pub fn load(&self) -> Result<Option<SessionCredentials>, StorageError> {
		let Some(stored) = self.storage()?.get_item(&self.key)? else {
			return Ok(None);
		};
		Ok(Some(serde_json::from_str(&stored)?))
	}

	/// Writes the session, or removes the stored one when there's no session
	pub fn save(&self, credentials: Option<&SessionCredentials>) -> Result<(), StorageError> {
		let storage = self.storage()?;
		match credentials {
			Some(credentials) => storage.set_item(&self.key, &serde_json::to_string(credentials)?)?,
			None => storage.remove_item(&self.key)?,
		}
		Ok(())
	}
}
