// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::navigation::Navigator;
use crate::session::SessionStore;
use sycamore::prelude::*;

/// Decides when a page meant for signed-out users should send the user away.
///
/// Feed it the session state every time that state is read by an effect. It answers `true` the first time it sees a
/// session and then again only after the session has gone away and come back, so repeated effect runs don't produce
/// repeated navigation.
#[derive(Debug, Default)]
pub struct RedirectGuard {
	last_seen: Option<bool>,
}

impl RedirectGuard {
	pub fn observe(&mut self, has_session: bool) -> bool {
		let changed = self.last_seen != Some(has_session);
		self.last_seen = Some(has_session);
		changed && has_session
	}
}

/// Sends the user to `target` whenever a session appears, including one that already exists when the page mounts.
///
/// The check runs in an effect that tracks the session, so it reruns only when the session changes.
pub fn install_redirect_guard<'a, S, N>(ctx: Scope<'a>, session: S, navigator: N, target: &'a str)
where
	S: SessionStore + 'a,
	N: Navigator + 'a,
{
	let mut guard = RedirectGuard::default();
	create_effect(ctx, move || {
		if guard.observe(session.has_session()) {
			log::debug!("Session exists; redirecting to {}", target);
			navigator.go_to(target);
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::SignalSessionStore;
	use serde_json::json;
	use signup_shared::messages::user::SessionCredentials;
	use std::cell::RefCell;

	#[derive(Default)]
	struct FakeNavigator {
		visited: RefCell<Vec<String>>,
	}

	impl Navigator for FakeNavigator {
		fn go_to(&self, path: &str) {
			self.visited.borrow_mut().push(path.to_string());
		}
	}

	fn credentials() -> SessionCredentials {
		serde_json::from_value(json!({ "name": "Jane Doe" })).unwrap()
	}

	#[test]
	fn existing_session_navigates_home_once() {
		create_scope_immediate(|ctx| {
			let session = create_signal(ctx, Some(credentials()));
			let navigator = create_ref(ctx, FakeNavigator::default());
			install_redirect_guard(ctx, SignalSessionStore::new(session), navigator, "/");
			assert_eq!(*navigator.visited.borrow(), vec![String::from("/")]);

			// The same session being written again isn't a change
			session.set(Some(credentials()));
			assert_eq!(navigator.visited.borrow().len(), 1);
		});
	}

	#[test]
	fn missing_session_stays_put() {
		create_scope_immediate(|ctx| {
			let session = create_signal(ctx, None);
			let navigator = create_ref(ctx, FakeNavigator::default());
			install_redirect_guard(ctx, SignalSessionStore::new(session), navigator, "/");
			session.set(None);
			assert!(navigator.visited.borrow().is_empty());
		});
	}

	#[test]
	fn session_appearing_later_navigates() {
		create_scope_immediate(|ctx| {
			let session = create_signal(ctx, None);
			let navigator = create_ref(ctx, FakeNavigator::default());
			install_redirect_guard(ctx, SignalSessionStore::new(session), navigator, "/");
			assert!(navigator.visited.borrow().is_empty());

			session.set(Some(credentials()));
			assert_eq!(navigator.visited.borrow().len(), 1);
			session.set(None);
			session.set(Some(credentials()));
			assert_eq!(navigator.visited.borrow().len(), 2);
		});
	}

	#[test]
	fn redirects_when_session_exists_at_mount() {
		let mut guard = RedirectGuard::default();
		assert!(guard.observe(true));
	}

	#[test]
	fn steady_session_redirects_once() {
		let mut guard = RedirectGuard::default();
		assert!(guard.observe(true));
		assert!(!guard.observe(true));
		assert!(!guard.observe(true));
	}

	#[test]
	fn no_session_never_redirects() {
		let mut guard = RedirectGuard::default();
		assert!(!guard.observe(false));
		assert!(!guard.observe(false));
	}

	#[test]
	fn redirects_again_after_sign_out_and_in() {
		let mut guard = RedirectGuard::default();
		assert!(!guard.observe(false));
		assert!(guard.observe(true));
		assert!(!guard.observe(false));
		assert!(guard.observe(true));
	}
}
