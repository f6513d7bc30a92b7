// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::futures::spawn_local;
use sycamore_router::navigate;

pub const ROOT_PATH: &str = "/";

pub trait Navigator {
	fn go_to(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
	fn go_to(&self, path: &str) {
		(**self).go_to(path)
	}
}

/// Navigates through the application router
#[derive(Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
	/// Navigation re-renders the current page, so it's queued rather than done from inside an effect or event handler.
	fn go_to(&self, path: &str) {
		let path = path.to_string();
		spawn_local(async move {
			// Both the redirect check and a finished registration can ask for the root in the same turn
			let current_path = web_sys::window().and_then(|window| window.location().pathname().ok());
			if current_path.as_deref() == Some(path.as_str()) {
				log::debug!("Already at {}; not navigating", path);
				return;
			}
			log::debug!("Navigating to {}", path);
			navigate(&path);
		});
	}
}
