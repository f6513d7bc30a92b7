// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

const APPLICATION_TITLE: &str = "Account";

fn full_title(page_name: &str) -> String {
	format!("{} | {}", page_name, APPLICATION_TITLE)
}

/// Shows the page name in the browser tab
pub fn set_page_title(page_name: &str) {
	if let Some(document) = window().and_then(|window| window.document()) {
		document.set_title(&full_title(page_name));
	}
}
