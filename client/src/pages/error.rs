// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

/// Renders a page that only explains why the application couldn't start
pub fn error_message_view<G: Html>(ctx: Scope<'_>, message: &'static str, error: Option<impl Display>) -> View<G> {
	match error {
		Some(error) => {
			let error_display = error.to_string();
			view! {
				ctx,
				div(id="app_error") {
					(message)
					br {}
					(error_display)
				}
			}
		}
		None => view! {
			ctx,
			div(id="app_error") { (message) }
		},
	}
}
