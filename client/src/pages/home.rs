// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use signup_shared::messages::user::SessionCredentials;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating home page");
	set_page_title("Home");

	let session_signal: &Signal<Option<SessionCredentials>> = use_context(ctx);

	let sign_out_handler = move |event: WebEvent| {
		event.prevent_default();
		log::info!("Signing out");
		session_signal.set(None);
	};

	view! {
		ctx,
		div(id="home") {
			(match session_signal.get().as_ref() {
				Some(credentials) => {
					let greeting = match credentials.name() {
						Some(name) => format!("Welcome, {}!", name),
						None => String::from("Welcome!"),
					};
					view! {
						ctx,
						h1 { (greeting) }
						p {
							a(id="home_sign_out", class="click", on:click=sign_out_handler) { "Sign out" }
						}
					}
				}
				None => view! {
					ctx,
					h1 { "Welcome!" }
					p {
						"You're not signed in. "
						a(href="/register") { "Create an account" }
					}
				}
			})
		}
	}
}
