// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::loading_overlay::LoadingOverlay;
use crate::config::ClientConfig;
use crate::endpoint::HttpRegistrationEndpoint;
use crate::form::RegistrationForm;
use crate::navigation::{RouterNavigator, ROOT_PATH};
use crate::notifications::NotificationQueue;
use crate::page_utils::set_page_title;
use crate::redirect::install_redirect_guard;
use crate::registration::{Registrar, SubmissionState};
use crate::session::SignalSessionStore;
use signup_shared::messages::user::SessionCredentials;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating registration page");
	set_page_title("Sign Up");

	let config: &ClientConfig = use_context(ctx);
	let session_signal: &Signal<Option<SessionCredentials>> = use_context(ctx);
	let notifications: &NotificationQueue = use_context(ctx);

	// Someone who's already signed in has no business here
	install_redirect_guard(ctx, SignalSessionStore::new(session_signal), RouterNavigator, ROOT_PATH);

	let form = RegistrationForm::new(ctx);
	let submitting = create_signal(ctx, false);
	let registrar = create_ref(
		ctx,
		Registrar::new(
			HttpRegistrationEndpoint::new(config.registration_endpoint()),
			SignalSessionStore::new(session_signal),
			RouterNavigator,
			notifications.clone(),
			ROOT_PATH,
		),
	);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let draft = form.snapshot();
		spawn_local_scoped(ctx, async move {
			registrar
				.submit(&draft, |state| submitting.set(state == SubmissionState::Submitting))
				.await;
		});
	};

	let login_path = config.login_path().to_string();

	view! {
		ctx,
		div(id="register_page") {
			LoadingOverlay(visible=submitting)
			h1 { "Sign Up" }
			form(id="register_user", on:submit=form_submission_handler) {
				div(class="form_group") {
					label(for="register_name") { "Name" }
					input(id="register_name", type="text", placeholder="Enter your name", bind:value=form.name)
				}
				div(class="form_group") {
					label(for="register_email") { "Email Address" }
					input(id="register_email", type="email", placeholder="Enter Email", bind:value=form.email)
				}
				div(class="form_group") {
					label(for="register_password") { "Password" }
					input(id="register_password", type="password", placeholder="Enter Password", bind:value=form.password)
				}
				div(class="form_group") {
					label(for="register_confirm_password") { "Confirm Password" }
					input(
						id="register_confirm_password",
						type="password",
						placeholder="Confirm your password",
						bind:value=form.confirm_password
					)
				}
				button(type="submit") { "Sign Up" }
				div(id="register_login_link") {
					"Already have an account? "
					a(href=login_path, rel="external") { "Login" }
				}
			}
		}
	}
}
