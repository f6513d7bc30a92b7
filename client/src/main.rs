// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod endpoint;
mod error;
mod form;
mod navigation;
mod notifications;
mod page_utils;
mod pages;
mod redirect;
mod registration;
mod session;

use app::App;
use config::load_config;
use notifications::NotificationQueue;
use pages::error::error_message_view;
use session::BrowserStorage;

fn main() {
	console_error_panic_hook::set_once();

	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	let config = match load_config() {
		Ok(config) => config,
		Err(error) => {
			log::error!("Client configuration is invalid: {}", error);
			sycamore::render(|ctx| {
				error_message_view(ctx, "Unable to load: the client configuration is invalid", Some(error))
			});
			return;
		}
	};

	let storage = BrowserStorage::new(config.session_storage_key());
	let stored_session = match storage.load() {
		Ok(session) => session,
		Err(error) => {
			log::warn!("Ignoring the stored session: {}", error);
			None
		}
	};
	let notification_queue = NotificationQueue::new(config.notification_millis());

	sycamore::render(move |ctx| {
		provide_context(ctx, config);
		provide_context(ctx, notification_queue);

		let session_signal = create_signal(ctx, stored_session);
		provide_context_ref(ctx, session_signal);

		create_effect(ctx, move || {
			if let Err(error) = storage.save(session_signal.get().as_ref().as_ref()) {
				log::warn!("Failed to persist the session: {}", error);
			}
		});

		view! { ctx, App {} }
	});
}
