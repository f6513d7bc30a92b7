// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::notifications::NotificationQueue;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn NotificationDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let queue: &NotificationQueue = use_context(ctx);
	let notifications = create_memo(ctx, move || (*queue.notifications().get()).clone());

	view! {
		ctx,
		ul(id="notifications") {
			Keyed(
				iterable=notifications,
				key=|notification| notification.id,
				view=move |ctx, notification| {
					let id = notification.id;
					let dismiss_handler = move |_event: WebEvent| queue.dismiss(id);
					view! {
						ctx,
						li(class="notification notification_error") {
							span(class="notification_text") { (notification.message) }
							span(class="notification_dismiss") {
								a(class="click", on:click=dismiss_handler) { "[X]" }
							}
						}
					}
				}
			)
		}
	}
}
