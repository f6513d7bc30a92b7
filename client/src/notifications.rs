// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;

/// Shows a short message to the user
pub trait Notifier {
	fn notify_error(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
	fn notify_error(&self, message: &str) {
		(**self).notify_error(message)
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
	pub id: u64,
	pub message: String,
}

/// The list of notifications currently on screen. Each notification removes itself after the configured time.
#[derive(Clone)]
pub struct NotificationQueue {
	notifications: RcSignal<Vec<Notification>>,
	next_id: Rc<Cell<u64>>,
	display_millis: u32,
}

impl NotificationQueue {
	pub fn new(display_millis: u32) -> Self {
		Self {
			notifications: create_rc_signal(Vec::new()),
			next_id: Rc::new(Cell::new(0)),
			display_millis,
		}
	}

	pub fn notifications(&self) -> &RcSignal<Vec<Notification>> {
		&self.notifications
	}

	/// Adds a notification without scheduling its removal, returning its ID
	pub fn push(&self, message: &str) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.notifications.modify().push(Notification {
			id,
			message: message.to_string(),
		});
		id
	}

	pub fn dismiss(&self, id: u64) {
		let mut notifications = self.notifications.modify();
		if let Some(index) = notifications.iter().position(|notification| notification.id == id) {
			notifications.remove(index);
		}
	}
}

impl Notifier for NotificationQueue {
	fn notify_error(&self, message: &str) {
		let id = self.push(message);
		let queue = self.clone();
		spawn_local(async move {
			TimeoutFuture::new(queue.display_millis).await;
			queue.dismiss(id);
		});
	}
}
