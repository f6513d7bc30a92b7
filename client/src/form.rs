// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::validation::DraftRegistration;
use sycamore::prelude::*;

/// The registration form fields, each bound to one input. Values are kept exactly as typed.
#[derive(Clone, Copy)]
pub struct RegistrationForm<'a> {
	pub name: &'a Signal<String>,
	pub email: &'a Signal<String>,
	pub password: &'a Signal<String>,
	pub confirm_password: &'a Signal<String>,
}

impl<'a> RegistrationForm<'a> {
	pub fn new(ctx: Scope<'a>) -> Self {
		Self {
			name: create_signal(ctx, String::new()),
			email: create_signal(ctx, String::new()),
			password: create_signal(ctx, String::new()),
			confirm_password: create_signal(ctx, String::new()),
		}
	}

	/// Copies the current field values for a submission
	pub fn snapshot(&self) -> DraftRegistration {
		DraftRegistration {
			name: (*self.name.get_untracked()).clone(),
			email: (*self.email.get_untracked()).clone(),
			password: (*self.password.get_untracked()).clone(),
			confirm_password: (*self.confirm_password.get_untracked()).clone(),
		}
	}
}
