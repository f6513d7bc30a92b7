// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::endpoint::RegistrationEndpoint;
use crate::navigation::Navigator;
use crate::notifications::Notifier;
use crate::session::SessionStore;
use signup_shared::validation::{validate, DraftRegistration, ValidationError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionState {
	Idle,
	Submitting,
}

/// How a submission ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	/// A rule failed; nothing was sent
	Rejected(ValidationError),
	/// The endpoint refused or couldn't be reached; carries the message shown to the user
	Failed(String),
	Registered,
}

/// Validates registration forms and sends the ones that pass
pub struct Registrar<E, S, N, M> {
	endpoint: E,
	session: S,
	navigator: N,
	notifier: M,
	root_path: String,
}

impl<E, S, N, M> Registrar<E, S, N, M>
where
	E: RegistrationEndpoint,
	S: SessionStore,
	N: Navigator,
	M: Notifier,
{
	pub fn new(endpoint: E, session: S, navigator: N, notifier: M, root_path: &str) -> Self {
		Self {
			endpoint,
			session,
			navigator,
			notifier,
			root_path: root_path.to_string(),
		}
	}

	/// Handles one press of the submit button.
	///
	/// The draft is validated as a whole before anything is sent. `on_state` hears about the request going out and
	/// coming back so the page can show that it's busy. Every failure is reported to the notifier exactly once and
	/// leaves the session untouched.
	pub async fn submit(
		&self,
		draft: &DraftRegistration,
		mut on_state: impl FnMut(SubmissionState),
	) -> SubmissionOutcome {
		let request = match validate(draft) {
			Ok(request) => request,
			Err(error) => {
				log::debug!("Registration form rejected: {}", error);
				self.notifier.notify_error(error.message());
				return SubmissionOutcome::Rejected(error);
			}
		};

		log::debug!("Sending registration request");
		on_state(SubmissionState::Submitting);
		let result = self.endpoint.register(&request).await;
		on_state(SubmissionState::Idle);

		match result {
			Ok(credentials) => {
				log::info!("Registration succeeded");
				self.session.set_credentials(credentials);
				self.navigator.go_to(&self.root_path);
				SubmissionOutcome::Registered
			}
			Err(failure) => {
				let message = failure.user_message().to_string();
				log::warn!("Registration was refused: {}", message);
				self.notifier.notify_error(&message);
				SubmissionOutcome::Failed(message)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use futures::executor::block_on;
	use serde_json::json;
	use signup_shared::messages::user::SessionCredentials;
	use signup_shared::messages::user_register::{RegistrationFailure, RegistrationRequest};
	use std::cell::RefCell;

	struct FakeEndpoint {
		response: Result<SessionCredentials, RegistrationFailure>,
		requests: RefCell<Vec<RegistrationRequest>>,
	}

	impl FakeEndpoint {
		fn answering(response: Result<SessionCredentials, RegistrationFailure>) -> Self {
			Self {
				response,
				requests: RefCell::new(Vec::new()),
			}
		}
	}

	#[async_trait(?Send)]
	impl RegistrationEndpoint for FakeEndpoint {
		async fn register(&self, request: &RegistrationRequest) -> Result<SessionCredentials, RegistrationFailure> {
			self.requests.borrow_mut().push(request.clone());
			self.response.clone()
		}
	}

	#[derive(Default)]
	struct FakeSession {
		credentials: RefCell<Option<SessionCredentials>>,
	}

	impl SessionStore for FakeSession {
		fn has_session(&self) -> bool {
			self.credentials.borrow().is_some()
		}

		fn set_credentials(&self, credentials: SessionCredentials) {
			*self.credentials.borrow_mut() = Some(credentials);
		}
	}

	#[derive(Default)]
	struct FakeNavigator {
		visited: RefCell<Vec<String>>,
	}

	impl Navigator for FakeNavigator {
		fn go_to(&self, path: &str) {
			self.visited.borrow_mut().push(path.to_string());
		}
	}

	#[derive(Default)]
	struct FakeNotifier {
		messages: RefCell<Vec<String>>,
	}

	impl Notifier for FakeNotifier {
		fn notify_error(&self, message: &str) {
			self.messages.borrow_mut().push(message.to_string());
		}
	}

	struct Harness {
		endpoint: FakeEndpoint,
		session: FakeSession,
		navigator: FakeNavigator,
		notifier: FakeNotifier,
	}

	impl Harness {
		fn new(response: Result<SessionCredentials, RegistrationFailure>) -> Self {
			Self {
				endpoint: FakeEndpoint::answering(response),
				session: FakeSession::default(),
				navigator: FakeNavigator::default(),
				notifier: FakeNotifier::default(),
			}
		}

		fn submit(&self, draft: &DraftRegistration) -> (SubmissionOutcome, Vec<SubmissionState>) {
			let registrar = Registrar::new(&self.endpoint, &self.session, &self.navigator, &self.notifier, "/");
			let mut states = Vec::new();
			let outcome = block_on(registrar.submit(draft, |state| states.push(state)));
			(outcome, states)
		}
	}

	fn credentials() -> SessionCredentials {
		serde_json::from_value(json!({ "_id": "u1", "name": "Jane Doe", "email": "jane@gmail.com" })).unwrap()
	}

	fn draft(name: &str, email: &str, password: &str, confirm_password: &str) -> DraftRegistration {
		DraftRegistration {
			name: String::from(name),
			email: String::from(email),
			password: String::from(password),
			confirm_password: String::from(confirm_password),
		}
	}

	fn jane() -> DraftRegistration {
		draft("Jane Doe", "jane@gmail.com", "Abc123!", "Abc123!")
	}

	#[test]
	fn successful_registration_stores_session_and_goes_home() {
		let harness = Harness::new(Ok(credentials()));
		let (outcome, states) = harness.submit(&jane());

		assert_eq!(outcome, SubmissionOutcome::Registered);
		assert_eq!(
			*harness.endpoint.requests.borrow(),
			vec![RegistrationRequest {
				name: String::from("Jane Doe"),
				email: String::from("jane@gmail.com"),
				password: String::from("Abc123!"),
			}]
		);
		assert_eq!(*harness.session.credentials.borrow(), Some(credentials()));
		assert_eq!(*harness.navigator.visited.borrow(), vec![String::from("/")]);
		assert!(harness.notifier.messages.borrow().is_empty());
		assert_eq!(states, vec![SubmissionState::Submitting, SubmissionState::Idle]);
	}

	#[test]
	fn invalid_form_never_reaches_the_endpoint() {
		let cases = [
			(draft("", "jane@gmail.com", "Abc123!", "Abc123!"), "Please fill all fields."),
			(draft("Jane", "jane@yahoo.com", "Abc123!", "Abc123!"), "Email should end with @gmail.com."),
			(draft("Al", "al@gmail.com", "Abc123!", "Abc123!"), "Name should be at least 3 characters."),
			(draft("Ann3", "ann@gmail.com", "Abc123!", "Abc123!"), "Name should only contain letters and spaces."),
			(draft("Jane", "jane@gmail.com", "Abc1!2", "Abc1!3"), "Confirm Passwords do not match."),
		];

		for (draft, expected) in cases.iter() {
			let harness = Harness::new(Ok(credentials()));
			let (outcome, states) = harness.submit(draft);

			assert!(matches!(outcome, SubmissionOutcome::Rejected(_)), "{:?}", draft);
			assert_eq!(*harness.notifier.messages.borrow(), vec![expected.to_string()]);
			assert!(harness.endpoint.requests.borrow().is_empty());
			assert!(!harness.session.has_session());
			assert!(harness.navigator.visited.borrow().is_empty());
			assert!(states.is_empty());
		}
	}

	#[test]
	fn weak_password_uses_the_combined_message() {
		let harness = Harness::new(Ok(credentials()));
		let (outcome, _) = harness.submit(&draft("Jane", "jane@gmail.com", "abc123", "abc123"));
		assert_eq!(outcome, SubmissionOutcome::Rejected(ValidationError::WeakPassword));
		assert_eq!(
			*harness.notifier.messages.borrow(),
			vec![String::from(ValidationError::WeakPassword.message())]
		);
	}

	#[test]
	fn server_message_is_shown_and_nothing_else_changes() {
		let failure: RegistrationFailure =
			serde_json::from_value(json!({ "status": 400, "data": { "message": "Email already exists" } })).unwrap();
		let harness = Harness::new(Err(failure));
		let (outcome, states) = harness.submit(&jane());

		assert_eq!(outcome, SubmissionOutcome::Failed(String::from("Email already exists")));
		assert_eq!(
			*harness.notifier.messages.borrow(),
			vec![String::from("Email already exists")]
		);
		assert!(!harness.session.has_session());
		assert!(harness.navigator.visited.borrow().is_empty());
		assert_eq!(states, vec![SubmissionState::Submitting, SubmissionState::Idle]);
	}

	#[test]
	fn transport_failure_shows_its_description() {
		let harness = Harness::new(Err(RegistrationFailure::transport("TypeError: Failed to fetch")));
		let (outcome, _) = harness.submit(&jane());
		assert_eq!(outcome, SubmissionOutcome::Failed(String::from("TypeError: Failed to fetch")));
		assert_eq!(harness.endpoint.requests.borrow().len(), 1);
	}

	#[test]
	fn form_can_be_resubmitted_after_failure() {
		let harness = Harness::new(Err(RegistrationFailure::default()));
		harness.submit(&jane());
		harness.submit(&jane());
		assert_eq!(harness.endpoint.requests.borrow().len(), 2);
		assert_eq!(harness.notifier.messages.borrow().len(), 2);
	}
}
