// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use gloo_net::http::Request;
use signup_shared::messages::user::SessionCredentials;
use signup_shared::messages::user_register::{ErrorPayload, RegistrationFailure, RegistrationRequest};

/// The remote service that creates accounts
#[async_trait(?Send)]
pub trait RegistrationEndpoint {
	async fn register(&self, request: &RegistrationRequest) -> Result<SessionCredentials, RegistrationFailure>;
}

#[async_trait(?Send)]
impl<T: RegistrationEndpoint + ?Sized> RegistrationEndpoint for &T {
	async fn register(&self, request: &RegistrationRequest) -> Result<SessionCredentials, RegistrationFailure> {
		(**self).register(request).await
	}
}

/// Registers accounts by posting JSON over HTTP
pub struct HttpRegistrationEndpoint {
	url: String,
}

impl HttpRegistrationEndpoint {
	pub fn new(url: &str) -> Self {
		Self { url: url.to_string() }
	}
}

#[async_trait(?Send)]
impl RegistrationEndpoint for HttpRegistrationEndpoint {
	/// Sends one registration request.
	///
	/// # Errors
	///
	/// The failure describes what went wrong: the transport's description when no response arrived, the server's
	/// error body when it answered with an unsuccessful status, or a parse description when a successful response
	/// had a body that wasn't a credentials object. An empty body is an empty set of credentials.
	async fn register(&self, request: &RegistrationRequest) -> Result<SessionCredentials, RegistrationFailure> {
		let http_request = Request::post(&self.url)
			.json(request)
			.map_err(RegistrationFailure::transport)?;
		let response = http_request.send().await.map_err(RegistrationFailure::transport)?;

		let status = response.status();
		if response.ok() {
			let body = response
				.text()
				.await
				.map_err(|error| RegistrationFailure::unreadable(status, error))?;
			return SessionCredentials::from_response_body(&body)
				.map_err(|error| RegistrationFailure::unreadable(status, error));
		}

		let status_text = response.status_text();
		let payload: Option<ErrorPayload> = response.json().await.ok();
		Err(RegistrationFailure::server(status, &status_text, payload))
	}
}
