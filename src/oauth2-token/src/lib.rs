// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! OAuth2 access token responses.
//!
//! This crate parses the JSON body an OAuth2 authorization server returns
//! from its token endpoint, and exposes the result as an immutable
//! [token::Token]. It does not make any network requests, store credentials,
//! or refresh tokens; use it after your HTTP client fetched the response.
//!
//! A token is either *online* or *offline*. Offline tokens come with a refresh
//! token, which can be used to obtain new access tokens without asking the
//! user to authenticate again. Online tokens do not, and asking for their
//! refresh token is an error:
//!
//! ```
//! # use oauth2_token::token::Token;
//! let token = Token::from_payload(r#"{
//!     "access_token": "my-access-token",
//!     "expires_in": 3600,
//!     "token_type": "Bearer",
//!     "refresh_token": "my-refresh-token"
//! }"#)?;
//! if !token.is_online() {
//!     println!("refresh with {}", token.refresh_token()?);
//! }
//! # Ok::<(), oauth2_token::errors::Error>(())
//! ```
//!
//! The crate emits [tracing] events at `DEBUG` and `WARN` levels. Token values
//! are never included in these events.
//!
//! [tracing]: https://docs.rs/tracing

pub mod errors;

/// Types and functions to work with OAuth2 access token responses.
pub mod token;

pub(crate) mod coerce;

/// A `Result` alias where the `Err` case is `oauth2_token::errors::Error`.
pub type Result<T> = std::result::Result<T, crate::errors::Error>;
