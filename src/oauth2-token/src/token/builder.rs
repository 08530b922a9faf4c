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

use super::{Token, TokenType};

/// A builder for constructing [Token] instances.
///
/// Tokens are normally created by parsing a response from the authorization
/// server. Use this builder in tests, or when the token fields come from
/// somewhere else.
///
/// # Example
/// ```
/// # use oauth2_token::token::{Builder, TokenType};
/// let token = Builder::new("my-access-token")
///     .with_expires_in(3600)
///     .with_refresh_token("my-refresh-token")
///     .build();
/// assert!(!token.is_online());
/// assert_eq!(token.token_type(), TokenType::Bearer);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    token: Token,
}

impl Builder {
    /// Creates a new builder for an online, bearer token.
    ///
    /// The token expires in `0` seconds and has no ID token unless
    /// configured otherwise.
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            token: Token {
                access_token: access_token.into(),
                token_type: TokenType::default(),
                expires_in: 0,
                id_token: String::new(),
                refresh_token: None,
            },
        }
    }

    /// Sets the lifetime of the access token, in seconds.
    ///
    /// The value is not validated, negative values are preserved.
    pub fn with_expires_in(mut self, expires_in: i64) -> Self {
        self.token.expires_in = expires_in;
        self
    }

    /// Sets the OpenID Connect ID token.
    pub fn with_id_token<S: Into<String>>(mut self, id_token: S) -> Self {
        self.token.id_token = id_token.into();
        self
    }

    /// Sets the refresh token, making this an offline token.
    ///
    /// # Example
    /// ```
    /// # use oauth2_token::token::Builder;
    /// let token = Builder::new("my-access-token")
    ///     .with_refresh_token("my-refresh-token")
    ///     .build();
    /// assert_eq!(token.refresh_token().ok(), Some("my-refresh-token"));
    /// ```
    pub fn with_refresh_token<S: Into<String>>(mut self, refresh_token: S) -> Self {
        self.token.refresh_token = Some(refresh_token.into());
        self
    }

    /// Sets the token type.
    ///
    /// Accepts a [TokenType] or the string from the `token_type` field of a
    /// token response. Unrecognized strings map to [TokenType::Unknown].
    ///
    /// # Example
    /// ```
    /// # use oauth2_token::token::{Builder, TokenType};
    /// let token = Builder::new("my-access-token").with_token_type("mac").build();
    /// assert_eq!(token.token_type(), TokenType::Unknown);
    /// ```
    pub fn with_token_type<T: Into<TokenType>>(mut self, token_type: T) -> Self {
        self.token.token_type = token_type.into();
        self
    }

    /// Returns the [Token] with the configured settings.
    pub fn build(self) -> Token {
        self.token
    }
}
