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

//! Types and functions to work with OAuth2 [access token responses].
//!
//! [access token responses]: https://datatracker.ietf.org/doc/html/rfc6749#section-5.1

mod builder;
mod parser;

pub use builder::Builder;
pub use parser::{Coercion, Parser};

use crate::Result;
use crate::errors::Error;
use std::fmt::{Display, Formatter};

const ONLINE_PLACEHOLDER: &str = "not available for online type";
const EMPTY_PLACEHOLDER: &str = "-";

/// The type of an access token.
///
/// Authorization servers may return any string in `token_type`. Only
/// `"Bearer"` (exact match) is recognized; everything else is
/// [TokenType::Unknown].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// The token type is not recognized.
    Unknown,
    /// A [bearer token]: presenting the token string is enough.
    ///
    /// [bearer token]: https://datatracker.ietf.org/doc/html/rfc6750
    #[default]
    Bearer,
}

impl TokenType {
    /// The numeric code for this token type: `0` for unknown, `1` for bearer.
    pub fn code(&self) -> i32 {
        match self {
            TokenType::Unknown => 0,
            TokenType::Bearer => 1,
        }
    }
}

impl From<&str> for TokenType {
    fn from(value: &str) -> Self {
        match value {
            "Bearer" => TokenType::Bearer,
            _ => TokenType::Unknown,
        }
    }
}

/// Represents an OAuth2 access token response.
///
/// Tokens are created by parsing the JSON body returned by an authorization
/// server, or with a [Builder]. Once created, a token cannot be modified.
///
/// # Example
/// ```
/// # use oauth2_token::token::{Token, TokenType};
/// let token = Token::from_payload(
///     r#"{"access_token": "abc", "expires_in": 3600, "token_type": "Bearer"}"#,
/// )?;
/// assert_eq!(token.access_token(), "abc");
/// assert_eq!(token.token_type(), TokenType::Bearer);
/// assert!(token.is_online());
/// assert!(token.refresh_token().is_err());
/// # Ok::<(), oauth2_token::errors::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Token {
    access_token: String,
    token_type: TokenType,
    expires_in: i64,
    id_token: String,
    // `None` for online tokens.
    refresh_token: Option<String>,
}

impl Token {
    /// Parses a token response with the default [Parser] options.
    ///
    /// # Errors
    /// Returns an error if `raw` is not a JSON object, or if any of
    /// `access_token`, `expires_in`, or `token_type` is missing.
    pub fn from_payload(raw: &str) -> Result<Self> {
        Parser::new().parse(raw)
    }

    /// Returns a [Builder] to create tokens without parsing a payload.
    pub fn builder<T: Into<String>>(access_token: T) -> Builder {
        Builder::new(access_token)
    }

    /// The access token string.
    ///
    /// This is the value used in the `Authorization:` header.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The lifetime of the access token, in seconds.
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    /// The OpenID Connect ID token, or an empty string if none was returned.
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    /// The type of the access token.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns `true` if the token was issued for online access.
    ///
    /// Online tokens have no refresh token.
    pub fn is_online(&self) -> bool {
        self.refresh_token.is_none()
    }

    /// The refresh token of an offline token.
    ///
    /// # Errors
    /// Online tokens have no refresh token, and this returns an error for
    /// which [Error::is_invalid_state] is `true`.
    pub fn refresh_token(&self) -> Result<&str> {
        self.refresh_token
            .as_deref()
            .ok_or_else(|| Error::invalid_state("online tokens have no refresh token"))
    }
}

impl std::str::FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Token::from_payload(s)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("id_token", &"[censored]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[censored]"),
            )
            .finish()
    }
}

/// A multi-line summary of the token.
///
/// Unlike the `Debug` format, this includes the token values.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id_token = if self.id_token.is_empty() {
            EMPTY_PLACEHOLDER
        } else {
            self.id_token.as_str()
        };
        let refresh_token = self.refresh_token.as_deref().unwrap_or(ONLINE_PLACEHOLDER);
        writeln!(f, "    access token:  {}", self.access_token)?;
        writeln!(f, "    expires in:    {}", self.expires_in)?;
        writeln!(f, "    id token:      {id_token}")?;
        writeln!(f, "    refresh token: {refresh_token}")?;
        write!(f, "    token type:    {}", self.token_type.code())
    }
}
