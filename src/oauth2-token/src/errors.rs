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

//! Errors created while parsing or querying a [Token].
//!
//! [Token]: crate::token::Token

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for this crate.
///
/// The error kind is opaque; use the `is_*()` predicates to decide how to
/// react. Parsing and missing field errors mean the authorization server
/// returned something unusable, and the application should probably restart
/// the authorization flow. An invalid state error is a programming error in
/// the caller: check [Token::is_online] before asking for a refresh token.
///
/// [Token::is_online]: crate::token::Token::is_online
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The payload is not valid JSON, is not a JSON object, or a field has an
    /// unusable value.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// A required field was missing from the payload.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// The operation is not valid for this token, e.g. requesting the refresh
    /// token of an online token.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidState(_))
    }

    /// The name of the missing field, if this is a missing field error.
    pub fn missing_field(&self) -> Option<&'static str> {
        match &self.0 {
            ErrorKind::MissingField(field) => Some(*field),
            _ => None,
        }
    }

    /// A problem parsing the token response payload.
    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    /// A required field was missing from the payload.
    pub(crate) fn missing_field_named(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    /// The token is in the wrong state for the requested operation.
    pub(crate) fn invalid_state(message: &'static str) -> Error {
        Error(ErrorKind::InvalidState(message))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot parse the token response: {0}")]
    Parsing(#[source] BoxError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid token state: {0}")]
    InvalidState(&'static str),
}
