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

use super::{Builder, Token, TokenType};
use crate::Result;
use crate::coerce;
use crate::errors::Error;
use serde_json::Value;

/// How to convert the `expires_in` field into seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Accept any value.
    ///
    /// Numeric strings are parsed, fractional numbers are truncated, and
    /// values without a numeric interpretation become `0`. This matches how
    /// loosely typed clients have always read this field.
    #[default]
    Lenient,
    /// Accept only integers, or strings containing an integer.
    ///
    /// Anything else is a parsing error.
    Strict,
}

/// Parses OAuth2 token responses into [Token] instances.
///
/// # Example
/// ```
/// # use oauth2_token::token::{Coercion, Parser};
/// let parser = Parser::new().with_expires_in_coercion(Coercion::Strict);
/// let err = parser
///     .parse(r#"{"access_token": "abc", "expires_in": "soon", "token_type": "Bearer"}"#)
///     .unwrap_err();
/// assert!(err.is_parsing());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    expires_in: Coercion,
}

impl Parser {
    /// Creates a parser with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how the `expires_in` field is converted.
    ///
    /// Defaults to [Coercion::Lenient].
    pub fn with_expires_in_coercion(mut self, coercion: Coercion) -> Self {
        self.expires_in = coercion;
        self
    }

    /// Parses `raw` as the JSON body of a token response.
    ///
    /// # Errors
    /// Returns an error for which [Error::is_parsing] is `true` if `raw` is
    /// not a JSON object, or if a string field has an array or object value.
    /// Returns an error for which [Error::is_missing_field] is `true` if any
    /// of `access_token`, `expires_in`, or `token_type` is missing or `null`.
    pub fn parse(&self, raw: &str) -> Result<Token> {
        let value = serde_json::from_str::<Value>(raw).map_err(Error::parsing)?;
        if !value.is_object() {
            return Err(Error::parsing("the token response is not a JSON object"));
        }
        let response = serde_json::from_value::<TokenResponse>(value).map_err(Error::parsing)?;

        let access_token = required(response.access_token, "access_token")?;
        let expires_in = required(response.expires_in, "expires_in")?;
        let token_type = required(response.token_type, "token_type")?;

        let mut builder = Builder::new(string_field(&access_token, "access_token")?)
            .with_expires_in(self.expires_in(&expires_in)?)
            .with_token_type(token_type_field(&token_type));
        if let Some(id_token) = response.id_token {
            builder = builder.with_id_token(string_field(&id_token, "id_token")?);
        }
        if let Some(refresh_token) = response.refresh_token {
            builder = builder.with_refresh_token(string_field(&refresh_token, "refresh_token")?);
        }
        let token = builder.build();

        tracing::debug!(
            online = token.is_online(),
            token_type = ?token.token_type(),
            "parsed token response"
        );
        Ok(token)
    }

    fn expires_in(&self, value: &Value) -> Result<i64> {
        match self.expires_in {
            Coercion::Strict => coerce::strict_integer(value).ok_or_else(|| {
                Error::parsing(format!("`expires_in` is not an integer: {value}"))
            }),
            Coercion::Lenient => {
                let seconds = coerce::lenient_integer(value);
                if coerce::strict_integer(value).is_none() {
                    tracing::warn!(%value, seconds, "coerced non-integer `expires_in`");
                }
                Ok(seconds)
            }
        }
    }
}

// The wire format of a token response.
//
// All fields are optional here so missing fields can be reported by name, and
// so loosely typed values can be coerced after deserialization. Fields set to
// `null` are treated as missing.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: Option<Value>,
    expires_in: Option<Value>,
    token_type: Option<Value>,
    id_token: Option<Value>,
    refresh_token: Option<Value>,
}

fn required(value: Option<Value>, field: &'static str) -> Result<Value> {
    value.ok_or_else(|| Error::missing_field_named(field))
}

fn string_field(value: &Value, field: &'static str) -> Result<String> {
    coerce::string(value)
        .ok_or_else(|| Error::parsing(format!("`{field}` must be a string, got {value}")))
}

fn token_type_field(value: &Value) -> TokenType {
    let token_type = value.as_str().map(TokenType::from).unwrap_or(TokenType::Unknown);
    if token_type == TokenType::Unknown {
        tracing::debug!(%value, "unrecognized token type");
    }
    token_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn payload() -> Value {
        json!({
            "access_token": "test-access-token",
            "expires_in": 3600,
            "token_type": "Bearer",
        })
    }

    #[test]
    fn minimal() -> TestResult {
        let token = Parser::new().parse(&payload().to_string())?;
        assert_eq!(token.access_token(), "test-access-token");
        assert_eq!(token.expires_in(), 3600);
        assert_eq!(token.token_type(), TokenType::Bearer);
        assert_eq!(token.id_token(), "");
        assert!(token.is_online(), "{token:?}");
        Ok(())
    }

    #[test]
    fn full() -> TestResult {
        let mut json = payload();
        json["id_token"] = json!("test-id-token");
        json["refresh_token"] = json!("test-refresh-token");
        json["scope"] = json!("scope1 scope2");
        let token = Parser::new().parse(&json.to_string())?;
        assert_eq!(token.id_token(), "test-id-token");
        assert!(!token.is_online(), "{token:?}");
        assert_eq!(token.refresh_token()?, "test-refresh-token");
        Ok(())
    }

    #[test_case("access_token")]
    #[test_case("expires_in")]
    #[test_case("token_type")]
    fn missing_required_field(field: &str) {
        let mut json = payload();
        json.as_object_mut().unwrap().remove(field);
        let err = Parser::new().parse(&json.to_string()).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert_eq!(err.missing_field(), Some(field));
    }

    #[test_case("access_token")]
    #[test_case("expires_in")]
    #[test_case("token_type")]
    fn null_required_field(field: &str) {
        let mut json = payload();
        json[field] = Value::Null;
        let err = Parser::new().parse(&json.to_string()).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert_eq!(err.missing_field(), Some(field));
    }

    #[test]
    fn null_optional_fields() -> TestResult {
        let mut json = payload();
        json["id_token"] = Value::Null;
        json["refresh_token"] = Value::Null;
        let token = Parser::new().parse(&json.to_string())?;
        assert_eq!(token.id_token(), "");
        assert!(token.is_online(), "{token:?}");
        Ok(())
    }

    #[test_case("{not json"; "malformed")]
    #[test_case(""; "empty")]
    #[test_case("[]"; "array")]
    #[test_case(r#"["abc", 3600, "Bearer"]"#; "positional array")]
    #[test_case(r#""abc""#; "string")]
    #[test_case("42"; "number")]
    #[test_case("null"; "null")]
    fn not_an_object(raw: &str) {
        let err = Parser::new().parse(raw).unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test_case("access_token", json!(["a"]))]
    #[test_case("id_token", json!({"a": "b"}))]
    #[test_case("refresh_token", json!([]))]
    fn non_scalar_string_field(field: &str, value: Value) {
        let mut json = payload();
        json[field] = value;
        let err = Parser::new().parse(&json.to_string()).unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test]
    fn numeric_access_token() -> TestResult {
        let mut json = payload();
        json["access_token"] = json!(12345);
        let token = Parser::new().parse(&json.to_string())?;
        assert_eq!(token.access_token(), "12345");
        Ok(())
    }

    #[test_case(json!("Bearer"), TokenType::Bearer)]
    #[test_case(json!("bearer"), TokenType::Unknown; "lowercase")]
    #[test_case(json!("mac"), TokenType::Unknown)]
    #[test_case(json!(1), TokenType::Unknown; "number")]
    #[test_case(json!(["Bearer"]), TokenType::Unknown; "array")]
    fn token_type(value: Value, want: TokenType) -> TestResult {
        let mut json = payload();
        json["token_type"] = value;
        let token = Parser::new().parse(&json.to_string())?;
        assert_eq!(token.token_type(), want);
        Ok(())
    }

    #[test_case(json!(3600), 3600)]
    #[test_case(json!("3600"), 3600; "numeric string")]
    #[test_case(json!(3600.7), 3600; "float")]
    #[test_case(json!("abc"), 0; "non numeric")]
    #[test_case(json!(-1), -1; "negative")]
    fn lenient_expires_in(value: Value, want: i64) -> TestResult {
        let mut json = payload();
        json["expires_in"] = value;
        let token = Parser::new().parse(&json.to_string())?;
        assert_eq!(token.expires_in(), want);
        Ok(())
    }

    #[test_case(json!("abc"); "non numeric")]
    #[test_case(json!(3600.7); "float")]
    #[test_case(json!(true); "boolean")]
    fn strict_expires_in_rejects(value: Value) {
        let mut json = payload();
        json["expires_in"] = value;
        let parser = Parser::new().with_expires_in_coercion(Coercion::Strict);
        let err = parser.parse(&json.to_string()).unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
        assert!(err.to_string().contains("expires_in"), "{err}");
    }

    #[test]
    fn strict_expires_in_accepts_integers() -> TestResult {
        let parser = Parser::new().with_expires_in_coercion(Coercion::Strict);
        let mut json = payload();
        json["expires_in"] = json!("120");
        assert_eq!(parser.parse(&json.to_string())?.expires_in(), 120);
        json["expires_in"] = json!(120);
        assert_eq!(parser.parse(&json.to_string())?.expires_in(), 120);
        Ok(())
    }

    #[test]
    fn default_is_lenient() {
        assert_eq!(Coercion::default(), Coercion::Lenient);
        assert_eq!(Parser::new().expires_in, Coercion::Lenient);
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<F: FnOnce()>(f: F) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = capture.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn logs_parsed_token_without_secrets() {
        let mut json = payload();
        json["refresh_token"] = json!("test-refresh-token");
        let logs = capture_logs(|| {
            Parser::new().parse(&json.to_string()).unwrap();
        });
        assert!(logs.contains("parsed token response"), "{logs}");
        assert!(logs.contains("online=false"), "{logs}");
        assert!(!logs.contains("test-access-token"), "{logs}");
        assert!(!logs.contains("test-refresh-token"), "{logs}");
    }

    #[test]
    fn logs_unrecognized_token_type() {
        let mut json = payload();
        json["token_type"] = json!("mac");
        let logs = capture_logs(|| {
            Parser::new().parse(&json.to_string()).unwrap();
        });
        assert!(logs.contains("unrecognized token type"), "{logs}");
        assert!(logs.contains("mac"), "{logs}");
    }

    #[test]
    fn logs_lenient_coercion() {
        let mut json = payload();
        json["expires_in"] = json!("soon");
        let logs = capture_logs(|| {
            Parser::new().parse(&json.to_string()).unwrap();
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("coerced non-integer `expires_in`"), "{logs}");
    }

    #[test]
    fn no_warning_for_integers() {
        let json = payload();
        let logs = capture_logs(|| {
            Parser::new().parse(&json.to_string()).unwrap();
        });
        assert!(!logs.contains("WARN"), "{logs}");
    }

    static_assertions::assert_impl_all!(Parser: Clone, Send, Sync);
}
