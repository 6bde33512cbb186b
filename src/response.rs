//! Normalized result of a request.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Message used when the server's body is not valid JSON
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse response";

/// Whatever came back from a request: the server's JSON verbatim, or a
/// locally built `{"success": false, "error": ...}` when the call failed
/// before a JSON body was available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response(Value);

/// User record returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub hwid: Option<String>,
}

/// License record returned by a successful license check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LicenseInfo {
    pub key: String,
    #[serde(default)]
    pub is_used: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Response {
    /// Build a failure response
    pub fn failure(error: impl Into<String>) -> Self {
        Self(json!({ "success": false, "error": error.into() }))
    }

    pub(crate) fn parse_failure() -> Self {
        Self::failure(PARSE_ERROR_MESSAGE)
    }

    /// The `success` flag; missing or non-boolean counts as `false`
    pub fn success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    /// The `error` message, if present
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `user` object from a login response
    pub fn user(&self) -> Option<UserInfo> {
        self.typed_field("user")
    }

    /// `license` object from a license check response
    pub fn license(&self) -> Option<LicenseInfo> {
        self.typed_field("license")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn typed_field<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let field = self.0.get(key)?;
        T::deserialize(field).ok()
    }
}

impl From<Value> for Response {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Response> for Value {
    fn from(response: Response) -> Self {
        response.0
    }
}
