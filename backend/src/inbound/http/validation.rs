//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    InvalidJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Path parameter carrying a user identifier.
pub(crate) const USER_ID_FIELD: FieldName = FieldName::new("id");

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidInteger.as_str(),
    }))
}

pub(crate) fn invalid_json_error(reason: &str) -> Error {
    Error::invalid_request(format!("invalid JSON body: {reason}")).with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
    }))
}

/// Parse a raw path segment into a [`UserId`].
pub(crate) fn parse_user_id(value: &str) -> Result<UserId, Error> {
    value
        .parse()
        .map_err(|_| invalid_integer_error(USER_ID_FIELD, value))
}

/// JSON extractor configuration rendering body failures as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| actix_web::Error::from(invalid_json_error(&err.to_string())))
}
