// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest form body we accept.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Decoded `application/x-www-form-urlencoded` fields, last value wins.
#[derive(Debug, Default, Clone)]
pub struct Form(HashMap<String, String>);

impl Form {
    pub fn parse(encoded: &str) -> Self {
        Self(
            url::form_urlencoded::parse(encoded.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    /// Read and decode the request body.
    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        Self::from_reader(req.body_mut().reader())
    }

    /// Decode a form from `body`, rejecting anything over the size limit.
    fn from_reader(body: impl Read) -> Result<Self, ServerError> {
        let mut raw = Vec::new();
        // One byte past the limit is enough to tell an oversized body apart.
        body.take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest(format!(
                "form body exceeds {MAX_FORM_BYTES} bytes"
            )));
        }
        let raw = String::from_utf8(raw)
            .map_err(|_| ServerError::BadRequest("form body is not UTF-8".into()))?;
        Ok(Self::parse(&raw))
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri().query().map(Self::parse).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Field value, trimmed, `None` when blank.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn required(&self, key: &str) -> Result<&str, ServerError> {
        self.text(key)
            .ok_or_else(|| ServerError::BadRequest(format!("missing field `{key}`")))
    }

    /// Unsigned count, `default` when absent.
    pub fn count(&self, key: &str, default: u32) -> Result<u32, ServerError> {
        match self.text(key) {
            None => Ok(default),
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("`{key}` must be a whole number"))),
        }
    }
}
