// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Form posts here are a handful of short fields.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub type FormFields = HashMap<String, String>;

pub fn parse_query(req: &Request) -> FormFields {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

pub fn parse_urlencoded(raw: &[u8]) -> FormFields {
    form_urlencoded::parse(raw).into_owned().collect()
}

/// Read an `application/x-www-form-urlencoded` request body.
pub fn read_form(req: Request) -> Result<FormFields, ServerError> {
    let is_form = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with(mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()))
        .unwrap_or(false);
    if !is_form {
        return Err(ServerError::BadRequest(
            "expected application/x-www-form-urlencoded".into(),
        ));
    }

    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;
    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(parse_urlencoded(&raw))
}

/// Field value, or "" when absent.
pub fn field<'a>(fields: &'a FormFields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

/// Checkbox semantics: present with any non-empty value.
pub fn checked(fields: &FormFields, name: &str) -> bool {
    !field(fields, name).is_empty()
}
