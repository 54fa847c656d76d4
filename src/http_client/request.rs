use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::{Deref, DerefMut},
};

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::cache_control::cache_control::CacheControl;

pub const CACHE_CONTROL: &str = "cache-control";

#[derive(Debug, Clone)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
    pub headers: RequestHeaders,
    pub body: Bytes,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Request {
            method: RequestMethod::Get,
            url: url.into(),
            headers: RequestHeaders::default(),
            body: Bytes::new(),
        }
    }

    /// Replaces any cache directives on the request. An empty directive set
    /// removes the header altogether.
    pub fn with_cache_control(mut self, cache_control: &CacheControl) -> Self {
        self.headers
            .retain(|name, _| !name.eq_ignore_ascii_case(CACHE_CONTROL));

        let value = cache_control.header_value();
        if !value.is_empty() {
            self.headers.insert(CACHE_CONTROL.to_string(), value);
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders(pub HashMap<String, String>);

impl RequestHeaders {
    /// Case-insensitive lookup, header names coming back from the transport
    /// are lowercase while callers may use any casing.
    pub fn get_ignore_case(&self, name: &str) -> Option<&String> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

impl Deref for RequestHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RequestHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for RequestHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        RequestHeaders(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Patch => "PATCH",
        };
        write!(f, "{}", s)
    }
}

/// Headers whose values are not visible ASCII are dropped.
impl From<&HeaderMap> for RequestHeaders {
    fn from(headers: &HeaderMap) -> Self {
        RequestHeaders(
            headers
                .iter()
                .filter_map(|(name, value)| {
                    let value = value.to_str().ok()?;
                    Some((name.as_str().to_string(), value.to_string()))
                })
                .collect(),
        )
    }
}

/// Entries that are not legal header names or values are dropped.
impl From<RequestHeaders> for HeaderMap {
    fn from(headers: RequestHeaders) -> Self {
        headers
            .0
            .into_iter()
            .filter_map(|(name, value)| {
                let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
                let value = HeaderValue::from_str(&value).ok()?;
                Some((name, value))
            })
            .collect()
    }
}
