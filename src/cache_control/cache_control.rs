//! Request cache directives, modelled after the `Cache-Control` header a
//! client sends.

use std::{fmt, time::Duration};

use http::{HeaderMap, header};
use tracing::debug;

/// Largest number of seconds a directive can carry, values above it are
/// clamped.
const MAX_SECONDS: u32 = i32::MAX as u32;

/// Immutable set of cache directives. Second-valued directives that are not
/// present are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheControl {
    max_age_seconds: Option<u32>,
    max_stale_seconds: Option<u32>,
    min_fresh_seconds: Option<u32>,
    no_cache: bool,
    no_store: bool,
    no_transform: bool,
    only_if_cached: bool,
}

impl CacheControl {
    /// Always validate with the server, even when a cached copy exists.
    pub const FORCE_NETWORK: CacheControl = CacheControl {
        max_age_seconds: None,
        max_stale_seconds: None,
        min_fresh_seconds: None,
        no_cache: true,
        no_store: false,
        no_transform: false,
        only_if_cached: false,
    };

    /// Only use the cache, accepting entries of any staleness.
    pub const FORCE_CACHE: CacheControl = CacheControl {
        max_age_seconds: None,
        max_stale_seconds: Some(MAX_SECONDS),
        min_fresh_seconds: None,
        no_cache: false,
        no_store: false,
        no_transform: false,
        only_if_cached: true,
    };

    pub fn builder() -> CacheControlBuilder {
        CacheControlBuilder::default()
    }

    /// A builder pre-populated with every directive of `self`, for adding
    /// more directives to an existing set.
    pub fn to_builder(&self) -> CacheControlBuilder {
        let mut builder = CacheControlBuilder::default();
        if let Some(seconds) = self.max_age_seconds {
            builder = builder.max_age(Duration::from_secs(seconds.into()));
        }
        if let Some(seconds) = self.max_stale_seconds {
            builder = builder.max_stale(Duration::from_secs(seconds.into()));
        }
        if let Some(seconds) = self.min_fresh_seconds {
            builder = builder.min_fresh(Duration::from_secs(seconds.into()));
        }
        if self.no_cache {
            builder = builder.no_cache();
        }
        if self.no_store {
            builder = builder.no_store();
        }
        if self.no_transform {
            builder = builder.no_transform();
        }
        if self.only_if_cached {
            builder = builder.only_if_cached();
        }
        builder
    }

    pub fn max_age_seconds(&self) -> Option<u32> {
        self.max_age_seconds
    }

    pub fn max_stale_seconds(&self) -> Option<u32> {
        self.max_stale_seconds
    }

    pub fn min_fresh_seconds(&self) -> Option<u32> {
        self.min_fresh_seconds
    }

    pub fn no_cache(&self) -> bool {
        self.no_cache
    }

    pub fn no_store(&self) -> bool {
        self.no_store
    }

    pub fn no_transform(&self) -> bool {
        self.no_transform
    }

    pub fn only_if_cached(&self) -> bool {
        self.only_if_cached
    }

    /// Reads every `Cache-Control` header, plus `Pragma: no-cache`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cache_control = CacheControl::default();

        for value in headers.get_all(header::CACHE_CONTROL) {
            if let Ok(value) = value.to_str() {
                cache_control.apply_directives(value);
            }
        }
        for value in headers.get_all(header::PRAGMA) {
            if let Ok(value) = value.to_str() {
                if value
                    .split(',')
                    .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
                {
                    cache_control.no_cache = true;
                }
            }
        }

        cache_control
    }

    /// Parses a single header value. Unknown directives and unparsable
    /// seconds are skipped.
    pub fn parse(value: &str) -> Self {
        let mut cache_control = CacheControl::default();
        cache_control.apply_directives(value);
        cache_control
    }

    fn apply_directives(&mut self, value: &str) {
        for directive in value.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }

            let (name, argument) = match directive.split_once('=') {
                Some((name, argument)) => (name.trim(), Some(argument.trim().trim_matches('"'))),
                None => (directive, None),
            };

            match name.to_ascii_lowercase().as_str() {
                "no-cache" => self.no_cache = true,
                "no-store" => self.no_store = true,
                "no-transform" => self.no_transform = true,
                "only-if-cached" => self.only_if_cached = true,
                "max-age" => self.max_age_seconds = parse_seconds(name, argument),
                "max-stale" => {
                    // A bare max-stale accepts any staleness.
                    self.max_stale_seconds = match argument {
                        None => Some(MAX_SECONDS),
                        Some(_) => parse_seconds(name, argument),
                    }
                }
                "min-fresh" => self.min_fresh_seconds = parse_seconds(name, argument),
                _ => debug!("Ignoring cache directive {}", directive),
            }
        }
    }

    /// Header value for these directives, empty when there are none.
    pub fn header_value(&self) -> String {
        self.to_string()
    }
}

fn parse_seconds(name: &str, argument: Option<&str>) -> Option<u32> {
    match argument.map(str::parse::<u64>) {
        Some(Ok(seconds)) => Some(clamp_seconds(seconds)),
        _ => {
            debug!("Ignoring {} with invalid seconds {:?}", name, argument);
            None
        }
    }
}

fn clamp_seconds(seconds: u64) -> u32 {
    u32::try_from(seconds).map_or(MAX_SECONDS, |s| s.min(MAX_SECONDS))
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives = Vec::new();
        if self.no_cache {
            directives.push("no-cache".to_string());
        }
        if self.no_store {
            directives.push("no-store".to_string());
        }
        if let Some(seconds) = self.max_age_seconds {
            directives.push(format!("max-age={}", seconds));
        }
        if let Some(seconds) = self.max_stale_seconds {
            directives.push(format!("max-stale={}", seconds));
        }
        if let Some(seconds) = self.min_fresh_seconds {
            directives.push(format!("min-fresh={}", seconds));
        }
        if self.only_if_cached {
            directives.push("only-if-cached".to_string());
        }
        if self.no_transform {
            directives.push("no-transform".to_string());
        }
        write!(f, "{}", directives.join(", "))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CacheControlBuilder {
    directives: CacheControl,
}

impl CacheControlBuilder {
    /// Accept a cached response no older than `max_age`. Sub-second precision
    /// is truncated.
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.directives.max_age_seconds = Some(clamp_seconds(max_age.as_secs()));
        self
    }

    /// Accept a cached response that has been stale for at most `max_stale`.
    pub fn max_stale(mut self, max_stale: Duration) -> Self {
        self.directives.max_stale_seconds = Some(clamp_seconds(max_stale.as_secs()));
        self
    }

    /// Only accept a cached response that stays fresh for at least
    /// `min_fresh`.
    pub fn min_fresh(mut self, min_fresh: Duration) -> Self {
        self.directives.min_fresh_seconds = Some(clamp_seconds(min_fresh.as_secs()));
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.directives.no_cache = true;
        self
    }

    pub fn no_store(mut self) -> Self {
        self.directives.no_store = true;
        self
    }

    pub fn no_transform(mut self) -> Self {
        self.directives.no_transform = true;
        self
    }

    pub fn only_if_cached(mut self) -> Self {
        self.directives.only_if_cached = true;
        self
    }

    pub fn build(self) -> CacheControl {
        self.directives
    }
}

/// Builder carrying the same directives as `cache_control`.
pub fn cache_control_builder(cache_control: &CacheControl) -> CacheControlBuilder {
    cache_control.to_builder()
}
