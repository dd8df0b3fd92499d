//! Base response headers
//!
//! The fixed header set (CORS and cache control) that every response carries,
//! whatever its status.

use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, SERVER,
};

use crate::config::HttpSettings;
use crate::error::ConfigError;

/// Headers added to every response
#[derive(Debug, Clone)]
pub struct BaseHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl BaseHeaders {
    /// Build the header set from settings, validating each value
    pub fn from_settings(http: &HttpSettings) -> Result<Self, ConfigError> {
        let pairs = [
            (ACCESS_CONTROL_ALLOW_ORIGIN, &http.allow_origin),
            (ACCESS_CONTROL_ALLOW_METHODS, &http.allow_methods),
            (ACCESS_CONTROL_ALLOW_HEADERS, &http.allow_headers),
            (CACHE_CONTROL, &http.cache_control),
            (SERVER, &http.server_name),
        ];

        let headers = pairs
            .into_iter()
            .map(|(name, value)| {
                HeaderValue::from_str(value)
                    .map(|v| (name.clone(), v))
                    .map_err(|_| ConfigError::InvalidHeader {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers })
    }

    /// Insert the base headers, replacing any value already present
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
    }
}
