//! Client IP resolution from proxy-set request headers

use crate::error::ApiError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::net::SocketAddr;
use tracing::{debug, trace};

/// Headers consulted for the originating client address, highest priority first
pub const CLIENT_IP_HEADERS: [&str; 8] = [
    // Amazon EC2, Heroku and most load balancers
    "x-client-ip",
    // Cloudflare, set on every request to the origin
    "cf-connecting-ip",
    // DigitalOcean app platform
    "do-connecting-ip",
    // Fastly and Firebase hosting
    "fastly-client-ip",
    // Akamai and Cloudflare enterprise
    "true-client-ip",
    // nginx proxy / fcgi default
    "x-real-ip",
    "x-forwarded",
    "forwarded-for",
];

/// Where a resolved client address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpSource {
    Header(&'static str),
    RemoteAddr,
}

impl fmt::Display for IpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpSource::Header(name) => write!(f, "header {}", name),
            IpSource::RemoteAddr => write!(f, "remote address"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp {
    pub value: String,
    pub source: IpSource,
}

/// Resolve the client address of a request
///
/// The first header of [`CLIENT_IP_HEADERS`] present in `headers` wins and its
/// value is returned as-is, without validation. When none is present the
/// remote peer's host is used.
///
/// # Examples
/// ```
/// use edgekit::api::client_ip::get_client_ip;
/// use reqwest::header::{HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-real-ip", HeaderValue::from_static("5.6.7.8"));
/// headers.insert("cf-connecting-ip", HeaderValue::from_static("1.2.3.4"));
/// assert_eq!(get_client_ip(&headers, "10.0.0.1"), "1.2.3.4");
/// assert_eq!(get_client_ip(&HeaderMap::new(), "10.0.0.1"), "10.0.0.1");
/// ```
pub fn get_client_ip(headers: &HeaderMap, remote_host: &str) -> String {
    resolve_client_ip(headers, remote_host).value
}

/// Like [`get_client_ip`], also reporting which source supplied the address
pub fn resolve_client_ip(headers: &HeaderMap, remote_host: &str) -> ClientIp {
    for name in CLIENT_IP_HEADERS {
        if let Some(value) = header_value(headers, name) {
            debug!(header = name, client_ip = %value, "client IP taken from header");
            return ClientIp {
                value,
                source: IpSource::Header(name),
            };
        }
    }

    trace!(remote = remote_host, "no client IP header present, using remote address");
    ClientIp {
        value: remote_host.to_string(),
        source: IpSource::RemoteAddr,
    }
}

/// Combined value of a header, repeated occurrences joined with ", "
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Host part of a peer socket address
pub fn remote_host(addr: &SocketAddr) -> String {
    addr.ip().to_string()
}

/// Parse a `Name: value` header line
pub fn parse_header_line(line: &str) -> Result<(HeaderName, HeaderValue), ApiError> {
    let invalid = |reason: String| ApiError::InvalidHeader {
        line: line.to_string(),
        reason,
    };

    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| invalid("missing ':' separator".to_string()))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| invalid(format!("invalid header name: {}", e)))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| invalid(format!("invalid header value: {}", e)))?;

    Ok((name, value))
}

/// Build a header map from `Name: value` lines, keeping repeated headers
pub fn headers_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::with_capacity(lines.len());
    for line in lines {
        let (name, value) = parse_header_line(line.as_ref())?;
        headers.append(name, value);
    }
    Ok(headers)
}
