//! Client for the Have I Been Pwned k-anonymity range endpoint.
//!
//! A lookup sends only the 5-character digest prefix; the service answers
//! with every suffix it knows under that prefix and the match happens
//! locally, so the cleartext password (and its full hash) never leave the
//! process.

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::error::Error;
use crate::fingerprint::{Credential, fingerprint};

/// Default range endpoint, path-parameterized by the digest prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default request timeout. The service has no SLA; a bounded timeout turns
/// a hung connection into a `Connection` error instead of blocking forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum attempts per lookup on transport failure.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (doubles each retry)
const RETRY_BASE_DELAY_MS: u64 = 100;

/// One candidate from a range response: a 35-character digest suffix and the
/// number of times the corresponding password appears in the breach corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

/// Blocking client for range lookups.
///
/// Construct once and pass to the operations that need it. The base URL is
/// configurable so tests can point at a local server.
pub struct BreachClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl BreachClient {
    /// Creates a client against the public endpoint with the default timeout.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client against a custom base URL with the given timeout.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, base_url: base_url.into() }
    }

    /// Fetches every known digest suffix under a 5-character prefix.
    ///
    /// A non-success status fails immediately with [`Error::RangeFetch`].
    /// Transport failures are retried up to [`MAX_RETRIES`] times with
    /// exponential backoff before surfacing as [`Error::Connection`].
    #[instrument(skip(self))]
    pub fn lookup_range(&self, prefix: &str) -> Result<Vec<RangeEntry>, Error> {
        let url = format!("{}/{}", self.base_url, prefix);

        let mut attempt = 0;
        loop {
            if attempt > 0 {
                let delay = RETRY_BASE_DELAY_MS * (1 << attempt);
                std::thread::sleep(Duration::from_millis(delay));
            }

            match self.http.get(&url).send().and_then(|response| {
                let status = response.status();
                response.text().map(|body| (status, body))
            }) {
                Ok((status, _)) if !status.is_success() => {
                    return Err(Error::RangeFetch {
                        prefix: prefix.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok((_, body)) => {
                    let entries = parse_range(prefix, &body)?;
                    debug!(prefix, entries = entries.len(), "range fetched");
                    return Ok(entries);
                }
                Err(source) => {
                    attempt += 1;
                    if attempt >= MAX_RETRIES {
                        return Err(Error::Connection { prefix: prefix.to_string(), source });
                    }
                    warn!(prefix, attempt, "transport failure, retrying: {source}");
                }
            }
        }
    }

    /// Checks whether a credential appears in the breach corpus.
    ///
    /// Returns `Ok(true)` when the digest suffix matches an entry in the
    /// range response, `Ok(false)` when the scan completes without a match.
    /// Any failure (bad input type, fetch failure) propagates as `Err` —
    /// callers must treat that as "could not determine", never as "clean".
    pub fn check_status(&self, credential: &Credential) -> Result<bool, Error> {
        let digest = fingerprint(credential).map_err(|err| {
            warn!("credential rejected: {err}");
            err
        })?;

        let entries = self.lookup_range(digest.prefix()).map_err(|err| {
            warn!("range lookup failed: {err}");
            err
        })?;

        // The service guarantees at most one entry per suffix, so first
        // match wins and order is immaterial. Both sides are uppercase hex.
        Ok(entries.iter().any(|entry| entry.suffix == digest.suffix()))
    }
}

impl Default for BreachClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a range response body of newline-delimited `SUFFIX:COUNT` lines.
///
/// A well-formed server never produces malformed lines, so a parse failure
/// is surfaced as [`Error::MalformedRange`] rather than repaired or skipped.
fn parse_range(prefix: &str, body: &str) -> Result<Vec<RangeEntry>, Error> {
    let mut entries = Vec::new();

    for line in body.lines() {
        if line.is_empty() {
            continue;
        }

        let malformed = || Error::MalformedRange {
            prefix: prefix.to_string(),
            line: line.to_string(),
        };

        let (suffix, count) = line.split_once(':').ok_or_else(|| malformed())?;
        let count: u64 = count.parse().map_err(|_| malformed())?;

        entries.push(RangeEntry { suffix: suffix.to_string(), count });
    }

    Ok(entries)
}
