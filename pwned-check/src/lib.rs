//! Checks passwords against the Have I Been Pwned breach corpus without ever
//! sending the cleartext (or its full hash) to the service.
//!
//! # Protocol
//!
//! A candidate credential is hashed with SHA1 and rendered as 40 uppercase
//! hex characters. Only the first 5 characters — the prefix — are sent to the
//! range endpoint, which answers with every breached suffix under that
//! prefix. The remaining 35 characters are matched locally, so the service
//! learns nothing beyond the prefix (k-anonymity).
//!
//! # Usage
//!
//! ```no_run
//! use pwned_check::{BreachClient, Credential};
//!
//! let client = BreachClient::new();
//! let pwned = client.check_status(&Credential::from("123456"))?;
//! assert!(pwned);
//! # Ok::<(), pwned_check::Error>(())
//! ```
//!
//! Batch mode checks a file with one password per line, strictly
//! sequentially, via [`check_list`]. [`generate`] produces a random password
//! from a 94-character alphabet using the OS's cryptographic random source;
//! it performs no checking itself.

pub mod batch;
pub mod client;
pub mod error;
pub mod fingerprint;
pub mod generate;

#[cfg(test)]
pub(crate) mod testutil;

pub use batch::{PwnedStatus, ResultSet, check_list};
pub use client::{BreachClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, RangeEntry};
pub use error::Error;
pub use fingerprint::{Credential, DIGEST_LEN, Digest, PREFIX_LEN, fingerprint};
pub use generate::{ALPHABET, generate};
