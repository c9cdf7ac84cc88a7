//! Sequential batch checking of a password list file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::client::BreachClient;
use crate::error::Error;
use crate::fingerprint::Credential;

/// Outcome of a single breach check.
///
/// `Undetermined` signals that the lookup could not be completed. It is a
/// distinct state, never to be read as "clean".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwnedStatus {
    Pwned,
    Clean,
    Undetermined,
}

impl PwnedStatus {
    pub fn is_pwned(self) -> bool {
        self == PwnedStatus::Pwned
    }
}

impl fmt::Display for PwnedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PwnedStatus::Pwned => "true",
            PwnedStatus::Clean => "false",
            PwnedStatus::Undetermined => "undetermined",
        })
    }
}

/// Per-line results of a batch run, in input order.
///
/// One entry per input line. [`ResultSet::by_credential`] additionally offers
/// the view keyed by credential text, where duplicate lines overwrite their
/// earlier entry. That collapse is a consequence of keying by the credential
/// itself, kept for compatibility with the historical output format, not a
/// dedup feature; the positional view keeps duplicates distinct.
#[derive(Debug, Default)]
pub struct ResultSet {
    entries: Vec<(String, PwnedStatus)>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in input order, one per line.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PwnedStatus)> {
        self.entries.iter().map(|(credential, status)| (credential.as_str(), *status))
    }

    /// The collapsed view keyed by credential text. First occurrence keeps
    /// its position, later duplicates overwrite the recorded status.
    pub fn by_credential(&self) -> Vec<(&str, PwnedStatus)> {
        let mut collapsed: Vec<(&str, PwnedStatus)> = Vec::new();
        for (credential, status) in &self.entries {
            match collapsed.iter_mut().find(|(c, _)| *c == credential.as_str()) {
                Some(entry) => entry.1 = *status,
                None => collapsed.push((credential, *status)),
            }
        }
        collapsed
    }

    fn push(&mut self, credential: &str, status: PwnedStatus) {
        self.entries.push((credential.to_string(), status));
    }
}

/// Checks every line of the file at `path` against the breach corpus.
///
/// Lines are checked strictly in input order, one blocking lookup per line —
/// no deduplication, so identical lines trigger separate network calls. A
/// missing file fails with [`Error::FileNotFound`] and yields no partial
/// results. A per-line lookup failure is recorded as
/// [`PwnedStatus::Undetermined`] after a diagnostic; it does not abort the
/// remaining lines.
pub fn check_list(client: &BreachClient, path: impl AsRef<Path>) -> Result<ResultSet, Error> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound { path: path.to_path_buf() }
        } else {
            Error::Io(err)
        }
    })?;

    let mut results = ResultSet::default();
    for (index, line) in contents.lines().enumerate() {
        let status = match client.check_status(&Credential::from(line)) {
            Ok(true) => PwnedStatus::Pwned,
            Ok(false) => PwnedStatus::Clean,
            Err(err) => {
                // Line number only; never log the credential itself.
                warn!(line = index + 1, "could not determine status: {err}");
                PwnedStatus::Undetermined
            }
        };
        results.push(line, status);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use crate::testutil::MockRangeServer;

    // Suffixes of SHA1("123456") and SHA1("password"). Serving both in one
    // canned body works for every prefix the fixture passwords hash to.
    const BODY: &str = "D09CA3762AF61E59520943DC26494F8941B:9999\r\n\
                        1E4C9B93F3F0682250B6CF8331B7EE68FD8:9999\r\n";

    fn write_list(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_list_missing_file() {
        let client = BreachClient::with_config("http://127.0.0.1:1/range", Duration::from_secs(1));

        let err = check_list(&client, "pwlist1.txt").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }), "got {err:?}");
    }

    #[test]
    fn test_check_list_statuses_in_input_order() {
        let server = MockRangeServer::serve(200, BODY.to_string());
        let client = BreachClient::with_config(server.base_url(), Duration::from_secs(2));

        let file = write_list("123456\npassword\nAIUFBNalf/(((!(22\n");
        let results = check_list(&client, file.path()).unwrap();

        let entries: Vec<_> = results.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("123456", PwnedStatus::Pwned),
                ("password", PwnedStatus::Pwned),
                ("AIUFBNalf/(((!(22", PwnedStatus::Clean),
            ]
        );
    }

    #[test]
    fn test_check_list_duplicates_collapse_only_by_credential() {
        let server = MockRangeServer::serve(200, BODY.to_string());
        let client = BreachClient::with_config(server.base_url(), Duration::from_secs(2));

        let file = write_list("password\nhunter2\npassword\n");
        let results = check_list(&client, file.path()).unwrap();

        // Positional view keeps duplicates distinct.
        assert_eq!(results.len(), 3);

        // Credential-keyed view collapses them, first occurrence keeps its slot.
        let collapsed = results.by_credential();
        assert_eq!(
            collapsed,
            vec![("password", PwnedStatus::Pwned), ("hunter2", PwnedStatus::Clean)]
        );
    }

    #[test]
    fn test_check_list_records_undetermined_on_lookup_failure() {
        let server = MockRangeServer::serve(500, String::new());
        let client = BreachClient::with_config(server.base_url(), Duration::from_secs(2));

        let file = write_list("123456\npassword\n");
        let results = check_list(&client, file.path()).unwrap();

        let entries: Vec<_> = results.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("123456", PwnedStatus::Undetermined),
                ("password", PwnedStatus::Undetermined),
            ]
        );
        assert!(!entries.iter().any(|(_, status)| status.is_pwned()));
    }

    #[test]
    fn test_check_list_empty_file() {
        let client = BreachClient::with_config("http://127.0.0.1:1/range", Duration::from_secs(1));

        let file = write_list("");
        let results = check_list(&client, file.path()).unwrap();
        assert!(results.is_empty());
    }
}
