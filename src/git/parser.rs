//! `git log` output parser

use super::GitError;
use super::template::{FIELD_SEPARATOR, RECORD_SEPARATOR};
use crate::model::RawCommit;

/// Number of fields emitted per record by [`super::template::Templates::log`]
const LOG_FIELD_COUNT: usize = 5;

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log` output (log template) into raw commits tagged with `repo_path`
    ///
    /// Dates are kept as git printed them. Validation happens when the feed groups
    /// commits by day.
    pub fn parse_log(output: &str, repo_path: &str) -> Result<Vec<RawCommit>, GitError> {
        let mut commits = Vec::new();

        for record in output.split(RECORD_SEPARATOR) {
            // git puts a newline between records
            let record = record.trim_start_matches(['\n', '\r']);
            if record.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = record.splitn(LOG_FIELD_COUNT, FIELD_SEPARATOR).collect();
            if fields.len() < LOG_FIELD_COUNT {
                return Err(GitError::ParseError(format!(
                    "Expected {} fields, got {}: {:?}",
                    LOG_FIELD_COUNT,
                    fields.len(),
                    fields
                )));
            }

            commits.push(RawCommit {
                hash: fields[0].trim().to_string(),
                author: fields[1].trim().to_string(),
                email: fields[2].trim().to_string(),
                date: fields[3].trim().to_string(),
                message: Self::normalize_message(fields[4]),
                repo_path: repo_path.to_string(),
            });
        }

        Ok(commits)
    }

    /// Trim every line of a commit body and drop the blank ones
    pub fn normalize_message(body: &str) -> String {
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
