//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::constants::{self, commands, errors, flags};
use super::GitError;
use super::parser::Parser;
use super::template::Templates;
use crate::model::RawCommit;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: Some(path.into()),
        }
    }

    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// Run a git command with the given arguments
    ///
    /// Always adds `--no-pager` so git never blocks on a terminal.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }
        cmd.arg(flags::NO_PAGER);
        cmd.args(args);

        tracing::debug!(repo = ?self.repo_path, ?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) || stderr.contains(errors::CANNOT_CHANGE_DIR) {
                return Err(GitError::NotARepository(self.display_path()));
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log` with the log template, optionally bounded by `--since`
    pub fn log_raw(&self, since: Option<&str>) -> Result<String, GitError> {
        let since_arg = since.map(|s| format!("{}={}", flags::SINCE, s));
        let mut args = vec![commands::LOG, Templates::log()];
        if let Some(ref arg) = since_arg {
            args.push(arg.as_str());
        }
        self.run(&args)
    }

    /// Commits authored since `since`, tagged with `repo_label` as their repository path
    ///
    /// A repository without any commits yields an empty list.
    pub fn log_commits(
        &self,
        since: Option<&str>,
        repo_label: &str,
    ) -> Result<Vec<RawCommit>, GitError> {
        match self.log_raw(since) {
            Ok(output) => Parser::parse_log(&output, repo_label),
            Err(GitError::CommandFailed { ref stderr, .. })
                if stderr.contains(errors::NO_COMMITS_YET) =>
            {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn display_path(&self) -> String {
        self.repo_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string())
    }
}
