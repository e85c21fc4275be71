//! Feed built from `git log` of local repositories

use chrono::{Duration, Local, SecondsFormat, Utc};

use super::{FeedError, FeedSource, group_by_day};
use crate::git::GitExecutor;
use crate::model::RawDayBucket;

/// Default look-back window in days
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Commits of the last `window_days` days across `repos`, grouped by local day
#[derive(Debug, Clone)]
pub struct GitFeed {
    repos: Vec<String>,
    window_days: u32,
}

impl GitFeed {
    /// `repos` are used verbatim as repository paths (and therefore as color keys)
    pub fn new(repos: Vec<String>, window_days: u32) -> Self {
        Self { repos, window_days }
    }

    pub fn repos(&self) -> &[String] {
        &self.repos
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }
}

impl FeedSource for GitFeed {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError> {
        let cutoff = Utc::now() - Duration::days(i64::from(self.window_days));
        let since = cutoff.to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut commits = Vec::new();
        for repo in &self.repos {
            let found = GitExecutor::with_repo_path(repo).log_commits(Some(&since), repo)?;
            tracing::debug!(repo = %repo, count = found.len(), "collected commits");
            commits.extend(found);
        }

        Ok(group_by_day(commits, cutoff, &Local))
    }
}
