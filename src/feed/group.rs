//! Grouping of commits into day buckets

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::model::{RawCommit, RawDayBucket};

/// Sort commits newest first, drop those before `cutoff`, and bucket them by calendar day in `tz`
///
/// Commit dates are rewritten in `tz`. Each bucket's date is the timestamp of its
/// newest commit. Commits with unparsable dates are dropped.
pub fn group_by_day<Tz>(commits: Vec<RawCommit>, cutoff: DateTime<Utc>, tz: &Tz) -> Vec<RawDayBucket>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut dated: Vec<(DateTime<Tz>, RawCommit)> = commits
        .into_iter()
        .filter_map(|commit| match DateTime::parse_from_rfc3339(&commit.date) {
            Ok(date) => Some((date.with_timezone(tz), commit)),
            Err(e) => {
                tracing::debug!(hash = %commit.hash, date = %commit.date, error = %e, "dropping commit with unparsable date");
                None
            }
        })
        .filter(|(date, _)| *date >= cutoff)
        .collect();

    // Stable: commits with equal timestamps keep repository order
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut buckets: Vec<RawDayBucket> = Vec::new();
    let mut current_day: Option<NaiveDate> = None;

    for (date, mut commit) in dated {
        commit.date = date.to_rfc3339_opts(SecondsFormat::Secs, true);
        let day = date.date_naive();

        match buckets.last_mut() {
            Some(bucket) if current_day == Some(day) => bucket.commits.push(commit),
            _ => {
                current_day = Some(day);
                buckets.push(RawDayBucket {
                    date: commit.date.clone(),
                    commits: vec![commit],
                });
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn commit(hash: &str, date: &str, repo: &str) -> RawCommit {
        RawCommit {
            hash: hash.to_string(),
            date: date.to_string(),
            repo_path: repo.to_string(),
            ..Default::default()
        }
    }

    fn cutoff(date: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(date)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn hashes(bucket: &RawDayBucket) -> Vec<&str> {
        bucket.commits.iter().map(|c| c.hash.as_str()).collect()
    }

    #[test]
    fn test_groups_by_day_newest_first() {
        let commits = vec![
            commit("a", "2023-01-03T09:00:00Z", "/one"),
            commit("b", "2023-01-04T18:00:00Z", "/one"),
            commit("c", "2023-01-04T08:00:00Z", "/two"),
            commit("d", "2023-01-03T20:00:00Z", "/two"),
        ];
        let buckets = group_by_day(commits, cutoff("2023-01-01T00:00:00Z"), &Utc);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, "2023-01-04T18:00:00Z");
        assert_eq!(hashes(&buckets[0]), ["b", "c"]);
        assert_eq!(buckets[1].date, "2023-01-03T20:00:00Z");
        assert_eq!(hashes(&buckets[1]), ["d", "a"]);
    }

    #[test]
    fn test_drops_commits_before_cutoff() {
        let commits = vec![
            commit("new", "2023-01-08T09:00:00Z", "/r"),
            commit("old", "2022-12-31T23:59:59Z", "/r"),
        ];
        let buckets = group_by_day(commits, cutoff("2023-01-01T00:00:00Z"), &Utc);
        assert_eq!(buckets.len(), 1);
        assert_eq!(hashes(&buckets[0]), ["new"]);
    }

    #[test]
    fn test_all_commits_newer_than_cutoff() {
        let commits = vec![commit("a", "2023-01-08T09:00:00Z", "/r")];
        let buckets = group_by_day(commits, cutoff("2020-01-01T00:00:00Z"), &Utc);
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn test_drops_unparsable_dates() {
        let commits = vec![
            commit("ok", "2023-01-08T09:00:00Z", "/r"),
            commit("bad", "last tuesday", "/r"),
        ];
        let buckets = group_by_day(commits, cutoff("2023-01-01T00:00:00Z"), &Utc);
        assert_eq!(hashes(&buckets[0]), ["ok"]);
    }

    #[test]
    fn test_day_boundary_follows_timezone() {
        // 23:30 UTC on the 3rd is already the 4th in +09:00
        let commits = vec![
            commit("late", "2023-01-03T23:30:00Z", "/r"),
            commit("early", "2023-01-03T10:00:00Z", "/r"),
        ];
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let buckets = group_by_day(commits, cutoff("2023-01-01T00:00:00Z"), &tokyo);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, "2023-01-04T08:30:00+09:00");
        assert_eq!(buckets[0].commits[0].date, "2023-01-04T08:30:00+09:00");
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_day(Vec::new(), cutoff("2023-01-01T00:00:00Z"), &Utc).is_empty());
    }
}
