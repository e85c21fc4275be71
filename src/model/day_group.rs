//! Day group display model

use chrono::{DateTime, Datelike, NaiveDate};

use super::{ColorRegistry, Commit, DisplayZone, INVALID_DATE, RawDayBucket};

/// Commits of one calendar day, in feed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// Calendar day in the display zone (`None` if the feed sent an unparsable date)
    pub date: Option<NaiveDate>,
    commits: Vec<Commit>,
}

impl DayGroup {
    /// Build the day and all of its commits, registering repositories in order
    pub fn new(raw: RawDayBucket, registry: &mut ColorRegistry, zone: DisplayZone) -> Self {
        let date = parse_day(&raw.date, zone);
        if date.is_none() {
            tracing::debug!(date = %raw.date, "unparsable day date");
        }

        let commits = raw
            .commits
            .into_iter()
            .map(|commit| Commit::new(commit, registry, zone))
            .collect();

        Self { date, commits }
    }

    /// `"<weekday index> <month>"`, weekday counted from Sunday = 0 (`"3 Jan"`)
    pub fn pretty_date(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{} {}",
                date.weekday().num_days_from_sunday(),
                date.format("%b")
            ),
            None => INVALID_DATE.to_string(),
        }
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Mutable access to the commits (membership stays fixed)
    pub fn commits_mut(&mut self) -> &mut [Commit] {
        &mut self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Accepts `YYYY-MM-DD` as is, or an RFC 3339 timestamp read as a day in `zone`
fn parse_day(value: &str, zone: DisplayZone) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| zone.localize(dt).date_naive())
        })
}
