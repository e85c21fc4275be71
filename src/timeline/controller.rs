//! Load orchestration and interaction state for the timeline

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

use super::{CommitRef, LoadOutcome, LoadSummary, RequestId};
use crate::feed::{FeedError, FeedSource};
use crate::model::{ColorRegistry, Commit, DayGroup, DisplayZone, RawDayBucket};

/// A finished fetch, tagged with the request that started it
#[derive(Debug)]
struct LoadMessage {
    id: RequestId,
    result: Result<Vec<RawDayBucket>, FeedError>,
}

/// Builds and owns the day groups shown by the UI
///
/// Fetches run on background threads. Their results are applied on the UI thread
/// through [`poll`](Self::poll). Only the response to the most recently issued request
/// is applied; older responses are discarded as stale.
#[derive(Debug)]
pub struct TimelineController {
    days: Vec<DayGroup>,
    registry: ColorRegistry,
    zone: DisplayZone,
    source: Arc<dyn FeedSource>,
    tx: Sender<LoadMessage>,
    rx: Receiver<LoadMessage>,
    /// Last issued request id
    latest_request: RequestId,
    /// Latest request has not resolved yet
    pending: bool,
    /// Bumped every time a load replaces the timeline
    generation: u64,
}

impl TimelineController {
    pub fn new(source: Arc<dyn FeedSource>, registry: ColorRegistry) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            days: Vec::new(),
            registry,
            zone: DisplayZone::default(),
            source,
            tx,
            rx,
            latest_request: RequestId::default(),
            pending: false,
            generation: 0,
        }
    }

    /// Read times and days in `zone` instead of the local zone (applies from the next load)
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Start fetching the feed in the background
    ///
    /// Any load still in flight becomes stale.
    pub fn load(&mut self) -> RequestId {
        let id = self.issue_request();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        tracing::info!(request = id.0, "loading timeline");

        let spawned = thread::Builder::new()
            .name(format!("daybook-feed-{}", id.0))
            .spawn(move || {
                let result = source.fetch();
                // Receiver is gone only if the controller was dropped
                let _ = tx.send(LoadMessage { id, result });
            });

        if let Err(e) = spawned {
            let _ = self.tx.send(LoadMessage {
                id,
                result: Err(FeedError::Io(e)),
            });
        }

        id
    }

    /// Fetch the feed on the calling thread and apply the result
    pub fn load_blocking(&mut self) -> Result<LoadSummary, FeedError> {
        self.issue_request();
        let result = self.source.fetch();
        self.apply_result(result)
    }

    /// Apply one finished load, if any, without blocking
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let message = self.rx.try_recv().ok()?;
        Some(self.apply(message))
    }

    /// Block up to `timeout` for one finished load and apply it
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let message = self.rx.recv_timeout(timeout).ok()?;
        Some(self.apply(message))
    }

    /// The latest issued request has not resolved yet
    pub fn is_loading(&self) -> bool {
        self.pending
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    fn issue_request(&mut self) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.pending = true;
        self.latest_request
    }

    fn apply(&mut self, message: LoadMessage) -> LoadOutcome {
        if message.id != self.latest_request {
            tracing::debug!(
                request = message.id.0,
                latest = self.latest_request.0,
                "discarding stale timeline response"
            );
            return LoadOutcome::Stale(message.id);
        }

        match self.apply_result(message.result) {
            Ok(summary) => LoadOutcome::Loaded(summary),
            Err(e) => LoadOutcome::Failed(e),
        }
    }

    fn apply_result(
        &mut self,
        result: Result<Vec<RawDayBucket>, FeedError>,
    ) -> Result<LoadSummary, FeedError> {
        self.pending = false;

        match result {
            Ok(buckets) => {
                let registry = &mut self.registry;
                let zone = self.zone;
                let days: Vec<DayGroup> = buckets
                    .into_iter()
                    .map(|bucket| DayGroup::new(bucket, registry, zone))
                    .collect();

                self.days = days;
                self.generation += 1;

                let summary = self.summary();
                tracing::info!(
                    request = self.latest_request.0,
                    days = summary.days,
                    commits = summary.commits,
                    "timeline loaded"
                );
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!(error = %e, "feed unavailable, keeping previous timeline");
                Err(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reading
    // ─────────────────────────────────────────────────────────────────────────

    pub fn days(&self) -> &[DayGroup] {
        &self.days
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            days: self.days.len(),
            commits: self.commit_count(),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.days.iter().map(DayGroup::len).sum()
    }

    /// No commit to show (nothing loaded yet, or an empty feed)
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DayGroup::is_empty)
    }

    pub fn selected_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| day.commits())
            .filter(|commit| commit.selected)
            .count()
    }

    /// Resolve a ref against the current generation
    pub fn commit(&self, commit_ref: CommitRef) -> Option<&Commit> {
        if commit_ref.generation != self.generation {
            return None;
        }
        self.days
            .get(commit_ref.day)?
            .commits()
            .get(commit_ref.index)
    }

    fn commit_mut(&mut self, commit_ref: CommitRef) -> Option<&mut Commit> {
        if commit_ref.generation != self.generation {
            return None;
        }
        self.days
            .get_mut(commit_ref.day)?
            .commits_mut()
            .get_mut(commit_ref.index)
    }

    pub fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    /// Restart color assignment from the first palette entry
    ///
    /// Repositories of the current timeline are registered again in display order and
    /// every commit takes its new pair. Repositories no longer shown lose their colors.
    pub fn reset_colors(&mut self) {
        self.registry.reset();
        for commit in self.days.iter_mut().flat_map(|day| day.commits_mut().iter_mut()) {
            self.registry.register(&commit.repo_path);
            commit.refresh_colors(&self.registry);
        }
        tracing::debug!(repositories = self.registry.len(), "color assignments reset");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip the selection of one commit. Returns false if the ref is not in the current timeline.
    pub fn toggle_commit(&mut self, commit_ref: CommitRef) -> bool {
        match self.commit_mut(commit_ref) {
            Some(commit) => {
                commit.toggle_selected();
                true
            }
            None => false,
        }
    }

    /// Set the hover flag of one commit. Returns false if the ref is not in the current timeline.
    pub fn set_hover(&mut self, commit_ref: CommitRef, value: bool) -> bool {
        match self.commit_mut(commit_ref) {
            Some(commit) => {
                commit.set_hover(value);
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// All commit refs of the current generation, in display order
    pub fn refs(&self) -> impl Iterator<Item = CommitRef> + '_ {
        let generation = self.generation;
        self.days.iter().enumerate().flat_map(move |(day, group)| {
            (0..group.len()).map(move |index| CommitRef {
                generation,
                day,
                index,
            })
        })
    }

    pub fn first_ref(&self) -> Option<CommitRef> {
        self.refs().next()
    }

    pub fn last_ref(&self) -> Option<CommitRef> {
        self.refs().last()
    }

    /// Ref after `current` (stays on the last one; a stale ref restarts at the first)
    pub fn next_ref(&self, current: CommitRef) -> Option<CommitRef> {
        if self.commit(current).is_none() {
            return self.first_ref();
        }
        self.refs()
            .skip_while(|r| *r != current)
            .nth(1)
            .or(Some(current))
    }

    /// Ref before `current` (stays on the first one; a stale ref restarts at the first)
    pub fn prev_ref(&self, current: CommitRef) -> Option<CommitRef> {
        if self.commit(current).is_none() {
            return self.first_ref();
        }
        let mut previous = None;
        for r in self.refs() {
            if r == current {
                return previous.or(Some(current));
            }
            previous = Some(r);
        }
        Some(current)
    }
}
