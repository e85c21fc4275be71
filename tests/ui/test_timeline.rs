//! Render and key-flow tests for the timeline view

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use daybook::app::{App, View};
use daybook::feed::{FeedError, FeedSource};
use daybook::model::{ColorPair, ColorRegistry, DisplayZone, RawCommit, RawDayBucket};
use daybook::timeline::TimelineController;

#[derive(Debug)]
struct FixedFeed(Vec<RawDayBucket>);

impl FeedSource for FixedFeed {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug)]
struct BrokenFeed;

impl FeedSource for BrokenFeed {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError> {
        Err(FeedError::Io(std::io::Error::other("disk on fire")))
    }
}

fn raw(hash: &str, repo: &str, date: &str, message: &str) -> RawCommit {
    RawCommit {
        hash: hash.to_string(),
        author: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        date: date.to_string(),
        message: message.to_string(),
        repo_path: repo.to_string(),
    }
}

fn sample_buckets() -> Vec<RawDayBucket> {
    vec![
        RawDayBucket {
            date: "2023-01-04T13:30:00Z".to_string(),
            commits: vec![
                raw("a1b2c3d4e5f6", "/x/proj/", "2023-01-04T13:30:00Z", "Fix login redirect"),
                raw("0f9e8d7c6b5a", "/x/other", "2023-01-04T00:05:00Z", "Bump version"),
            ],
        },
        RawDayBucket {
            date: "2023-01-03T09:00:00Z".to_string(),
            commits: vec![raw("1234567890ab", "/x/proj", "2023-01-03T09:00:00Z", "Initial commit")],
        },
    ]
}

fn palette() -> Vec<ColorPair> {
    vec![
        ColorPair::new("blue", "lightblue"),
        ColorPair::new("green", "lightgreen"),
    ]
}

fn loaded_app(buckets: Vec<RawDayBucket>) -> App {
    let mut timeline =
        TimelineController::new(Arc::new(FixedFeed(buckets)), ColorRegistry::new(palette()))
            .with_zone(DisplayZone::utc());
    timeline.load_blocking().expect("fixed feed never fails");
    App::with_timeline(timeline)
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::from(code));
}

/// Tick until the pending load is applied
fn wait_for_load(app: &mut App) {
    for _ in 0..300 {
        app.on_tick();
        if !app.timeline.is_loading() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn hovered(app: &App) -> Vec<String> {
    app.timeline
        .days()
        .iter()
        .flat_map(|d| d.commits())
        .filter(|c| c.hover)
        .map(|c| c.hash.clone())
        .collect()
}

#[test]
fn test_timeline_renders_days_and_commits() {
    let mut app = loaded_app(sample_buckets());
    let screen = render(&mut app, 100, 16);

    assert!(screen.contains("daybook - Timeline [3 commits, 0 selected]"));
    // 2023-01-04 is a Wednesday (weekday index 3)
    assert!(screen.contains("3 Jan"));
    assert!(screen.contains("2 Jan"));
    assert!(screen.contains("1:30 PM"));
    assert!(screen.contains("12:05 AM"));
    assert!(screen.contains("9:00 AM"));
    assert!(screen.contains("a1b2c3d4 proj Ann Fix login redirect"));
    assert!(screen.contains("0f9e8d7c other Ann Bump version"));
}

#[test]
fn test_status_bar_shows_repository_legend() {
    let mut app = loaded_app(sample_buckets());
    let screen = render(&mut app, 120, 16);

    assert!(screen.contains("[q] Quit"));
    assert!(screen.contains(" proj "));
    assert!(screen.contains(" other "));
}

#[test]
fn test_invalid_dates_render_sentinel() {
    let mut app = loaded_app(vec![RawDayBucket {
        date: "someday".to_string(),
        commits: vec![raw("deadbeef", "/x/proj", "not-a-date", "Mystery")],
    }]);
    let screen = render(&mut app, 100, 12);

    assert!(screen.contains("Invalid Date"));
    assert!(screen.contains("Mystery"));
}

#[test]
fn test_empty_timeline_shows_hint() {
    let mut app = loaded_app(Vec::new());
    let screen = render(&mut app, 80, 12);

    assert!(screen.contains("No commits in this window."));
}

#[test]
fn test_loading_state_before_first_result() {
    let timeline = TimelineController::new(
        Arc::new(FixedFeed(sample_buckets())),
        ColorRegistry::default(),
    );
    let mut app = App::new(timeline);
    assert!(app.timeline.is_loading());

    let screen = render(&mut app, 80, 12);
    assert!(screen.contains("Loading timeline"));
}

#[test]
fn test_background_load_is_applied_on_tick() {
    let timeline = TimelineController::new(
        Arc::new(FixedFeed(sample_buckets())),
        ColorRegistry::default(),
    );
    let mut app = App::new(timeline);

    wait_for_load(&mut app);

    assert!(!app.timeline.is_loading());
    assert_eq!(app.timeline.commit_count(), 3);
    assert_eq!(hovered(&app), vec!["a1b2c3d4e5f6"]);
    let notification = app.notification.as_ref().expect("load notification");
    assert_eq!(notification.message, "3 commits in 2 days");
}

#[test]
fn test_failed_load_shows_error_banner() {
    let timeline = TimelineController::new(Arc::new(BrokenFeed), ColorRegistry::default());
    let mut app = App::new(timeline);

    wait_for_load(&mut app);

    let error = app.error_message.clone().expect("error message set");
    assert!(error.starts_with("Feed error:"));
    assert!(error.contains("disk on fire"));

    let screen = render(&mut app, 80, 12);
    assert!(screen.contains("Error:"));
}

#[derive(Debug)]
struct FlakyFeed {
    responses: Mutex<VecDeque<Result<Vec<RawDayBucket>, FeedError>>>,
}

impl FeedSource for FlakyFeed {
    fn fetch(&self) -> Result<Vec<RawDayBucket>, FeedError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[test]
fn test_failed_reload_keeps_previous_timeline() {
    let feed = FlakyFeed {
        responses: Mutex::new(VecDeque::from([
            Ok(sample_buckets()),
            Err(FeedError::Io(std::io::Error::other("network down"))),
        ])),
    };
    let mut timeline = TimelineController::new(Arc::new(feed), ColorRegistry::new(palette()));
    timeline.load_blocking().expect("first response succeeds");
    let mut app = App::with_timeline(timeline);

    press(&mut app, KeyCode::Char('r'));
    wait_for_load(&mut app);

    assert_eq!(app.timeline.commit_count(), 3);
    assert!(app.error_message.as_deref().is_some_and(|e| e.contains("network down")));
    let notification = app.notification.as_ref().expect("warning notification");
    assert_eq!(notification.message, "Showing previous timeline");

    let screen = render(&mut app, 100, 16);
    assert!(screen.contains("Fix login redirect"));
}

#[test]
fn test_cursor_keys_move_hover() {
    let mut app = loaded_app(sample_buckets());
    assert_eq!(hovered(&app), vec!["a1b2c3d4e5f6"]);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(hovered(&app), vec!["0f9e8d7c6b5a"]);

    press(&mut app, KeyCode::Down);
    assert_eq!(hovered(&app), vec!["1234567890ab"]);

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(hovered(&app), vec!["a1b2c3d4e5f6"]);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(hovered(&app), vec!["1234567890ab"]);

    press(&mut app, KeyCode::Up);
    assert_eq!(hovered(&app), vec!["0f9e8d7c6b5a"]);
}

#[test]
fn test_space_toggles_selection_and_marker() {
    let mut app = loaded_app(sample_buckets());

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.timeline.selected_count(), 1);
    let first = app.timeline.first_ref().expect("timeline has commits");
    let commit = app.timeline.commit(first).expect("first commit");
    assert!(commit.selected);
    assert_eq!(commit.current_color_class(), "lightblue");

    let screen = render(&mut app, 100, 16);
    assert!(screen.contains("[3 commits, 1 selected]"));
    assert!(screen.contains('●'));

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.timeline.selected_count(), 0);
    let commit = app.timeline.commit(first).expect("first commit");
    assert_eq!(commit.current_color_class(), "blue");
}

#[test]
fn test_help_and_quit_flow() {
    let mut app = loaded_app(sample_buckets());

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.current_view, View::Help);
    let screen = render(&mut app, 80, 30);
    assert!(screen.contains("daybook - Help"));

    // q leaves help first
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.current_view, View::Timeline);
    assert!(app.running);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn test_ctrl_c_quits_from_help() {
    let mut app = loaded_app(sample_buckets());
    press(&mut app, KeyCode::Char('?'));

    app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}

#[test]
fn test_reload_key_starts_load() {
    let mut app = loaded_app(sample_buckets());
    let before = app.timeline.latest_request();

    press(&mut app, KeyCode::Char('r'));
    assert!(app.timeline.is_loading());
    assert!(app.timeline.latest_request() > before);

    app.on_key_event(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert!(app.timeline.latest_request().0 > before.0 + 1);
}

#[test]
fn test_reset_colors_key_recolors_shown_commits() {
    let only_other = vec![RawDayBucket {
        date: "2023-01-05T10:00:00Z".to_string(),
        commits: vec![raw("5a5a5a5a5a5a", "/x/other", "2023-01-05T10:00:00Z", "Tidy up")],
    }];
    let feed = FlakyFeed {
        responses: Mutex::new(VecDeque::from([Ok(sample_buckets()), Ok(only_other)])),
    };
    let mut timeline = TimelineController::new(Arc::new(feed), ColorRegistry::new(palette()));
    timeline.load_blocking().expect("first response succeeds");
    timeline.load_blocking().expect("second response succeeds");
    let mut app = App::with_timeline(timeline);

    let first = app.timeline.first_ref().expect("timeline has commits");
    assert_eq!(
        app.timeline.commit(first).expect("first commit").color_pair(),
        &ColorPair::new("green", "lightgreen")
    );

    press(&mut app, KeyCode::Char('c'));

    let commit = app.timeline.commit(first).expect("first commit");
    assert_eq!(commit.color_pair(), &ColorPair::new("blue", "lightblue"));
    assert_eq!(commit.color_pair(), &app.timeline.registry().color_for("/x/other"));
    assert_eq!(app.timeline.registry().repositories(), ["/x/other".to_string()]);
    assert_eq!(app.notification.as_ref().map(|n| n.message.as_str()), Some("Colors reset"));

    let screen = render(&mut app, 120, 12);
    assert!(screen.contains(" other "));
    assert!(!screen.contains(" proj "));
}
