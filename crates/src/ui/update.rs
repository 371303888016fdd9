use crate::error::ProviderError;
use crate::packages::{Completed, PackageRecord};
use crate::ui::filter::FilterBuffer;
use crate::ui::keys::Key;
use crate::ui::model::{Mode, PendingOp, Session};
use crate::ui::status::Severity;
use crate::ui::{Msg, Signal};
use std::time::Instant;
use tracing::{error, info, warn};

pub fn handle_update(s: &mut Session, msg: Msg, now: Instant) -> Signal {
    let signal = match msg {
        Msg::WindowSize { width, height } => {
            s.resize(width, height);
            Signal::Continue
        }
        Msg::Frame => {
            if matches!(s.mode, Mode::Filter(_)) {
                s.blink_frame = s.blink_frame.wrapping_add(1);
            }
            Signal::Continue
        }
        Msg::RunPending => {
            run_pending(s, now);
            Signal::Continue
        }
        // run-to-completion: nothing typed during an operation survives it
        Msg::Key(_) if s.pending.is_some() => Signal::Continue,
        Msg::Key(key) => match s.mode {
            Mode::Normal => handle_normal_key(s, key, now),
            Mode::Filter(_) => handle_filter_key(s, key, now),
            Mode::KeybindingsHelp => handle_help_key(s, key),
        },
    };
    s.prepare_frame(now);
    signal
}

fn handle_normal_key(s: &mut Session, key: Key, now: Instant) -> Signal {
    let count = s.packages.len();
    let cap = s.layout.render_capacity;
    match key {
        k if k.is_cancel() => return Signal::Quit,
        Key::Char('q') => return Signal::Quit,
        Key::Char('/') => {
            s.mode = Mode::Filter(FilterBuffer::new(s.config.filter_capacity));
            s.blink_frame = 0;
        }
        Key::Char('?') => s.mode = Mode::KeybindingsHelp,
        Key::Char('H') => s.pager.first_page(count, cap),
        Key::Char('L') => s.pager.last_page(count, cap),
        Key::Char('K') => s.pager.first_row(),
        Key::Char('J') => s.pager.last_row(count, cap),
        Key::Down | Key::Char('j') => s.pager.next_row(count, cap),
        Key::Up | Key::Char('k') => s.pager.prev_row(),
        Key::Right | Key::Char('l') | Key::PageDown => s.pager.next_page(count, cap),
        Key::Left | Key::Char('h') | Key::PageUp => s.pager.prev_page(count, cap),
        Key::Enter => {
            if let Some((index, record)) = selection(s) {
                let verb = if record.is_installed() {
                    "Updating"
                } else {
                    "Installing"
                };
                let text = format!("{verb} package '{}'...", record.name);
                begin(s, PendingOp::Install { index }, text, now);
            }
        }
        Key::Char('u') => begin(
            s,
            PendingOp::UpdateAll,
            "Updating all installed packages. This may take a moment...".to_string(),
            now,
        ),
        Key::Char('x') => {
            if let Some((index, record)) = selection(s) {
                if record.is_installed() {
                    let text = format!("Uninstalling package '{}'...", record.name);
                    begin(s, PendingOp::Uninstall { index }, text, now);
                }
            }
        }
        _ => {}
    }
    Signal::Continue
}

fn handle_filter_key(s: &mut Session, key: Key, now: Instant) -> Signal {
    let Mode::Filter(buf) = &mut s.mode else {
        unreachable!("filter key handled outside filter mode");
    };
    let leave = match key {
        k if k.is_cancel() => true,
        Key::Backspace if buf.is_empty() => true,
        Key::Enter => {
            let filter = buf.as_str().to_string();
            let text = if filter.is_empty() {
                "Loading all packages...".to_string()
            } else {
                format!("Searching for '{filter}'...")
            };
            begin(s, PendingOp::Query { filter }, text, now);
            return Signal::Continue;
        }
        Key::Backspace => {
            buf.delete_backward();
            false
        }
        Key::Delete => {
            buf.delete_forward();
            false
        }
        Key::Left => {
            buf.move_left();
            false
        }
        Key::Right => {
            buf.move_right();
            false
        }
        Key::Home | Key::Ctrl('a') => {
            buf.move_home();
            false
        }
        Key::End | Key::Ctrl('e') => {
            buf.move_end();
            false
        }
        Key::Ctrl('u') => {
            buf.delete_to_start();
            false
        }
        Key::Char(c) => {
            buf.insert(c);
            false
        }
        _ => false,
    };
    if leave {
        s.mode = Mode::Normal;
    } else {
        // keep the cursor solid while typing
        s.blink_frame = 0;
    }
    Signal::Continue
}

fn handle_help_key(s: &mut Session, key: Key) -> Signal {
    if key.is_cancel() || key == Key::Char('q') {
        s.mode = Mode::Normal;
    }
    Signal::Continue
}

fn selection(s: &Session) -> Option<(usize, PackageRecord)> {
    let index = s.selected_index()?;
    s.packages.get(index).map(|r| (index, r.clone()))
}

fn begin(s: &mut Session, op: PendingOp, text: String, now: Instant) {
    s.status.set(Severity::Info, text, now);
    s.pending = Some(op);
}

// helper: run the recorded operation and apply its outcome
fn run_pending(s: &mut Session, now: Instant) {
    let Some(op) = s.pending.take() else {
        return;
    };
    match op {
        PendingOp::Install { index } => {
            let Some(record) = s.packages.get(index).cloned() else {
                return;
            };
            let (done, verb) = if record.is_installed() {
                ("Updated", "update")
            } else {
                ("Installed", "install")
            };
            let result = s.provider.install(&record);
            apply_record(s, index, &record, result, done, verb, now);
        }
        PendingOp::Uninstall { index } => {
            let Some(record) = s.packages.get(index).cloned() else {
                return;
            };
            let result = s.provider.uninstall(&record);
            apply_record(s, index, &record, result, "Uninstalled", "uninstall", now);
        }
        PendingOp::UpdateAll => match s.provider.update_all() {
            Ok(done) => {
                info!("updated all installed packages");
                finish(s, done.close_failure, "Updated all installed packages".to_string(), now);
            }
            Err(e) => fail(s, &e, "Failed to update packages".to_string(), now),
        },
        PendingOp::Query { filter } => {
            let needle = (!filter.is_empty()).then_some(filter.as_str());
            match s.provider.list(needle) {
                Ok(done) => {
                    let count = done.value.len();
                    info!(filter = %filter, count, "package query finished");
                    s.packages = done.value;
                    s.pager.reset();
                    let text = query_summary(&filter, count);
                    if let Some(e) = done.close_failure {
                        close_warning(s, &e, text, now);
                    } else {
                        s.status.set(Severity::Default, text, now);
                    }
                }
                Err(e) => fail(s, &e, "Failed to search packages".to_string(), now),
            }
            s.mode = Mode::Normal;
        }
    }
}

fn query_summary(filter: &str, count: usize) -> String {
    match (filter.is_empty(), count) {
        (true, 1) => "Showing the only package".to_string(),
        (true, n) => format!("Showing all {n} packages"),
        (false, 1) => format!("Showing 1 result for '{filter}'"),
        (false, n) => format!("Showing {n} results for '{filter}'"),
    }
}

fn apply_record(
    s: &mut Session,
    index: usize,
    record: &PackageRecord,
    result: Result<Completed<PackageRecord>, ProviderError>,
    done: &str,
    verb: &str,
    now: Instant,
) {
    match result {
        Ok(outcome) => {
            info!(package = %record.name, "{verb} finished");
            if let Some(slot) = s.packages.get_mut(index) {
                *slot = outcome.value;
            }
            let text = format!("{done} package '{}'", record.name);
            finish(s, outcome.close_failure, text, now);
        }
        Err(e) => {
            let text = format!("Failed to {verb} package '{}'", record.name);
            fail(s, &e, text, now);
        }
    }
}

fn finish(s: &mut Session, close_failure: Option<ProviderError>, text: String, now: Instant) {
    match close_failure {
        Some(e) => close_warning(s, &e, text, now),
        None => s.status.set(Severity::Success, text, now),
    }
}

// the effect is visible, only the stream teardown went wrong
fn close_warning(s: &mut Session, e: &ProviderError, text: String, now: Instant) {
    warn!(command = e.command(), error = %e, "command stream did not close cleanly");
    s.status
        .set(Severity::Info, format!("{text} ({})", e.reason()), now);
}

fn fail(s: &mut Session, e: &ProviderError, prefix: String, now: Instant) {
    error!(command = e.command(), error = %e, "package operation failed");
    s.status
        .set(Severity::Error, format!("{prefix}: {}", e.reason()), now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::packages::PackageStatus;
    use crate::packages::fake::{CallLog, Failure, FakeProvider, catalog};

    fn vim_catalog() -> Vec<PackageRecord> {
        let mut records = catalog(23);
        records.push(PackageRecord::new(PackageStatus::Available, "vim-9.1_1", "Vi improved"));
        records.push(PackageRecord::new(PackageStatus::Installed, "gvim-9.1_1", "Vim with a GUI"));
        records
    }

    fn session(records: Vec<PackageRecord>, fail: Option<Failure>, height: usize) -> Session {
        logged_session(records, fail, height).0
    }

    fn logged_session(
        records: Vec<PackageRecord>,
        fail: Option<Failure>,
        height: usize,
    ) -> (Session, CallLog) {
        let mut provider = FakeProvider::with_catalog(records.clone());
        provider.fail = fail;
        let log = provider.call_log();
        let s = Session::new(Box::new(provider), records, TuiConfig::default(), 80, height);
        (s, log)
    }

    fn calls(log: &CallLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    fn press(s: &mut Session, key: Key, now: Instant) -> Signal {
        s.update(Msg::Key(key), now)
    }

    fn type_str(s: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            press(s, Key::Char(c), now);
        }
    }

    // deliver the follow-up message the runner schedules after the working frame
    fn settle(s: &mut Session, now: Instant) {
        if s.pending.is_some() {
            s.update(Msg::RunPending, now);
        }
    }

    #[test]
    fn test_filter_query_replaces_list_and_resets_pager() {
        let now = Instant::now();
        let mut s = session(vim_catalog(), None, 24);
        press(&mut s, Key::Char('L'), now);
        press(&mut s, Key::Char('j'), now);
        assert_eq!(s.pager.page_index, 1);

        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "vim", now);
        assert_eq!(s.filter().map(|b| b.as_str()), Some("vim"));

        press(&mut s, Key::Enter, now);
        assert_eq!(s.pending, Some(PendingOp::Query { filter: "vim".into() }));
        assert_eq!(s.status.severity(), Severity::Info);
        assert_eq!(s.status.text(), "Searching for 'vim'...");

        settle(&mut s, now);
        assert_eq!(s.mode, Mode::Normal);
        assert_eq!(s.packages.len(), 2);
        assert_eq!((s.pager.page_index, s.pager.cursor_row), (0, 0));
        assert!(s.status.text().contains("2 results"));
        assert_eq!(s.status.severity(), Severity::Default);
        assert!(s.pending.is_none());
    }

    #[test]
    fn test_query_summary_pluralises() {
        assert_eq!(query_summary("vim", 1), "Showing 1 result for 'vim'");
        assert_eq!(query_summary("vim", 0), "Showing 0 results for 'vim'");
        assert_eq!(query_summary("", 1), "Showing the only package");
        assert_eq!(query_summary("", 25), "Showing all 25 packages");
    }

    #[test]
    fn test_keys_reach_matching_provider_calls() {
        let now = Instant::now();
        let (mut s, log) = logged_session(vim_catalog(), None, 24);
        // vim-9.1_1 is row 23 (available), gvim-9.1_1 row 24 (installed)
        press(&mut s, Key::Char('l'), now);
        for _ in 0..8 {
            press(&mut s, Key::Char('j'), now);
        }
        assert_eq!(s.selected().map(|r| r.name.as_str()), Some("vim-9.1_1"));
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        press(&mut s, Key::Char('j'), now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        press(&mut s, Key::Char('x'), now);
        settle(&mut s, now);
        press(&mut s, Key::Char('u'), now);
        settle(&mut s, now);
        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "vim", now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        assert_eq!(
            calls(&log),
            [
                "install vim-9.1_1",
                "install gvim-9.1_1",
                "uninstall gvim-9.1_1",
                "update-all",
                "list vim",
            ]
        );
        assert_eq!(s.status.text(), "Showing 2 results for 'vim'");
    }

    #[test]
    fn test_enter_on_installed_record_reports_update() {
        let now = Instant::now();
        let (mut s, log) = logged_session(catalog(4), None, 15);
        assert!(s.packages[0].is_installed());
        press(&mut s, Key::Enter, now);
        assert_eq!(s.status.text(), "Updating package 'pkg00-1.0_1'...");
        settle(&mut s, now);
        assert_eq!(calls(&log), ["install pkg00-1.0_1"]);
        assert_eq!(s.status.text(), "Updated package 'pkg00-1.0_1'");
        assert!(s.packages[0].is_installed());
    }

    #[test]
    fn test_empty_filter_lists_everything() {
        let now = Instant::now();
        let mut s = session(vim_catalog(), None, 24);
        press(&mut s, Key::Char('/'), now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        assert_eq!(s.packages.len(), 25);
        assert_eq!(s.status.text(), "Showing all 25 packages");
    }

    #[test]
    fn test_failed_query_keeps_old_list() {
        let now = Instant::now();
        let mut s = session(vim_catalog(), Some(Failure::Read), 24);
        press(&mut s, Key::Char('j'), now);
        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "vim", now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        assert_eq!(s.mode, Mode::Normal);
        assert_eq!(s.packages.len(), 25);
        assert_eq!(s.selected_index(), Some(1));
        assert_eq!(s.status.severity(), Severity::Error);
        assert!(s.status.text().starts_with("Failed to search packages"));
    }

    #[test]
    fn test_install_failure_keeps_status_tag() {
        let now = Instant::now();
        let mut s = session(catalog(10), Some(Failure::Exit), 15);
        press(&mut s, Key::Char('j'), now);
        assert!(!s.packages[1].is_installed());

        press(&mut s, Key::Enter, now);
        assert_eq!(s.status.text(), "Installing package 'pkg01-1.0_1'...");
        settle(&mut s, now);
        assert!(!s.packages[1].is_installed());
        assert_eq!(s.status.severity(), Severity::Error);
        assert!(s.status.text().starts_with("Failed to install package 'pkg01-1.0_1'"));
        assert!(!s.status.text().contains("transaction failed"));

        assert_eq!(press(&mut s, Key::Char('j'), now), Signal::Continue);
        assert_eq!(s.selected_index(), Some(2));
    }

    #[test]
    fn test_install_and_uninstall_update_record_in_place() {
        let now = Instant::now();
        let mut s = session(catalog(10), None, 15);
        press(&mut s, Key::Char('j'), now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        assert!(s.packages[1].is_installed());
        assert_eq!(s.status.severity(), Severity::Success);
        assert_eq!(s.status.text(), "Installed package 'pkg01-1.0_1'");

        press(&mut s, Key::Enter, now);
        assert_eq!(s.status.text(), "Updating package 'pkg01-1.0_1'...");
        settle(&mut s, now);
        assert_eq!(s.status.text(), "Updated package 'pkg01-1.0_1'");

        press(&mut s, Key::Char('x'), now);
        settle(&mut s, now);
        assert!(!s.packages[1].is_installed());
        assert_eq!(s.status.text(), "Uninstalled package 'pkg01-1.0_1'");
        assert_eq!(s.packages.len(), 10);
    }

    #[test]
    fn test_uninstall_ignores_available_package() {
        let now = Instant::now();
        let mut s = session(catalog(10), None, 15);
        press(&mut s, Key::Char('j'), now);
        press(&mut s, Key::Char('x'), now);
        assert!(s.pending.is_none());
        assert_eq!(s.status.severity(), Severity::Inactive);
    }

    #[test]
    fn test_close_failure_downgrades_to_info() {
        let now = Instant::now();
        let mut s = session(catalog(10), Some(Failure::CloseOnly), 15);
        press(&mut s, Key::Char('j'), now);
        press(&mut s, Key::Enter, now);
        settle(&mut s, now);
        assert!(s.packages[1].is_installed());
        assert_eq!(s.status.severity(), Severity::Info);
        assert!(s.status.text().contains("did not close cleanly"));
    }

    #[test]
    fn test_update_all_reports_outcome() {
        let now = Instant::now();
        let mut s = session(catalog(4), None, 15);
        press(&mut s, Key::Char('u'), now);
        assert_eq!(s.pending, Some(PendingOp::UpdateAll));
        settle(&mut s, now);
        assert_eq!(s.status.severity(), Severity::Success);

        let mut s = session(catalog(4), Some(Failure::Spawn), 15);
        press(&mut s, Key::Char('u'), now);
        settle(&mut s, now);
        assert_eq!(s.status.severity(), Severity::Error);
        assert!(s.status.text().contains("could not start"));
    }

    #[test]
    fn test_keys_discarded_while_pending() {
        let now = Instant::now();
        let mut s = session(catalog(10), None, 15);
        press(&mut s, Key::Char('u'), now);
        assert_eq!(press(&mut s, Key::Char('q'), now), Signal::Continue);
        press(&mut s, Key::Char('j'), now);
        assert_eq!(s.selected_index(), Some(0));
        settle(&mut s, now);
        assert_eq!(press(&mut s, Key::Char('q'), now), Signal::Quit);
    }

    #[test]
    fn test_quit_keys_in_normal_mode() {
        let now = Instant::now();
        for key in [Key::Esc, Key::Ctrl('c'), Key::Char('q')] {
            let mut s = session(catalog(3), None, 15);
            assert_eq!(press(&mut s, key, now), Signal::Quit);
        }
    }

    #[test]
    fn test_filter_leaves_on_cancel_or_backspace_when_empty() {
        let now = Instant::now();
        let mut s = session(catalog(3), None, 15);
        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "ab", now);
        press(&mut s, Key::Backspace, now);
        press(&mut s, Key::Backspace, now);
        assert!(matches!(s.mode, Mode::Filter(_)));
        press(&mut s, Key::Backspace, now);
        assert_eq!(s.mode, Mode::Normal);

        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "q", now);
        assert_eq!(press(&mut s, Key::Esc, now), Signal::Continue);
        assert_eq!(s.mode, Mode::Normal);
        assert_eq!(s.packages.len(), 3);
    }

    #[test]
    fn test_filter_edit_keys() {
        let now = Instant::now();
        let mut s = session(catalog(3), None, 15);
        press(&mut s, Key::Char('/'), now);
        type_str(&mut s, "vm", now);
        press(&mut s, Key::Left, now);
        press(&mut s, Key::Char('i'), now);
        type_str(&mut s, "!*", now);
        assert_eq!(s.filter().map(|b| b.as_str()), Some("vim"));
        press(&mut s, Key::Ctrl('a'), now);
        press(&mut s, Key::Delete, now);
        assert_eq!(s.filter().map(|b| b.as_str()), Some("im"));
        press(&mut s, Key::Ctrl('e'), now);
        press(&mut s, Key::Ctrl('u'), now);
        assert_eq!(s.filter().map(|b| b.as_str()), Some(""));
        // q is ordinary text while filtering
        assert_eq!(press(&mut s, Key::Char('q'), now), Signal::Continue);
    }

    #[test]
    fn test_help_mode_round_trip() {
        let now = Instant::now();
        let mut s = session(catalog(3), None, 15);
        press(&mut s, Key::Char('?'), now);
        assert_eq!(s.mode, Mode::KeybindingsHelp);
        press(&mut s, Key::Char('j'), now);
        assert_eq!(s.mode, Mode::KeybindingsHelp);
        assert_eq!(press(&mut s, Key::Char('q'), now), Signal::Continue);
        assert_eq!(s.mode, Mode::Normal);
    }

    #[test]
    fn test_frame_advances_blink_only_in_filter() {
        let now = Instant::now();
        let mut s = session(catalog(3), None, 15);
        s.update(Msg::Frame, now);
        assert_eq!(s.blink_frame, 0);
        press(&mut s, Key::Char('/'), now);
        for _ in 0..12 {
            s.update(Msg::Frame, now);
        }
        assert_eq!(s.blink_frame, 12);
        assert!(!s.cursor_visible());
    }

    #[test]
    fn test_frame_expires_status() {
        let now = Instant::now();
        let mut s = session(catalog(3), None, 15);
        press(&mut s, Key::Char('u'), now);
        settle(&mut s, now);
        s.update(Msg::Frame, now + std::time::Duration::from_millis(4999));
        assert_eq!(s.status.severity(), Severity::Success);
        s.update(Msg::Frame, now + std::time::Duration::from_millis(5000));
        assert_eq!(s.status.severity(), Severity::Inactive);
    }

    #[test]
    fn test_resize_message_reclamps_cursor() {
        let now = Instant::now();
        let mut s = session(catalog(25), None, 24);
        press(&mut s, Key::Char('J'), now);
        assert_eq!(s.pager.cursor_row, 14);
        s.update(Msg::WindowSize { width: 80, height: 15 }, now);
        assert_eq!(s.layout.render_capacity, 6);
        assert_eq!(s.pager.cursor_row, 5);
    }
}
