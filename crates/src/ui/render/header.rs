use crate::ui::model::{Mode, Session};
use crate::ui::render::canvas::{Frame, Paint};
use crate::ui::status::Severity;

pub const LABEL_NORMAL: &str = " LAZYPM ";
pub const LABEL_FILTER: &str = " FILTER ";
pub const LABEL_HELP: &str = " KEYBINDINGS ";

pub fn header_label(mode: &Mode) -> &'static str {
    match mode {
        Mode::Normal => LABEL_NORMAL,
        Mode::Filter(_) => LABEL_FILTER,
        Mode::KeybindingsHelp => LABEL_HELP,
    }
}

fn badge_paint(mode: &Mode) -> Paint {
    match mode {
        Mode::Normal => Paint::LazypmBadge,
        Mode::Filter(_) => Paint::FilterBadge,
        Mode::KeybindingsHelp => Paint::HelpBadge,
    }
}

pub fn draw_header(s: &Session, f: &mut Frame) {
    let l = &s.layout;
    let label = header_label(&s.mode);
    f.text(l.header_x, l.header_y, label, badge_paint(&s.mode));

    if let Mode::Filter(buf) = &s.mode {
        let text_x = l.header_x + label.len() + 1;
        f.text(text_x, l.header_y, buf.as_str(), Paint::Plain);
        if s.cursor_visible() {
            let under = buf.as_str()[buf.cursor()..].chars().next().unwrap_or(' ');
            f.text(text_x + buf.cursor(), l.header_y, under.to_string(), Paint::Cursor);
        }
    }
}

pub fn draw_status(s: &Session, f: &mut Frame) {
    let Some(msg) = s.status.current() else {
        return;
    };
    let paint = match msg.severity {
        Severity::Inactive => return,
        Severity::Default => Paint::StatusDefault,
        Severity::Success => Paint::Success,
        Severity::Error => Paint::Error,
        Severity::Info => Paint::Info,
    };
    let (x, y) = s.status.position();
    f.text(x, y, msg.text.as_str(), paint);
}
