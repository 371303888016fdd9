use crate::ui::model::{Mode, Session};
use crate::ui::render::canvas::{Frame, Paint};
use crate::ui::render::util::display_width;

const NAV_PAIRS: [(&str, &str); 4] = [
    ("↑/k", "up"),
    ("↓/j", "down"),
    ("→/l", "next"),
    ("←/h", "previous"),
];

pub fn page_line(s: &Session) -> String {
    let page = s.page();
    format!(
        "Page {} of {} ({})",
        s.pager.page_index + 1,
        page.total_pages,
        s.packages.len()
    )
}

/// Key/label pairs for the hint line under the footer.
pub fn hint_pairs(s: &Session) -> Vec<(&'static str, &'static str)> {
    match &s.mode {
        Mode::Normal => {
            let mut pairs = match s.selected() {
                Some(r) if r.is_installed() => vec![("enter", "update"), ("x", "uninstall")],
                Some(_) => vec![("enter", "install")],
                // nothing to act on
                None => Vec::new(),
            };
            pairs.extend([("u", "update all"), ("/", "filter"), ("?", "more"), ("esc", "quit")]);
            pairs
        }
        Mode::Filter(_) => vec![("enter", "query"), ("esc", "cancel")],
        Mode::KeybindingsHelp => Vec::new(),
    }
}

// helper: lay out `key label` pairs left to right, returning the next column
fn draw_pairs(f: &mut Frame, mut x: usize, y: usize, pairs: &[(&str, &str)], sep: usize) -> usize {
    for (i, (key, label)) in pairs.iter().enumerate() {
        if i > 0 {
            x += sep;
        }
        f.text(x, y, *key, Paint::Key);
        x += display_width(key) + 1;
        f.text(x, y, *label, Paint::Dim);
        x += display_width(label);
    }
    x
}

pub fn draw_footer(s: &Session, f: &mut Frame) {
    let l = &s.layout;
    if let Mode::KeybindingsHelp = s.mode {
        // the help grid runs through the footer band
        draw_pairs(f, l.footer_x, l.hint_y, &[("esc", "back")], 2);
        return;
    }
    let lead = format!("{} | ", page_line(s));
    f.text(l.footer_x, l.footer_y, lead.as_str(), Paint::Label);
    draw_pairs(f, l.footer_x + display_width(&lead), l.footer_y, &NAV_PAIRS, 1);
    draw_pairs(f, l.footer_x, l.hint_y, &hint_pairs(s), 2);
}
