use crate::packages::PackageRecord;
use crate::ui::model::{Mode, Session};
use crate::ui::render::canvas::{Frame, Paint};
use crate::ui::render::util::{display_width, truncate_to_width};

pub const EMPTY_LIST: &str = "No packages found";

// one row: tag, name padded to the widest name on the page, description
pub fn format_row(record: &PackageRecord, name_width: usize) -> String {
    let pad = name_width.saturating_sub(display_width(&record.name));
    format!(
        "{} {}{} {}",
        record.status.tag(),
        record.name,
        " ".repeat(pad),
        record.description
    )
}

pub fn draw_list(s: &Session, f: &mut Frame) {
    let l = &s.layout;
    if s.packages.is_empty() {
        f.text(l.list_x, l.list_y, EMPTY_LIST, Paint::Dim);
        return;
    }
    let items = s.page_items();
    let name_width = items
        .iter()
        .map(|r| display_width(&r.name))
        .max()
        .unwrap_or(0);
    let highlight = matches!(s.mode, Mode::Normal);
    for (row, record) in items.iter().enumerate() {
        let y = l.list_y + row;
        let line = truncate_to_width(&format_row(record, name_width), l.line_width());
        if highlight && row == s.pager.cursor_row {
            f.fill(l.list_x, y, l.max_x.saturating_sub(l.list_x), Paint::Highlight);
            f.text(l.list_x, y, line, Paint::Highlight);
        } else {
            let tag = record.status.tag();
            let rest = line.strip_prefix(tag).map(str::to_string);
            match rest {
                Some(rest) => {
                    f.text(l.list_x, y, tag, Paint::Label);
                    f.text(l.list_x + tag.len(), y, rest, Paint::Plain);
                }
                None => f.text(l.list_x, y, line, Paint::Plain),
            }
        }
    }
}
