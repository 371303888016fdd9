use crate::ui::model::Session;
use crate::ui::render::canvas::{Frame, Paint};
use crate::ui::render::util::truncate_to_width;

pub const NORMAL_BINDINGS: &[(&str, &str)] = &[
    ("j ↓", "next package"),
    ("k ↑", "prev package"),
    ("l → pgdn", "next page"),
    ("h ← pgup", "prev page"),
    ("J", "last on page"),
    ("K", "first on page"),
    ("L", "last page"),
    ("H", "first page"),
    ("enter", "add or update"),
    ("x", "uninstall"),
    ("u", "update all"),
    ("/", "filter"),
    ("?", "this help"),
    ("q esc ^c", "quit"),
];

pub const FILTER_BINDINGS: &[(&str, &str)] = &[
    ("enter", "run query"),
    ("esc ^c", "cancel"),
    ("← →", "move cursor"),
    ("home ^a", "start of line"),
    ("end ^e", "end of line"),
    ("bksp del", "delete char"),
    ("^u", "cut to start"),
];

// three columns of ROWS bindings each fill the 70-column list width
const ROWS: usize = 7;
const COL_WIDTH: usize = 22;
const COL_GAP: usize = 2;
const KEY_WIDTH: usize = 8;

struct Column<'a> {
    heading: Option<&'a str>,
    bindings: &'a [(&'a str, &'a str)],
}

fn columns() -> Vec<Column<'static>> {
    let mut cols: Vec<Column<'static>> = NORMAL_BINDINGS
        .chunks(ROWS)
        .enumerate()
        .map(|(i, bindings)| Column {
            heading: (i == 0).then_some("Normal mode"),
            bindings,
        })
        .collect();
    cols.extend(FILTER_BINDINGS.chunks(ROWS).enumerate().map(|(i, bindings)| Column {
        heading: (i == 0).then_some("Filter mode"),
        bindings,
    }));
    cols
}

/// Draws every binding from the list row down to just above the hint line.
pub fn draw_help(s: &Session, f: &mut Frame) {
    let l = &s.layout;
    let desc_width = COL_WIDTH - KEY_WIDTH - 1;
    for (i, col) in columns().iter().enumerate() {
        let x = l.list_x + i * (COL_WIDTH + COL_GAP);
        if let Some(heading) = col.heading {
            f.text(x, l.list_y, heading, Paint::Label);
        }
        for (row, (key, desc)) in col.bindings.iter().enumerate() {
            let y = l.list_y + 1 + row;
            if y >= l.hint_y {
                break;
            }
            f.text(x, y, *key, Paint::Key);
            f.text(x + KEY_WIDTH + 1, y, truncate_to_width(desc, desc_width), Paint::Plain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render::util::display_width;

    #[test]
    fn test_bindings_fit_their_column() {
        for (key, desc) in NORMAL_BINDINGS.iter().chain(FILTER_BINDINGS) {
            assert!(display_width(key) <= KEY_WIDTH, "{key}");
            assert!(display_width(desc) < COL_WIDTH - KEY_WIDTH, "{desc}");
        }
        let cols = columns();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols.len() * COL_WIDTH + (cols.len() - 1) * COL_GAP, 70);
    }
}
