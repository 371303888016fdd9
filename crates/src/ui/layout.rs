// Screen regions, recomputed from the terminal size on every resize.

pub const H_MARGIN: usize = 5;
pub const V_MARGIN: usize = 1;
// footer band starts this many rows above the bottom margin
pub const FOOTER_OFFSET: usize = 4;
// hint line sits below the primary footer line
pub const HINT_OFFSET: usize = 2;
pub const LIST_GAP: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
    pub header_x: usize,
    pub header_y: usize,
    pub list_x: usize,
    pub list_y: usize,
    pub footer_x: usize,
    pub footer_y: usize,
    pub hint_y: usize,
    pub render_capacity: usize,
}

pub fn compute_layout(width: usize, height: usize) -> Layout {
    let min_x = H_MARGIN;
    let max_x = width.saturating_sub(H_MARGIN);
    let min_y = V_MARGIN;
    let max_y = height.saturating_sub(V_MARGIN);
    let header_y = min_y;
    let list_y = header_y + LIST_GAP;
    let footer_y = max_y.saturating_sub(FOOTER_OFFSET);
    Layout {
        width,
        height,
        min_x,
        max_x,
        min_y,
        max_y,
        header_x: min_x,
        header_y,
        list_x: min_x,
        list_y,
        footer_x: min_x,
        footer_y,
        hint_y: footer_y + HINT_OFFSET,
        render_capacity: footer_y.saturating_sub(list_y + 1),
    }
}

impl Layout {
    // widest list row, in columns
    pub fn line_width(&self) -> usize {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn fits(&self, min_width: usize, min_height: usize) -> bool {
        self.width >= min_width && self.height >= min_height
    }
}
