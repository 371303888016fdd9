use crate::ui::render::styles::style_for;
use unicode_width::UnicodeWidthChar;

/// How a run of cells is drawn. `Plain` cells go out unstyled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Paint {
    #[default]
    Plain,
    Dim,
    Label,
    Key,
    Highlight,
    LazypmBadge,
    FilterBadge,
    HelpBadge,
    Cursor,
    StatusDefault,
    Success,
    Error,
    Info,
}

/// One cell-addressed write. Ops are applied in order; later ops win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Text {
        x: usize,
        y: usize,
        text: String,
        paint: Paint,
    },
    Fill {
        x: usize,
        y: usize,
        width: usize,
        paint: Paint,
    },
}

/// Everything a single frame draws, in the terminal's cell grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn text(&mut self, x: usize, y: usize, text: impl Into<String>, paint: Paint) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.into(),
            paint,
        });
    }

    pub fn fill(&mut self, x: usize, y: usize, width: usize, paint: Paint) {
        self.ops.push(DrawOp::Fill { x, y, width, paint });
    }

    pub fn rasterize(&self) -> String {
        let mut canvas = Canvas::new(self.width, self.height);
        for op in &self.ops {
            canvas.apply(op);
        }
        canvas.present()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Char(char),
    // right half of a double-width char
    Tail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    glyph: Glyph,
    paint: Paint,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            glyph: Glyph::Char(' '),
            paint: Paint::Plain,
        }
    }
}

/// Width-aware cell grid. Writes past the right edge or below the last row
/// are clipped.
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::default(); width]; height],
        }
    }

    pub fn apply(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text { x, y, text, paint } => {
                let mut col = *x;
                for c in text.chars() {
                    match self.put(col, *y, c, *paint) {
                        Some(next) => col = next,
                        None => break,
                    }
                }
            }
            DrawOp::Fill { x, y, width, paint } => {
                for col in *x..x.saturating_add(*width) {
                    if self.put(col, *y, ' ', *paint).is_none() {
                        break;
                    }
                }
            }
        }
    }

    // helper: write one char, returning the column after it, or None once clipped
    fn put(&mut self, x: usize, y: usize, c: char, paint: Paint) -> Option<usize> {
        let w = match c.width() {
            Some(w) if w > 0 => w,
            // zero-width and control chars take no cell
            _ => return Some(x),
        };
        if y >= self.rows.len() || x + w > self.width {
            return None;
        }
        for col in x..x + w {
            self.clear_wide_partner(col, y);
        }
        let row = &mut self.rows[y];
        row[x] = Cell {
            glyph: Glyph::Char(c),
            paint,
        };
        if w == 2 {
            row[x + 1] = Cell {
                glyph: Glyph::Tail,
                paint,
            };
        }
        Some(x + w)
    }

    // overwriting either half of a wide char blanks the other half
    fn clear_wide_partner(&mut self, x: usize, y: usize) {
        let row = &mut self.rows[y];
        match row[x].glyph {
            Glyph::Tail if x > 0 => row[x - 1].glyph = Glyph::Char(' '),
            Glyph::Char(c) if c.width() == Some(2) && x + 1 < row.len() => {
                row[x + 1].glyph = Glyph::Char(' ')
            }
            _ => {}
        }
    }

    pub fn present(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_paint = Paint::Plain;
            for cell in row {
                if cell.paint != run_paint && !run.is_empty() {
                    line.push_str(&paint_run(run_paint, &run));
                    run.clear();
                }
                run_paint = cell.paint;
                if let Glyph::Char(c) = cell.glyph {
                    run.push(c);
                }
            }
            if !run.is_empty() {
                line.push_str(&paint_run(run_paint, &run));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

fn paint_run(paint: Paint, run: &str) -> String {
    match style_for(paint) {
        Some(style) => style.render(run),
        None => run.to_string(),
    }
}
