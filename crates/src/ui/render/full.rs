use crate::ui::model::{Mode, Session};
use crate::ui::render::canvas::{Frame, Paint};
use crate::ui::render::footer::draw_footer;
use crate::ui::render::header::{draw_header, draw_status};
use crate::ui::render::help::draw_help;
use crate::ui::render::list::draw_list;

pub fn too_small_notice(s: &Session) -> String {
    format!(
        "Terminal too small: {}x{} (needs {}x{})",
        s.layout.width, s.layout.height, s.config.min_width, s.config.min_height
    )
}

pub fn render_frame(s: &Session) -> Frame {
    let l = &s.layout;
    let mut f = Frame::new(l.width, l.height);
    if s.too_small() {
        f.text(0, 0, too_small_notice(s), Paint::Error);
        return f;
    }
    draw_header(s, &mut f);
    match s.mode {
        Mode::KeybindingsHelp => draw_help(s, &mut f),
        Mode::Normal | Mode::Filter(_) => draw_list(s, &mut f),
    }
    draw_footer(s, &mut f);
    draw_status(s, &mut f);
    f
}

pub fn render_full(s: &Session) -> String {
    render_frame(s).rasterize()
}
