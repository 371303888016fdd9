use crate::ui::render::canvas::Paint;
use lipgloss::{Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_DIM: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_KEY: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_HIGHLIGHT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(238, 0, 238))
        .foreground(Color::from_rgb(0, 0, 0))
});
pub static STYLE_LAZYPM_BADGE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .bold(true)
});
pub static STYLE_FILTER_BADGE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(238, 238, 0))
        .foreground(Color::from_rgb(0, 0, 0))
        .bold(true)
});
pub static STYLE_HELP_BADGE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(0, 238, 238))
        .foreground(Color::from_rgb(0, 0, 0))
        .bold(true)
});
pub static STYLE_CURSOR: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(255, 255, 255))
        .foreground(Color::from_rgb(0, 0, 0))
});
pub static STYLE_STATUS: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(255, 255, 255)));
pub static STYLE_SUCCESS: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 205, 0))
        .bold(true)
});
pub static STYLE_ERROR: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 0))
        .bold(true)
});
pub static STYLE_INFO: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(92, 92, 255)));

pub fn style_for(paint: Paint) -> Option<&'static Style> {
    let style: &'static Style = match paint {
        Paint::Plain => return None,
        Paint::Dim => &*STYLE_DIM,
        Paint::Label => &*STYLE_LABEL,
        Paint::Key => &*STYLE_KEY,
        Paint::Highlight => &*STYLE_HIGHLIGHT,
        Paint::LazypmBadge => &*STYLE_LAZYPM_BADGE,
        Paint::FilterBadge => &*STYLE_FILTER_BADGE,
        Paint::HelpBadge => &*STYLE_HELP_BADGE,
        Paint::Cursor => &*STYLE_CURSOR,
        Paint::StatusDefault => &*STYLE_STATUS,
        Paint::Success => &*STYLE_SUCCESS,
        Paint::Error => &*STYLE_ERROR,
        Paint::Info => &*STYLE_INFO,
    };
    Some(style)
}
