// Render pass: each submodule draws one screen region into a `Frame`.

pub mod canvas;
pub mod footer;
pub mod full;
pub mod header;
pub mod help;
pub mod list;
pub mod styles;
pub mod util;

pub use canvas::{DrawOp, Frame, Paint};
pub use full::{render_frame, render_full};
pub use header::header_label;
