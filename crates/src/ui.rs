// UI module root: split implementation into focused submodules under `ui/`

pub mod filter;
pub mod keys;
pub mod layout;
pub mod model;
pub mod pager;
pub mod render;
pub mod run;
pub mod status;
pub mod terminal;
pub mod update;

pub use keys::Key;
pub use layout::{Layout, compute_layout};
pub use model::{Mode, PendingOp, Session};
pub use pager::{PageSlice, Pager, paginate};
pub use run::run;
pub use status::{Severity, StatusLine};
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Key(Key),
    // one per frame interval; drives status expiry and the cursor blink
    Frame,
    // delivered right after the "working" frame of a blocking operation
    RunPending,
}

/// What the loop should do after a message was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}
