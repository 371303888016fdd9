use crate::error::SetupError;
use crate::ui::keys::Key;
use crate::ui::model::Session;
use crate::ui::{Msg, Signal};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

// `TeaModel::init` takes no arguments, so the session is parked here until
// the program asks for it.
static HANDOFF: Lazy<Mutex<Option<Session>>> = Lazy::new(|| Mutex::new(None));

// periodic frame message; re-armed every time it is delivered
struct FrameTick;
// follow-up scheduled right after a "working" frame has been presented
struct RunPending;

fn frame_tick(interval: Duration) -> Cmd {
    bubbletea_rs::tick(interval, |_| Box::new(FrameTick) as bubbletea_rs::event::Msg)
}

fn run_pending_soon() -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), |_| {
        Box::new(RunPending) as bubbletea_rs::event::Msg
    })
}

fn park(session: Session) {
    let mut slot = HANDOFF.lock().unwrap_or_else(|p| p.into_inner());
    *slot = Some(session);
}

fn take_parked() -> Option<Session> {
    HANDOFF.lock().unwrap_or_else(|p| p.into_inner()).take()
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Session
struct TeaAdapter {
    session: Session,
}

impl TeaAdapter {
    fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        match self.session.update(msg, Instant::now()) {
            Signal::Quit => Some(bubbletea_rs::quit()),
            Signal::Continue if self.session.pending.is_some() => Some(run_pending_soon()),
            Signal::Continue => None,
        }
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let Some(session) = take_parked() else {
            panic!("ui::run must park a session before the program starts");
        };
        let interval = session.config.frame_interval;
        (TeaAdapter { session }, Some(frame_tick(interval)))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            let key = Key::from_crossterm(km.key, km.modifiers)?;
            return self.dispatch(Msg::Key(key));
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.dispatch(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        if msg.downcast_ref::<FrameTick>().is_some() {
            self.session.update(Msg::Frame, Instant::now());
            return Some(frame_tick(self.session.config.frame_interval));
        }
        if msg.downcast_ref::<RunPending>().is_some() {
            return self.dispatch(Msg::RunPending);
        }
        None
    }

    fn view(&self) -> String {
        self.session.render_full()
    }
}

/// Hand the session to the bubbletea-rs program and drive it until the
/// user quits.
pub async fn run(session: Session) -> Result<(), SetupError> {
    park(session);
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| SetupError::Backend(format!("{e:?}")))?;
    info!("interaction loop started");
    program
        .run()
        .await
        .map_err(|e| SetupError::Program(format!("{e:?}")))?;
    info!("interaction loop finished");
    Ok(())
}
