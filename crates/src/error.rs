use std::io;
use thiserror::Error;

/// Failures reported by a [`PackageProvider`](crate::packages::PackageProvider).
///
/// `Display` carries the full diagnostic and only ever goes to the log file.
/// The status line uses [`ProviderError::reason`] instead.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read output of `{command}`: {source}")]
    Read {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", exit_label(.code))]
    Exit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to close command stream of `{command}`: {source}")]
    Close {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

impl ProviderError {
    // short phrase safe for the status line
    pub fn reason(&self) -> &'static str {
        match self {
            ProviderError::Spawn { .. } => "could not start the package manager",
            ProviderError::Read { .. } => "could not read package manager output",
            ProviderError::Exit { .. } => "package manager reported an error",
            ProviderError::Close { .. } => "command stream did not close cleanly",
        }
    }

    pub fn command(&self) -> &str {
        match self {
            ProviderError::Spawn { command, .. }
            | ProviderError::Read { command, .. }
            | ProviderError::Exit { command, .. }
            | ProviderError::Close { command, .. } => command,
        }
    }
}

/// Errors that stop the program before the interaction loop starts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("terminal is {width}x{height}, lazypm needs at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("failed to initialise the terminal: {0}")]
    Backend(String),

    #[error("`{0}` was not found in PATH; lazypm drives xbps and needs it installed")]
    ProviderMissing(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("interaction loop failed: {0}")]
    Program(String),

    #[error("failed to set up logging in {path}: {source}")]
    Logging {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_TERMINAL_TOO_SMALL: i32 = 2;
pub const EXIT_BACKEND: i32 = 3;

impl SetupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::TerminalTooSmall { .. } => EXIT_TERMINAL_TOO_SMALL,
            SetupError::Backend(_) => EXIT_BACKEND,
            SetupError::ProviderMissing(_)
            | SetupError::Provider(_)
            | SetupError::Program(_)
            | SetupError::Logging { .. } => EXIT_ERROR,
        }
    }
}
