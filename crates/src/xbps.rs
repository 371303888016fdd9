use crate::error::{ProviderError, SetupError};
use crate::packages::{
    Completed, PackageProvider, PackageRecord, PackageStatus, ProviderResult,
};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

pub const QUERY: &str = "xbps-query";
pub const INSTALL: &str = "xbps-install";
pub const REMOVE: &str = "xbps-remove";

/// Provider backed by the xbps command line tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xbps;

impl Xbps {
    pub fn new() -> Self {
        Xbps
    }

    // all three tools ship together; the query tool stands in for the set
    pub fn ensure_available() -> Result<(), SetupError> {
        which::which(QUERY)
            .map(|_| ())
            .map_err(|_| SetupError::ProviderMissing(QUERY))
    }
}

fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for a in args {
        line.push(' ');
        if a.is_empty() || a.contains(char::is_whitespace) {
            line.push_str(&format!("'{a}'"));
        } else {
            line.push_str(a);
        }
    }
    line
}

// Runs an xbps tool with stdin detached and output captured so nothing
// reaches the alternate screen.
fn run_xbps_cmd(program: &str, args: &[&str]) -> ProviderResult<String> {
    let command = command_line(program, args);
    debug!(command = %command, "running package manager");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ProviderError::Spawn {
            command: command.clone(),
            source,
        })?;

    // stderr drains on its own thread while stdout is read; a failed
    // stderr read leaves it empty
    let stderr_reader = child.stderr.take().map(|mut err| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = err.read_to_end(&mut buf);
            buf
        })
    });

    let mut stdout = Vec::new();
    let read = match child.stdout.take() {
        Some(mut out) => out.read_to_end(&mut stdout).map(|_| ()),
        None => Ok(()),
    };
    if let Err(source) = read {
        let _ = child.kill();
        let _ = child.wait();
        join_stderr(stderr_reader);
        return Err(ProviderError::Read { command, source });
    }
    let stderr = join_stderr(stderr_reader);

    let stdout = String::from_utf8_lossy(&stdout).to_string();
    match child.wait() {
        Ok(status) if status.success() => Ok(Completed::clean(stdout)),
        Ok(status) => Err(ProviderError::Exit {
            command,
            code: status.code(),
            stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
        }),
        Err(source) => {
            warn!(command = %command, error = %source, "command output read but wait failed");
            Ok(Completed {
                value: stdout,
                close_failure: Some(ProviderError::Close { command, source }),
            })
        }
    }
}

fn join_stderr(reader: Option<thread::JoinHandle<Vec<u8>>>) -> Vec<u8> {
    reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

/// Parses one line of `xbps-query -Rs` output:
/// `[*] vim-9.1.0_1    Vim editor (vi clone)`.
pub fn parse_query_line(line: &str) -> Option<PackageRecord> {
    let status = PackageStatus::from_tag(line.get(..3)?)?;
    let rest = line.get(4..)?;
    let (name, description) = match rest.split_once(char::is_whitespace) {
        Some((name, desc)) => (name, desc.trim()),
        None => (rest.trim(), ""),
    };
    if name.is_empty() {
        return None;
    }
    Some(PackageRecord::new(status, name, description))
}

pub fn parse_query_output(output: &str) -> Vec<PackageRecord> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| {
            let parsed = parse_query_line(l);
            if parsed.is_none() {
                debug!(line = l, "skipping unrecognised query line");
            }
            parsed
        })
        .collect()
}

// an installed record is updated in place, anything else is installed
fn install_args(record: &PackageRecord) -> [&str; 2] {
    let flags = if record.is_installed() { "-yu" } else { "-y" };
    [flags, record.name.as_str()]
}

impl PackageProvider for Xbps {
    fn list(&mut self, filter: Option<&str>) -> ProviderResult<Vec<PackageRecord>> {
        let pattern = filter.unwrap_or("");
        let out = run_xbps_cmd(QUERY, &["-Rs", pattern])?;
        Ok(out.map(|s| parse_query_output(&s)))
    }

    fn install(&mut self, record: &PackageRecord) -> ProviderResult<PackageRecord> {
        let out = run_xbps_cmd(INSTALL, &install_args(record))?;
        Ok(out.map(|_| record.with_status(PackageStatus::Installed)))
    }

    fn update_all(&mut self) -> ProviderResult<()> {
        let out = run_xbps_cmd(INSTALL, &["-Syu"])?;
        Ok(out.map(|_| ()))
    }

    fn uninstall(&mut self, record: &PackageRecord) -> ProviderResult<PackageRecord> {
        let out = run_xbps_cmd(REMOVE, &["-y", &record.name])?;
        Ok(out.map(|_| record.with_status(PackageStatus::Available)))
    }

    fn sync(&mut self) -> ProviderResult<()> {
        let out = run_xbps_cmd(INSTALL, &["-S"])?;
        Ok(out.map(|_| ()))
    }
}
