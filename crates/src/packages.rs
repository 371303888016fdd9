use crate::error::ProviderError;
use std::fmt;

pub const TAG_INSTALLED: &str = "[*]";
pub const TAG_AVAILABLE: &str = "[-]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageStatus {
    Installed,
    Available,
}

impl PackageStatus {
    pub fn tag(self) -> &'static str {
        match self {
            PackageStatus::Installed => TAG_INSTALLED,
            PackageStatus::Available => TAG_AVAILABLE,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TAG_INSTALLED => Some(PackageStatus::Installed),
            TAG_AVAILABLE => Some(PackageStatus::Available),
            _ => None,
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRecord {
    pub status: PackageStatus,
    pub name: String,
    pub description: String,
}

impl PackageRecord {
    pub fn new(status: PackageStatus, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.status == PackageStatus::Installed
    }

    pub fn with_status(&self, status: PackageStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// A provider call whose visible effect succeeded.
///
/// `close_failure` is set when the command produced its output but the
/// stream could not be closed afterwards.
#[derive(Debug)]
pub struct Completed<T> {
    pub value: T,
    pub close_failure: Option<ProviderError>,
}

impl<T> Completed<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            close_failure: None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Completed<U> {
        Completed {
            value: f(self.value),
            close_failure: self.close_failure,
        }
    }
}

pub type ProviderResult<T> = Result<Completed<T>, ProviderError>;

/// The package database the UI drives. Every call blocks until the
/// underlying command finishes.
pub trait PackageProvider: Send {
    fn list(&mut self, filter: Option<&str>) -> ProviderResult<Vec<PackageRecord>>;
    /// Installs an available record, or updates an installed one.
    fn install(&mut self, record: &PackageRecord) -> ProviderResult<PackageRecord>;
    fn update_all(&mut self) -> ProviderResult<()>;
    fn uninstall(&mut self, record: &PackageRecord) -> ProviderResult<PackageRecord>;
    /// Refresh the repository index.
    fn sync(&mut self) -> ProviderResult<()>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags_round_trip_through_parser() {
        assert_eq!(PackageStatus::from_tag("[*]"), Some(PackageStatus::Installed));
        assert_eq!(PackageStatus::from_tag("[-]"), Some(PackageStatus::Available));
        assert_eq!(PackageStatus::from_tag("[?]"), None);
        assert_eq!(PackageStatus::Installed.to_string(), "[*]");
    }

    #[test]
    fn test_with_status_keeps_name_and_description() {
        let r = PackageRecord::new(PackageStatus::Available, "vim-9.1_1", "Vim editor");
        let installed = r.with_status(PackageStatus::Installed);
        assert!(installed.is_installed());
        assert_eq!(installed.name, r.name);
        assert_eq!(installed.description, r.description);
    }
}
