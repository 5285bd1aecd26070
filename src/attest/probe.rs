//! OS-facing queries used by the attestor

use std::path::{Path, PathBuf};

/// Read-only view of the host the attestor inspects
pub trait EnvironmentProbe {
    /// Whether anything exists at `path`
    fn path_exists(&self, path: &Path) -> bool;

    /// Contents of the process status record, or `None` if it cannot be read
    fn read_status(&self, status_path: &Path) -> Option<String>;
}

/// The real host: `stat` for existence, a plain file read for status
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEnvironment;

impl EnvironmentProbe for HostEnvironment {
    fn path_exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as present
        std::fs::symlink_metadata(path).is_ok()
    }

    fn read_status(&self, status_path: &Path) -> Option<String> {
        std::fs::read_to_string(status_path).ok()
    }
}

/// Fixed answers, for hosts that gather the facts themselves and for tests
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    pub present: Vec<PathBuf>,
    pub status: Option<String>,
}

impl StaticEnvironment {
    /// Nothing present, no status record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.present.push(path.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl EnvironmentProbe for StaticEnvironment {
    fn path_exists(&self, path: &Path) -> bool {
        self.present.iter().any(|p| p == path)
    }

    fn read_status(&self, _status_path: &Path) -> Option<String> {
        self.status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("su");
        assert!(!HostEnvironment.path_exists(&file));
        std::fs::write(&file, b"").unwrap();
        assert!(HostEnvironment.path_exists(&file));
    }

    #[test]
    fn test_host_missing_status() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HostEnvironment
            .read_status(&dir.path().join("no-such-status"))
            .is_none());
    }

    #[test]
    fn test_static_environment() {
        let env = StaticEnvironment::new()
            .with_path("/sbin/su")
            .with_status("TracerPid:\t0\n");
        assert!(env.path_exists(Path::new("/sbin/su")));
        assert!(!env.path_exists(Path::new("/system/bin/su")));
        assert_eq!(
            env.read_status(Path::new("/ignored")).as_deref(),
            Some("TracerPid:\t0\n")
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_host_reads_proc_status() {
        let status = HostEnvironment
            .read_status(Path::new("/proc/self/status"))
            .unwrap();
        assert!(status.contains("TracerPid:"));
    }
}
