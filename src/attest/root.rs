//! Root-indicator denylist

use super::probe::EnvironmentProbe;
use std::path::{Path, PathBuf};

/// Locations historically associated with root-enabling binaries
pub const ROOT_INDICATORS: &[&str] = &[
    "/system/app/Superuser.apk",
    "/sbin/su",
    "/system/bin/su",
    "/system/xbin/su",
    "/data/local/xbin/su",
    "/data/local/bin/su",
    "/system/sd/xbin/su",
    "/system/bin/failsafe/su",
    "/data/local/su",
    "/su/bin/su",
];

pub fn default_root_indicators() -> Vec<PathBuf> {
    ROOT_INDICATORS.iter().map(|p| PathBuf::from(*p)).collect()
}

/// First indicator that exists, if any. Stops at the first hit.
pub(crate) fn find_root_indicator<'a, P: EnvironmentProbe + ?Sized>(
    probe: &P,
    indicators: &'a [PathBuf],
) -> Option<&'a Path> {
    indicators
        .iter()
        .map(PathBuf::as_path)
        .find(|path| probe.path_exists(path))
}
