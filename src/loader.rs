//! Locating and opening the NVML shared library
//!
//! The library ships with the driver, not with CUDA, so the usual install
//! locations are stable: the dynamic linker search path first, then the
//! distro-specific driver directories. `NVML_LIBRARY_PATH` overrides the
//! whole list for containers and test rigs.

use libloading::Library;

use crate::error::NvmlLoadError;

/// Environment variable that overrides the candidate list with a single path.
pub const NVML_LIBRARY_PATH_ENV: &str = "NVML_LIBRARY_PATH";

#[cfg(target_os = "linux")]
const DEFAULT_CANDIDATES: &[&str] = &[
    "libnvidia-ml.so.1",
    "libnvidia-ml.so",
    "/usr/lib/x86_64-linux-gnu/libnvidia-ml.so.1",
    "/usr/lib64/libnvidia-ml.so.1",
    "/opt/nvidia/lib64/libnvidia-ml.so.1",
];

#[cfg(target_os = "windows")]
const DEFAULT_CANDIDATES: &[&str] = &[
    "nvml.dll",
    "C:\\Windows\\System32\\nvml.dll",
    "C:\\Program Files\\NVIDIA Corporation\\NVSMI\\nvml.dll",
];

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
const DEFAULT_CANDIDATES: &[&str] = &["libnvidia-ml.so.1"];

/// The paths that will be tried, in order.
pub fn candidate_paths() -> Vec<String> {
    if let Ok(path) = std::env::var(NVML_LIBRARY_PATH_ENV) {
        if !path.is_empty() {
            return vec![path];
        }
    }
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

/// Tries each candidate in order, returning the first library that opens
/// along with the path it was opened from.
pub(crate) fn open_library() -> Result<(Library, String), NvmlLoadError> {
    let mut searched = Vec::new();
    for candidate in candidate_paths() {
        match unsafe { Library::new(&candidate) } {
            Ok(lib) => {
                log::debug!("loaded NVML from {}", candidate);
                return Ok((lib, candidate));
            }
            Err(err) => {
                log::debug!("NVML candidate {} not usable: {}", candidate, err);
                searched.push(candidate);
            }
        }
    }
    Err(NvmlLoadError::LibraryNotFound { searched })
}

/// Opens exactly the given path, with no fallback.
pub(crate) fn open_library_at(path: &str) -> Result<Library, NvmlLoadError> {
    match unsafe { Library::new(path) } {
        Ok(lib) => {
            log::debug!("loaded NVML from {}", path);
            Ok(lib)
        }
        Err(source) => Err(NvmlLoadError::OpenFailed {
            path: path.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_paths_env_override() {
        // Exercises default and override in one test; the env var is
        // process-global and tests run in parallel.
        std::env::remove_var(NVML_LIBRARY_PATH_ENV);
        let defaults = candidate_paths();
        assert!(!defaults.is_empty());
        assert!(defaults[0].contains("nvidia-ml") || defaults[0].contains("nvml"));

        std::env::set_var(NVML_LIBRARY_PATH_ENV, "/tmp/custom/libnvidia-ml.so.1");
        let overridden = candidate_paths();
        assert_eq!(overridden, vec!["/tmp/custom/libnvidia-ml.so.1".to_string()]);
        std::env::remove_var(NVML_LIBRARY_PATH_ENV);
    }

    #[test]
    fn test_open_library_at_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libnvidia-ml.so.1");
        let err = open_library_at(path.to_str().unwrap()).unwrap_err();
        match err {
            NvmlLoadError::OpenFailed { path: p, .. } => {
                assert!(p.ends_with("libnvidia-ml.so.1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_library_at_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libnvidia-ml.so.1");
        std::fs::write(&path, b"not an elf").unwrap();
        assert!(open_library_at(path.to_str().unwrap()).is_err());
    }
}
