//! Error types
//!
//! The binding itself can only fail while locating and opening the shared
//! library; everything after that is a raw `nvmlReturn_t` passed through
//! unchanged. [`NvmlCallError`] exists for consumers that want `?`-style
//! propagation of non-success codes without the binding interpreting them.

use thiserror::Error;

use crate::types::core::*;

/// Errors from locating and opening the NVML shared library.
#[derive(Error, Debug)]
pub enum NvmlLoadError {
    /// No candidate path could be opened
    #[error(
        "NVML library not found (searched {searched:?}). Is the NVIDIA driver installed?"
    )]
    LibraryNotFound { searched: Vec<String> },

    /// An explicitly requested path failed to open
    #[error("failed to load NVML library from '{path}': {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: libloading::Error,
    },
}

/// A non-success return code, carried verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{} ({})", error_string(*.0), .0)]
pub struct NvmlCallError(pub nvmlReturn_t);

impl NvmlCallError {
    /// The raw `nvmlReturn_t` value.
    pub fn code(&self) -> nvmlReturn_t {
        self.0
    }
}

/// Converts a raw return code into a `Result`, without remapping it.
pub fn nvml_try(code: nvmlReturn_t) -> Result<(), NvmlCallError> {
    if code == NVML_SUCCESS {
        Ok(())
    } else {
        Err(NvmlCallError(code))
    }
}

/// Static equivalent of `nvmlErrorString`, using the driver's own wording.
/// Usable before the library is loaded (or when it never loads).
pub fn error_string(code: nvmlReturn_t) -> &'static str {
    match code {
        NVML_SUCCESS => "Success",
        NVML_ERROR_UNINITIALIZED => "Uninitialized",
        NVML_ERROR_INVALID_ARGUMENT => "Invalid Argument",
        NVML_ERROR_NOT_SUPPORTED => "Not Supported",
        NVML_ERROR_NO_PERMISSION => "Insufficient Permissions",
        NVML_ERROR_ALREADY_INITIALIZED => "Already Initialized",
        NVML_ERROR_NOT_FOUND => "Not Found",
        NVML_ERROR_INSUFFICIENT_SIZE => "Insufficient Size",
        NVML_ERROR_INSUFFICIENT_POWER => "Insufficient External Power",
        NVML_ERROR_DRIVER_NOT_LOADED => "Driver Not Loaded",
        NVML_ERROR_TIMEOUT => "Timeout",
        NVML_ERROR_IRQ_ISSUE => "Interrupt Request Issue",
        NVML_ERROR_LIBRARY_NOT_FOUND => "NVML Shared Library Not Found",
        NVML_ERROR_FUNCTION_NOT_FOUND => "Function Not Found",
        NVML_ERROR_CORRUPTED_INFOROM => "Corrupted infoROM",
        NVML_ERROR_GPU_IS_LOST => "GPU is lost",
        NVML_ERROR_RESET_REQUIRED => "GPU requires restart",
        NVML_ERROR_OPERATING_SYSTEM => "The operating system has blocked the request",
        NVML_ERROR_LIB_RM_VERSION_MISMATCH => "RM has detected an NVML/RM version mismatch",
        NVML_ERROR_IN_USE => "In use by another client",
        NVML_ERROR_MEMORY => "Insufficient Memory",
        NVML_ERROR_NO_DATA => "No data",
        NVML_ERROR_VGPU_ECC_NOT_SUPPORTED => {
            "The requested vgpu operation is not available on target device, because ECC is enabled"
        }
        NVML_ERROR_INSUFFICIENT_RESOURCES => {
            "Ran out of critical resources, other than memory"
        }
        NVML_ERROR_FREQ_NOT_SUPPORTED => "The requested frequency is not supported",
        NVML_ERROR_ARGUMENT_VERSION_MISMATCH => "Function version mismatch",
        NVML_ERROR_DEPRECATED => "Deprecated",
        NVML_ERROR_NOT_READY => "Not Ready",
        NVML_ERROR_GPU_NOT_FOUND => "GPU not found",
        NVML_ERROR_INVALID_STATE => "Invalid state",
        _ => "Unknown Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_string_known_codes() {
        assert_eq!(error_string(NVML_SUCCESS), "Success");
        assert_eq!(error_string(NVML_ERROR_NOT_SUPPORTED), "Not Supported");
        assert_eq!(
            error_string(NVML_ERROR_ARGUMENT_VERSION_MISMATCH),
            "Function version mismatch"
        );
    }

    #[test]
    fn test_error_string_unknown_code() {
        assert_eq!(error_string(998), "Unknown Error");
        assert_eq!(error_string(NVML_ERROR_UNKNOWN), "Unknown Error");
    }

    #[test]
    fn test_nvml_try() {
        assert!(nvml_try(NVML_SUCCESS).is_ok());
        let err = nvml_try(NVML_ERROR_GPU_IS_LOST).unwrap_err();
        assert_eq!(err.code(), NVML_ERROR_GPU_IS_LOST);
        assert_eq!(err.to_string(), "GPU is lost (15)");
    }

    #[test]
    fn test_load_error_display() {
        let err = NvmlLoadError::LibraryNotFound {
            searched: vec!["libnvidia-ml.so.1".to_string()],
        };
        assert!(err.to_string().contains("NVIDIA driver"));
        assert!(err.to_string().contains("libnvidia-ml.so.1"));
    }
}
