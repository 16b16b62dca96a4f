//! Dynamically resolved symbol tables
//!
//! One table per API group. Every entry is an `Option` of a typed
//! `extern "C"` function pointer, resolved by exact symbol name when the
//! library is opened. The generated passthrough methods call the pointer
//! when present and return `NVML_ERROR_FUNCTION_NOT_FOUND` when the
//! installed driver predates the symbol, so callers see the same behavior
//! either way: a raw `nvmlReturn_t`, never interpreted by this layer.

use std::ffi::CStr;
use std::os::raw::c_char;

use libloading::Library;

use crate::error::NvmlLoadError;
use crate::loader;
use crate::types::core::nvmlReturn_t;

/// Copies a typed symbol out of the library, `None` if the driver does not
/// export it.
pub(crate) unsafe fn resolve<T: Copy>(lib: &Library, name: &[u8]) -> Option<T> {
    match lib.get::<T>(name) {
        Ok(sym) => Some(*sym),
        Err(err) => {
            log::trace!(
                "NVML symbol {} not resolved: {}",
                String::from_utf8_lossy(&name[..name.len().saturating_sub(1)]),
                err
            );
            None
        }
    }
}

/// Declares one symbol table: the struct of `Option<fn>` entries, its
/// loader, and a passthrough method per symbol. All declared symbols
/// return `nvmlReturn_t`; the lone exception (`nvmlErrorString`) is
/// declared by hand on [`NvmlLib`].
macro_rules! nvml_api_group {
    (
        $(#[$smeta:meta])*
        pub struct $group:ident {
            $(
                $(#[$fmeta:meta])*
                fn $sym:ident($($arg:ident: $ty:ty),* $(,)?);
            )*
        }
    ) => {
        $(#[$smeta])*
        pub struct $group {
            $(
                $(#[$fmeta])*
                pub $sym: Option<unsafe extern "C" fn($($ty),*) -> $crate::types::core::nvmlReturn_t>,
            )*
        }

        impl $group {
            pub(crate) fn load(lib: &::libloading::Library) -> Self {
                Self {
                    $(
                        $sym: unsafe {
                            $crate::api::resolve(lib, concat!(stringify!($sym), "\0").as_bytes())
                        },
                    )*
                }
            }

            /// Table with every entry unresolved.
            #[cfg(test)]
            pub(crate) fn empty() -> Self {
                Self { $($sym: None,)* }
            }

            /// Number of symbols in this group.
            pub fn symbol_count() -> usize {
                [$(stringify!($sym)),*].len()
            }

            /// Number of symbols the loaded driver actually exports.
            pub fn resolved_count(&self) -> usize {
                let mut n = 0;
                $(
                    if self.$sym.is_some() {
                        n += 1;
                    }
                )*
                n
            }

            $(
                $(#[$fmeta])*
                ///
                /// Returns `NVML_ERROR_FUNCTION_NOT_FOUND` if the driver does
                /// not export the symbol.
                ///
                /// # Safety
                ///
                /// Arguments must satisfy the contract of the underlying NVML
                /// entry point: handles valid, out-pointers writable, array
                /// pointers sized to their count, versioned structs with the
                /// `version` field set.
                #[allow(clippy::too_many_arguments)]
                pub unsafe fn $sym(&self, $($arg: $ty),*) -> $crate::types::core::nvmlReturn_t {
                    match self.$sym {
                        Some(f) => f($($arg),*),
                        None => $crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND,
                    }
                }
            )*
        }
    };
}

pub mod cc;
pub mod device;
pub mod event;
pub mod gpm;
pub mod init;
pub mod mig;
pub mod power;
pub mod unit;
pub mod vgpu;

/// The loaded NVML library and its resolved symbol tables.
///
/// Function pointers borrow from the library handle; keeping them grouped
/// inside this struct is what keeps them valid. The driver maintains its
/// own init refcount, so dropping this without `nvmlShutdown` leaks driver
/// state exactly as it would in C.
pub struct NvmlLib {
    library: Library,
    path: String,
    nvmlErrorString: Option<unsafe extern "C" fn(nvmlReturn_t) -> *const c_char>,
    pub init: init::InitApi,
    pub system: init::SystemApi,
    pub device: device::DeviceApi,
    pub unit: unit::UnitApi,
    pub event: event::EventApi,
    pub vgpu: vgpu::VgpuApi,
    pub mig: mig::MigApi,
    pub gpm: gpm::GpmApi,
    pub power: power::PowerApi,
    pub cc: cc::ConfComputeApi,
}

impl NvmlLib {
    /// Opens the first usable library from [`crate::loader::candidate_paths`]
    /// and resolves all symbol tables.
    pub fn open() -> Result<Self, NvmlLoadError> {
        let (library, path) = loader::open_library()?;
        Ok(Self::from_library(library, path))
    }

    /// Opens the library at exactly `path`.
    pub fn open_at(path: &str) -> Result<Self, NvmlLoadError> {
        let library = loader::open_library_at(path)?;
        Ok(Self::from_library(library, path.to_string()))
    }

    fn from_library(library: Library, path: String) -> Self {
        let lib = Self {
            nvmlErrorString: unsafe { resolve(&library, b"nvmlErrorString\0") },
            init: init::InitApi::load(&library),
            system: init::SystemApi::load(&library),
            device: device::DeviceApi::load(&library),
            unit: unit::UnitApi::load(&library),
            event: event::EventApi::load(&library),
            vgpu: vgpu::VgpuApi::load(&library),
            mig: mig::MigApi::load(&library),
            gpm: gpm::GpmApi::load(&library),
            power: power::PowerApi::load(&library),
            cc: cc::ConfComputeApi::load(&library),
            library,
            path,
        };
        log::debug!(
            "NVML symbol tables resolved from {}: device {}/{}, vgpu {}/{}, mig {}/{}",
            lib.path,
            lib.device.resolved_count(),
            device::DeviceApi::symbol_count(),
            lib.vgpu.resolved_count(),
            vgpu::VgpuApi::symbol_count(),
            lib.mig.resolved_count(),
            mig::MigApi::symbol_count(),
        );
        lib
    }

    /// Path the library was opened from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The driver's `nvmlErrorString`, falling back to the static table
    /// when the symbol is missing or returns null.
    pub fn error_string(&self, code: nvmlReturn_t) -> String {
        if let Some(f) = self.nvmlErrorString {
            let ptr = unsafe { f(code) };
            if !ptr.is_null() {
                return unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
            }
        }
        crate::error::error_string(code).to_string()
    }

    /// Shared library handle, for resolving symbols outside the tables.
    pub fn library(&self) -> &Library {
        &self.library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::*;

    #[test]
    fn test_unresolved_symbol_returns_function_not_found() {
        let api = device::DeviceApi::empty();
        let mut count: std::os::raw::c_uint = 0;
        let ret = unsafe { api.nvmlDeviceGetCount_v2(&mut count) };
        assert_eq!(ret, NVML_ERROR_FUNCTION_NOT_FOUND);
        assert_eq!(api.resolved_count(), 0);
    }

    #[test]
    fn test_symbol_counts_are_nonzero() {
        assert!(init::InitApi::symbol_count() >= 3);
        assert!(device::DeviceApi::symbol_count() > 100);
        assert!(mig::MigApi::symbol_count() > 20);
        assert!(vgpu::VgpuApi::symbol_count() > 30);
    }

    #[test]
    #[ignore = "Requires NVIDIA GPU"]
    fn test_open_init_shutdown() {
        let lib = NvmlLib::open().unwrap();
        let ret = unsafe { lib.init.nvmlInit_v2() };
        assert_eq!(ret, NVML_SUCCESS, "{}", lib.error_string(ret));
        let mut count = 0;
        assert_eq!(unsafe { lib.device.nvmlDeviceGetCount_v2(&mut count) }, NVML_SUCCESS);
        assert_eq!(unsafe { lib.init.nvmlShutdown() }, NVML_SUCCESS);
    }
}
