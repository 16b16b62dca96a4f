//! nvml-sys - dynamically loaded bindings for the NVIDIA Management Library
//!
//! A structural mirror of the NVML C API: `#[repr(C)]` struct and union
//! layouts, the exact numeric constants of the vendor header, and function
//! signatures resolved by name against `libnvidia-ml.so.1` / `nvml.dll` at
//! runtime. The binding performs no computation of its own and never
//! interprets a return code; it exists so the ABI boundary has one
//! well-tested description on the Rust side.
//!
//! ```no_run
//! use nvml_sys::{NvmlLib, NVML_SUCCESS};
//!
//! let lib = NvmlLib::open()?;
//! unsafe {
//!     if lib.init.nvmlInit_v2() == NVML_SUCCESS {
//!         let mut count = 0;
//!         lib.device.nvmlDeviceGetCount_v2(&mut count);
//!         lib.init.nvmlShutdown();
//!     }
//! }
//! # Ok::<(), nvml_sys::NvmlLoadError>(())
//! ```
//!
//! # Modules
//!
//! - [`api`]: resolved symbol tables, one per API group
//! - [`error`]: load-path errors and return-code helpers
//! - [`loader`]: shared-library discovery
//! - [`types`]: the ABI descriptor surface
//! - [`legacy`]: unversioned function aliases (feature `legacy-functions`)

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

pub mod api;
pub mod cli;
pub mod error;
#[cfg(feature = "legacy-functions")]
pub mod legacy;
pub mod loader;
pub mod version;

pub mod types;

pub use api::NvmlLib;
pub use error::{error_string, nvml_try, NvmlCallError, NvmlLoadError};
#[cfg(feature = "legacy-functions")]
pub use legacy::nvmlBlacklistDeviceInfo_t;
pub use version::{NVML_API_VERSION, NVML_API_VERSION_STR};

pub use types::cc::*;
pub use types::core::*;
pub use types::device::*;
pub use types::event::*;
pub use types::gpm::*;
pub use types::mig::*;
pub use types::power::*;
pub use types::unit::*;
pub use types::vgpu::*;
