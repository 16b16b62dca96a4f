//! Initialization and system queries
//!
//! `nvmlInit_v2` attaches to every GPU in the system; `nvmlInitWithFlags`
//! can skip that. The driver refcounts init/shutdown pairs internally.

use std::os::raw::{c_char, c_int, c_uint};

use crate::types::core::nvmlDevice_t;
use crate::types::unit::nvmlHwbcEntry_t;

nvml_api_group! {
    /// Initialization and cleanup.
    pub struct InitApi {
        fn nvmlInit_v2();
        fn nvmlInitWithFlags(flags: c_uint);
        fn nvmlShutdown();
    }
}

nvml_api_group! {
    /// System-wide queries that need no device handle.
    pub struct SystemApi {
        fn nvmlSystemGetDriverVersion(version: *mut c_char, length: c_uint);
        fn nvmlSystemGetNVMLVersion(version: *mut c_char, length: c_uint);
        fn nvmlSystemGetCudaDriverVersion(cudaDriverVersion: *mut c_int);
        fn nvmlSystemGetCudaDriverVersion_v2(cudaDriverVersion: *mut c_int);
        fn nvmlSystemGetProcessName(pid: c_uint, name: *mut c_char, length: c_uint);
        fn nvmlSystemGetHicVersion(hwbcCount: *mut c_uint, hwbcEntries: *mut nvmlHwbcEntry_t);
        fn nvmlSystemGetTopologyGpuSet(
            cpuNumber: c_uint,
            count: *mut c_uint,
            deviceArray: *mut nvmlDevice_t,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_empty_init_table() {
        let api = InitApi::empty();
        assert_eq!(unsafe { api.nvmlInit_v2() }, NVML_ERROR_FUNCTION_NOT_FOUND);
        assert_eq!(unsafe { api.nvmlShutdown() }, NVML_ERROR_FUNCTION_NOT_FOUND);
        assert_eq!(InitApi::symbol_count(), 3);
    }

    #[test]
    fn test_system_table_shape() {
        assert_eq!(SystemApi::symbol_count(), 7);
        assert_eq!(SystemApi::empty().resolved_count(), 0);
    }
}
