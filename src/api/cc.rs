//! Confidential computing queries and commands

use std::os::raw::{c_uint, c_ulonglong};

use crate::types::cc::*;
use crate::types::core::nvmlDevice_t;
use crate::types::device::nvmlMemory_t;

nvml_api_group! {
    pub struct ConfComputeApi {
        fn nvmlSystemGetConfComputeCapabilities(capabilities: *mut nvmlConfComputeSystemCaps_t);
        fn nvmlSystemGetConfComputeState(state: *mut nvmlConfComputeSystemState_t);
        fn nvmlSystemGetConfComputeSettings(settings: *mut nvmlSystemConfComputeSettings_t);
        fn nvmlSystemGetConfComputeGpusReadyState(isAcceptingWork: *mut c_uint);
        fn nvmlSystemSetConfComputeGpusReadyState(isAcceptingWork: c_uint);
        fn nvmlSystemGetConfComputeKeyRotationThresholdInfo(
            pKeyRotationThrInfo: *mut nvmlConfComputeGetKeyRotationThresholdInfo_t,
        );
        fn nvmlSystemSetConfComputeKeyRotationThresholdInfo(
            pKeyRotationThrInfo: *mut nvmlConfComputeSetKeyRotationThresholdInfo_t,
        );
        fn nvmlDeviceGetConfComputeMemSizeInfo(
            device: nvmlDevice_t,
            memInfo: *mut nvmlConfComputeMemSizeInfo_t,
        );
        fn nvmlDeviceGetConfComputeProtectedMemoryUsage(
            device: nvmlDevice_t,
            memory: *mut nvmlMemory_t,
        );
        fn nvmlDeviceGetConfComputeGpuCertificate(
            device: nvmlDevice_t,
            gpuCert: *mut nvmlConfComputeGpuCertificate_t,
        );
        fn nvmlDeviceGetConfComputeGpuAttestationReport(
            device: nvmlDevice_t,
            gpuAtstReport: *mut nvmlConfComputeGpuAttestationReport_t,
        );
        fn nvmlDeviceSetConfComputeUnprotectedMemSize(device: nvmlDevice_t, sizeKiB: c_ulonglong);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_cc_table_shape() {
        let api = ConfComputeApi::empty();
        assert_eq!(ConfComputeApi::symbol_count(), 12);
        let mut caps = nvmlConfComputeSystemCaps_t::default();
        assert_eq!(
            unsafe { api.nvmlSystemGetConfComputeCapabilities(&mut caps) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
    }
}
