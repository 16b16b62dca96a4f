//! MIG mode, GPU instances and compute instances
//!
//! Create/destroy calls hand out driver-owned handles; the binding never
//! tracks them. `nvmlDeviceSetMigMode` reports the activation result
//! separately from the call's own return code.

use std::os::raw::c_uint;

use crate::types::core::{
    nvmlComputeInstance_t, nvmlDevice_t, nvmlGpuInstance_t, nvmlReturn_t,
};
use crate::types::mig::*;

nvml_api_group! {
    pub struct MigApi {
        fn nvmlDeviceSetMigMode(device: nvmlDevice_t, mode: c_uint, activationStatus: *mut nvmlReturn_t);
        fn nvmlDeviceGetMigMode(device: nvmlDevice_t, currentMode: *mut c_uint, pendingMode: *mut c_uint);

        // GPU instances
        fn nvmlDeviceGetGpuInstanceProfileInfo(
            device: nvmlDevice_t,
            profile: c_uint,
            info: *mut nvmlGpuInstanceProfileInfo_t,
        );
        fn nvmlDeviceGetGpuInstanceProfileInfoV(
            device: nvmlDevice_t,
            profile: c_uint,
            info: *mut nvmlGpuInstanceProfileInfo_v2_t,
        );
        fn nvmlDeviceGetGpuInstancePossiblePlacements_v2(
            device: nvmlDevice_t,
            profileId: c_uint,
            placements: *mut nvmlGpuInstancePlacement_t,
            count: *mut c_uint,
        );
        fn nvmlDeviceGetGpuInstanceRemainingCapacity(
            device: nvmlDevice_t,
            profileId: c_uint,
            count: *mut c_uint,
        );
        fn nvmlDeviceCreateGpuInstance(
            device: nvmlDevice_t,
            profileId: c_uint,
            gpuInstance: *mut nvmlGpuInstance_t,
        );
        fn nvmlDeviceCreateGpuInstanceWithPlacement(
            device: nvmlDevice_t,
            profileId: c_uint,
            placement: *const nvmlGpuInstancePlacement_t,
            gpuInstance: *mut nvmlGpuInstance_t,
        );
        fn nvmlGpuInstanceDestroy(gpuInstance: nvmlGpuInstance_t);
        fn nvmlDeviceGetGpuInstances(
            device: nvmlDevice_t,
            profileId: c_uint,
            gpuInstances: *mut nvmlGpuInstance_t,
            count: *mut c_uint,
        );
        fn nvmlDeviceGetGpuInstanceById(
            device: nvmlDevice_t,
            id: c_uint,
            gpuInstance: *mut nvmlGpuInstance_t,
        );
        fn nvmlGpuInstanceGetInfo(gpuInstance: nvmlGpuInstance_t, info: *mut nvmlGpuInstanceInfo_t);

        // Compute instances
        fn nvmlGpuInstanceGetComputeInstanceProfileInfo(
            gpuInstance: nvmlGpuInstance_t,
            profile: c_uint,
            engProfile: c_uint,
            info: *mut nvmlComputeInstanceProfileInfo_t,
        );
        fn nvmlGpuInstanceGetComputeInstanceProfileInfoV(
            gpuInstance: nvmlGpuInstance_t,
            profile: c_uint,
            engProfile: c_uint,
            info: *mut nvmlComputeInstanceProfileInfo_v2_t,
        );
        fn nvmlGpuInstanceGetComputeInstanceRemainingCapacity(
            gpuInstance: nvmlGpuInstance_t,
            profileId: c_uint,
            count: *mut c_uint,
        );
        fn nvmlGpuInstanceGetComputeInstancePossiblePlacements(
            gpuInstance: nvmlGpuInstance_t,
            profileId: c_uint,
            placements: *mut nvmlComputeInstancePlacement_t,
            count: *mut c_uint,
        );
        fn nvmlGpuInstanceCreateComputeInstance(
            gpuInstance: nvmlGpuInstance_t,
            profileId: c_uint,
            computeInstance: *mut nvmlComputeInstance_t,
        );
        fn nvmlGpuInstanceCreateComputeInstanceWithPlacement(
            gpuInstance: nvmlGpuInstance_t,
            profileId: c_uint,
            placement: *const nvmlComputeInstancePlacement_t,
            computeInstance: *mut nvmlComputeInstance_t,
        );
        fn nvmlComputeInstanceDestroy(computeInstance: nvmlComputeInstance_t);
        fn nvmlGpuInstanceGetComputeInstances(
            gpuInstance: nvmlGpuInstance_t,
            profileId: c_uint,
            computeInstances: *mut nvmlComputeInstance_t,
            count: *mut c_uint,
        );
        fn nvmlGpuInstanceGetComputeInstanceById(
            gpuInstance: nvmlGpuInstance_t,
            id: c_uint,
            computeInstance: *mut nvmlComputeInstance_t,
        );
        fn nvmlComputeInstanceGetInfo_v2(
            computeInstance: nvmlComputeInstance_t,
            info: *mut nvmlComputeInstanceInfo_t,
        );

        // MIG device handles
        fn nvmlDeviceIsMigDeviceHandle(device: nvmlDevice_t, isMigDevice: *mut c_uint);
        fn nvmlDeviceGetGpuInstanceId(device: nvmlDevice_t, id: *mut c_uint);
        fn nvmlDeviceGetComputeInstanceId(device: nvmlDevice_t, id: *mut c_uint);
        fn nvmlDeviceGetMaxMigDeviceCount(device: nvmlDevice_t, count: *mut c_uint);
        fn nvmlDeviceGetMigDeviceHandleByIndex(
            device: nvmlDevice_t,
            index: c_uint,
            migDevice: *mut nvmlDevice_t,
        );
        fn nvmlDeviceGetDeviceHandleFromMigDeviceHandle(
            migDevice: nvmlDevice_t,
            device: *mut nvmlDevice_t,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_mig_table_shape() {
        let api = MigApi::empty();
        assert!(MigApi::symbol_count() >= 27);
        let mut current = 0;
        let mut pending = 0;
        assert_eq!(
            unsafe { api.nvmlDeviceGetMigMode(std::ptr::null_mut(), &mut current, &mut pending) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
    }
}
