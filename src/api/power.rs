//! Power smoothing and workload power profiles

use crate::types::core::nvmlDevice_t;
use crate::types::power::*;

nvml_api_group! {
    pub struct PowerApi {
        // Power smoothing
        fn nvmlDevicePowerSmoothingActivatePresetProfile(
            device: nvmlDevice_t,
            profile: *mut nvmlPowerSmoothingProfile_t,
        );
        fn nvmlDevicePowerSmoothingUpdatePresetProfileParam(
            device: nvmlDevice_t,
            profile: *mut nvmlPowerSmoothingProfile_t,
        );
        fn nvmlDevicePowerSmoothingSetState(
            device: nvmlDevice_t,
            state: *mut nvmlPowerSmoothingState_t,
        );

        // Workload power profiles
        fn nvmlDeviceWorkloadPowerProfileGetProfilesInfo(
            device: nvmlDevice_t,
            profilesInfo: *mut nvmlWorkloadPowerProfileProfilesInfo_t,
        );
        fn nvmlDeviceWorkloadPowerProfileGetCurrentProfiles(
            device: nvmlDevice_t,
            currentProfiles: *mut nvmlWorkloadPowerProfileCurrentProfiles_t,
        );
        fn nvmlDeviceWorkloadPowerProfileSetRequestedProfiles(
            device: nvmlDevice_t,
            requestedProfiles: *mut nvmlWorkloadPowerProfileRequestedProfiles_t,
        );
        fn nvmlDeviceWorkloadPowerProfileClearRequestedProfiles(
            device: nvmlDevice_t,
            requestedProfiles: *mut nvmlWorkloadPowerProfileRequestedProfiles_t,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_power_table_shape() {
        let api = PowerApi::empty();
        assert_eq!(PowerApi::symbol_count(), 7);
        let mut state = nvmlPowerSmoothingState_v1_t {
            version: nvmlPowerSmoothingState_v1,
            state: 1,
        };
        assert_eq!(
            unsafe { api.nvmlDevicePowerSmoothingSetState(std::ptr::null_mut(), &mut state) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
    }
}
