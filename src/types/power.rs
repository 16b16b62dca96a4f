//! Power smoothing and workload power profiles
//!
//! Both families are recent additions for datacenter boards: power
//! smoothing shapes ramp rates against a TDP floor, workload power
//! profiles let clients request named tuning profiles whose arbitration
//! happens entirely in the driver.

use std::os::raw::{c_double, c_uint};

use super::core::nvmlEnableState_t;
use crate::nvml_struct_version;

// ---------------------------------------------------------------------------
// Power smoothing
// ---------------------------------------------------------------------------

pub const NVML_POWER_SMOOTHING_MAX_NUM_PROFILES: c_uint = 5;
pub const NVML_POWER_SMOOTHING_ADMIN_OVERRIDE_NOT_SET: c_uint = 0xFFFFFFFF;

pub const NVML_POWER_SMOOTHING_PROFILE_PARAM_PERCENT_TDP_FLOOR: c_uint = 0;
pub const NVML_POWER_SMOOTHING_PROFILE_PARAM_RAMP_UP_RATE: c_uint = 1;
pub const NVML_POWER_SMOOTHING_PROFILE_PARAM_RAMP_DOWN_RATE: c_uint = 2;
pub const NVML_POWER_SMOOTHING_PROFILE_PARAM_RAMP_DOWN_HYSTERESIS: c_uint = 3;
pub const NVML_POWER_SMOOTHING_NUM_PROFILE_PARAMS: c_uint = 4;

/// One (profile, parameter) update. `value` units depend on the parameter:
/// percent for the TDP floor, mW/s for ramp rates, ms for hysteresis.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPowerSmoothingProfile_v1_t {
    pub version: c_uint,
    pub profileId: c_uint,
    pub paramId: c_uint,
    pub value: c_double,
}
pub type nvmlPowerSmoothingProfile_t = nvmlPowerSmoothingProfile_v1_t;

pub const nvmlPowerSmoothingProfile_v1: c_uint =
    nvml_struct_version!(nvmlPowerSmoothingProfile_v1_t, 1);

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPowerSmoothingState_v1_t {
    pub version: c_uint,
    pub state: nvmlEnableState_t,
}
pub type nvmlPowerSmoothingState_t = nvmlPowerSmoothingState_v1_t;

pub const nvmlPowerSmoothingState_v1: c_uint =
    nvml_struct_version!(nvmlPowerSmoothingState_v1_t, 1);

// ---------------------------------------------------------------------------
// Workload power profiles
// ---------------------------------------------------------------------------

pub const NVML_WORKLOAD_POWER_PROFILE_MAX_P: c_uint = 0;
pub const NVML_WORKLOAD_POWER_PROFILE_MAX_Q: c_uint = 1;
pub const NVML_WORKLOAD_POWER_PROFILE_COMPUTE: c_uint = 2;
pub const NVML_WORKLOAD_POWER_PROFILE_MEMORY_BOUND: c_uint = 3;
pub const NVML_WORKLOAD_POWER_PROFILE_NETWORK: c_uint = 4;
pub const NVML_WORKLOAD_POWER_PROFILE_BALANCED: c_uint = 5;
pub const NVML_WORKLOAD_POWER_PROFILE_LLM_INFERENCE: c_uint = 6;
pub const NVML_WORKLOAD_POWER_PROFILE_LLM_TRAINING: c_uint = 7;
pub const NVML_WORKLOAD_POWER_PROFILE_RBM: c_uint = 8;
pub const NVML_WORKLOAD_POWER_PROFILE_DCPCIE: c_uint = 9;
pub const NVML_WORKLOAD_POWER_PROFILE_HMMA_SPARSE: c_uint = 10;
pub const NVML_WORKLOAD_POWER_PROFILE_HMMA_DENSE: c_uint = 11;
pub const NVML_WORKLOAD_POWER_PROFILE_SYNC_BALANCED: c_uint = 12;
pub const NVML_WORKLOAD_POWER_PROFILE_HPC: c_uint = 13;
pub const NVML_WORKLOAD_POWER_PROFILE_MIG: c_uint = 14;
pub const NVML_WORKLOAD_POWER_PROFILE_MAX: c_uint = 15;

pub const NVML_255_MASK_BITS_PER_ELEM: usize = 32;
pub const NVML_255_MASK_NUM_ELEMS: usize = 8;

/// 255-bit mask indexed by profile ID.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlMask255_t {
    pub mask: [c_uint; NVML_255_MASK_NUM_ELEMS],
}

/// Sets `index` in a [`nvmlMask255_t`], mirroring the header's
/// `NVML_255_MASK_BIT_SET` macro.
#[inline]
pub fn nvml_mask255_bit_set(index: usize, mask: &mut nvmlMask255_t) {
    mask.mask[index / NVML_255_MASK_BITS_PER_ELEM] |=
        1 << (index % NVML_255_MASK_BITS_PER_ELEM);
}

/// Tests `index` in a [`nvmlMask255_t`], mirroring `NVML_255_MASK_BIT_GET`.
#[inline]
pub fn nvml_mask255_bit_get(index: usize, mask: &nvmlMask255_t) -> bool {
    mask.mask[index / NVML_255_MASK_BITS_PER_ELEM] & (1 << (index % NVML_255_MASK_BITS_PER_ELEM))
        != 0
}

/// Static description of one profile: its priority and the profiles it
/// cannot be combined with.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlWorkloadPowerProfileInfo_v1_t {
    pub version: c_uint,
    pub profileId: c_uint,
    pub priority: c_uint,
    pub conflictingMask: nvmlMask255_t,
}
pub type nvmlWorkloadPowerProfileInfo_t = nvmlWorkloadPowerProfileInfo_v1_t;

pub const nvmlWorkloadPowerProfileInfo_v1: c_uint =
    nvml_struct_version!(nvmlWorkloadPowerProfileInfo_v1_t, 1);

/// Every profile the device knows, with a validity mask over the array.
#[repr(C)]
pub struct nvmlWorkloadPowerProfileProfilesInfo_v1_t {
    pub version: c_uint,
    pub perfProfilesMask: nvmlMask255_t,
    pub perfProfile: [nvmlWorkloadPowerProfileInfo_v1_t; 255],
}
pub type nvmlWorkloadPowerProfileProfilesInfo_t = nvmlWorkloadPowerProfileProfilesInfo_v1_t;

pub const nvmlWorkloadPowerProfileProfilesInfo_v1: c_uint =
    nvml_struct_version!(nvmlWorkloadPowerProfileProfilesInfo_v1_t, 1);

impl Default for nvmlWorkloadPowerProfileProfilesInfo_v1_t {
    fn default() -> Self {
        let mut info: Self = unsafe { std::mem::zeroed() };
        info.version = nvmlWorkloadPowerProfileProfilesInfo_v1;
        info
    }
}

/// Currently requested and enforced profile masks.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlWorkloadPowerProfileCurrentProfiles_v1_t {
    pub version: c_uint,
    pub perfProfilesMask: nvmlMask255_t,
    pub requestedProfilesMask: nvmlMask255_t,
    pub enforcedProfilesMask: nvmlMask255_t,
}
pub type nvmlWorkloadPowerProfileCurrentProfiles_t = nvmlWorkloadPowerProfileCurrentProfiles_v1_t;

pub const nvmlWorkloadPowerProfileCurrentProfiles_v1: c_uint =
    nvml_struct_version!(nvmlWorkloadPowerProfileCurrentProfiles_v1_t, 1);

/// Profile mask for set/clear requests.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlWorkloadPowerProfileRequestedProfiles_v1_t {
    pub version: c_uint,
    pub requestedProfilesMask: nvmlMask255_t,
}
pub type nvmlWorkloadPowerProfileRequestedProfiles_t =
    nvmlWorkloadPowerProfileRequestedProfiles_v1_t;

pub const nvmlWorkloadPowerProfileRequestedProfiles_v1: c_uint =
    nvml_struct_version!(nvmlWorkloadPowerProfileRequestedProfiles_v1_t, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_power_smoothing_profile_layout() {
        assert_eq!(size_of::<nvmlPowerSmoothingProfile_v1_t>(), 24);
        assert_eq!(offset_of!(nvmlPowerSmoothingProfile_v1_t, value), 16);
        assert_eq!(nvmlPowerSmoothingProfile_v1, 24 | (1 << 24));
        assert_eq!(nvmlPowerSmoothingState_v1, 8 | (1 << 24));
    }

    #[test]
    fn test_mask255_helpers() {
        let mut mask = nvmlMask255_t::default();
        assert!(!nvml_mask255_bit_get(200, &mask));
        nvml_mask255_bit_set(200, &mut mask);
        assert!(nvml_mask255_bit_get(200, &mask));
        assert_eq!(mask.mask[6], 1 << 8);
        nvml_mask255_bit_set(0, &mut mask);
        assert!(nvml_mask255_bit_get(0, &mask));
    }

    #[test]
    fn test_workload_profile_layouts() {
        assert_eq!(size_of::<nvmlMask255_t>(), 32);
        assert_eq!(size_of::<nvmlWorkloadPowerProfileInfo_v1_t>(), 44);
        assert_eq!(
            size_of::<nvmlWorkloadPowerProfileProfilesInfo_v1_t>(),
            36 + 255 * 44
        );
        assert_eq!(size_of::<nvmlWorkloadPowerProfileCurrentProfiles_v1_t>(), 100);
        assert_eq!(size_of::<nvmlWorkloadPowerProfileRequestedProfiles_v1_t>(), 36);
    }

    #[test]
    fn test_workload_profile_ids() {
        assert_eq!(NVML_WORKLOAD_POWER_PROFILE_MAX_P, 0);
        assert_eq!(NVML_WORKLOAD_POWER_PROFILE_LLM_INFERENCE, 6);
        assert_eq!(NVML_WORKLOAD_POWER_PROFILE_MAX, 15);
    }
}
