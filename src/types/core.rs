//! Core ABI types shared by every API group
//!
//! Return codes, opaque handles, the `nvmlValue_t` union, sampling and
//! field-value types. Everything here mirrors the vendor header exactly;
//! numeric values are load-bearing and covered by the tests at the bottom.

use std::os::raw::{c_int, c_longlong, c_uint, c_ulong, c_ulonglong};

// ---------------------------------------------------------------------------
// Return codes
// ---------------------------------------------------------------------------

/// Return type of every NVML entry point except `nvmlErrorString`.
///
/// Kept as a plain integer rather than a Rust enum: the driver is free to
/// return codes newer than this header revision.
pub type nvmlReturn_t = c_uint;

pub const NVML_SUCCESS: nvmlReturn_t = 0;
pub const NVML_ERROR_UNINITIALIZED: nvmlReturn_t = 1;
pub const NVML_ERROR_INVALID_ARGUMENT: nvmlReturn_t = 2;
pub const NVML_ERROR_NOT_SUPPORTED: nvmlReturn_t = 3;
pub const NVML_ERROR_NO_PERMISSION: nvmlReturn_t = 4;
pub const NVML_ERROR_ALREADY_INITIALIZED: nvmlReturn_t = 5;
pub const NVML_ERROR_NOT_FOUND: nvmlReturn_t = 6;
pub const NVML_ERROR_INSUFFICIENT_SIZE: nvmlReturn_t = 7;
pub const NVML_ERROR_INSUFFICIENT_POWER: nvmlReturn_t = 8;
pub const NVML_ERROR_DRIVER_NOT_LOADED: nvmlReturn_t = 9;
pub const NVML_ERROR_TIMEOUT: nvmlReturn_t = 10;
pub const NVML_ERROR_IRQ_ISSUE: nvmlReturn_t = 11;
pub const NVML_ERROR_LIBRARY_NOT_FOUND: nvmlReturn_t = 12;
pub const NVML_ERROR_FUNCTION_NOT_FOUND: nvmlReturn_t = 13;
pub const NVML_ERROR_CORRUPTED_INFOROM: nvmlReturn_t = 14;
pub const NVML_ERROR_GPU_IS_LOST: nvmlReturn_t = 15;
pub const NVML_ERROR_RESET_REQUIRED: nvmlReturn_t = 16;
pub const NVML_ERROR_OPERATING_SYSTEM: nvmlReturn_t = 17;
pub const NVML_ERROR_LIB_RM_VERSION_MISMATCH: nvmlReturn_t = 18;
pub const NVML_ERROR_IN_USE: nvmlReturn_t = 19;
pub const NVML_ERROR_MEMORY: nvmlReturn_t = 20;
pub const NVML_ERROR_NO_DATA: nvmlReturn_t = 21;
pub const NVML_ERROR_VGPU_ECC_NOT_SUPPORTED: nvmlReturn_t = 22;
pub const NVML_ERROR_INSUFFICIENT_RESOURCES: nvmlReturn_t = 23;
pub const NVML_ERROR_FREQ_NOT_SUPPORTED: nvmlReturn_t = 24;
pub const NVML_ERROR_ARGUMENT_VERSION_MISMATCH: nvmlReturn_t = 25;
pub const NVML_ERROR_DEPRECATED: nvmlReturn_t = 26;
pub const NVML_ERROR_NOT_READY: nvmlReturn_t = 27;
pub const NVML_ERROR_GPU_NOT_FOUND: nvmlReturn_t = 28;
pub const NVML_ERROR_INVALID_STATE: nvmlReturn_t = 29;
pub const NVML_ERROR_UNKNOWN: nvmlReturn_t = 999;

// ---------------------------------------------------------------------------
// Opaque handles
// ---------------------------------------------------------------------------
//
// The referents are owned entirely by the driver. The binding never
// dereferences these pointers, it only passes them back to later calls.

#[repr(C)]
pub struct nvmlDevice_st {
    _unused: [u8; 0],
}
pub type nvmlDevice_t = *mut nvmlDevice_st;

#[repr(C)]
pub struct nvmlUnit_st {
    _unused: [u8; 0],
}
pub type nvmlUnit_t = *mut nvmlUnit_st;

#[repr(C)]
pub struct nvmlEventSet_st {
    _unused: [u8; 0],
}
pub type nvmlEventSet_t = *mut nvmlEventSet_st;

#[repr(C)]
pub struct nvmlGpuInstance_st {
    _unused: [u8; 0],
}
pub type nvmlGpuInstance_t = *mut nvmlGpuInstance_st;

#[repr(C)]
pub struct nvmlComputeInstance_st {
    _unused: [u8; 0],
}
pub type nvmlComputeInstance_t = *mut nvmlComputeInstance_st;

// ---------------------------------------------------------------------------
// Generic enable/disable and system buffer sizes
// ---------------------------------------------------------------------------

pub type nvmlEnableState_t = c_uint;
pub const NVML_FEATURE_DISABLED: nvmlEnableState_t = 0;
pub const NVML_FEATURE_ENABLED: nvmlEnableState_t = 1;

/// Flags for `nvmlInitWithFlags`.
pub const NVML_INIT_FLAG_NO_GPUS: c_uint = 1;
pub const NVML_INIT_FLAG_NO_ATTACH: c_uint = 2;

pub const NVML_SYSTEM_DRIVER_VERSION_BUFFER_SIZE: usize = 80;
pub const NVML_SYSTEM_NVML_VERSION_BUFFER_SIZE: usize = 80;

// ---------------------------------------------------------------------------
// Polymorphic values and samples
// ---------------------------------------------------------------------------

/// Value type discriminator for [`nvmlValue_t`].
pub type nvmlValueType_t = c_uint;
pub const NVML_VALUE_TYPE_DOUBLE: nvmlValueType_t = 0;
pub const NVML_VALUE_TYPE_UNSIGNED_INT: nvmlValueType_t = 1;
pub const NVML_VALUE_TYPE_UNSIGNED_LONG: nvmlValueType_t = 2;
pub const NVML_VALUE_TYPE_UNSIGNED_LONG_LONG: nvmlValueType_t = 3;
pub const NVML_VALUE_TYPE_SIGNED_LONG_LONG: nvmlValueType_t = 4;
pub const NVML_VALUE_TYPE_SIGNED_INT: nvmlValueType_t = 5;
pub const NVML_VALUE_TYPE_UNSIGNED_SHORT: nvmlValueType_t = 6;

/// Union of numeric value representations, discriminated externally by a
/// [`nvmlValueType_t`] field on the carrying struct.
#[repr(C)]
#[derive(Copy, Clone)]
pub union nvmlValue_t {
    pub dVal: f64,
    pub siVal: c_int,
    pub uiVal: c_uint,
    pub ulVal: c_ulong,
    pub ullVal: c_ulonglong,
    pub sllVal: c_longlong,
}

/// Sampling targets accepted by `nvmlDeviceGetSamples`.
pub type nvmlSamplingType_t = c_uint;
pub const NVML_TOTAL_POWER_SAMPLES: nvmlSamplingType_t = 0;
pub const NVML_GPU_UTILIZATION_SAMPLES: nvmlSamplingType_t = 1;
pub const NVML_MEMORY_UTILIZATION_SAMPLES: nvmlSamplingType_t = 2;
pub const NVML_ENC_UTILIZATION_SAMPLES: nvmlSamplingType_t = 3;
pub const NVML_DEC_UTILIZATION_SAMPLES: nvmlSamplingType_t = 4;
pub const NVML_PROCESSOR_CLK_SAMPLES: nvmlSamplingType_t = 5;
pub const NVML_MEMORY_CLK_SAMPLES: nvmlSamplingType_t = 6;
pub const NVML_MODULE_POWER_SAMPLES: nvmlSamplingType_t = 7;
pub const NVML_JPG_UTILIZATION_SAMPLES: nvmlSamplingType_t = 8;
pub const NVML_OFA_UTILIZATION_SAMPLES: nvmlSamplingType_t = 9;

/// One sample from the driver's internal ring buffer. CPU timestamp in
/// microseconds.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlSample_t {
    pub timeStamp: c_ulonglong,
    pub sampleValue: nvmlValue_t,
}

/// Violation status reference/duration pair, both in nanoseconds.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlViolationTime_t {
    pub referenceTime: c_ulonglong,
    pub violationTime: c_ulonglong,
}

/// Perf-policy counters queryable via `nvmlDeviceGetViolationStatus`.
pub type nvmlPerfPolicyType_t = c_uint;
pub const NVML_PERF_POLICY_POWER: nvmlPerfPolicyType_t = 0;
pub const NVML_PERF_POLICY_THERMAL: nvmlPerfPolicyType_t = 1;
pub const NVML_PERF_POLICY_SYNC_BOOST: nvmlPerfPolicyType_t = 2;
pub const NVML_PERF_POLICY_BOARD_LIMIT: nvmlPerfPolicyType_t = 3;
pub const NVML_PERF_POLICY_LOW_UTILIZATION: nvmlPerfPolicyType_t = 4;
pub const NVML_PERF_POLICY_RELIABILITY: nvmlPerfPolicyType_t = 5;
pub const NVML_PERF_POLICY_TOTAL_APP_CLOCKS: nvmlPerfPolicyType_t = 10;
pub const NVML_PERF_POLICY_TOTAL_BASE_CLOCKS: nvmlPerfPolicyType_t = 11;

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Field identifiers for `nvmlDeviceGetFieldValues`. The core ECC, NVLink
/// counter, perf-policy and energy families.
pub type nvmlFieldId_t = c_uint;

pub const NVML_FI_DEV_ECC_CURRENT: nvmlFieldId_t = 1;
pub const NVML_FI_DEV_ECC_PENDING: nvmlFieldId_t = 2;
pub const NVML_FI_DEV_ECC_SBE_VOL_TOTAL: nvmlFieldId_t = 3;
pub const NVML_FI_DEV_ECC_DBE_VOL_TOTAL: nvmlFieldId_t = 4;
pub const NVML_FI_DEV_ECC_SBE_AGG_TOTAL: nvmlFieldId_t = 5;
pub const NVML_FI_DEV_ECC_DBE_AGG_TOTAL: nvmlFieldId_t = 6;
pub const NVML_FI_DEV_RETIRED_SBE: nvmlFieldId_t = 7;
pub const NVML_FI_DEV_RETIRED_DBE: nvmlFieldId_t = 8;
pub const NVML_FI_DEV_RETIRED_PENDING: nvmlFieldId_t = 9;

pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L0: nvmlFieldId_t = 10;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L1: nvmlFieldId_t = 11;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L2: nvmlFieldId_t = 12;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L3: nvmlFieldId_t = 13;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L4: nvmlFieldId_t = 14;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_L5: nvmlFieldId_t = 15;
pub const NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_TOTAL: nvmlFieldId_t = 16;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L0: nvmlFieldId_t = 17;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L1: nvmlFieldId_t = 18;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L2: nvmlFieldId_t = 19;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L3: nvmlFieldId_t = 20;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L4: nvmlFieldId_t = 21;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_L5: nvmlFieldId_t = 22;
pub const NVML_FI_DEV_NVLINK_CRC_DATA_ERROR_COUNT_TOTAL: nvmlFieldId_t = 23;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L0: nvmlFieldId_t = 24;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L1: nvmlFieldId_t = 25;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L2: nvmlFieldId_t = 26;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L3: nvmlFieldId_t = 27;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L4: nvmlFieldId_t = 28;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_L5: nvmlFieldId_t = 29;
pub const NVML_FI_DEV_NVLINK_REPLAY_ERROR_COUNT_TOTAL: nvmlFieldId_t = 30;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L0: nvmlFieldId_t = 31;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L1: nvmlFieldId_t = 32;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L2: nvmlFieldId_t = 33;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L3: nvmlFieldId_t = 34;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L4: nvmlFieldId_t = 35;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_L5: nvmlFieldId_t = 36;
pub const NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_TOTAL: nvmlFieldId_t = 37;

pub const NVML_FI_DEV_PERF_POLICY_POWER: nvmlFieldId_t = 52;
pub const NVML_FI_DEV_PERF_POLICY_THERMAL: nvmlFieldId_t = 53;
pub const NVML_FI_DEV_PERF_POLICY_SYNC_BOOST: nvmlFieldId_t = 54;
pub const NVML_FI_DEV_PERF_POLICY_BOARD_LIMIT: nvmlFieldId_t = 55;
pub const NVML_FI_DEV_PERF_POLICY_LOW_UTILIZATION: nvmlFieldId_t = 56;
pub const NVML_FI_DEV_PERF_POLICY_RELIABILITY: nvmlFieldId_t = 57;
pub const NVML_FI_DEV_PERF_POLICY_TOTAL_APP_CLOCKS: nvmlFieldId_t = 58;
pub const NVML_FI_DEV_PERF_POLICY_TOTAL_BASE_CLOCKS: nvmlFieldId_t = 59;
pub const NVML_FI_DEV_MEMORY_TEMP: nvmlFieldId_t = 60;
pub const NVML_FI_DEV_TOTAL_ENERGY_CONSUMPTION: nvmlFieldId_t = 61;

pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L0: nvmlFieldId_t = 62;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L1: nvmlFieldId_t = 63;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L2: nvmlFieldId_t = 64;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L3: nvmlFieldId_t = 65;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L4: nvmlFieldId_t = 66;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_L5: nvmlFieldId_t = 67;
pub const NVML_FI_DEV_NVLINK_SPEED_MBPS_COMMON: nvmlFieldId_t = 68;
pub const NVML_FI_DEV_NVLINK_LINK_COUNT: nvmlFieldId_t = 69;
pub const NVML_FI_DEV_RETIRED_PENDING_SBE: nvmlFieldId_t = 70;
pub const NVML_FI_DEV_RETIRED_PENDING_DBE: nvmlFieldId_t = 71;
pub const NVML_FI_DEV_PCIE_REPLAY_COUNTER: nvmlFieldId_t = 72;
pub const NVML_FI_DEV_PCIE_REPLAY_ROLLOVER_COUNTER: nvmlFieldId_t = 73;

pub const NVML_FI_DEV_REMAPPED_COR: nvmlFieldId_t = 142;
pub const NVML_FI_DEV_REMAPPED_UNC: nvmlFieldId_t = 143;
pub const NVML_FI_DEV_REMAPPED_PENDING: nvmlFieldId_t = 144;
pub const NVML_FI_DEV_REMAPPED_FAILURE: nvmlFieldId_t = 145;
pub const NVML_FI_DEV_NVLINK_REMOTE_NVLINK_ID: nvmlFieldId_t = 146;
pub const NVML_FI_DEV_NVSWITCH_CONNECTED_LINK_COUNT: nvmlFieldId_t = 147;

/// One field-value query slot. `fieldId` and `scopeId` are inputs, the rest
/// are outputs; `nvmlReturn` carries the per-field status independently of
/// the call's overall return code.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlFieldValue_t {
    pub fieldId: c_uint,
    pub scopeId: c_uint,
    pub timestamp: c_longlong,
    pub latencyUsec: c_longlong,
    pub valueType: nvmlValueType_t,
    pub nvmlReturn: nvmlReturn_t,
    pub value: nvmlValue_t,
}

impl Default for nvmlFieldValue_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_return_code_values() {
        assert_eq!(NVML_SUCCESS, 0);
        assert_eq!(NVML_ERROR_NOT_SUPPORTED, 3);
        assert_eq!(NVML_ERROR_LIBRARY_NOT_FOUND, 12);
        assert_eq!(NVML_ERROR_FUNCTION_NOT_FOUND, 13);
        assert_eq!(NVML_ERROR_GPU_IS_LOST, 15);
        assert_eq!(NVML_ERROR_ARGUMENT_VERSION_MISMATCH, 25);
        assert_eq!(NVML_ERROR_INVALID_STATE, 29);
        assert_eq!(NVML_ERROR_UNKNOWN, 999);
    }

    #[test]
    fn test_value_union_layout() {
        // Widest member is 8 bytes; the union carries no tag of its own.
        assert_eq!(size_of::<nvmlValue_t>(), 8);
        assert_eq!(align_of::<nvmlValue_t>(), 8);
    }

    #[test]
    fn test_value_union_roundtrip() {
        let mut v = nvmlValue_t { ullVal: 0 };
        v.dVal = 0.5;
        assert_eq!(unsafe { v.dVal }, 0.5);
        v.sllVal = -7;
        assert_eq!(unsafe { v.sllVal }, -7);
    }

    #[test]
    fn test_sample_layout() {
        assert_eq!(size_of::<nvmlSample_t>(), 16);
        assert_eq!(offset_of!(nvmlSample_t, sampleValue), 8);
    }

    #[test]
    fn test_field_value_layout() {
        assert_eq!(size_of::<nvmlFieldValue_t>(), 40);
        assert_eq!(offset_of!(nvmlFieldValue_t, timestamp), 8);
        assert_eq!(offset_of!(nvmlFieldValue_t, latencyUsec), 16);
        assert_eq!(offset_of!(nvmlFieldValue_t, valueType), 24);
        assert_eq!(offset_of!(nvmlFieldValue_t, nvmlReturn), 28);
        assert_eq!(offset_of!(nvmlFieldValue_t, value), 32);
    }

    #[test]
    fn test_field_id_values() {
        assert_eq!(NVML_FI_DEV_ECC_CURRENT, 1);
        assert_eq!(NVML_FI_DEV_NVLINK_CRC_FLIT_ERROR_COUNT_TOTAL, 16);
        assert_eq!(NVML_FI_DEV_NVLINK_RECOVERY_ERROR_COUNT_TOTAL, 37);
        assert_eq!(NVML_FI_DEV_MEMORY_TEMP, 60);
        assert_eq!(NVML_FI_DEV_TOTAL_ENERGY_CONSUMPTION, 61);
        assert_eq!(NVML_FI_DEV_PCIE_REPLAY_COUNTER, 72);
        assert_eq!(NVML_FI_DEV_REMAPPED_FAILURE, 145);
    }

    #[test]
    fn test_handles_are_pointer_sized() {
        assert_eq!(size_of::<nvmlDevice_t>(), size_of::<*mut ()>());
        assert_eq!(size_of::<nvmlEventSet_t>(), size_of::<*mut ()>());
        assert_eq!(size_of::<nvmlGpuInstance_t>(), size_of::<*mut ()>());
    }
}
