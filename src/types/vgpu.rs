//! vGPU types
//!
//! Host-side virtualization surface: vGPU type/instance queries, guest
//! metadata exchange, licensing and the vGPU scheduler. Type IDs and
//! instance IDs are plain integers, not pointers; their lifetime is bound
//! to the host driver's vGPU bookkeeping.

use std::os::raw::{c_char, c_uint, c_ulonglong, c_ushort};

use super::core::nvmlValue_t;
use crate::nvml_struct_version;

/// Identifier of a vGPU type (e.g. GRID M60-2Q).
pub type nvmlVgpuTypeId_t = c_uint;
/// Identifier of an active vGPU instance.
pub type nvmlVgpuInstance_t = c_uint;

pub const NVML_VGPU_NAME_BUFFER_SIZE: usize = 64;
pub const NVML_GRID_LICENSE_BUFFER_SIZE: usize = 128;
pub const NVML_GRID_LICENSE_FEATURE_MAX_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Modes and capabilities
// ---------------------------------------------------------------------------

pub type nvmlGpuVirtualizationMode_t = c_uint;
pub const NVML_GPU_VIRTUALIZATION_MODE_NONE: nvmlGpuVirtualizationMode_t = 0;
pub const NVML_GPU_VIRTUALIZATION_MODE_PASSTHROUGH: nvmlGpuVirtualizationMode_t = 1;
pub const NVML_GPU_VIRTUALIZATION_MODE_VGPU: nvmlGpuVirtualizationMode_t = 2;
pub const NVML_GPU_VIRTUALIZATION_MODE_HOST_VGPU: nvmlGpuVirtualizationMode_t = 3;
pub const NVML_GPU_VIRTUALIZATION_MODE_HOST_VSGA: nvmlGpuVirtualizationMode_t = 4;

pub type nvmlHostVgpuMode_t = c_uint;
pub const NVML_HOST_VGPU_MODE_NON_SRIOV: nvmlHostVgpuMode_t = 0;
pub const NVML_HOST_VGPU_MODE_SRIOV: nvmlHostVgpuMode_t = 1;

pub type nvmlVgpuVmIdType_t = c_uint;
pub const NVML_VGPU_VM_ID_DOMAIN_ID: nvmlVgpuVmIdType_t = 0;
pub const NVML_VGPU_VM_ID_UUID: nvmlVgpuVmIdType_t = 1;

pub type nvmlVgpuGuestInfoState_t = c_uint;
pub const NVML_VGPU_INSTANCE_GUEST_INFO_STATE_UNINITIALIZED: nvmlVgpuGuestInfoState_t = 0;
pub const NVML_VGPU_INSTANCE_GUEST_INFO_STATE_INITIALIZED: nvmlVgpuGuestInfoState_t = 1;

pub type nvmlVgpuCapability_t = c_uint;
pub const NVML_VGPU_CAP_NVLINK_P2P: nvmlVgpuCapability_t = 0;
pub const NVML_VGPU_CAP_GPUDIRECT: nvmlVgpuCapability_t = 1;
pub const NVML_VGPU_CAP_MULTI_VGPU_EXCLUSIVE: nvmlVgpuCapability_t = 2;
pub const NVML_VGPU_CAP_EXCLUSIVE_TYPE: nvmlVgpuCapability_t = 3;
pub const NVML_VGPU_CAP_EXCLUSIVE_SIZE: nvmlVgpuCapability_t = 4;
pub const NVML_VGPU_CAP_COUNT: nvmlVgpuCapability_t = 5;

pub type nvmlVgpuDriverCapability_t = c_uint;
pub const NVML_VGPU_DRIVER_CAP_HETEROGENEOUS_MULTI_VGPU: nvmlVgpuDriverCapability_t = 0;
pub const NVML_VGPU_DRIVER_CAP_WARM_UPDATE: nvmlVgpuDriverCapability_t = 1;
pub const NVML_VGPU_DRIVER_CAP_COUNT: nvmlVgpuDriverCapability_t = 2;

pub type nvmlDeviceVgpuCapability_t = c_uint;
pub const NVML_DEVICE_VGPU_CAP_FRACTIONAL_MULTI_VGPU: nvmlDeviceVgpuCapability_t = 0;
pub const NVML_DEVICE_VGPU_CAP_HETEROGENEOUS_TIMESLICE_PROFILES: nvmlDeviceVgpuCapability_t = 1;
pub const NVML_DEVICE_VGPU_CAP_HETEROGENEOUS_TIMESLICE_SIZES: nvmlDeviceVgpuCapability_t = 2;
pub const NVML_DEVICE_VGPU_CAP_READ_DEVICE_BUFFER_BW: nvmlDeviceVgpuCapability_t = 3;
pub const NVML_DEVICE_VGPU_CAP_WRITE_DEVICE_BUFFER_BW: nvmlDeviceVgpuCapability_t = 4;
pub const NVML_DEVICE_VGPU_CAP_DEVICE_STREAMING: nvmlDeviceVgpuCapability_t = 5;
pub const NVML_DEVICE_VGPU_CAP_MINI_QUARTER_GPU: nvmlDeviceVgpuCapability_t = 6;
pub const NVML_DEVICE_VGPU_CAP_COMPUTE_MEDIA_ENGINE_GPU: nvmlDeviceVgpuCapability_t = 7;
pub const NVML_DEVICE_VGPU_CAP_WARM_UPDATE: nvmlDeviceVgpuCapability_t = 8;
pub const NVML_DEVICE_VGPU_CAP_COUNT: nvmlDeviceVgpuCapability_t = 9;

// ---------------------------------------------------------------------------
// Utilization samples
// ---------------------------------------------------------------------------

/// Per-instance utilization over one sampling period. The value type of the
/// four counters is reported out-of-band by the corresponding query call.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuInstanceUtilizationSample_t {
    pub vgpuInstance: nvmlVgpuInstance_t,
    pub timeStamp: c_ulonglong,
    pub smUtil: nvmlValue_t,
    pub memUtil: nvmlValue_t,
    pub encUtil: nvmlValue_t,
    pub decUtil: nvmlValue_t,
}

/// Per-process utilization inside a vGPU instance, percentages.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuProcessUtilizationSample_t {
    pub vgpuInstance: nvmlVgpuInstance_t,
    pub pid: c_uint,
    pub processName: [c_char; NVML_VGPU_NAME_BUFFER_SIZE],
    pub timeStamp: c_ulonglong,
    pub smUtil: c_uint,
    pub memUtil: c_uint,
    pub encUtil: c_uint,
    pub decUtil: c_uint,
}

impl Default for nvmlVgpuProcessUtilizationSample_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

// ---------------------------------------------------------------------------
// Licensing
// ---------------------------------------------------------------------------

pub type nvmlGridLicenseFeatureCode_t = c_uint;
pub const NVML_GRID_LICENSE_FEATURE_CODE_UNKNOWN: nvmlGridLicenseFeatureCode_t = 0;
pub const NVML_GRID_LICENSE_FEATURE_CODE_VGPU: nvmlGridLicenseFeatureCode_t = 1;
pub const NVML_GRID_LICENSE_FEATURE_CODE_NVIDIA_RTX: nvmlGridLicenseFeatureCode_t = 2;
pub const NVML_GRID_LICENSE_FEATURE_CODE_VWORKSTATION: nvmlGridLicenseFeatureCode_t =
    NVML_GRID_LICENSE_FEATURE_CODE_NVIDIA_RTX;
pub const NVML_GRID_LICENSE_FEATURE_CODE_GAMING: nvmlGridLicenseFeatureCode_t = 3;
pub const NVML_GRID_LICENSE_FEATURE_CODE_COMPUTE: nvmlGridLicenseFeatureCode_t = 4;

pub const NVML_GRID_LICENSE_STATE_UNKNOWN: c_uint = 0;
pub const NVML_GRID_LICENSE_STATE_UNINITIALIZED: c_uint = 1;
pub const NVML_GRID_LICENSE_STATE_UNLICENSED_UNRESTRICTED: c_uint = 2;
pub const NVML_GRID_LICENSE_STATE_UNLICENSED_RESTRICTED: c_uint = 3;
pub const NVML_GRID_LICENSE_STATE_UNLICENSED: c_uint = 4;
pub const NVML_GRID_LICENSE_STATE_LICENSED: c_uint = 5;

pub const NVML_GRID_LICENSE_EXPIRY_NOT_AVAILABLE: c_uint = 0;
pub const NVML_GRID_LICENSE_EXPIRY_INVALID: c_uint = 1;
pub const NVML_GRID_LICENSE_EXPIRY_VALID: c_uint = 2;
pub const NVML_GRID_LICENSE_EXPIRY_NOT_APPLICABLE: c_uint = 3;
pub const NVML_GRID_LICENSE_EXPIRY_PERMANENT: c_uint = 4;

/// License expiry timestamp, field-wise; `status` is one of the
/// `NVML_GRID_LICENSE_EXPIRY_*` values.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlVgpuLicenseExpiry_t {
    pub year: c_uint,
    pub month: c_ushort,
    pub day: c_ushort,
    pub hour: c_ushort,
    pub min: c_ushort,
    pub sec: c_ushort,
    pub status: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlVgpuLicenseInfo_t {
    pub isLicensed: u8,
    pub licenseExpiry: nvmlVgpuLicenseExpiry_t,
    pub currentState: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGridLicensableFeature_t {
    pub featureCode: nvmlGridLicenseFeatureCode_t,
    pub featureState: c_uint,
    pub licenseInfo: [c_char; NVML_GRID_LICENSE_BUFFER_SIZE],
    pub productName: [c_char; NVML_GRID_LICENSE_BUFFER_SIZE],
    pub featureEnabled: c_uint,
}

impl Default for nvmlGridLicensableFeature_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGridLicensableFeatures_t {
    pub isGridLicenseSupported: std::os::raw::c_int,
    pub licensableFeaturesCount: c_uint,
    pub gridLicensableFeatures: [nvmlGridLicensableFeature_t; NVML_GRID_LICENSE_FEATURE_MAX_COUNT],
}

impl Default for nvmlGridLicensableFeatures_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

// ---------------------------------------------------------------------------
// Guest/host metadata exchange
// ---------------------------------------------------------------------------

/// Guest-reported vGPU metadata blob. `opaqueData` is a flexible tail; the
/// caller sizes the allocation and the driver reports the true length in
/// `opaqueDataSize`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuMetadata_t {
    pub version: c_uint,
    pub revision: c_uint,
    pub guestInfoState: nvmlVgpuGuestInfoState_t,
    pub guestDriverVersion: [c_char; 80],
    pub hostDriverVersion: [c_char; 80],
    pub reserved: [c_uint; 6],
    pub vgpuVirtualizationCaps: c_uint,
    pub guestVgpuVersion: c_uint,
    pub opaqueDataSize: c_uint,
    pub opaqueData: [c_char; 4],
}

impl Default for nvmlVgpuMetadata_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Host-side physical GPU metadata blob, same flexible-tail convention.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuPgpuMetadata_t {
    pub version: c_uint,
    pub revision: c_uint,
    pub hostDriverVersion: [c_char; 80],
    pub pgpuVirtualizationCaps: c_uint,
    pub reserved: [c_uint; 5],
    pub hostSupportedVgpuRange: nvmlVgpuVersion_t,
    pub opaqueData: [c_char; 4],
}

impl Default for nvmlVgpuPgpuMetadata_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Range of vGPU versions a component supports.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlVgpuVersion_t {
    pub minVersion: c_uint,
    pub maxVersion: c_uint,
}

pub type nvmlVgpuVmCompatibility_t = c_uint;
pub const NVML_VGPU_VM_COMPATIBILITY_NONE: nvmlVgpuVmCompatibility_t = 0x0;
pub const NVML_VGPU_VM_COMPATIBILITY_COLD: nvmlVgpuVmCompatibility_t = 0x1;
pub const NVML_VGPU_VM_COMPATIBILITY_HIBERNATE: nvmlVgpuVmCompatibility_t = 0x2;
pub const NVML_VGPU_VM_COMPATIBILITY_SLEEP: nvmlVgpuVmCompatibility_t = 0x4;
pub const NVML_VGPU_VM_COMPATIBILITY_LIVE: nvmlVgpuVmCompatibility_t = 0x8;

pub type nvmlVgpuPgpuCompatibilityLimitCode_t = c_uint;
pub const NVML_VGPU_COMPATIBILITY_LIMIT_NONE: nvmlVgpuPgpuCompatibilityLimitCode_t = 0x0;
pub const NVML_VGPU_COMPATIBILITY_LIMIT_HOST_DRIVER: nvmlVgpuPgpuCompatibilityLimitCode_t = 0x1;
pub const NVML_VGPU_COMPATIBILITY_LIMIT_GUEST_DRIVER: nvmlVgpuPgpuCompatibilityLimitCode_t = 0x2;
pub const NVML_VGPU_COMPATIBILITY_LIMIT_GPU: nvmlVgpuPgpuCompatibilityLimitCode_t = 0x4;
pub const NVML_VGPU_COMPATIBILITY_LIMIT_OTHER: nvmlVgpuPgpuCompatibilityLimitCode_t = 0x80000000;

/// Result of a guest/host compatibility check.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlVgpuPgpuCompatibility_t {
    pub vgpuVmCompatibility: nvmlVgpuVmCompatibility_t,
    pub compatibilityLimitCode: nvmlVgpuPgpuCompatibilityLimitCode_t,
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

pub const NVML_VGPU_SCHEDULER_POLICY_UNKNOWN: c_uint = 0;
pub const NVML_VGPU_SCHEDULER_POLICY_BEST_EFFORT: c_uint = 1;
pub const NVML_VGPU_SCHEDULER_POLICY_EQUAL_SHARE: c_uint = 2;
pub const NVML_VGPU_SCHEDULER_POLICY_FIXED_SHARE: c_uint = 3;
pub const NVML_SUPPORTED_VGPU_SCHEDULER_POLICY_COUNT: c_uint = 3;

pub const NVML_VGPU_SCHEDULER_ARR_DEFAULT: c_uint = 0;
pub const NVML_VGPU_SCHEDULER_ARR_DISABLE: c_uint = 1;
pub const NVML_VGPU_SCHEDULER_ARR_ENABLE: c_uint = 2;

pub const NVML_SCHEDULER_SW_MAX_LOG_ENTRIES: usize = 200;

/// Scheduler parameters; which arm is valid depends on the ARR mode.
#[repr(C)]
#[derive(Copy, Clone)]
pub union nvmlVgpuSchedulerParams_t {
    pub vgpuSchedDataWithARR: nvmlVgpuSchedulerParamsWithArr_t,
    pub vgpuSchedData: nvmlVgpuSchedulerParamsTimeslice_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuSchedulerParamsWithArr_t {
    pub avgFactor: c_uint,
    pub timeslice: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuSchedulerParamsTimeslice_t {
    pub timeslice: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuSchedulerLogEntry_t {
    pub timestamp: c_ulonglong,
    pub timeRunTotal: c_ulonglong,
    pub timeRun: c_ulonglong,
    pub swRunlistId: c_uint,
    pub targetTimeSlice: c_ulonglong,
    pub cumulativePreemptionTime: c_ulonglong,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuSchedulerLog_t {
    pub engineId: c_uint,
    pub schedulerPolicy: c_uint,
    pub arrMode: c_uint,
    pub schedulerParams: nvmlVgpuSchedulerParams_t,
    pub entriesCount: c_uint,
    pub logEntries: [nvmlVgpuSchedulerLogEntry_t; NVML_SCHEDULER_SW_MAX_LOG_ENTRIES],
}

impl Default for nvmlVgpuSchedulerLog_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuSchedulerGetState_t {
    pub schedulerPolicy: c_uint,
    pub arrMode: c_uint,
    pub schedulerParams: nvmlVgpuSchedulerParams_t,
}

/// Set-state parameters; `frequency` replaces `timeslice` when ARR is on.
#[repr(C)]
#[derive(Copy, Clone)]
pub union nvmlVgpuSchedulerSetParams_t {
    pub vgpuSchedDataWithARR: nvmlVgpuSchedulerSetParamsWithArr_t,
    pub vgpuSchedData: nvmlVgpuSchedulerParamsTimeslice_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuSchedulerSetParamsWithArr_t {
    pub avgFactor: c_uint,
    pub frequency: c_uint,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlVgpuSchedulerSetState_t {
    pub schedulerPolicy: c_uint,
    pub enableARRMode: c_uint,
    pub schedulerParams: nvmlVgpuSchedulerSetParams_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlVgpuSchedulerCapabilities_t {
    pub supportedSchedulers: [c_uint; NVML_SUPPORTED_VGPU_SCHEDULER_POLICY_COUNT as usize],
    pub maxTimeslice: c_uint,
    pub minTimeslice: c_uint,
    pub isArrModeSupported: c_uint,
    pub maxFrequencyForARR: c_uint,
    pub minFrequencyForARR: c_uint,
    pub maxAvgFactorForARR: c_uint,
    pub minAvgFactorForARR: c_uint,
}

// ---------------------------------------------------------------------------
// Heterogeneous placement
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuHeterogeneousMode_v1_t {
    pub version: c_uint,
    pub mode: c_uint,
}
pub type nvmlVgpuHeterogeneousMode_t = nvmlVgpuHeterogeneousMode_v1_t;

pub const nvmlVgpuHeterogeneousMode_v1: c_uint =
    nvml_struct_version!(nvmlVgpuHeterogeneousMode_v1_t, 1);

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlVgpuPlacementId_v1_t {
    pub version: c_uint,
    pub placementId: c_uint,
}
pub type nvmlVgpuPlacementId_t = nvmlVgpuPlacementId_v1_t;

pub const nvmlVgpuPlacementId_v1: c_uint = nvml_struct_version!(nvmlVgpuPlacementId_v1_t, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_utilization_sample_layouts() {
        assert_eq!(size_of::<nvmlVgpuInstanceUtilizationSample_t>(), 48);
        assert_eq!(offset_of!(nvmlVgpuInstanceUtilizationSample_t, timeStamp), 8);
        assert_eq!(offset_of!(nvmlVgpuInstanceUtilizationSample_t, smUtil), 16);

        assert_eq!(size_of::<nvmlVgpuProcessUtilizationSample_t>(), 96);
        assert_eq!(offset_of!(nvmlVgpuProcessUtilizationSample_t, processName), 8);
        assert_eq!(offset_of!(nvmlVgpuProcessUtilizationSample_t, timeStamp), 72);
        assert_eq!(offset_of!(nvmlVgpuProcessUtilizationSample_t, decUtil), 92);
    }

    #[test]
    fn test_license_layouts() {
        assert_eq!(size_of::<nvmlVgpuLicenseExpiry_t>(), 16);
        assert_eq!(offset_of!(nvmlVgpuLicenseExpiry_t, status), 14);

        assert_eq!(size_of::<nvmlVgpuLicenseInfo_t>(), 24);
        assert_eq!(offset_of!(nvmlVgpuLicenseInfo_t, licenseExpiry), 4);
        assert_eq!(offset_of!(nvmlVgpuLicenseInfo_t, currentState), 20);

        assert_eq!(size_of::<nvmlGridLicensableFeature_t>(), 268);
        assert_eq!(size_of::<nvmlGridLicensableFeatures_t>(), 812);
    }

    #[test]
    fn test_metadata_layouts() {
        assert_eq!(size_of::<nvmlVgpuMetadata_t>(), 212);
        assert_eq!(offset_of!(nvmlVgpuMetadata_t, guestDriverVersion), 12);
        assert_eq!(offset_of!(nvmlVgpuMetadata_t, opaqueDataSize), 204);

        assert_eq!(size_of::<nvmlVgpuPgpuMetadata_t>(), 124);
        assert_eq!(offset_of!(nvmlVgpuPgpuMetadata_t, hostSupportedVgpuRange), 112);
    }

    #[test]
    fn test_scheduler_layouts() {
        assert_eq!(size_of::<nvmlVgpuSchedulerParams_t>(), 8);
        assert_eq!(size_of::<nvmlVgpuSchedulerLogEntry_t>(), 48);
        assert_eq!(size_of::<nvmlVgpuSchedulerGetState_t>(), 16);
        assert_eq!(size_of::<nvmlVgpuSchedulerSetState_t>(), 16);
        assert_eq!(size_of::<nvmlVgpuSchedulerCapabilities_t>(), 40);

        assert_eq!(offset_of!(nvmlVgpuSchedulerLog_t, schedulerParams), 12);
        assert_eq!(offset_of!(nvmlVgpuSchedulerLog_t, entriesCount), 20);
        assert_eq!(offset_of!(nvmlVgpuSchedulerLog_t, logEntries), 24);
        assert_eq!(
            size_of::<nvmlVgpuSchedulerLog_t>(),
            24 + 200 * size_of::<nvmlVgpuSchedulerLogEntry_t>()
        );
    }

    #[test]
    fn test_compatibility_values() {
        assert_eq!(NVML_VGPU_VM_COMPATIBILITY_LIVE, 0x8);
        assert_eq!(NVML_VGPU_COMPATIBILITY_LIMIT_OTHER, 0x80000000);
        assert_eq!(size_of::<nvmlVgpuPgpuCompatibility_t>(), 8);
    }

    #[test]
    fn test_heterogeneous_mode_versions() {
        assert_eq!(nvmlVgpuHeterogeneousMode_v1, 8 | (1 << 24));
        assert_eq!(nvmlVgpuPlacementId_v1, 8 | (1 << 24));
    }
}
