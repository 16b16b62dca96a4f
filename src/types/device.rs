//! Device query and command types
//!
//! The device section is by far the largest part of the surface: PCI and
//! memory layouts, processes, ECC, clocks, thermal, power, PCIe, NVLink,
//! encoder sessions, accounting, retired pages and fabric state.

use std::os::raw::{c_char, c_int, c_longlong, c_uchar, c_uint, c_ulonglong};

use super::core::nvmlReturn_t;
use super::vgpu::nvmlVgpuInstance_t;
use crate::nvml_struct_version;

// ---------------------------------------------------------------------------
// String buffer sizes
// ---------------------------------------------------------------------------

pub const NVML_DEVICE_INFOROM_VERSION_BUFFER_SIZE: usize = 16;
pub const NVML_DEVICE_NAME_BUFFER_SIZE: usize = 64;
pub const NVML_DEVICE_NAME_V2_BUFFER_SIZE: usize = 96;
pub const NVML_DEVICE_SERIAL_BUFFER_SIZE: usize = 30;
pub const NVML_DEVICE_UUID_BUFFER_SIZE: usize = 80;
pub const NVML_DEVICE_UUID_V2_BUFFER_SIZE: usize = 96;
pub const NVML_DEVICE_PART_NUMBER_BUFFER_SIZE: usize = 80;
pub const NVML_DEVICE_VBIOS_VERSION_BUFFER_SIZE: usize = 32;
pub const NVML_DEVICE_PCI_BUS_ID_BUFFER_SIZE: usize = 32;
pub const NVML_DEVICE_PCI_BUS_ID_BUFFER_V2_SIZE: usize = 16;
pub const NVML_GSP_FIRMWARE_VERSION_BUF_SIZE: usize = 0x40;

/// Sentinel for process memory usage the driver cannot report (WDDM, MIG).
pub const NVML_VALUE_NOT_AVAILABLE: c_longlong = -1;

// ---------------------------------------------------------------------------
// PCI
// ---------------------------------------------------------------------------

/// PCI bus description. `busIdLegacy` keeps the pre-v3 truncated format for
/// binary compatibility; `busId` is the extended form.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPciInfo_t {
    pub busIdLegacy: [c_char; NVML_DEVICE_PCI_BUS_ID_BUFFER_V2_SIZE],
    pub domain: c_uint,
    pub bus: c_uint,
    pub device: c_uint,
    pub pciDeviceId: c_uint,
    pub pciSubSystemId: c_uint,
    pub busId: [c_char; NVML_DEVICE_PCI_BUS_ID_BUFFER_SIZE],
}

impl Default for nvmlPciInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Extended PCI info with device class bytes, versioned.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPciInfoExt_v1_t {
    pub version: c_uint,
    pub domain: c_uint,
    pub bus: c_uint,
    pub device: c_uint,
    pub pciDeviceId: c_uint,
    pub pciSubSystemId: c_uint,
    pub baseClass: c_uint,
    pub subClass: c_uint,
    pub busId: [c_char; NVML_DEVICE_PCI_BUS_ID_BUFFER_SIZE],
}
pub type nvmlPciInfoExt_t = nvmlPciInfoExt_v1_t;

pub const nvmlPciInfoExt_v1: c_uint = nvml_struct_version!(nvmlPciInfoExt_v1_t, 1);

impl Default for nvmlPciInfoExt_v1_t {
    fn default() -> Self {
        let mut info: Self = unsafe { std::mem::zeroed() };
        info.version = nvmlPciInfoExt_v1;
        info
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Legacy framebuffer memory totals, in bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlMemory_t {
    pub total: c_ulonglong,
    pub free: c_ulonglong,
    pub used: c_ulonglong,
}

/// Versioned framebuffer memory totals; `reserved` carves out the
/// driver/firmware allocations that v1 folded into `used`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlMemory_v2_t {
    pub version: c_uint,
    pub total: c_ulonglong,
    pub reserved: c_ulonglong,
    pub free: c_ulonglong,
    pub used: c_ulonglong,
}

pub const nvmlMemory_v2: c_uint = nvml_struct_version!(nvmlMemory_v2_t, 2);

impl Default for nvmlMemory_v2_t {
    fn default() -> Self {
        let mut mem: Self = unsafe { std::mem::zeroed() };
        mem.version = nvmlMemory_v2;
        mem
    }
}

/// BAR1 aperture totals, in bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlBAR1Memory_t {
    pub bar1Total: c_ulonglong,
    pub bar1Free: c_ulonglong,
    pub bar1Used: c_ulonglong,
}

// ---------------------------------------------------------------------------
// Utilization and processes
// ---------------------------------------------------------------------------

/// Percent-of-time utilization over the last sample period.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlUtilization_t {
    pub gpu: c_uint,
    pub memory: c_uint,
}

/// Process info as laid out before MIG existed.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlProcessInfo_v1_t {
    pub pid: c_uint,
    pub usedGpuMemory: c_ulonglong,
}

/// Process info including the MIG instance the process runs on. Current
/// layout for the `_v3` running-process queries.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlProcessInfo_v2_t {
    pub pid: c_uint,
    pub usedGpuMemory: c_ulonglong,
    pub gpuInstanceId: c_uint,
    pub computeInstanceId: c_uint,
}
pub type nvmlProcessInfo_t = nvmlProcessInfo_v2_t;

/// Per-process utilization sample for `nvmlDeviceGetProcessUtilization`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlProcessUtilizationSample_t {
    pub pid: c_uint,
    pub timeStamp: c_ulonglong,
    pub smUtil: c_uint,
    pub memUtil: c_uint,
    pub encUtil: c_uint,
    pub decUtil: c_uint,
}

/// Static attributes of a device or MIG device handle.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlDeviceAttributes_t {
    pub multiprocessorCount: c_uint,
    pub sharedCopyEngineCount: c_uint,
    pub sharedDecoderCount: c_uint,
    pub sharedEncoderCount: c_uint,
    pub sharedJpegCount: c_uint,
    pub sharedOfaCount: c_uint,
    pub gpuInstanceSliceCount: c_uint,
    pub computeInstanceSliceCount: c_uint,
    pub memorySizeMB: c_ulonglong,
}

// ---------------------------------------------------------------------------
// Device classification
// ---------------------------------------------------------------------------

pub type nvmlBrandType_t = c_uint;
pub const NVML_BRAND_UNKNOWN: nvmlBrandType_t = 0;
pub const NVML_BRAND_QUADRO: nvmlBrandType_t = 1;
pub const NVML_BRAND_TESLA: nvmlBrandType_t = 2;
pub const NVML_BRAND_NVS: nvmlBrandType_t = 3;
pub const NVML_BRAND_GRID: nvmlBrandType_t = 4;
pub const NVML_BRAND_GEFORCE: nvmlBrandType_t = 5;
pub const NVML_BRAND_TITAN: nvmlBrandType_t = 6;
pub const NVML_BRAND_NVIDIA_VAPPS: nvmlBrandType_t = 7;
pub const NVML_BRAND_NVIDIA_VPC: nvmlBrandType_t = 8;
pub const NVML_BRAND_NVIDIA_VCS: nvmlBrandType_t = 9;
pub const NVML_BRAND_NVIDIA_VWS: nvmlBrandType_t = 10;
pub const NVML_BRAND_NVIDIA_CLOUD_GAMING: nvmlBrandType_t = 11;
pub const NVML_BRAND_NVIDIA_VGAMING: nvmlBrandType_t = NVML_BRAND_NVIDIA_CLOUD_GAMING;
pub const NVML_BRAND_QUADRO_RTX: nvmlBrandType_t = 12;
pub const NVML_BRAND_NVIDIA_RTX: nvmlBrandType_t = 13;
pub const NVML_BRAND_NVIDIA: nvmlBrandType_t = 14;
pub const NVML_BRAND_GEFORCE_RTX: nvmlBrandType_t = 15;
pub const NVML_BRAND_TITAN_RTX: nvmlBrandType_t = 16;
pub const NVML_BRAND_COUNT: nvmlBrandType_t = 17;

pub type nvmlDeviceArchitecture_t = c_uint;
pub const NVML_DEVICE_ARCH_KEPLER: nvmlDeviceArchitecture_t = 2;
pub const NVML_DEVICE_ARCH_MAXWELL: nvmlDeviceArchitecture_t = 3;
pub const NVML_DEVICE_ARCH_PASCAL: nvmlDeviceArchitecture_t = 4;
pub const NVML_DEVICE_ARCH_VOLTA: nvmlDeviceArchitecture_t = 5;
pub const NVML_DEVICE_ARCH_TURING: nvmlDeviceArchitecture_t = 6;
pub const NVML_DEVICE_ARCH_AMPERE: nvmlDeviceArchitecture_t = 7;
pub const NVML_DEVICE_ARCH_ADA: nvmlDeviceArchitecture_t = 8;
pub const NVML_DEVICE_ARCH_HOPPER: nvmlDeviceArchitecture_t = 9;
pub const NVML_DEVICE_ARCH_BLACKWELL: nvmlDeviceArchitecture_t = 10;
pub const NVML_DEVICE_ARCH_UNKNOWN: nvmlDeviceArchitecture_t = 0xffffffff;

pub type nvmlBusType_t = c_uint;
pub const NVML_BUS_TYPE_UNKNOWN: nvmlBusType_t = 0;
pub const NVML_BUS_TYPE_PCI: nvmlBusType_t = 1;
pub const NVML_BUS_TYPE_PCIE: nvmlBusType_t = 2;
pub const NVML_BUS_TYPE_FPCI: nvmlBusType_t = 3;
pub const NVML_BUS_TYPE_AGP: nvmlBusType_t = 4;

pub type nvmlPowerSource_t = c_uint;
pub const NVML_POWER_SOURCE_AC: nvmlPowerSource_t = 0x00000000;
pub const NVML_POWER_SOURCE_BATTERY: nvmlPowerSource_t = 0x00000001;
pub const NVML_POWER_SOURCE_UNDERSIZED: nvmlPowerSource_t = 0x00000002;

// ---------------------------------------------------------------------------
// Compute / operation modes
// ---------------------------------------------------------------------------

pub type nvmlComputeMode_t = c_uint;
pub const NVML_COMPUTEMODE_DEFAULT: nvmlComputeMode_t = 0;
pub const NVML_COMPUTEMODE_EXCLUSIVE_THREAD: nvmlComputeMode_t = 1;
pub const NVML_COMPUTEMODE_PROHIBITED: nvmlComputeMode_t = 2;
pub const NVML_COMPUTEMODE_EXCLUSIVE_PROCESS: nvmlComputeMode_t = 3;
pub const NVML_COMPUTEMODE_COUNT: nvmlComputeMode_t = 4;

pub type nvmlGpuOperationMode_t = c_uint;
pub const NVML_GOM_ALL_ON: nvmlGpuOperationMode_t = 0;
pub const NVML_GOM_COMPUTE: nvmlGpuOperationMode_t = 1;
pub const NVML_GOM_LOW_DP: nvmlGpuOperationMode_t = 2;

pub type nvmlDriverModel_t = c_uint;
pub const NVML_DRIVER_WDDM: nvmlDriverModel_t = 0;
pub const NVML_DRIVER_WDM: nvmlDriverModel_t = 1;

pub type nvmlInforomObject_t = c_uint;
pub const NVML_INFOROM_OEM: nvmlInforomObject_t = 0;
pub const NVML_INFOROM_ECC: nvmlInforomObject_t = 1;
pub const NVML_INFOROM_POWER: nvmlInforomObject_t = 2;
pub const NVML_INFOROM_COUNT: nvmlInforomObject_t = 3;

pub type nvmlRestrictedAPI_t = c_uint;
pub const NVML_RESTRICTED_API_SET_APPLICATION_CLOCKS: nvmlRestrictedAPI_t = 0;
pub const NVML_RESTRICTED_API_SET_AUTO_BOOSTED_CLOCKS: nvmlRestrictedAPI_t = 1;
pub const NVML_RESTRICTED_API_COUNT: nvmlRestrictedAPI_t = 2;

pub type nvmlAffinityScope_t = c_uint;
pub const NVML_AFFINITY_SCOPE_NODE: nvmlAffinityScope_t = 0;
pub const NVML_AFFINITY_SCOPE_SOCKET: nvmlAffinityScope_t = 1;

// ---------------------------------------------------------------------------
// ECC
// ---------------------------------------------------------------------------

pub type nvmlMemoryErrorType_t = c_uint;
pub const NVML_MEMORY_ERROR_TYPE_CORRECTED: nvmlMemoryErrorType_t = 0;
pub const NVML_MEMORY_ERROR_TYPE_UNCORRECTED: nvmlMemoryErrorType_t = 1;
pub const NVML_MEMORY_ERROR_TYPE_COUNT: nvmlMemoryErrorType_t = 2;

pub type nvmlEccCounterType_t = c_uint;
pub const NVML_VOLATILE_ECC: nvmlEccCounterType_t = 0;
pub const NVML_AGGREGATE_ECC: nvmlEccCounterType_t = 1;
pub const NVML_ECC_COUNTER_TYPE_COUNT: nvmlEccCounterType_t = 2;

pub type nvmlMemoryLocation_t = c_uint;
pub const NVML_MEMORY_LOCATION_L1_CACHE: nvmlMemoryLocation_t = 0;
pub const NVML_MEMORY_LOCATION_L2_CACHE: nvmlMemoryLocation_t = 1;
pub const NVML_MEMORY_LOCATION_DRAM: nvmlMemoryLocation_t = 2;
pub const NVML_MEMORY_LOCATION_DEVICE_MEMORY: nvmlMemoryLocation_t = NVML_MEMORY_LOCATION_DRAM;
pub const NVML_MEMORY_LOCATION_REGISTER_FILE: nvmlMemoryLocation_t = 3;
pub const NVML_MEMORY_LOCATION_TEXTURE_MEMORY: nvmlMemoryLocation_t = 4;
pub const NVML_MEMORY_LOCATION_TEXTURE_SHM: nvmlMemoryLocation_t = 5;
pub const NVML_MEMORY_LOCATION_CBU: nvmlMemoryLocation_t = 6;
pub const NVML_MEMORY_LOCATION_SRAM: nvmlMemoryLocation_t = 7;
pub const NVML_MEMORY_LOCATION_COUNT: nvmlMemoryLocation_t = 8;

/// Detailed ECC error counts, pre-Fermi naming.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlEccErrorCounts_t {
    pub l1Cache: c_ulonglong,
    pub l2Cache: c_ulonglong,
    pub deviceMemory: c_ulonglong,
    pub registerFile: c_ulonglong,
}

pub type nvmlPageRetirementCause_t = c_uint;
pub const NVML_PAGE_RETIREMENT_CAUSE_MULTIPLE_SINGLE_BIT_ECC_ERRORS: nvmlPageRetirementCause_t = 0;
pub const NVML_PAGE_RETIREMENT_CAUSE_DOUBLE_BIT_ECC_ERROR: nvmlPageRetirementCause_t = 1;
pub const NVML_PAGE_RETIREMENT_CAUSE_COUNT: nvmlPageRetirementCause_t = 2;

/// Row-remapper histogram: availability buckets of spare memory rows.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlRowRemapperHistogramValues_t {
    pub max: c_uint,
    pub high: c_uint,
    pub partial: c_uint,
    pub low: c_uint,
    pub none: c_uint,
}

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

pub type nvmlClockType_t = c_uint;
pub const NVML_CLOCK_GRAPHICS: nvmlClockType_t = 0;
pub const NVML_CLOCK_SM: nvmlClockType_t = 1;
pub const NVML_CLOCK_MEM: nvmlClockType_t = 2;
pub const NVML_CLOCK_VIDEO: nvmlClockType_t = 3;
pub const NVML_CLOCK_COUNT: nvmlClockType_t = 4;

pub type nvmlClockId_t = c_uint;
pub const NVML_CLOCK_ID_CURRENT: nvmlClockId_t = 0;
pub const NVML_CLOCK_ID_APP_CLOCK_TARGET: nvmlClockId_t = 1;
pub const NVML_CLOCK_ID_APP_CLOCK_DEFAULT: nvmlClockId_t = 2;
pub const NVML_CLOCK_ID_CUSTOMER_BOOST_MAX: nvmlClockId_t = 3;
pub const NVML_CLOCK_ID_COUNT: nvmlClockId_t = 4;

/// Special limit values accepted by `nvmlDeviceSetGpuLockedClocks`.
pub type nvmlClockLimitId_t = c_uint;
pub const NVML_CLOCK_LIMIT_ID_RANGE_START: nvmlClockLimitId_t = 0xffffff00;
pub const NVML_CLOCK_LIMIT_ID_TDP: nvmlClockLimitId_t = 0xffffff01;
pub const NVML_CLOCK_LIMIT_ID_UNLIMITED: nvmlClockLimitId_t = 0xffffff02;

pub type nvmlPstates_t = c_uint;
pub const NVML_PSTATE_0: nvmlPstates_t = 0;
pub const NVML_PSTATE_1: nvmlPstates_t = 1;
pub const NVML_PSTATE_2: nvmlPstates_t = 2;
pub const NVML_PSTATE_3: nvmlPstates_t = 3;
pub const NVML_PSTATE_4: nvmlPstates_t = 4;
pub const NVML_PSTATE_5: nvmlPstates_t = 5;
pub const NVML_PSTATE_6: nvmlPstates_t = 6;
pub const NVML_PSTATE_7: nvmlPstates_t = 7;
pub const NVML_PSTATE_8: nvmlPstates_t = 8;
pub const NVML_PSTATE_9: nvmlPstates_t = 9;
pub const NVML_PSTATE_10: nvmlPstates_t = 10;
pub const NVML_PSTATE_11: nvmlPstates_t = 11;
pub const NVML_PSTATE_12: nvmlPstates_t = 12;
pub const NVML_PSTATE_13: nvmlPstates_t = 13;
pub const NVML_PSTATE_14: nvmlPstates_t = 14;
pub const NVML_PSTATE_15: nvmlPstates_t = 15;
pub const NVML_PSTATE_UNKNOWN: nvmlPstates_t = 32;

// Reasons clocks are held below the application-requested level. The
// throttle-reason names are the pre-12.2 spelling of the same bits.
pub type nvmlClocksEventReasons_t = c_ulonglong;
pub const nvmlClocksEventReasonNone: nvmlClocksEventReasons_t = 0x0000000000000000;
pub const nvmlClocksEventReasonGpuIdle: nvmlClocksEventReasons_t = 0x0000000000000001;
pub const nvmlClocksEventReasonApplicationsClocksSetting: nvmlClocksEventReasons_t =
    0x0000000000000002;
pub const nvmlClocksEventReasonSwPowerCap: nvmlClocksEventReasons_t = 0x0000000000000004;
pub const nvmlClocksThrottleReasonHwSlowdown: nvmlClocksEventReasons_t = 0x0000000000000008;
pub const nvmlClocksEventReasonSyncBoost: nvmlClocksEventReasons_t = 0x0000000000000010;
pub const nvmlClocksEventReasonSwThermalSlowdown: nvmlClocksEventReasons_t = 0x0000000000000020;
pub const nvmlClocksThrottleReasonHwThermalSlowdown: nvmlClocksEventReasons_t =
    0x0000000000000040;
pub const nvmlClocksThrottleReasonHwPowerBrakeSlowdown: nvmlClocksEventReasons_t =
    0x0000000000000080;
pub const nvmlClocksEventReasonDisplayClockSetting: nvmlClocksEventReasons_t =
    0x0000000000000100;
pub const nvmlClocksEventReasonAll: nvmlClocksEventReasons_t = nvmlClocksEventReasonNone
    | nvmlClocksEventReasonGpuIdle
    | nvmlClocksEventReasonApplicationsClocksSetting
    | nvmlClocksEventReasonSwPowerCap
    | nvmlClocksThrottleReasonHwSlowdown
    | nvmlClocksEventReasonSyncBoost
    | nvmlClocksEventReasonSwThermalSlowdown
    | nvmlClocksThrottleReasonHwThermalSlowdown
    | nvmlClocksThrottleReasonHwPowerBrakeSlowdown
    | nvmlClocksEventReasonDisplayClockSetting;

pub type nvmlClocksThrottleReasons_t = nvmlClocksEventReasons_t;
pub const nvmlClocksThrottleReasonGpuIdle: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonGpuIdle;
pub const nvmlClocksThrottleReasonApplicationsClocksSetting: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonApplicationsClocksSetting;
pub const nvmlClocksThrottleReasonSwPowerCap: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonSwPowerCap;
pub const nvmlClocksThrottleReasonSyncBoost: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonSyncBoost;
pub const nvmlClocksThrottleReasonSwThermalSlowdown: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonSwThermalSlowdown;
pub const nvmlClocksThrottleReasonDisplayClockSetting: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonDisplayClockSetting;
pub const nvmlClocksThrottleReasonNone: nvmlClocksThrottleReasons_t =
    nvmlClocksEventReasonNone;
pub const nvmlClocksThrottleReasonAll: nvmlClocksThrottleReasons_t = nvmlClocksEventReasonAll;

/// Clock monitor fault status, one entry per faulted clock domain.
pub const MAX_CLK_DOMAINS: usize = 32;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlClkMonFaultInfo_t {
    pub clkApiDomain: c_uint,
    pub clkDomainFaultMask: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlClkMonStatus_t {
    pub bGlobalStatus: c_uint,
    pub clkMonListSize: c_uint,
    pub clkMonList: [nvmlClkMonFaultInfo_t; MAX_CLK_DOMAINS],
}

impl Default for nvmlClkMonStatus_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

// ---------------------------------------------------------------------------
// Thermal
// ---------------------------------------------------------------------------

pub type nvmlTemperatureSensors_t = c_uint;
pub const NVML_TEMPERATURE_GPU: nvmlTemperatureSensors_t = 0;
pub const NVML_TEMPERATURE_COUNT: nvmlTemperatureSensors_t = 1;

pub type nvmlTemperatureThresholds_t = c_uint;
pub const NVML_TEMPERATURE_THRESHOLD_SHUTDOWN: nvmlTemperatureThresholds_t = 0;
pub const NVML_TEMPERATURE_THRESHOLD_SLOWDOWN: nvmlTemperatureThresholds_t = 1;
pub const NVML_TEMPERATURE_THRESHOLD_MEM_MAX: nvmlTemperatureThresholds_t = 2;
pub const NVML_TEMPERATURE_THRESHOLD_GPU_MAX: nvmlTemperatureThresholds_t = 3;
pub const NVML_TEMPERATURE_THRESHOLD_ACOUSTIC_MIN: nvmlTemperatureThresholds_t = 4;
pub const NVML_TEMPERATURE_THRESHOLD_ACOUSTIC_CURR: nvmlTemperatureThresholds_t = 5;
pub const NVML_TEMPERATURE_THRESHOLD_ACOUSTIC_MAX: nvmlTemperatureThresholds_t = 6;
pub const NVML_TEMPERATURE_THRESHOLD_GPS_CURR: nvmlTemperatureThresholds_t = 7;
pub const NVML_TEMPERATURE_THRESHOLD_COUNT: nvmlTemperatureThresholds_t = 8;

pub type nvmlThermalTarget_t = c_int;
pub const NVML_THERMAL_TARGET_NONE: nvmlThermalTarget_t = 0;
pub const NVML_THERMAL_TARGET_GPU: nvmlThermalTarget_t = 1;
pub const NVML_THERMAL_TARGET_MEMORY: nvmlThermalTarget_t = 2;
pub const NVML_THERMAL_TARGET_POWER_SUPPLY: nvmlThermalTarget_t = 4;
pub const NVML_THERMAL_TARGET_BOARD: nvmlThermalTarget_t = 8;
pub const NVML_THERMAL_TARGET_VCD_BOARD: nvmlThermalTarget_t = 9;
pub const NVML_THERMAL_TARGET_VCD_INLET: nvmlThermalTarget_t = 10;
pub const NVML_THERMAL_TARGET_VCD_OUTLET: nvmlThermalTarget_t = 11;
pub const NVML_THERMAL_TARGET_ALL: nvmlThermalTarget_t = 15;
pub const NVML_THERMAL_TARGET_UNKNOWN: nvmlThermalTarget_t = -1;

pub type nvmlThermalController_t = c_int;
pub const NVML_THERMAL_CONTROLLER_NONE: nvmlThermalController_t = 0;
pub const NVML_THERMAL_CONTROLLER_GPU_INTERNAL: nvmlThermalController_t = 1;
pub const NVML_THERMAL_CONTROLLER_ADM1032: nvmlThermalController_t = 2;
pub const NVML_THERMAL_CONTROLLER_ADT7461: nvmlThermalController_t = 3;
pub const NVML_THERMAL_CONTROLLER_MAX6649: nvmlThermalController_t = 4;
pub const NVML_THERMAL_CONTROLLER_MAX1617: nvmlThermalController_t = 5;
pub const NVML_THERMAL_CONTROLLER_LM99: nvmlThermalController_t = 6;
pub const NVML_THERMAL_CONTROLLER_LM89: nvmlThermalController_t = 7;
pub const NVML_THERMAL_CONTROLLER_LM64: nvmlThermalController_t = 8;
pub const NVML_THERMAL_CONTROLLER_G781: nvmlThermalController_t = 9;
pub const NVML_THERMAL_CONTROLLER_ADT7473: nvmlThermalController_t = 10;
pub const NVML_THERMAL_CONTROLLER_SBMAX6649: nvmlThermalController_t = 11;
pub const NVML_THERMAL_CONTROLLER_VBIOSEVT: nvmlThermalController_t = 12;
pub const NVML_THERMAL_CONTROLLER_OS: nvmlThermalController_t = 13;
pub const NVML_THERMAL_CONTROLLER_NVSYSCON_CANOAS: nvmlThermalController_t = 14;
pub const NVML_THERMAL_CONTROLLER_NVSYSCON_E551: nvmlThermalController_t = 15;
pub const NVML_THERMAL_CONTROLLER_MAX6649R: nvmlThermalController_t = 16;
pub const NVML_THERMAL_CONTROLLER_ADT7473S: nvmlThermalController_t = 17;
pub const NVML_THERMAL_CONTROLLER_UNKNOWN: nvmlThermalController_t = -1;

pub const NVML_MAX_THERMAL_SENSORS_PER_GPU: usize = 3;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuThermalSettingsSensor_t {
    pub controller: nvmlThermalController_t,
    pub defaultMinTemp: c_int,
    pub defaultMaxTemp: c_int,
    pub currentTemp: c_int,
    pub target: nvmlThermalTarget_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuThermalSettings_t {
    pub count: c_uint,
    pub sensor: [nvmlGpuThermalSettingsSensor_t; NVML_MAX_THERMAL_SENSORS_PER_GPU],
}

impl Default for nvmlGpuThermalSettings_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Versioned per-sensor temperature query for `nvmlDeviceGetTemperatureV`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlTemperature_v1_t {
    pub version: c_uint,
    pub sensorType: nvmlTemperatureSensors_t,
    pub temperature: c_int,
}
pub type nvmlTemperature_t = nvmlTemperature_v1_t;

pub const nvmlTemperature_v1: c_uint = nvml_struct_version!(nvmlTemperature_v1_t, 1);

/// Distance to the nearest slowdown threshold, in degrees C.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlMarginTemperature_v1_t {
    pub version: c_uint,
    pub marginTemperature: c_int,
}
pub type nvmlMarginTemperature_t = nvmlMarginTemperature_v1_t;

pub const nvmlMarginTemperature_v1: c_uint = nvml_struct_version!(nvmlMarginTemperature_v1_t, 1);

// ---------------------------------------------------------------------------
// Fans and coolers
// ---------------------------------------------------------------------------

pub type nvmlFanState_t = c_uint;
pub const NVML_FAN_NORMAL: nvmlFanState_t = 0;
pub const NVML_FAN_FAILED: nvmlFanState_t = 1;

pub type nvmlFanControlPolicy_t = c_uint;
// The misspelling is the header's.
pub const NVML_FAN_POLICY_TEMPERATURE_CONTINOUS_SW: nvmlFanControlPolicy_t = 0;
pub const NVML_FAN_POLICY_MANUAL: nvmlFanControlPolicy_t = 1;

/// RPM fan speed query, versioned.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlFanSpeedInfo_v1_t {
    pub version: c_uint,
    pub fan: c_uint,
    pub speed: c_uint,
}
pub type nvmlFanSpeedInfo_t = nvmlFanSpeedInfo_v1_t;

pub const nvmlFanSpeedInfo_v1: c_uint = nvml_struct_version!(nvmlFanSpeedInfo_v1_t, 1);

pub type nvmlCoolerControl_t = c_uint;
pub const NVML_THERMAL_COOLER_SIGNAL_NONE: nvmlCoolerControl_t = 0;
pub const NVML_THERMAL_COOLER_SIGNAL_TOGGLE: nvmlCoolerControl_t = 1;
pub const NVML_THERMAL_COOLER_SIGNAL_VARIABLE: nvmlCoolerControl_t = 2;

pub type nvmlCoolerTarget_t = c_uint;
pub const NVML_THERMAL_COOLER_TARGET_NONE: nvmlCoolerTarget_t = 1 << 0;
pub const NVML_THERMAL_COOLER_TARGET_GPU: nvmlCoolerTarget_t = 1 << 1;
pub const NVML_THERMAL_COOLER_TARGET_MEMORY: nvmlCoolerTarget_t = 1 << 2;
pub const NVML_THERMAL_COOLER_TARGET_POWER_SUPPLY: nvmlCoolerTarget_t = 1 << 3;
pub const NVML_THERMAL_COOLER_TARGET_GPU_RELATED: nvmlCoolerTarget_t =
    NVML_THERMAL_COOLER_TARGET_GPU
        | NVML_THERMAL_COOLER_TARGET_MEMORY
        | NVML_THERMAL_COOLER_TARGET_POWER_SUPPLY;

/// What a fan/cooler is wired to cool and how it is driven.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlCoolerInfo_v1_t {
    pub version: c_uint,
    pub index: c_uint,
    pub signalType: nvmlCoolerControl_t,
    pub target: nvmlCoolerTarget_t,
}
pub type nvmlCoolerInfo_t = nvmlCoolerInfo_v1_t;

pub const nvmlCoolerInfo_v1: c_uint = nvml_struct_version!(nvmlCoolerInfo_v1_t, 1);

// ---------------------------------------------------------------------------
// Power
// ---------------------------------------------------------------------------

pub type nvmlPowerScopeType_t = c_uchar;
pub const NVML_POWER_SCOPE_GPU: nvmlPowerScopeType_t = 0;
pub const NVML_POWER_SCOPE_MODULE: nvmlPowerScopeType_t = 1;
pub const NVML_POWER_SCOPE_MEMORY: nvmlPowerScopeType_t = 2;

/// Scoped power limit value in milliwatts, for
/// `nvmlDeviceSetPowerManagementLimit_v2`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPowerValue_v2_t {
    pub version: c_uint,
    pub powerScope: nvmlPowerScopeType_t,
    pub powerValueMw: c_uint,
}

pub const nvmlPowerValue_v2: c_uint = nvml_struct_version!(nvmlPowerValue_v2_t, 2);

// ---------------------------------------------------------------------------
// Dynamic pstate utilization
// ---------------------------------------------------------------------------

pub const NVML_MAX_GPU_UTILIZATIONS: usize = 8;

pub type nvmlGpuUtilizationDomainId_t = c_uint;
pub const NVML_GPU_UTILIZATION_DOMAIN_GPU: nvmlGpuUtilizationDomainId_t = 0;
pub const NVML_GPU_UTILIZATION_DOMAIN_FB: nvmlGpuUtilizationDomainId_t = 1;
pub const NVML_GPU_UTILIZATION_DOMAIN_VID: nvmlGpuUtilizationDomainId_t = 2;
pub const NVML_GPU_UTILIZATION_DOMAIN_BUS: nvmlGpuUtilizationDomainId_t = 3;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlGpuDynamicPstatesInfoUtilization_t {
    pub bIsPresent: c_uint,
    pub percentage: c_uint,
    pub incThreshold: c_uint,
    pub decThreshold: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlGpuDynamicPstatesInfo_t {
    pub flags: c_uint,
    pub utilization: [nvmlGpuDynamicPstatesInfoUtilization_t; NVML_MAX_GPU_UTILIZATIONS],
}

// ---------------------------------------------------------------------------
// PCIe
// ---------------------------------------------------------------------------

pub type nvmlPcieUtilCounter_t = c_uint;
pub const NVML_PCIE_UTIL_TX_BYTES: nvmlPcieUtilCounter_t = 0;
pub const NVML_PCIE_UTIL_RX_BYTES: nvmlPcieUtilCounter_t = 1;
pub const NVML_PCIE_UTIL_COUNT: nvmlPcieUtilCounter_t = 2;

// ---------------------------------------------------------------------------
// Topology / P2P
// ---------------------------------------------------------------------------

pub type nvmlGpuTopologyLevel_t = c_uint;
pub const NVML_TOPOLOGY_INTERNAL: nvmlGpuTopologyLevel_t = 0;
pub const NVML_TOPOLOGY_SINGLE: nvmlGpuTopologyLevel_t = 10;
pub const NVML_TOPOLOGY_MULTIPLE: nvmlGpuTopologyLevel_t = 20;
pub const NVML_TOPOLOGY_HOSTBRIDGE: nvmlGpuTopologyLevel_t = 30;
pub const NVML_TOPOLOGY_NODE: nvmlGpuTopologyLevel_t = 40;
pub const NVML_TOPOLOGY_CPU: nvmlGpuTopologyLevel_t = NVML_TOPOLOGY_NODE;
pub const NVML_TOPOLOGY_SYSTEM: nvmlGpuTopologyLevel_t = 50;

pub type nvmlGpuP2PStatus_t = c_uint;
pub const NVML_P2P_STATUS_OK: nvmlGpuP2PStatus_t = 0;
pub const NVML_P2P_STATUS_CHIPSET_NOT_SUPPORTED: nvmlGpuP2PStatus_t = 1;
pub const NVML_P2P_STATUS_GPU_NOT_SUPPORTED: nvmlGpuP2PStatus_t = 2;
pub const NVML_P2P_STATUS_IOH_TOPOLOGY_NOT_SUPPORTED: nvmlGpuP2PStatus_t = 3;
pub const NVML_P2P_STATUS_DISABLED_BY_REGKEY: nvmlGpuP2PStatus_t = 4;
pub const NVML_P2P_STATUS_NOT_SUPPORTED: nvmlGpuP2PStatus_t = 5;
pub const NVML_P2P_STATUS_UNKNOWN: nvmlGpuP2PStatus_t = 6;

pub type nvmlGpuP2PCapsIndex_t = c_uint;
pub const NVML_P2P_CAPS_INDEX_READ: nvmlGpuP2PCapsIndex_t = 0;
pub const NVML_P2P_CAPS_INDEX_WRITE: nvmlGpuP2PCapsIndex_t = 1;
pub const NVML_P2P_CAPS_INDEX_NVLINK: nvmlGpuP2PCapsIndex_t = 2;
pub const NVML_P2P_CAPS_INDEX_ATOMICS: nvmlGpuP2PCapsIndex_t = 3;
pub const NVML_P2P_CAPS_INDEX_PROP: nvmlGpuP2PCapsIndex_t = 4;
pub const NVML_P2P_CAPS_INDEX_UNKNOWN: nvmlGpuP2PCapsIndex_t = 5;

// ---------------------------------------------------------------------------
// Bridge chips
// ---------------------------------------------------------------------------

pub type nvmlBridgeChipType_t = c_uint;
pub const NVML_BRIDGE_CHIP_PLX: nvmlBridgeChipType_t = 0;
pub const NVML_BRIDGE_CHIP_BRO4: nvmlBridgeChipType_t = 1;

pub const NVML_MAX_PHYSICAL_BRIDGE: usize = 128;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlBridgeChipInfo_t {
    pub r#type: nvmlBridgeChipType_t,
    pub fwVersion: c_uint,
}

/// Bridge hierarchy, root-first.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlBridgeChipHierarchy_t {
    pub bridgeCount: c_uchar,
    pub bridgeChipInfo: [nvmlBridgeChipInfo_t; NVML_MAX_PHYSICAL_BRIDGE],
}

impl Default for nvmlBridgeChipHierarchy_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

// ---------------------------------------------------------------------------
// Encoder / FBC sessions
// ---------------------------------------------------------------------------

pub type nvmlEncoderType_t = c_uint;
pub const NVML_ENCODER_QUERY_H264: nvmlEncoderType_t = 0;
pub const NVML_ENCODER_QUERY_HEVC: nvmlEncoderType_t = 1;
pub const NVML_ENCODER_QUERY_AV1: nvmlEncoderType_t = 2;
pub const NVML_ENCODER_QUERY_UNKNOWN: nvmlEncoderType_t = 255;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlEncoderSessionInfo_t {
    pub sessionId: c_uint,
    pub pid: c_uint,
    pub vgpuInstance: nvmlVgpuInstance_t,
    pub codecType: nvmlEncoderType_t,
    pub hResolution: c_uint,
    pub vResolution: c_uint,
    pub averageFps: c_uint,
    pub averageLatency: c_uint,
}

pub type nvmlFBCSessionType_t = c_uint;
pub const NVML_FBC_SESSION_TYPE_UNKNOWN: nvmlFBCSessionType_t = 0;
pub const NVML_FBC_SESSION_TYPE_TOSYS: nvmlFBCSessionType_t = 1;
pub const NVML_FBC_SESSION_TYPE_CUDA: nvmlFBCSessionType_t = 2;
pub const NVML_FBC_SESSION_TYPE_VID: nvmlFBCSessionType_t = 3;
pub const NVML_FBC_SESSION_TYPE_HWENC: nvmlFBCSessionType_t = 4;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlFBCStats_t {
    pub sessionsCount: c_uint,
    pub averageFPS: c_uint,
    pub averageLatency: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlFBCSessionInfo_t {
    pub sessionId: c_uint,
    pub pid: c_uint,
    pub vgpuInstance: nvmlVgpuInstance_t,
    pub displayOrdinal: c_uint,
    pub sessionType: nvmlFBCSessionType_t,
    pub sessionFlags: c_uint,
    pub hMaxResolution: c_uint,
    pub vMaxResolution: c_uint,
    pub hResolution: c_uint,
    pub vResolution: c_uint,
    pub averageFPS: c_uint,
    pub averageLatency: c_uint,
}

// ---------------------------------------------------------------------------
// Accounting
// ---------------------------------------------------------------------------

/// Per-process accounting snapshot. `time`/`startTime` in ms/us since epoch
/// respectively; utilization fields are percentages over the process
/// lifetime.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlAccountingStats_t {
    pub gpuUtilization: c_uint,
    pub memoryUtilization: c_uint,
    pub maxMemoryUsage: c_ulonglong,
    pub time: c_ulonglong,
    pub startTime: c_ulonglong,
    pub isRunning: c_uint,
    pub reserved: [c_uint; 5],
}

// ---------------------------------------------------------------------------
// NVLink
// ---------------------------------------------------------------------------

pub const NVML_NVLINK_MAX_LINKS: usize = 18;

pub type nvmlNvLinkCapability_t = c_uint;
pub const NVML_NVLINK_CAP_P2P_SUPPORTED: nvmlNvLinkCapability_t = 0;
pub const NVML_NVLINK_CAP_SYSMEM_ACCESS: nvmlNvLinkCapability_t = 1;
pub const NVML_NVLINK_CAP_P2P_ATOMICS: nvmlNvLinkCapability_t = 2;
pub const NVML_NVLINK_CAP_SYSMEM_ATOMICS: nvmlNvLinkCapability_t = 3;
pub const NVML_NVLINK_CAP_SLI_BRIDGE: nvmlNvLinkCapability_t = 4;
pub const NVML_NVLINK_CAP_VALID: nvmlNvLinkCapability_t = 5;
pub const NVML_NVLINK_CAP_COUNT: nvmlNvLinkCapability_t = 6;

pub type nvmlNvLinkErrorCounter_t = c_uint;
pub const NVML_NVLINK_ERROR_DL_REPLAY: nvmlNvLinkErrorCounter_t = 0;
pub const NVML_NVLINK_ERROR_DL_RECOVERY: nvmlNvLinkErrorCounter_t = 1;
pub const NVML_NVLINK_ERROR_DL_CRC_FLIT: nvmlNvLinkErrorCounter_t = 2;
pub const NVML_NVLINK_ERROR_DL_CRC_DATA: nvmlNvLinkErrorCounter_t = 3;
pub const NVML_NVLINK_ERROR_DL_ECC_DATA: nvmlNvLinkErrorCounter_t = 4;
pub const NVML_NVLINK_ERROR_COUNT: nvmlNvLinkErrorCounter_t = 5;

pub type nvmlIntNvLinkDeviceType_t = c_uint;
pub const NVML_NVLINK_DEVICE_TYPE_GPU: nvmlIntNvLinkDeviceType_t = 0x00;
pub const NVML_NVLINK_DEVICE_TYPE_IBMNPU: nvmlIntNvLinkDeviceType_t = 0x01;
pub const NVML_NVLINK_DEVICE_TYPE_SWITCH: nvmlIntNvLinkDeviceType_t = 0x02;
pub const NVML_NVLINK_DEVICE_TYPE_NONE: nvmlIntNvLinkDeviceType_t = 0xFF;

// ---------------------------------------------------------------------------
// GPU fabric
// ---------------------------------------------------------------------------

pub const NVML_GPU_FABRIC_UUID_LEN: usize = 16;

pub type nvmlGpuFabricState_t = c_uchar;
pub const NVML_GPU_FABRIC_STATE_NOT_SUPPORTED: nvmlGpuFabricState_t = 0;
pub const NVML_GPU_FABRIC_STATE_NOT_STARTED: nvmlGpuFabricState_t = 1;
pub const NVML_GPU_FABRIC_STATE_IN_PROGRESS: nvmlGpuFabricState_t = 2;
pub const NVML_GPU_FABRIC_STATE_COMPLETED: nvmlGpuFabricState_t = 3;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuFabricInfo_t {
    pub clusterUuid: [c_uchar; NVML_GPU_FABRIC_UUID_LEN],
    pub status: nvmlReturn_t,
    pub cliqueId: c_uint,
    pub state: nvmlGpuFabricState_t,
}

impl Default for nvmlGpuFabricInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Fabric registration info plus the per-clique health mask.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuFabricInfo_v2_t {
    pub version: c_uint,
    pub clusterUuid: [c_uchar; NVML_GPU_FABRIC_UUID_LEN],
    pub status: nvmlReturn_t,
    pub cliqueId: c_uint,
    pub state: nvmlGpuFabricState_t,
    pub healthMask: c_uint,
}
pub type nvmlGpuFabricInfoV_t = nvmlGpuFabricInfo_v2_t;

pub const nvmlGpuFabricInfo_v2: c_uint = nvml_struct_version!(nvmlGpuFabricInfo_v2_t, 2);

impl Default for nvmlGpuFabricInfo_v2_t {
    fn default() -> Self {
        let mut info: Self = unsafe { std::mem::zeroed() };
        info.version = nvmlGpuFabricInfo_v2;
        info
    }
}

// ---------------------------------------------------------------------------
// GPU removal / excluded devices
// ---------------------------------------------------------------------------

pub type nvmlDetachGpuState_t = c_uint;
pub const NVML_DETACH_GPU_KEEP: nvmlDetachGpuState_t = 0;
pub const NVML_DETACH_GPU_REMOVE: nvmlDetachGpuState_t = 1;

pub type nvmlPcieLinkState_t = c_uint;
pub const NVML_PCIE_LINK_KEEP: nvmlPcieLinkState_t = 0;
pub const NVML_PCIE_LINK_SHUT_DOWN: nvmlPcieLinkState_t = 1;

/// Identification of a device excluded from driver management.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlExcludedDeviceInfo_t {
    pub pciInfo: nvmlPciInfo_t,
    pub uuid: [c_char; NVML_DEVICE_UUID_BUFFER_SIZE],
}

impl Default for nvmlExcludedDeviceInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Extended-GPU-memory capability bit.
pub const NVML_DEV_CAP_EGM: c_uint = 1 << 0;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlDeviceCapabilities_v1_t {
    pub version: c_uint,
    pub capMask: c_uint,
}
pub type nvmlDeviceCapabilities_t = nvmlDeviceCapabilities_v1_t;

pub const nvmlDeviceCapabilities_v1: c_uint = nvml_struct_version!(nvmlDeviceCapabilities_v1_t, 1);

// ---------------------------------------------------------------------------
// DRAM encryption
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlDramEncryptionInfo_v1_t {
    pub version: c_uint,
    pub encryptionState: super::core::nvmlEnableState_t,
}
pub type nvmlDramEncryptionInfo_t = nvmlDramEncryptionInfo_v1_t;

pub const nvmlDramEncryptionInfo_v1: c_uint = nvml_struct_version!(nvmlDramEncryptionInfo_v1_t, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_pci_info_layout() {
        assert_eq!(size_of::<nvmlPciInfo_t>(), 68);
        assert_eq!(offset_of!(nvmlPciInfo_t, domain), 16);
        assert_eq!(offset_of!(nvmlPciInfo_t, pciDeviceId), 28);
        assert_eq!(offset_of!(nvmlPciInfo_t, busId), 36);
    }

    #[test]
    fn test_pci_info_ext_version() {
        assert_eq!(size_of::<nvmlPciInfoExt_v1_t>(), 64);
        assert_eq!(nvmlPciInfoExt_v1, 64 | (1 << 24));
        assert_eq!(nvmlPciInfoExt_v1_t::default().version, nvmlPciInfoExt_v1);
    }

    #[test]
    fn test_memory_layouts() {
        assert_eq!(size_of::<nvmlMemory_t>(), 24);
        assert_eq!(size_of::<nvmlMemory_v2_t>(), 40);
        assert_eq!(offset_of!(nvmlMemory_v2_t, total), 8);
        assert_eq!(offset_of!(nvmlMemory_v2_t, used), 32);
        assert_eq!(nvmlMemory_v2, 40 | (2 << 24));
    }

    #[test]
    fn test_memory_v2_roundtrip() {
        let mut mem = nvmlMemory_v2_t::default();
        assert_eq!(mem.version, nvmlMemory_v2);
        mem.total = 16 << 30;
        mem.reserved = 256 << 20;
        mem.free = 8 << 30;
        mem.used = mem.total - mem.free - mem.reserved;
        assert_eq!(mem.total, 17_179_869_184);
        assert_eq!(mem.used + mem.free + mem.reserved, mem.total);
    }

    #[test]
    fn test_process_info_layouts() {
        assert_eq!(size_of::<nvmlProcessInfo_v1_t>(), 16);
        assert_eq!(size_of::<nvmlProcessInfo_v2_t>(), 24);
        assert_eq!(offset_of!(nvmlProcessInfo_v2_t, usedGpuMemory), 8);
        assert_eq!(offset_of!(nvmlProcessInfo_v2_t, gpuInstanceId), 16);
        assert_eq!(offset_of!(nvmlProcessInfo_v2_t, computeInstanceId), 20);
    }

    #[test]
    fn test_process_utilization_sample_layout() {
        assert_eq!(size_of::<nvmlProcessUtilizationSample_t>(), 32);
        assert_eq!(offset_of!(nvmlProcessUtilizationSample_t, timeStamp), 8);
        assert_eq!(offset_of!(nvmlProcessUtilizationSample_t, decUtil), 28);
    }

    #[test]
    fn test_device_attributes_layout() {
        assert_eq!(size_of::<nvmlDeviceAttributes_t>(), 40);
        assert_eq!(offset_of!(nvmlDeviceAttributes_t, memorySizeMB), 32);
    }

    #[test]
    fn test_thermal_settings_layout() {
        assert_eq!(size_of::<nvmlGpuThermalSettingsSensor_t>(), 20);
        assert_eq!(size_of::<nvmlGpuThermalSettings_t>(), 64);
        assert_eq!(offset_of!(nvmlGpuThermalSettings_t, sensor), 4);
    }

    #[test]
    fn test_bridge_chip_hierarchy_layout() {
        assert_eq!(size_of::<nvmlBridgeChipInfo_t>(), 8);
        assert_eq!(size_of::<nvmlBridgeChipHierarchy_t>(), 1028);
        assert_eq!(offset_of!(nvmlBridgeChipHierarchy_t, bridgeChipInfo), 4);
    }

    #[test]
    fn test_session_info_layouts() {
        assert_eq!(size_of::<nvmlEncoderSessionInfo_t>(), 32);
        assert_eq!(size_of::<nvmlFBCStats_t>(), 12);
        assert_eq!(size_of::<nvmlFBCSessionInfo_t>(), 48);
    }

    #[test]
    fn test_accounting_stats_layout() {
        assert_eq!(size_of::<nvmlAccountingStats_t>(), 56);
        assert_eq!(offset_of!(nvmlAccountingStats_t, maxMemoryUsage), 8);
        assert_eq!(offset_of!(nvmlAccountingStats_t, isRunning), 32);
        assert_eq!(offset_of!(nvmlAccountingStats_t, reserved), 36);
    }

    #[test]
    fn test_clk_mon_status_layout() {
        assert_eq!(size_of::<nvmlClkMonStatus_t>(), 264);
        assert_eq!(offset_of!(nvmlClkMonStatus_t, clkMonList), 8);
    }

    #[test]
    fn test_gpu_fabric_info_layouts() {
        assert_eq!(size_of::<nvmlGpuFabricInfo_t>(), 28);
        assert_eq!(size_of::<nvmlGpuFabricInfo_v2_t>(), 36);
        assert_eq!(offset_of!(nvmlGpuFabricInfo_v2_t, status), 20);
        assert_eq!(offset_of!(nvmlGpuFabricInfo_v2_t, state), 28);
        assert_eq!(offset_of!(nvmlGpuFabricInfo_v2_t, healthMask), 32);
        assert_eq!(nvmlGpuFabricInfo_v2, 36 | (2 << 24));
    }

    #[test]
    fn test_power_value_v2_layout() {
        assert_eq!(size_of::<nvmlPowerValue_v2_t>(), 12);
        assert_eq!(offset_of!(nvmlPowerValue_v2_t, powerScope), 4);
        assert_eq!(offset_of!(nvmlPowerValue_v2_t, powerValueMw), 8);
        assert_eq!(nvmlPowerValue_v2, 12 | (2 << 24));
    }

    #[test]
    fn test_excluded_device_info_layout() {
        assert_eq!(size_of::<nvmlExcludedDeviceInfo_t>(), 148);
        assert_eq!(offset_of!(nvmlExcludedDeviceInfo_t, uuid), 68);
    }

    #[test]
    fn test_dynamic_pstates_layout() {
        assert_eq!(size_of::<nvmlGpuDynamicPstatesInfo_t>(), 132);
    }

    #[test]
    fn test_event_reason_masks() {
        assert_eq!(nvmlClocksEventReasonGpuIdle, 0x1);
        assert_eq!(nvmlClocksThrottleReasonHwPowerBrakeSlowdown, 0x80);
        assert_eq!(nvmlClocksEventReasonAll, 0x1ff);
        // Legacy names alias the renamed bits exactly.
        assert_eq!(nvmlClocksThrottleReasonSwPowerCap, nvmlClocksEventReasonSwPowerCap);
        assert_eq!(nvmlClocksThrottleReasonAll, nvmlClocksEventReasonAll);
    }

    #[test]
    fn test_pstate_and_clock_values() {
        assert_eq!(NVML_PSTATE_15, 15);
        assert_eq!(NVML_PSTATE_UNKNOWN, 32);
        assert_eq!(NVML_CLOCK_VIDEO, 3);
        assert_eq!(NVML_CLOCK_ID_CUSTOMER_BOOST_MAX, 3);
        assert_eq!(NVML_CLOCK_LIMIT_ID_TDP, 0xffffff01);
    }

    #[test]
    fn test_topology_values() {
        assert_eq!(NVML_TOPOLOGY_SINGLE, 10);
        assert_eq!(NVML_TOPOLOGY_CPU, NVML_TOPOLOGY_NODE);
        assert_eq!(NVML_TOPOLOGY_SYSTEM, 50);
    }
}
