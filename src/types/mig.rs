//! MIG (Multi-Instance GPU) types
//!
//! GPU instances partition a device's memory and SM slices; compute
//! instances subdivide a GPU instance's compute. Both are driver-owned
//! handles created and destroyed through explicit API calls.

use std::os::raw::{c_char, c_uint, c_ulonglong};

use super::core::{nvmlComputeInstance_t, nvmlDevice_t, nvmlGpuInstance_t};
use super::device::NVML_DEVICE_NAME_V2_BUFFER_SIZE;
use crate::nvml_struct_version;

pub const NVML_DEVICE_MIG_DISABLE: c_uint = 0;
pub const NVML_DEVICE_MIG_ENABLE: c_uint = 1;

// GPU instance profiles. The REV entries are memory-size revisions of the
// same slice count.
pub const NVML_GPU_INSTANCE_PROFILE_1_SLICE: c_uint = 0;
pub const NVML_GPU_INSTANCE_PROFILE_2_SLICE: c_uint = 1;
pub const NVML_GPU_INSTANCE_PROFILE_3_SLICE: c_uint = 2;
pub const NVML_GPU_INSTANCE_PROFILE_4_SLICE: c_uint = 3;
pub const NVML_GPU_INSTANCE_PROFILE_7_SLICE: c_uint = 4;
pub const NVML_GPU_INSTANCE_PROFILE_8_SLICE: c_uint = 5;
pub const NVML_GPU_INSTANCE_PROFILE_6_SLICE: c_uint = 6;
pub const NVML_GPU_INSTANCE_PROFILE_1_SLICE_REV1: c_uint = 7;
pub const NVML_GPU_INSTANCE_PROFILE_2_SLICE_REV1: c_uint = 8;
pub const NVML_GPU_INSTANCE_PROFILE_1_SLICE_REV2: c_uint = 9;
pub const NVML_GPU_INSTANCE_PROFILE_COUNT: c_uint = 10;

pub const NVML_COMPUTE_INSTANCE_PROFILE_1_SLICE: c_uint = 0;
pub const NVML_COMPUTE_INSTANCE_PROFILE_2_SLICE: c_uint = 1;
pub const NVML_COMPUTE_INSTANCE_PROFILE_3_SLICE: c_uint = 2;
pub const NVML_COMPUTE_INSTANCE_PROFILE_4_SLICE: c_uint = 3;
pub const NVML_COMPUTE_INSTANCE_PROFILE_7_SLICE: c_uint = 4;
pub const NVML_COMPUTE_INSTANCE_PROFILE_8_SLICE: c_uint = 5;
pub const NVML_COMPUTE_INSTANCE_PROFILE_6_SLICE: c_uint = 6;
pub const NVML_COMPUTE_INSTANCE_PROFILE_1_SLICE_REV1: c_uint = 7;
pub const NVML_COMPUTE_INSTANCE_PROFILE_COUNT: c_uint = 8;

pub const NVML_COMPUTE_INSTANCE_ENGINE_PROFILE_SHARED: c_uint = 0;
pub const NVML_COMPUTE_INSTANCE_ENGINE_PROFILE_COUNT: c_uint = 1;

/// Placement of a GPU instance in memory-slice coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlGpuInstancePlacement_t {
    pub start: c_uint,
    pub size: c_uint,
}

/// Capacity description of a GPU instance profile.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlGpuInstanceProfileInfo_t {
    pub id: c_uint,
    pub isP2pSupported: c_uint,
    pub sliceCount: c_uint,
    pub instanceCount: c_uint,
    pub multiprocessorCount: c_uint,
    pub copyEngineCount: c_uint,
    pub decoderCount: c_uint,
    pub encoderCount: c_uint,
    pub jpegCount: c_uint,
    pub ofaCount: c_uint,
    pub memorySizeMB: c_ulonglong,
}

/// Versioned profile info carrying the profile's display name.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuInstanceProfileInfo_v2_t {
    pub version: c_uint,
    pub id: c_uint,
    pub isP2pSupported: c_uint,
    pub sliceCount: c_uint,
    pub instanceCount: c_uint,
    pub multiprocessorCount: c_uint,
    pub copyEngineCount: c_uint,
    pub decoderCount: c_uint,
    pub encoderCount: c_uint,
    pub jpegCount: c_uint,
    pub ofaCount: c_uint,
    pub memorySizeMB: c_ulonglong,
    pub name: [c_char; NVML_DEVICE_NAME_V2_BUFFER_SIZE],
}

pub const nvmlGpuInstanceProfileInfo_v2: c_uint =
    nvml_struct_version!(nvmlGpuInstanceProfileInfo_v2_t, 2);

impl Default for nvmlGpuInstanceProfileInfo_v2_t {
    fn default() -> Self {
        let mut info: Self = unsafe { std::mem::zeroed() };
        info.version = nvmlGpuInstanceProfileInfo_v2;
        info
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlGpuInstanceInfo_t {
    pub device: nvmlDevice_t,
    pub id: c_uint,
    pub profileId: c_uint,
    pub placement: nvmlGpuInstancePlacement_t,
}

impl Default for nvmlGpuInstanceInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Placement of a compute instance in compute-slice coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlComputeInstancePlacement_t {
    pub start: c_uint,
    pub size: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlComputeInstanceProfileInfo_t {
    pub id: c_uint,
    pub sliceCount: c_uint,
    pub instanceCount: c_uint,
    pub multiprocessorCount: c_uint,
    pub sharedCopyEngineCount: c_uint,
    pub sharedDecoderCount: c_uint,
    pub sharedEncoderCount: c_uint,
    pub sharedJpegCount: c_uint,
    pub sharedOfaCount: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlComputeInstanceProfileInfo_v2_t {
    pub version: c_uint,
    pub id: c_uint,
    pub sliceCount: c_uint,
    pub instanceCount: c_uint,
    pub multiprocessorCount: c_uint,
    pub sharedCopyEngineCount: c_uint,
    pub sharedDecoderCount: c_uint,
    pub sharedEncoderCount: c_uint,
    pub sharedJpegCount: c_uint,
    pub sharedOfaCount: c_uint,
    pub name: [c_char; NVML_DEVICE_NAME_V2_BUFFER_SIZE],
}

pub const nvmlComputeInstanceProfileInfo_v2: c_uint =
    nvml_struct_version!(nvmlComputeInstanceProfileInfo_v2_t, 2);

impl Default for nvmlComputeInstanceProfileInfo_v2_t {
    fn default() -> Self {
        let mut info: Self = unsafe { std::mem::zeroed() };
        info.version = nvmlComputeInstanceProfileInfo_v2;
        info
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlComputeInstanceInfo_t {
    pub device: nvmlDevice_t,
    pub gpuInstance: nvmlGpuInstance_t,
    pub id: c_uint,
    pub profileId: c_uint,
    pub placement: nvmlComputeInstancePlacement_t,
}

impl Default for nvmlComputeInstanceInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_profile_id_values() {
        assert_eq!(NVML_GPU_INSTANCE_PROFILE_7_SLICE, 4);
        assert_eq!(NVML_GPU_INSTANCE_PROFILE_6_SLICE, 6);
        assert_eq!(NVML_GPU_INSTANCE_PROFILE_1_SLICE_REV2, 9);
        assert_eq!(NVML_COMPUTE_INSTANCE_PROFILE_COUNT, 8);
    }

    #[test]
    fn test_gpu_instance_profile_info_layouts() {
        assert_eq!(size_of::<nvmlGpuInstanceProfileInfo_t>(), 48);
        assert_eq!(offset_of!(nvmlGpuInstanceProfileInfo_t, memorySizeMB), 40);

        assert_eq!(size_of::<nvmlGpuInstanceProfileInfo_v2_t>(), 152);
        assert_eq!(offset_of!(nvmlGpuInstanceProfileInfo_v2_t, memorySizeMB), 48);
        assert_eq!(offset_of!(nvmlGpuInstanceProfileInfo_v2_t, name), 56);
        assert_eq!(nvmlGpuInstanceProfileInfo_v2, 152 | (2 << 24));
    }

    #[test]
    fn test_compute_instance_profile_info_layouts() {
        assert_eq!(size_of::<nvmlComputeInstanceProfileInfo_t>(), 36);
        assert_eq!(size_of::<nvmlComputeInstanceProfileInfo_v2_t>(), 136);
        assert_eq!(offset_of!(nvmlComputeInstanceProfileInfo_v2_t, name), 40);
        assert_eq!(nvmlComputeInstanceProfileInfo_v2, 136 | (2 << 24));
    }

    #[test]
    fn test_instance_info_layouts() {
        assert_eq!(size_of::<nvmlGpuInstanceInfo_t>(), 24);
        assert_eq!(offset_of!(nvmlGpuInstanceInfo_t, placement), 16);

        assert_eq!(size_of::<nvmlComputeInstanceInfo_t>(), 32);
        assert_eq!(offset_of!(nvmlComputeInstanceInfo_t, id), 16);
        assert_eq!(offset_of!(nvmlComputeInstanceInfo_t, placement), 24);
    }

    #[test]
    fn test_versioned_default_presets_version() {
        let gi = nvmlGpuInstanceProfileInfo_v2_t::default();
        assert_eq!(gi.version, nvmlGpuInstanceProfileInfo_v2);
        let ci = nvmlComputeInstanceProfileInfo_v2_t::default();
        assert_eq!(ci.version, nvmlComputeInstanceProfileInfo_v2);
    }
}
