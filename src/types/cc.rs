//! Confidential computing types
//!
//! CC state is system-wide (CPU TEE plus GPU capability) with per-device
//! protected memory carve-outs and attestation material. The certificate
//! and report structs are large fixed buffers with explicit length fields.

use std::os::raw::{c_uchar, c_uint, c_ulonglong};

use crate::nvml_struct_version;

pub const NVML_CC_SYSTEM_CPU_CAPS_NONE: c_uint = 0;
pub const NVML_CC_SYSTEM_CPU_CAPS_AMD_SEV: c_uint = 1;
pub const NVML_CC_SYSTEM_CPU_CAPS_INTEL_TDX: c_uint = 2;

pub const NVML_CC_SYSTEM_GPUS_CC_NOT_CAPABLE: c_uint = 0;
pub const NVML_CC_SYSTEM_GPUS_CC_CAPABLE: c_uint = 1;

pub const NVML_CC_SYSTEM_ENVIRONMENT_UNAVAILABLE: c_uint = 0;
pub const NVML_CC_SYSTEM_ENVIRONMENT_SIM: c_uint = 1;
pub const NVML_CC_SYSTEM_ENVIRONMENT_PROD: c_uint = 2;

pub const NVML_CC_SYSTEM_FEATURE_DISABLED: c_uint = 0;
pub const NVML_CC_SYSTEM_FEATURE_ENABLED: c_uint = 1;

pub const NVML_CC_SYSTEM_DEVTOOLS_MODE_OFF: c_uint = 0;
pub const NVML_CC_SYSTEM_DEVTOOLS_MODE_ON: c_uint = 1;

pub const NVML_CC_SYSTEM_MULTIGPU_NONE: c_uint = 0;
pub const NVML_CC_SYSTEM_MULTIGPU_PROTECTED_PCIE: c_uint = 1;

pub const NVML_CC_ACCEPTING_CLIENT_REQUESTS_FALSE: c_uint = 0;
pub const NVML_CC_ACCEPTING_CLIENT_REQUESTS_TRUE: c_uint = 1;

pub const NVML_GPU_CERT_CHAIN_SIZE: usize = 0x1000;
pub const NVML_GPU_ATTESTATION_CERT_CHAIN_SIZE: usize = 0x1400;
pub const NVML_CC_GPU_CEC_NONCE_SIZE: usize = 0x20;
pub const NVML_CC_GPU_ATTESTATION_REPORT_SIZE: usize = 0x2000;
pub const NVML_CC_GPU_CEC_ATTESTATION_REPORT_SIZE: usize = 0x1000;

/// Which TEEs the platform offers, CPU side and GPU side.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlConfComputeSystemCaps_t {
    pub cpuCaps: c_uint,
    pub gpusCaps: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlConfComputeSystemState_t {
    pub environment: c_uint,
    pub ccFeature: c_uint,
    pub devToolsMode: c_uint,
}

/// Versioned replacement for the state query, adding multi-GPU mode.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlSystemConfComputeSettings_v1_t {
    pub version: c_uint,
    pub environment: c_uint,
    pub ccFeature: c_uint,
    pub devToolsMode: c_uint,
    pub multiGpuMode: c_uint,
}
pub type nvmlSystemConfComputeSettings_t = nvmlSystemConfComputeSettings_v1_t;

pub const nvmlSystemConfComputeSettings_v1: c_uint =
    nvml_struct_version!(nvmlSystemConfComputeSettings_v1_t, 1);

/// Protected/unprotected memory split, in KiB.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlConfComputeMemSizeInfo_t {
    pub protectedMemSizeKib: c_ulonglong,
    pub unprotectedMemSizeKib: c_ulonglong,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlConfComputeGpuCertificate_t {
    pub certChainSize: c_uint,
    pub attestationCertChainSize: c_uint,
    pub certChain: [c_uchar; NVML_GPU_CERT_CHAIN_SIZE],
    pub attestationCertChain: [c_uchar; NVML_GPU_ATTESTATION_CERT_CHAIN_SIZE],
}

impl Default for nvmlConfComputeGpuCertificate_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct nvmlConfComputeGpuAttestationReport_t {
    pub isCecAttestationReportPresent: c_uint,
    pub attestationReportSize: c_uint,
    pub cecAttestationReportSize: c_uint,
    pub nonce: [c_uchar; NVML_CC_GPU_CEC_NONCE_SIZE],
    pub attestationReport: [c_uchar; NVML_CC_GPU_ATTESTATION_REPORT_SIZE],
    pub cecAttestationReport: [c_uchar; NVML_CC_GPU_CEC_ATTESTATION_REPORT_SIZE],
}

impl Default for nvmlConfComputeGpuAttestationReport_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Key rotation threshold setter; `maxAttackerAdvantage` bounds the
/// information an attacker could gain before the channel keys rotate.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlConfComputeSetKeyRotationThresholdInfo_v1_t {
    pub version: c_uint,
    pub maxAttackerAdvantage: c_ulonglong,
}
pub type nvmlConfComputeSetKeyRotationThresholdInfo_t =
    nvmlConfComputeSetKeyRotationThresholdInfo_v1_t;

pub const nvmlConfComputeSetKeyRotationThresholdInfo_v1: c_uint =
    nvml_struct_version!(nvmlConfComputeSetKeyRotationThresholdInfo_v1_t, 1);

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlConfComputeGetKeyRotationThresholdInfo_v1_t {
    pub version: c_uint,
    pub attackerAdvantage: c_ulonglong,
}
pub type nvmlConfComputeGetKeyRotationThresholdInfo_t =
    nvmlConfComputeGetKeyRotationThresholdInfo_v1_t;

pub const nvmlConfComputeGetKeyRotationThresholdInfo_v1: c_uint =
    nvml_struct_version!(nvmlConfComputeGetKeyRotationThresholdInfo_v1_t, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_cc_constant_values() {
        assert_eq!(NVML_CC_SYSTEM_CPU_CAPS_INTEL_TDX, 2);
        assert_eq!(NVML_CC_SYSTEM_ENVIRONMENT_PROD, 2);
        assert_eq!(NVML_GPU_CERT_CHAIN_SIZE, 4096);
        assert_eq!(NVML_CC_GPU_ATTESTATION_REPORT_SIZE, 8192);
    }

    #[test]
    fn test_settings_layout() {
        assert_eq!(size_of::<nvmlSystemConfComputeSettings_v1_t>(), 20);
        assert_eq!(nvmlSystemConfComputeSettings_v1, 20 | (1 << 24));
    }

    #[test]
    fn test_certificate_layout() {
        assert_eq!(
            size_of::<nvmlConfComputeGpuCertificate_t>(),
            8 + NVML_GPU_CERT_CHAIN_SIZE + NVML_GPU_ATTESTATION_CERT_CHAIN_SIZE
        );
        assert_eq!(offset_of!(nvmlConfComputeGpuCertificate_t, certChain), 8);
    }

    #[test]
    fn test_attestation_report_layout() {
        assert_eq!(
            size_of::<nvmlConfComputeGpuAttestationReport_t>(),
            12 + NVML_CC_GPU_CEC_NONCE_SIZE
                + NVML_CC_GPU_ATTESTATION_REPORT_SIZE
                + NVML_CC_GPU_CEC_ATTESTATION_REPORT_SIZE
        );
        assert_eq!(offset_of!(nvmlConfComputeGpuAttestationReport_t, nonce), 12);
    }

    #[test]
    fn test_key_rotation_layouts() {
        assert_eq!(size_of::<nvmlConfComputeSetKeyRotationThresholdInfo_v1_t>(), 16);
        assert_eq!(
            nvmlConfComputeSetKeyRotationThresholdInfo_v1,
            16 | (1 << 24)
        );
        assert_eq!(
            offset_of!(nvmlConfComputeGetKeyRotationThresholdInfo_v1_t, attackerAdvantage),
            8
        );
    }
}
