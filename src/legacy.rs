//! Unversioned legacy names
//!
//! The C header redirects the original unversioned names to their current
//! versioned implementations (`#define nvmlInit nvmlInit_v2` and friends)
//! unless `NVML_NO_UNVERSIONED_FUNC_DEFS` is set. The `legacy-functions`
//! cargo feature plays the same role here: each alias method below calls
//! the versioned table entry and therefore carries the versioned
//! signature, exactly as C callers see after macro substitution.

use std::os::raw::{c_char, c_uint};

use crate::api::device::DeviceApi;
use crate::api::event::EventApi;
use crate::api::init::InitApi;
use crate::api::mig::MigApi;
use crate::api::vgpu::VgpuApi;
use crate::types::core::{nvmlDevice_t, nvmlEventSet_t, nvmlReturn_t};
use crate::types::device::{
    nvmlDetachGpuState_t, nvmlDeviceAttributes_t, nvmlExcludedDeviceInfo_t, nvmlPciInfo_t,
    nvmlPcieLinkState_t, nvmlProcessInfo_t,
};
use crate::types::event::nvmlEventData_t;
use crate::types::mig::{nvmlComputeInstanceInfo_t, nvmlGpuInstancePlacement_t};
use crate::types::vgpu::{
    nvmlGridLicensableFeatures_t, nvmlVgpuInstance_t, nvmlVgpuLicenseInfo_t,
};

/// Pre-rename name for [`nvmlExcludedDeviceInfo_t`].
pub type nvmlBlacklistDeviceInfo_t = nvmlExcludedDeviceInfo_t;

impl InitApi {
    /// Alias for `nvmlInit_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlInit(&self) -> nvmlReturn_t {
        self.nvmlInit_v2()
    }
}

impl DeviceApi {
    /// Alias for `nvmlDeviceGetCount_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetCount(&self, deviceCount: *mut c_uint) -> nvmlReturn_t {
        self.nvmlDeviceGetCount_v2(deviceCount)
    }

    /// Alias for `nvmlDeviceGetHandleByIndex_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetHandleByIndex(
        &self,
        index: c_uint,
        device: *mut nvmlDevice_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetHandleByIndex_v2(index, device)
    }

    /// Alias for `nvmlDeviceGetHandleByPciBusId_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetHandleByPciBusId(
        &self,
        pciBusId: *const c_char,
        device: *mut nvmlDevice_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetHandleByPciBusId_v2(pciBusId, device)
    }

    /// Alias for `nvmlDeviceGetPciInfo_v3`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetPciInfo(
        &self,
        device: nvmlDevice_t,
        pci: *mut nvmlPciInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetPciInfo_v3(device, pci)
    }

    /// Alias for `nvmlDeviceGetNvLinkRemotePciInfo_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetNvLinkRemotePciInfo(
        &self,
        device: nvmlDevice_t,
        link: c_uint,
        pci: *mut nvmlPciInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetNvLinkRemotePciInfo_v2(device, link, pci)
    }

    /// Alias for `nvmlDeviceGetAttributes_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetAttributes(
        &self,
        device: nvmlDevice_t,
        attributes: *mut nvmlDeviceAttributes_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetAttributes_v2(device, attributes)
    }

    /// Alias for `nvmlDeviceGetComputeRunningProcesses_v3`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetComputeRunningProcesses(
        &self,
        device: nvmlDevice_t,
        infoCount: *mut c_uint,
        infos: *mut nvmlProcessInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetComputeRunningProcesses_v3(device, infoCount, infos)
    }

    /// Alias for `nvmlDeviceGetGraphicsRunningProcesses_v3`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetGraphicsRunningProcesses(
        &self,
        device: nvmlDevice_t,
        infoCount: *mut c_uint,
        infos: *mut nvmlProcessInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetGraphicsRunningProcesses_v3(device, infoCount, infos)
    }

    /// Alias for `nvmlDeviceGetMPSComputeRunningProcesses_v3`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetMPSComputeRunningProcesses(
        &self,
        device: nvmlDevice_t,
        infoCount: *mut c_uint,
        infos: *mut nvmlProcessInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetMPSComputeRunningProcesses_v3(device, infoCount, infos)
    }

    /// Alias for `nvmlDeviceRemoveGpu_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceRemoveGpu(
        &self,
        pciInfo: *mut nvmlPciInfo_t,
        gpuState: nvmlDetachGpuState_t,
        linkState: nvmlPcieLinkState_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceRemoveGpu_v2(pciInfo, gpuState, linkState)
    }

    /// Pre-rename alias for `nvmlGetExcludedDeviceCount`.
    ///
    /// # Safety
    /// Same contract as the renamed entry point.
    pub unsafe fn nvmlGetBlacklistDeviceCount(&self, deviceCount: *mut c_uint) -> nvmlReturn_t {
        self.nvmlGetExcludedDeviceCount(deviceCount)
    }

    /// Pre-rename alias for `nvmlGetExcludedDeviceInfoByIndex`.
    ///
    /// # Safety
    /// Same contract as the renamed entry point.
    pub unsafe fn nvmlGetBlacklistDeviceInfoByIndex(
        &self,
        index: c_uint,
        info: *mut nvmlBlacklistDeviceInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlGetExcludedDeviceInfoByIndex(index, info)
    }
}

impl EventApi {
    /// Alias for `nvmlEventSetWait_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlEventSetWait(
        &self,
        set: nvmlEventSet_t,
        data: *mut nvmlEventData_t,
        timeoutms: c_uint,
    ) -> nvmlReturn_t {
        self.nvmlEventSetWait_v2(set, data, timeoutms)
    }
}

impl MigApi {
    /// Alias for `nvmlDeviceGetGpuInstancePossiblePlacements_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetGpuInstancePossiblePlacements(
        &self,
        device: nvmlDevice_t,
        profileId: c_uint,
        placements: *mut nvmlGpuInstancePlacement_t,
        count: *mut c_uint,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetGpuInstancePossiblePlacements_v2(device, profileId, placements, count)
    }

    /// Alias for `nvmlComputeInstanceGetInfo_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlComputeInstanceGetInfo(
        &self,
        computeInstance: crate::types::core::nvmlComputeInstance_t,
        info: *mut nvmlComputeInstanceInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlComputeInstanceGetInfo_v2(computeInstance, info)
    }
}

impl VgpuApi {
    /// Alias for `nvmlVgpuInstanceGetLicenseInfo_v2`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlVgpuInstanceGetLicenseInfo(
        &self,
        vgpuInstance: nvmlVgpuInstance_t,
        licenseInfo: *mut nvmlVgpuLicenseInfo_t,
    ) -> nvmlReturn_t {
        self.nvmlVgpuInstanceGetLicenseInfo_v2(vgpuInstance, licenseInfo)
    }

    /// Alias for `nvmlDeviceGetGridLicensableFeatures_v4`.
    ///
    /// # Safety
    /// Same contract as the versioned entry point.
    pub unsafe fn nvmlDeviceGetGridLicensableFeatures(
        &self,
        device: nvmlDevice_t,
        pGridLicensableFeatures: *mut nvmlGridLicensableFeatures_t,
    ) -> nvmlReturn_t {
        self.nvmlDeviceGetGridLicensableFeatures_v4(device, pGridLicensableFeatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_aliases_dispatch_to_versioned_entries() {
        let init = InitApi::empty();
        assert_eq!(unsafe { init.nvmlInit() }, NVML_ERROR_FUNCTION_NOT_FOUND);

        let device = DeviceApi::empty();
        let mut count = 0;
        assert_eq!(
            unsafe { device.nvmlDeviceGetCount(&mut count) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );

        let event = EventApi::empty();
        let mut data = nvmlEventData_t::default();
        assert_eq!(
            unsafe { event.nvmlEventSetWait(std::ptr::null_mut(), &mut data, 0) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
    }
}
