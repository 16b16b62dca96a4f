//! Device queries and commands
//!
//! The main body of the API. Query calls fill caller-allocated output;
//! count-then-fetch calls follow the NVML convention of returning
//! `NVML_ERROR_INSUFFICIENT_SIZE` with the required count written back.
//! Command calls generally need root or an admin-granted restriction.

use std::os::raw::{c_char, c_int, c_uint, c_ulong, c_ulonglong};

use crate::types::core::{
    nvmlDevice_t, nvmlEnableState_t, nvmlFieldValue_t, nvmlPerfPolicyType_t, nvmlSample_t,
    nvmlSamplingType_t, nvmlValueType_t, nvmlViolationTime_t,
};
use crate::types::device::*;

nvml_api_group! {
    pub struct DeviceApi {
        // Enumeration and identification
        fn nvmlDeviceGetCount_v2(deviceCount: *mut c_uint);
        fn nvmlDeviceGetHandleByIndex_v2(index: c_uint, device: *mut nvmlDevice_t);
        fn nvmlDeviceGetHandleBySerial(serial: *const c_char, device: *mut nvmlDevice_t);
        fn nvmlDeviceGetHandleByUUID(uuid: *const c_char, device: *mut nvmlDevice_t);
        fn nvmlDeviceGetHandleByPciBusId_v2(pciBusId: *const c_char, device: *mut nvmlDevice_t);
        fn nvmlDeviceGetName(device: nvmlDevice_t, name: *mut c_char, length: c_uint);
        fn nvmlDeviceGetBrand(device: nvmlDevice_t, brand: *mut nvmlBrandType_t);
        fn nvmlDeviceGetIndex(device: nvmlDevice_t, index: *mut c_uint);
        fn nvmlDeviceGetSerial(device: nvmlDevice_t, serial: *mut c_char, length: c_uint);
        fn nvmlDeviceGetUUID(device: nvmlDevice_t, uuid: *mut c_char, length: c_uint);
        fn nvmlDeviceGetMinorNumber(device: nvmlDevice_t, minorNumber: *mut c_uint);
        fn nvmlDeviceGetBoardPartNumber(device: nvmlDevice_t, partNumber: *mut c_char, length: c_uint);
        fn nvmlDeviceGetBoardId(device: nvmlDevice_t, boardId: *mut c_uint);
        fn nvmlDeviceGetMultiGpuBoard(device: nvmlDevice_t, multiGpuBool: *mut c_uint);
        fn nvmlDeviceGetArchitecture(device: nvmlDevice_t, arch: *mut nvmlDeviceArchitecture_t);
        fn nvmlDeviceGetAttributes_v2(device: nvmlDevice_t, attributes: *mut nvmlDeviceAttributes_t);
        fn nvmlDeviceGetNumGpuCores(device: nvmlDevice_t, numCores: *mut c_uint);
        fn nvmlDeviceGetIrqNum(device: nvmlDevice_t, irqNum: *mut c_uint);
        fn nvmlDeviceOnSameBoard(device1: nvmlDevice_t, device2: nvmlDevice_t, onSameBoard: *mut c_int);
        fn nvmlDeviceGetCudaComputeCapability(device: nvmlDevice_t, major: *mut c_int, minor: *mut c_int);

        // InfoROM
        fn nvmlDeviceGetInforomVersion(
            device: nvmlDevice_t,
            object: nvmlInforomObject_t,
            version: *mut c_char,
            length: c_uint,
        );
        fn nvmlDeviceGetInforomImageVersion(device: nvmlDevice_t, version: *mut c_char, length: c_uint);
        fn nvmlDeviceGetInforomConfigurationChecksum(device: nvmlDevice_t, checksum: *mut c_uint);
        fn nvmlDeviceValidateInforom(device: nvmlDevice_t);

        // Display / persistence
        fn nvmlDeviceGetDisplayMode(device: nvmlDevice_t, display: *mut nvmlEnableState_t);
        fn nvmlDeviceGetDisplayActive(device: nvmlDevice_t, isActive: *mut nvmlEnableState_t);
        fn nvmlDeviceGetPersistenceMode(device: nvmlDevice_t, mode: *mut nvmlEnableState_t);
        fn nvmlDeviceSetPersistenceMode(device: nvmlDevice_t, mode: nvmlEnableState_t);

        // PCI
        fn nvmlDeviceGetPciInfo_v3(device: nvmlDevice_t, pci: *mut nvmlPciInfo_t);
        fn nvmlDeviceGetPciInfoExt(device: nvmlDevice_t, pci: *mut nvmlPciInfoExt_t);
        fn nvmlDeviceGetMaxPcieLinkGeneration(device: nvmlDevice_t, maxLinkGen: *mut c_uint);
        fn nvmlDeviceGetGpuMaxPcieLinkGeneration(device: nvmlDevice_t, maxLinkGenDevice: *mut c_uint);
        fn nvmlDeviceGetMaxPcieLinkWidth(device: nvmlDevice_t, maxLinkWidth: *mut c_uint);
        fn nvmlDeviceGetCurrPcieLinkGeneration(device: nvmlDevice_t, currLinkGen: *mut c_uint);
        fn nvmlDeviceGetCurrPcieLinkWidth(device: nvmlDevice_t, currLinkWidth: *mut c_uint);
        fn nvmlDeviceGetPcieThroughput(
            device: nvmlDevice_t,
            counter: nvmlPcieUtilCounter_t,
            value: *mut c_uint,
        );
        fn nvmlDeviceGetPcieReplayCounter(device: nvmlDevice_t, value: *mut c_uint);
        fn nvmlDeviceGetPcieSpeed(device: nvmlDevice_t, pcieSpeed: *mut c_uint);
        fn nvmlDeviceGetPcieLinkMaxSpeed(device: nvmlDevice_t, maxSpeed: *mut c_uint);
        fn nvmlDeviceGetBusType(device: nvmlDevice_t, busType: *mut nvmlBusType_t);

        // Clocks
        fn nvmlDeviceGetClockInfo(device: nvmlDevice_t, clockType: nvmlClockType_t, clock: *mut c_uint);
        fn nvmlDeviceGetMaxClockInfo(device: nvmlDevice_t, clockType: nvmlClockType_t, clock: *mut c_uint);
        fn nvmlDeviceGetApplicationsClock(
            device: nvmlDevice_t,
            clockType: nvmlClockType_t,
            clockMHz: *mut c_uint,
        );
        fn nvmlDeviceGetDefaultApplicationsClock(
            device: nvmlDevice_t,
            clockType: nvmlClockType_t,
            clockMHz: *mut c_uint,
        );
        fn nvmlDeviceGetClock(
            device: nvmlDevice_t,
            clockType: nvmlClockType_t,
            clockId: nvmlClockId_t,
            clockMHz: *mut c_uint,
        );
        fn nvmlDeviceGetMaxCustomerBoostClock(
            device: nvmlDevice_t,
            clockType: nvmlClockType_t,
            clockMHz: *mut c_uint,
        );
        fn nvmlDeviceGetSupportedMemoryClocks(
            device: nvmlDevice_t,
            count: *mut c_uint,
            clocksMHz: *mut c_uint,
        );
        fn nvmlDeviceGetSupportedGraphicsClocks(
            device: nvmlDevice_t,
            memoryClockMHz: c_uint,
            count: *mut c_uint,
            clocksMHz: *mut c_uint,
        );
        fn nvmlDeviceGetAutoBoostedClocksEnabled(
            device: nvmlDevice_t,
            isEnabled: *mut nvmlEnableState_t,
            defaultIsEnabled: *mut nvmlEnableState_t,
        );
        fn nvmlDeviceSetAutoBoostedClocksEnabled(device: nvmlDevice_t, enabled: nvmlEnableState_t);
        fn nvmlDeviceSetDefaultAutoBoostedClocksEnabled(
            device: nvmlDevice_t,
            enabled: nvmlEnableState_t,
            flags: c_uint,
        );
        fn nvmlDeviceSetApplicationsClocks(
            device: nvmlDevice_t,
            memClockMHz: c_uint,
            graphicsClockMHz: c_uint,
        );
        fn nvmlDeviceResetApplicationsClocks(device: nvmlDevice_t);
        /// `minGpuClockMHz`/`maxGpuClockMHz` also accept `nvmlClockLimitId_t`
        /// sentinels.
        fn nvmlDeviceSetGpuLockedClocks(
            device: nvmlDevice_t,
            minGpuClockMHz: c_uint,
            maxGpuClockMHz: c_uint,
        );
        fn nvmlDeviceResetGpuLockedClocks(device: nvmlDevice_t);
        fn nvmlDeviceSetMemoryLockedClocks(
            device: nvmlDevice_t,
            minMemClockMHz: c_uint,
            maxMemClockMHz: c_uint,
        );
        fn nvmlDeviceResetMemoryLockedClocks(device: nvmlDevice_t);
        fn nvmlDeviceGetMinMaxClockOfPState(
            device: nvmlDevice_t,
            clockType: nvmlClockType_t,
            pstate: nvmlPstates_t,
            minClockMHz: *mut c_uint,
            maxClockMHz: *mut c_uint,
        );
        fn nvmlDeviceGetSupportedPerformanceStates(
            device: nvmlDevice_t,
            pstates: *mut nvmlPstates_t,
            size: c_uint,
        );
        fn nvmlDeviceGetGpcClkVfOffset(device: nvmlDevice_t, offset: *mut c_int);
        fn nvmlDeviceSetGpcClkVfOffset(device: nvmlDevice_t, offset: c_int);
        fn nvmlDeviceGetMemClkVfOffset(device: nvmlDevice_t, offset: *mut c_int);
        fn nvmlDeviceSetMemClkVfOffset(device: nvmlDevice_t, offset: c_int);
        fn nvmlDeviceGetGpcClkMinMaxVfOffset(
            device: nvmlDevice_t,
            minOffset: *mut c_int,
            maxOffset: *mut c_int,
        );
        fn nvmlDeviceGetMemClkMinMaxVfOffset(
            device: nvmlDevice_t,
            minOffset: *mut c_int,
            maxOffset: *mut c_int,
        );
        fn nvmlDeviceGetAdaptiveClockInfoStatus(device: nvmlDevice_t, adaptiveClockStatus: *mut c_uint);
        fn nvmlDeviceGetClkMonStatus(device: nvmlDevice_t, status: *mut nvmlClkMonStatus_t);
        fn nvmlDeviceGetCurrentClocksEventReasons(
            device: nvmlDevice_t,
            clocksEventReasons: *mut c_ulonglong,
        );
        fn nvmlDeviceGetSupportedClocksEventReasons(
            device: nvmlDevice_t,
            supportedClocksEventReasons: *mut c_ulonglong,
        );
        fn nvmlDeviceGetCurrentClocksThrottleReasons(
            device: nvmlDevice_t,
            clocksThrottleReasons: *mut c_ulonglong,
        );
        fn nvmlDeviceGetSupportedClocksThrottleReasons(
            device: nvmlDevice_t,
            supportedClocksThrottleReasons: *mut c_ulonglong,
        );

        // Fans and thermal
        fn nvmlDeviceGetFanSpeed(device: nvmlDevice_t, speed: *mut c_uint);
        fn nvmlDeviceGetFanSpeed_v2(device: nvmlDevice_t, fan: c_uint, speed: *mut c_uint);
        fn nvmlDeviceGetFanSpeedRPM(device: nvmlDevice_t, fanSpeed: *mut nvmlFanSpeedInfo_t);
        fn nvmlDeviceGetTargetFanSpeed(device: nvmlDevice_t, fan: c_uint, targetSpeed: *mut c_uint);
        fn nvmlDeviceGetMinMaxFanSpeed(device: nvmlDevice_t, minSpeed: *mut c_uint, maxSpeed: *mut c_uint);
        fn nvmlDeviceGetFanControlPolicy_v2(
            device: nvmlDevice_t,
            fan: c_uint,
            policy: *mut nvmlFanControlPolicy_t,
        );
        fn nvmlDeviceSetFanControlPolicy(
            device: nvmlDevice_t,
            fan: c_uint,
            policy: nvmlFanControlPolicy_t,
        );
        fn nvmlDeviceSetFanSpeed_v2(device: nvmlDevice_t, fan: c_uint, speed: c_uint);
        fn nvmlDeviceSetDefaultFanSpeed_v2(device: nvmlDevice_t, fan: c_uint);
        fn nvmlDeviceGetNumFans(device: nvmlDevice_t, numFans: *mut c_uint);
        fn nvmlDeviceGetCoolerInfo(device: nvmlDevice_t, coolerInfo: *mut nvmlCoolerInfo_t);
        fn nvmlDeviceGetTemperature(
            device: nvmlDevice_t,
            sensorType: nvmlTemperatureSensors_t,
            temp: *mut c_uint,
        );
        fn nvmlDeviceGetTemperatureV(device: nvmlDevice_t, temperature: *mut nvmlTemperature_t);
        fn nvmlDeviceGetTemperatureThreshold(
            device: nvmlDevice_t,
            thresholdType: nvmlTemperatureThresholds_t,
            temp: *mut c_uint,
        );
        /// `temp` is in/out in the C prototype.
        fn nvmlDeviceSetTemperatureThreshold(
            device: nvmlDevice_t,
            thresholdType: nvmlTemperatureThresholds_t,
            temp: *mut c_int,
        );
        fn nvmlDeviceGetMarginTemperature(
            device: nvmlDevice_t,
            marginTempInfo: *mut nvmlMarginTemperature_t,
        );
        fn nvmlDeviceGetThermalSettings(
            device: nvmlDevice_t,
            sensorIndex: c_uint,
            pThermalSettings: *mut nvmlGpuThermalSettings_t,
        );

        // Performance and power
        fn nvmlDeviceGetPerformanceState(device: nvmlDevice_t, pState: *mut nvmlPstates_t);
        fn nvmlDeviceGetPowerState(device: nvmlDevice_t, pState: *mut nvmlPstates_t);
        fn nvmlDeviceGetDynamicPstatesInfo(
            device: nvmlDevice_t,
            pDynamicPstatesInfo: *mut nvmlGpuDynamicPstatesInfo_t,
        );
        fn nvmlDeviceGetPowerManagementMode(device: nvmlDevice_t, mode: *mut nvmlEnableState_t);
        fn nvmlDeviceGetPowerManagementLimit(device: nvmlDevice_t, limit: *mut c_uint);
        fn nvmlDeviceGetPowerManagementLimitConstraints(
            device: nvmlDevice_t,
            minLimit: *mut c_uint,
            maxLimit: *mut c_uint,
        );
        fn nvmlDeviceGetPowerManagementDefaultLimit(device: nvmlDevice_t, defaultLimit: *mut c_uint);
        fn nvmlDeviceGetPowerUsage(device: nvmlDevice_t, power: *mut c_uint);
        fn nvmlDeviceGetTotalEnergyConsumption(device: nvmlDevice_t, energy: *mut c_ulonglong);
        fn nvmlDeviceGetEnforcedPowerLimit(device: nvmlDevice_t, limit: *mut c_uint);
        fn nvmlDeviceGetPowerSource(device: nvmlDevice_t, powerSource: *mut nvmlPowerSource_t);
        fn nvmlDeviceSetPowerManagementLimit(device: nvmlDevice_t, limit: c_uint);
        fn nvmlDeviceSetPowerManagementLimit_v2(
            device: nvmlDevice_t,
            powerValue: *mut nvmlPowerValue_v2_t,
        );
        fn nvmlDeviceGetGpuOperationMode(
            device: nvmlDevice_t,
            current: *mut nvmlGpuOperationMode_t,
            pending: *mut nvmlGpuOperationMode_t,
        );
        fn nvmlDeviceSetGpuOperationMode(device: nvmlDevice_t, mode: nvmlGpuOperationMode_t);
        fn nvmlDeviceGetViolationStatus(
            device: nvmlDevice_t,
            perfPolicyType: nvmlPerfPolicyType_t,
            violTime: *mut nvmlViolationTime_t,
        );

        // Memory
        fn nvmlDeviceGetMemoryInfo(device: nvmlDevice_t, memory: *mut nvmlMemory_t);
        fn nvmlDeviceGetMemoryInfo_v2(device: nvmlDevice_t, memory: *mut nvmlMemory_v2_t);
        fn nvmlDeviceGetBAR1MemoryInfo(device: nvmlDevice_t, bar1Memory: *mut nvmlBAR1Memory_t);
        fn nvmlDeviceGetMemoryBusWidth(device: nvmlDevice_t, busWidth: *mut c_uint);

        // Compute mode and utilization
        fn nvmlDeviceGetComputeMode(device: nvmlDevice_t, mode: *mut nvmlComputeMode_t);
        fn nvmlDeviceSetComputeMode(device: nvmlDevice_t, mode: nvmlComputeMode_t);
        fn nvmlDeviceGetUtilizationRates(device: nvmlDevice_t, utilization: *mut nvmlUtilization_t);
        fn nvmlDeviceGetSamples(
            device: nvmlDevice_t,
            samplingType: nvmlSamplingType_t,
            lastSeenTimeStamp: c_ulonglong,
            sampleValType: *mut nvmlValueType_t,
            sampleCount: *mut c_uint,
            samples: *mut nvmlSample_t,
        );
        fn nvmlDeviceGetFieldValues(
            device: nvmlDevice_t,
            valuesCount: c_int,
            values: *mut nvmlFieldValue_t,
        );
        fn nvmlDeviceClearFieldValues(
            device: nvmlDevice_t,
            valuesCount: c_int,
            values: *mut nvmlFieldValue_t,
        );

        // Encoder / decoder / FBC
        fn nvmlDeviceGetEncoderUtilization(
            device: nvmlDevice_t,
            utilization: *mut c_uint,
            samplingPeriodUs: *mut c_uint,
        );
        fn nvmlDeviceGetEncoderCapacity(
            device: nvmlDevice_t,
            encoderQueryType: nvmlEncoderType_t,
            encoderCapacity: *mut c_uint,
        );
        fn nvmlDeviceGetEncoderStats(
            device: nvmlDevice_t,
            sessionCount: *mut c_uint,
            averageFps: *mut c_uint,
            averageLatency: *mut c_uint,
        );
        fn nvmlDeviceGetEncoderSessions(
            device: nvmlDevice_t,
            sessionCount: *mut c_uint,
            sessionInfos: *mut nvmlEncoderSessionInfo_t,
        );
        fn nvmlDeviceGetDecoderUtilization(
            device: nvmlDevice_t,
            utilization: *mut c_uint,
            samplingPeriodUs: *mut c_uint,
        );
        fn nvmlDeviceGetJpgUtilization(
            device: nvmlDevice_t,
            utilization: *mut c_uint,
            samplingPeriodUs: *mut c_uint,
        );
        fn nvmlDeviceGetOfaUtilization(
            device: nvmlDevice_t,
            utilization: *mut c_uint,
            samplingPeriodUs: *mut c_uint,
        );
        fn nvmlDeviceGetFBCStats(device: nvmlDevice_t, fbcStats: *mut nvmlFBCStats_t);
        fn nvmlDeviceGetFBCSessions(
            device: nvmlDevice_t,
            sessionCount: *mut c_uint,
            sessionInfo: *mut nvmlFBCSessionInfo_t,
        );

        // ECC
        fn nvmlDeviceGetEccMode(
            device: nvmlDevice_t,
            current: *mut nvmlEnableState_t,
            pending: *mut nvmlEnableState_t,
        );
        fn nvmlDeviceGetDefaultEccMode(device: nvmlDevice_t, defaultMode: *mut nvmlEnableState_t);
        fn nvmlDeviceSetEccMode(device: nvmlDevice_t, ecc: nvmlEnableState_t);
        fn nvmlDeviceGetTotalEccErrors(
            device: nvmlDevice_t,
            errorType: nvmlMemoryErrorType_t,
            counterType: nvmlEccCounterType_t,
            eccCounts: *mut c_ulonglong,
        );
        fn nvmlDeviceGetDetailedEccErrors(
            device: nvmlDevice_t,
            errorType: nvmlMemoryErrorType_t,
            counterType: nvmlEccCounterType_t,
            eccCounts: *mut nvmlEccErrorCounts_t,
        );
        fn nvmlDeviceGetMemoryErrorCounter(
            device: nvmlDevice_t,
            errorType: nvmlMemoryErrorType_t,
            counterType: nvmlEccCounterType_t,
            locationType: nvmlMemoryLocation_t,
            count: *mut c_ulonglong,
        );
        fn nvmlDeviceClearEccErrorCounts(device: nvmlDevice_t, counterType: nvmlEccCounterType_t);

        // Retired pages / row remapping
        fn nvmlDeviceGetRetiredPages(
            device: nvmlDevice_t,
            cause: nvmlPageRetirementCause_t,
            pageCount: *mut c_uint,
            addresses: *mut c_ulonglong,
        );
        fn nvmlDeviceGetRetiredPages_v2(
            device: nvmlDevice_t,
            cause: nvmlPageRetirementCause_t,
            pageCount: *mut c_uint,
            addresses: *mut c_ulonglong,
            timestamps: *mut c_ulonglong,
        );
        fn nvmlDeviceGetRetiredPagesPendingStatus(
            device: nvmlDevice_t,
            isPending: *mut nvmlEnableState_t,
        );
        fn nvmlDeviceGetRemappedRows(
            device: nvmlDevice_t,
            corrRows: *mut c_uint,
            uncRows: *mut c_uint,
            isPending: *mut c_uint,
            failureOccurred: *mut c_uint,
        );
        fn nvmlDeviceGetRowRemapperHistogram(
            device: nvmlDevice_t,
            values: *mut nvmlRowRemapperHistogramValues_t,
        );

        // Processes and accounting
        fn nvmlDeviceGetComputeRunningProcesses_v3(
            device: nvmlDevice_t,
            infoCount: *mut c_uint,
            infos: *mut nvmlProcessInfo_t,
        );
        fn nvmlDeviceGetGraphicsRunningProcesses_v3(
            device: nvmlDevice_t,
            infoCount: *mut c_uint,
            infos: *mut nvmlProcessInfo_t,
        );
        fn nvmlDeviceGetMPSComputeRunningProcesses_v3(
            device: nvmlDevice_t,
            infoCount: *mut c_uint,
            infos: *mut nvmlProcessInfo_t,
        );
        fn nvmlDeviceGetProcessUtilization(
            device: nvmlDevice_t,
            utilization: *mut nvmlProcessUtilizationSample_t,
            processSamplesCount: *mut c_uint,
            lastSeenTimeStamp: c_ulonglong,
        );
        fn nvmlDeviceGetAccountingMode(device: nvmlDevice_t, mode: *mut nvmlEnableState_t);
        fn nvmlDeviceSetAccountingMode(device: nvmlDevice_t, mode: nvmlEnableState_t);
        fn nvmlDeviceGetAccountingStats(
            device: nvmlDevice_t,
            pid: c_uint,
            stats: *mut nvmlAccountingStats_t,
        );
        fn nvmlDeviceGetAccountingPids(device: nvmlDevice_t, count: *mut c_uint, pids: *mut c_uint);
        fn nvmlDeviceGetAccountingBufferSize(device: nvmlDevice_t, bufferSize: *mut c_uint);
        fn nvmlDeviceClearAccountingPids(device: nvmlDevice_t);

        // Driver model / VBIOS
        fn nvmlDeviceGetDriverModel_v2(
            device: nvmlDevice_t,
            current: *mut nvmlDriverModel_t,
            pending: *mut nvmlDriverModel_t,
        );
        fn nvmlDeviceSetDriverModel(device: nvmlDevice_t, driverModel: nvmlDriverModel_t, flags: c_uint);
        fn nvmlDeviceGetVbiosVersion(device: nvmlDevice_t, version: *mut c_char, length: c_uint);
        fn nvmlDeviceGetBridgeChipInfo(
            device: nvmlDevice_t,
            bridgeHierarchy: *mut nvmlBridgeChipHierarchy_t,
        );
        fn nvmlDeviceGetGspFirmwareVersion(device: nvmlDevice_t, version: *mut c_char);
        fn nvmlDeviceGetGspFirmwareMode(
            device: nvmlDevice_t,
            isEnabled: *mut c_uint,
            defaultMode: *mut c_uint,
        );

        // API restriction
        fn nvmlDeviceGetAPIRestriction(
            device: nvmlDevice_t,
            apiType: nvmlRestrictedAPI_t,
            isRestricted: *mut nvmlEnableState_t,
        );
        fn nvmlDeviceSetAPIRestriction(
            device: nvmlDevice_t,
            apiType: nvmlRestrictedAPI_t,
            isRestricted: nvmlEnableState_t,
        );

        // Topology, affinity, P2P
        fn nvmlDeviceGetTopologyCommonAncestor(
            device1: nvmlDevice_t,
            device2: nvmlDevice_t,
            pathInfo: *mut nvmlGpuTopologyLevel_t,
        );
        fn nvmlDeviceGetTopologyNearestGpus(
            device: nvmlDevice_t,
            level: nvmlGpuTopologyLevel_t,
            count: *mut c_uint,
            deviceArray: *mut nvmlDevice_t,
        );
        fn nvmlDeviceGetP2PStatus(
            device1: nvmlDevice_t,
            device2: nvmlDevice_t,
            p2pIndex: nvmlGpuP2PCapsIndex_t,
            p2pStatus: *mut nvmlGpuP2PStatus_t,
        );
        fn nvmlDeviceGetCpuAffinity(device: nvmlDevice_t, cpuSetSize: c_uint, cpuSet: *mut c_ulong);
        fn nvmlDeviceSetCpuAffinity(device: nvmlDevice_t);
        fn nvmlDeviceClearCpuAffinity(device: nvmlDevice_t);
        fn nvmlDeviceGetCpuAffinityWithinScope(
            device: nvmlDevice_t,
            cpuSetSize: c_uint,
            cpuSet: *mut c_ulong,
            scope: nvmlAffinityScope_t,
        );
        fn nvmlDeviceGetMemoryAffinity(
            device: nvmlDevice_t,
            nodeSetSize: c_uint,
            nodeSet: *mut c_ulong,
            scope: nvmlAffinityScope_t,
        );

        // NVLink
        fn nvmlDeviceGetNvLinkState(device: nvmlDevice_t, link: c_uint, isActive: *mut nvmlEnableState_t);
        fn nvmlDeviceGetNvLinkVersion(device: nvmlDevice_t, link: c_uint, version: *mut c_uint);
        fn nvmlDeviceGetNvLinkCapability(
            device: nvmlDevice_t,
            link: c_uint,
            capability: nvmlNvLinkCapability_t,
            capResult: *mut c_uint,
        );
        fn nvmlDeviceGetNvLinkRemotePciInfo_v2(device: nvmlDevice_t, link: c_uint, pci: *mut nvmlPciInfo_t);
        fn nvmlDeviceGetNvLinkErrorCounter(
            device: nvmlDevice_t,
            link: c_uint,
            counter: nvmlNvLinkErrorCounter_t,
            counterValue: *mut c_ulonglong,
        );
        fn nvmlDeviceResetNvLinkErrorCounters(device: nvmlDevice_t, link: c_uint);
        fn nvmlDeviceGetNvLinkRemoteDeviceType(
            device: nvmlDevice_t,
            link: c_uint,
            pNvLinkDeviceType: *mut nvmlIntNvLinkDeviceType_t,
        );

        // GPU fabric
        fn nvmlDeviceGetGpuFabricInfo(device: nvmlDevice_t, gpuFabricInfo: *mut nvmlGpuFabricInfo_t);
        fn nvmlDeviceGetGpuFabricInfoV(device: nvmlDevice_t, gpuFabricInfo: *mut nvmlGpuFabricInfoV_t);

        // Capabilities and DRAM encryption
        fn nvmlDeviceGetCapabilities(device: nvmlDevice_t, caps: *mut nvmlDeviceCapabilities_t);
        fn nvmlDeviceGetDramEncryptionMode(
            device: nvmlDevice_t,
            current: *mut nvmlDramEncryptionInfo_t,
            pending: *mut nvmlDramEncryptionInfo_t,
        );
        fn nvmlDeviceSetDramEncryptionMode(
            device: nvmlDevice_t,
            dramEncryption: *const nvmlDramEncryptionInfo_t,
        );

        // Drain state and field-service removal
        fn nvmlDeviceModifyDrainState(pciInfo: *mut nvmlPciInfo_t, newState: nvmlEnableState_t);
        fn nvmlDeviceQueryDrainState(pciInfo: *mut nvmlPciInfo_t, currentState: *mut nvmlEnableState_t);
        fn nvmlDeviceRemoveGpu_v2(
            pciInfo: *mut nvmlPciInfo_t,
            gpuState: nvmlDetachGpuState_t,
            linkState: nvmlPcieLinkState_t,
        );
        fn nvmlDeviceDiscoverGpus(pciInfo: *mut nvmlPciInfo_t);

        // Excluded devices
        fn nvmlGetExcludedDeviceCount(deviceCount: *mut c_uint);
        fn nvmlGetExcludedDeviceInfoByIndex(index: c_uint, info: *mut nvmlExcludedDeviceInfo_t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_versioned_struct_call_through_empty_table() {
        let api = DeviceApi::empty();
        let mut mem = nvmlMemory_v2_t::default();
        let ret = unsafe { api.nvmlDeviceGetMemoryInfo_v2(std::ptr::null_mut(), &mut mem) };
        assert_eq!(ret, NVML_ERROR_FUNCTION_NOT_FOUND);
        // The conduit must not touch caller state on failure.
        assert_eq!(mem.version, nvmlMemory_v2);
        assert_eq!(mem.used, 0);
    }

    #[test]
    fn test_device_table_covers_groups() {
        // One representative per section; a regression here means a whole
        // section was dropped.
        let api = DeviceApi::empty();
        assert!(api.nvmlDeviceGetHandleByIndex_v2.is_none());
        assert!(api.nvmlDeviceGetNvLinkErrorCounter.is_none());
        assert!(api.nvmlDeviceGetGpuFabricInfoV.is_none());
        assert!(api.nvmlGetExcludedDeviceInfoByIndex.is_none());
        assert!(api.nvmlDeviceSetFanSpeed_v2.is_none());
        assert!(DeviceApi::symbol_count() > 130);
    }
}
