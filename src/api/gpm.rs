//! GPM sampling and metric computation

use std::os::raw::c_uint;

use crate::types::core::nvmlDevice_t;
use crate::types::gpm::{nvmlGpmMetricsGet_t, nvmlGpmSample_t, nvmlGpmSupport_t};

nvml_api_group! {
    pub struct GpmApi {
        /// `metricsGet.version` must be `NVML_GPM_METRICS_GET_VERSION` and
        /// both samples populated before the call.
        fn nvmlGpmMetricsGet(metricsGet: *mut nvmlGpmMetricsGet_t);
        fn nvmlGpmSampleFree(gpmSample: nvmlGpmSample_t);
        fn nvmlGpmSampleAlloc(gpmSample: *mut nvmlGpmSample_t);
        fn nvmlGpmSampleGet(device: nvmlDevice_t, gpmSample: nvmlGpmSample_t);
        fn nvmlGpmMigSampleGet(device: nvmlDevice_t, gpuInstanceId: c_uint, gpmSample: nvmlGpmSample_t);
        fn nvmlGpmQueryDeviceSupport(device: nvmlDevice_t, gpmSupport: *mut nvmlGpmSupport_t);
        fn nvmlGpmQueryIfStreamingEnabled(device: nvmlDevice_t, state: *mut c_uint);
        fn nvmlGpmSetStreamingEnabled(device: nvmlDevice_t, state: c_uint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;
    use crate::types::gpm::NVML_GPM_METRICS_GET_VERSION;

    #[test]
    fn test_gpm_table_shape() {
        let api = GpmApi::empty();
        assert_eq!(GpmApi::symbol_count(), 8);
        let mut get = nvmlGpmMetricsGet_t::default();
        assert_eq!(
            unsafe { api.nvmlGpmMetricsGet(&mut get) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
        assert_eq!(get.version, NVML_GPM_METRICS_GET_VERSION);
    }
}
