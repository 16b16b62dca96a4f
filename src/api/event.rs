//! Event sets
//!
//! `nvmlEventSetWait_v2` blocks in the driver for up to `timeoutms`; the
//! timeout is reported as `NVML_ERROR_TIMEOUT`, not interpreted here.

use std::os::raw::{c_uint, c_ulonglong};

use crate::types::core::{nvmlDevice_t, nvmlEventSet_t};
use crate::types::event::nvmlEventData_t;

nvml_api_group! {
    pub struct EventApi {
        fn nvmlEventSetCreate(set: *mut nvmlEventSet_t);
        fn nvmlDeviceRegisterEvents(
            device: nvmlDevice_t,
            eventTypes: c_ulonglong,
            set: nvmlEventSet_t,
        );
        fn nvmlDeviceGetSupportedEventTypes(device: nvmlDevice_t, eventTypes: *mut c_ulonglong);
        fn nvmlEventSetWait_v2(set: nvmlEventSet_t, data: *mut nvmlEventData_t, timeoutms: c_uint);
        fn nvmlEventSetFree(set: nvmlEventSet_t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::core::NVML_ERROR_FUNCTION_NOT_FOUND;

    #[test]
    fn test_event_table_shape() {
        let api = EventApi::empty();
        assert_eq!(EventApi::symbol_count(), 5);
        let mut set = std::ptr::null_mut();
        assert_eq!(
            unsafe { api.nvmlEventSetCreate(&mut set) },
            NVML_ERROR_FUNCTION_NOT_FOUND
        );
        assert!(set.is_null());
    }
}
