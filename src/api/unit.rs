//! S-class unit queries and commands

use std::os::raw::c_uint;

use crate::types::core::{nvmlDevice_t, nvmlUnit_t};
use crate::types::unit::{
    nvmlLedColor_t, nvmlLedState_t, nvmlPSUInfo_t, nvmlUnitFanSpeeds_t, nvmlUnitInfo_t,
};

nvml_api_group! {
    pub struct UnitApi {
        fn nvmlUnitGetCount(unitCount: *mut c_uint);
        fn nvmlUnitGetHandleByIndex(index: c_uint, unit: *mut nvmlUnit_t);
        fn nvmlUnitGetUnitInfo(unit: nvmlUnit_t, info: *mut nvmlUnitInfo_t);
        fn nvmlUnitGetLedState(unit: nvmlUnit_t, state: *mut nvmlLedState_t);
        fn nvmlUnitGetPsuInfo(unit: nvmlUnit_t, psu: *mut nvmlPSUInfo_t);
        /// `sensorType` 0 is intake, 1 exhaust, 2 board.
        fn nvmlUnitGetTemperature(unit: nvmlUnit_t, sensorType: c_uint, temp: *mut c_uint);
        fn nvmlUnitGetFanSpeedInfo(unit: nvmlUnit_t, fanSpeeds: *mut nvmlUnitFanSpeeds_t);
        fn nvmlUnitGetDevices(unit: nvmlUnit_t, deviceCount: *mut c_uint, devices: *mut nvmlDevice_t);
        fn nvmlUnitSetLedState(unit: nvmlUnit_t, color: nvmlLedColor_t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_table_shape() {
        assert_eq!(UnitApi::symbol_count(), 9);
        assert_eq!(UnitApi::empty().resolved_count(), 0);
    }
}
