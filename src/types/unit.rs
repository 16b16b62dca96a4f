//! S-class unit types
//!
//! Units are the chassis-level entities of S-class systems: PSU, fans and
//! LEDs. Only static info and sensor snapshots cross the boundary.

use std::os::raw::{c_char, c_uint};

use super::device::nvmlFanState_t;

/// Static unit identification strings.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlUnitInfo_t {
    pub name: [c_char; 96],
    pub id: [c_char; 96],
    pub serial: [c_char; 96],
    pub firmwareVersion: [c_char; 96],
}

impl Default for nvmlUnitInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

pub type nvmlLedColor_t = c_uint;
pub const NVML_LED_COLOR_GREEN: nvmlLedColor_t = 0;
pub const NVML_LED_COLOR_AMBER: nvmlLedColor_t = 1;

/// LED state with the cause string the SMBPBI firmware reports.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlLedState_t {
    pub cause: [c_char; 256],
    pub color: nvmlLedColor_t,
}

impl Default for nvmlLedState_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// PSU readings. `current` in amps, `voltage` in volts, `power` in watts.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlPSUInfo_t {
    pub state: [c_char; 256],
    pub current: c_uint,
    pub voltage: c_uint,
    pub power: c_uint,
}

impl Default for nvmlPSUInfo_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default)]
pub struct nvmlUnitFanInfo_t {
    pub speed: c_uint,
    pub state: nvmlFanState_t,
}

/// Fan bank snapshot; `count` gives the number of valid entries.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlUnitFanSpeeds_t {
    pub fans: [nvmlUnitFanInfo_t; 24],
    pub count: c_uint,
}

impl Default for nvmlUnitFanSpeeds_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

/// Host interface card entry.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct nvmlHwbcEntry_t {
    pub hwbcId: c_uint,
    pub firmwareVersion: [c_char; 32],
}

impl Default for nvmlHwbcEntry_t {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_unit_info_layout() {
        assert_eq!(size_of::<nvmlUnitInfo_t>(), 384);
        assert_eq!(offset_of!(nvmlUnitInfo_t, serial), 192);
    }

    #[test]
    fn test_led_state_layout() {
        assert_eq!(size_of::<nvmlLedState_t>(), 260);
        assert_eq!(offset_of!(nvmlLedState_t, color), 256);
    }

    #[test]
    fn test_psu_info_layout() {
        assert_eq!(size_of::<nvmlPSUInfo_t>(), 268);
        assert_eq!(offset_of!(nvmlPSUInfo_t, power), 264);
    }

    #[test]
    fn test_fan_speeds_layout() {
        assert_eq!(size_of::<nvmlUnitFanInfo_t>(), 8);
        assert_eq!(size_of::<nvmlUnitFanSpeeds_t>(), 196);
        assert_eq!(offset_of!(nvmlUnitFanSpeeds_t, count), 192);
    }

    #[test]
    fn test_hwbc_entry_layout() {
        assert_eq!(size_of::<nvmlHwbcEntry_t>(), 36);
    }
}
