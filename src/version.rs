//! Struct and API version encoding
//!
//! NVML identifies the layout revision of a versioned struct by packing its
//! size and a revision number into a single `unsigned int`. Callers store the
//! packed value in the struct's leading `version` field before the call; the
//! driver rejects mismatches with `NVML_ERROR_ARGUMENT_VERSION_MISMATCH`.

/// Packs `sizeof(T) | (ver << 24)`, replicating the C `NVML_STRUCT_VERSION`
/// macro bit for bit.
///
/// The per-struct constants (`nvmlMemory_v2`, `nvmlGpuFabricInfo_v2`, ...)
/// are defined next to their structs in [`crate::types`] using this macro.
#[macro_export]
macro_rules! nvml_struct_version {
    ($ty:ty, $ver:expr) => {
        (::std::mem::size_of::<$ty>() as ::std::os::raw::c_uint)
            | (($ver as ::std::os::raw::c_uint) << 24)
    };
}

/// Major API version of the mirrored header surface.
pub const NVML_API_VERSION: u32 = 12;
/// String form of [`NVML_API_VERSION`].
pub const NVML_API_VERSION_STR: &str = "12";

#[cfg(test)]
mod tests {
    #[repr(C)]
    struct Probe {
        version: u32,
        payload: u64,
    }

    #[test]
    fn test_version_packing() {
        // 4 bytes of version + 4 padding + 8 payload = 16.
        assert_eq!(std::mem::size_of::<Probe>(), 16);
        assert_eq!(nvml_struct_version!(Probe, 1), 16 | (1 << 24));
        assert_eq!(nvml_struct_version!(Probe, 2), 16 | (2 << 24));
    }

    #[test]
    fn test_version_field_is_low_bits() {
        let packed = nvml_struct_version!(Probe, 3);
        assert_eq!(packed & 0x00ff_ffff, 16);
        assert_eq!(packed >> 24, 3);
    }
}
