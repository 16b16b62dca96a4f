//! nvml-query - query NVIDIA GPUs through dynamically loaded NVML
//!
//! Exercises the raw binding end to end: library discovery, init, device
//! enumeration and versioned struct calls. Return codes are shown to the
//! user as-is; nothing is retried or remapped.

use std::os::raw::c_char;
use std::process::ExitCode;

use clap::Parser;

use nvml_sys::cli::{
    buffer_to_string, print_report, Cli, Commands, GpuInfoReport, GpuList, GpuListEntry,
    OutputFormat, VersionReport,
};
use nvml_sys::{
    NvmlLib, NvmlLoadError, nvmlDevice_t, nvmlGpuFabricInfo_v2_t, nvmlMemory_v2_t,
    nvmlPciInfo_t, nvmlUtilization_t, NVML_DEVICE_ARCH_ADA, NVML_DEVICE_ARCH_AMPERE,
    NVML_DEVICE_ARCH_BLACKWELL, NVML_DEVICE_ARCH_HOPPER, NVML_DEVICE_ARCH_KEPLER,
    NVML_DEVICE_ARCH_MAXWELL, NVML_DEVICE_ARCH_PASCAL, NVML_DEVICE_ARCH_TURING,
    NVML_DEVICE_ARCH_VOLTA, NVML_DEVICE_NAME_V2_BUFFER_SIZE, NVML_DEVICE_UUID_V2_BUFFER_SIZE,
    NVML_SUCCESS, NVML_SYSTEM_DRIVER_VERSION_BUFFER_SIZE, NVML_SYSTEM_NVML_VERSION_BUFFER_SIZE,
    NVML_TEMPERATURE_GPU,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let lib = match open_library(cli.library.as_deref()) {
        Ok(lib) => lib,
        Err(err) => {
            print_load_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let ret = unsafe { lib.init.nvmlInit_v2() };
    if ret != NVML_SUCCESS {
        eprintln!("Error: nvmlInit_v2 failed: {}", lib.error_string(ret));
        return ExitCode::FAILURE;
    }

    let result = run(&cli, &lib);

    let ret = unsafe { lib.init.nvmlShutdown() };
    if ret != NVML_SUCCESS {
        log::warn!("nvmlShutdown failed: {}", lib.error_string(ret));
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            ExitCode::FAILURE
        }
    }
}

fn open_library(explicit: Option<&str>) -> Result<NvmlLib, NvmlLoadError> {
    match explicit {
        Some(path) => NvmlLib::open_at(path),
        None => NvmlLib::open(),
    }
}

fn run(cli: &Cli, lib: &NvmlLib) -> Result<(), String> {
    match cli.command {
        Commands::List => run_list(lib, cli.format),
        Commands::Info { gpu } => run_info(lib, gpu, cli.format),
        Commands::Version => run_version(lib, cli.format),
    }
}

fn run_list(lib: &NvmlLib, format: OutputFormat) -> Result<(), String> {
    let mut count = 0;
    check(lib, unsafe { lib.device.nvmlDeviceGetCount_v2(&mut count) })?;

    let mut gpus = Vec::with_capacity(count as usize);
    for index in 0..count {
        let device = device_by_index(lib, index)?;
        gpus.push(GpuListEntry {
            index,
            name: device_name(lib, device)?,
            uuid: device_uuid(lib, device)?,
        });
    }

    let report = GpuList {
        driver_version: driver_version(lib)?,
        gpus,
    };
    let table = report.to_table();
    print_report(&report, table, format);
    Ok(())
}

fn run_info(lib: &NvmlLib, index: u32, format: OutputFormat) -> Result<(), String> {
    let device = device_by_index(lib, index)?;

    let mut pci = nvmlPciInfo_t::default();
    check(lib, unsafe {
        lib.device.nvmlDeviceGetPciInfo_v3(device, &mut pci)
    })?;

    // Versioned call: the driver validates `memory.version` before filling.
    let mut memory = nvmlMemory_v2_t::default();
    check(lib, unsafe {
        lib.device.nvmlDeviceGetMemoryInfo_v2(device, &mut memory)
    })?;

    let mut arch = 0;
    let architecture = match unsafe { lib.device.nvmlDeviceGetArchitecture(device, &mut arch) } {
        NVML_SUCCESS => Some(arch_name(arch).to_string()),
        _ => None,
    };

    let mut temp = 0;
    let temperature_c =
        match unsafe { lib.device.nvmlDeviceGetTemperature(device, NVML_TEMPERATURE_GPU, &mut temp) }
        {
            NVML_SUCCESS => Some(temp),
            _ => None,
        };

    let mut power = 0;
    let power_usage_mw = match unsafe { lib.device.nvmlDeviceGetPowerUsage(device, &mut power) } {
        NVML_SUCCESS => Some(power),
        _ => None,
    };

    let mut util = nvmlUtilization_t::default();
    let (gpu_util, mem_util) =
        match unsafe { lib.device.nvmlDeviceGetUtilizationRates(device, &mut util) } {
            NVML_SUCCESS => (Some(util.gpu), Some(util.memory)),
            _ => (None, None),
        };

    let mut current_mig = 0;
    let mut pending_mig = 0;
    let mig_mode_current =
        match unsafe { lib.mig.nvmlDeviceGetMigMode(device, &mut current_mig, &mut pending_mig) } {
            NVML_SUCCESS => Some(current_mig),
            _ => None,
        };

    let mut fabric = nvmlGpuFabricInfo_v2_t::default();
    let fabric_state = match unsafe { lib.device.nvmlDeviceGetGpuFabricInfoV(device, &mut fabric) }
    {
        NVML_SUCCESS => Some(fabric.state),
        _ => None,
    };

    let report = GpuInfoReport {
        index,
        name: device_name(lib, device)?,
        uuid: device_uuid(lib, device)?,
        pci_bus_id: buffer_to_string(&pci.busId),
        architecture,
        memory_total_bytes: memory.total,
        memory_reserved_bytes: memory.reserved,
        memory_free_bytes: memory.free,
        memory_used_bytes: memory.used,
        temperature_c,
        power_usage_mw,
        gpu_utilization_pct: gpu_util,
        memory_utilization_pct: mem_util,
        mig_mode_current,
        fabric_state,
    };
    let table = report.to_table();
    print_report(&report, table, format);
    Ok(())
}

fn run_version(lib: &NvmlLib, format: OutputFormat) -> Result<(), String> {
    let mut nvml_version = [0 as c_char; NVML_SYSTEM_NVML_VERSION_BUFFER_SIZE];
    check(lib, unsafe {
        lib.system
            .nvmlSystemGetNVMLVersion(nvml_version.as_mut_ptr(), nvml_version.len() as u32)
    })?;

    let mut cuda_version = 0;
    let cuda_driver_version =
        match unsafe { lib.system.nvmlSystemGetCudaDriverVersion_v2(&mut cuda_version) } {
            NVML_SUCCESS => Some(cuda_version),
            _ => None,
        };

    let report = VersionReport {
        library_path: lib.path().to_string(),
        driver_version: driver_version(lib)?,
        nvml_version: buffer_to_string(&nvml_version),
        cuda_driver_version,
    };
    let table = report.to_table();
    print_report(&report, table, format);
    Ok(())
}

fn device_by_index(lib: &NvmlLib, index: u32) -> Result<nvmlDevice_t, String> {
    let mut device: nvmlDevice_t = std::ptr::null_mut();
    check(lib, unsafe {
        lib.device.nvmlDeviceGetHandleByIndex_v2(index, &mut device)
    })
    .map_err(|msg| format!("GPU {}: {}", index, msg))?;
    Ok(device)
}

fn device_name(lib: &NvmlLib, device: nvmlDevice_t) -> Result<String, String> {
    let mut name = [0 as c_char; NVML_DEVICE_NAME_V2_BUFFER_SIZE];
    check(lib, unsafe {
        lib.device
            .nvmlDeviceGetName(device, name.as_mut_ptr(), name.len() as u32)
    })?;
    Ok(buffer_to_string(&name))
}

fn device_uuid(lib: &NvmlLib, device: nvmlDevice_t) -> Result<String, String> {
    let mut uuid = [0 as c_char; NVML_DEVICE_UUID_V2_BUFFER_SIZE];
    check(lib, unsafe {
        lib.device
            .nvmlDeviceGetUUID(device, uuid.as_mut_ptr(), uuid.len() as u32)
    })?;
    Ok(buffer_to_string(&uuid))
}

fn driver_version(lib: &NvmlLib) -> Result<String, String> {
    let mut version = [0 as c_char; NVML_SYSTEM_DRIVER_VERSION_BUFFER_SIZE];
    check(lib, unsafe {
        lib.system
            .nvmlSystemGetDriverVersion(version.as_mut_ptr(), version.len() as u32)
    })?;
    Ok(buffer_to_string(&version))
}

fn check(lib: &NvmlLib, ret: u32) -> Result<(), String> {
    if ret == NVML_SUCCESS {
        Ok(())
    } else {
        Err(lib.error_string(ret))
    }
}

fn arch_name(arch: u32) -> &'static str {
    match arch {
        NVML_DEVICE_ARCH_KEPLER => "Kepler",
        NVML_DEVICE_ARCH_MAXWELL => "Maxwell",
        NVML_DEVICE_ARCH_PASCAL => "Pascal",
        NVML_DEVICE_ARCH_VOLTA => "Volta",
        NVML_DEVICE_ARCH_TURING => "Turing",
        NVML_DEVICE_ARCH_AMPERE => "Ampere",
        NVML_DEVICE_ARCH_ADA => "Ada",
        NVML_DEVICE_ARCH_HOPPER => "Hopper",
        NVML_DEVICE_ARCH_BLACKWELL => "Blackwell",
        _ => "Unknown",
    }
}

fn print_load_error(err: &NvmlLoadError) {
    eprintln!("Error: {}", err);
    if matches!(err, NvmlLoadError::LibraryNotFound { .. }) {
        eprintln!();
        eprintln!("Hint: Make sure the NVIDIA driver is installed.");
        eprintln!("      Set NVML_LIBRARY_PATH to point at libnvidia-ml.so.1 directly.");
    }
}
