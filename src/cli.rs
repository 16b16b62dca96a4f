//! CLI definitions for the `nvml-query` binary
//!
//! A small query tool that drives the raw binding end to end: library
//! load, init, device enumeration, versioned struct calls. Table output
//! for humans, JSON for machines.

use std::os::raw::c_char;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Query NVIDIA GPUs through dynamically loaded NVML
#[derive(Parser, Debug)]
#[command(name = "nvml-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Explicit path to the NVML shared library
    #[arg(long, global = true, env = "NVML_LIBRARY_PATH")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all detected GPUs
    List,

    /// Show detailed information for one GPU
    Info {
        /// GPU index (0-based)
        #[arg(default_value = "0")]
        gpu: u32,
    },

    /// Show driver, NVML and CUDA driver versions
    Version,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
}

/// Copies a NUL-terminated `c_char` buffer into an owned string. NVML
/// writes fixed-size buffers; anything after the NUL is garbage.
pub fn buffer_to_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// One row of `nvml-query list`.
#[derive(Debug, Clone, Serialize)]
pub struct GpuListEntry {
    pub index: u32,
    pub name: String,
    pub uuid: String,
}

/// Output of `nvml-query list`.
#[derive(Debug, Clone, Serialize)]
pub struct GpuList {
    pub driver_version: String,
    pub gpus: Vec<GpuListEntry>,
}

impl GpuList {
    pub fn to_table(&self) -> String {
        let mut output = format!("Driver Version: {}\n", self.driver_version);
        output.push_str(&format!("GPUs Found: {}\n\n", self.gpus.len()));
        for gpu in &self.gpus {
            output.push_str(&format!("[{}] {} ({})\n", gpu.index, gpu.name, gpu.uuid));
        }
        output
    }
}

/// Output of `nvml-query info`.
#[derive(Debug, Clone, Serialize)]
pub struct GpuInfoReport {
    pub index: u32,
    pub name: String,
    pub uuid: String,
    pub pci_bus_id: String,
    pub architecture: Option<String>,
    pub memory_total_bytes: u64,
    pub memory_reserved_bytes: u64,
    pub memory_free_bytes: u64,
    pub memory_used_bytes: u64,
    pub temperature_c: Option<u32>,
    pub power_usage_mw: Option<u32>,
    pub gpu_utilization_pct: Option<u32>,
    pub memory_utilization_pct: Option<u32>,
    pub mig_mode_current: Option<u32>,
    pub fabric_state: Option<u8>,
}

impl GpuInfoReport {
    pub fn to_table(&self) -> String {
        let mut output = format!("[{}] {}\n", self.index, self.name);
        output.push_str(&format!("  UUID: {}\n", self.uuid));
        output.push_str(&format!("  PCI Bus ID: {}\n", self.pci_bus_id));
        if let Some(arch) = &self.architecture {
            output.push_str(&format!("  Architecture: {}\n", arch));
        }
        output.push_str(&format!(
            "  Memory: {:.1} GiB total, {:.1} GiB used, {:.1} GiB reserved\n",
            self.memory_total_bytes as f64 / (1 << 30) as f64,
            self.memory_used_bytes as f64 / (1 << 30) as f64,
            self.memory_reserved_bytes as f64 / (1 << 30) as f64,
        ));
        if let Some(temp) = self.temperature_c {
            output.push_str(&format!("  Temperature: {}°C\n", temp));
        }
        if let Some(power) = self.power_usage_mw {
            output.push_str(&format!("  Power Usage: {:.1} W\n", power as f64 / 1000.0));
        }
        if let (Some(gpu), Some(mem)) = (self.gpu_utilization_pct, self.memory_utilization_pct) {
            output.push_str(&format!("  Utilization: {}% GPU, {}% memory\n", gpu, mem));
        }
        match self.mig_mode_current {
            Some(1) => output.push_str("  MIG: Enabled\n"),
            Some(_) => output.push_str("  MIG: Disabled\n"),
            None => {}
        }
        output
    }
}

/// Output of `nvml-query version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub library_path: String,
    pub driver_version: String,
    pub nvml_version: String,
    pub cuda_driver_version: Option<i32>,
}

impl VersionReport {
    pub fn to_table(&self) -> String {
        let mut output = format!("NVML Library: {}\n", self.library_path);
        output.push_str(&format!("Driver Version: {}\n", self.driver_version));
        output.push_str(&format!("NVML Version: {}\n", self.nvml_version));
        if let Some(cuda) = self.cuda_driver_version {
            output.push_str(&format!(
                "CUDA Driver Version: {}.{}\n",
                cuda / 1000,
                (cuda % 1000) / 10
            ));
        }
        output
    }
}

/// Prints a serializable report in the selected format.
pub fn print_report<T: Serialize>(report: &T, table: String, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", table),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let args = Cli::try_parse_from(["nvml-query", "list"]).unwrap();
        assert!(matches!(args.command, Commands::List));
    }

    #[test]
    fn test_cli_parse_info_with_gpu() {
        let args = Cli::try_parse_from(["nvml-query", "info", "1"]).unwrap();
        if let Commands::Info { gpu } = args.command {
            assert_eq!(gpu, 1);
        } else {
            panic!("Expected Info command");
        }
    }

    #[test]
    fn test_cli_parse_library_override() {
        let args = Cli::try_parse_from([
            "nvml-query",
            "--library",
            "/opt/nvidia/libnvidia-ml.so.1",
            "version",
        ])
        .unwrap();
        assert_eq!(
            args.library.as_deref(),
            Some("/opt/nvidia/libnvidia-ml.so.1")
        );
    }

    #[test]
    fn test_buffer_to_string_stops_at_nul() {
        let mut buf = [0 as c_char; 16];
        for (i, b) in b"GPU-test".iter().enumerate() {
            buf[i] = *b as c_char;
        }
        buf[12] = b'x' as c_char; // garbage past the terminator
        assert_eq!(buffer_to_string(&buf), "GPU-test");
    }

    #[test]
    fn test_buffer_to_string_full_buffer() {
        let buf = [b'a' as c_char; 8];
        assert_eq!(buffer_to_string(&buf), "aaaaaaaa");
    }

    #[test]
    fn test_version_report_table() {
        let report = VersionReport {
            library_path: "libnvidia-ml.so.1".to_string(),
            driver_version: "575.57.08".to_string(),
            nvml_version: "12.575.57.08".to_string(),
            cuda_driver_version: Some(12090),
        };
        let table = report.to_table();
        assert!(table.contains("575.57.08"));
        assert!(table.contains("CUDA Driver Version: 12.9"));
    }
}
