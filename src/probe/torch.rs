use serde::{Deserialize, Serialize};

use crate::python::{final_line, PythonRuntime};

const CUDA_QUERY: &str = r#"
import json
import torch

cuda_ok = torch.cuda.is_available()
info = {
    "version": torch.__version__,
    "cuda_available": cuda_ok,
    "cuda_version": getattr(torch.version, "cuda", None),
    "device_count": torch.cuda.device_count() if cuda_ok else 0,
}
if cuda_ok:
    devices = []
    for index in range(info["device_count"]):
        props = torch.cuda.get_device_properties(index)
        devices.append({
            "index": index,
            "name": props.name,
            "total_memory_bytes": props.total_memory,
        })
    info["devices"] = devices
print(json.dumps(info))
"#;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TorchInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuda_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuda_version: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<GpuDevice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GpuDevice {
    pub index: u32,
    pub name: String,
    pub total_memory_gb: f64,
}

#[derive(Deserialize)]
struct RawReport {
    version: String,
    cuda_available: bool,
    cuda_version: Option<String>,
    device_count: u32,
    #[serde(default)]
    devices: Option<Vec<RawDevice>>,
}

#[derive(Deserialize)]
struct RawDevice {
    index: u32,
    name: String,
    total_memory_bytes: u64,
}

pub fn probe(python: &PythonRuntime) -> TorchInfo {
    let raw = match python.eval(CUDA_QUERY) {
        Ok(raw) => raw,
        Err(err) => return error_info(err.to_string()),
    };
    let report: RawReport = match serde_json::from_str(final_line(&raw)) {
        Ok(report) => report,
        Err(err) => return error_info(format!("unreadable torch report: {err}")),
    };
    TorchInfo {
        version: Some(report.version),
        cuda_available: Some(report.cuda_available),
        cuda_version: Some(report.cuda_version),
        device_count: Some(report.device_count),
        devices: report.devices.map(|devices| {
            devices
                .into_iter()
                .map(|device| GpuDevice {
                    index: device.index,
                    name: device.name,
                    total_memory_gb: gigabytes(device.total_memory_bytes),
                })
                .collect()
        }),
        error: None,
    }
}

fn error_info(detail: String) -> TorchInfo {
    tracing::debug!(error = %detail, "torch probe failed");
    TorchInfo {
        error: Some(detail),
        ..Default::default()
    }
}

// Binary gigabytes, rounded to two decimals
pub(crate) fn gigabytes(bytes: u64) -> f64 {
    let gib = bytes as f64 / (1u64 << 30) as f64;
    (gib * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn gigabytes_rounds_to_two_decimals() {
        assert_eq!(gigabytes(0), 0.0);
        assert_eq!(gigabytes(1 << 30), 1.0);
        assert_eq!(gigabytes(42_949_672_960), 40.0);
        assert_eq!(gigabytes(11_811_160_064), 11.0);
        assert_eq!(gigabytes(12_528_893_952), 11.67);
    }

    #[test]
    fn probe_records_interpreter_failure_as_error() {
        let python = PythonRuntime::locate(Some(Path::new("/nonexistent/python-interp")));
        let info = probe(&python);
        assert!(info.error.is_some());
        assert!(info.version.is_none());
        assert!(info.cuda_available.is_none());
    }

    #[test]
    fn error_report_serializes_as_single_key() {
        let info = error_info("boom".to_string());
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }

    #[test]
    fn missing_cuda_version_serializes_as_null() {
        let info = TorchInfo {
            version: Some("2.4.0".to_string()),
            cuda_available: Some(false),
            cuda_version: Some(None),
            device_count: Some(0),
            devices: None,
            error: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""cuda_version":null"#));
        assert!(!json.contains("devices"));
        assert!(!json.contains("error"));
    }
}
