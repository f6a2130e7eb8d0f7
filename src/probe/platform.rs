use serde::Serialize;
use sysinfo::System;

#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub system: String,
    pub release: String,
    pub machine: String,
}

pub fn probe() -> PlatformInfo {
    PlatformInfo {
        system: std::env::consts::OS.to_string(),
        release: System::kernel_version().unwrap_or_default(),
        machine: std::env::consts::ARCH.to_string(),
    }
}
