use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;

use crate::capability::ImportCheck;
use crate::probe::platform::PlatformInfo;
use crate::probe::torch::TorchInfo;
use crate::probe::write_access::WriteCheck;
use crate::python::PythonInfo;

// Field order is the key order of the emitted document
#[derive(Debug, Serialize)]
pub struct Report {
    pub python: PythonInfo,
    pub platform: PlatformInfo,
    pub commands: IndexMap<String, String>,
    pub imports: IndexMap<String, ImportCheck>,
    pub torch: TorchInfo,
    pub write_access: IndexMap<String, WriteCheck>,
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize report")
    }

    // Failed imports outrank a missing accelerator
    pub fn readiness(&self) -> Readiness {
        if self.imports.values().any(|check| !check.ok) {
            return Readiness::MissingImports;
        }
        if self.torch.cuda_available != Some(true) {
            return Readiness::NoAccelerator;
        }
        Readiness::Ready
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    MissingImports,
    NoAccelerator,
}

impl Readiness {
    pub fn exit_code(self) -> u8 {
        match self {
            Readiness::Ready => 0,
            Readiness::MissingImports => 2,
            Readiness::NoAccelerator => 3,
        }
    }
}
