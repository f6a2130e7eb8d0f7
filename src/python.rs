use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(unix)]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PYTHON_CANDIDATES: &[&str] = &["python"];

const IDENTITY_QUERY: &str = r#"
import json, sys
print(json.dumps({"version": sys.version.replace("\n", " "), "executable": sys.executable}))
"#;

#[derive(Error, Debug)]
pub enum PythonError {
    #[error("python interpreter not found in PATH (tried: {tried})")]
    NotFound { tried: String },
    #[error("failed to run {}: {source}", .exe.display())]
    Spawn {
        exe: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Raised(String),
}

#[derive(Debug, Clone)]
pub struct PythonRuntime {
    exe: Option<PathBuf>,
}

impl PythonRuntime {
    pub fn locate(override_path: Option<&Path>) -> Self {
        if let Some(path) = override_path {
            tracing::debug!(python = %path.display(), "using interpreter override");
            return Self {
                exe: Some(path.to_path_buf()),
            };
        }
        for candidate in PYTHON_CANDIDATES {
            if let Ok(path) = which::which(candidate) {
                tracing::debug!(python = %path.display(), "located interpreter");
                return Self { exe: Some(path) };
            }
        }
        tracing::debug!(tried = %PYTHON_CANDIDATES.join(", "), "no python interpreter in PATH");
        Self { exe: None }
    }

    pub fn executable(&self) -> Option<&Path> {
        self.exe.as_deref()
    }

    pub fn eval(&self, code: &str) -> Result<String, PythonError> {
        let exe = self.exe.as_ref().ok_or_else(|| PythonError::NotFound {
            tried: PYTHON_CANDIDATES.join(", "),
        })?;
        let output = Command::new(exe)
            .arg("-c")
            .arg(code)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PythonError::Spawn {
                exe: exe.clone(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PythonError::Raised(raised_detail(&stderr, output.status)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn identity(&self) -> PythonInfo {
        let fallback = || PythonInfo {
            version: String::new(),
            executable: self
                .executable()
                .map(|exe| exe.display().to_string())
                .unwrap_or_default(),
        };
        let raw = match self.eval(IDENTITY_QUERY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(error = %err, "interpreter identity probe failed");
                return fallback();
            }
        };
        match serde_json::from_str(final_line(&raw)) {
            Ok(info) => info,
            Err(err) => {
                tracing::debug!(error = %err, "interpreter identity output unreadable");
                fallback()
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PythonInfo {
    pub version: String,
    pub executable: String,
}

pub(crate) fn final_line(text: &str) -> &str {
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

fn raised_detail(stderr: &str, status: ExitStatus) -> String {
    let line = final_line(stderr);
    if line.is_empty() {
        format!("python exited with {status}")
    } else {
        line.to_string()
    }
}
