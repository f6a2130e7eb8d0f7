use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WriteCheck {
    pub ok: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub fn probe(root: &Path, rel_dirs: &[String]) -> IndexMap<String, WriteCheck> {
    rel_dirs
        .iter()
        .map(|rel| (rel.clone(), check_dir(&root.join(rel))))
        .collect()
}

fn check_dir(dir: &Path) -> WriteCheck {
    let path = dir.display().to_string();
    match write_probe(dir) {
        Ok(()) => WriteCheck {
            ok: true,
            path,
            detail: None,
        },
        Err(err) => {
            let detail = format!("{err:#}");
            tracing::debug!(path = %dir.display(), error = %detail, "write probe failed");
            WriteCheck {
                ok: false,
                path,
                detail: Some(detail),
            }
        }
    }
}

fn write_probe(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).context("create directory")?;
    let mut probe = tempfile::Builder::new()
        .prefix(".write_probe-")
        .tempfile_in(dir)
        .context("create probe file")?;
    probe.write_all(b"ok").context("write probe file")?;
    // Drop removes the file on the error paths above; close reports it here
    if let Err(err) = probe.close() {
        tracing::debug!(error = %err, "probe file cleanup failed");
    }
    Ok(())
}
