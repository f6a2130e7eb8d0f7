use indexmap::IndexMap;

use crate::capability::{ImportCheck, Registry};
use crate::python::PythonRuntime;

pub fn probe(python: &PythonRuntime, modules: &[String]) -> IndexMap<String, ImportCheck> {
    let checks = Registry::python_imports(python, modules).check_all();
    let failed = checks.values().filter(|check| !check.ok).count();
    if failed > 0 {
        tracing::debug!(failed, total = checks.len(), "import probes failed");
    }
    checks
}
