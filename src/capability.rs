use indexmap::IndexMap;
use serde::Serialize;

use crate::python::PythonRuntime;

#[derive(Debug, Clone, Serialize)]
pub struct ImportCheck {
    pub ok: bool,
    pub detail: String,
}

pub trait Capability: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self) -> ImportCheck;
}

struct PythonImport {
    module: String,
    python: PythonRuntime,
}

impl Capability for PythonImport {
    fn name(&self) -> &str {
        &self.module
    }

    fn check(&self) -> ImportCheck {
        match self.python.eval(&format!("import {}", self.module)) {
            Ok(_) => ImportCheck {
                ok: true,
                detail: "ok".to_string(),
            },
            Err(err) => ImportCheck {
                ok: false,
                detail: err.to_string(),
            },
        }
    }
}

#[derive(Default)]
pub struct Registry {
    capabilities: Vec<Box<dyn Capability>>,
}

impl Registry {
    pub fn python_imports(python: &PythonRuntime, modules: &[String]) -> Self {
        let capabilities = modules
            .iter()
            .map(|module| {
                Box::new(PythonImport {
                    module: module.clone(),
                    python: python.clone(),
                }) as Box<dyn Capability>
            })
            .collect();
        Self { capabilities }
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.capabilities
            .iter()
            .find(|capability| capability.name() == name)
            .is_some_and(|capability| capability.check().ok)
    }

    pub fn check_all(&self) -> IndexMap<String, ImportCheck> {
        self.capabilities
            .iter()
            .map(|capability| (capability.name().to_string(), capability.check()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        ok: bool,
    }

    impl Capability for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn check(&self) -> ImportCheck {
            ImportCheck {
                ok: self.ok,
                detail: if self.ok { "ok" } else { "broken" }.to_string(),
            }
        }
    }

    fn registry() -> Registry {
        Registry {
            capabilities: vec![
                Box::new(Fixed {
                    name: "alpha",
                    ok: true,
                }),
                Box::new(Fixed {
                    name: "beta",
                    ok: false,
                }),
            ],
        }
    }

    #[test]
    fn is_available_reflects_check_outcome() {
        let registry = registry();
        assert!(registry.is_available("alpha"));
        assert!(!registry.is_available("beta"));
    }

    #[test]
    fn unregistered_name_is_unavailable() {
        assert!(!registry().is_available("gamma"));
    }

    #[test]
    fn check_all_preserves_registration_order() {
        let checks = registry().check_all();
        let names: Vec<&str> = checks.keys().map(String::as_str).collect();
        assert_eq!(names, ["alpha", "beta"]);
        assert_eq!(checks["beta"].detail, "broken");
    }
}
