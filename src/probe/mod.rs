pub mod commands;
pub mod imports;
pub mod platform;
pub mod torch;
pub mod write_access;

use std::path::Path;

use crate::config::Config;
use crate::python::PythonRuntime;
use crate::report::Report;

pub fn run_all(config: &Config, root: &Path, python_override: Option<&Path>) -> Report {
    let python = PythonRuntime::locate(python_override);
    Report {
        python: python.identity(),
        platform: platform::probe(),
        commands: commands::probe(&config.commands),
        imports: imports::probe(&python, &config.imports),
        torch: torch::probe(&python),
        write_access: write_access::probe(root, &config.write_dirs),
    }
}
