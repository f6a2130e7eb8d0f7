use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "check_gpu_env", version, about = "Readiness diagnostics for GPU-accelerated ML environments")]
pub struct Cli {
    #[arg(long, value_name = "PATH", help = "Project root for write-access probes (defaults to the current directory)")]
    pub root: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Checklist config file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Python interpreter to probe (overrides PATH lookup)")]
    pub python: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
