use clap::Parser;
use std::path::PathBuf;

/// Arguments for package command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package the default project:\n    oleanpack package\n\n\
                  Package another project into another directory:\n    oleanpack package --project-dir my_lib --out-dir dist\n\n\
                  Use a pinned toolchain:\n    oleanpack package --lean ~/.elan/bin/lean --leanpkg ~/.elan/bin/leanpkg")]
pub struct PackageArgs {
    /// Lean project directory to build and package
    #[arg(long, default_value = "combined_lib", env = "OLEANPACK_PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Directory where zip archives are written
    #[arg(long, short = 'o', default_value = "test_dist", env = "OLEANPACK_OUT_DIR")]
    pub out_dir: PathBuf,

    /// lean executable to invoke
    #[arg(long, default_value = "lean")]
    pub lean: String,

    /// leanpkg executable to invoke
    #[arg(long, default_value = "leanpkg")]
    pub leanpkg: String,
}
