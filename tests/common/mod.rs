//! Common test utilities for oleanpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project for integration tests
///
/// Lays out a Lean project directory plus stub `lean`/`leanpkg`
/// executables, so tests drive the real binary without a Lean toolchain
/// installed.
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the test root (the binary's working directory)
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new test project with an empty `combined_lib` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("combined_lib"))
            .expect("Failed to create project directory");
        Self { temp, path }
    }

    /// Write a file under the test root
    pub fn write_file(&self, rel: &str, content: &str) {
        let file_path = self.path.join(rel);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists under the test root
    pub fn file_exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }

    /// Path of the stub lean executable
    pub fn lean_bin(&self) -> PathBuf {
        self.path.join("bin/lean")
    }

    /// Path of the stub leanpkg executable
    pub fn leanpkg_bin(&self) -> PathBuf {
        self.path.join("bin/leanpkg")
    }

    /// Install stub toolchain executables reporting `search_paths` (taken
    /// relative to the project directory unless absolute) from `lean -p`
    #[cfg(unix)]
    pub fn install_toolchain(&self, search_paths: &[&str]) {
        let quoted: Vec<String> = search_paths.iter().map(|p| format!("\"{p}\"")).collect();
        self.write_file(
            "search_path.json",
            &format!(
                r#"{{"is_user_leanpkg_path": false, "leanpkg_path_file": "leanpkg.path", "path": [{}]}}"#,
                quoted.join(", ")
            ),
        );

        self.install_lean_script(&format!(
            "#!/bin/sh\nif [ \"$1\" = \"-p\" ]; then\n  cat '{}'\nelse\n  echo 'Lean (version 3.4.2, commit cbd2b6686ddb, Release)'\nfi\n",
            self.path.join("search_path.json").display()
        ));
        self.install_leanpkg_script("#!/bin/sh\nexit 0\n");
    }

    /// Install a raw stub lean script (escape hatch for failure scenarios)
    #[cfg(unix)]
    pub fn install_lean_script(&self, script: &str) {
        self.write_executable("bin/lean", script);
    }

    /// Install a raw stub leanpkg script
    #[cfg(unix)]
    pub fn install_leanpkg_script(&self, script: &str) {
        self.write_executable("bin/leanpkg", script);
    }

    #[cfg(unix)]
    fn write_executable(&self, rel: &str, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.write_file(rel, content);
        let path = self.path.join(rel);
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
    }

    /// Sorted entry names of a produced archive
    #[allow(dead_code)]
    pub fn archive_entries(&self, rel: &str) -> Vec<String> {
        let file = std::fs::File::open(self.path.join(rel)).expect("Failed to open archive");
        let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }
}
