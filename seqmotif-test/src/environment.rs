//! Test environment management
//!
//! Provides isolated temporary directories with automatic cleanup using RAII.

use anyhow::{Context, Result};
use seqmotif_core::{save_config, Config};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with automatic cleanup
pub struct TestEnvironment {
    temp_dir: Option<TempDir>,
    root_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Self::with_prefix("seqmotif-test")
    }

    /// Create an environment whose directory name starts with `prefix`
    pub fn with_prefix(prefix: &str) -> Result<Self> {
        let temp_dir =
            TempDir::with_prefix(prefix).context("Failed to create temporary directory")?;
        let root_path = temp_dir.path().to_path_buf();

        Ok(Self {
            temp_dir: Some(temp_dir),
            root_path,
        })
    }

    /// Get the root path of the test environment
    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Write a file in the test environment, returning its full path
    pub fn write_file(&self, path: impl AsRef<Path>, content: &[u8]) -> Result<PathBuf> {
        let full_path = self.root_path.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Read a file from the test environment
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let full_path = self.root_path.join(path);
        Ok(std::fs::read(full_path)?)
    }

    /// Save `config` as TOML in the test environment, returning its full path
    pub fn write_config(&self, path: impl AsRef<Path>, config: &Config) -> Result<PathBuf> {
        let full_path = self.root_path.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        save_config(&full_path, config)
            .with_context(|| format!("Failed to save config to {}", full_path.display()))?;
        Ok(full_path)
    }

    /// Keep the directory on disk after the test (for debugging)
    pub fn preserve(&mut self) {
        if let Some(temp_dir) = self.temp_dir.take() {
            let path = temp_dir.keep();
            println!("Test environment preserved at: {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_isolation() {
        let env1 = TestEnvironment::new().unwrap();
        let env2 = TestEnvironment::new().unwrap();

        assert_ne!(env1.root(), env2.root());

        env1.write_file("config.toml", b"[motif]").unwrap();
        assert!(!env2.root().join("config.toml").exists());
        assert_eq!(env1.read_file("config.toml").unwrap(), b"[motif]");
    }

    #[test]
    fn test_environment_cleanup() {
        let path = {
            let env = TestEnvironment::new().unwrap();
            let path = env.root().to_path_buf();
            assert!(path.exists());
            path
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_write_config_nested() {
        let env = TestEnvironment::new().unwrap();
        let mut config = Config::default();
        config.motif.k = 5;
        config.motif.seed = Some(3);

        let path = env.write_config("nested/seqmotif.toml", &config).unwrap();
        assert_eq!(path, env.root().join("nested/seqmotif.toml"));

        let text = String::from_utf8(env.read_file("nested/seqmotif.toml").unwrap()).unwrap();
        assert!(text.contains("k = 5"));
    }

    #[test]
    fn test_preserve_keeps_directory() {
        let path = {
            let mut env = TestEnvironment::with_prefix("seqmotif-preserve").unwrap();
            env.write_file("kept.txt", b"still here").unwrap();
            env.preserve();
            env.preserve();
            env.root().to_path_buf()
        };

        assert!(path.exists());
        assert_eq!(std::fs::read(path.join("kept.txt")).unwrap(), b"still here");
        std::fs::remove_dir_all(&path).unwrap();
    }
}
