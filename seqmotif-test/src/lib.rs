//! Test utilities for the seqmotif workspace
//!
//! Common helpers shared by the unit and integration tests of every crate:
//!
//! - **Test Environment**: temporary directories for config files, cleaned up on drop
//! - **Fixtures**: deterministic RNGs, random DNA, planted-motif datasets
//! - **Assertions**: alignment and motif-set invariants

pub mod assertions;
pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::{
    mutate_sequence, planted_motif_dataset, random_dna, seeded_rng, small_planted_dataset,
    PlantedMotifs, TEST_SEED,
};

pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Run a test with a clean environment
///
/// # Example
/// ```rust
/// use seqmotif_test::with_test_env;
///
/// with_test_env(|env| {
///     env.write_file("config.toml", b"[motif]\nk = 6\n")?;
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    f(&env)
}
