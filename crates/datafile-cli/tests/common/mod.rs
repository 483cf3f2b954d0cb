//! Common test utilities for datafile CLI integration tests.

use datafile_cli::commands::{self, StoreContext};
use datafile_cli::cli::Command;
use tempfile::TempDir;

/// Test harness owning a scratch directory and a store context inside it.
pub struct TestHarness {
    /// Keeps the scratch directory alive for the test's duration
    pub dir: TempDir,
    /// Context pointing at `<dir>/acl.json`
    pub ctx: StoreContext,
}

impl TestHarness {
    /// Creates a harness with an initialized, empty store.
    pub fn new() -> Self {
        let harness = Self::uninitialized();
        harness.run(Command::Init { force: false });
        harness
    }

    /// Creates a harness whose store file does not exist yet.
    pub fn uninitialized() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let ctx = StoreContext {
            path: dir.path().join("acl.json"),
            pretty: true,
        };
        Self { dir, ctx }
    }

    /// Runs a command, panicking on failure, and returns its output.
    pub fn run(&self, command: Command) -> String {
        self.try_run(command).unwrap()
    }

    /// Runs a command and returns its output or error.
    pub fn try_run(&self, command: Command) -> datafile_cli::Result<String> {
        let mut out = Vec::new();
        commands::run(&self.ctx, command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
