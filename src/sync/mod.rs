//! Git-backed synchronization wrapped around journal reads and writes.
//!
//! Every command that reports journal contents pulls first; every command
//! that mutates the journal pulls before and pushes after. Whether anything
//! happens is decided per call from the journal config (`git=true`), never
//! cached.
//!
//! Sync failures are logged and swallowed at this boundary. The wrapped
//! operation always proceeds against local state, so a journal stays usable
//! without network access. Only the explicit [`Syncer::sync_now`] bypasses the
//! config flag, and it too reports instead of failing.

use crate::config::JournalConfig;
use crate::constants::{COMMIT_MESSAGE_PREFIX, GIT_PROGRAM};
use crate::errors::{AppResult, SyncError};
use chrono::Local;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

/// A remote replication mechanism for a journal directory.
pub trait SyncBackend {
    /// Fetches and merges remote changes into `root`.
    fn pull(&self, root: &Path) -> Result<(), SyncError>;

    /// Records every local change under `message` and uploads it.
    fn push(&self, root: &Path, message: &str) -> Result<(), SyncError>;
}

/// Sync through the `git` command line.
///
/// Pull is a single `git pull`. Push is `git add -A`, `git commit -m`, then
/// `git push`, stopping at the first failing step. The commit is skipped when
/// nothing is staged. Each step's combined output is kept in the error.
#[derive(Debug, Clone)]
pub struct GitSync {
    program: String,
}

impl Default for GitSync {
    fn default() -> Self {
        GitSync {
            program: GIT_PROGRAM.to_string(),
        }
    }
}

impl GitSync {
    /// Uses `program` in place of `git`.
    pub fn with_program(program: impl Into<String>) -> Self {
        GitSync {
            program: program.into(),
        }
    }

    fn run(&self, root: &Path, step: &'static str, args: &[&str]) -> Result<(), SyncError> {
        debug!("Running sync {}: {} {:?}", step, self.program, args);
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(root)
            .output()
            .map_err(|source| SyncError::Spawn {
                step,
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(SyncError::StepFailed {
            step,
            status: output.status.code().unwrap_or(-1),
            output: combined.trim().to_string(),
        })
    }

    /// `git diff --cached --quiet` exits 0 only when the index matches HEAD.
    fn has_staged_changes(&self, root: &Path) -> Result<bool, SyncError> {
        let status = Command::new(&self.program)
            .args(["diff", "--cached", "--quiet"])
            .current_dir(root)
            .status()
            .map_err(|source| SyncError::Spawn {
                step: "diff",
                program: self.program.clone(),
                source,
            })?;
        Ok(!status.success())
    }
}

impl SyncBackend for GitSync {
    fn pull(&self, root: &Path) -> Result<(), SyncError> {
        self.run(root, "pull", &["pull"])
    }

    fn push(&self, root: &Path, message: &str) -> Result<(), SyncError> {
        self.run(root, "add", &["add", "-A"])?;
        if self.has_staged_changes(root)? {
            self.run(root, "commit", &["commit", "-m", message])?;
        } else {
            debug!("Nothing staged in {}, skipping commit", root.display());
        }
        self.run(root, "push", &["push"])
    }
}

/// Outcome of an explicit sync; pull and push succeed or fail independently.
#[derive(Debug)]
pub struct SyncReport {
    /// Result of the pull step
    pub pull: Result<(), SyncError>,
    /// Result of the push steps
    pub push: Result<(), SyncError>,
}

impl SyncReport {
    /// Whether both halves succeeded.
    pub fn is_clean(&self) -> bool {
        self.pull.is_ok() && self.push.is_ok()
    }
}

/// Applies the pull-before/push-after discipline for one journal command.
pub struct Syncer {
    backend: Box<dyn SyncBackend>,
}

impl Default for Syncer {
    fn default() -> Self {
        Syncer::new(GitSync::default())
    }
}

impl Syncer {
    /// Wraps `backend`.
    pub fn new(backend: impl SyncBackend + 'static) -> Self {
        Syncer {
            backend: Box::new(backend),
        }
    }

    /// Pulls when the journal at `root` has sync enabled.
    ///
    /// Returns whether a pull was attempted and succeeded.
    pub fn pull_if_enabled(&self, root: &Path) -> Result<bool, SyncError> {
        if !sync_enabled(root)? {
            return Ok(false);
        }
        self.backend.pull(root)?;
        Ok(true)
    }

    /// Pushes when the journal at `root` has sync enabled.
    ///
    /// Returns whether a push was attempted and succeeded.
    pub fn push_if_enabled(&self, root: &Path) -> Result<bool, SyncError> {
        if !sync_enabled(root)? {
            return Ok(false);
        }
        self.backend.push(root, &commit_message())?;
        Ok(true)
    }

    /// Pull step of the wrapper: failures are reported and dropped.
    pub fn pull_or_warn(&self, root: &Path) {
        match self.pull_if_enabled(root) {
            Ok(true) => debug!("Pulled {}", root.display()),
            Ok(false) => {}
            Err(e) => warn!("{}", e),
        }
    }

    /// Push step of the wrapper: failures are reported and dropped.
    pub fn push_or_warn(&self, root: &Path) {
        match self.push_if_enabled(root) {
            Ok(true) => debug!("Pushed {}", root.display()),
            Ok(false) => {}
            Err(e) => warn!("{}", e),
        }
    }

    /// Runs a mutation between a pull and a push.
    ///
    /// The push only happens when `mutation` succeeds. The result is the
    /// mutation's own result, whatever the sync steps did.
    pub fn mutate<T>(&self, root: &Path, mutation: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
        self.pull_or_warn(root);
        let value = mutation()?;
        self.push_or_warn(root);
        Ok(value)
    }

    /// Manual sync: pull then push, regardless of the config flag.
    ///
    /// Both steps always run; each failure is logged and kept in the report.
    pub fn sync_now(&self, root: &Path) -> SyncReport {
        let pull = self.backend.pull(root);
        if let Err(e) = &pull {
            warn!("{}", e);
        }
        let push = self.backend.push(root, &commit_message());
        if let Err(e) = &push {
            warn!("{}", e);
        }
        if pull.is_ok() && push.is_ok() {
            info!("Synced {}", root.display());
        }
        SyncReport { pull, push }
    }
}

fn sync_enabled(root: &Path) -> Result<bool, SyncError> {
    JournalConfig::load(root)
        .and_then(|config| config.sync_enabled())
        .map_err(|e| SyncError::Config(e.to_string()))
}

fn commit_message() -> String {
    format!("{} {}", COMMIT_MESSAGE_PREFIX, Local::now().to_rfc3339())
}
