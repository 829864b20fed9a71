use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// Records every git call as its argument string (e.g. `push -u origin main`).
///
/// Calls registered with [`FakeGit::fail`] return a `GitError` the given number of times.
#[derive(Default)]
pub struct FakeGit {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<String, usize>>,
    branches: Mutex<HashSet<String>>,
    remote: Mutex<Option<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail(&self, call: &str, times: usize) {
        self.failures.lock().unwrap().insert(call.to_string(), times);
    }

    pub fn set_remote(&self, url: &str) {
        *self.remote.lock().unwrap() = Some(url.to_string());
    }

    pub fn add_branch(&self, branch: &str) {
        self.branches.lock().unwrap().insert(branch.to_string());
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call.clone());
        let mut failures = self.failures.lock().unwrap();
        match failures.get_mut(&call) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Err(AppError::GitError { command: format!("git {}", call), details: "scripted".into() })
            }
            _ => Ok(()),
        }
    }
}

impl GitPort for FakeGit {
    fn init(&self) -> Result<(), AppError> {
        self.record("init".into())
    }

    fn add_all(&self) -> Result<(), AppError> {
        self.record("add .".into())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        self.record(format!("commit -m {}", message))
    }

    fn branch_exists(&self, branch: &str) -> bool {
        self.branches.lock().unwrap().contains(branch)
    }

    fn checkout(&self, branch: &str, create: bool) -> Result<(), AppError> {
        if create {
            self.add_branch(branch);
            self.record(format!("checkout -b {}", branch))
        } else {
            self.record(format!("checkout {}", branch))
        }
    }

    fn push_upstream(&self, branch: &str) -> Result<(), AppError> {
        self.record(format!("push -u origin {}", branch))
    }

    fn fetch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.record(format!("fetch {} {}", remote, branch))
    }

    fn rebase(&self, upstream: &str) -> Result<(), AppError> {
        self.record(format!("rebase {}", upstream))
    }

    fn rebase_abort(&self) -> Result<(), AppError> {
        self.record("rebase --abort".into())
    }

    fn merge(&self, upstream: &str) -> Result<(), AppError> {
        self.record(format!("merge {}", upstream))
    }

    fn remote_url(&self, _remote: &str) -> Option<String> {
        self.remote.lock().unwrap().clone()
    }

    fn add_remote(&self, remote: &str, url: &str) -> Result<(), AppError> {
        self.set_remote(url);
        self.record(format!("remote add {} {}", remote, url))
    }

    fn set_remote_url(&self, remote: &str, url: &str) -> Result<(), AppError> {
        self.set_remote(url);
        self.record(format!("remote set-url {} {}", remote, url))
    }
}
