use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PackageManagerPort;

#[derive(Default)]
pub struct FakePackageManager {
    calls: Mutex<Vec<String>>,
    install_fails: Mutex<bool>,
}

impl FakePackageManager {
    pub fn fail_install(&self) {
        *self.install_fails.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageManagerPort for FakePackageManager {
    fn install(&self) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("install".into());
        if *self.install_fails.lock().unwrap() {
            return Err(AppError::tool_error("npm", "install exited with 1"));
        }
        Ok(())
    }

    fn exec(&self, args: &[&str]) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(format!("exec {}", args.join(" ")));
        Ok(())
    }
}
