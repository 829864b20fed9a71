//! Local tooling: git repository, Node dependencies, commit-msg hook.

use crate::app::output;
use crate::app::Toolchain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolingReport {
    pub git_initialized: bool,
    pub dependencies_installed: bool,
    pub hooks_installed: bool,
}

/// Initialize git, install dependencies and enable husky.
///
/// Failures never abort `init`; each one is recorded in `warnings`.
/// With `install == false` only the git repository is created.
pub fn execute(tools: &Toolchain<'_>, install: bool, warnings: &mut Vec<String>) -> ToolingReport {
    let mut report = ToolingReport::default();

    match tools.git.init() {
        Ok(()) => {
            output::success("Initialized git repository");
            report.git_initialized = true;
        }
        Err(e) => output::push_warning(warnings, format!("git init failed: {}", e)),
    }

    if !install {
        output::info("Skipping dependency installation (--skip-install)");
        return report;
    }

    output::info("Installing dependencies...");
    match tools.packages.install() {
        Ok(()) => {
            output::success("Installed dependencies");
            report.dependencies_installed = true;
        }
        Err(e) => {
            output::push_warning(warnings, format!("Dependency installation failed: {}", e));
            return report;
        }
    }

    if !report.git_initialized {
        output::push_warning(warnings, "Skipping git hooks: no git repository".to_string());
        return report;
    }

    match tools.packages.exec(&["husky", "install"]) {
        Ok(()) => {
            output::success("Installed commit-msg hook");
            report.hooks_installed = true;
        }
        Err(e) => output::push_warning(warnings, format!("husky install failed: {}", e)),
    }

    report
}
