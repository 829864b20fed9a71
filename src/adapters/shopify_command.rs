use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{AppError, StoreAccess, ThemeInfo};
use crate::ports::ShopifyPort;

const THEME_TOKEN_ENV: &str = "SHOPIFY_CLI_THEME_TOKEN";

#[derive(Debug, Deserialize)]
struct PushResponse {
    theme: ThemeInfo,
}

/// Shopify CLI adapter. The theme access token travels in the child environment.
#[derive(Debug, Clone)]
pub struct ShopifyCommandAdapter {
    root: PathBuf,
}

impl ShopifyCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(command = %format!("shopify {}", args.join(" ")), "running shopify");
        let mut command = Command::new("shopify");
        command.args(args).current_dir(&self.root);
        command
    }

    fn run(&self, access: &StoreAccess, args: &[&str]) -> Result<String, AppError> {
        let mut command = self.command(args);
        command.env(THEME_TOKEN_ENV, &access.token);
        let output = command.stdin(Stdio::null()).output().map_err(|e| {
            AppError::tool_error("shopify", format!("Failed to execute Shopify CLI: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::tool_error(
                "shopify",
                format!("shopify {} failed: {}", args.first().copied().unwrap_or(""), stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Deserialize the first JSON document in `output`.
///
/// The CLI may print banners and upgrade notices before the document, some of
/// which start with `[` themselves, so every line that opens with `{` or `[`
/// is tried in turn. Text after the document is ignored.
fn parse_json_output<T: DeserializeOwned>(output: &str, what: &str) -> Result<T, AppError> {
    let mut last_error = None;
    for start in json_candidates(output) {
        let mut stream = serde_json::Deserializer::from_str(&output[start..]).into_iter::<T>();
        match stream.next() {
            Some(Ok(value)) => return Ok(value),
            Some(Err(e)) => last_error = Some(e.to_string()),
            None => {}
        }
    }
    Err(AppError::ParseError {
        what: what.into(),
        details: last_error.unwrap_or_else(|| "no JSON document in output".into()),
    })
}

/// Byte offsets of lines whose first non-blank character opens a JSON value.
fn json_candidates(output: &str) -> impl Iterator<Item = usize> + '_ {
    let mut offset = 0;
    output.split_inclusive('\n').filter_map(move |line| {
        let start = offset;
        offset += line.len();
        let indent = line.len() - line.trim_start().len();
        line.trim_start().starts_with(['{', '[']).then_some(start + indent)
    })
}

fn parse_theme_list(output: &str) -> Result<Vec<ThemeInfo>, AppError> {
    parse_json_output(output, "theme list JSON")
}

fn parse_push_response(output: &str) -> Result<ThemeInfo, AppError> {
    let response: PushResponse = parse_json_output(output, "theme push JSON")?;
    Ok(response.theme)
}

impl ShopifyPort for ShopifyCommandAdapter {
    fn is_installed(&self) -> bool {
        self.command(&["version"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn list_themes(&self, access: &StoreAccess) -> Result<Vec<ThemeInfo>, AppError> {
        let domain = access.store.domain();
        let output = self.run(access, &["theme", "list", "--store", &domain, "--json"])?;
        parse_theme_list(&output)
    }

    fn pull_theme(&self, access: &StoreAccess, theme_id: u64, path: &Path) -> Result<(), AppError> {
        let domain = access.store.domain();
        let theme = theme_id.to_string();
        let path = path.to_string_lossy();
        self.run(access, &["theme", "pull", "--theme", &theme, "--store", &domain, "--path", &path])?;
        Ok(())
    }

    fn push_unpublished(
        &self,
        access: &StoreAccess,
        name: &str,
        path: &Path,
    ) -> Result<ThemeInfo, AppError> {
        let domain = access.store.domain();
        let path = path.to_string_lossy();
        let output = self.run(access, &[
            "theme",
            "push",
            "--unpublished",
            "--theme",
            name,
            "--store",
            &domain,
            "--path",
            &path,
            "--json",
        ])?;
        parse_push_response(&output)
    }
}
