use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell-script stand-ins for `git`, `gh`, `npm`, `npx` and `shopify`.
///
/// Each script appends `<tool> <args>` to a shared log and exits 0.
pub struct FakeTools {
    bin_dir: PathBuf,
    log_file: PathBuf,
}

impl FakeTools {
    pub fn install(bin_dir: &Path, log_file: &Path) -> Self {
        fs::create_dir_all(bin_dir).expect("Failed to create bin dir");

        for tool in ["git", "npm", "npx"] {
            write_script(bin_dir, tool, &logging_script(tool, log_file, ""));
        }

        let shopify = r#"case "$1 $2" in
    "theme list")
        echo '[{"id":1,"name":"Dawn","role":"live"}]'
        ;;
    "theme push")
        echo '{"theme":{"id":2,"name":"Staging","role":"unpublished"}}'
        ;;
esac
"#;
        write_script(bin_dir, "shopify", &logging_script("shopify", log_file, shopify));

        let gh = r#"case "$1 $2" in
    "auth status")
        exit 1
        ;;
esac
"#;
        write_script(bin_dir, "gh", &logging_script("gh", log_file, gh));

        Self { bin_dir: bin_dir.to_path_buf(), log_file: log_file.to_path_buf() }
    }

    /// `PATH` with the fakes first.
    pub fn path_env(&self) -> String {
        let system = env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin_dir.display(), system)
    }

    pub fn log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log().lines().map(str::to_string).collect()
    }
}

fn logging_script(tool: &str, log_file: &Path, body: &str) -> String {
    format!(
        "#!/bin/sh\necho \"{} $*\" >> \"{}\"\n{}exit 0\n",
        tool,
        log_file.display(),
        body
    )
}

fn write_script(bin_dir: &Path, name: &str, content: &str) {
    let path = bin_dir.join(name);
    fs::write(&path, content).expect("Failed to write fake tool");
    let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to set permissions");
}
