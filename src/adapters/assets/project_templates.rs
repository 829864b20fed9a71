use include_dir::{Dir, DirEntry, include_dir};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::AppError;
use crate::ports::TemplateStore;

static PROJECT_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates bundled into the binary.
///
/// Uses `[[[ ]]]` / `[% %]` / `[# #]` delimiters so GitHub Actions `${{ }}`
/// expressions and JavaScript template literals pass through untouched.
pub struct EmbeddedTemplateStore {
    env: Environment<'static>,
    names: Vec<&'static str>,
}

impl EmbeddedTemplateStore {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        let syntax = SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[[", "]]]")
            .comment_delimiters("[#", "#]")
            .build()
            .map_err(|err| AppError::Template {
                path: "<syntax>".into(),
                details: format!("Failed to configure template syntax: {}", err),
            })?;
        env.set_syntax(syntax);

        let mut names = Vec::new();
        register_templates(&mut env, &PROJECT_TEMPLATES_DIR, &mut names)?;
        names.sort_unstable();
        Ok(Self { env, names })
    }

    /// Names of every bundled template, sorted.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}

fn register_templates(
    env: &mut Environment<'static>,
    dir: &'static Dir<'static>,
    names: &mut Vec<&'static str>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let name = file.path().to_str().ok_or_else(|| AppError::Template {
                    path: file.path().to_string_lossy().to_string(),
                    details: "template path is not UTF-8".into(),
                })?;
                let content = file.contents_utf8().ok_or_else(|| AppError::Template {
                    path: name.to_string(),
                    details: "template is not UTF-8".into(),
                })?;
                env.add_template(name, content).map_err(|err| AppError::Template {
                    path: name.to_string(),
                    details: err.to_string(),
                })?;
                names.push(name);
            }
            DirEntry::Dir(subdir) => register_templates(env, subdir, names)?,
        }
    }
    Ok(())
}

impl TemplateStore for EmbeddedTemplateStore {
    fn render(&self, name: &str, context: &Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|err| AppError::Template {
            path: name.to_string(),
            details: err.to_string(),
        })?;
        let rendered = template
            .render(context)
            .map_err(|err| AppError::Template { path: name.to_string(), details: err.to_string() })?;

        if name.ends_with(".yml") {
            serde_yaml::from_str::<serde_yaml::Value>(&rendered).map_err(|err| {
                AppError::Template {
                    path: name.to_string(),
                    details: format!("rendered workflow is not valid YAML: {}", err),
                }
            })?;
        }

        Ok(rendered)
    }
}
