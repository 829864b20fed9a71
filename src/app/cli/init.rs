//! Init command implementation.

use std::env;

use clap::Args;
use console::style;

use crate::app::commands::answers::AnswerOptions;
use crate::app::commands::init::{InitOptions, InitOutcome};
use crate::domain::AppError;

const TOKEN_ENV: &str = "SHOPIFY_CLI_THEME_TOKEN";

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Client/project name
    #[arg(long)]
    project: Option<String>,
    /// Store name, <store>.myshopify.com, or store URL
    #[arg(long)]
    store: Option<String>,
    /// Theme access token
    #[arg(long, env = "SHOPIFY_CLI_THEME_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Use a store configuration from the credential cache
    #[arg(long)]
    use_cached: bool,
    /// Save the token to the credential cache without asking
    #[arg(long)]
    save_token: bool,
    /// Skip GitHub repository setup
    #[arg(long)]
    no_github: bool,
    /// Skip dependency installation and git hooks
    #[arg(long)]
    skip_install: bool,
    /// Skip the Shopify theme step
    #[arg(long)]
    skip_theme: bool,
}

impl InitArgs {
    /// Defaults for a bare `mili-release` invocation; the token still comes from the environment.
    pub fn from_env() -> Self {
        Self { token: env::var(TOKEN_ENV).ok(), ..Default::default() }
    }

    fn into_options(self) -> InitOptions {
        InitOptions {
            answers: AnswerOptions {
                project: self.project,
                store: self.store,
                token: self.token,
                use_cached: self.use_cached,
                save_token: self.save_token,
            },
            github: !self.no_github,
            install: !self.skip_install,
            theme: !self.skip_theme,
        }
    }
}

pub fn run_init(args: InitArgs) -> Result<(), AppError> {
    println!("{}", style("🚀 Welcome to Mili Release - Shopify Theme Automation").bold());

    let outcome = crate::app::api::init(&args.into_options())?;
    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &InitOutcome) {
    let domain = outcome.access.store.domain();
    println!();
    println!("✅ Theme project ready: {} ({})", outcome.project, domain);

    let scaffold = &outcome.scaffold;
    println!(
        "  Created {} file(s), updated {}, unchanged {}",
        scaffold.created.len(),
        scaffold.updated.len(),
        scaffold.unchanged.len()
    );
    if !scaffold.backups.is_empty() {
        println!("  Backups: {}", scaffold.backups.join(", "));
    }
    if outcome.token_saved {
        println!("  Token cached for {}", domain);
    }

    if let Some(theme) = &outcome.theme {
        if let Some(pulled) = &theme.pulled {
            println!("  Pulled theme: {}", pulled.label());
        }
        if let Some(staging) = &theme.staging {
            println!("  Staging theme: {}", staging.label());
        }
        println!("  Themes: {}/themes", outcome.access.store.admin_url());
    }
    if let Some(github) = &outcome.github {
        println!("  Repository: https://github.com/{} (branch '{}')", github.repo, github.branch);
        if !github.secrets.is_empty() {
            println!("  Secrets: {}", github.secrets.join(", "));
        }
    }

    if !outcome.warnings.is_empty() {
        println!("⚠️  Completed with warnings:");
        for warning in &outcome.warnings {
            println!("  • {}", warning);
        }
    }

    println!("\nNext steps:");
    println!("  1. shopify theme dev --store {}", domain);
    match &outcome.github {
        Some(github) => {
            println!("  2. Watch releases at https://github.com/{}/actions", github.repo)
        }
        None => println!(
            "  2. Create a GitHub repository and add the SHOPIFY_FLAG_STORE and SHOPIFY_CLI_THEME_TOKEN secrets"
        ),
    }
    println!("  3. Commit with conventional messages (feat:, fix:, chore:) to drive releases");
}
