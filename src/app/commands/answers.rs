//! Project, store and token collection for `init`, backed by the credential cache.

use crate::app::output;
use crate::domain::{
    AppError, CredentialCache, ProjectName, StoreAccess, StoreDomain, StoredCredential,
};
use crate::ports::{CredentialStore, Prompter};

/// Values supplied on the command line; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct AnswerOptions {
    pub project: Option<String>,
    pub store: Option<String>,
    pub token: Option<String>,
    pub use_cached: bool,
    pub save_token: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Cache,
    Prompt,
}

#[derive(Debug, Clone)]
pub struct Answers {
    pub project: ProjectName,
    pub access: StoreAccess,
    pub token_source: TokenSource,
    pub token_saved: bool,
}

/// Resolve project, store and token, prompting for whatever is missing.
///
/// Order is project, store, token. With `use_cached` the store comes first
/// so the cached project name can pre-fill the project prompt.
pub fn collect(
    prompter: &dyn Prompter,
    credentials: &dyn CredentialStore,
    options: &AnswerOptions,
) -> Result<Answers, AppError> {
    let cache = credentials.load()?;

    if options.use_cached {
        let store = select_cached_store(prompter, &cache, options.store.as_deref())?;
        let cached = cache
            .get(store.slug())
            .cloned()
            .ok_or_else(|| AppError::StoreNotCached(store.slug().to_string()))?;
        output::info(&format!("Using cached configuration for {}", store));

        let project = match &options.project {
            Some(name) => ProjectName::parse(name)?,
            None => prompt_project(prompter, cached.project_name.as_deref())?,
        };
        let (token, token_source) = match flag_token(options) {
            Some(token) => (token, TokenSource::Flag),
            None => (cached.token, TokenSource::Cache),
        };
        return finish(prompter, credentials, options, project, store, token, token_source);
    }

    let project = match &options.project {
        Some(name) => ProjectName::parse(name)?,
        None => prompt_project(prompter, None)?,
    };
    let store = match &options.store {
        Some(input) => StoreDomain::parse(input)?,
        None => prompt_store(prompter)?,
    };

    let (token, token_source) = match (flag_token(options), cache.get(store.slug())) {
        (Some(token), _) => (token, TokenSource::Flag),
        (None, Some(credential))
            if prompter.confirm(&format!("Use the saved theme token for {}?", store), true)? =>
        {
            (credential.token.clone(), TokenSource::Cache)
        }
        (None, _) => (prompt_token(prompter)?, TokenSource::Prompt),
    };

    finish(prompter, credentials, options, project, store, token, token_source)
}

fn finish(
    prompter: &dyn Prompter,
    credentials: &dyn CredentialStore,
    options: &AnswerOptions,
    project: ProjectName,
    store: StoreDomain,
    token: String,
    token_source: TokenSource,
) -> Result<Answers, AppError> {
    let save = match token_source {
        _ if options.save_token => true,
        TokenSource::Prompt => prompter.confirm("Save this token for future use?", true)?,
        TokenSource::Flag | TokenSource::Cache => false,
    };
    if save {
        credentials.save(store.slug(), StoredCredential::new(&token, Some(project.as_str())))?;
        output::success(&format!("Saved token for {}", store));
    }

    Ok(Answers { project, access: StoreAccess::new(store, &token), token_source, token_saved: save })
}

fn flag_token(options: &AnswerOptions) -> Option<String> {
    options.token.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

fn select_cached_store(
    prompter: &dyn Prompter,
    cache: &CredentialCache,
    requested: Option<&str>,
) -> Result<StoreDomain, AppError> {
    if cache.is_empty() {
        return Err(AppError::config_error(
            "No cached store configurations. Run init without --use-cached first.",
        ));
    }
    if let Some(input) = requested {
        return StoreDomain::parse(input);
    }

    let slugs = cache.slugs();
    let index = if slugs.len() == 1 {
        0
    } else {
        prompter.select("Which store do you want to use?", &slugs, 0)?
    };
    let slug = slugs
        .get(index)
        .ok_or_else(|| AppError::Prompt(format!("store selection {} out of range", index)))?;
    StoreDomain::parse(slug)
}

fn prompt_project(prompter: &dyn Prompter, default: Option<&str>) -> Result<ProjectName, AppError> {
    loop {
        let input = prompter.input("What is your client/project name?", default)?;
        match ProjectName::parse(&input) {
            Ok(project) => return Ok(project),
            Err(e) => output::warn(&e.to_string()),
        }
    }
}

fn prompt_store(prompter: &dyn Prompter) -> Result<StoreDomain, AppError> {
    loop {
        let input =
            prompter.input("What is your Shopify store? (e.g. my-store or my-store.myshopify.com)", None)?;
        match StoreDomain::parse(&input) {
            Ok(store) => return Ok(store),
            Err(e) => output::warn(&e.to_string()),
        }
    }
}

fn prompt_token(prompter: &dyn Prompter) -> Result<String, AppError> {
    loop {
        let token = prompter.password("Shopify CLI theme access token")?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
        output::warn("The theme access token cannot be empty");
    }
}
