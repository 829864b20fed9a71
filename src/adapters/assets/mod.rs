pub mod project_templates;

pub use project_templates::EmbeddedTemplateStore;
