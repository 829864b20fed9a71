//! Terminal output helpers shared by the commands.
//!
//! Progress goes to stdout, warnings to stderr.

use console::style;

/// Section header for a numbered step.
pub fn step(message: &str) {
    println!("\n{}", style(message).yellow().bold());
}

pub fn info(message: &str) {
    println!("{}", style(message).cyan());
}

pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn warn(message: &str) {
    eprintln!("{}  {}", style("⚠️").yellow(), style(message).yellow());
}

/// Indented detail line.
pub fn detail(message: &str) {
    println!("   {}", style(message).dim());
}

/// Record a recovered failure and print it.
pub fn push_warning(warnings: &mut Vec<String>, message: String) {
    tracing::debug!(warning = %message, "step failed, continuing");
    warn(&message);
    warnings.push(message);
}
