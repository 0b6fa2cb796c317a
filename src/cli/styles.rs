use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static COMMAND: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static NAME: Lazy<Style> = Lazy::new(Style::new);
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static USAGE: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static NOTE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TAGS: Lazy<Style> = Lazy::new(|| Style::new().blue());
pub static MATCH: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
