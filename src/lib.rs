pub mod commands;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod events;
pub mod frontmatter;
pub mod index;
pub mod notices;
pub mod picker;
pub mod plugin;
pub mod scan;
pub mod settings;
pub mod title;
pub mod vault;

// Re-export commonly used types for convenience.
pub use engine::CreatedNote;
pub use notices::Notice;
pub use plugin::{AppContext, TemplatePlugin};
pub use settings::{TemplateConfig, VaultSettings};
pub use vault::{Entry, FsVault};
