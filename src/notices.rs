//! User-visible failure classes.
//!
//! Every operation in this crate fails softly: the host renders the message
//! as a transient notice and the user retries after fixing configuration.
//! The three classes below let callers tell a missing setting apart from a
//! missing file or a rejected write without parsing message text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Notice {
    /// A required setting is absent (no template folder, no target folder,
    /// no stored record for the template).
    #[error("{0}")]
    ConfigurationMissing(String),
    /// A configured path no longer resolves on the vault file tree.
    #[error("{0}")]
    ResourceMissing(String),
    /// The vault rejected a file creation.
    #[error("{0}")]
    WriteFailure(String),
}

impl Notice {
    pub fn configuration(message: impl Into<String>) -> anyhow::Error {
        Notice::ConfigurationMissing(message.into()).into()
    }

    pub fn resource(message: impl Into<String>) -> anyhow::Error {
        Notice::ResourceMissing(message.into()).into()
    }

    pub fn write(message: impl Into<String>) -> anyhow::Error {
        Notice::WriteFailure(message.into()).into()
    }
}
