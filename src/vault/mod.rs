//! Vault file-tree access.
//!
//! The host exposes its file system as a tree of files and folders; this
//! module models that tree as a tagged [`Entry`] variant and provides
//! [`FsVault`], the concrete accessor rooted at a vault directory. All paths
//! handed around the crate are vault-relative and forward-slash separated,
//! which keeps them usable as stable settings keys across platforms.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::notices::Notice;

/// Subdirectory inside a vault holding notestencil's own data
/// (settings.json, events.jsonl). Hidden from scans like any dot-folder.
pub const DATA_SUBDIR: &str = ".notestencil";

/// A node of the vault file tree.
#[derive(Debug, Clone)]
pub enum Entry {
    File { path: String },
    Directory { path: String, children: Vec<Entry> },
}

impl Entry {
    pub fn path(&self) -> &str {
        match self {
            Entry::File { path } | Entry::Directory { path, .. } => path,
        }
    }

    /// Last path component (file or folder name, extension included).
    pub fn name(&self) -> &str {
        file_name(self.path())
    }
}

/// Last component of a vault-relative path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Last component with the extension stripped; the display name of a note.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Concrete vault accessor backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Opens the vault rooted at `root`. The directory must already exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Notice::resource(format!(
                "Vault folder {} does not exist",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, rel: &str) -> PathBuf {
        let mut path = self.root.clone();
        for component in rel.split('/').filter(|c| !c.is_empty()) {
            path.push(component);
        }
        path
    }

    pub fn is_file(&self, rel: &str) -> bool {
        self.absolute(rel).is_file()
    }

    pub fn is_dir(&self, rel: &str) -> bool {
        self.absolute(rel).is_dir()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.absolute(rel).exists()
    }

    /// Resolves a vault-relative path to an [`Entry`], materializing the
    /// full subtree for directories. Dot-entries (the host's own data
    /// folders included) are skipped. Returns `None` if the path does not
    /// resolve.
    pub fn entry(&self, rel: &str) -> Option<Entry> {
        let rel = rel.trim_matches('/');
        let absolute = self.absolute(rel);
        if absolute.is_file() {
            Some(Entry::File {
                path: rel.to_string(),
            })
        } else if absolute.is_dir() {
            Some(self.directory_entry(rel, &absolute))
        } else {
            None
        }
    }

    fn directory_entry(&self, rel: &str, absolute: &Path) -> Entry {
        let mut children = Vec::new();
        for child in WalkDir::new(absolute)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            let name = child.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let child_rel = if rel.is_empty() {
                name
            } else {
                format!("{rel}/{name}")
            };
            if child.file_type().is_dir() {
                children.push(self.directory_entry(&child_rel, child.path()));
            } else if child.file_type().is_file() {
                children.push(Entry::File { path: child_rel });
            }
        }
        Entry::Directory {
            path: rel.to_string(),
            children,
        }
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.absolute(rel);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {rel}"))
    }

    /// Creates a new file. Fails if a file already exists at the path; the
    /// engine picks a collision-free name before calling this.
    pub fn create(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.absolute(rel);
        if path.exists() {
            return Err(Notice::write(format!("{rel} already exists")));
        }
        fs::write(&path, content).map_err(|err| {
            Notice::write(format!("Could not create {rel}: {err}"))
        })?;
        Ok(())
    }

    /// Path to the vault's notestencil data directory, created on demand.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let dir = self.root.join(DATA_SUBDIR);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(dir)
    }
}
