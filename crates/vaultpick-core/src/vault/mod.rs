//! Vault access for vaultpick
//!
//! The vault is a directory of markdown notes. Everything the sampler and
//! orphan finder need from it goes through [`NoteHost`]: enumerate notes,
//! resolve a path, and build the link graph. [`Vault`] implements it over
//! the filesystem.

pub mod frontmatter;
pub mod graph;
pub mod links;
pub mod paths;

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::VaultConfig;
use crate::eligibility::clean_path;
use crate::error::{Result, VaultError};
use crate::state::StateFile;
use crate::{map_io_err, trace_time};
pub use graph::{ForwardLinkMap, LinkGraph, LinkIndex, LinkResolver, OutboundLinks};
use links::LinkPatterns;
use paths::{ALWAYS_SKIPPED, CONFIG_FILE, STATE_FILE, VAULTPICK_DIR};

/// A note known to the vault
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    /// Vault-relative path with `/` separators
    pub path: String,
    /// File name without extension
    pub basename: String,
}

impl Note {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let file = path.rsplit('/').next().unwrap_or(&path);
        let basename = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => file.to_string(),
        };
        Self { path, basename }
    }
}

/// Capabilities the core needs from whatever owns the notes
pub trait NoteHost {
    /// Every note in host order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// The note at `path`, if it still exists
    fn resolve(&self, path: &str) -> Result<Option<Note>>;

    /// Links across the whole vault
    fn link_graph(&self) -> Result<LinkGraph>;
}

/// A vault on disk
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    config: VaultConfig,
}

impl Vault {
    /// Discover a vault by walking up from `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = paths::discover_vault(start)?;
        Self::open(&root)
    }

    /// Open the vault rooted at `root`
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(VaultError::VaultNotFound {
                search_root: root.to_path_buf(),
            });
        }

        let config = VaultConfig::load_or_default(&root.join(VAULTPICK_DIR).join(CONFIG_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Create `.vaultpick/` with a default config under `root`.
    ///
    /// Idempotent: an existing config is left untouched. Returns the vault and
    /// whether a new config file was written.
    pub fn init(root: &Path) -> Result<(Self, bool)> {
        let meta = root.join(VAULTPICK_DIR);
        fs::create_dir_all(&meta).map_err(|e| map_io_err!("create", meta, e))?;

        let config_path = meta.join(CONFIG_FILE);
        let created = !config_path.exists();
        if created {
            VaultConfig::default().save(&config_path)?;
        }

        Ok((Self::open(root)?, created))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(VAULTPICK_DIR).join(CONFIG_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(VAULTPICK_DIR).join(STATE_FILE)
    }

    pub fn state_file(&self) -> StateFile {
        StateFile::new(self.state_path())
    }

    /// Absolute filesystem path of a note
    pub fn absolute_path(&self, note: &Note) -> PathBuf {
        note.path
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    /// Whether `folder` names a scanned directory inside the vault
    pub fn is_folder(&self, folder: &str) -> bool {
        let cleaned = clean_path(folder);
        match self.local_path(&cleaned) {
            Some(path) => !cleaned.is_empty() && path.is_dir(),
            None => false,
        }
    }

    /// Filesystem path for a vault-relative path, `None` for paths that
    /// escape the vault or pass through skipped directories
    fn local_path(&self, relative: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(segment) => {
                    let name = segment.to_string_lossy();
                    if self.is_skipped_name(&name) {
                        return None;
                    }
                    path.push(segment);
                }
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(path)
    }

    fn is_skipped_name(&self, name: &str) -> bool {
        ALWAYS_SKIPPED.contains(&name) || (!self.config.include_hidden && name.starts_with('.'))
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        entry.depth() == 0 || !self.is_skipped_name(&entry.file_name().to_string_lossy())
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(segments.join("/"))
    }

    fn read_note(&self, note: &Note) -> Result<String> {
        let path = self.absolute_path(note);
        let bytes = fs::read(&path).map_err(|e| map_io_err!("read", path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl NoteHost for Vault {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn list_notes(&self) -> Result<Vec<Note>> {
        let start = Instant::now();
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = entry.map_err(|e| map_io_err!("scan", self.root, e))?;
            if !entry.file_type().is_file() && !entry.path().is_file() {
                continue;
            }
            if !self.config.is_note_file(entry.path()) {
                continue;
            }
            if let Some(relative) = self.relative_path(entry.path()) {
                notes.push(Note::new(relative));
            }
        }

        trace_time!(start, "list_notes", notes = notes.len());
        Ok(notes)
    }

    fn resolve(&self, path: &str) -> Result<Option<Note>> {
        let cleaned = clean_path(path);
        if cleaned.is_empty() {
            return Ok(None);
        }
        let Some(local) = self.local_path(&cleaned) else {
            return Ok(None);
        };
        if local.is_file() && self.config.is_note_file(&local) {
            Ok(Some(Note::new(cleaned)))
        } else {
            Ok(None)
        }
    }

    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn link_graph(&self) -> Result<LinkGraph> {
        let start = Instant::now();
        let notes = self.list_notes()?;
        let patterns = LinkPatterns::new()?;
        let resolver = LinkResolver::new(notes.iter().map(|n| n.path.as_str()), &self.config.extensions);

        let mut graph = LinkGraph::new();
        for note in &notes {
            let content = self.read_note(note)?;
            let extracted = patterns.extract(&content, &note.path);
            graph.add_note(&note.path, &extracted, &resolver);
        }

        debug!(notes = graph.note_count(), "link_graph_built");
        trace_time!(start, "link_graph");
        Ok(graph)
    }
}
