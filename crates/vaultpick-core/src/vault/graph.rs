//! Vault link graph
//!
//! Per-note outbound link/embed counts plus the forward-link map
//! (`source -> target -> count`) over resolved note targets.

use std::collections::{BTreeMap, HashMap};

use super::links::ExtractedLinks;
use crate::eligibility::clean_path;

/// Outbound link counts for one note, resolved or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutboundLinks {
    pub links: usize,
    pub embeds: usize,
}

impl OutboundLinks {
    pub fn is_empty(&self) -> bool {
        self.links == 0 && self.embeds == 0
    }
}

/// Forward-link map: source note path to resolved targets with counts
pub type ForwardLinkMap = BTreeMap<String, BTreeMap<String, usize>>;

/// Read-only view of a vault's links
pub trait LinkIndex {
    /// Outbound links and embeds written in `path`
    fn outbound(&self, path: &str) -> OutboundLinks;

    /// Resolved forward links for the whole vault
    fn forward_links(&self) -> &ForwardLinkMap;
}

/// In-memory link graph
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    outbound: HashMap<String, OutboundLinks>,
    forward: ForwardLinkMap,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the links extracted from `source`, resolving targets with `resolver`
    pub fn add_note(&mut self, source: &str, extracted: &ExtractedLinks, resolver: &LinkResolver) {
        self.outbound.insert(
            source.to_string(),
            OutboundLinks {
                links: extracted.links.len(),
                embeds: extracted.embeds.len(),
            },
        );

        let targets = extracted
            .links
            .iter()
            .chain(&extracted.embeds)
            .chain(&extracted.frontmatter_links);
        for target in targets {
            if let Some(resolved) = resolver.resolve(target, source) {
                self.add_forward(source, &resolved);
            }
        }
    }

    /// Set outbound counts for `path` directly
    pub fn set_outbound(&mut self, path: &str, outbound: OutboundLinks) {
        self.outbound.insert(path.to_string(), outbound);
    }

    /// Count one resolved link from `source` to `target`
    pub fn add_forward(&mut self, source: &str, target: &str) {
        *self
            .forward
            .entry(source.to_string())
            .or_default()
            .entry(target.to_string())
            .or_insert(0) += 1;
    }

    pub fn note_count(&self) -> usize {
        self.outbound.len()
    }
}

impl LinkIndex for LinkGraph {
    fn outbound(&self, path: &str) -> OutboundLinks {
        self.outbound.get(path).copied().unwrap_or_default()
    }

    fn forward_links(&self) -> &ForwardLinkMap {
        &self.forward
    }
}

/// Resolves link text to vault note paths.
///
/// Order: exact vault path, then path relative to the linking note, then by
/// file name (or trailing path) anywhere in the vault. Matching ignores case
/// and the note extension. Among name matches a note in the linking note's
/// folder wins, then the shortest path.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    extensions: Vec<String>,
    by_lower_path: HashMap<String, String>,
    by_stem: HashMap<String, Vec<String>>,
}

impl LinkResolver {
    pub fn new<I, S>(note_paths: I, extensions: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
        let mut by_lower_path = HashMap::new();
        let mut by_stem: HashMap<String, Vec<String>> = HashMap::new();

        for path in note_paths {
            let path = path.as_ref();
            let lower = path.to_lowercase();
            let stem = strip_extension(file_name(&lower), &extensions).to_string();
            by_stem.entry(stem).or_default().push(path.to_string());
            by_lower_path.insert(lower, path.to_string());
        }

        for paths in by_stem.values_mut() {
            paths.sort_by(|a, b| depth(a).cmp(&depth(b)).then_with(|| a.cmp(b)));
        }

        Self {
            extensions,
            by_lower_path,
            by_stem,
        }
    }

    /// Resolve `target` as written in the note at `source`
    pub fn resolve(&self, target: &str, source: &str) -> Option<String> {
        let target = target.trim().replace('\\', "/");
        if target.is_empty() {
            return None;
        }

        let source_dir = parent_dir(source);
        let explicit_relative = target.starts_with("./") || target.starts_with("../");

        if explicit_relative {
            return join_relative(source_dir, &target).and_then(|p| self.lookup_exact(&p));
        }

        let cleaned = clean_path(&target);
        if cleaned.is_empty() {
            return None;
        }
        if let Some(hit) = self.lookup_exact(&cleaned) {
            return Some(hit);
        }
        if !source_dir.is_empty() {
            if let Some(hit) =
                join_relative(source_dir, &cleaned).and_then(|p| self.lookup_exact(&p))
            {
                return Some(hit);
            }
        }

        self.lookup_by_name(&cleaned, source_dir)
    }

    fn lookup_exact(&self, path: &str) -> Option<String> {
        let lower = path.to_lowercase();
        if let Some(hit) = self.by_lower_path.get(&lower) {
            return Some(hit.clone());
        }
        self.extensions
            .iter()
            .find_map(|ext| self.by_lower_path.get(&format!("{lower}.{ext}")))
            .cloned()
    }

    fn lookup_by_name(&self, target: &str, source_dir: &str) -> Option<String> {
        let lower = target.to_lowercase();
        let wanted = strip_extension(&lower, &self.extensions);
        let stem = file_name(wanted);
        let candidates = self.by_stem.get(stem)?;

        let matches_suffix = |path: &&String| {
            let path_lower = path.to_lowercase();
            let without_ext = strip_extension(&path_lower, &self.extensions);
            without_ext == wanted || without_ext.ends_with(&format!("/{wanted}"))
        };

        let mut matching = candidates.iter().filter(matches_suffix).peekable();
        let first = matching.peek().cloned().cloned();
        matching
            .find(|path| parent_dir(path).eq_ignore_ascii_case(source_dir))
            .cloned()
            .or(first)
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

fn depth(path: &str) -> usize {
    path.matches('/').count()
}

fn strip_extension<'a>(name: &'a str, extensions: &[String]) -> &'a str {
    for ext in extensions {
        if let Some(stripped) = name.strip_suffix(ext.as_str()) {
            if let Some(stem) = stripped.strip_suffix('.') {
                return stem;
            }
        }
    }
    name
}

/// Join `relative` onto `dir`, resolving `.` and `..`. `None` when the
/// result would escape the vault root.
fn join_relative(dir: &str, relative: &str) -> Option<String> {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}
