//! Folder exclusion rules
//!
//! A note is eligible for sampling unless its path equals an excluded folder
//! or lies underneath one. Comparisons run on normalized, forward-slash
//! paths so rules written on Windows match on every platform.

/// Clean a vault-relative path for filesystem lookups.
///
/// Converts `\\` to `/`, collapses repeated separators, and drops `.` segments
/// and leading/trailing separators. Every other character is kept, so a path
/// read from disk cleans to itself. The vault root cleans to the empty string.
pub fn clean_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a vault-relative path for rule comparisons.
///
/// [`clean_path`], then non-breaking spaces become plain spaces.
pub fn normalize_path(path: &str) -> String {
    clean_path(path)
        .chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{202F}' => ' ',
            other => other,
        })
        .collect()
}

/// Eligibility decisions for one exclusion set
#[derive(Debug, Clone, Default)]
pub struct FileEligibility {
    excluded: Vec<String>,
}

impl FileEligibility {
    pub fn new<I, S>(excluded_folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut excluded: Vec<String> = Vec::new();
        for folder in excluded_folders {
            let normalized = normalize_path(folder.as_ref());
            // The root would exclude everything by prefix; ignore it
            if normalized.is_empty() || excluded.contains(&normalized) {
                continue;
            }
            excluded.push(normalized);
        }
        Self { excluded }
    }

    /// Whether `folder` is itself one of the exclusion rules
    pub fn is_excluded_folder(&self, folder: &str) -> bool {
        let normalized = normalize_path(folder);
        self.excluded.iter().any(|f| *f == normalized)
    }

    /// Whether `path` is covered by any exclusion rule
    pub fn is_excluded_path(&self, path: &str) -> bool {
        self.matching_rule(path).is_some()
    }

    /// Keep the eligible paths, preserving input order
    pub fn filter_eligible<I, S>(&self, paths: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .filter(|p| !self.is_excluded_path(p.as_ref()))
            .collect()
    }

    /// The rule whose subtree contains `path`, if any
    pub fn matching_rule(&self, path: &str) -> Option<&str> {
        let normalized = normalize_path(path);
        self.excluded
            .iter()
            .find(|folder| {
                normalized == **folder
                    || normalized
                        .strip_prefix(folder.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}
