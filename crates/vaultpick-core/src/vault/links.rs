//! Link and embed extraction from note content
//!
//! Recognizes wiki links (`[[target|alias]]`), wiki embeds (`![[target]]`),
//! markdown links (`[text](target.md)`) and markdown embeds
//! (`![alt](image.png)`). Code blocks and inline code are ignored. Wiki links
//! in frontmatter string values are collected separately.

use regex::Regex;
use tracing::warn;

use super::frontmatter::{split_frontmatter, string_values};
use crate::error::{Result, VaultError};

/// Link targets found in one note.
///
/// Targets have alias and heading/block suffixes removed. An empty target
/// is a link to a heading in the same note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    pub links: Vec<String>,
    pub embeds: Vec<String>,
    pub frontmatter_links: Vec<String>,
}

/// Compiled link patterns, built once per scan
#[derive(Debug)]
pub struct LinkPatterns {
    wiki: Regex,
    markdown: Regex,
    inline_code: Regex,
    scheme: Regex,
}

impl LinkPatterns {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| VaultError::Other(format!("failed to compile link regex: {}", e)))
        };

        Ok(Self {
            wiki: compile(r"(!?)\[\[([^\[\]]+?)\]\]")?,
            markdown: compile(r"(!?)\[([^\[\]]*)\]\(([^()]*)\)")?,
            inline_code: compile(r"`[^`\n]*`")?,
            scheme: compile(r"^[A-Za-z][A-Za-z0-9+.\-]*:")?,
        })
    }

    /// Extract links from a full note, frontmatter included
    pub fn extract(&self, content: &str, note_path: &str) -> ExtractedLinks {
        let (frontmatter, body) = split_frontmatter(content);

        let mut extracted = ExtractedLinks::default();
        let body = self.strip_code(body);

        for cap in self.wiki.captures_iter(&body) {
            let target = wiki_target(&cap[2]);
            if cap[1].is_empty() {
                extracted.links.push(target);
            } else {
                extracted.embeds.push(target);
            }
        }

        for cap in self.markdown.captures_iter(&body) {
            let Some(target) = self.markdown_target(&cap[3]) else {
                continue;
            };
            if cap[1].is_empty() {
                extracted.links.push(target);
            } else {
                extracted.embeds.push(target);
            }
        }

        if let Some(yaml) = frontmatter {
            match string_values(yaml) {
                Ok(values) => {
                    for value in values {
                        for cap in self.wiki.captures_iter(&value) {
                            extracted.frontmatter_links.push(wiki_target(&cap[2]));
                        }
                    }
                }
                Err(e) => {
                    warn!(note = note_path, error = %e, "Ignoring unparseable frontmatter");
                }
            }
        }

        extracted
    }

    /// Blank out fenced code blocks and inline code spans
    fn strip_code(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len());
        let mut fence: Option<&str> = None;

        for line in body.split_inclusive('\n') {
            let trimmed = line.trim_start();
            let marker = if trimmed.starts_with("```") {
                Some("```")
            } else if trimmed.starts_with("~~~") {
                Some("~~~")
            } else {
                None
            };

            match (fence, marker) {
                (None, Some(m)) => {
                    fence = Some(m);
                    out.push('\n');
                }
                (Some(open), Some(m)) if open == m => {
                    fence = None;
                    out.push('\n');
                }
                (Some(_), _) => out.push('\n'),
                (None, None) => out.push_str(&self.inline_code.replace_all(line, "")),
            }
        }

        out
    }

    fn markdown_target(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        let raw = match raw.strip_prefix('<') {
            Some(rest) => rest.split('>').next().unwrap_or_default(),
            // Anything after whitespace is a link title
            None => raw.split_whitespace().next().unwrap_or_default(),
        };

        // Pure `#anchor` targets point inside the same note
        if raw.is_empty() || raw.starts_with('#') || self.scheme.is_match(raw) {
            return None;
        }

        let decoded = percent_decode(raw);
        let target = decoded.split('#').next().unwrap_or_default();
        Some(target.trim().to_string())
    }
}

fn wiki_target(inner: &str) -> String {
    let target = inner.split('|').next().unwrap_or_default();
    let target = target.split('#').next().unwrap_or_default();
    target.trim().to_string()
}

/// Decode `%XX` escapes; malformed escapes are kept verbatim
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(byte) = decoded {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
