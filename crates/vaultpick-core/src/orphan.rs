//! Orphan note detection
//!
//! A note is an orphan when it links to nothing, embeds nothing, and no
//! note's forward links point at it.

use std::collections::HashSet;

use crate::vault::{ForwardLinkMap, LinkIndex, Note};

/// Every note that appears as a target in the forward-link map
pub fn inbound_targets(forward: &ForwardLinkMap) -> HashSet<&str> {
    forward
        .values()
        .flat_map(|targets| targets.keys())
        .map(String::as_str)
        .collect()
}

/// Orphan test for one note against a precomputed inbound set
pub fn is_orphan<L: LinkIndex>(path: &str, index: &L, inbound: &HashSet<&str>) -> bool {
    index.outbound(path).is_empty() && !inbound.contains(path)
}

/// First orphan among `eligible`, in the order given
pub fn find_orphan<'n, L: LinkIndex>(eligible: &'n [Note], index: &L) -> Option<&'n Note> {
    let inbound = inbound_targets(index.forward_links());
    eligible
        .iter()
        .find(|note| is_orphan(&note.path, index, &inbound))
}

/// Every orphan among `eligible`, in the order given
pub fn find_orphans<'n, L: LinkIndex>(eligible: &'n [Note], index: &L) -> Vec<&'n Note> {
    let inbound = inbound_targets(index.forward_links());
    eligible
        .iter()
        .filter(|note| is_orphan(&note.path, index, &inbound))
        .collect()
}
