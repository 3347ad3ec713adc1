//! Mapping suggestion labels to page anchors.
//!
//! Section names returned by the engine are free text. Before a host uses
//! one to locate an element it is reduced to a plain anchor id and
//! rejected unless it matches `^[a-z0-9-]+$`, so a crafted suggestion
//! label can never reach a selector.

use std::sync::LazyLock;

use regex::Regex;

/// Prefix marking a suggestion label as navigation rather than quick-reply.
pub const NAVIGATION_PREFIX: &str = "Go to ";

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("invalid anchor pattern"));

/// Whether a suggestion label asks for section navigation.
pub fn is_navigation_label(label: &str) -> bool {
    label.starts_with(NAVIGATION_PREFIX)
}

/// Reduce a section label to a safe anchor id.
///
/// Removes the first "go to " occurrence, lower-cases, turns spaces into
/// hyphens, and drops every other character outside `[a-z0-9-]`. Returns
/// `None` when nothing valid remains.
pub fn section_anchor(label: &str) -> Option<String> {
    let lowered = label.trim().to_lowercase();
    let stripped = lowered.replacen("go to ", "", 1);

    let id: String = stripped
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    if ANCHOR_RE.is_match(&id) {
        Some(id)
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
