//! Project catalog and detail store.
//!
//! DESIGN
//! ======
//! Both tables are compiled-in constants. The landing page walks
//! [`CATALOG`] in order; the detail page resolves a raw path segment through
//! [`project_detail`], which consults a map built once from [`DETAILS`].
//! Every catalog id must have a detail record. That is asserted at compile
//! time so the two tables cannot drift apart.

mod data;

use std::collections::BTreeMap;
use std::sync::LazyLock;

pub use data::{CATALOG, DETAILS};

/// Placeholder link meaning "no live demo available".
pub const NO_DEMO: &str = "#";

// =============================================================================
// RECORDS
// =============================================================================

/// Project card shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: u32,
    pub name: &'static str,
    pub summary: &'static str,
    pub tech_stack: &'static [&'static str],
    pub image: &'static str,
    pub demo_link: &'static str,
    pub github_link: &'static str,
    pub story: &'static str,
}

/// Extended project record shown on `/projects/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: u32,
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub images: &'static [&'static str],
    pub built_for: &'static str,
    pub demo_link: &'static str,
    pub github_link: &'static str,
}

impl ProjectSummary {
    /// Demo URL, or `None` when the project has no live demo.
    #[must_use]
    pub fn demo(&self) -> Option<&'static str> {
        demo_url(self.demo_link)
    }

    /// Path of the detail page for this project.
    #[must_use]
    pub fn detail_href(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

impl ProjectDetail {
    /// Demo URL, or `None` when the project has no live demo.
    #[must_use]
    pub fn demo(&self) -> Option<&'static str> {
        demo_url(self.demo_link)
    }
}

fn demo_url(link: &'static str) -> Option<&'static str> {
    (link != NO_DEMO).then_some(link)
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Result of resolving a detail-page path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(&'static ProjectDetail),
    NotFound,
}

impl Lookup {
    #[must_use]
    pub fn found(self) -> Option<&'static ProjectDetail> {
        match self {
            Self::Found(detail) => Some(detail),
            Self::NotFound => None,
        }
    }
}

static DETAIL_INDEX: LazyLock<BTreeMap<u32, &'static ProjectDetail>> =
    LazyLock::new(|| DETAILS.iter().map(|detail| (detail.id, detail)).collect());

/// Resolve a raw `/projects/{id}` segment to its detail record.
///
/// The segment is read as a base-10 integer prefix: leading whitespace and an
/// optional sign are skipped, then the longest run of digits is taken, so
/// `"1abc"`, `" 1"` and `"1.5"` all name project 1. Segments with no leading
/// digits, zero, negatives and ids absent from the store all yield
/// [`Lookup::NotFound`].
#[must_use]
pub fn project_detail(id: &str) -> Lookup {
    let Some(id) = parse_id(id) else {
        return Lookup::NotFound;
    };
    DETAIL_INDEX
        .get(&id)
        .copied()
        .map_or(Lookup::NotFound, Lookup::Found)
}

fn parse_id(raw: &str) -> Option<u32> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || negative {
        return None;
    }
    rest[..digits].parse::<u32>().ok().filter(|id| *id >= 1)
}

// =============================================================================
// BUILD-TIME CHECKS
// =============================================================================

const fn has_detail(id: u32) -> bool {
    let mut i = 0;
    while i < DETAILS.len() {
        if DETAILS[i].id == id {
            return true;
        }
        i += 1;
    }
    false
}

const fn catalog_resolves() -> bool {
    let mut i = 0;
    while i < CATALOG.len() {
        if !has_detail(CATALOG[i].id) {
            return false;
        }
        i += 1;
    }
    true
}

const fn detail_ids_valid() -> bool {
    let mut i = 0;
    while i < DETAILS.len() {
        if DETAILS[i].id == 0 {
            return false;
        }
        let mut j = i + 1;
        while j < DETAILS.len() {
            if DETAILS[i].id == DETAILS[j].id {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(catalog_resolves(), "every catalog project needs a detail record");
const _: () = assert!(detail_ids_valid(), "detail ids must be unique and >= 1");

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
