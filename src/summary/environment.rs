//! Environment-level dependency detection.
//!
//! A checklist entry is found when its lower-cased text occurs anywhere in a
//! lower-cased component name. This is a substring heuristic: a component
//! named `Azure.Storage.Blobs` matches both "Azure" and "Blob Storage" only if
//! both substrings occur, and unrelated names can match by accident.

use crate::model::{EnvChecklist, SbomDocument};
use std::collections::BTreeSet;

/// Checklist entries found and not found among component names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDetection {
    /// Entries matched by at least one component, sorted
    pub found: BTreeSet<&'static str>,
    /// Entries matched by no component, in checklist order
    pub missing: Vec<&'static str>,
}

impl EnvironmentDetection {
    /// Match every component name against every checklist entry.
    #[must_use]
    pub fn detect(doc: &SbomDocument, checklist: &EnvChecklist) -> Self {
        let needles: Vec<(&'static str, String)> = checklist
            .entries()
            .iter()
            .map(|entry| (*entry, entry.to_lowercase()))
            .collect();

        let mut found = BTreeSet::new();
        for comp in &doc.components {
            let name = comp.name_or_empty().to_lowercase();
            for (entry, needle) in &needles {
                if name.contains(needle.as_str()) {
                    found.insert(*entry);
                }
            }
        }

        let missing = checklist
            .entries()
            .iter()
            .copied()
            .filter(|entry| !found.contains(entry))
            .collect();

        Self { found, missing }
    }
}
