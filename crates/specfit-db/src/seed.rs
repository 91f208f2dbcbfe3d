//! Bundled sample requirements.
//!
//! The seed covers every built-in title for both tiers so a fresh catalog
//! can answer checks without an external import.

use anyhow::{Context, Result};

use specfit_core::RequirementProfile;

const SEED_JSON: &str = include_str!("../data/seed_requirements.json");

/// Parse the bundled requirement rows.
///
/// # Errors
///
/// Returns an error if the embedded JSON is malformed.
pub fn bundled_seed() -> Result<Vec<RequirementProfile>> {
    serde_json::from_str(SEED_JSON).context("bundled seed requirements are malformed")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use specfit_core::{ProfileKind, TitleRegistry};

    use super::*;

    #[test]
    fn test_seed_covers_builtin_titles_for_both_tiers() {
        let seed = bundled_seed().unwrap();
        let registry = TitleRegistry::builtin();

        let stored: HashSet<(i64, ProfileKind)> = seed
            .iter()
            .map(|p| (p.application_id, p.kind))
            .collect();
        assert_eq!(stored.len(), seed.len(), "seed has duplicate rows");

        for title in registry.titles() {
            for kind in ProfileKind::ALL {
                assert!(
                    stored.contains(&(title.id, kind)),
                    "missing {kind} row for {}",
                    title.name
                );
            }
        }
    }

    #[test]
    fn test_seed_rows_are_complete() {
        for profile in bundled_seed().unwrap() {
            assert!(profile.cpu_cores.is_some());
            assert!(profile.cpu_speed_ghz.is_some());
            assert!(profile.ram_gb.is_some());
            assert!(profile.storage_gb.is_some());
            assert!(profile.vram_gb.is_some());
        }
    }
}
