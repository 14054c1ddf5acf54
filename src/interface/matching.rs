use strsim::jaro_winkler;

use crate::error::{OrderError, Result};
use crate::models::Extra;

/// Minimum Jaro-Winkler similarity for a fuzzy extra-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Resolve a user-supplied key to an extra id.
///
/// Tries, in order: numeric id, case-insensitive name, closest fuzzy name.
pub fn resolve_extra(extras: &[Extra], key: &str) -> Result<u64> {
    let key = key.trim();

    if let Ok(id) = key.parse::<u64>() {
        if extras.iter().any(|e| e.id == id) {
            return Ok(id);
        }
    }

    let lowered = key.to_lowercase();
    if let Some(extra) = extras.iter().find(|e| e.name.to_lowercase() == lowered) {
        return Ok(extra.id);
    }

    extras
        .iter()
        .map(|e| (e, jaro_winkler(&e.name.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(e, _)| e.id)
        .ok_or_else(|| OrderError::ExtraNotFound(key.to_string()))
}
