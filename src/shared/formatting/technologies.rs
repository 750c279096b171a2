/// Splits a comma-delimited technology string into trimmed, non-empty names,
/// preserving their order.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_technologies`] for storage.
pub fn join_technologies(techs: &[String]) -> String {
    techs
        .iter()
        .map(|tech| tech.trim())
        .filter(|tech| !tech.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
