//! Text normalization for joining tribunal tables.

/// Canonical form of a case role ("rol") for joins: trimmed, uppercase.
pub fn normalize_case_role(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// True when the hearing kind contains any of `keywords` (lowercase).
pub fn is_relevant_hearing<S: AsRef<str>>(kind: &str, keywords: &[S]) -> bool {
    let kind = kind.to_lowercase();
    keywords
        .iter()
        .any(|keyword| kind.contains(keyword.as_ref()))
}

/// True when the hearing status says it took place.
pub fn is_held_hearing(status: &str) -> bool {
    status.trim().to_lowercase() == "realizada"
}
