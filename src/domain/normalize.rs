//! Field normalization applied right after a value is resolved.

/// Normalize a base URL so it starts and ends with a single `/` and has no
/// doubled separators. Empty input becomes `/`.
pub fn normalize_base_url(value: &str) -> String {
    let segments: Vec<&str> =
        value.trim().split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}/", segments.join("/"))
}

/// Trim a hostname and strip any trailing slashes.
pub fn normalize_host(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
