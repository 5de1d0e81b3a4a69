//! Sitemap URL normalization.

/// Normalizes a `Sitemap:` value, or rejects it.
///
/// The value must carry a scheme separator (`://`) followed by a `/` that
/// has a file name after it. Everything up to and including that `/` is
/// lowercased and the rest keeps its case. Rejected values are dropped
/// without a diagnostic.
pub fn normalize_sitemap(value: &str) -> Option<String> {
    let host_start = value.find("://")? + "://".len();
    let path_start = host_start + value[host_start..].find('/')? + 1;
    if path_start >= value.len() {
        return None;
    }
    Some(format!(
        "{}{}",
        value[..path_start].to_lowercase(),
        &value[path_start..]
    ))
}
