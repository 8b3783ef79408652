use std::path::Path;

/// Derives the site key from a workbook path.
///
/// The configured prefix is removed wherever it occurs in the file stem, then
/// the stem is cut just before the second occurrence of `separator`. With
/// fewer than two occurrences the prefix-stripped stem is returned unchanged.
pub fn site_key(path: &Path, prefix: &str, separator: &str) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    site_key_from_stem(&stem, prefix, separator)
}

/// Same as [`site_key`] for an already extracted file stem.
pub fn site_key_from_stem(stem: &str, prefix: &str, separator: &str) -> String {
    let stripped = if prefix.is_empty() {
        stem.to_string()
    } else {
        stem.replace(prefix, "")
    };
    if separator.is_empty() {
        return stripped;
    }

    // The second search starts one character past the first hit, so
    // overlapping separators are found too.
    let second = stripped.find(separator).and_then(|first| {
        let next = first + stripped[first..].chars().next().map_or(1, char::len_utf8);
        stripped[next..].find(separator).map(|offset| next + offset)
    });

    match second {
        Some(position) => stripped[..position].to_string(),
        None => stripped,
    }
}
