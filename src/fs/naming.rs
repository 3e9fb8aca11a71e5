//! Filename and directory-name derivation.

/// Artist-category tags that are site bookkeeping, not artists.
const NON_ARTIST_TAGS: [&str; 2] = ["conditional_dnp", "avoid_posting"];

/// Replace every configured invalid character with an underscore.
///
/// Replacements run one character at a time over the whole string, so
/// the output never contains any of the configured characters.
pub fn canonicalize(name: &str, invalid_chars: &[char]) -> String {
    let mut out = name.to_string();
    for &c in invalid_chars {
        out = out.replace(c, "_");
    }
    out
}

/// Title-case a string: uppercase the first letter of every alphabetic
/// run, lowercase the rest of the run.
///
/// Runs are delimited by any non-alphabetic character, so `"foo's
/// bar"` becomes `"Foo'S Bar"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_run {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Derive the per-artist subdirectory name from a post's artist tags.
///
/// Bookkeeping tags are dropped, underscores become spaces, the site's
/// `" (artist)"` and `" (fa)"` disambiguation suffixes are stripped,
/// and each name is title-cased. Multiple artists join with `", "`.
/// A post with no artists yields an empty string, which keeps the file
/// directly under the download root.
pub fn artist_directory(artist_tags: &[String]) -> String {
    artist_tags
        .iter()
        .filter(|tag| !NON_ARTIST_TAGS.contains(&tag.as_str()))
        .map(|tag| {
            let name = tag
                .replace('_', " ")
                .replace(" (artist)", "")
                .replace(" (fa)", "");
            title_case(&name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derive the per-author subdirectory name from a FurAffinity author
/// name: lowercase it, then title-case the result.
pub fn author_directory(author_name: &str) -> String {
    title_case(&author_name.to_lowercase())
}
