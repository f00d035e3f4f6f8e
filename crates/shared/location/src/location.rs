use serde::{Deserialize, Serialize};

/// A path-like string decomposed into its three parts.
///
/// `search` and `hash` keep their leading delimiter and are empty when the
/// corresponding part is absent. `pathname` is never empty: parsing
/// substitutes `"/"` when no path segment precedes `?` or `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedLocation {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Default for ParsedLocation {
    fn default() -> Self {
        Self { pathname: "/".to_owned(), search: String::new(), hash: String::new() }
    }
}

/// Decomposes a path-like string into `{ pathname, search, hash }`.
///
/// The hash is split off first, so a `?` occurring inside the hash
/// fragment is never treated as search. No percent-decoding and no
/// normalization happen beyond the empty-pathname substitution.
///
/// # Examples
/// ```rust
/// use waypoint_location::parse_path;
///
/// let location = parse_path("/a/b?c=d#e");
/// assert_eq!(location.pathname, "/a/b");
/// assert_eq!(location.search, "?c=d");
/// assert_eq!(location.hash, "#e");
///
/// let location = parse_path("/a/b#c?d=e");
/// assert_eq!(location.search, "");
/// assert_eq!(location.hash, "#c?d=e");
/// ```
#[must_use]
pub fn parse_path(input: &str) -> ParsedLocation {
    let mut rest = input;

    let hash = match rest.find('#') {
        Some(index) => {
            let hash = rest[index..].to_owned();
            rest = &rest[..index];
            hash
        },
        None => String::new(),
    };

    let search = match rest.find('?') {
        Some(index) => {
            let search = rest[index..].to_owned();
            rest = &rest[..index];
            search
        },
        None => String::new(),
    };

    let pathname = if rest.is_empty() { "/".to_owned() } else { rest.to_owned() };

    ParsedLocation { pathname, search, hash }
}

/// Serializes a location back into a single path string.
///
/// Missing `?`/`#` delimiters are inserted; a lone delimiter is dropped.
///
/// # Examples
/// ```rust
/// use waypoint_location::{create_path, parse_path};
///
/// assert_eq!(create_path(&parse_path("/a/b?c=d#e")), "/a/b?c=d#e");
/// ```
#[must_use]
pub fn create_path(location: &ParsedLocation) -> String {
    let mut path = location.pathname.clone();
    push_part(&mut path, &location.search, '?');
    push_part(&mut path, &location.hash, '#');
    path
}

fn push_part(path: &mut String, part: &str, delimiter: char) {
    let bare = part.strip_prefix(delimiter).unwrap_or(part);
    if !bare.is_empty() {
        path.push(delimiter);
        path.push_str(bare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pathname_is_root() {
        assert_eq!(ParsedLocation::default().pathname, "/");
    }

    #[test]
    fn create_path_inserts_missing_delimiters() {
        let location = ParsedLocation {
            pathname: "/a".to_owned(),
            search: "b=c".to_owned(),
            hash: "d".to_owned(),
        };
        assert_eq!(create_path(&location), "/a?b=c#d");
    }

    #[test]
    fn create_path_drops_lone_delimiters() {
        let location = ParsedLocation {
            pathname: "/a".to_owned(),
            search: "?".to_owned(),
            hash: "#".to_owned(),
        };
        assert_eq!(create_path(&location), "/a");
    }
}
