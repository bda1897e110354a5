//! Path decomposition: the pure half of every handle operation.
//!
//! `PathInfo` splits a path string into location (parent directory), base
//! name, and the base name's stem and extension. Nothing here touches the
//! filesystem and nothing here fails; missing components are empty strings.
//!
//! All functions take the separator explicitly. Handles pass the one from
//! their `FsConfig`, so a single configurable separator is the only
//! platform abstraction.

/// Decomposed form of a path string.
///
/// Invariant: `compose(location, basename, sep) == normalize(path, sep)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathInfo {
    /// Parent directory, `""` when the path has no separator.
    pub location: String,
    /// Final component, stem and extension included.
    pub basename: String,
    /// `basename` up to (not including) its final `.`.
    pub name: String,
    /// `basename` after its final `.`, `""` when there is none.
    pub extension: String,
}

impl PathInfo {
    /// Decompose `path` using `sep` as the separator.
    pub fn decompose(path: &str, sep: char) -> Self {
        let normalized = normalize(path, sep);

        let (location, basename) = match normalized.rfind(sep) {
            // The root itself: no parent, and it is its own name.
            Some(0) if normalized.len() == sep.len_utf8() => (String::new(), normalized.clone()),
            Some(0) => (
                sep.to_string(),
                normalized[sep.len_utf8()..].to_string(),
            ),
            Some(pos) => (
                normalized[..pos].to_string(),
                normalized[pos + sep.len_utf8()..].to_string(),
            ),
            None => (String::new(), normalized.clone()),
        };

        let (name, extension) = split_extension(&basename);

        Self {
            location,
            name: name.to_string(),
            extension: extension.to_string(),
            basename,
        }
    }

    /// Rebuild the normalized path from `location` and `basename`.
    pub fn path(&self, sep: char) -> String {
        compose(&self.location, &self.basename, sep)
    }
}

/// Join a location and a name with a single separator.
///
/// An empty location yields `name` unchanged; a location that already ends
/// in `sep` (the root) does not get a second one.
pub fn compose(location: &str, name: &str, sep: char) -> String {
    if location.is_empty() {
        name.to_string()
    } else if location.ends_with(sep) {
        format!("{}{}", location, name)
    } else {
        format!("{}{}{}", location, sep, name)
    }
}

/// Collapse repeated separators and drop a trailing one (except on the root).
pub fn normalize(path: &str, sep: char) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        if c == sep {
            if !prev_sep {
                out.push(c);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    if out.len() > sep.len_utf8() && out.ends_with(sep) {
        out.pop();
    }
    out
}

/// Split a base name on its final `.`.
///
/// `"x.tar.gz"` gives `("x.tar", "gz")`, `".bashrc"` gives `("", "bashrc")`.
fn split_extension(basename: &str) -> (&str, &str) {
    match basename.rfind('.') {
        Some(pos) => (&basename[..pos], &basename[pos + 1..]),
        None => (basename, ""),
    }
}
