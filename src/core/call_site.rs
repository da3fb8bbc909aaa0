//! Call-site information attached to every log record

/// Where a log call came from.
///
/// Usually produced by the [`call_site!`](crate::call_site) macro, which
/// captures `file!()`, `line!()` and the enclosing function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self { file, line, function }
    }

    /// Final path component of `file`.
    ///
    /// Both `/` and `\` count as separators regardless of platform, so paths
    /// recorded on Windows display the same way as Unix ones.
    pub fn basename(&self) -> &'a str {
        basename(self.file)
    }
}

/// Strip everything up to and including the last `/` or `\`.
pub fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Reduce the type name of a function item nested in the caller to the
/// caller's own name. Used by [`function_name!`](crate::function_name).
#[doc(hidden)]
pub fn function_name_from_path(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::f").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}
