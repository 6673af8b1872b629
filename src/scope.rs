//! Scoped-key construction.
//!
//! A scope is a `.`-delimited path identifying an option's position in the
//! nested schema. The same scoped key appears in error messages and help
//! paths, so an error like ``missing required option `storage.data` `` points
//! at exactly the row the rendered usage text calls `--storage.data`.

/// The separator between path segments of a scoped key.
pub const SEPARATOR: &str = ".";

/// Joins a parent scope and a key into a child scope.
///
/// An empty parent yields the bare key, so the root schema can be invoked
/// with `""`.
pub fn join(scope: &str, key: &str) -> String {
    if scope.is_empty() {
        key.to_string()
    } else {
        format!("{scope}{SEPARATOR}{key}")
    }
}
