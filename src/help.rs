//! The documentation tree a schema generates, and its usage renderer.
//!
//! Help is produced purely from schema shape: generating it consults no
//! input document, and parsing never consults it. Section children preserve
//! declaration order so rendering is deterministic.

use owo_colors::OwoColorize;

/// One node of the generated documentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Help {
    /// A terminal option: a scoped path, a description, and a format hint
    /// (or the `|`-joined allowed values for an enumerated option).
    Leaf {
        /// The scoped option path, e.g. `storage.data`.
        path: String,
        /// The schema author's description of the option.
        description: String,
        /// The expected value format, e.g. `<size>`.
        hint: String,
    },
    /// A group of options under a common scope.
    Section {
        /// The scoped section path, e.g. `storage`.
        path: String,
        /// The schema author's description of the section.
        description: String,
        /// The section's options, in declaration order.
        children: Vec<Help>,
    },
}

impl Help {
    /// Creates a leaf entry.
    pub fn leaf(
        path: impl Into<String>,
        description: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Help::Leaf {
            path: path.into(),
            description: description.into(),
            hint: hint.into(),
        }
    }

    /// Creates a section with the given children.
    pub fn section(
        path: impl Into<String>,
        description: impl Into<String>,
        children: Vec<Help>,
    ) -> Self {
        Help::Section {
            path: path.into(),
            description: description.into(),
            children,
        }
    }

    /// The scoped path of this entry.
    pub fn path(&self) -> &str {
        match self {
            Help::Leaf { path, .. } | Help::Section { path, .. } => path,
        }
    }
}

/// Renders help entries as aligned `--path <hint>` usage rows.
///
/// Sections contribute a header row followed by their children, recursively.
/// Option paths are colored; strip ANSI escapes before comparing the output
/// in tests.
pub fn render(entries: &[Help]) -> String {
    let mut rows = Vec::new();
    collect_rows(entries, &mut rows);

    let max_width = rows.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (usage, description) in rows {
        let padding = max_width.saturating_sub(usage.len());
        out.push_str(&format!("  {}", usage.green()));
        for _ in 0..padding {
            out.push(' ');
        }
        out.push_str("  ");
        out.push_str(&description);
        out.push('\n');
    }
    out
}

fn collect_rows(entries: &[Help], rows: &mut Vec<(String, String)>) {
    for entry in entries {
        match entry {
            Help::Leaf {
                path,
                description,
                hint,
            } => rows.push((format!("--{path} {hint}"), description.clone())),
            Help::Section {
                path,
                description,
                children,
            } => {
                rows.push((format!("--{path}"), description.clone()));
                collect_rows(children, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(rendered: &str) -> String {
        strip_ansi_escapes::strip_str(rendered)
    }

    #[test]
    fn leaf_rows_show_path_hint_and_description() {
        let entries = vec![Help::leaf("server.address", "Address to listen on.", "<address:port>")];
        let text = stripped(&render(&entries));
        assert_eq!(
            text,
            "  --server.address <address:port>  Address to listen on.\n"
        );
    }

    #[test]
    fn section_children_follow_their_header() {
        let entries = vec![Help::section(
            "storage",
            "Storage options.",
            vec![
                Help::leaf("storage.data", "Data directory.", "<relative or absolute path>"),
                Help::leaf("storage.cache-size", "Cache size.", "<size>"),
            ],
        )];
        let text = stripped(&render(&entries));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  --storage "));
        assert!(lines[1].contains("--storage.data <relative or absolute path>"));
        assert!(lines[2].contains("--storage.cache-size <size>"));
    }

    #[test]
    fn usage_columns_are_aligned() {
        let entries = vec![
            Help::leaf("a", "First.", "<int>"),
            Help::leaf("long.option.path", "Second.", "<string>"),
        ];
        let text = stripped(&render(&entries));
        let lines: Vec<&str> = text.lines().collect();
        let first = lines[0].find("First.").unwrap();
        let second = lines[1].find("Second.").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn path_accessor_covers_both_variants() {
        assert_eq!(Help::leaf("a.b", "", "<int>").path(), "a.b");
        assert_eq!(Help::section("a", "", Vec::new()).path(), "a");
    }
}
