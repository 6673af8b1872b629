//! Entry and map parsers: how a schema binds keys to value parsers.
//!
//! A [`Value`] binds one fixed, required key. An [`EnumValue`] additionally
//! restricts the parsed result to a closed set. A [`MapParser`] accepts an
//! open set of caller-chosen keys that all share one value parser, minus an
//! exclusion set of reserved keys.
//!
//! Key uniqueness among the entries a nested schema declares is the schema
//! author's invariant; nothing here enforces it.

use core::fmt;

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::help::Help;
use crate::node::NodeMap;
use crate::scope;
use crate::value_parser::ValueParser;

/// The placeholder standing in for a [`MapParser`]'s dynamic key in help
/// output, where no concrete key exists at schema time.
const KEY_PLACEHOLDER: &str = "<name>";

/// A required entry: one fixed key bound to a value parser.
pub struct Value<T> {
    key: &'static str,
    description: &'static str,
    parser: ValueParser<T>,
}

impl<T> Value<T> {
    /// Creates an entry for `key`, described by `description` in help output.
    pub fn new(key: &'static str, description: &'static str, parser: ValueParser<T>) -> Self {
        Self {
            key,
            description,
            parser,
        }
    }

    /// The fixed key this entry binds.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Parses this entry out of `map`. The key must be present.
    pub fn parse(&self, map: &NodeMap, scope: &str) -> Result<T, ConfigError> {
        let scoped = scope::join(scope, self.key);
        tracing::trace!(key = %scoped, "parsing option");
        match map.get(self.key) {
            None => Err(ConfigError::MissingOption { key: scoped }),
            Some(node) => self.parser.parse(node, &scoped),
        }
    }

    /// The help entry for this option: a leaf row for a leaf parser, a
    /// section with the nested schema's own help for a nested one.
    pub fn help(&self, scope: &str) -> Help {
        let scoped = scope::join(scope, self.key);
        match &self.parser {
            ValueParser::Leaf(leaf) => Help::leaf(scoped, self.description, leaf.hint()),
            ValueParser::Nested(nested) => {
                let children = nested.help(&scoped);
                Help::section(scoped, self.description, children)
            }
        }
    }
}

impl<T> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value").field("key", &self.key).finish()
    }
}

/// A required entry whose parsed value must belong to a closed set.
///
/// The declared order of the set defines the display order in help output
/// and in error messages.
pub struct EnumValue<T> {
    key: &'static str,
    description: &'static str,
    parser: ValueParser<T>,
    values: Vec<T>,
}

impl<T: PartialEq + fmt::Display> EnumValue<T> {
    /// Creates an enumerated entry permitting exactly `values`.
    pub fn new(
        key: &'static str,
        description: &'static str,
        parser: ValueParser<T>,
        values: Vec<T>,
    ) -> Self {
        Self {
            key,
            description,
            parser,
            values,
        }
    }

    /// The fixed key this entry binds.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Parses this entry out of `map`, then checks set membership.
    pub fn parse(&self, map: &NodeMap, scope: &str) -> Result<T, ConfigError> {
        let scoped = scope::join(scope, self.key);
        tracing::trace!(key = %scoped, "parsing enumerated option");
        let node = map
            .get(self.key)
            .ok_or_else(|| ConfigError::MissingOption { key: scoped.clone() })?;
        let value = self.parser.parse(node, &scoped)?;
        if self.values.contains(&value) {
            Ok(value)
        } else {
            Err(ConfigError::EnumUnexpectedValue {
                key: scoped,
                actual: value.to_string(),
                allowed: self.values.iter().map(T::to_string).collect(),
            })
        }
    }

    /// The help entry for this option. A leaf parser's format hint is
    /// replaced by the allowed values joined with `|`.
    pub fn help(&self, scope: &str) -> Help {
        let scoped = scope::join(scope, self.key);
        match &self.parser {
            ValueParser::Leaf(_) => {
                let values: Vec<String> = self.values.iter().map(T::to_string).collect();
                Help::leaf(scoped, self.description, values.join("|"))
            }
            ValueParser::Nested(nested) => {
                let children = nested.help(&scoped);
                Help::section(scoped, self.description, children)
            }
        }
    }
}

impl<T> fmt::Debug for EnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumValue").field("key", &self.key).finish()
    }
}

/// An open-map schema: every non-excluded key in the input becomes an output
/// entry, all parsed by the same value parser.
pub struct MapParser<T> {
    description: &'static str,
    parser: ValueParser<T>,
}

impl<T> MapParser<T> {
    /// Creates a map parser whose entries are described by `description`.
    pub fn new(description: &'static str, parser: ValueParser<T>) -> Self {
        Self {
            description,
            parser,
        }
    }

    /// Parses every key of `map` not listed in `exclude`.
    ///
    /// Reserved keys typically belong to sibling fixed entries declared next
    /// to this parser in the same nested schema.
    pub fn parse(
        &self,
        map: &NodeMap,
        scope: &str,
        exclude: &[&str],
    ) -> Result<IndexMap<String, T>, ConfigError> {
        let mut parsed = IndexMap::new();
        for (key, node) in map {
            if exclude.contains(&key.as_str()) {
                continue;
            }
            let scoped = scope::join(scope, key);
            tracing::trace!(key = %scoped, "parsing dynamic option");
            parsed.insert(key.clone(), self.parser.parse(node, &scoped)?);
        }
        Ok(parsed)
    }

    /// The single help entry for the dynamic key, shown as `<name>`.
    pub fn help(&self, scope: &str) -> Help {
        let scoped = scope::join(scope, KEY_PLACEHOLDER);
        match &self.parser {
            ValueParser::Leaf(leaf) => Help::leaf(scoped, self.description, leaf.hint()),
            ValueParser::Nested(nested) => {
                let children = nested.help(&scoped);
                Help::section(scoped, self.description, children)
            }
        }
    }
}

impl<T> fmt::Debug for MapParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapParser")
            .field("description", &self.description)
            .finish()
    }
}
