#![warn(missing_docs)]
#![deny(unsafe_code)]
#![doc = include_str!("../README.md")]

pub(crate) mod entry_parser;
pub(crate) mod error;
pub(crate) mod help;
pub(crate) mod node;
pub(crate) mod value_parser;

pub mod scope;

// ==========================================
// PUBLIC INTERFACE
// ==========================================

pub use entry_parser::{EnumValue, MapParser, Value};
pub use error::ConfigError;
pub use help::{render, Help};
pub use node::{Node, NodeMap};
pub use value_parser::{leaf, Leaf, NestedParser, SocketAddress, ValueParser};
