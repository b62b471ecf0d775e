use std::fmt;

use crate::properties::{IdProperties, Mode, Strategy};

/// Scope name used when the id space is shared by every application.
pub(crate) const GLOBAL_SCOPE: &str = "GLOBAL";

/// The store address of one logical counter, produced by key resolution and
/// cached for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedKey {
    /// An independent record under a fully qualified key.
    Key(String),
    /// A field inside a record shared by several id names.
    Field { key: String, field: String },
}

impl ResolvedKey {
    /// The physical record key.
    pub fn record_key(&self) -> &str {
        match self {
            ResolvedKey::Key(key) => key,
            ResolvedKey::Field { key, .. } => key,
        }
    }

    /// The field name, for the per-field strategy.
    pub fn field(&self) -> Option<&str> {
        match self {
            ResolvedKey::Key(_) => None,
            ResolvedKey::Field { field, .. } => Some(field),
        }
    }
}

impl fmt::Display for ResolvedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedKey::Key(key) => f.write_str(key),
            ResolvedKey::Field { key, field } => write!(f, "{key}#{field}"),
        }
    }
}

/// Map an id name to its store address.
///
/// The base is `prefix + scope` by plain concatenation. In cluster mode the
/// base is wrapped in a co-location tag (`{base}`) so that every entry one
/// atomic allocation touches lands on the same shard. The per-key strategy
/// appends the id name to the base; the per-field strategy uses the base as
/// the record key and the id name as the field.
pub(crate) fn resolve(
    id_name: &str,
    props: &IdProperties,
    strategy: Strategy,
    scope: &str,
) -> ResolvedKey {
    let base = match props.mode {
        Mode::Single => format!("{}{}", props.prefix, scope),
        Mode::Cluster => format!("{{{}{}}}", props.prefix, scope),
    };
    match strategy {
        Strategy::PerField => ResolvedKey::Field {
            key: base,
            field: id_name.to_string(),
        },
        Strategy::PerKey => ResolvedKey::Key(format!("{base}{id_name}")),
    }
}
