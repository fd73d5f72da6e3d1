use config::{Value, ValueKind};
use std::collections::BTreeSet;

pub const RELEASE_TAG_KEY: &str = "releaseTag";
pub const RELEASE_URL_KEY: &str = "releaseUrl";
pub const CREATED_AT_KEY: &str = "تاريخ_الإنشاء";
pub const UPDATED_AT_KEY: &str = "تاريخ_التحديث";

/// Value of a single key in `assets-config.yml`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    String(String),
    /// Nested mapping, in file order.
    Table(Vec<(String, ConfigValue)>),
    /// Numbers, booleans, nulls and sequences. Only the kind is kept.
    Other(&'static str),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Table(_) => "mapping",
            ConfigValue::Other(kind) => kind,
        }
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value.kind {
            ValueKind::String(value) => ConfigValue::String(value),
            ValueKind::Table(table) => ConfigValue::Table(
                table
                    .into_iter()
                    .map(|(key, value)| (key, ConfigValue::from(value)))
                    .collect(),
            ),
            ValueKind::Nil => ConfigValue::Other("null"),
            ValueKind::Boolean(_) => ConfigValue::Other("boolean"),
            ValueKind::Float(_) => ConfigValue::Other("float"),
            ValueKind::Array(_) => ConfigValue::Other("sequence"),
            _ => ConfigValue::Other("integer"),
        }
    }
}

/// The parsed `assets-config.yml`: a flat, ordered key/value mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetsConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl AssetsConfig {
    pub fn new(entries: Vec<(String, ConfigValue)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Advisory release tag. Never compared against fetched content.
    pub fn release_tag(&self) -> Option<&str> {
        self.get_str(RELEASE_TAG_KEY)
    }

    pub fn release_url(&self) -> Option<&str> {
        self.get_str(RELEASE_URL_KEY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Metadata keys that are never treated as download targets, matched literally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservedKeys {
    keys: BTreeSet<String>,
}

impl ReservedKeys {
    pub fn empty() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for ReservedKeys {
    fn default() -> Self {
        Self::empty().with_extra([
            RELEASE_TAG_KEY,
            RELEASE_URL_KEY,
            CREATED_AT_KEY,
            UPDATED_AT_KEY,
        ])
    }
}
