//! Provides the [`PropertyTable`](PropertyTable) trait, the read-only name-to-value mapping a
//! property report is built from, and [`PropertyMap`](PropertyMap), its owned implementation.

use log::*;
use std::{
    collections::{btree_map, BTreeMap, HashMap},
    env,
    hash::BuildHasher,
    iter::FromIterator,
};

/// A read-only mapping of property names to property values. Names are unique.
pub trait PropertyTable {
    /// Returns every property name in the table, in no particular order.
    fn keys(&self) -> Vec<&str>;
    /// Returns the value of a given property, or `None` if the table doesn't contain it.
    fn get(&self, key: &str) -> Option<&str>;
}

/// An owned property table, ordered by property name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    /// The properties.
    properties: BTreeMap<String, String>,
}

impl PropertyMap {
    /// Returns a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current process's environment variables. Variables whose name or
    /// value isn't valid Unicode are skipped.
    pub fn from_env() -> Self {
        let mut map = Self::new();

        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    map.insert(key, value);
                }
                (key, _) => debug!(
                    "Skipping non-Unicode environment variable {:?}",
                    key.unwrap_or_else(|os| os.to_string_lossy().into_owned())
                ),
            }
        }

        trace!("Environment snapshot: {:?}", map);
        map
    }

    /// Inserts a property, returning its previous value if the table already contained it.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.properties.insert(key.into(), value.into())
    }

    /// Returns the number of properties in the table.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over the properties, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new table with only the properties whose name starts with a given prefix.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.iter().filter(|(k, _)| k.starts_with(prefix)).collect()
    }
}

impl PropertyTable for PropertyMap {
    fn keys(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl<S> PropertyTable for HashMap<String, String, S>
where
    S: BuildHasher,
{
    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
