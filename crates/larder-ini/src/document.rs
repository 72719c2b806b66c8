//! An in-memory view of a parsed INI document.

use std::io::BufRead;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use crate::error::IniError;
use crate::limits::IniLimits;
use crate::parser::parse_ini;

type Entries = IndexMap<String, String>;

/// Every entry of an INI document, grouped by section.
///
/// Sections and keys keep the order they first appeared in. A repeated
/// key overwrites the earlier value but keeps its position. Section
/// headers with no entries under them are not recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniDocument {
    global: Entries,
    sections: IndexMap<String, Entries>,
}

impl IniDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse all of `src` into a document.
    pub fn parse<R: BufRead>(src: R, limits: &IniLimits) -> Result<Self, IniError> {
        let mut doc = Self::new();
        parse_ini(src, limits, |section, key, value| {
            doc.insert(section, key, value);
            ControlFlow::Continue(())
        })?;
        Ok(doc)
    }

    /// Set `key` in `section`, returning the value it replaced.
    pub fn insert(&mut self, section: Option<&str>, key: &str, value: &str) -> Option<String> {
        let entries = match section {
            None => &mut self.global,
            Some(name) => self.sections.entry(name.to_owned()).or_default(),
        };
        entries.insert(key.to_owned(), value.to_owned())
    }

    /// Value of `key` in `section` (`None` for entries before any header).
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.entries_of(section)?.get(key).map(String::as_str)
    }

    /// Names of the sections that hold at least one entry, in order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Entries of `section` in order; empty if the section is unknown.
    pub fn entries(&self, section: Option<&str>) -> impl Iterator<Item = (&str, &str)> {
        self.entries_of(section)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.global.len() + self.sections.values().map(IndexMap::len).sum::<usize>()
    }

    /// True if the document holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries_of(&self, section: Option<&str>) -> Option<&Entries> {
        match section {
            None => Some(&self.global),
            Some(name) => self.sections.get(name),
        }
    }
}
