use std::collections::HashMap;
use std::path::Path;

use crate::model::ImageOption;

use super::{Result, parse_options, read_options};

/// Current option set plus a name index.
///
/// Loads are all-or-nothing: a failed load leaves the previous set in place.
/// Duplicate names resolve to the last entry carrying that name.
#[derive(Debug, Clone, Default)]
pub struct OptionStore {
    options: Vec<ImageOption>,
    by_name: HashMap<String, usize>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let options = read_options(path)?;
        Ok(self.replace(options))
    }

    pub fn load_str(&mut self, raw: &str) -> Result<usize> {
        let options = parse_options(raw)?;
        Ok(self.replace(options))
    }

    pub fn replace(&mut self, options: Vec<ImageOption>) -> usize {
        self.by_name = options
            .iter()
            .enumerate()
            .map(|(index, option)| (option.name.clone(), index))
            .collect();
        self.options = options;
        self.options.len()
    }

    pub fn get(&self, name: &str) -> Option<&ImageOption> {
        self.by_name.get(name).map(|index| &self.options[*index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Names in file order, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.name.clone())
            .collect()
    }

    pub fn options(&self) -> &[ImageOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
