//! Level definition and management

use super::builtin::BUILTIN_LEVELS;
use super::parser::{LevelError, LevelLayout, parse_level};

/// A level definition with metadata and its text map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDef {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub map: String,
}

impl LevelDef {
    pub fn parse(&self) -> Result<LevelLayout, LevelError> {
        parse_level(&self.map)
    }
}

/// Ordered level list and the current selection
pub struct LevelManager {
    levels: Vec<LevelDef>,
    current_level: usize,
}

impl LevelManager {
    /// Create a new level manager with all built-in levels
    pub fn new() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .enumerate()
            .map(|(id, (name, description, map))| LevelDef {
                id,
                name: name.to_string(),
                description: description.to_string(),
                map: map.to_string(),
            })
            .collect();
        Self {
            levels,
            current_level: 0,
        }
    }

    /// A manager over a single user-supplied map
    pub fn single(name: impl Into<String>, map: impl Into<String>) -> Self {
        let mut manager = Self {
            levels: Vec::new(),
            current_level: 0,
        };
        manager.add_level(name, "Custom map", map);
        manager
    }

    /// Append a level after the existing ones, returning its id
    pub fn add_level(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        map: impl Into<String>,
    ) -> usize {
        let id = self.levels.len();
        self.levels.push(LevelDef {
            id,
            name: name.into(),
            description: description.into(),
            map: map.into(),
        });
        id
    }

    /// Get all level definitions
    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get current level index
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn current_level_def(&self) -> Option<&LevelDef> {
        self.levels.get(self.current_level)
    }

    /// Get current level name
    pub fn current_level_name(&self) -> &str {
        self.current_level_def().map_or("", |level| level.name.as_str())
    }

    pub fn is_last_level(&self) -> bool {
        self.current_level + 1 >= self.levels.len()
    }

    /// Select a level by index and parse it
    pub fn load_level(&mut self, level_id: usize) -> Result<LevelLayout, LevelError> {
        let level = self.levels.get(level_id).ok_or(LevelError::UnknownLevel {
            index: level_id,
            count: self.levels.len(),
        })?;
        let layout = level.parse()?;
        self.current_level = level_id;
        log::info!("Loaded level {}: {}", level_id, level.name);
        Ok(layout)
    }

    /// Parse the current level again (after a death)
    pub fn reload_current_level(&mut self) -> Result<LevelLayout, LevelError> {
        self.load_level(self.current_level)
    }

    /// Advance to the next level; None once the last level is done
    pub fn next_level(&mut self) -> Option<Result<LevelLayout, LevelError>> {
        if self.is_last_level() {
            return None;
        }
        Some(self.load_level(self.current_level + 1))
    }
}

impl Default for LevelManager {
    fn default() -> Self {
        Self::new()
    }
}
