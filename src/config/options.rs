use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::Culture;
use crate::error::ConfigError;

pub const DEFAULT_MAX_DEPTH: usize = 4;
pub const DEFAULT_BOX_WIDTH: usize = 80;
pub const MIN_BOX_WIDTH: usize = 8;

/// Everything that shapes a dump.
///
/// Each level of recursion sees `max_depth` reduced by one; containers and
/// composites stop expanding once it reaches 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpOptions {
    pub max_depth: usize,
    pub dump_private_fields: bool,
    pub dump_private_properties: bool,
    pub dump_public_fields: bool,
    pub dump_public_properties: bool,
    pub with_title: bool,
    pub culture: Culture,
    pub box_width: usize,
    pub with_colors: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            dump_private_fields: false,
            dump_private_properties: false,
            dump_public_fields: true,
            dump_public_properties: true,
            with_title: true,
            culture: Culture::invariant(),
            box_width: DEFAULT_BOX_WIDTH,
            with_colors: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_private_fields(mut self, enabled: bool) -> Self {
        self.dump_private_fields = enabled;
        self
    }

    pub fn with_private_properties(mut self, enabled: bool) -> Self {
        self.dump_private_properties = enabled;
        self
    }

    pub fn with_public_fields(mut self, enabled: bool) -> Self {
        self.dump_public_fields = enabled;
        self
    }

    pub fn with_public_properties(mut self, enabled: bool) -> Self {
        self.dump_public_properties = enabled;
        self
    }

    /// Turn all four visibility switches on.
    pub fn with_everything(self) -> Self {
        self.with_private_fields(true)
            .with_private_properties(true)
            .with_public_fields(true)
            .with_public_properties(true)
    }

    pub fn with_title(mut self, enabled: bool) -> Self {
        self.with_title = enabled;
        self
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn with_box_width(mut self, width: usize) -> Self {
        self.box_width = width;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.with_colors = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_width < MIN_BOX_WIDTH {
            return Err(ConfigError::BoxWidth {
                width: self.box_width,
                minimum: MIN_BOX_WIDTH,
            });
        }
        Ok(())
    }

    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self::new()
    }
}
