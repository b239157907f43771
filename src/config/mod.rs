// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{dataset::DatasetSource, sort::SortMode};

pub(crate) const CONFIG_NAME: &str = "bandtracker";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) dataset_path: Option<String>,
    pub(crate) default_sort: SortMode,
    pub(crate) share: ShareConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            dataset_path: None,
            default_sort: SortMode::Date,
            share: ShareConfig::default(),
        }
    }
}

impl AppConfig {
    /// Picks the dataset to load, a command line path taking precedence over
    /// the configured one.
    pub(crate) fn dataset_source(&self, cli_path: Option<String>) -> DatasetSource {
        cli_path
            .or_else(|| self.dataset_path.clone())
            .map(|p| DatasetSource::File(PathBuf::from(p)))
            .unwrap_or(DatasetSource::Embedded)
    }
}

/// Settings for the "ask which band" share intent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct ShareConfig {
    pub(crate) intent_url: String,
    pub(crate) handle: Option<String>,
    pub(crate) hashtag: Option<String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_url: "https://twitter.com/intent/tweet".to_string(),
            handle: None,
            hashtag: None,
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, also used for the log file.
pub(crate) fn config_dir() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
}
