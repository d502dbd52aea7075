// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bus configuration, loadable from JSON.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunables for an [`EventBus`](crate::EventBus).
///
/// Missing fields take their default value when loading from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Number of events the queue can hold before it first reallocates.
    pub queue_capacity: usize,
    /// Number of handler slots reserved up front.
    pub handler_capacity: usize,
    /// Log a warning for every event that reached no handler.
    pub warn_on_unhandled: bool,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
            handler_capacity: 16,
            warn_on_unhandled: false,
        }
    }
}

impl BusConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bus config '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse bus config '{}'", path.display()))
    }

    /// Writes the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write bus config '{}'", path.display()))?;
        Ok(())
    }
}
