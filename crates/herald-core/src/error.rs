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

//! Error types of the bus.

use crate::bus::HandlerId;
use std::fmt;

/// A violated invariant of the handler registry.
///
/// These never describe a recoverable situation: they mean a token was used
/// twice or the registry lost track of an entry. The bus logs them and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// An unregistration was requested while no handler was registered.
    Empty {
        /// The token that was presented.
        id: HandlerId,
    },
    /// The token does not name a live entry: it was already unregistered, or
    /// its slot has since been reused.
    StaleHandle {
        /// The token that was presented.
        id: HandlerId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Empty { id } => {
                write!(f, "Cannot unregister handler {id}: no handler is registered")
            }
            RegistryError::StaleHandle { id } => {
                write!(f, "Cannot unregister handler {id}: token is stale or unknown")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
