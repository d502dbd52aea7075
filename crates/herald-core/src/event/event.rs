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

use super::kind::EventType;

/// A queued signal carrying a single category tag.
///
/// Events are immutable once built and carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    kind: EventType,
}

impl Event {
    /// Creates an event tagged with `kind`.
    pub const fn new(kind: EventType) -> Self {
        Self { kind }
    }

    /// Returns the event's category tag.
    pub const fn kind(&self) -> EventType {
        self.kind
    }

    /// Returns `true` if the tag is exactly `kind`.
    pub fn is_kind(&self, kind: EventType) -> bool {
        self.kind == kind
    }

    /// Returns `true` if a handler with interest `mask` should receive this event.
    pub const fn matches(&self, mask: EventType) -> bool {
        self.kind.intersects(mask)
    }
}

impl From<EventType> for Event {
    fn from(kind: EventType) -> Self {
        Self::new(kind)
    }
}
