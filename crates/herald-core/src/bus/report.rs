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

/// What a call to [`EventBus::process_queue`](crate::EventBus::process_queue) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Events taken off the queue.
    pub events: usize,
    /// Handler invocations across all events.
    pub deliveries: usize,
    /// Events whose propagation a handler stopped.
    pub stopped: usize,
    /// Events that reached no handler.
    pub unhandled: usize,
}

impl DrainReport {
    /// Returns `true` if nothing was dequeued.
    pub fn is_empty(&self) -> bool {
        self.events == 0
    }
}
