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

use crate::event::{Event, EventType};

/// A receiver of events.
///
/// The bus calls [`handle`](EventHandler::handle) only for events whose type
/// intersects the handler's [`signature`](EventHandler::signature), walking
/// handlers in the order they were subscribed.
pub trait EventHandler {
    /// The categories this handler wants to receive.
    ///
    /// Must stay the same for as long as the handler is subscribed.
    fn signature(&self) -> EventType;

    /// Reacts to a matching event.
    ///
    /// Returns `true` to stop propagation: handlers subscribed after this one
    /// will not see this event. Later events are unaffected.
    fn handle(&mut self, event: &Event) -> bool;

    /// A human-readable name, used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// An [`EventHandler`] built from an interest mask and a closure.
///
/// The closure receives each matching event and returns the stop flag.
pub struct FnHandler<F> {
    signature: EventType,
    callback: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&Event) -> bool,
{
    /// Wraps `callback` so it receives events matching `signature`.
    pub fn new(signature: EventType, callback: F) -> Self {
        Self {
            signature,
            callback,
        }
    }
}

impl<F> EventHandler for FnHandler<F>
where
    F: FnMut(&Event) -> bool,
{
    fn signature(&self) -> EventType {
        self.signature
    }

    fn handle(&mut self, event: &Event) -> bool {
        (self.callback)(event)
    }

    fn name(&self) -> &str {
        "FnHandler"
    }
}
