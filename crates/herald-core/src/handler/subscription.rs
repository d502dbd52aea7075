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

use std::fmt;
use std::rc::Weak;

use crate::bus::{BusShared, HandlerId};

/// Keeps a handler subscribed to an [`EventBus`](crate::EventBus).
///
/// Dropping the subscription, or calling [`close`](Subscription::close),
/// unregisters the handler. Once that has happened the handler is never
/// called again, even if the bus is in the middle of dispatching an event.
/// If the bus itself is gone, releasing the subscription does nothing.
#[must_use = "dropping a Subscription immediately unregisters its handler"]
pub struct Subscription {
    bus: Weak<BusShared>,
    id: HandlerId,
}

impl Subscription {
    pub(crate) fn new(bus: Weak<BusShared>, id: HandlerId) -> Self {
        Self { bus, id }
    }

    /// The membership token of the subscribed handler.
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Returns `true` while the handler is registered on a live bus.
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|bus| bus.is_registered(self.id))
    }

    /// Unregisters the handler now.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let bus = std::mem::take(&mut self.bus);
        if let Some(bus) = bus.upgrade() {
            bus.unregister_handler(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
