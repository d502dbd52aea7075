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

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use super::registry::{HandlerId, HandlerRegistry};
use super::report::DrainReport;
use crate::config::BusConfig;
use crate::event::{Event, EventType};
use crate::handler::{EventHandler, FnHandler, Subscription};

/// State shared by an [`EventBus`] and every clone of it.
///
/// Subscriptions keep a weak reference to it so they can unregister
/// themselves without keeping the bus alive.
pub(crate) struct BusShared {
    config: BusConfig,
    queue: RefCell<VecDeque<Event>>,
    registry: RefCell<HandlerRegistry>,
    draining: Cell<bool>,
}

impl BusShared {
    pub(crate) fn is_registered(&self, id: HandlerId) -> bool {
        self.registry.borrow().contains(id)
    }

    pub(crate) fn register_handler(&self, handler: Box<dyn EventHandler>) -> HandlerId {
        let name = handler.name().to_owned();
        let id = self.registry.borrow_mut().insert(handler);
        log::debug!("EventBus: registered handler {id} ({name})");
        id
    }

    /// Removes the handler named by `id`.
    ///
    /// # Panics
    ///
    /// Panics if no handler is registered or `id` is stale. Both mean a
    /// token was reused or the registry lost an entry.
    pub(crate) fn unregister_handler(&self, id: HandlerId) {
        // The handler is dropped after the registry borrow ends: its own
        // destructor may release further subscriptions.
        let removed = self.registry.borrow_mut().remove(id);
        match removed {
            Ok(handler) => {
                log::debug!("EventBus: unregistered handler {id}");
                drop(handler);
            }
            Err(e) => {
                log::error!("EventBus: {e}");
                panic!("EventBus registry invariant violated: {e}");
            }
        }
    }

    /// Routes one event through the handlers in subscription order.
    ///
    /// Returns how many handlers ran and whether one of them stopped propagation.
    fn dispatch(&self, event: &Event) -> (usize, bool) {
        // Handlers subscribed while this event is in flight do not see it.
        let order = self.registry.borrow().ids();
        let mut delivered = 0;

        for id in order {
            let lent = self.registry.borrow_mut().checkout(id, event);
            let Some(mut handler) = lent else {
                continue;
            };

            log::trace!("EventBus: {:?} -> {} ({id})", event.kind(), handler.name());
            let stop = handler.handle(event);
            delivered += 1;

            // Fails if the handler was unsubscribed during its own call.
            let restored = self.registry.borrow_mut().restore(id, handler);
            drop(restored);

            if stop {
                return (delivered, true);
            }
        }
        (delivered, false)
    }
}

/// Clears the draining flag even if a handler panics.
struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A single-threaded publish/subscribe bus.
///
/// Events are queued with [`enqueue`](EventBus::enqueue) and delivered when
/// the owner calls [`process_queue`](EventBus::process_queue). Each event is
/// offered to the subscribed handlers in the order they subscribed; a handler
/// is called when its signature intersects the event type and may stop the
/// event from reaching the handlers after it.
///
/// `EventBus` is a cheap handle: clones share the same queue and handlers.
/// It is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct EventBus {
    shared: Rc<BusShared>,
}

impl EventBus {
    /// Creates a bus with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Creates a bus with the given configuration.
    ///
    /// ## Arguments
    /// * `config` - Capacities and logging options for the new bus.
    pub fn with_config(config: BusConfig) -> Self {
        let shared = BusShared {
            queue: RefCell::new(VecDeque::with_capacity(config.queue_capacity)),
            registry: RefCell::new(HandlerRegistry::with_capacity(config.handler_capacity)),
            draining: Cell::new(false),
            config,
        };
        log::info!("EventBus initialized.");
        Self {
            shared: Rc::new(shared),
        }
    }

    /// Returns the configuration the bus was built with.
    pub fn config(&self) -> &BusConfig {
        &self.shared.config
    }

    /// Appends an event to the back of the queue.
    ///
    /// Never fails. The event is delivered on the next
    /// [`process_queue`](EventBus::process_queue) call, or by the one in
    /// progress if a handler enqueues it.
    pub fn enqueue(&self, event: Event) {
        log::trace!("EventBus: queued {:?}", event.kind());
        self.shared.queue.borrow_mut().push_back(event);
    }

    /// Delivers every queued event, oldest first, until the queue is empty.
    ///
    /// Each event is dequeued exactly once. Events that match no handler are
    /// consumed silently. A handler returning `true` stops the current event
    /// only; the next event starts again from the first handler.
    ///
    /// Calling this from inside a handler does nothing and returns an empty
    /// report: the drain already running will pick up any new events.
    ///
    /// ## Returns
    /// Counters describing the drain.
    pub fn process_queue(&self) -> DrainReport {
        let shared = &*self.shared;
        if shared.draining.replace(true) {
            log::warn!("EventBus: process_queue called while already draining; ignored.");
            return DrainReport::default();
        }
        let _guard = DrainGuard(&shared.draining);

        let mut report = DrainReport::default();
        loop {
            let next = shared.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            report.events += 1;

            let (delivered, stopped) = shared.dispatch(&event);
            report.deliveries += delivered;
            if stopped {
                report.stopped += 1;
            }
            if delivered == 0 {
                report.unhandled += 1;
                if shared.config.warn_on_unhandled {
                    log::warn!("EventBus: {:?} reached no handler.", event.kind());
                }
            }
        }

        if !report.is_empty() {
            log::debug!("EventBus: drained {report:?}");
        }
        report
    }

    /// Subscribes `handler` behind every handler already subscribed.
    ///
    /// ## Returns
    /// The subscription keeping the handler registered. Dropping it
    /// unregisters the handler.
    pub fn subscribe<H>(&self, handler: H) -> Subscription
    where
        H: EventHandler + 'static,
    {
        self.subscribe_boxed(Box::new(handler))
    }

    /// Subscribes an already boxed handler.
    pub fn subscribe_boxed(&self, handler: Box<dyn EventHandler>) -> Subscription {
        let id = self.shared.register_handler(handler);
        Subscription::new(Rc::downgrade(&self.shared), id)
    }

    /// Subscribes a closure receiving events that intersect `signature`.
    ///
    /// The closure returns `true` to stop propagation of the current event.
    pub fn subscribe_fn<F>(&self, signature: EventType, callback: F) -> Subscription
    where
        F: FnMut(&Event) -> bool + 'static,
    {
        self.subscribe(FnHandler::new(signature, callback))
    }

    /// Number of events waiting in the queue.
    pub fn pending(&self) -> usize {
        self.shared.queue.borrow().len()
    }

    /// Number of subscribed handlers.
    pub fn handler_count(&self) -> usize {
        self.shared.registry.borrow().len()
    }

    /// Returns `true` if `id` names a handler that is still subscribed.
    pub fn is_subscribed(&self, id: HandlerId) -> bool {
        self.shared.is_registered(id)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("pending", &self.pending())
            .field("handlers", &self.handler_count())
            .field("config", &self.shared.config)
            .finish()
    }
}
