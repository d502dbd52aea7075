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

use std::cell::RefCell;
use std::rc::Rc;

use herald_core::{Event, EventBus, EventHandler, EventType, Subscription};

/// Shared record of which handlers ran, in call order.
type Calls = Rc<RefCell<Vec<&'static str>>>;

/// A handler that records its name and answers with a fixed stop flag.
struct Probe {
    name: &'static str,
    mask: EventType,
    stop: bool,
    calls: Calls,
}

impl EventHandler for Probe {
    fn signature(&self) -> EventType {
        self.mask
    }

    fn handle(&mut self, _event: &Event) -> bool {
        self.calls.borrow_mut().push(self.name);
        self.stop
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn probe(bus: &EventBus, calls: &Calls, name: &'static str, stop: bool) -> Subscription {
    bus.subscribe(Probe {
        name,
        mask: EventType::KEY_PRESSED | EventType::KEY_RELEASED,
        stop,
        calls: Rc::clone(calls),
    })
}

fn key_press() -> Event {
    Event::new(EventType::KEY_PRESSED)
}

#[test]
fn test_handlers_run_in_subscription_order() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let names = ["r1", "r2", "r3", "r4", "r5"];
    let _subs: Vec<Subscription> = names
        .iter()
        .map(|&name| probe(&bus, &calls, name, false))
        .collect();

    bus.enqueue(key_press());
    let report = bus.process_queue();

    assert_eq!(*calls.borrow(), names.to_vec());
    assert_eq!(report.deliveries, names.len());
    assert_eq!(report.stopped, 0);
}

#[test]
fn test_first_stopping_handler_ends_propagation() {
    // --- 1. ARRANGE ---
    let bus = EventBus::new();
    let calls = Calls::default();
    let _a = probe(&bus, &calls, "A", true);
    let _b = probe(&bus, &calls, "B", false);
    let _c = probe(&bus, &calls, "C", false);

    // --- 2. ACT ---
    bus.enqueue(key_press());
    let report = bus.process_queue();

    // --- 3. ASSERT ---
    assert_eq!(*calls.borrow(), vec!["A"], "B and C must not see the event");
    assert_eq!(report.stopped, 1);
    assert_eq!(bus.pending(), 0);
}

#[test]
fn test_stop_in_the_middle() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let _a = probe(&bus, &calls, "A", false);
    let _b = probe(&bus, &calls, "B", true);
    let _c = probe(&bus, &calls, "C", false);

    bus.enqueue(key_press());
    bus.process_queue();

    assert_eq!(*calls.borrow(), vec!["A", "B"]);
}

#[test]
fn test_removing_middle_handler_keeps_the_others_routed() {
    // --- 1. ARRANGE ---
    let bus = EventBus::new();
    let calls = Calls::default();
    let a = probe(&bus, &calls, "A", false);
    let b = probe(&bus, &calls, "B", false);
    let c = probe(&bus, &calls, "C", false);

    // --- 2. ACT ---
    drop(b);
    bus.enqueue(key_press());
    bus.process_queue();

    // --- 3. ASSERT ---
    assert_eq!(*calls.borrow(), vec!["A", "C"]);
    assert!(a.is_active());
    assert!(c.is_active());
    assert_eq!(bus.handler_count(), 2);

    // The survivors' tokens still unregister exactly their own entries.
    c.close();
    assert!(a.is_active());
    assert_eq!(bus.handler_count(), 1);
    a.close();
    assert_eq!(bus.handler_count(), 0);
}

#[test]
fn test_tokens_survive_arbitrary_removal_order() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let mut subs: Vec<Option<Subscription>> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|name| Some(probe(&bus, &calls, name, false)))
        .collect();

    subs[3].take();
    subs[0].take();
    // New handlers reuse freed slots but still queue up behind the survivors.
    let _f = probe(&bus, &calls, "F", false);
    subs[2].take();

    bus.enqueue(key_press());
    bus.process_queue();

    assert_eq!(*calls.borrow(), vec!["B", "E", "F"]);
    assert!(subs[1].as_ref().is_some_and(Subscription::is_active));
    assert!(subs[4].as_ref().is_some_and(Subscription::is_active));
}

#[test]
fn test_unmatched_event_is_consumed_without_calls() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let _a = probe(&bus, &calls, "A", false);

    bus.enqueue(Event::new(EventType::from_bits_truncate(1 << 7)));
    bus.enqueue(Event::new(EventType::NONE));
    let report = bus.process_queue();

    assert!(calls.borrow().is_empty());
    assert_eq!(report.events, 2);
    assert_eq!(report.unhandled, 2);
    assert_eq!(bus.pending(), 0);
}

#[test]
fn test_handler_dropped_before_drain_gets_nothing() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let gone = probe(&bus, &calls, "gone", false);
    let _kept = probe(&bus, &calls, "kept", false);

    drop(gone);
    bus.enqueue(key_press());
    bus.enqueue(Event::new(EventType::KEY_RELEASED));
    bus.process_queue();

    assert_eq!(*calls.borrow(), vec!["kept", "kept"]);
}

#[test]
fn test_draining_an_empty_queue_is_a_no_op() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let _a = probe(&bus, &calls, "A", false);

    bus.enqueue(key_press());
    bus.process_queue();
    let report = bus.process_queue();

    assert!(report.is_empty());
    assert_eq!(report.deliveries, 0);
    assert_eq!(*calls.borrow(), vec!["A"]);
}

#[test]
fn test_one_drain_routes_every_queued_event_once() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let _a = probe(&bus, &calls, "A", false);

    bus.enqueue(key_press());
    bus.enqueue(Event::new(EventType::KEY_RELEASED));
    bus.enqueue(key_press());
    assert_eq!(bus.pending(), 3);

    let report = bus.process_queue();

    assert_eq!(report.events, 3);
    assert_eq!(*calls.borrow(), vec!["A", "A", "A"]);
    assert_eq!(bus.pending(), 0);
    assert!(bus.process_queue().is_empty());
}

#[test]
fn test_signature_filters_by_shared_bits() {
    let bus = EventBus::new();
    let calls = Calls::default();
    let pressed = Rc::clone(&calls);
    let released = Rc::clone(&calls);
    let _p = bus.subscribe_fn(EventType::KEY_PRESSED, move |_| {
        pressed.borrow_mut().push("pressed");
        false
    });
    let _r = bus.subscribe_fn(EventType::KEY_RELEASED, move |_| {
        released.borrow_mut().push("released");
        false
    });

    bus.enqueue(Event::new(EventType::KEY_RELEASED));
    bus.enqueue(key_press());
    bus.process_queue();

    assert_eq!(*calls.borrow(), vec!["released", "pressed"]);
}
