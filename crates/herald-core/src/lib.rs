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

//! # Herald Core
//!
//! A single-threaded publish/subscribe event bus.
//!
//! Handlers subscribe with an interest mask, events carry a category tag, and
//! [`EventBus::process_queue`] routes every queued event to the matching
//! handlers in subscription order. Any handler can stop an event from
//! reaching the handlers after it.
//!
//! ```
//! use herald_core::{Event, EventBus, EventType};
//!
//! let bus = EventBus::new();
//! let _subscription = bus.subscribe_fn(EventType::KEYBOARD, |event| {
//!     event.is_kind(EventType::KEY_PRESSED)
//! });
//!
//! bus.enqueue(Event::new(EventType::KEY_PRESSED));
//! let report = bus.process_queue();
//! assert_eq!(report.stopped, 1);
//! ```

#![warn(missing_docs)]

pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod utils;

pub use bus::{DrainReport, EventBus, HandlerId};
pub use config::BusConfig;
pub use error::RegistryError;
pub use event::{Event, EventType};
pub use handler::{EventHandler, FnHandler, Subscription};
