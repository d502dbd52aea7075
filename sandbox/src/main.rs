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

// Herald Sandbox
// One key press, two actors: the first one to react swallows the event.

use anyhow::Result;
use herald_core::{BusConfig, Event, EventBus, EventHandler, EventType, Subscription};

/// Environment variable naming an optional JSON bus configuration.
const CONFIG_ENV: &str = "HERALD_CONFIG";

/// An event carrying a key press.
struct KeyPressEvent;

impl From<KeyPressEvent> for Event {
    fn from(_: KeyPressEvent) -> Self {
        Event::new(EventType::KEY_PRESSED)
    }
}

/// A scene actor listening to the keyboard.
struct Actor {
    name: String,
}

impl Actor {
    /// Creates the actor and subscribes it to `bus`.
    ///
    /// The actor stays subscribed for as long as the returned subscription lives.
    fn spawn(bus: &EventBus, name: &str) -> Subscription {
        log::info!("Spawning actor '{name}'");
        bus.subscribe(Actor {
            name: name.to_owned(),
        })
    }
}

impl EventHandler for Actor {
    fn signature(&self) -> EventType {
        EventType::KEY_PRESSED | EventType::KEY_RELEASED
    }

    fn handle(&mut self, event: &Event) -> bool {
        if event.is_kind(EventType::KEY_PRESSED) {
            println!("Hey! You pressed a key!");
            log::debug!("'{}' consumed the key press", self.name);
        }
        // Actors always swallow keyboard events.
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn load_config() -> Result<BusConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => BusConfig::from_file(path),
        None => Ok(BusConfig::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let bus = EventBus::with_config(load_config()?);

    let event = KeyPressEvent;
    let _actor = Actor::spawn(&bus, "actor");
    let _actor2 = Actor::spawn(&bus, "actor2");

    bus.enqueue(event.into());

    // The first actor reacts; the second never sees the event.
    let report = bus.process_queue();
    log::info!(
        "Drained {} event(s): {} delivery(ies), {} stopped",
        report.events,
        report.deliveries,
        report.stopped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_actor_swallows_key_press() {
        let bus = EventBus::new();
        let _actor = Actor::spawn(&bus, "actor");
        let _actor2 = Actor::spawn(&bus, "actor2");

        bus.enqueue(KeyPressEvent.into());
        let report = bus.process_queue();

        assert_eq!(report.deliveries, 1);
        assert_eq!(report.stopped, 1);
    }

    #[test]
    fn test_actor_ignores_unrelated_categories() {
        let bus = EventBus::new();
        let _actor = Actor::spawn(&bus, "actor");

        bus.enqueue(Event::new(EventType::from_bits_truncate(1 << 4)));

        assert_eq!(bus.process_queue().unhandled, 1);
    }
}
