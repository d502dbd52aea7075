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

//! Ordered storage of subscribed handlers.

use std::fmt;

use crate::error::RegistryError;
use crate::event::Event;
use crate::handler::EventHandler;

/// The membership token of a subscribed handler.
///
/// It pairs a slot index with a generation counter. When a handler is
/// unregistered its slot is recycled and the generation is incremented, so a
/// token held for a removed handler can never reach whichever handler reuses
/// the slot. Removing other handlers never affects a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId {
    index: u32,
    generation: u32,
}

impl HandlerId {
    /// The slot index in the registry.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// How many times the slot had been recycled when this token was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A live registry entry, linked to its neighbours in subscription order.
struct Entry {
    /// `None` while the handler is lent out for a dispatch.
    handler: Option<Box<dyn EventHandler>>,
    prev: Option<u32>,
    next: Option<u32>,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// An arena of handler slots threaded by a doubly linked list.
///
/// The list preserves subscription order across any pattern of removals,
/// while the free list lets slots be reused in $O(1)$. Insertion and removal
/// never move other entries.
#[derive(Default)]
pub(crate) struct HandlerRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl HandlerRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `handler` after every registered handler.
    pub fn insert(&mut self, handler: Box<dyn EventHandler>) -> HandlerId {
        let entry = Entry {
            handler: Some(handler),
            prev: self.tail,
            next: None,
        };

        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(entry);
            HandlerId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            HandlerId {
                index,
                generation: 0,
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(entry) = self.entry_mut(tail) {
                    entry.next = Some(id.index);
                }
            }
            None => self.head = Some(id.index),
        }
        self.tail = Some(id.index);
        self.len += 1;
        id
    }

    /// Unlinks the entry named by `id` and frees its slot.
    ///
    /// Returns the handler so the caller can drop it outside any borrow of the
    /// registry; it is `None` if the handler was lent out at the time.
    pub fn remove(
        &mut self,
        id: HandlerId,
    ) -> Result<Option<Box<dyn EventHandler>>, RegistryError> {
        if self.is_empty() {
            return Err(RegistryError::Empty { id });
        }
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .ok_or(RegistryError::StaleHandle { id })?;
        let entry = slot
            .entry
            .take()
            .ok_or(RegistryError::StaleHandle { id })?;
        slot.generation = slot.generation.wrapping_add(1);

        match entry.prev {
            Some(prev) => {
                if let Some(prev) = self.entry_mut(prev) {
                    prev.next = entry.next;
                }
            }
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => {
                if let Some(next) = self.entry_mut(next) {
                    next.prev = entry.prev;
                }
            }
            None => self.tail = entry.prev,
        }

        self.free.push(id.index);
        self.len -= 1;
        Ok(entry.handler)
    }

    /// Returns `true` if `id` names a live entry.
    pub fn contains(&self, id: HandlerId) -> bool {
        self.entry(id).is_some()
    }

    /// The tokens of all live entries, in subscription order.
    pub fn ids(&self) -> Vec<HandlerId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let slot = &self.slots[index as usize];
            ids.push(HandlerId {
                index,
                generation: slot.generation,
            });
            cursor = slot.entry.as_ref().and_then(|entry| entry.next);
        }
        ids
    }

    /// Lends out the handler named by `id` if it is live, present and
    /// interested in `event`.
    pub fn checkout(&mut self, id: HandlerId, event: &Event) -> Option<Box<dyn EventHandler>> {
        let entry = self.entry_mut_checked(id)?;
        let interested = entry
            .handler
            .as_ref()
            .is_some_and(|handler| event.matches(handler.signature()));
        if interested {
            entry.handler.take()
        } else {
            None
        }
    }

    /// Returns a lent handler to its entry.
    ///
    /// Fails, handing the handler back, if the entry was removed meanwhile.
    pub fn restore(
        &mut self,
        id: HandlerId,
        handler: Box<dyn EventHandler>,
    ) -> Result<(), Box<dyn EventHandler>> {
        match self.entry_mut_checked(id) {
            Some(entry) if entry.handler.is_none() => {
                entry.handler = Some(handler);
                Ok(())
            }
            _ => Err(handler),
        }
    }

    fn entry(&self, id: HandlerId) -> Option<&Entry> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut_checked(&mut self, id: HandlerId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    /// Link maintenance only: indices reached through the list are always live.
    fn entry_mut(&mut self, index: u32) -> Option<&mut Entry> {
        self.slots
            .get_mut(index as usize)
            .and_then(|slot| slot.entry.as_mut())
    }
}
