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

//! Event categories, shared by events (their tag) and handlers (their interest mask).

use crate::herald_bitflags;

herald_bitflags! {
    /// A set of event categories.
    ///
    /// An event is tagged with one category; a handler declares the union of the
    /// categories it wants to receive. A handler receives an event when the two
    /// sets intersect, so the empty set matches nothing.
    ///
    /// Categories beyond the named ones can be built with
    /// [`EventType::from_bits_truncate`], one bit per category.
    pub struct EventType: u32 {
        /// No category.
        const NONE = 0;
        /// A keyboard key went down.
        const KEY_PRESSED = 1 << 0;
        /// A keyboard key went up.
        const KEY_RELEASED = 1 << 1;
        /// Any keyboard category.
        const KEYBOARD = Self::KEY_PRESSED.bits() | Self::KEY_RELEASED.bits();
    }
}

impl EventType {
    /// Builds a single-bit category from its bit position.
    ///
    /// Positions 0 and 1 are the keyboard categories. Returns `None` when
    /// `bit` does not fit in the mask.
    pub const fn from_bit(bit: u32) -> Option<Self> {
        if bit < u32::BITS {
            Some(Self::from_bits_truncate(1 << bit))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_categories_are_distinct_bits() {
        assert_eq!(EventType::NONE.bits(), 0);
        assert_eq!(EventType::KEY_PRESSED.bits(), 1);
        assert_eq!(EventType::KEY_RELEASED.bits(), 2);
        assert!(!EventType::KEY_PRESSED.intersects(EventType::KEY_RELEASED));
    }

    #[test]
    fn test_keyboard_covers_both_key_categories() {
        assert_eq!(
            EventType::KEYBOARD,
            EventType::KEY_PRESSED | EventType::KEY_RELEASED
        );
        assert_eq!(
            format!("{:?}", EventType::KEYBOARD),
            "EventType { KEY_PRESSED | KEY_RELEASED }"
        );
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(EventType::from_bit(0), Some(EventType::KEY_PRESSED));
        assert_eq!(EventType::from_bit(5).map(|t| t.bits()), Some(32));
        assert_eq!(EventType::from_bit(32), None);
    }
}
