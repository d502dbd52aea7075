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

//! Events and their categories.
//!
//! An [`Event`] is a small, immutable value tagged with an [`EventType`].
//! The same bitmask type doubles as a handler's interest mask: routing is a
//! single bitwise intersection.

mod event;
mod kind;

pub use self::event::Event;
pub use self::kind::EventType;
