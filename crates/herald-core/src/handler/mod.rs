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

//! The handler side of the bus.
//!
//! Anything that wants events implements [`EventHandler`] (or wraps a closure
//! in an [`FnHandler`]) and subscribes it. The returned [`Subscription`]
//! ties the registration to a scope: it unregisters the handler when dropped.

mod subscription;
mod traits;

pub use self::subscription::Subscription;
pub use self::traits::{EventHandler, FnHandler};
