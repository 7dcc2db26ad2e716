// Copyright 2016 The xi-editor Authors.
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

//! Line breaking according to UAX #14, one codepoint at a time.
//!
//! [`classify`] maps a codepoint to its resolved line breaking class, and a
//! [`Context`] folds the stream of classes into one [`BreakAction`] per
//! codepoint, describing the boundary immediately before it:
//!
//! ```
//! use xi_linebreak::{classify_char, BreakAction, Context};
//!
//! let mut ctx = Context::new();
//! let actions = "a b".chars()
//!     .map(|c| ctx.calc_action(classify_char(c)))
//!     .collect::<Vec<_>>();
//! assert_eq!(actions, vec![BreakAction::Forbid, BreakAction::Forbid, BreakAction::Allow]);
//! ```
//!
//! [`LineBreakIterator`] and [`LineBreakLeafIter`] wrap the same engine for
//! contiguous strings and for rope leaves.

mod class;
mod classify;
mod context;
mod iter;

pub use crate::class::{BreakAction, LineBreakClass, ParseClassError, NUM_CLASSES};
pub use crate::classify::{
    classify, classify_char, is_trimmable, unicode_version, LineBreakProperty, UNICODE_VERSION,
};
pub use crate::context::{pair_action, Context};
pub use crate::iter::{actions, Actions, LineBreakIterator, LineBreakLeafIter};
