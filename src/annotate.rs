// Copyright 2026 The xi-editor Authors.
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

//! Rendering the per-codepoint break decisions.

use std::fmt::Write;

use serde_derive::Serialize;
use xi_linebreak::{actions, BreakAction, LineBreakClass};

/// The decision for one codepoint, as written in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Byte offset of the codepoint.
    pub offset: usize,
    pub codepoint: String,
    pub class: LineBreakClass,
    /// The action for the boundary before the codepoint.
    pub action: BreakAction,
}

fn codepoint_label(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

/// Returns `text` with `allow` inserted before every optional break and
/// `force` before every mandatory one.
pub fn annotate(text: &str, allow: &str, force: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (_, ch, _, action) in actions(text) {
        match action {
            BreakAction::Allow => result.push_str(allow),
            BreakAction::Force => result.push_str(force),
            BreakAction::Forbid => (),
        }
        result.push(ch);
    }
    result
}

pub fn records(text: &str) -> Vec<Record> {
    actions(text)
        .map(|(offset, ch, class, action)| Record {
            offset,
            codepoint: codepoint_label(ch),
            class,
            action,
        })
        .collect()
}

/// One line per codepoint: `U+XXXX`, a tab, and the resolved class.
pub fn classes(text: &str) -> String {
    let mut result = String::new();
    for (_, ch, class, _) in actions(text) {
        // writing to a String can't fail
        let _ = writeln!(result, "{}\t{}", codepoint_label(ch), class);
    }
    result
}
