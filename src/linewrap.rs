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

//! Compute line wrapping breaks for text.

use std::time::Instant;

use log::debug;
use xi_linebreak::{classify_char, is_trimmable, LineBreakClass, LineBreakIterator};

fn trim_end(s: &str) -> &str {
    s.trim_end_matches(|c: char| is_trimmable(c))
}

// Width in columns: one per codepoint, except marks and ZWJ which take none.
// East Asian wide characters still count as one.
fn width(s: &str) -> usize {
    s.chars()
        .filter(|&c| match classify_char(c) {
            LineBreakClass::CM | LineBreakClass::ZWJ => false,
            _ => true,
        })
        .count()
}

/// Wraps `text` greedily so that no line is wider than `cols`, unless a
/// single unbreakable run is. Mandatory breaks always end a line. Trailing
/// spaces, line terminators and marks are trimmed from every line and don't
/// count towards its width.
pub fn linewrap(text: &str, cols: usize) -> Vec<&str> {
    let start_time = Instant::now();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut last_pos = 0;
    let mut line_width = 0;
    for (pos, hard) in LineBreakIterator::new(text) {
        let word = &text[last_pos..pos];
        if line_width > 0 && line_width + width(trim_end(word)) > cols {
            lines.push(trim_end(&text[line_start..last_pos]));
            line_start = last_pos;
            line_width = 0;
        }
        line_width += width(word);
        if hard {
            lines.push(trim_end(&text[line_start..pos]));
            line_start = pos;
            line_width = 0;
        }
        last_pos = pos;
    }
    let time_ms = start_time.elapsed().as_secs_f64() * 1e3;
    debug!("time to wrap {} bytes: {:.2}ms", text.len(), time_ms);
    lines
}
