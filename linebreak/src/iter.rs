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

//! Iterators driving a [`Context`] over string slices.

use std::str::CharIndices;

use crate::class::{BreakAction, LineBreakClass};
use crate::classify::classify_char;
use crate::context::Context;

/// An iterator which produces line breaks according to the UAX 14 line
/// breaking algorithm. For each break, return a tuple consisting of the offset
/// within the source string and a bool indicating whether it's a hard break.
///
/// The end of the string is always reported as a hard break (LB3), unless the
/// string is empty.
#[derive(Copy, Clone)]
pub struct LineBreakIterator<'a> {
    s: &'a str,
    ix: usize,
    ctx: Context,
}

impl<'a> Iterator for LineBreakIterator<'a> {
    type Item = (usize, bool);

    // return break pos and whether it's a hard break
    fn next(&mut self) -> Option<(usize, bool)> {
        loop {
            if self.ix > self.s.len() {
                return None;
            } else if self.ix == self.s.len() {
                // LB3, break at EOT
                self.ix += 1;
                return Some((self.s.len(), true));
            }
            let ch = self.s[self.ix..].chars().next()?;
            let result = self.ix;
            self.ix += ch.len_utf8();
            match self.ctx.calc_action(classify_char(ch)) {
                BreakAction::Allow => return Some((result, false)),
                BreakAction::Force => return Some((result, true)),
                BreakAction::Forbid => (),
            }
        }
    }
}

impl<'a> LineBreakIterator<'a> {
    /// Create a new iterator for the given string slice.
    pub fn new(s: &str) -> LineBreakIterator {
        LineBreakIterator {
            s,
            // LB2, don't break; sot takes priority for empty string
            ix: if s.is_empty() { 1 } else { 0 },
            ctx: Context::new(),
        }
    }
}

/// A line break iterator for leaves in a rope or other non-contiguous string
/// representation. All the look-behind the rules need is carried from one
/// leaf to the next.
///
/// This is something of an "expert-level" interface, and should only be used if
/// the caller is prepared to respect all the invariants. Otherwise, you might
/// get inconsistent breaks depending on start position and leaf boundaries.
#[derive(Copy, Clone, Default)]
pub struct LineBreakLeafIter {
    ix: usize,
    ctx: Context,
}

impl LineBreakLeafIter {
    /// Create a new line break iterator suitable for leaves in a rope.
    /// Precondition: ix is at a code point boundary within s. The code
    /// point at ix is treated as the start of text.
    pub fn new(s: &str, ix: usize) -> LineBreakLeafIter {
        debug_assert!(s.is_char_boundary(ix), "{} is not a code point boundary", ix);
        LineBreakLeafIter { ix, ctx: Context::new() }
    }

    /// Return break pos and whether it's a hard break.
    /// If end of leaf is found, return leaf's len. This does not indicate
    /// a break, as that requires at least one more codepoint of context.
    /// A break right at the start of the following leaf is returned as
    /// offset 0 by the first call on that leaf.
    /// EOT is always a break, so in the EOT case it's up to the caller
    /// to figure that out.
    ///
    /// For consistent results, always supply same `s` until end of leaf is
    /// reached (and initially this should be the same as in the `new` call).
    pub fn next(&mut self, s: &str) -> (usize, bool) {
        loop {
            let ch = match s[self.ix..].chars().next() {
                Some(ch) => ch,
                None => {
                    self.ix = 0; // in preparation for next leaf
                    return (s.len(), false);
                }
            };
            let result = self.ix;
            self.ix += ch.len_utf8();
            match self.ctx.calc_action(classify_char(ch)) {
                BreakAction::Allow => return (result, false),
                BreakAction::Force => return (result, true),
                BreakAction::Forbid => (),
            }
        }
    }
}

/// Returns an iterator over every codepoint of `s` with its byte offset,
/// its resolved class and the action for the boundary before it.
pub fn actions(s: &str) -> Actions {
    Actions { inner: s.char_indices(), ctx: Context::new() }
}

/// The iterator returned by [`actions`].
#[derive(Clone)]
pub struct Actions<'a> {
    inner: CharIndices<'a>,
    ctx: Context,
}

impl<'a> Iterator for Actions<'a> {
    type Item = (usize, char, LineBreakClass, BreakAction);

    fn next(&mut self) -> Option<Self::Item> {
        let (ix, ch) = self.inner.next()?;
        let class = classify_char(ch);
        Some((ix, ch, class, self.ctx.calc_action(class)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lb_iter_simple() {
        assert_eq!(vec![(6, false), (11, true)],
            LineBreakIterator::new("hello world").collect::<Vec<_>>());

        // LB7, LB18
        assert_eq!(vec![(3, false), (4, true)],
            LineBreakIterator::new("a  b").collect::<Vec<_>>());

        // LB5
        assert_eq!(vec![(2, true), (3, true)],
            LineBreakIterator::new("a\nb").collect::<Vec<_>>());
        assert_eq!(vec![(2, true), (4, true)],
            LineBreakIterator::new("\r\n\r\n").collect::<Vec<_>>());

        // LB8a
        assert_eq!(vec![(7, true)],
            LineBreakIterator::new("\u{200D}\u{1F3FB}").collect::<Vec<_>>());

        // LB10 combining mark after space
        assert_eq!(vec![(2, false), (4, true)],
            LineBreakIterator::new("a \u{301}").collect::<Vec<_>>());

        // LB15
        assert_eq!(vec![(3, true)],
            LineBreakIterator::new("\" [").collect::<Vec<_>>());

        // LB17
        assert_eq!(vec![(2, false), (10, false), (11, true)],
            LineBreakIterator::new("a \u{2014} \u{2014} c").collect::<Vec<_>>());

        // LB18
        assert_eq!(vec![(2, false), (6, false), (7, true)],
            LineBreakIterator::new("a \"b\" c").collect::<Vec<_>>());

        // LB21
        assert_eq!(vec![(2, false), (3, true)],
            LineBreakIterator::new("a-b").collect::<Vec<_>>());

        // LB21a
        assert_eq!(vec![(5, true)],
            LineBreakIterator::new("\u{05D0}-\u{05D0}").collect::<Vec<_>>());

        // LB23a
        assert_eq!(vec![(6, true)],
            LineBreakIterator::new("$\u{1F3FB}%").collect::<Vec<_>>());

        // LB30b
        assert_eq!(vec![(8, true)],
            LineBreakIterator::new("\u{1F466}\u{1F3FB}").collect::<Vec<_>>());

        // LB30a
        assert_eq!(vec![(8, false), (16, true)],
            LineBreakIterator::new("\u{1F1E6}\u{1F1E6}\u{1F1E6}\u{1F1E6}").collect::<Vec<_>>());
    }

    #[test]
    fn lb_iter_empty() {
        assert_eq!(LineBreakIterator::new("").next(), None);
        assert_eq!(vec![(1, true)], LineBreakIterator::new("\n").collect::<Vec<_>>());
    }

    fn leaf_breaks(s: &str, chars_per_leaf: usize) -> Vec<(usize, bool)> {
        let mut leaves = Vec::new();
        let mut start = 0;
        for (n, (ix, _)) in s.char_indices().enumerate() {
            if n > 0 && n % chars_per_leaf == 0 {
                leaves.push(&s[start..ix]);
                start = ix;
            }
        }
        leaves.push(&s[start..]);

        let mut iter = LineBreakLeafIter::new(leaves[0], 0);
        let mut base = 0;
        let mut result = Vec::new();
        for leaf in leaves {
            loop {
                let (pos, hard) = iter.next(leaf);
                if pos == leaf.len() {
                    break;
                }
                result.push((base + pos, hard));
            }
            base += leaf.len();
        }
        result
    }

    #[test]
    fn leaf_iter_from_offset() {
        let s = "ab cd";
        let mut iter = LineBreakLeafIter::new(s, 3);
        assert_eq!(iter.next(s), (s.len(), false));

        let mut iter = LineBreakLeafIter::new(s, 1);
        assert_eq!(iter.next(s), (3, false));
        assert_eq!(iter.next(s), (s.len(), false));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn leaf_iter_rejects_split_code_point() {
        LineBreakLeafIter::new("\u{00E9}t\u{00E9}", 1);
    }

    #[test]
    fn leaves_match_whole_string() {
        let s = "The (quick)\u{00A0}brown fox\r\njumps \u{1F1E6}\u{1F1E6}\u{1F1E6} over \
                 \u{05D0}-\u{05D0} $12.50 \u{1F466}\u{1F3FB} \u{30D4}\u{30E5}\u{30FC}\u{30BF}";
        let expected = LineBreakIterator::new(s)
            .filter(|&(pos, _)| pos < s.len())
            .collect::<Vec<_>>();
        for chars_per_leaf in 1..8 {
            assert_eq!(leaf_breaks(s, chars_per_leaf), expected, "leaf size {}", chars_per_leaf);
        }
    }

    #[test]
    fn default_leaf_iter_on_empty() {
        let mut iter = LineBreakLeafIter::default();
        assert_eq!(iter.next(""), (0, false));
    }

    #[test]
    fn actions_per_codepoint() {
        let acts = actions("a b").collect::<Vec<_>>();
        assert_eq!(acts.len(), 3);
        assert_eq!(acts[0], (0, 'a', LineBreakClass::AL, BreakAction::Forbid));
        assert_eq!(acts[1], (1, ' ', LineBreakClass::SP, BreakAction::Forbid));
        assert_eq!(acts[2], (2, 'b', LineBreakClass::AL, BreakAction::Allow));
    }
}
