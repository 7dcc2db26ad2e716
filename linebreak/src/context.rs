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

//! The incremental break engine.
//!
//! Rules that can be decided from the effective classes on either side of a
//! boundary live in a dense pair table, generated at compile time from
//! [`pair_action`]. The few rules that need more context (LB8 and LB14-LB17
//! across runs of spaces, LB8a, LB9, LB21a and the regional indicator
//! pairing of LB30a) are checked first, against the three classes carried
//! in a [`Context`].

use crate::class::BreakAction::{self, *};
use crate::class::LineBreakClass::{self, *};
use crate::class::NUM_CLASSES;

/// The default action for a pair of effective classes, following the
/// numbered rules of UAX #14 in order. `before` is the class on the left of
/// the boundary, `after` the class on the right.
///
/// This ignores everything that needs more than two classes of context; use
/// a [`Context`] to break real text.
pub const fn pair_action(before: LineBreakClass, after: LineBreakClass) -> BreakAction {
    match (before, after) {
        // LB2
        (SOT, _) => Forbid,
        // LB4, LB5
        (CR, LF) => Forbid,
        (BK, _) | (CR, _) | (LF, _) | (NL, _) => Force,
        // LB6, LB7
        (_, BK) | (_, CR) | (_, LF) | (_, NL) | (_, SP) | (_, ZW) => Forbid,
        // LB8
        (ZW, _) => Allow,
        // LB8a
        (ZWJ, _) => Forbid,
        // LB9, LB10: a mark after a space is an orphan and breaks like AL.
        (SP, CM) | (SP, ZWJ) => Allow,
        (_, CM) | (_, ZWJ) => Forbid,
        (CM, after) => pair_action(AL, after),
        // LB11
        (_, WJ) | (WJ, _) => Forbid,
        // LB12
        (GL, _) => Forbid,
        // LB12a
        (b, GL) if !matches!(b, SP | BA | HY) => Forbid,
        // LB13
        (_, CL) | (_, CP) | (_, EX) | (_, IS) | (_, SY) => Forbid,
        // LB14
        (OP, _) => Forbid,
        // LB15
        (QU, OP) => Forbid,
        // LB16
        (CL, NS) | (CP, NS) => Forbid,
        // LB17
        (B2, B2) => Forbid,
        // LB18
        (SP, _) => Allow,
        // LB19
        (_, QU) | (QU, _) => Forbid,
        // LB20
        (_, CB) | (CB, _) => Allow,
        // LB21
        (_, BA) | (_, HY) | (_, NS) | (BB, _) => Forbid,
        // LB21b
        (SY, HL) => Forbid,
        // LB22
        (_, IN) => Forbid,
        // LB23
        (AL, NU) | (HL, NU) | (NU, AL) | (NU, HL) => Forbid,
        // LB23a
        (PR, ID) | (PR, EB) | (PR, EM) | (ID, PO) | (EB, PO) | (EM, PO) => Forbid,
        // LB24
        (PR, AL) | (PR, HL) | (PO, AL) | (PO, HL) => Forbid,
        (AL, PR) | (AL, PO) | (HL, PR) | (HL, PO) => Forbid,
        // LB25
        (CL, PO) | (CP, PO) | (CL, PR) | (CP, PR) | (NU, PO) | (NU, PR) => Forbid,
        (PO, OP) | (PO, NU) | (PR, OP) | (PR, NU) => Forbid,
        (HY, NU) | (IS, NU) | (NU, NU) | (SY, NU) => Forbid,
        // LB26
        (JL, JL) | (JL, JV) | (JL, H2) | (JL, H3) => Forbid,
        (JV, JV) | (JV, JT) | (H2, JV) | (H2, JT) => Forbid,
        (JT, JT) | (H3, JT) => Forbid,
        // LB27
        (JL, PO) | (JV, PO) | (JT, PO) | (H2, PO) | (H3, PO) => Forbid,
        (PR, JL) | (PR, JV) | (PR, JT) | (PR, H2) | (PR, H3) => Forbid,
        // LB28
        (AL, AL) | (AL, HL) | (HL, AL) | (HL, HL) => Forbid,
        // LB29
        (IS, AL) | (IS, HL) => Forbid,
        // LB30
        (AL, OP) | (HL, OP) | (NU, OP) | (CP, AL) | (CP, HL) | (CP, NU) => Forbid,
        // LB30a, for the first pair of a run; `Context` tracks the rest.
        (RI, RI) => Forbid,
        // LB30b
        (EB, EM) => Forbid,
        // LB31
        _ => Allow,
    }
}

const fn build_pair_table() -> [[BreakAction; NUM_CLASSES]; NUM_CLASSES] {
    let mut table = [[Allow; NUM_CLASSES]; NUM_CLASSES];
    let mut i = 0;
    while i < NUM_CLASSES {
        let mut j = 0;
        while j < NUM_CLASSES {
            table[i][j] = pair_action(LineBreakClass::ALL[i], LineBreakClass::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    table
}

static PAIR_TABLE: [[BreakAction; NUM_CLASSES]; NUM_CLASSES] = build_pair_table();

// Classes a following combining mark can attach to (LB9).
fn is_mark_base(class: LineBreakClass) -> bool {
    match class {
        SOT | BK | CR | LF | NL | SP | ZW => false,
        _ => true,
    }
}

fn is_mark(class: LineBreakClass) -> bool {
    class == CM || class == ZWJ
}

/// The state needed to decide line breaks one codepoint at a time.
///
/// Create one per independent run of text (a paragraph, a line layout pass)
/// and feed it the class of every codepoint in order. The action returned
/// for a codepoint applies to the boundary immediately before it. No action
/// is produced for the end of text: a run always ends with a mandatory break
/// (LB3) and it is up to the caller to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The effective class on the left of `curr`. Absorbed marks are
    /// transparent, and a run of spaces keeps the class before the run.
    /// While `curr` is a regional indicator, this is RI exactly when `curr`
    /// closes a flag pair.
    prev: LineBreakClass,
    /// The raw class of the last codepoint.
    curr_a: LineBreakClass,
    /// The effective class of the last codepoint, after LB9 and LB10.
    curr_e: LineBreakClass,
}

impl Default for Context {
    fn default() -> Context {
        Context { prev: SOT, curr_a: SOT, curr_e: SOT }
    }
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    /// Start a new run of text.
    pub fn reset(&mut self) {
        *self = Context::default();
    }

    /// The raw class of the last codepoint fed, `SOT` if none.
    pub fn current(&self) -> LineBreakClass {
        self.curr_a
    }

    /// The effective class of the last codepoint fed, `SOT` if none.
    pub fn effective(&self) -> LineBreakClass {
        self.curr_e
    }

    /// Consume the class of the next codepoint and return the action for the
    /// boundary before it.
    pub fn calc_action(&mut self, next: LineBreakClass) -> BreakAction {
        debug_assert!(next != SOT, "SOT is not the class of a codepoint");
        let absorbed = is_mark(next) && is_mark_base(self.curr_e);
        let next_e = if absorbed {
            self.curr_e
        } else if is_mark(next) {
            // LB10
            AL
        } else {
            next
        };
        let action = self.decide(next, next_e, absorbed);

        self.curr_a = next;
        if !absorbed {
            self.prev = if self.curr_e == RI && next_e == RI {
                if self.prev == RI {
                    SOT
                } else {
                    RI
                }
            } else if self.curr_e == SP && next_e == SP {
                self.prev
            } else {
                self.curr_e
            };
            self.curr_e = next_e;
        }
        action
    }

    fn decide(&self, next: LineBreakClass, next_e: LineBreakClass, absorbed: bool) -> BreakAction {
        let curr = self.curr_e;
        // LB2
        if curr == SOT {
            return Forbid;
        }
        // LB4, LB5
        if curr.is_hard_break() {
            return if curr == CR && next == LF { Forbid } else { Force };
        }
        // LB6, LB7
        match next {
            BK | CR | LF | NL | SP | ZW => return Forbid,
            _ => (),
        }
        // LB8
        if curr == ZW || (curr == SP && self.prev == ZW) {
            return Allow;
        }
        // LB8a
        if self.curr_a == ZWJ {
            return Forbid;
        }
        // LB9
        if absorbed {
            return Forbid;
        }
        // LB14 - LB17 across a run of spaces
        if curr == SP {
            match (self.prev, next_e) {
                (OP, _) | (QU, OP) | (CL, NS) | (CP, NS) | (B2, B2) => return Forbid,
                _ => (),
            }
        }
        // LB21a
        if self.prev == HL && (curr == HY || curr == BA) && next_e != CB {
            return Forbid;
        }
        // LB30a
        if curr == RI && next_e == RI {
            return if self.prev == RI { Allow } else { Forbid };
        }
        PAIR_TABLE[curr as usize][next_e as usize]
    }
}
