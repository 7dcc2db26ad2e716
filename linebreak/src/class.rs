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

//! The line breaking class and break action taxonomies.

use std::error;
use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

/// A resolved UAX #14 line breaking class.
///
/// The classes AI, CJ, SA, SG and XX are resolved by the classifier (rule
/// LB1) and have no variant here. `SOT` is synthetic: it only seeds a fresh
/// [`Context`](crate::Context) and is never returned by
/// [`classify`](crate::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum LineBreakClass {
    /// Ordinary alphabetic and symbol characters.
    AL,
    /// Break opportunity before and after (em dash).
    B2,
    /// Break after.
    BA,
    /// Break before.
    BB,
    /// Mandatory break.
    BK,
    /// Contingent break opportunity.
    CB,
    /// Close punctuation.
    CL,
    /// Combining mark.
    CM,
    /// Close parenthesis.
    CP,
    /// Carriage return.
    CR,
    /// Emoji base.
    EB,
    /// Emoji modifier.
    EM,
    /// Exclamation or interrogation.
    EX,
    /// Non-breaking glue.
    GL,
    /// Hangul LV syllable.
    H2,
    /// Hangul LVT syllable.
    H3,
    /// Hebrew letter.
    HL,
    /// Hyphen.
    HY,
    /// Ideographic.
    ID,
    /// Inseparable characters.
    IN,
    /// Infix numeric separator.
    IS,
    /// Hangul leading jamo.
    JL,
    /// Hangul trailing jamo.
    JT,
    /// Hangul vowel jamo.
    JV,
    /// Line feed.
    LF,
    /// Next line.
    NL,
    /// Nonstarter.
    NS,
    /// Numeric.
    NU,
    /// Open punctuation.
    OP,
    /// Postfix numeric.
    PO,
    /// Prefix numeric.
    PR,
    /// Quotation mark.
    QU,
    /// Regional indicator.
    RI,
    /// Space.
    SP,
    /// Symbols allowing a break after.
    SY,
    /// Word joiner.
    WJ,
    /// Zero width space.
    ZW,
    /// Zero width joiner.
    ZWJ,
    /// Start of text. Only ever seeds the engine state.
    SOT,
}

/// The number of variants of [`LineBreakClass`], including `SOT`.
pub const NUM_CLASSES: usize = 39;

impl LineBreakClass {
    /// Every class, in declaration order, so that `ALL[c as usize] == c`.
    pub const ALL: [LineBreakClass; NUM_CLASSES] = {
        use self::LineBreakClass::*;
        [
            AL, B2, BA, BB, BK, CB, CL, CM, CP, CR, EB, EM, EX, GL, H2, H3, HL, HY, ID, IN, IS, JL,
            JT, JV, LF, NL, NS, NU, OP, PO, PR, QU, RI, SP, SY, WJ, ZW, ZWJ, SOT,
        ]
    };

    /// The short property value alias, as used in the UCD.
    pub fn name(self) -> &'static str {
        use self::LineBreakClass::*;
        match self {
            AL => "AL",
            B2 => "B2",
            BA => "BA",
            BB => "BB",
            BK => "BK",
            CB => "CB",
            CL => "CL",
            CM => "CM",
            CP => "CP",
            CR => "CR",
            EB => "EB",
            EM => "EM",
            EX => "EX",
            GL => "GL",
            H2 => "H2",
            H3 => "H3",
            HL => "HL",
            HY => "HY",
            ID => "ID",
            IN => "IN",
            IS => "IS",
            JL => "JL",
            JT => "JT",
            JV => "JV",
            LF => "LF",
            NL => "NL",
            NS => "NS",
            NU => "NU",
            OP => "OP",
            PO => "PO",
            PR => "PR",
            QU => "QU",
            RI => "RI",
            SP => "SP",
            SY => "SY",
            WJ => "WJ",
            ZW => "ZW",
            ZWJ => "ZWJ",
            SOT => "SOT",
        }
    }

    /// Classes after which a break is always mandatory (LB4, LB5).
    pub fn is_hard_break(self) -> bool {
        match self {
            LineBreakClass::BK | LineBreakClass::CR | LineBreakClass::LF | LineBreakClass::NL => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for LineBreakClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a string is not the name of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClassError(String);

impl fmt::Display for ParseClassError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown line break class {:?}", self.0)
    }
}

impl error::Error for ParseClassError {}

/// Parses the names produced by `name()`, `SOT` included, so every class
/// survives a round trip through its string form.
impl FromStr for LineBreakClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<LineBreakClass, ParseClassError> {
        LineBreakClass::ALL
            .iter()
            .cloned()
            .find(|class| class.name() == s)
            .ok_or_else(|| ParseClassError(s.to_owned()))
    }
}

/// The decision for the boundary immediately before a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakAction {
    /// A line may be broken here.
    Allow,
    /// A line must be broken here.
    Force,
    /// A line must not be broken here.
    Forbid,
}

impl BreakAction {
    /// Returns `true` if a line may end at this boundary.
    pub fn is_break(self) -> bool {
        match self {
            BreakAction::Allow | BreakAction::Force => true,
            BreakAction::Forbid => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_by_discriminant() {
        for (i, &class) in LineBreakClass::ALL.iter().enumerate() {
            assert_eq!(class as usize, i, "{}", class);
        }
        assert_eq!(LineBreakClass::SOT as usize + 1, NUM_CLASSES);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&LineBreakClass::ZWJ).unwrap(), "\"ZWJ\"");
        assert_eq!(serde_json::to_string(&BreakAction::Forbid).unwrap(), "\"forbid\"");
        let action: BreakAction = serde_json::from_str("\"force\"").unwrap();
        assert_eq!(action, BreakAction::Force);
    }

    #[test]
    fn display_matches_alias() {
        assert_eq!(LineBreakClass::H3.to_string(), "H3");
        assert_eq!(format!("{}", LineBreakClass::SOT), "SOT");
    }

    #[test]
    fn names_parse_back() {
        for &class in LineBreakClass::ALL.iter() {
            assert_eq!(class.to_string().parse::<LineBreakClass>(), Ok(class));
        }
        assert_eq!("ZWJ".parse::<LineBreakClass>(), Ok(LineBreakClass::ZWJ));
        for bad in &["", "al", "XX", "SA", " AL", "ZWJ "] {
            assert_eq!(bad.parse::<LineBreakClass>(), Err(ParseClassError(bad.to_string())));
        }
    }
}
