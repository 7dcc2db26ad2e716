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

//! Mapping codepoints to resolved line breaking classes.

use unic_ucd_category::GeneralCategory;
use unicode_linebreak::{break_property, BreakClass};

use crate::class::LineBreakClass;

/// The Unicode version of the classification table, as
/// `(major, minor, patch)`. Break decisions for edge-case scripts may change
/// when this changes.
pub use unicode_linebreak::UNICODE_VERSION;

/// The Unicode version of the classification table, formatted as
/// `"major.minor.patch"`.
pub fn unicode_version() -> String {
    format!("{}.{}.{}", UNICODE_VERSION.0, UNICODE_VERSION.1, UNICODE_VERSION.2)
}

/// Returns the resolved line breaking class of a codepoint.
///
/// Never fails: surrogates, unassigned codepoints and values above
/// U+10FFFF all resolve to `AL`.
pub fn classify(cp: u32) -> LineBreakClass {
    if cp > char::MAX as u32 {
        return LineBreakClass::AL;
    }
    resolve(cp, break_property(cp))
}

/// Returns the resolved line breaking class of a `char`.
pub fn classify_char(ch: char) -> LineBreakClass {
    resolve(ch as u32, break_property(ch as u32))
}

// LB1: the table's raw class reduced to the classes the engine handles.
// Exhaustive, so a table release with new classes fails to build here.
fn resolve(cp: u32, raw: BreakClass) -> LineBreakClass {
    use crate::class::LineBreakClass::*;
    match raw {
        BreakClass::Mandatory => BK,
        BreakClass::CarriageReturn => CR,
        BreakClass::LineFeed => LF,
        BreakClass::CombiningMark => CM,
        BreakClass::NextLine => NL,
        BreakClass::WordJoiner => WJ,
        BreakClass::ZeroWidthSpace => ZW,
        BreakClass::NonBreakingGlue => GL,
        BreakClass::Space => SP,
        BreakClass::ZeroWidthJoiner => ZWJ,
        BreakClass::BeforeAndAfter => B2,
        BreakClass::After => BA,
        BreakClass::Before => BB,
        BreakClass::Hyphen => HY,
        BreakClass::Contingent => CB,
        BreakClass::ClosePunctuation => CL,
        BreakClass::CloseParenthesis => CP,
        BreakClass::Exclamation => EX,
        BreakClass::Inseparable => IN,
        BreakClass::NonStarter => NS,
        BreakClass::OpenPunctuation => OP,
        BreakClass::Quotation => QU,
        BreakClass::InfixSeparator => IS,
        BreakClass::Numeric => NU,
        BreakClass::Postfix => PO,
        BreakClass::Prefix => PR,
        BreakClass::Symbol => SY,
        BreakClass::Alphabetic => AL,
        BreakClass::EmojiBase => EB,
        BreakClass::EmojiModifier => EM,
        BreakClass::HangulLvSyllable => H2,
        BreakClass::HangulLvtSyllable => H3,
        BreakClass::HebrewLetter => HL,
        BreakClass::Ideographic => ID,
        BreakClass::HangulLJamo => JL,
        BreakClass::HangulVJamo => JV,
        BreakClass::HangulTJamo => JT,
        BreakClass::RegionalIndicator => RI,
        BreakClass::ConditionalJapaneseStarter => NS,
        BreakClass::ComplexContext => {
            if is_combining(cp) {
                CM
            } else {
                AL
            }
        }
        BreakClass::Ambiguous | BreakClass::Surrogate | BreakClass::Unknown => AL,
    }
}

// Mn or Mc.
fn is_combining(cp: u32) -> bool {
    match char::from_u32(cp).map(GeneralCategory::of) {
        Some(GeneralCategory::NonspacingMark) | Some(GeneralCategory::SpacingMark) => true,
        _ => false,
    }
}

/// Anything that has a resolved line breaking class.
pub trait LineBreakProperty: Copy {
    fn line_break_class(self) -> LineBreakClass;
}

impl LineBreakProperty for LineBreakClass {
    fn line_break_class(self) -> LineBreakClass {
        self
    }
}

impl LineBreakProperty for char {
    fn line_break_class(self) -> LineBreakClass {
        classify_char(self)
    }
}

impl LineBreakProperty for u32 {
    fn line_break_class(self) -> LineBreakClass {
        classify(self)
    }
}

/// Returns `true` for classes conventionally trimmed from the end of a
/// broken line before its width is measured: SP, CR, LF, NL, CM and BK.
pub fn is_trimmable<P: LineBreakProperty>(p: P) -> bool {
    use crate::class::LineBreakClass::*;
    match p.line_break_class() {
        SP | CR | LF | NL | CM | BK => true,
        _ => false,
    }
}
