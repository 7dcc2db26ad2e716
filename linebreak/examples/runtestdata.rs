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

//! Run line break test data.

// Run on:
// http://www.unicode.org/Public/UCD/latest/ucd/auxiliary/LineBreakTest.txt
//
// The engine implements the pairwise form of LB25 and has no East Asian
// Width data for LB30, so a fraction of the upstream cases is expected to
// fail; the failures are printed.

use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

use xi_linebreak::{unicode_version, LineBreakIterator};

fn quote_str(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        if c == '"' || c == '\\' {
            result.push('\\');
        }
        if ' ' <= c && c <= '~' {
            result.push(c);
        } else {
            result.push_str(&format!("\\u{{{:04x}}}", c as u32));
        }
    }
    result
}

fn check_breaks(s: &str, breaks: &[usize]) -> bool {
    let my_breaks = LineBreakIterator::new(s).map(|(bk, _hard)| bk).collect::<Vec<_>>();
    if my_breaks != breaks {
        println!("failed case: \"{}\"", quote_str(s));
        println!("expected {:?} actual {:?}", breaks, my_breaks);
        return false;
    }
    true
}

fn run_test(filename: &str) -> std::io::Result<()> {
    let f = File::open(filename)?;
    let mut reader = BufReader::new(f);
    let mut pass = 0;
    let mut total = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        };
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let mut s = String::new();
        let mut breaks = Vec::new();
        for token in line.split_whitespace() {
            if token == "÷" {
                breaks.push(s.len());
            } else if token == "×" {
            } else if token == "#" {
                break;
            } else if let Some(ch) = u32::from_str_radix(token, 16).ok().and_then(std::char::from_u32) {
                s.push(ch);
            }
        }
        total += 1;
        if check_breaks(&s, &breaks) {
            pass += 1;
        }
    }
    println!("{}/{} pass (table version {})", pass, total, unicode_version());
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let _ = args.next();
    match args.next() {
        Some(filename) => {
            if let Err(err) = run_test(&filename) {
                eprintln!("error reading {}: {}", filename, err);
                std::process::exit(1);
            }
        }
        None => {
            eprintln!("usage: runtestdata LineBreakTest.txt");
            std::process::exit(2);
        }
    }
}
