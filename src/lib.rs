#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A byte offset into a source, tagged with the label of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the full line text and the 0-based
/// column of `position` inside it. The offset one past the last byte is
/// still valid (that is where end-of-input errors point).
pub fn line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders a parse error against the source it was produced from.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: ExpectedToken (expected next token is =, got INT instead)
        -> main.lang
           |
        20 | let x 5;
           | ------^
    */

    let mut out = String::new();
    let position = error.get_position();

    let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error);
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    // Columns are counted in characters, positions are byte offsets
    let column = line_text
        .char_indices()
        .take_while(|(offset, _)| *offset < line_pos)
        .count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
