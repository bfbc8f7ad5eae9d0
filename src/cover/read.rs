//! Text format: one cube per line over `{'0', '1', '-'}`
//!
//! `'1'` is a positive literal, `'0'` a negative one, `'-'` an absent
//! variable. Every line must have the same width, which becomes the
//! variable count. An empty input is the empty cover. The parser is a
//! plain state machine over the characters of the input.

use std::io::{self, BufRead, Write};

use super::Cover;
use crate::error::ParseCoverError;
use crate::literal::Literal;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the first character of a line
    LineStart,
    /// Inside a cube line
    InCube,
}

impl Cover {
    /// Parse a cover from the text format
    pub fn read<R: BufRead>(mut reader: R) -> Result<Cover, ParseCoverError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Parse a cover from a string in the text format
    pub fn from_text(text: &str) -> Result<Cover, ParseCoverError> {
        let mut state = State::LineStart;
        let mut width: Option<usize> = None;
        let mut line = 1;
        let mut lits: Vec<Literal> = Vec::new();
        let mut col = 0;
        let mut cubes: Vec<Vec<Literal>> = Vec::new();

        let mut close_line = |line: usize,
                              col: usize,
                              lits: &mut Vec<Literal>,
                              cubes: &mut Vec<Vec<Literal>>|
         -> Result<(), ParseCoverError> {
            match width {
                Some(expected) if expected != col => Err(ParseCoverError::WidthMismatch {
                    line,
                    expected,
                    found: col,
                }),
                _ => {
                    width = width.or(Some(col));
                    cubes.push(std::mem::take(lits));
                    Ok(())
                }
            }
        };

        for ch in text.chars() {
            match (state, ch) {
                (_, '\n') => {
                    close_line(line, col, &mut lits, &mut cubes)?;
                    state = State::LineStart;
                    line += 1;
                    col = 0;
                }
                (_, '1') => {
                    lits.push(Literal::positive(col));
                    col += 1;
                    state = State::InCube;
                }
                (_, '0') => {
                    lits.push(Literal::negative(col));
                    col += 1;
                    state = State::InCube;
                }
                (_, '-') => {
                    col += 1;
                    state = State::InCube;
                }
                (_, other) => {
                    return Err(ParseCoverError::InvalidCharacter {
                        line,
                        column: col + 1,
                        found: other,
                    });
                }
            }
        }
        if state == State::InCube {
            // final line without a trailing newline
            close_line(line, col, &mut lits, &mut cubes)?;
        }

        let variable_num = width.unwrap_or(0);
        match Cover::from_literal_lists(variable_num, &cubes) {
            Ok(cover) => Ok(cover),
            // every literal is a column index below the line width
            Err(_) => unreachable!("parser emitted an out-of-range literal"),
        }
    }

    /// Write the cover in the text format
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_text().as_bytes())
    }

    /// The cover as a text-format string
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cube_num() * (self.variable_num() + 1));
        for cube in self.cubes() {
            for var in 0..self.variable_num() {
                let ch = if cube.check_literal_parts(var, false) {
                    '1'
                } else if cube.check_literal_parts(var, true) {
                    '0'
                } else {
                    '-'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
