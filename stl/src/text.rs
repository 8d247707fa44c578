/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Splits a TTI text field into colored lines.
//!
//! # Overview
//!
//! The text field is scanned from left to right. Every byte falls into exactly one
//! [ByteClass]:
//!
//! - `0x8A` ends the current line.
//! - `0x8F` ends the text field. Unused space is typically padded with it.
//! - `0x00..=0x07` sets the foreground color of the current line.
//! - `0x10..=0x17` sets the background color of the current line.
//! - Anything at or above `0x20` is printable.
//! - Everything else is ignored.
//!
//! Colors are reset to white on black at the start of the field and after every line break.
//! A color code may appear anywhere within a line; the last one seen wins.


use super::charset::decode_line;

/// The line break control code.
pub const NEW_LINE: u8 = 0x8A;

/// The end-of-text control code.
pub const END_OF_TEXT: u8 = 0x8F;

/// One of the eight teletext colors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Black,
}

impl Color {

    /// Maps the low three bits of a control code to a color.
    pub fn from_code(code: u8) -> Self {
        match code & 0x07 {
            0 => Self::White,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            _ => Self::Black,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns the `(red, green, blue)` value of this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::White => (0xFF, 0xFF, 0xFF),
            Self::Red => (0xFF, 0x00, 0x00),
            Self::Green => (0x00, 0xFF, 0x00),
            Self::Yellow => (0xFF, 0xFF, 0x00),
            Self::Blue => (0x00, 0x00, 0xFF),
            Self::Magenta => (0xFF, 0x00, 0xFF),
            Self::Cyan => (0x00, 0xFF, 0xFF),
            Self::Black => (0x00, 0x00, 0x00),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
            Self::Black => "Black",
        }
    }
}

/// A single line of subtitle text along with its colors.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Line {
    pub text: String,
    pub foreground: Color,
    pub background: Color,
}

impl Line {

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The role a single byte of the text field plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteClass {
    NewLine,
    EndOfText,
    Foreground(Color),
    Background(Color),
    Printable(u8),
    Ignored,
}

impl ByteClass {

    pub fn of(byte: u8) -> Self {
        match byte {
            NEW_LINE => Self::NewLine,
            END_OF_TEXT => Self::EndOfText,
            0x00..=0x07 => Self::Foreground(Color::from_code(byte)),
            0x10..=0x17 => Self::Background(Color::from_code(byte)),
            0x20..=0xFF => Self::Printable(byte),
            _ => Self::Ignored,
        }
    }
}

/// The scanner's position within the text field.
enum ScanState {
    /// Collecting bytes for the current line.
    InLine,
    /// An end-of-text code was seen or the field ran out.
    Finished,
}

/// The per-line state carried while scanning.
struct LineState {
    bytes: Vec<u8>,
    foreground: Color,
    background: Color,
}

impl LineState {

    fn new() -> Self {
        Self {
            bytes: Vec::new(),
            foreground: Color::White,
            background: Color::Black,
        }
    }

    /// Produces the finished line and resets the state for the next one.
    fn finish(&mut self) -> Line {

        let line = Line {
            text: decode_line(&self.bytes),
            foreground: self.foreground,
            background: self.background,
        };

        *self = Self::new();

        line
    }
}

/// Splits a text field into lines.
///
/// Every line break produces a line, including empty ones, so the position of each line
/// within the block is preserved. The final line is always produced as well, even when it is
/// empty.
pub fn parse_lines(text_field: &[u8]) -> Vec<Line> {

    let mut lines = Vec::new();
    let mut line = LineState::new();
    let mut state = ScanState::InLine;
    let mut bytes = text_field.iter();

    while let ScanState::InLine = state {
        state = match bytes.next().map(|&byte| ByteClass::of(byte)) {
            Some(ByteClass::NewLine) => {
                lines.push(line.finish());
                ScanState::InLine
            }
            Some(ByteClass::EndOfText) | None => {
                ScanState::Finished
            }
            Some(ByteClass::Foreground(color)) => {
                line.foreground = color;
                ScanState::InLine
            }
            Some(ByteClass::Background(color)) => {
                line.background = color;
                ScanState::InLine
            }
            Some(ByteClass::Printable(byte)) => {
                line.bytes.push(byte);
                ScanState::InLine
            }
            Some(ByteClass::Ignored) => {
                ScanState::InLine
            }
        };
    }

    lines.push(line.finish());

    lines
}

/// Returns whether any line carries at least one character.
pub fn has_visible_text(lines: &[Line]) -> bool {
    lines.iter().any(|line| !line.is_empty())
}
