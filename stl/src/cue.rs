/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Assembles parsed lines into styled cues.
//!
//! A cue is rendered as a single run of ASS override tags and text:
//!
//! ```text
//! {\an8\bord3}{\c&HFFFFFF&\3c&H000000&}First line\N{\c&H00FF00&\3c&H000000&}Second line
//! ```
//!
//! Empty lines contribute neither text nor tags, and never produce a line separator.


use super::{
    alignment::Alignment,
    ass::{color_tag, outline_color_tag},
    block::TtiBlock,
    text::{has_visible_text, parse_lines, Line},
};

/// The outline width applied to every cue.
pub const BORDER_WIDTH: u8 = 3;

/// The token that separates two lines of a cue.
pub const LINE_SEPARATOR: &str = "\\N";

/// One timed, styled subtitle.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cue {
    /// The presentation time in milliseconds.
    pub start_pts: i64,
    /// The time at which the cue disappears, in milliseconds.
    pub end_pts: i64,
    /// The lines of the cue in the order they appear in the block, including empty ones.
    pub lines: Vec<Line>,
    pub alignment: Alignment,
}

impl Cue {

    /// Combines lines and alignment into a cue.
    ///
    /// Returns `None` if none of the lines carries any text.
    pub fn assemble(
        start_pts: i64,
        end_pts: i64,
        lines: Vec<Line>,
        alignment: Alignment,
    ) -> Option<Self> {

        if !has_visible_text(&lines) {
            return None
        }

        Some(Self { start_pts, end_pts, lines, alignment })
    }

    /// Parses a TTI block into a cue shown from `start_pts` until `end_pts`.
    ///
    /// The block's own time codes are not consulted; the demuxer has already turned them
    /// into the timing passed in here.
    pub fn from_block(block: &TtiBlock, start_pts: i64, end_pts: i64) -> Option<Self> {
        Self::assemble(
            start_pts,
            end_pts,
            parse_lines(&block.text_field),
            Alignment::resolve(block.justification_code, block.vertical_position),
        )
    }

    pub fn duration(&self) -> i64 {
        self.end_pts - self.start_pts
    }

    /// Returns the lines that carry text.
    pub fn visible_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| !line.is_empty())
    }

    /// Renders the cue as ASS-marked-up text.
    pub fn to_ass(&self) -> String {

        let mut output = String::with_capacity(64 + self.lines.len() * 64);

        output.push_str("{\\an");
        output.push(char::from(b'0' + self.alignment.grid_position()));
        output.push_str("\\bord");
        output.push_str(&BORDER_WIDTH.to_string());
        output.push('}');

        for (index, line) in self.visible_lines().enumerate() {
            if index > 0 {
                output.push_str(LINE_SEPARATOR);
            }
            output.push('{');
            output.push_str(&color_tag(line.foreground));
            output.push_str(&outline_color_tag(line.background));
            output.push('}');
            output.push_str(&line.text);
        }

        output
    }

    /// Returns the text of the cue without any markup, one line per visible line.
    pub fn plain_text(&self) -> String {
        self.visible_lines()
            .map(|line| line.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n")
    }
}
