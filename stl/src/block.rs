/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Operates on individual Text and Timing Information (TTI) blocks.
//!
//! # Overview
//!
//! A TTI block is the atomic unit of an STL file. Every block is exactly 128 bytes long and
//! is laid out as follows:
//!
//! | Offset | Size | Field                   |
//! |--------|------|-------------------------|
//! | 0      | 1    | Subtitle Group Number   |
//! | 1      | 2    | Subtitle Number (LE)    |
//! | 3      | 1    | Extension Block Number  |
//! | 4      | 1    | Cumulative Status       |
//! | 5      | 4    | Time Code In            |
//! | 9      | 4    | Time Code Out           |
//! | 13     | 1    | Vertical Position       |
//! | 14     | 1    | Justification Code      |
//! | 15     | 1    | Comment Flag            |
//! | 16     | 112  | Text Field              |
//!
//! There is no checksum or magic number, so any 128 bytes form a valid block.

#[cfg(test)]
mod tests;

mod blockread;

pub use blockread::*;

use super::timecode::Timecode;

/// The offset of the Time Code In field.
pub const TIME_CODE_IN_OFFSET: usize = 5;

/// The offset of the Time Code Out field.
pub const TIME_CODE_OUT_OFFSET: usize = 9;

/// The offset of the Vertical Position field.
pub const VERTICAL_POSITION_OFFSET: usize = 13;

/// The offset of the Justification Code field.
pub const JUSTIFICATION_CODE_OFFSET: usize = 14;

/// The offset of the Text Field.
pub const TEXT_FIELD_OFFSET: usize = 16;

/// The length of the Text Field.
pub const TEXT_FIELD_LENGTH: usize = 112;

/// Represents a decoded TTI block.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TtiBlock {
    /// Distinguishes between language versions of the same programme.
    pub subtitle_group_number: u8,
    /// The number of the subtitle this block belongs to. Extension blocks share the number
    /// of the subtitle they extend.
    pub subtitle_number: u16,
    /// `0xFF` for the last (or only) block of a subtitle.
    pub extension_block_number: u8,
    /// Whether this subtitle is part of a cumulative set. `0x00` means it is not.
    pub cumulative_status: u8,
    /// When the subtitle appears.
    pub time_code_in: Timecode,
    /// When the subtitle disappears.
    pub time_code_out: Timecode,
    /// The teletext row (or screen fraction) of the first line of text.
    pub vertical_position: u8,
    /// The intended horizontal alignment.
    pub justification_code: u8,
    /// `0x01` when the block carries a comment rather than subtitle text.
    pub comment_flag: u8,
    pub text_field: [u8; TEXT_FIELD_LENGTH],
}

impl Default for TtiBlock {
    fn default() -> Self {
        Self {
            subtitle_group_number: 0,
            subtitle_number: 0,
            extension_block_number: 0xFF,
            cumulative_status: 0,
            time_code_in: Timecode::default(),
            time_code_out: Timecode::default(),
            vertical_position: 0,
            justification_code: 0,
            comment_flag: 0,
            text_field: [0x8F; TEXT_FIELD_LENGTH],
        }
    }
}
