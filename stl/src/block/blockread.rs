/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use super::{
    TtiBlock,
    TEXT_FIELD_LENGTH,
    super::timecode::Timecode,
};
use std::io::{Cursor, Error as IoError, Read};
use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error as ThisError;

/// A specialized [`Result`](std::result::Result) type for block-reading operations.
pub type BlockReadResult<T> = Result<T, BlockReadError>;

/// The error type for [ReadBlockExt].
///
/// Since every combination of bytes forms a valid block, errors can only come from the
/// underlying source.
#[derive(ThisError, Debug)]
pub enum BlockReadError {
    /// The block could not be read because of an underlying I/O error.
    #[error("block IO error")]
    IoError {
        /// The underlying I/O error.
        #[from]
        source: IoError,
    },
}

/// Allows reading TTI blocks from a source.
pub trait ReadBlockExt {
    /// Reads the next 128-byte TTI block from a source.
    fn read_block(&mut self) -> BlockReadResult<TtiBlock>;
}

impl<T: Read> ReadBlockExt for T {

    fn read_block(&mut self) -> BlockReadResult<TtiBlock> {

        let subtitle_group_number = self.read_u8()?;
        let subtitle_number = self.read_u16::<LittleEndian>()?;
        let extension_block_number = self.read_u8()?;
        let cumulative_status = self.read_u8()?;
        let time_code_in = read_timecode(self)?;
        let time_code_out = read_timecode(self)?;
        let vertical_position = self.read_u8()?;
        let justification_code = self.read_u8()?;
        let comment_flag = self.read_u8()?;
        let mut text_field = [0u8; TEXT_FIELD_LENGTH];

        self.read_exact(&mut text_field)?;

        Ok(
            TtiBlock {
                subtitle_group_number,
                subtitle_number,
                extension_block_number,
                cumulative_status,
                time_code_in,
                time_code_out,
                vertical_position,
                justification_code,
                comment_flag,
                text_field,
            }
        )
    }
}

impl TtiBlock {

    /// Decodes a block from the first 128 bytes of a buffer.
    pub fn from_bytes(bytes: &[u8]) -> BlockReadResult<Self> {
        Cursor::new(bytes).read_block()
    }
}

fn read_timecode<R: Read + ?Sized>(input: &mut R) -> BlockReadResult<Timecode> {

    let hours = input.read_u8()?;
    let minutes = input.read_u8()?;
    let seconds = input.read_u8()?;
    let frames = input.read_u8()?;

    Ok(Timecode::new(hours, minutes, seconds, frames))
}
