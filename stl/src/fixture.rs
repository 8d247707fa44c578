/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

//! Builds synthetic STL data for tests.

use super::{
    demux::HEADER_SIZE,
    text::END_OF_TEXT,
    TTI_BLOCK_SIZE,
};

/// Builds a raw TTI block with the given timing, position and text.
///
/// The text field is padded with end-of-text codes.
pub fn block_bytes(
    time_code_in: [u8; 4],
    time_code_out: [u8; 4],
    vertical_position: u8,
    justification_code: u8,
    text: &[u8],
) -> [u8; TTI_BLOCK_SIZE] {

    let mut block = [END_OF_TEXT; TTI_BLOCK_SIZE];

    block[0] = 0x00;
    block[1] = 0x01;
    block[2] = 0x00;
    block[3] = 0xFF;
    block[4] = 0x00;
    block[5..9].copy_from_slice(&time_code_in);
    block[9..13].copy_from_slice(&time_code_out);
    block[13] = vertical_position;
    block[14] = justification_code;
    block[15] = 0x00;
    block[16..16 + text.len()].copy_from_slice(text);

    block
}

/// Builds a block shown from 10:00:01:00 until 10:00:03:00.
pub fn simple_block(
    vertical_position: u8,
    justification_code: u8,
    text: &[u8],
) -> [u8; TTI_BLOCK_SIZE] {
    block_bytes([10, 0, 1, 0], [10, 0, 3, 0], vertical_position, justification_code, text)
}

/// Builds a GSI header that passes format detection.
pub fn header() -> Vec<u8> {

    let mut header = vec![0x20u8; HEADER_SIZE];

    header[0..3].copy_from_slice(b"850");
    header[3..11].copy_from_slice(b"STL25.01");

    header
}

/// Builds a complete STL file followed by `trailing` bytes of garbage.
pub fn stl_file(blocks: &[[u8; TTI_BLOCK_SIZE]], trailing: usize) -> Vec<u8> {

    let mut file = header();

    for block in blocks.iter() {
        file.extend_from_slice(block);
    }
    file.extend(std::iter::repeat(0x8F).take(trailing));

    file
}
