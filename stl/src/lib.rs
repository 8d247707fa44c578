/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Decodes EBU Tech 3264 (STL) subtitle files.
//!
//! # Overview
//!
//! An STL file consists of a 1024-byte General Subject Information (GSI) block followed by
//! any number of 128-byte Text and Timing Information (TTI) blocks. Each TTI block carries
//! one timed subtitle: time codes for when it appears and disappears, a vertical position, a
//! justification code, and a 112-byte text field in a legacy 8-bit character set with inline
//! control codes for line breaks and colors.
//!
//! Processing happens in two stages:
//!
//! 1. The [demux] stage reads raw TTI blocks from a seekable stream and tags each one with
//!    its presentation timestamp and duration in milliseconds.
//! 2. The [decoder] stage turns each block into a styled [cue::Cue] and renders it as ASS
//!    markup.
//!
//! Both stages are pull-based. Nothing happens until the caller asks for the next packet.

#[cfg(test)]
mod fixture;
#[cfg(test)]
mod tests;

pub mod alignment;
pub mod ass;
pub mod block;
pub mod charset;
pub mod cue;
pub mod decoder;
pub mod demux;
pub mod text;
pub mod timecode;

use std::fmt::Write;

/// The size of every TTI block in bytes.
pub const TTI_BLOCK_SIZE: usize = 128;

/// Formats a millisecond timestamp as `HH:MM:SS.mmm`, with a leading sign when negative.
pub fn ms_to_timestamp(ms: i64) -> String {

    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();

    format!(
        "{}{:02}:{:02}:{:02}.{:03}",
        sign,
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000,
    )
}

/// Renders bytes as space-separated uppercase hex pairs.
pub fn hex_dump(bytes: &[u8]) -> String {

    let mut output = String::with_capacity(bytes.len() * 3);

    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            output.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(output, "{:02X}", byte);
    }

    output
}
