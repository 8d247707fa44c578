/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Splits an STL file into timed packets.
//!
//! # Overview
//!
//! The 1024-byte GSI header is skipped without validation. After that, every packet is one
//! raw TTI block tagged with the presentation timestamp taken from its Time Code In field
//! and the duration up to its Time Code Out field.
//!
//! The reader has two states. It starts out positioned at the first block and becomes
//! exhausted the first time fewer than 128 bytes remain. Exhaustion is not an error; the
//! reader simply returns `None` from then on.


use super::{
    block::{TIME_CODE_IN_OFFSET, TIME_CODE_OUT_OFFSET},
    hex_dump,
    timecode::{default_frame_rate, Timecode},
    TTI_BLOCK_SIZE,
};
use std::{
    io::{Error as IoError, ErrorKind, Read, Seek, SeekFrom},
    iter::FusedIterator,
    num::NonZeroU32,
};
use log::{debug, trace};
use thiserror::Error as ThisError;

/// The size of the GSI header in bytes.
pub const HEADER_SIZE: usize = 1024;

/// The offset of the `STL` signature within the header.
pub const SIGNATURE_OFFSET: usize = 3;

/// The signature that identifies an STL file.
pub const SIGNATURE: &[u8; 3] = b"STL";

/// A specialized [`Result`](std::result::Result) type for packet-reading operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// The error type for [StlReader].
#[derive(ThisError, Debug)]
pub enum ReadError {
    /// The stream could not be read or positioned because of an underlying I/O error.
    #[error("stream IO error")]
    IoError {
        /// The underlying I/O error.
        #[from]
        source: IoError,
    },
}

/// Returns whether the start of a file looks like STL.
pub fn probe(data: &[u8]) -> bool {
    data.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE.len()) == Some(&SIGNATURE[..])
}

/// A rational number of seconds per tick.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeBase {
    pub num: i64,
    pub den: i64,
}

impl TimeBase {

    /// One tick per millisecond.
    pub const MILLISECONDS: Self = Self { num: 1, den: 1_000 };

    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Returns whether this time base can be used for arithmetic.
    pub fn is_valid(&self) -> bool {
        self.num != 0 && self.den != 0
    }

    /// Converts `value` from ticks of `self` into ticks of `target`, rounding half away
    /// from zero.
    ///
    /// Returns zero if either time base is invalid. Results outside the range of `i64`
    /// saturate.
    pub fn rescale(&self, value: i64, target: TimeBase) -> i64 {

        if !self.is_valid() || !target.is_valid() {
            return 0
        }

        let denominator = self.den as i128 * target.num as i128;
        let numerator = match (value as i128 * self.num as i128).checked_mul(target.den as i128) {
            Some(numerator) => numerator,
            None => {
                let negative = (value < 0) ^ (self.num < 0) ^ (target.den < 0)
                    ^ (denominator < 0);
                return if negative { i64::MIN } else { i64::MAX }
            }
        };
        let (numerator, denominator) = if denominator < 0 {
            match numerator.checked_neg() {
                Some(numerator) => (numerator, -denominator),
                None => return i64::MAX,
            }
        } else {
            (numerator, denominator)
        };
        let half = denominator / 2;
        let rounded = if numerator >= 0 {
            numerator / denominator + (numerator % denominator >= denominator - half) as i128
        } else {
            numerator / denominator - (-(numerator % denominator) >= denominator - half) as i128
        };

        rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MediaType {
    Subtitle,
}

/// Describes the single stream an STL file contains.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StreamInfo {
    pub index: usize,
    pub media_type: MediaType,
    pub width: u32,
    pub height: u32,
    pub time_base: TimeBase,
}

impl Default for StreamInfo {
    fn default() -> Self {
        Self {
            index: 0,
            media_type: MediaType::Subtitle,
            width: 720,
            height: 576,
            time_base: TimeBase::MILLISECONDS,
        }
    }
}

/// One raw TTI block along with its timing in milliseconds.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Packet {
    pub data: [u8; TTI_BLOCK_SIZE],
    pub pts: i64,
    pub duration: i64,
    pub stream_index: usize,
}

impl Packet {

    /// Creates a packet from a raw block, deriving its timing at the given frame rate.
    pub fn from_block(data: [u8; TTI_BLOCK_SIZE], frame_rate: NonZeroU32) -> Self {

        let pts = timestamp_at(&data, TIME_CODE_IN_OFFSET, frame_rate);
        let end = timestamp_at(&data, TIME_CODE_OUT_OFFSET, frame_rate);

        Self {
            data,
            pts,
            duration: end - pts,
            stream_index: 0,
        }
    }

    pub fn end_pts(&self) -> i64 {
        self.pts + self.duration
    }
}

fn timestamp_at(data: &[u8; TTI_BLOCK_SIZE], offset: usize, frame_rate: NonZeroU32) -> i64 {
    Timecode::from_bytes(&data[offset..])
        .map(|timecode| timecode.to_millis_at(frame_rate))
        .unwrap_or_default()
}

/// Configures an [StlReader].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    /// The frame rate that time code frame counts refer to.
    pub frame_rate: NonZeroU32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { frame_rate: default_frame_rate() }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ReaderState {
    Positioned,
    Exhausted,
}

/// Reads timed TTI blocks from a seekable stream.
pub struct StlReader<R> {
    input: R,
    config: ReaderConfig,
    state: ReaderState,
    stream: StreamInfo,
}

impl<R: Read + Seek> StlReader<R> {

    /// Positions `input` just past the GSI header.
    pub fn new(input: R) -> ReadResult<Self> {
        Self::with_config(input, ReaderConfig::default())
    }

    pub fn with_config(mut input: R, config: ReaderConfig) -> ReadResult<Self> {

        input.seek(SeekFrom::Start(HEADER_SIZE as u64))?;

        debug!("Positioned past {}-byte GSI header at {} fps", HEADER_SIZE, config.frame_rate);

        Ok(
            Self {
                input,
                config,
                state: ReaderState::Positioned,
                stream: StreamInfo::default(),
            }
        )
    }
}

impl<R: Read> StlReader<R> {

    /// Describes the stream this reader produces packets for.
    pub fn stream_info(&self) -> StreamInfo {
        self.stream
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == ReaderState::Exhausted
    }

    /// Reads the next packet, returning `None` once fewer than 128 bytes remain.
    ///
    /// An I/O error also exhausts the reader, so it is reported only once.
    pub fn read_packet(&mut self) -> ReadResult<Option<Packet>> {

        if self.state == ReaderState::Exhausted {
            return Ok(None)
        }

        let mut data = [0u8; TTI_BLOCK_SIZE];
        let count = match read_full(&mut self.input, &mut data) {
            Ok(count) => count,
            Err(err) => {
                debug!("Stream exhausted after an IO error");
                self.state = ReaderState::Exhausted;
                return Err(err)
            }
        };

        if count < TTI_BLOCK_SIZE {
            debug!("Stream exhausted after a {}-byte read", count);
            self.state = ReaderState::Exhausted;
            return Ok(None)
        }

        trace!("TTI block (hex): {}", hex_dump(&data));

        let packet = Packet::from_block(data, self.config.frame_rate);

        debug!("Read packet at {} ms lasting {} ms", packet.pts, packet.duration);

        Ok(Some(packet))
    }

    pub fn into_inner(self) -> R {
        self.input
    }
}

impl<R: Read> Iterator for StlReader<R> {

    type Item = ReadResult<Packet>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_packet().transpose()
    }
}

impl<R: Read> FusedIterator for StlReader<R> {}

/// Fills as much of `buffer` as the source allows, returning the number of bytes read.
fn read_full<R: Read>(input: &mut R, buffer: &mut [u8]) -> ReadResult<usize> {

    let mut count = 0;

    while count < buffer.len() {
        match input.read(&mut buffer[count..]) {
            Ok(0) => break,
            Ok(read) => count += read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(count)
}
