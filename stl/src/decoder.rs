/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Turns packets into styled subtitles.
//!
//! A [Decoder] is a session. Other than the read order tag it hands out, it keeps no state
//! between calls; every block is parsed from scratch.


use super::{
    ass::script_header,
    block::{BlockReadResult, TtiBlock},
    cue::Cue,
    demux::{Packet, TimeBase},
    hex_dump,
    TTI_BLOCK_SIZE,
};
use log::{debug, trace, warn};

/// The width assumed when none is configured.
pub const DEFAULT_WIDTH: u32 = 720;

/// The height assumed when none is configured.
pub const DEFAULT_HEIGHT: u32 = 576;

/// Configures a [Decoder]. Anything left unset falls back to a default.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DecoderConfig {
    /// Defaults to milliseconds. A time base with a zero component counts as unset.
    pub time_base: Option<TimeBase>,
    /// Defaults to [DEFAULT_WIDTH]. Zero counts as unset.
    pub width: Option<u32>,
    /// Defaults to [DEFAULT_HEIGHT]. Zero counts as unset.
    pub height: Option<u32>,
}

/// One decoded cue, ready to be handed to a renderer.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SubtitleRect {
    /// The cue as ASS-marked-up text.
    pub text: String,
    /// Increases by one for every rectangle a session produces.
    pub read_order: u64,
    pub cue: Cue,
}

/// Everything decoded from one packet.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Subtitle {
    /// How long the subtitle stays on screen, in ticks of the session's time base.
    pub end_display_time: i64,
    pub rects: Vec<SubtitleRect>,
}

/// A decoding session.
#[derive(Debug)]
pub struct Decoder {
    time_base: TimeBase,
    width: u32,
    height: u32,
    read_order: u64,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl Decoder {

    pub fn new(config: DecoderConfig) -> Self {

        debug!("Initializing EBU STL decoder");

        let time_base = match config.time_base {
            Some(time_base) if time_base.is_valid() => time_base,
            _ => TimeBase::MILLISECONDS,
        };
        let (width, height) = match (config.width, config.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
            _ => {
                warn!(
                    "Video dimensions not set, defaulting to {}x{}",
                    DEFAULT_WIDTH,
                    DEFAULT_HEIGHT,
                );
                (DEFAULT_WIDTH, DEFAULT_HEIGHT)
            }
        };

        Self {
            time_base,
            width,
            height,
            read_order: 0,
        }
    }

    pub fn time_base(&self) -> TimeBase {
        self.time_base
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the ASS script header that decoded rectangles belong under.
    pub fn subtitle_header(&self) -> String {
        script_header(self.width, self.height)
    }

    /// Decodes a packet produced by the demuxer.
    ///
    /// Returns `None` if the block carries no visible text.
    pub fn decode_packet(&mut self, packet: &Packet) -> Option<Subtitle> {
        self.decode(&packet.data, packet.pts, packet.duration)
    }

    /// Decodes every complete 128-byte block in `data`.
    ///
    /// All blocks share the given timing. Blocks without visible text are skipped, as is a
    /// trailing partial block. Returns `None` if nothing visible was decoded.
    pub fn decode(&mut self, data: &[u8], pts: i64, duration: i64) -> Option<Subtitle> {

        let blocks = data.chunks_exact(TTI_BLOCK_SIZE);
        let remainder = blocks.remainder().len();
        let mut rects = Vec::new();

        for bytes in blocks {
            match self.decode_block(bytes, pts, duration) {
                Ok(Some(rect)) => rects.push(rect),
                Ok(None) => trace!("Skipping block without visible text"),
                Err(err) => warn!("Skipping unreadable block: {}", err),
            }
        }

        if remainder > 0 {
            warn!("Ignoring {} trailing bytes of a partial block", remainder);
        }

        if rects.is_empty() {
            return None
        }

        Some(
            Subtitle {
                end_display_time: TimeBase::MILLISECONDS.rescale(duration, self.time_base),
                rects,
            }
        )
    }

    fn decode_block(
        &mut self,
        bytes: &[u8],
        pts: i64,
        duration: i64,
    ) -> BlockReadResult<Option<SubtitleRect>> {

        trace!("TTI block (hex): {}", hex_dump(bytes));

        let block = TtiBlock::from_bytes(bytes)?;
        let cue = match Cue::from_block(&block, pts, pts + duration) {
            Some(cue) => cue,
            None => return Ok(None),
        };
        let text = cue.to_ass();
        let read_order = self.read_order;

        debug!("Decoded cue #{}: {}", read_order, text);

        self.read_order += 1;

        Ok(Some(SubtitleRect { text, read_order, cue }))
    }
}
