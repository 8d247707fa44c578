/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Converts TTI time codes into millisecond timestamps.
//!
//! A time code is stored as four consecutive bytes: hours, minutes, seconds and frames. The
//! frame count is relative to a fixed frame rate, which the TTI block itself does not carry.
//! Files in the wild start their programme at `10:00:00:00`, so ten hours are subtracted
//! during conversion.

#[cfg(test)]
mod tests;

use std::{
    fmt,
    num::NonZeroU32,
};

/// The frame rate assumed when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 25;

/// The hour at which programme time begins.
pub const PROGRAMME_START_HOURS: i64 = 10;

/// Returns [DEFAULT_FRAME_RATE] as a [NonZeroU32].
pub fn default_frame_rate() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_FRAME_RATE).unwrap_or(NonZeroU32::MIN)
}

/// A point in playback time, exactly as stored in a TTI block.
///
/// No field is validated. Out-of-range values simply produce out-of-range timestamps.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Timecode {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl Timecode {

    pub fn new(hours: u8, minutes: u8, seconds: u8, frames: u8) -> Self {
        Self { hours, minutes, seconds, frames }
    }

    /// Reads a time code from the first four bytes of `bytes`.
    ///
    /// Returns `None` if fewer than four bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [hours, minutes, seconds, frames, ..] => {
                Some(Self::new(*hours, *minutes, *seconds, *frames))
            }
            _ => None,
        }
    }

    /// Converts this time code to milliseconds at [DEFAULT_FRAME_RATE].
    pub fn to_millis(&self) -> i64 {
        self.to_millis_at(default_frame_rate())
    }

    /// Converts this time code to milliseconds at the given frame rate.
    ///
    /// The duration of a single frame is truncated to whole milliseconds before it is
    /// multiplied by the frame count.
    pub fn to_millis_at(&self, frame_rate: NonZeroU32) -> i64 {

        let seconds = (self.hours as i64 - PROGRAMME_START_HOURS) * 3_600
            + self.minutes as i64 * 60
            + self.seconds as i64;
        let frame_duration = 1_000 / frame_rate.get() as i64;

        seconds * 1_000 + self.frames as i64 * frame_duration
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds, self.frames)
    }
}
