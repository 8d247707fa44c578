/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Derives screen alignment from a TTI block's justification code and vertical position.

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

impl Default for Horizontal {
    fn default() -> Self { Self::Center }
}

impl Horizontal {

    /// Maps a justification code. Unknown codes, including "unchanged presentation", center
    /// the text.
    pub fn from_justification_code(code: u8) -> Self {
        match code {
            0x01 => Self::Left,
            0x02 => Self::Center,
            0x03 => Self::Right,
            _ => Self::Center,
        }
    }

    /// Returns the 1-based column of this alignment.
    pub fn index(&self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Center => 2,
            Self::Right => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Default for Vertical {
    fn default() -> Self { Self::Middle }
}

impl Vertical {

    pub fn from_vertical_position(position: u8) -> Self {
        match position {
            0..=7 => Self::Bottom,
            8..=16 => Self::Middle,
            _ => Self::Top,
        }
    }

    /// Returns the 1-based row of this alignment.
    pub fn index(&self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Middle => 2,
            Self::Bottom => 3,
        }
    }
}

/// Where a cue sits on the screen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Alignment {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Alignment {

    pub fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self { horizontal, vertical }
    }

    /// Resolves the alignment of a block. This is total over both bytes.
    pub fn resolve(justification_code: u8, vertical_position: u8) -> Self {
        Self {
            horizontal: Horizontal::from_justification_code(justification_code),
            vertical: Vertical::from_vertical_position(vertical_position),
        }
    }

    /// Returns the cell of the 3x3 grid this alignment selects, in the range `1..=9`.
    ///
    /// Cells are numbered like a numeric keypad, so [Vertical::Top] occupies cells one
    /// through three.
    pub fn grid_position(&self) -> u8 {
        (self.vertical.index() - 1) * 3 + self.horizontal.index()
    }
}
