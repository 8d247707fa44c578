/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Maps the accented Latin subset of the STL character set to Unicode.
//!
//! The STL character set encodes an accented letter as two bytes: a non-spacing diacritic
//! marker in the range `0xC1..=0xCF` followed by the base letter. Only the grave, acute,
//! circumflex and diaeresis markers over the vowels are understood here. Any other byte is
//! taken at face value as a Latin-1 code point.

#[cfg(test)]
mod tests;

/// The range in which diacritic markers live.
pub const DIACRITIC_MARKERS: std::ops::RangeInclusive<u8> = 0xC1..=0xCF;

pub const GRAVE: u8 = 0xC1;
pub const ACUTE: u8 = 0xC2;
pub const CIRCUMFLEX: u8 = 0xC3;
pub const DIAERESIS: u8 = 0xC8;

const BASES: &[u8; 10] = b"AEIOUaeiou";
const GRAVE_FORMS: [char; 10] = ['À', 'È', 'Ì', 'Ò', 'Ù', 'à', 'è', 'ì', 'ò', 'ù'];
const ACUTE_FORMS: [char; 10] = ['Á', 'É', 'Í', 'Ó', 'Ú', 'á', 'é', 'í', 'ó', 'ú'];
const CIRCUMFLEX_FORMS: [char; 10] = ['Â', 'Ê', 'Î', 'Ô', 'Û', 'â', 'ê', 'î', 'ô', 'û'];
const DIAERESIS_FORMS: [char; 10] = ['Ä', 'Ë', 'Ï', 'Ö', 'Ü', 'ä', 'ë', 'ï', 'ö', 'ü'];

/// Returns whether `byte` may introduce a two-byte accented character.
pub fn is_diacritic_marker(byte: u8) -> bool {
    DIACRITIC_MARKERS.contains(&byte)
}

/// Looks up the precomposed character for a diacritic marker and a base letter.
///
/// Returns `None` when the pair is not part of the supported table.
pub fn map_diacritic(marker: u8, base: u8) -> Option<char> {

    let forms = match marker {
        GRAVE => &GRAVE_FORMS,
        ACUTE => &ACUTE_FORMS,
        CIRCUMFLEX => &CIRCUMFLEX_FORMS,
        DIAERESIS => &DIAERESIS_FORMS,
        _ => return None,
    };

    BASES.iter().position(|&b| b == base).map(|index| forms[index])
}

/// Decodes the printable bytes of a single line into a string.
///
/// A diacritic marker is combined with the byte that follows it when the pair maps to a
/// precomposed character. Otherwise the marker is emitted on its own and the following byte
/// is decoded independently, so a failed lookup never swallows a character.
pub fn decode_line(bytes: &[u8]) -> String {

    let mut output = String::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {

        let byte = bytes[index];

        if is_diacritic_marker(byte) {
            if let Some(c) = bytes.get(index + 1).and_then(|&base| map_diacritic(byte, base)) {
                output.push(c);
                index += 2;
                continue
            }
        }

        output.push(char::from(byte));
        index += 1;
    }

    output
}
