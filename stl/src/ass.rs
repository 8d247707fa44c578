/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

//! Produces Advanced SubStation Alpha (ASS) markup.


use super::text::Color;

/// The name of the only style the generated scripts define.
pub const DEFAULT_STYLE: &str = "Default";

/// Returns the primary color override tag for a color, such as `\c&H00FF00&`.
pub fn color_tag(color: Color) -> String {
    format!("\\c{}", bgr(color))
}

/// Returns the outline color override tag for a color, such as `\3c&H000000&`.
pub fn outline_color_tag(color: Color) -> String {
    format!("\\3c{}", bgr(color))
}

/// Formats a color as `&HBBGGRR&`.
fn bgr(color: Color) -> String {

    let (red, green, blue) = color.rgb();

    format!("&H{:02X}{:02X}{:02X}&", blue, green, red)
}

/// Formats a millisecond timestamp as `H:MM:SS.cc`.
///
/// Negative timestamps cannot be expressed and are clamped to zero.
pub fn format_timestamp(ms: i64) -> String {

    let cs = ms.max(0) / 10;

    format!(
        "{}:{:02}:{:02}.{:02}",
        cs / 360_000,
        cs / 6_000 % 60,
        cs / 100 % 60,
        cs % 100,
    )
}

/// Returns the script header, up to and including the format line of the events section.
pub fn script_header(width: u32, height: u32) -> String {
    format!(
        "[Script Info]\n\
        ; Script generated by stl\n\
        ScriptType: v4.00+\n\
        PlayResX: {}\n\
        PlayResY: {}\n\
        ScaledBorderAndShadow: yes\n\
        YCbCr Matrix: None\n\
        \n\
        [V4+ Styles]\n\
        Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, \
        BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, \
        BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
        Style: {},Arial,30,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,\
        1,1,1,2,10,10,10,1\n\
        \n\
        [Events]\n\
        Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        width,
        height,
        DEFAULT_STYLE,
    )
}

/// Returns a complete dialogue event line, without a trailing newline.
pub fn dialogue(start: i64, end: i64, text: &str) -> String {
    format!(
        "Dialogue: 0,{},{},{},,0,0,0,,{}",
        format_timestamp(start),
        format_timestamp(end),
        DEFAULT_STYLE,
        text,
    )
}
