/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_acute_e() {
    assert_eq!(map_diacritic(ACUTE, b'e'), Some('é'));
    assert_eq!(decode_line(&[0xC2, b'e']), "é");
}

#[test]
fn test_every_supported_pair() {

    let table = [
        (GRAVE, "ÀÈÌÒÙàèìòù"),
        (ACUTE, "ÁÉÍÓÚáéíóú"),
        (CIRCUMFLEX, "ÂÊÎÔÛâêîôû"),
        (DIAERESIS, "ÄËÏÖÜäëïöü"),
    ];

    for (marker, forms) in table.iter() {
        for (base, form) in b"AEIOUaeiou".iter().zip(forms.chars()) {
            assert_eq!(map_diacritic(*marker, *base), Some(form));
        }
    }
}

#[test]
fn test_unsupported_marker() {
    assert_eq!(map_diacritic(0xC4, b'a'), None);
    assert_eq!(map_diacritic(0xCF, b'e'), None);
}

#[test]
fn test_unsupported_base() {
    assert_eq!(map_diacritic(ACUTE, b'y'), None);
    assert_eq!(map_diacritic(CIRCUMFLEX, b'c'), None);
}

#[test]
fn test_failed_lookup_keeps_marker_and_base() {
    assert_eq!(decode_line(&[0xC2, b'x', b'y']), "\u{C2}xy");
}

#[test]
fn test_failed_lookup_rescans_base() {
    // The first marker fails against the second, which then pairs with the letter.
    assert_eq!(decode_line(&[0xC4, 0xC1, b'a']), "\u{C4}à");
}

#[test]
fn test_marker_at_end_of_line() {
    assert_eq!(decode_line(b"caf\xC2"), "caf\u{C2}");
}

#[test]
fn test_plain_ascii() {
    assert_eq!(decode_line(b"Hello, world!"), "Hello, world!");
}

#[test]
fn test_mixed_text() {
    assert_eq!(decode_line(b"Ca va tr\xC8es bien, \xC1a bient\xC3ot"), "Ca va trës bien, à bientôt");
}
