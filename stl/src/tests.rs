/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_ms_to_timestamp_zero() {
    assert_eq!(ms_to_timestamp(0), "00:00:00.000");
}

#[test]
fn test_ms_to_timestamp_positive() {
    assert_eq!(ms_to_timestamp(3_723_040), "01:02:03.040");
}

#[test]
fn test_ms_to_timestamp_negative() {
    assert_eq!(ms_to_timestamp(-36_000_000), "-10:00:00.000");
}

#[test]
fn test_hex_dump() {
    assert_eq!(hex_dump(&[]), "");
    assert_eq!(hex_dump(&[0x00, 0x8A, 0xFF]), "00 8A FF");
}
