/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use rand::{thread_rng, Rng};

fn expected(h: u8, m: u8, s: u8, f: u8, frame_rate: u32) -> i64 {
    ((h as i64 - 10) * 3600 + m as i64 * 60 + s as i64) * 1000
        + f as i64 * (1000 / frame_rate as i64)
}

#[test]
fn test_programme_start_is_zero() {
    assert_eq!(Timecode::new(10, 0, 0, 0).to_millis(), 0);
}

#[test]
fn test_simple_conversion() {
    assert_eq!(Timecode::new(10, 1, 2, 3).to_millis(), 62_120);
}

#[test]
fn test_before_programme_start_is_negative() {
    assert_eq!(Timecode::new(0, 0, 0, 0).to_millis(), -36_000_000);
    assert_eq!(Timecode::new(9, 59, 59, 24).to_millis(), -40);
}

#[test]
fn test_frame_duration_is_truncated() {

    let frame_rate = NonZeroU32::new(30).unwrap();

    // 1000 / 30 truncates to 33 ms per frame.
    assert_eq!(Timecode::new(10, 0, 0, 29).to_millis_at(frame_rate), 29 * 33);
}

#[test]
fn test_extreme_values_are_total() {

    assert_eq!(
        Timecode::new(255, 255, 255, 255).to_millis(),
        expected(255, 255, 255, 255, 25),
    );
    assert_eq!(
        Timecode::new(255, 255, 255, 255).to_millis_at(NonZeroU32::new(u32::MAX).unwrap()),
        expected(255, 255, 255, 0, 25),
    );
}

#[test]
fn test_random_time_codes_match_formula() {

    let mut rng = thread_rng();

    for _ in 0..10_000 {

        let h = rng.gen();
        let m = rng.gen();
        let s = rng.gen();
        let f = rng.gen();
        let frame_rate = rng.gen_range(1..=120);

        assert_eq!(
            Timecode::new(h, m, s, f).to_millis_at(NonZeroU32::new(frame_rate).unwrap()),
            expected(h, m, s, f, frame_rate),
        );
    }
}

#[test]
fn test_valid_time_codes_match_formula() {
    for h in 0..24 {
        for m in 0..60 {
            for f in 0..25 {
                assert_eq!(Timecode::new(h, m, 30, f).to_millis(), expected(h, m, 30, f, 25));
            }
        }
    }
}

#[test]
fn test_from_bytes() {
    assert_eq!(
        Timecode::from_bytes(&[10, 0, 1, 5, 0xFF]),
        Some(Timecode::new(10, 0, 1, 5)),
    );
    assert_eq!(Timecode::from_bytes(&[10, 0, 1]), None);
}

#[test]
fn test_display() {
    assert_eq!(Timecode::new(10, 1, 2, 3).to_string(), "10:01:02:03");
}
