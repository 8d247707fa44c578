/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;

#[test]
fn test_known_justification_codes() {
    assert_eq!(Horizontal::from_justification_code(0x01), Horizontal::Left);
    assert_eq!(Horizontal::from_justification_code(0x02), Horizontal::Center);
    assert_eq!(Horizontal::from_justification_code(0x03), Horizontal::Right);
}

#[test]
fn test_unknown_justification_codes_center() {
    for code in (0..=255u8).filter(|code| !(0x01..=0x03).contains(code)) {
        assert_eq!(Horizontal::from_justification_code(code), Horizontal::Center);
    }
}

#[test]
fn test_vertical_boundaries() {
    assert_eq!(Vertical::from_vertical_position(0), Vertical::Bottom);
    assert_eq!(Vertical::from_vertical_position(7), Vertical::Bottom);
    assert_eq!(Vertical::from_vertical_position(8), Vertical::Middle);
    assert_eq!(Vertical::from_vertical_position(16), Vertical::Middle);
    assert_eq!(Vertical::from_vertical_position(17), Vertical::Top);
    assert_eq!(Vertical::from_vertical_position(255), Vertical::Top);
}

#[test]
fn test_vertical_is_total() {
    for position in 0..=255u8 {
        let expected = if position < 8 {
            Vertical::Bottom
        } else if position <= 16 {
            Vertical::Middle
        } else {
            Vertical::Top
        };
        assert_eq!(Vertical::from_vertical_position(position), expected);
    }
}

#[test]
fn test_grid_positions() {

    let horizontals = [Horizontal::Left, Horizontal::Center, Horizontal::Right];
    let verticals = [Vertical::Top, Vertical::Middle, Vertical::Bottom];
    let mut expected = 1;

    for vertical in verticals.iter() {
        for horizontal in horizontals.iter() {
            assert_eq!(Alignment::new(*horizontal, *vertical).grid_position(), expected);
            expected += 1;
        }
    }
}

#[test]
fn test_resolve() {
    assert_eq!(
        Alignment::resolve(0x02, 20),
        Alignment::new(Horizontal::Center, Vertical::Top),
    );
    assert_eq!(Alignment::resolve(0x02, 20).grid_position(), 2);
    assert_eq!(Alignment::resolve(0x01, 0).grid_position(), 7);
    assert_eq!(Alignment::resolve(0x00, 12).grid_position(), 5);
}
