/*
 * Copyright 2022 William Swartzendruber
 *
 * Any copyright is dedicated to the Public Domain.
 *
 * SPDX-License-Identifier: CC0-1.0
 */

use super::*;
use super::super::fixture::block_bytes;
use std::io::{Cursor, ErrorKind};
use rand::{thread_rng, Rng};

#[test]
fn test_read_fields() {

    let mut bytes = block_bytes([10, 0, 1, 12], [10, 0, 4, 0], 20, 0x02, b"HELLO");

    bytes[0] = 0x03;
    bytes[1] = 0x34;
    bytes[2] = 0x12;
    bytes[3] = 0xFE;
    bytes[4] = 0x01;
    bytes[15] = 0x01;

    let block = TtiBlock::from_bytes(&bytes).unwrap();

    assert_eq!(block.subtitle_group_number, 0x03);
    assert_eq!(block.subtitle_number, 0x1234);
    assert_eq!(block.extension_block_number, 0xFE);
    assert_eq!(block.cumulative_status, 0x01);
    assert_eq!(block.time_code_in, Timecode::new(10, 0, 1, 12));
    assert_eq!(block.time_code_out, Timecode::new(10, 0, 4, 0));
    assert_eq!(block.vertical_position, 20);
    assert_eq!(block.justification_code, 0x02);
    assert_eq!(block.comment_flag, 0x01);
    assert_eq!(&block.text_field[..5], b"HELLO");
    assert!(block.text_field[5..].iter().all(|&byte| byte == 0x8F));
}

#[test]
fn test_text_field_is_exactly_the_tail() {

    let mut rng = thread_rng();
    let mut bytes = [0u8; 128];

    rng.fill(&mut bytes[..]);

    let block = TtiBlock::from_bytes(&bytes).unwrap();

    assert_eq!(block.text_field[..], bytes[TEXT_FIELD_OFFSET..]);
    assert_eq!(block.vertical_position, bytes[VERTICAL_POSITION_OFFSET]);
    assert_eq!(block.justification_code, bytes[JUSTIFICATION_CODE_OFFSET]);
    assert_eq!(
        Some(block.time_code_in),
        Timecode::from_bytes(&bytes[TIME_CODE_IN_OFFSET..]),
    );
    assert_eq!(
        Some(block.time_code_out),
        Timecode::from_bytes(&bytes[TIME_CODE_OUT_OFFSET..]),
    );
}

#[test]
fn test_consecutive_blocks() {

    let mut data = Vec::new();

    data.extend_from_slice(&block_bytes([10, 0, 0, 0], [10, 0, 1, 0], 1, 1, b"ONE"));
    data.extend_from_slice(&block_bytes([10, 0, 2, 0], [10, 0, 3, 0], 2, 3, b"TWO"));

    let mut cursor = Cursor::new(data);
    let first = cursor.read_block().unwrap();
    let second = cursor.read_block().unwrap();

    assert_eq!(&first.text_field[..3], b"ONE");
    assert_eq!(&second.text_field[..3], b"TWO");
    assert_eq!(second.justification_code, 3);
}

#[test]
fn test_short_block() {
    match TtiBlock::from_bytes(&[0u8; 127]) {
        Err(BlockReadError::IoError { source }) => {
            assert_eq!(source.kind(), ErrorKind::UnexpectedEof)
        }
        Ok(_) => panic!("short block was accepted"),
    }
}

#[test]
fn test_default_block_is_blank() {

    let block = TtiBlock::default();

    assert_eq!(block.extension_block_number, 0xFF);
    assert!(block.text_field.iter().all(|&byte| byte == 0x8F));
}
