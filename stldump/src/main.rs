/*
 * This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a
 * copy of the MPL was not distributed with this file, You can obtain one at
 * https://mozilla.org/MPL/2.0/.
 *
 * Copyright 2022 William Swartzendruber
 *
 * SPDX-License-Identifier: MPL-2.0
 */

use stl::{
    alignment::Alignment,
    block::TtiBlock,
    demux::{probe, ReadError, ReaderConfig, StlReader},
    hex_dump,
    ms_to_timestamp,
    text::parse_lines,
};
use std::{
    fs::File,
    io::{stdin, BufReader, Cursor, Read, Seek},
    num::NonZeroU32,
    process::exit,
};
use clap::{app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg};
use log::info;

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("frame-rate")
            .long("frame-rate")
            .short("f")
            .value_name("FPS")
            .help("Frame rate that time code frame counts refer to")
            .takes_value(true)
            .required(false)
            .default_value("25")
            .validator(|value| {
                match value.parse::<u32>() {
                    Ok(fps) if fps > 0 => Ok(()),
                    _ => Err("must be a positive integer".to_string()),
                }
            })
        )
        .arg(Arg::with_name("hex")
            .long("hex")
            .short("x")
            .help("Also prints each block as hexadecimal")
        )
        .arg(Arg::with_name("log")
            .long("log")
            .value_name("FILTER")
            .help("Log filter, as in RUST_LOG")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input STL file; use - for STDIN")
            .required(true)
        )
        .after_help(format!("This utility will dump EBU STL subtitle blocks.\n\n\
            Copyright © 2022 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0\n\
            <{}>", env!("CARGO_PKG_REPOSITORY")).as_str())
        .get_matches();

    init_logger(matches.value_of("log"));

    let input_value = matches.value_of("input").unwrap();
    let frame_rate = matches.value_of("frame-rate").unwrap().parse::<NonZeroU32>().unwrap();
    let config = ReaderConfig { frame_rate };
    let hex = matches.is_present("hex");

    if input_value == "-" {
        let mut data = Vec::new();
        stdin().read_to_end(&mut data).expect("Could not read from STDIN.");
        dump(Cursor::new(data), config, hex);
    } else {
        let file = File::open(input_value).expect("Could not open input file for reading.");
        dump(BufReader::new(file), config, hex);
    }
}

fn init_logger(filter: Option<&str>) {

    let mut builder = env_logger::Builder::new();

    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.parse_filters("warn");
    }
    builder.init();
}

fn dump<R: Read + Seek>(mut input: R, config: ReaderConfig, hex: bool) {

    let mut signature = [0u8; 8];
    let signature_len = input.read(&mut signature).unwrap_or(0);

    if !probe(&signature[..signature_len]) {
        eprintln!("Input does not carry an STL signature; decoding anyway.");
    }

    let mut reader = match StlReader::with_config(input, config) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Could not skip GSI header: {}", err);
            exit(1)
        }
    };

    let mut count = 0;

    eprintln!("Iterating through TTI blocks...");

    //
    // READ
    //

    loop {

        match reader.read_packet() {
            Ok(Some(packet)) => {

                count += 1;

                let block = TtiBlock::from_bytes(&packet.data)
                    .expect("A complete packet always forms a block.");
                let alignment = Alignment::resolve(
                    block.justification_code,
                    block.vertical_position,
                );

                println!("tti_block({})", ms_to_timestamp(packet.pts));
                println!("  subtitle_group_number = {}", block.subtitle_group_number);
                println!("  subtitle_number = {}", block.subtitle_number);
                println!("  extension_block_number = {}", block.extension_block_number);
                println!("  cumulative_status = {}", block.cumulative_status);
                println!("  time_code_in = {}", block.time_code_in);
                println!("  time_code_out = {}", block.time_code_out);
                println!("  duration = {}", ms_to_timestamp(packet.duration));
                println!("  vertical_position = {}", block.vertical_position);
                println!("  justification_code = {}", block.justification_code);
                println!("  comment_flag = {}", block.comment_flag);
                println!(
                    "  alignment = {:?} {:?} ({})",
                    alignment.vertical,
                    alignment.horizontal,
                    alignment.grid_position(),
                );
                for (index, line) in parse_lines(&block.text_field).iter().enumerate() {
                    println!(
                        "  line[{}] = {:?} ({} on {})",
                        index,
                        line.text,
                        line.foreground.name(),
                        line.background.name(),
                    );
                }
                if hex {
                    println!("  hex = {}", hex_dump(&packet.data));
                }
                println!();
            }
            Ok(None) => {
                info!("Dumped {} blocks", count);
                break
            }
            Err(ReadError::IoError { source }) => {
                panic!("Could not read block due to IO error: {}", source)
            }
        }
    }
}
