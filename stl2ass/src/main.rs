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
    ass::dialogue,
    decoder::{Decoder, DecoderConfig},
    demux::{probe, ReadError, ReaderConfig, StlReader},
};
use std::{
    fs::File,
    io::{stdin, stdout, BufReader, BufWriter, Cursor, Read, Seek, Write},
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
        .arg(Arg::with_name("width")
            .long("width")
            .value_name("PIXELS")
            .help("Horizontal script resolution")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                if value.parse::<u32>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
        )
        .arg(Arg::with_name("height")
            .long("height")
            .value_name("PIXELS")
            .help("Vertical script resolution")
            .takes_value(true)
            .required(false)
            .validator(|value| {
                if value.parse::<u32>().is_ok() {
                    Ok(())
                } else {
                    Err("must be an unsigned integer".to_string())
                }
            })
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
        .arg(Arg::with_name("output")
            .index(2)
            .value_name("OUTPUT-FILE")
            .help("Output ASS file; use - for STDOUT")
            .required(true)
        )
        .after_help(format!("This utility will convert EBU STL subtitles to ASS.\n\n\
            Copyright © 2022 William Swartzendruber\n\
            Licensed under the Mozilla Public License 2.0\n\
            <{}>", env!("CARGO_PKG_REPOSITORY")).as_str())
        .get_matches();

    init_logger(matches.value_of("log"));

    let input_value = matches.value_of("input").unwrap();
    let output_value = matches.value_of("output").unwrap();
    let frame_rate = matches.value_of("frame-rate").unwrap().parse::<NonZeroU32>().unwrap();
    let reader_config = ReaderConfig { frame_rate };
    let decoder_config = DecoderConfig {
        time_base: None,
        width: matches.value_of("width").map(|value| value.parse::<u32>().unwrap()),
        height: matches.value_of("height").map(|value| value.parse::<u32>().unwrap()),
    };
    let (mut stdout_write, mut file_write);
    let mut output = BufWriter::<&mut dyn Write>::new(
        if output_value == "-" {
            stdout_write = stdout();
            &mut stdout_write
        } else {
            file_write = File::create(output_value)
                .expect("Could not open output file for writing.");
            &mut file_write
        }
    );

    let count = if input_value == "-" {
        let mut data = Vec::new();
        stdin().read_to_end(&mut data).expect("Could not read from STDIN.");
        convert(Cursor::new(data), &mut output, reader_config, decoder_config)
    } else {
        let file = File::open(input_value).expect("Could not open input file for reading.");
        convert(BufReader::new(file), &mut output, reader_config, decoder_config)
    };

    output.flush().expect("Could not flush output.");

    eprintln!("Wrote {} subtitles.", count);
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

fn convert<R: Read + Seek, W: Write>(
    mut input: R,
    output: &mut W,
    reader_config: ReaderConfig,
    decoder_config: DecoderConfig,
) -> usize {

    let mut signature = [0u8; 8];
    let signature_len = input.read(&mut signature).unwrap_or(0);

    if !probe(&signature[..signature_len]) {
        eprintln!("Input does not carry an STL signature; decoding anyway.");
    }

    let mut reader = match StlReader::with_config(input, reader_config) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Could not skip GSI header: {}", err);
            exit(1)
        }
    };
    let mut decoder = Decoder::new(decoder_config);
    let mut count = 0;

    output.write_all(decoder.subtitle_header().as_bytes())
        .expect("Could not write script header.");

    //
    // READ, DECODE, WRITE
    //

    loop {

        let packet = match reader.read_packet() {
            Ok(Some(packet)) => packet,
            Ok(None) => break,
            Err(ReadError::IoError { source }) => {
                panic!("Could not read block due to IO error: {}", source)
            }
        };

        if let Some(subtitle) = decoder.decode_packet(&packet) {
            for rect in subtitle.rects.iter() {
                writeln!(output, "{}", dialogue(rect.cue.start_pts, rect.cue.end_pts, &rect.text))
                    .expect("Could not write dialogue.");
                count += 1;
            }
        }
    }

    info!("Converted {} subtitles", count);

    count
}
