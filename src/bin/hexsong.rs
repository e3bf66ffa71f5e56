// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `hexsong` - listen to the middle of a binary file.

use std::error::Error;
use std::path::PathBuf;

use log::error;
use structopt::StructOpt;

use syn_hex::render::Strategy;
use syn_hex::Options;

#[derive(Debug, StructOpt)]
#[structopt(name = "hexsong", about = "Turning binary files into music")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The binary file to listen to.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Output WAV file.
    #[structopt(short, long, parse(from_os_str), default_value = "output_music.wav")]
    output: PathBuf,

    /// Length of a single tone in seconds.
    #[structopt(long, default_value = "0.1")]
    tone_duration: f64,

    /// Target length of the whole song in seconds.
    #[structopt(long, default_value = "60")]
    song_duration: f64,

    /// Fraction of every tone spent fading in and out.
    #[structopt(long, default_value = "0.05")]
    fade_fraction: f64,

    /// Seconds of silence between tones.
    #[structopt(long, default_value = "0")]
    gap: f64,

    /// Samples per second of the output.
    #[structopt(long, default_value = "44100")]
    sample_rate: u32,

    /// How bytes are turned into tones.
    #[structopt(long, default_value = "nibble", possible_values = &["nibble", "bit"])]
    strategy: Strategy,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let options = Options {
        tone_duration: opt.tone_duration,
        song_duration: opt.song_duration,
        fade_fraction: opt.fade_fraction,
        gap: opt.gap,
        sample_rate: opt.sample_rate,
        strategy: opt.strategy,
        ..Options::new(opt.input, opt.output)
    };
    if let Err(err) = syn_hex::sonify(&options) {
        error!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}
