// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Translate a binary file into a song.

use std::path::PathBuf;

use log::info;
use snafu::{ensure, ResultExt, Snafu};

use crate::output::wav;
use crate::render::{Assembler, Strategy};
use crate::select;
use crate::synth::ToneSynth;
use crate::wave::PCM16_MAX;

/// Upper limit for the samples in a single tone or gap (about six minutes at 44.1 kHz).
pub const MAX_TONE_SAMPLES: f64 = (1u64 << 24) as f64;

/// Upper limit for the samples in the whole song (about 100 minutes at 44.1 kHz).
pub const MAX_SONG_SAMPLES: usize = 1 << 28;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Invalid options: {}", reason))]
    InvalidOptions { reason: String },
    #[snafu(display("{}", source))]
    SelectBytes { source: select::Error },
    #[snafu(display("{}", source))]
    WriteWave { source: wav::Error },
}

/// Everything that determines how a file sounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// The binary file to listen to.
    pub input: PathBuf,
    /// Where the WAV file is written. Default: `output_music.wav`.
    pub output: PathBuf,
    /// Target length of the song in seconds. Default: 60.
    pub song_duration: f64,
    /// Length of every tone in seconds. Default: 0.1.
    pub tone_duration: f64,
    /// Fraction of a tone spent fading in, and again fading out. Default: 0.05.
    /// Ignored by strategies without fades.
    pub fade_fraction: f64,
    /// Seconds of silence after every tone. Default: 0.
    pub gap: f64,
    /// Samples per second in synthesis and output. Default: 44100.
    pub sample_rate: u32,
    /// Peak amplitude of a tone in 16 bit PCM units. Default: 32767.
    pub amplitude: f64,
    /// Default: one tone per nibble.
    pub strategy: Strategy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: PathBuf::new(),
            output: PathBuf::from("output_music.wav"),
            song_duration: 60.0,
            tone_duration: 0.1,
            fade_fraction: 0.05,
            gap: 0.0,
            sample_rate: 44100,
            amplitude: PCM16_MAX,
            strategy: Strategy::Nibble,
        }
    }
}

impl Options {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Options {
            input: input.into(),
            output: output.into(),
            ..Options::default()
        }
    }

    /// Reject options that cannot produce a sensible waveform.
    pub fn validate(&self) -> Result<(), Error> {
        ensure!(
            self.song_duration > 0.0 && self.song_duration.is_finite(),
            InvalidOptions {
                reason: format!("song duration must be positive, got {}", self.song_duration),
            }
        );
        ensure!(
            self.tone_duration > 0.0 && self.tone_duration.is_finite(),
            InvalidOptions {
                reason: format!("tone duration must be positive, got {}", self.tone_duration),
            }
        );
        ensure!(
            self.fade_fraction >= 0.0 && self.fade_fraction <= 0.5,
            InvalidOptions {
                reason: format!(
                    "fade fraction must be between 0 and 0.5, got {}",
                    self.fade_fraction
                ),
            }
        );
        ensure!(
            self.gap >= 0.0 && self.gap.is_finite(),
            InvalidOptions {
                reason: format!("gap must not be negative, got {}", self.gap),
            }
        );
        ensure!(
            self.sample_rate > 0,
            InvalidOptions {
                reason: "sample rate must be positive",
            }
        );
        ensure!(
            self.amplitude > 0.0 && self.amplitude <= PCM16_MAX,
            InvalidOptions {
                reason: format!(
                    "amplitude must be in (0, {}], got {}",
                    PCM16_MAX, self.amplitude
                ),
            }
        );

        let rate = self.sample_rate as f64;
        ensure!(
            (rate * self.tone_duration).round() >= 1.0,
            InvalidOptions {
                reason: format!(
                    "tone duration {} is shorter than one sample at {} Hz",
                    self.tone_duration, self.sample_rate
                ),
            }
        );
        ensure!(
            rate * self.tone_duration <= MAX_TONE_SAMPLES && rate * self.gap <= MAX_TONE_SAMPLES,
            InvalidOptions {
                reason: format!(
                    "tones and gaps are limited to {} samples",
                    MAX_TONE_SAMPLES
                ),
            }
        );
        Ok(())
    }

    fn synth(&self) -> ToneSynth {
        let synth = ToneSynth::new(self.sample_rate).with_amplitude(self.amplitude);
        if self.strategy.fades() {
            synth.with_fade_fraction(self.fade_fraction)
        } else {
            synth
        }
    }
}

/// What ended up in the output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Offset of the first byte that was read.
    pub start: u64,
    pub bytes_read: usize,
    pub samples: usize,
    /// Length of the written song in seconds.
    pub duration: f64,
}

/// Read the middle of the input file and write it as a song to the output file.
pub fn sonify(options: &Options) -> Result<Summary, Error> {
    options.validate()?;

    let wanted = select::bytes_to_read(options.song_duration, options.tone_duration);
    let (window, bytes) = select::read_centered(&options.input, wanted).context(SelectBytes)?;
    info!(
        "sonifying {} bytes of {} starting at byte {} ({} per {})",
        bytes.len(),
        options.input.display(),
        window.start,
        options.tone_duration,
        options.strategy
    );

    let sonifier = options.strategy.sonifier();
    let assembler =
        Assembler::new(&*sonifier, options.synth(), options.tone_duration).with_gap(options.gap);
    let planned = assembler.expected_len(bytes.len());
    ensure!(
        planned.map_or(false, |samples| samples <= MAX_SONG_SAMPLES),
        InvalidOptions {
            reason: format!(
                "{} bytes would exceed the limit of {} samples",
                bytes.len(),
                MAX_SONG_SAMPLES
            ),
        }
    );
    let wave = assembler.assemble(&bytes);

    info!(
        "total length {} samples ({:.2} seconds) at {} Hz",
        wave.len(),
        wave.duration(),
        wave.sample_rate()
    );
    wav::write_wav(&options.output, &wave).context(WriteWave)?;
    info!("wrote {}", options.output.display());

    Ok(Summary {
        start: window.start,
        bytes_read: bytes.len(),
        samples: wave.len(),
        duration: wave.duration(),
    })
}
