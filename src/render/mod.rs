// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The glue responsible for turning bytes into actual waveforms.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::note::{Bit, Nibble};
use crate::synth::tuning::{self, BitTuning, FrequencyTable};
use crate::synth::{sample_count, ToneSynth};
use crate::wave::Waveform;

/// Turns a single byte into a sequence of tone frequencies.
pub trait Sonifier {
    /// Number of tones produced for every byte.
    fn tones_per_byte(&self) -> usize;

    /// Call `emit` with the frequency of every tone for this byte, in playing order.
    fn byte_tones(&self, byte: u8, emit: &mut dyn FnMut(f64));
}

/// One tone per nibble, high nibble first.
#[derive(Debug, Clone, Default)]
pub struct NibbleSonifier {
    pub table: FrequencyTable,
}

impl Sonifier for NibbleSonifier {
    fn tones_per_byte(&self) -> usize {
        2
    }

    fn byte_tones(&self, byte: u8, emit: &mut dyn FnMut(f64)) {
        for &nibble in Nibble::split(byte).iter() {
            trace!("{} as {}", nibble, tuning::note_name(nibble));
            emit(self.table.frequency(nibble));
        }
    }
}

/// One tone per bit, most significant bit first.
#[derive(Debug, Clone, Default)]
pub struct BitSonifier {
    pub tuning: BitTuning,
}

impl Sonifier for BitSonifier {
    fn tones_per_byte(&self) -> usize {
        8
    }

    fn byte_tones(&self, byte: u8, emit: &mut dyn FnMut(f64)) {
        for &bit in Bit::split(byte).iter() {
            emit(self.tuning.frequency(bit));
        }
    }
}

/// The named ways of listening to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Sixteen pitches, one per hexadecimal digit, with fades.
    Nibble,
    /// Two pitches, one per bit, without fades.
    Bit,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Nibble
    }
}

impl Strategy {
    pub fn sonifier(self) -> Box<dyn Sonifier> {
        match self {
            Strategy::Nibble => Box::new(NibbleSonifier::default()),
            Strategy::Bit => Box::new(BitSonifier::default()),
        }
    }

    /// Whether tones of this strategy get a fade envelope.
    pub fn fades(self) -> bool {
        match self {
            Strategy::Nibble => true,
            Strategy::Bit => false,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Nibble => write!(f, "nibble"),
            Strategy::Bit => write!(f, "bit"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nibble" => Ok(Strategy::Nibble),
            "bit" => Ok(Strategy::Bit),
            other => Err(format!("unknown strategy {:?}, expected nibble or bit", other)),
        }
    }
}

/// Feeds bytes through a sonifier and synthesizer, collecting the tones in one waveform.
pub struct Assembler<'s> {
    sonifier: &'s dyn Sonifier,
    synth: ToneSynth,
    tone_duration: f64,
    gap: f64,
}

impl<'s> Assembler<'s> {
    pub fn new(sonifier: &'s dyn Sonifier, synth: ToneSynth, tone_duration: f64) -> Self {
        Assembler {
            sonifier,
            synth,
            tone_duration,
            gap: 0.0,
        }
    }

    /// Insert `gap` seconds of silence after every tone.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Number of samples the waveform for `byte_count` bytes will have,
    /// or `None` if that does not fit into a `usize`.
    pub fn expected_len(&self, byte_count: usize) -> Option<usize> {
        let rate = self.synth.sample_rate();
        let per_tone = sample_count(rate, self.tone_duration)
            .checked_add(sample_count(rate, self.gap))?;
        byte_count
            .checked_mul(self.sonifier.tones_per_byte())?
            .checked_mul(per_tone)
    }

    pub fn assemble(&self, bytes: &[u8]) -> Waveform {
        let capacity = self.expected_len(bytes.len()).unwrap_or(0);
        let mut wave = Waveform::with_capacity(self.synth.sample_rate(), capacity);
        let silence = self.synth.silence(self.gap);
        let progress_step = (bytes.len() / 10).max(1);

        for (index, &byte) in bytes.iter().enumerate() {
            trace!("byte {}: {:02x}", index, byte);
            self.sonifier.byte_tones(byte, &mut |frequency| {
                wave.append(&self.synth.tone(frequency, self.tone_duration));
                wave.append(&silence);
            });
            if (index + 1) % progress_step == 0 {
                debug!(
                    "rendered {}/{} bytes ({:.1} seconds)",
                    index + 1,
                    bytes.len(),
                    wave.duration()
                );
            }
        }
        wave
    }
}
