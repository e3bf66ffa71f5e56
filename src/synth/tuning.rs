// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::{Bit, Nibble};

/// Assigns a frequency to each of the sixteen nibble values.
///
/// # Examples
///
/// ```
/// use syn_hex::note::*;
/// use syn_hex::synth::tuning::*;
/// let table = FrequencyTable::default();
/// assert_eq!(table.frequency(Nibble::from_hex_digit('a').unwrap()), 698.46);
/// assert_eq!(table.frequency(Nibble::from_hex_digit('f').unwrap()), 1174.66);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    frequencies: [f64; 16],
}

/// Two octaves of the C major scale, from C4 up to D6.
const C_MAJOR_FROM_C4: [(f64, &str); 16] = [
    (261.63, "C4"),
    (293.66, "D4"),
    (329.63, "E4"),
    (349.23, "F4"),
    (392.00, "G4"),
    (440.00, "A4"),
    (493.88, "B4"),
    (523.25, "C5"),
    (587.33, "D5"),
    (659.25, "E5"),
    (698.46, "F5"),
    (783.99, "G5"),
    (880.00, "A5"),
    (987.77, "B5"),
    (1046.50, "C6"),
    (1174.66, "D6"),
];

impl FrequencyTable {
    /// Return the frequency in Hz assigned to a nibble.
    pub fn frequency(&self, nibble: Nibble) -> f64 {
        self.frequencies[nibble.index()]
    }

    pub fn frequencies(&self) -> &[f64; 16] {
        &self.frequencies
    }
}

/// The C major scale starting at C4.
impl Default for FrequencyTable {
    fn default() -> Self {
        let mut frequencies = [0.0; 16];
        for (target, (frequency, _)) in frequencies.iter_mut().zip(C_MAJOR_FROM_C4.iter()) {
            *target = *frequency;
        }
        FrequencyTable { frequencies }
    }
}

/// Name of the note a nibble plays in the default table, e.g. `"A4"` for `5`.
pub fn note_name(nibble: Nibble) -> &'static str {
    C_MAJOR_FROM_C4[nibble.index()].1
}

/// Frequencies for the bit-level sonification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitTuning {
    pub zero: f64,
    pub one: f64,
}

impl BitTuning {
    pub fn frequency(&self, bit: Bit) -> f64 {
        match bit {
            Bit::Zero => self.zero,
            Bit::One => self.one,
        }
    }
}

/// A4 for zeros and A5 for ones.
impl Default for BitTuning {
    fn default() -> Self {
        BitTuning {
            zero: 440.0,
            one: 880.0,
        }
    }
}
