// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

/// A linear fade-in/fade-out envelope applied to the edges of a tone.
/// The amplitude rises from zero to one over the first `fade_in` seconds
/// and falls back to zero over the last `fade_out` seconds.
///
/// # Example
///
/// ```
/// use syn_hex::synth::envelope::*;
/// let fade = Fade::symmetric(0.5);
/// let mut samples = vec![1.0; 10];
/// fade.apply(&mut samples, 10);
/// assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 0.75, 0.5, 0.25, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Time in seconds to go from 0.0 to 1.0
    pub fade_in: f64,
    /// Time in seconds to go from 1.0 to 0.0
    pub fade_out: f64,
}

impl Fade {
    pub const NONE: Fade = Fade {
        fade_in: 0.0,
        fade_out: 0.0,
    };

    pub fn symmetric(duration: f64) -> Self {
        Fade {
            fade_in: duration,
            fade_out: duration,
        }
    }

    /// Apply the envelope in place.
    ///
    /// Each ramp covers `floor(sample_rate * seconds)` samples and includes
    /// both of its end points. A ramp that would cover the whole buffer
    /// is skipped.
    pub fn apply(&self, samples: &mut [f64], sample_rate: u32) {
        let fade_in = span(self.fade_in, sample_rate);
        if fade_in > 0 && fade_in < samples.len() {
            for (index, sample) in samples[..fade_in].iter_mut().enumerate() {
                *sample *= ramp(index, fade_in);
            }
        }

        let fade_out = span(self.fade_out, sample_rate);
        if fade_out > 0 && fade_out < samples.len() {
            let start = samples.len() - fade_out;
            for (index, sample) in samples[start..].iter_mut().enumerate() {
                *sample *= 1.0 - ramp(index, fade_out);
            }
        }
    }
}

/// Number of samples covered by a ramp of the given length.
fn span(seconds: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * seconds).max(0.0) as usize
}

/// Position `index` on a rising ramp of `len` points from 0.0 to 1.0 inclusive.
fn ramp(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}
