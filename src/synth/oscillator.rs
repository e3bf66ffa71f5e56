// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::f64::consts::PI;

/// Position within one period of a wave, in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Phase(f64);

impl Phase {
    pub fn new(offset: f64) -> Phase {
        let wrapped = offset - offset.floor();
        // `floor` can leave exactly 1.0 behind for tiny negative offsets
        if wrapped >= 1.0 {
            Phase(0.0)
        } else {
            Phase(wrapped)
        }
    }

    /// Phase of a wave with the given frequency after `time` seconds.
    pub fn at(frequency: f64, time: f64) -> Phase {
        Phase::new(frequency * time)
    }

    pub fn offset(self) -> f64 {
        self.0
    }
}

/// A sine oscillator that can be sampled at arbitrary points in time.
///
/// # Example
///
/// ```
/// use syn_hex::synth::oscillator::*;
/// let osc = Oscillator::new(1.0, 2.0);
/// assert_eq!(osc.sample_at(0.0), 0.0);
/// assert!((osc.sample_at(0.25) - 2.0).abs() < 1e-12);
/// assert!((osc.sample_at(0.75) + 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator {
    frequency: f64,
    amplitude: f64,
}

impl Oscillator {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    pub fn sample_at(&self, time: f64) -> f64 {
        // sin(2 pi f t) on the wrapped phase, so long tones keep their precision
        let phase = Phase::at(self.frequency, time);
        self.amplitude * (phase.offset() * 2.0 * PI).sin()
    }

    /// Sample `count` points evenly spaced over `[0, duration)`.
    pub fn sample_span(&self, duration: f64, count: usize) -> Vec<f64> {
        let step = if count == 0 {
            0.0
        } else {
            duration / count as f64
        };
        (0..count)
            .map(|index| self.sample_at(index as f64 * step))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn phase_wraps() {
        assert_eq!(Phase::new(2.25).offset(), 0.25);
        assert_eq!(Phase::new(-0.25).offset(), 0.75);
        assert_eq!(Phase::new(1.0).offset(), 0.0);
    }

    #[test]
    fn matches_direct_sine() {
        let osc = Oscillator::new(440.0, 32767.0);
        let samples = osc.sample_span(0.1, 4410);
        for (index, sample) in samples.iter().enumerate() {
            let t = index as f64 / 44100.0;
            let direct = 32767.0 * (2.0 * PI * 440.0 * t).sin();
            assert!((sample - direct).abs() < 1e-6, "sample {} differs", index);
        }
    }

    #[test]
    fn empty_span() {
        assert!(Oscillator::new(440.0, 1.0).sample_span(0.0, 0).is_empty());
    }
}
