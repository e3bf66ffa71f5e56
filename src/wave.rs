// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// Largest magnitude representable by a signed 16 bit PCM sample.
pub const PCM16_MAX: f64 = i16::MAX as f64;

/// A mono buffer of floating point samples at a fixed sample rate.
///
/// Samples are already scaled to the 16 bit PCM range,
/// i.e. a full-scale sine swings between `-32767.0` and `32767.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    sample_rate: u32,
    samples: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl Waveform {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(sample_rate: u32, capacity: usize) -> Self {
        Self {
            sample_rate,
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn from_samples(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Size of the waveform in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Length of the waveform in seconds.
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Append a tone (or any other run of samples) at the end.
    pub fn append(&mut self, samples: &[f64]) {
        self.samples.extend_from_slice(samples);
    }

    /// The samples as signed 16 bit integers, truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_hex::wave::*;
    ///
    /// let wave = Waveform::from_samples(44100, vec![0.0, 1.9, -1.9, 16383.5]);
    /// let pcm: Vec<i16> = wave.pcm16().collect();
    /// assert_eq!(pcm, vec![0, 1, -1, 16383]);
    /// ```
    pub fn pcm16(&self) -> impl Iterator<Item = i16> + '_ {
        self.samples.iter().map(|&sample| to_pcm16(sample))
    }
}

/// Truncate a sample toward zero.
///
/// Synthesis never exceeds the 16 bit range: the amplitude is at most
/// [`PCM16_MAX`] and envelopes only scale down. Out of range values are a bug,
/// but the conversion saturates rather than wrapping in release builds.
pub fn to_pcm16(sample: f64) -> i16 {
    debug_assert!(
        sample.abs() < PCM16_MAX + 1.0,
        "sample {} outside of the 16 bit range",
        sample
    );
    sample as i16
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duration() {
        let wave = Waveform::from_samples(44100, vec![0.0; 4410]);
        assert!((wave.duration() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn append_keeps_order() {
        let mut wave = Waveform::new(8000);
        wave.append(&[1.0, 2.0]);
        wave.append(&[3.0]);
        assert_eq!(wave.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn full_scale_conversion() {
        assert_eq!(to_pcm16(PCM16_MAX), i16::MAX);
        assert_eq!(to_pcm16(-PCM16_MAX), -i16::MAX);
        assert_eq!(to_pcm16(-0.99), 0);
    }
}
