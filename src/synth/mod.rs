// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains all the parts converting from note data to wave data.

pub mod envelope;
pub mod oscillator;
pub mod tuning;

use envelope::Fade;
use oscillator::Oscillator;

use crate::wave::PCM16_MAX;

/// Number of samples in a tone of the given length, rounded to the nearest sample.
///
/// ```
/// # use syn_hex::synth::*;
/// assert_eq!(sample_count(44100, 0.1), 4410);
/// assert_eq!(sample_count(44100, 0.2), 8820);
/// assert_eq!(sample_count(10, 0.04), 0);
/// ```
pub fn sample_count(sample_rate: u32, duration: f64) -> usize {
    (sample_rate as f64 * duration).round().max(0.0) as usize
}

/// Renders fixed-length sine tones with a fade envelope whose length
/// is proportional to the length of the tone.
#[derive(Debug, Clone)]
pub struct ToneSynth {
    /// Samples per second rate of the generated audio signal.
    sample_rate: u32,
    /// Peak amplitude of each tone in PCM units.
    amplitude: f64,
    /// Fraction of each tone spent fading in, and the same fraction fading out.
    fade_fraction: f64,
}

impl ToneSynth {
    pub fn new(sample_rate: u32) -> Self {
        ToneSynth {
            sample_rate,
            amplitude: PCM16_MAX,
            fade_fraction: 0.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_fade_fraction(mut self, fade_fraction: f64) -> Self {
        self.fade_fraction = fade_fraction;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Render one tone of `duration` seconds.
    pub fn tone(&self, frequency: f64, duration: f64) -> Vec<f64> {
        let fade = Fade::symmetric(self.fade_fraction * duration);
        render_tone(
            Oscillator::new(frequency, self.amplitude),
            duration,
            fade,
            self.sample_rate,
        )
    }

    /// Render `duration` seconds of silence.
    pub fn silence(&self, duration: f64) -> Vec<f64> {
        silence(duration, self.sample_rate)
    }
}

/// Synthesize a full-scale sine tone with a linear fade of `fade_duration`
/// seconds at both ends.
///
/// # Example
///
/// ```
/// use syn_hex::synth::*;
/// let tone = synthesize(440.0, 0.1, 0.005, 44100);
/// assert_eq!(tone.len(), 4410);
/// assert_eq!(tone[0], 0.0);
/// assert!(tone[tone.len() - 1].abs() < 1e-9);
/// ```
pub fn synthesize(frequency: f64, duration: f64, fade_duration: f64, sample_rate: u32) -> Vec<f64> {
    render_tone(
        Oscillator::new(frequency, PCM16_MAX),
        duration,
        Fade::symmetric(fade_duration),
        sample_rate,
    )
}

/// `duration` seconds of zero samples.
pub fn silence(duration: f64, sample_rate: u32) -> Vec<f64> {
    vec![0.0; sample_count(sample_rate, duration)]
}

fn render_tone(oscillator: Oscillator, duration: f64, fade: Fade, sample_rate: u32) -> Vec<f64> {
    let mut samples = oscillator.sample_span(duration, sample_count(sample_rate, duration));
    fade.apply(&mut samples, sample_rate);
    samples
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tone_lengths() {
        for &rate in [8000u32, 22050, 44100, 48000].iter() {
            for &duration in [0.01, 0.05, 0.1, 0.2, 0.333].iter() {
                for &freq in [261.63, 440.0, 1174.66].iter() {
                    let tone = synthesize(freq, duration, 0.05 * duration, rate);
                    assert_eq!(
                        tone.len(),
                        (rate as f64 * duration).round() as usize,
                        "rate {} duration {}",
                        rate,
                        duration
                    );
                }
            }
        }
    }

    #[test]
    fn fade_edges_are_silent() {
        let synth = ToneSynth::new(44100).with_fade_fraction(0.05);
        let tone = synth.tone(987.77, 0.1);
        assert_eq!(tone.len(), 4410);
        assert!(tone[0].abs() < 1e-9);
        assert!(tone[tone.len() - 1].abs() < 1e-9);
        // somewhere in the middle the sine reaches close to full scale
        let peak = tone.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
        assert!(peak > 32000.0 && peak <= PCM16_MAX);
    }

    #[test]
    fn fade_ramps_up() {
        let tone = synthesize(440.0, 0.1, 0.005, 44100);
        let unfaded = ToneSynth::new(44100).tone(440.0, 0.1);
        // the fade covers 220 samples at each end and leaves the middle alone
        assert_eq!(tone[1000], unfaded[1000]);
        assert_eq!(tone[219], unfaded[219]);
        assert!((tone[110] - unfaded[110] * 110.0 / 219.0).abs() < 1e-9);
        assert_eq!(tone[4409 - 219], unfaded[4409 - 219]);
    }

    #[test]
    fn silence_length() {
        assert_eq!(silence(0.1, 44100), vec![0.0; 4410]);
        assert!(ToneSynth::new(44100).silence(0.0).is_empty());
    }

    #[test]
    fn amplitude() {
        let synth = ToneSynth::new(100).with_amplitude(2.0);
        let tone = synth.tone(25.0, 0.04);
        assert_eq!(tone.len(), 4);
        assert!((tone[1] - 2.0).abs() < 1e-12);
        assert!((tone[3] + 2.0).abs() < 1e-12);
    }
}
