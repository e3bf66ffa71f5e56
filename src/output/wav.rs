// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing waveforms as uncompressed 16 bit PCM WAV files.

use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use log::debug;
use snafu::{ResultExt, Snafu};

use crate::wave::Waveform;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    CreateOutput { path: PathBuf, source: hound::Error },
    #[snafu(display("Failed to write sample {}: {}", index, source))]
    WriteSample { index: usize, source: hound::Error },
    #[snafu(display("Failed to finish the WAV file: {}", source))]
    FinalizeOutput { source: hound::Error },
}

/// Mono, 16 bits per sample, signed integer PCM.
pub fn pcm16_mono(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write the waveform to a new file at `path`, replacing any existing file.
pub fn write_wav(path: &Path, wave: &Waveform) -> Result<(), Error> {
    let writer = hound::WavWriter::create(path, pcm16_mono(wave.sample_rate()))
        .context(CreateOutput { path })?;
    write_samples(writer, wave)?;
    debug!("wrote {} samples to {}", wave.len(), path.display());
    Ok(())
}

/// Write the waveform to any seekable stream, e.g. an in-memory cursor.
pub fn write_wav_to<W: Write + Seek>(target: W, wave: &Waveform) -> Result<(), Error> {
    let writer = hound::WavWriter::new(target, pcm16_mono(wave.sample_rate()))
        .context(CreateOutput { path: "<stream>" })?;
    write_samples(writer, wave)
}

/// The writer is consumed here. If writing fails halfway, dropping it
/// still patches up the header and closes the underlying stream.
fn write_samples<W: Write + Seek>(
    mut writer: hound::WavWriter<W>,
    wave: &Waveform,
) -> Result<(), Error> {
    for (index, sample) in wave.pcm16().enumerate() {
        writer
            .write_sample(sample)
            .context(WriteSample { index })?;
    }
    writer.finalize().context(FinalizeOutput)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_back_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let wave = Waveform::from_samples(44100, vec![0.0, 16383.0, -16384.0]);
        write_wav(&path, &wave).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec(), pcm16_mono(44100));
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16383, -16384]);
    }

    #[test]
    fn fractions_are_truncated() {
        let mut buffer = Cursor::new(Vec::new());
        let wave = Waveform::from_samples(44100, vec![0.7, 16383.9, -16384.9]);
        write_wav_to(&mut buffer, &wave).unwrap();

        buffer.set_position(0);
        let mut reader = hound::WavReader::new(buffer).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16383, -16384]);
    }

    #[test]
    fn header_layout() {
        let mut buffer = Cursor::new(Vec::new());
        let wave = Waveform::from_samples(44100, vec![1.0, -2.0]);
        write_wav_to(&mut buffer, &wave).unwrap();
        let bytes = buffer.into_inner();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // two samples of little endian i16 at the very end
        assert_eq!(&bytes[bytes.len() - 4..], &[1u8, 0, 0xFE, 0xFF][..]);
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        let wave = Waveform::from_samples(44100, vec![0.0]);
        match write_wav(&path, &wave) {
            Err(Error::CreateOutput { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
