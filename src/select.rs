// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Choosing which bytes of a file get to be heard.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::debug;
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not open {}: {}", path.display(), source))]
    OpenInput { path: PathBuf, source: io::Error },
    #[snafu(display("Could not determine the size of {}: {}", path.display(), source))]
    InputMetadata { path: PathBuf, source: io::Error },
    #[snafu(display("Could not seek to byte {} of {}: {}", offset, path.display(), source))]
    SeekInput {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },
    #[snafu(display("Could not read from {}: {}", path.display(), source))]
    ReadInput { path: PathBuf, source: io::Error },
}

/// How many bytes fit into a song when every byte is played for `tone_duration` seconds.
///
/// ```
/// # use syn_hex::select::*;
/// assert_eq!(bytes_to_read(60.0, 0.1), 600);
/// assert_eq!(bytes_to_read(60.0, 0.2), 300);
/// assert_eq!(bytes_to_read(1.0, 0.3), 3);
/// ```
pub fn bytes_to_read(song_duration: f64, tone_duration: f64) -> usize {
    (song_duration / tone_duration).floor().max(0.0) as usize
}

/// A contiguous range of bytes in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u64,
    pub len: usize,
}

impl Window {
    /// Center a window of `len` bytes on the middle of a file of `file_size` bytes.
    /// The window never starts before the beginning of the file, but it may extend
    /// past its end when the file is too small.
    ///
    /// ```
    /// # use syn_hex::select::*;
    /// assert_eq!(Window::centered(1000, 600), Window { start: 200, len: 600 });
    /// assert_eq!(Window::centered(100, 600), Window { start: 0, len: 600 });
    /// ```
    pub fn centered(file_size: u64, len: usize) -> Self {
        let middle = file_size / 2;
        let half = len as u64 / 2;
        Window {
            start: middle.saturating_sub(half),
            len,
        }
    }

    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.len as u64)
    }

    /// Number of bytes of the window that lie within a file of `file_size` bytes.
    ///
    /// ```
    /// # use syn_hex::select::*;
    /// assert_eq!(Window { start: 200, len: 600 }.available(1000), 600);
    /// assert_eq!(Window { start: 0, len: 600 }.available(10), 10);
    /// assert_eq!(Window { start: 20, len: 5 }.available(10), 0);
    /// ```
    pub fn available(&self, file_size: u64) -> usize {
        let remaining = file_size.saturating_sub(self.start);
        (self.len as u64).min(remaining) as usize
    }
}

/// Read the bytes covered by `window`.
/// If the file ends before the window does, only the available bytes are returned.
pub fn read_window(path: &Path, window: Window) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path).context(OpenInput { path })?;
    let file_size = file.metadata().context(InputMetadata { path })?.len();
    file.seek(SeekFrom::Start(window.start))
        .context(SeekInput {
            path,
            offset: window.start,
        })?;

    let mut bytes = Vec::with_capacity(window.available(file_size));
    file.take(window.len as u64)
        .read_to_end(&mut bytes)
        .context(ReadInput { path })?;
    Ok(bytes)
}

/// Read `len` bytes from the middle of the file at `path`.
///
/// Returns the window that was requested alongside the bytes that were actually read.
pub fn read_centered(path: &Path, len: usize) -> Result<(Window, Vec<u8>), Error> {
    let file_size = std::fs::metadata(path)
        .context(InputMetadata { path })?
        .len();
    let window = Window::centered(file_size, len);
    debug!(
        "{} is {} bytes long, reading bytes {}..{}",
        path.display(),
        file_size,
        window.start,
        window.start + window.available(file_size) as u64
    );
    let bytes = read_window(path, window)?;
    Ok((window, bytes))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn counting_file(size: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        file.write_all(&contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn centered_window_of_thousand_bytes() {
        let file = counting_file(1000);
        let (window, bytes) = read_centered(file.path(), bytes_to_read(60.0, 0.1)).unwrap();
        assert_eq!(window, Window { start: 200, len: 600 });
        let expected: Vec<u8> = (200..800).map(|i| (i % 251) as u8).collect();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn small_file_is_read_completely() {
        let file = counting_file(10);
        let (window, bytes) = read_centered(file.path(), 600).unwrap();
        assert_eq!(window.start, 0);
        assert_eq!(bytes.len(), 10);
    }

    #[test]
    fn short_tail() {
        let file = counting_file(10);
        let bytes = read_window(file.path(), Window { start: 8, len: 5 }).unwrap();
        assert_eq!(bytes, vec![8, 9]);
        let bytes = read_window(file.path(), Window { start: 20, len: 5 }).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn oversized_window() {
        let file = counting_file(4);
        let (window, bytes) = read_centered(file.path(), usize::MAX).unwrap();
        assert_eq!(window.start, 0);
        assert_eq!(bytes, vec![0, 1, 2, 3]);
        let bytes = read_window(
            file.path(),
            Window {
                start: 2,
                len: usize::MAX,
            },
        )
        .unwrap();
        assert_eq!(bytes, vec![2, 3]);
    }

    #[test]
    fn empty_file() {
        let file = counting_file(0);
        let (window, bytes) = read_centered(file.path(), 600).unwrap();
        assert_eq!(window.start, 0);
        assert!(bytes.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        match read_centered(&missing, 600) {
            Err(Error::InputMetadata { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected result {:?}", other),
        }
        match read_window(&missing, Window { start: 0, len: 1 }) {
            Err(Error::OpenInput { .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
