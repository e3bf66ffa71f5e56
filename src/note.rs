// syn.hex -- listening to binary files
// Copyright (C) 2021  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is.

use std::fmt;

/// A "note" is one hexadecimal digit of the input, i.e. half a byte.
///
/// Nibble values range from 0 to 15, and every byte consists of exactly two
/// of them: the high nibble followed by the low nibble.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Nibble(u8);

impl Nibble {
    pub const MAX: Nibble = Nibble(15);

    /// Returns `None` if the value does not fit into four bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_hex::note::*;
    ///
    /// assert_eq!(Nibble::new(10).map(Nibble::value), Some(10));
    /// assert_eq!(Nibble::new(16), None);
    /// ```
    pub fn new(value: u8) -> Option<Nibble> {
        if value <= Self::MAX.0 {
            Some(Nibble(value))
        } else {
            None
        }
    }

    /// Split a byte into its high and low nibble, in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_hex::note::*;
    ///
    /// let [high, low] = Nibble::split(0xA1);
    /// assert_eq!((high.value(), low.value()), (0xA, 0x1));
    /// ```
    pub fn split(byte: u8) -> [Nibble; 2] {
        [Nibble(byte >> 4), Nibble(byte & 0x0F)]
    }

    /// Parse a single hexadecimal digit, accepting both cases.
    pub fn from_hex_digit(digit: char) -> Option<Nibble> {
        digit.to_digit(16).map(|value| Nibble(value as u8))
    }

    /// The lowercase hexadecimal digit of this nibble.
    pub fn hex_digit(self) -> char {
        // Always in range, the constructors guarantee at most 15.
        std::char::from_digit(self.0 as u32, 16).unwrap_or('?')
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_digit())
    }
}

/// A single bit of the input, used by the bit-level sonification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// All eight bits of a byte, most significant bit first.
    ///
    /// # Examples
    ///
    /// ```
    /// use syn_hex::note::*;
    ///
    /// let bits = Bit::split(0b1000_0001);
    /// assert_eq!(bits[0], Bit::One);
    /// assert_eq!(bits[1], Bit::Zero);
    /// assert_eq!(bits[7], Bit::One);
    /// ```
    pub fn split(byte: u8) -> [Bit; 8] {
        let mut bits = [Bit::Zero; 8];
        for (index, bit) in bits.iter_mut().enumerate() {
            if byte & (0x80 >> index) != 0 {
                *bit = Bit::One;
            }
        }
        bits
    }
}
