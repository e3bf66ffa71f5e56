//! Getting rendered audio out of the program.

pub mod wav;
