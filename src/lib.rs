// Representing data
pub mod note;
pub mod wave;

// Turning bytes into sound
pub mod render;
pub mod select;
pub mod synth;

// Getting the sound out
pub mod output;
pub mod sonify;

pub use sonify::{sonify, Error, Options, Summary};
