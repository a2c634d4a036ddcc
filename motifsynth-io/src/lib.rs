#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate log;
extern crate memchr;
extern crate motifsynth;
extern crate nom;

pub mod error;
pub mod labels;
pub mod pfm;
pub mod sequences;

mod parse;
