//! shiftbox - Caesar shift cipher for text files

#![forbid(unsafe_code)]

pub mod error;
pub mod file_ops;
pub mod menu;
pub mod shifter;
