//! `linecomp` treats two text files as sets of lines and reports the lines
//! unique to each side. The `args` module parses the command line, the
//! `operands` module reads the files, the `set` module deduplicates their
//! lines, and the `report` module computes the two set differences and
//! prints them.
//!
//! Current Limitations:
//! * Both files are read into memory in their entirety; there is no
//!   streaming mode for very large inputs.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod operands;
pub mod report;
pub mod set;
