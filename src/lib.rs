//! unhex — turn hex text back into raw bytes
//!
//! This crate is the inverse of a hex dump. It accepts hex digit pairs
//! separated by any amount of whitespace and interleaved with `/* block */`,
//! `// line` and `# line` comments, and produces the raw byte stream.
//!
//! The conversion itself lives in [`core`] and is a pure function with no I/O.
//! The command line shell that resolves files and standard streams lives in a
//! separate, hidden module.

#[doc(hidden)]
pub mod boot;
#[doc(hidden)]
pub mod cli;
pub mod core;

pub use crate::core::{convert, ConvertError};
