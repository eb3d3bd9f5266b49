pub mod convert;
pub mod error;

pub use convert::{convert, decode, invalid_runs, strip_comments, strip_whitespace};
pub use error::ConvertError;
