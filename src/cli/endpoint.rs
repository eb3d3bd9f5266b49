use std::fmt;
use std::path::PathBuf;

/// Where input is read from or output is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Standard input or standard output, selected with `-`.
    Stdio,
    /// A file on disk.
    Path(PathBuf),
}

impl Endpoint {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Endpoint::Stdio
        } else {
            Endpoint::Path(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Stdio => write!(f, "-"),
            Endpoint::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_means_stdio() {
        assert_eq!(Endpoint::from_arg("-"), Endpoint::Stdio);
        assert_eq!(Endpoint::Stdio.to_string(), "-");
    }

    #[test]
    fn test_anything_else_is_a_path() {
        assert_eq!(
            Endpoint::from_arg("dump.hex"),
            Endpoint::Path(PathBuf::from("dump.hex"))
        );
        assert_eq!(
            Endpoint::from_arg("./-"),
            Endpoint::Path(PathBuf::from("./-"))
        );
    }
}
