pub mod actions;
pub mod endpoint;

pub use endpoint::Endpoint;

use clap::{Arg, ArgMatches, Command};

/// Build the command line definition.
pub fn build_command() -> Command {
    Command::new("unhex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert hex text (with comments and whitespace) back into raw bytes")
        .after_help(
            "Comments: /* block */, // to end of line, # to end of line.\n\
             Use '-' for standard input or standard output.",
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Hex text to read, or '-' for standard input")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("File to write raw bytes to, or '-' for standard output")
                .default_value("-"),
        )
}

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    build_command().get_matches()
}

/// Resolve the input and output endpoints from parsed arguments.
pub fn endpoints(matches: &ArgMatches) -> (Endpoint, Endpoint) {
    let get = |id: &str| {
        matches
            .get_one::<String>(id)
            .map(|arg| Endpoint::from_arg(arg))
            .unwrap_or(Endpoint::Stdio)
    };
    (get("input"), get("output"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults_to_stdio() {
        let matches = build_command().try_get_matches_from(["unhex"]).unwrap();
        assert_eq!(endpoints(&matches), (Endpoint::Stdio, Endpoint::Stdio));
    }

    #[test]
    fn test_positional_endpoints() {
        let matches = build_command()
            .try_get_matches_from(["unhex", "-", "out.bin"])
            .unwrap();
        assert_eq!(
            endpoints(&matches),
            (Endpoint::Stdio, Endpoint::Path(PathBuf::from("out.bin")))
        );
    }

    #[test]
    fn test_rejects_third_positional() {
        let err = build_command()
            .try_get_matches_from(["unhex", "a", "b", "c"])
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = build_command()
            .try_get_matches_from(["unhex", "--help"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
