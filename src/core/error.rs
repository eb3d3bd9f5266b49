/// Reasons a conversion can fail. Every variant aborts the whole run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error(
        "invalid characters found: {}; use only hex digits (0-9, a-f, A-F), whitespace and comments",
        quoted(.runs)
    )]
    InvalidCharacters { runs: Vec<String> },

    #[error("odd number of hex digits ({digits}); each byte needs exactly two hex characters")]
    OddLength { digits: usize },

    #[error("failed to decode hex digits: {0}")]
    Decode(hex::FromHexError),
}

fn quoted(runs: &[String]) -> String {
    runs.iter()
        .map(|run| format!("{run:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters_lists_every_run() {
        let err = ConvertError::InvalidCharacters {
            runs: vec!["g".to_string(), "xyz".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("\"g\", \"xyz\""), "{msg}");
        assert!(msg.contains("use only hex digits"));
    }

    #[test]
    fn test_odd_length_message() {
        let msg = ConvertError::OddLength { digits: 3 }.to_string();
        assert!(msg.contains("(3)"));
        assert!(msg.contains("exactly two hex characters"));
    }

    #[test]
    fn test_decode_message_carries_decoder_diagnostic() {
        let cause = hex::FromHexError::OddLength;
        let msg = ConvertError::Decode(cause.clone()).to_string();
        assert!(msg.ends_with(&cause.to_string()), "{msg}");
    }
}
