use crate::status::{ConfigError, SimStatus};

pub type PageId = u32;

/// Parses a reference string such as `"7 0 1, 2 0"` into page ids.
/// Commas count as separators; blank input is an empty sequence.
pub fn parse_references(input: &str) -> Result<Vec<PageId>, SimStatus> {
    input
        .replace(',', " ")
        .split_whitespace()
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| SimStatus::InvalidReference(token.to_string()))
        })
        .collect()
}

pub fn parse_frame_count(input: &str) -> Result<usize, SimStatus> {
    let trimmed = input.trim();
    let count: usize = trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidFrameCount(trimmed.to_string()))?;
    if count == 0 {
        return Err(ConfigError::ZeroFrames.into());
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_and_comma_separated() {
        assert_eq!(
            parse_references("7 0 1,2, 0   3").unwrap(),
            vec![7, 0, 1, 2, 0, 3]
        );
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_references("").unwrap().is_empty());
        assert!(parse_references("  ,  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!(
            parse_references("1 two 3"),
            Err(SimStatus::InvalidReference("two".to_string()))
        );
        assert_eq!(
            parse_references("1 -4"),
            Err(SimStatus::InvalidReference("-4".to_string()))
        );
    }

    #[test]
    fn test_parse_frame_count() {
        assert_eq!(parse_frame_count(" 3 ").unwrap(), 3);
        assert_eq!(
            parse_frame_count("0"),
            Err(SimStatus::InvalidConfiguration(ConfigError::ZeroFrames))
        );
        assert!(matches!(
            parse_frame_count("x"),
            Err(SimStatus::InvalidConfiguration(ConfigError::InvalidFrameCount(_)))
        ));
    }
}
