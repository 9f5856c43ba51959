use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::ScriptError;
use crate::script::Selection;

/// `<namespace>.subset.AddRange(<start>,<length>);`
static ADD_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\.subset\.AddRange\(([0-9]+),([0-9]+)\);")
        .expect("AddRange pattern is valid")
});

/// Extract every `AddRange` selection from script text, in source order
///
/// The pattern is searched across the whole text rather than line by line.
/// Anything that does not match is ignored, so a script with no ranges
/// yields an empty list. Statements with a zero length are skipped.
pub fn extract_selections(text: &str) -> Result<Vec<Selection>, ScriptError> {
    let mut selections = Vec::new();

    for caps in ADD_RANGE.captures_iter(text) {
        let start = parse_frame(&caps[2])?;
        let length = parse_frame(&caps[3])?;

        match Selection::new(start, length) {
            Ok(selection) => {
                debug!("{}.subset.AddRange({},{}) -> {}", &caps[1], start, length, selection);
                selections.push(selection);
            }
            Err(ScriptError::EmptyRange { start }) => {
                warn!("Skipping empty range at frame {}", start);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(selections)
}

fn parse_frame(digits: &str) -> Result<u64, ScriptError> {
    digits.parse().map_err(|_| ScriptError::InvalidNumber {
        value: digits.to_string(),
    })
}
