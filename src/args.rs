//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use clap::{crate_description, Parser};
use std::path::PathBuf;

/// Returns the parsed command line: the `Args` return value's `old` field is
/// the path of the old file and its `new` field the path of the new file.
#[must_use]
pub fn parsed() -> Args {
    let parsed = CliArgs::parse();
    Args { old: parsed.old, new: parsed.new }
}

/// The parsed command line.
pub struct Args {
    /// `old` is the path of the old file
    pub old: PathBuf,
    /// `new` is the path of the new file
    pub new: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "linecomp", version, about = crate_description!())]
/// `CliArgs` contains the parsed command line.
struct CliArgs {
    /// Path of the old file
    #[arg(value_name = "OLD", default_value = "original_output.txt")]
    old: PathBuf,
    /// Path of the new file
    #[arg(value_name = "NEW", default_value = "new_output.txt")]
    new: PathBuf,
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paths_default_to_original_output_and_new_output() {
        let parsed = CliArgs::parse_from(["linecomp"]);
        assert_eq!(parsed.old, PathBuf::from("original_output.txt"));
        assert_eq!(parsed.new, PathBuf::from("new_output.txt"));
    }

    #[test]
    fn explicit_paths_override_the_defaults() {
        let parsed = CliArgs::parse_from(["linecomp", "before.txt", "after.txt"]);
        assert_eq!(parsed.old, PathBuf::from("before.txt"));
        assert_eq!(parsed.new, PathBuf::from("after.txt"));
    }
}
