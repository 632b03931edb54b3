//! Command line arguments

use std::path::PathBuf;

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Start editing, optionally opening a file
    Open(Option<PathBuf>),
    /// Print usage and exit nonzero
    Usage,
    /// Print the version and exit
    Version,
}

/// Parse arguments, excluding the program name.
///
/// A help flag wins over everything after it; `--` ends flag parsing.
pub fn parse<I, S>(args: I) -> CliAction
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut path = None;
    let mut flags_done = false;

    for arg in args {
        let arg: String = arg.into();
        if !flags_done && arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "--" => flags_done = true,
                "-v" | "--version" => return CliAction::Version,
                // Help and unknown flags
                _ => return CliAction::Usage,
            }
            continue;
        }
        if path.replace(PathBuf::from(arg)).is_some() {
            return CliAction::Usage;
        }
    }
    CliAction::Open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_opens_anonymous() {
        assert_eq!(parse(Vec::<String>::new()), CliAction::Open(None));
    }

    #[test]
    fn test_single_path() {
        assert_eq!(
            parse(["notes.txt"]),
            CliAction::Open(Some(PathBuf::from("notes.txt")))
        );
    }

    #[test]
    fn test_too_many_paths() {
        assert_eq!(parse(["a", "b"]), CliAction::Usage);
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse(["-h"]), CliAction::Usage);
        assert_eq!(parse(["--help"]), CliAction::Usage);
        assert_eq!(parse(["-x"]), CliAction::Usage);
        assert_eq!(parse(["-v"]), CliAction::Version);
        assert_eq!(parse(["--version", "file"]), CliAction::Version);
    }

    #[test]
    fn test_double_dash_allows_dash_names() {
        assert_eq!(
            parse(["--", "-odd"]),
            CliAction::Open(Some(PathBuf::from("-odd")))
        );
        // A lone dash is a path
        assert_eq!(parse(["-"]), CliAction::Open(Some(PathBuf::from("-"))));
    }
}
