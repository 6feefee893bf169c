//! Command-line contract: program name plus exactly two positional arguments.

use crate::error::FixtureError;
use clap::Parser as ClapParser;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mode flag that enables the file-reading path.
pub const FILE_FLAG: &str = "--file";

/// Entries in a valid argument vector, program name included.
pub const EXPECTED_ARGC: usize = 3;

#[derive(ClapParser, Debug)]
#[command(name = "file-null-pointer-deref")]
#[command(about = "Null-pointer write reachable through file-controlled data")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Mode flag; only `--file` reads the file
    mode: OsString,

    /// File whose first byte gates the fault
    path: OsString,
}

/// Parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: OsString,
    pub path: PathBuf,
}

impl Invocation {
    /// True when the mode flag is exactly `--file`.
    pub fn wants_file(&self) -> bool {
        self.mode.as_os_str() == OsStr::new(FILE_FLAG)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a full argument vector (program name first).
///
/// The count is checked before clap sees anything, so a wrong count is always
/// [`FixtureError::Usage`] no matter what the arguments look like.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, FixtureError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if argv.len() != EXPECTED_ARGC {
        debug!("rejecting argument vector of length {}", argv.len());
        return Err(FixtureError::Usage { argc: argv.len() });
    }

    // Everything after the injected `--` is positional, so `--file`, `--help`
    // and a user-supplied `--` all stay plain values.
    let mut clap_argv = Vec::with_capacity(EXPECTED_ARGC + 1);
    clap_argv.push(argv[0].clone());
    clap_argv.push(OsString::from("--"));
    clap_argv.extend(argv[1..].iter().cloned());

    let args = Args::try_parse_from(clap_argv)?;
    Ok(Invocation {
        mode: args.mode,
        path: PathBuf::from(args.path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_file_mode() {
        let inv = parse_invocation(["prog", "--file", "input.bin"]).unwrap();
        assert_eq!(
            inv,
            Invocation {
                mode: OsString::from("--file"),
                path: PathBuf::from("input.bin"),
            }
        );
        assert!(inv.wants_file());
    }

    #[test]
    fn test_wrong_count_is_usage() {
        for argv in [
            vec!["prog"],
            vec!["prog", "--file"],
            vec!["prog", "--file", "a", "b"],
        ] {
            let len = argv.len();
            match parse_invocation(argv) {
                Err(FixtureError::Usage { argc }) => assert_eq!(argc, len),
                other => panic!("expected usage error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_mode_does_not_want_file() {
        let inv = parse_invocation(["prog", "--other", "somefile"]).unwrap();
        assert!(!inv.wants_file());
    }

    #[test]
    fn test_flag_match_is_exact() {
        for mode in ["--File", "--file ", "-file", "--files", "file"] {
            let inv = parse_invocation(["prog", mode, "x"]).unwrap();
            assert!(!inv.wants_file(), "{mode} should not enable file mode");
        }
    }

    #[test]
    fn test_help_and_escape_are_values() {
        let inv = parse_invocation(["prog", "--help", "--version"]).unwrap();
        assert_eq!(inv.mode, OsString::from("--help"));
        assert_eq!(inv.path, PathBuf::from("--version"));

        let inv = parse_invocation(["prog", "--", "-"]).unwrap();
        assert_eq!(inv.mode, OsString::from("--"));
        assert!(!inv.wants_file());
    }

    #[test]
    fn test_empty_arguments_are_accepted() {
        let inv = parse_invocation(["prog", "", ""]).unwrap();
        assert!(!inv.wants_file());
        assert_eq!(inv.path, PathBuf::new());
    }

    #[test]
    fn test_hyphen_path() {
        let inv = parse_invocation(["prog", "--file", "-n"]).unwrap();
        assert!(inv.wants_file());
        assert_eq!(inv.path(), Path::new("-n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments_are_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let mode = OsStr::from_bytes(b"--fil\xff");
        let path = OsStr::from_bytes(b"p\xfe");
        let inv = parse_invocation([OsStr::new("prog"), mode, path]).unwrap();
        assert!(!inv.wants_file());
        assert_eq!(inv.mode.as_bytes(), b"--fil\xff");
        assert_eq!(inv.path().as_os_str().as_bytes(), b"p\xfe");

        let inv = parse_invocation([OsStr::new("prog"), OsStr::new("--file"), path]).unwrap();
        assert!(inv.wants_file());
        assert_eq!(inv.path().as_os_str().as_bytes(), b"p\xfe");
    }
}
