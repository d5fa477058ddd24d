//! Output handling for reports.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Process exit codes
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall score is below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_MIN_SCORE, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_output_target_from_option() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
        let path = PathBuf::from("report.md");
        match OutputTarget::from_option(Some(path.clone())) {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("Expected File variant"),
        }
        assert!(!OutputTarget::File(path).is_terminal());
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_should_use_color_without_flag() {
        let expected = std::env::var("NO_COLOR").is_err();
        assert_eq!(should_use_color(false), expected);
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_write_output_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.txt");
        let err = write_output("x", &OutputTarget::File(path), true).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write output to"));
    }
}
