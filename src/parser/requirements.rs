use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::Requirement;

/// Name, optional operator of up to two `=<>` characters, version token,
/// then anything.
const LINE_PATTERN: &str = r"(?i)^([a-z0-9_-]+)([=<>]{0,2})([a-z0-9._-]*).*?$";

/// A manifest line that does not start with a package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line_number: Option<usize>,
    pub line: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported format: {}", self.line)?;
        if let Some(n) = self.line_number {
            write!(f, " (line {})", n)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Parser for `requirements.txt` style manifests.
///
/// Handles `name`, `name==version` and `name<op>version` lines with `#`
/// comments. Only `==` pins keep their version; anything else is looked up
/// as the latest release.
pub struct SimpleRequirementParser {
    input_file_path: PathBuf,
    line_re: Regex,
}

impl SimpleRequirementParser {
    /// Create a parser for the manifest at `input_file_path`.
    ///
    /// The file is not touched until [`requirements`](super::RequirementParser::requirements)
    /// is called.
    pub fn new(input_file_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            input_file_path: input_file_path.into(),
            line_re: Regex::new(LINE_PATTERN)?,
        })
    }

    pub fn input_file_path(&self) -> &Path {
        &self.input_file_path
    }

    /// Parse a single, already comment-stripped line.
    pub fn parse_line(&self, line: &str) -> Result<Requirement, ParseError> {
        let caps = self.line_re.captures(line).ok_or_else(|| ParseError {
            line_number: None,
            line: line.to_string(),
        })?;

        let name = caps[1].to_string();
        let version = match &caps[2] {
            "==" => Some(caps[3].to_string()),
            _ => None,
        };

        Ok(Requirement::new(name, version))
    }
}

impl super::RequirementParser for SimpleRequirementParser {
    fn requirements(&self) -> Result<super::Requirements<'_>> {
        let file = File::open(&self.input_file_path).with_context(|| {
            format!(
                "failed to open requirements file {}",
                self.input_file_path.display()
            )
        })?;
        let path = self.input_file_path.display().to_string();

        let iter = BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(move |(idx, line)| {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        return Some(Err(anyhow::Error::new(e)
                            .context(format!("failed to read {} at line {}", path, idx + 1))))
                    }
                };

                let content = strip_comment(&line);
                if content.is_empty() {
                    return None;
                }

                Some(self.parse_line(content).map_err(|mut e| {
                    e.line_number = Some(idx + 1);
                    anyhow::Error::new(e)
                }))
            });

        Ok(Box::new(iter))
    }
}

/// Drop everything from the first `#` and trim surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or("").trim()
}
