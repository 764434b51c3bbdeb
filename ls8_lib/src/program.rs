use std::error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use pest::error::{Error as PestError, LineColLocation};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "program.pest"]
struct ProgramParser;

#[derive(Debug)]
pub enum LoaderError {
    Io(PathBuf, std::io::Error),
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoaderError::Io(path, e) => {
                write!(f, "could not read program '{}': {}", path.display(), e)
            }
            LoaderError::Syntax {
                line,
                column,
                message,
            } => write!(
                f,
                "syntax error at line {}, column {}: {}",
                line, column, message
            ),
        }
    }
}

impl error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<PestError<Rule>> for LoaderError {
    fn from(err: PestError<Rule>) -> LoaderError {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(position) => position,
            LineColLocation::Span(start, _) => start,
        };

        LoaderError::Syntax {
            line,
            column,
            message: err.variant.message().into_owned(),
        }
    }
}

/*
 * Program
 * Memory image read from the text format: one binary byte per line, lines
 * starting with '#' and blank lines are ignored, anything after a '#'
 * following a byte is a comment.
 */
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    pub fn from_bytes(bytes: Vec<u8>) -> Program {
        Program { bytes }
    }

    pub fn from_file(path: &Path) -> Result<Program, LoaderError> {
        let source =
            fs::read_to_string(path).map_err(|e| LoaderError::Io(path.to_path_buf(), e))?;

        Program::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Program, LoaderError> {
        let pairs = ProgramParser::parse(Rule::program, source)?;
        let mut bytes: Vec<u8> = Vec::new();

        for pair in pairs.flatten().filter(|p| p.as_rule() == Rule::byte) {
            let byte = u8::from_str_radix(pair.as_str(), 2).map_err(|e| {
                let (line, column) = pair.line_col();
                LoaderError::Syntax {
                    line,
                    column,
                    message: e.to_string(),
                }
            })?;
            bytes.push(byte);
        }

        Ok(Program { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
