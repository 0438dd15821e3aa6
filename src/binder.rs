use crate::analyzer::{average_line_length, find_longest_line, sort_by_sequence};
use crate::config::Config;
use crate::error::BindError;
use crate::record::RecordParser;
use crate::reporter::Reporter;
use std::fs;
use std::path::{Path, PathBuf};

/// Runs the per-file pipeline: existence check, read, parse, stats, sort,
/// write. One `Binder` serves a whole batch; it holds no per-file state.
pub struct Binder {
    parser: RecordParser,
    reporter: Reporter,
}

impl Binder {
    pub fn new(config: Config) -> Self {
        Self {
            parser: RecordParser::new(config.delimiter),
            reporter: Reporter::new(config.output_dir),
        }
    }

    /// Binds one library file into its summary, returning the path written.
    pub fn bind(&self, input: &Path) -> Result<PathBuf, BindError> {
        if !input.exists() {
            return Err(BindError::MissingFile {
                path: input.to_path_buf(),
            });
        }

        let source = fs::read_to_string(input).map_err(|source| BindError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        let records = self
            .parser
            .parse(&source)
            .map_err(|source| BindError::MalformedLine {
                path: input.to_path_buf(),
                source,
            })?;

        let average = average_line_length(&records).map_err(|_| BindError::EmptyInput {
            path: input.to_path_buf(),
        })?;
        let longest = find_longest_line(&records)
            .map_err(|_| BindError::EmptyInput {
                path: input.to_path_buf(),
            })?
            .clone();
        let sorted = sort_by_sequence(records);

        self.reporter
            .write_summary(input, &longest, average, &sorted)
    }
}

/// Outcome counts for one driver run. A failing file never stops the batch;
/// it just lands in the right bucket here.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Result<PathBuf, BindError>) {
        match outcome {
            Ok(_) => self.written += 1,
            Err(BindError::MissingFile { .. }) => self.missing += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn print_summary(&self) {
        println!("\n📊 Run summary");
        println!("  Summaries written: {}", self.written);
        println!("  Missing inputs:    {}", self.missing);
        println!("  Failed inputs:     {}", self.failed);
    }
}
