use crate::error::BindError;
use crate::record::Record;
use std::fs;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_book.txt";

/// First three characters of the input stem, uppercased. This heads the
/// summary file and may be shorter than three characters.
fn header_prefix(stem: &str) -> String {
    stem.chars().take(3).collect::<String>().to_uppercase()
}

/// The header prefix padded with 'X' to exactly three characters; names the
/// output file. Truncates back to three if uppercasing expanded a character.
fn file_prefix(header: &str) -> String {
    let mut prefix: String = header.chars().take(3).collect();
    while prefix.chars().count() < 3 {
        prefix.push('X');
    }
    prefix
}

/// Formats and persists one summary file per bound input.
pub struct Reporter {
    output_dir: Option<PathBuf>,
}

impl Reporter {
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    /// Writes the summary for `input`, overwriting any existing file, and
    /// returns the path written.
    pub fn write_summary(
        &self,
        input: &Path,
        longest: &Record,
        average: usize,
        sorted: &[Record],
    ) -> Result<PathBuf, BindError> {
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let header = header_prefix(stem);
        let file_name = format!("{}{}", file_prefix(&header), OUTPUT_SUFFIX);
        let output = match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };

        let mut content = String::new();
        content.push_str(&header);
        content.push('\n');
        content.push_str(&format!(
            "Longest line ({}): {}\n",
            longest.sequence, longest.text
        ));
        content.push_str(&format!("Average length: {}\n", average));
        for record in sorted {
            content.push_str(&record.text);
            content.push('\n');
        }

        fs::write(&output, content).map_err(|source| BindError::Io {
            path: output.clone(),
            source,
        })?;

        Ok(output)
    }
}
