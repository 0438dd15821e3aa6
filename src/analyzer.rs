use crate::error::EmptyInput;
use crate::record::Record;

/// Integer part of the mean trimmed-line length, truncated toward zero.
pub fn average_line_length(records: &[Record]) -> Result<usize, EmptyInput> {
    if records.is_empty() {
        return Err(EmptyInput);
    }
    let total: usize = records.iter().map(|r| r.length).sum();
    Ok(total / records.len())
}

/// The record with the greatest length; ties go to the largest sequence
/// number among the maximum-length group.
pub fn find_longest_line(records: &[Record]) -> Result<&Record, EmptyInput> {
    records
        .iter()
        .reduce(|best, record| {
            if record.length > best.length
                || (record.length == best.length && record.sequence > best.sequence)
            {
                record
            } else {
                best
            }
        })
        .ok_or(EmptyInput)
}

/// Stable ascending sort on the sequence number; equal keys keep their
/// original file order. This fixes the line order of the output body.
pub fn sort_by_sequence(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|r| r.sequence);
    records
}
