use serde::Deserialize;
use std::io::Read;

/// One data row of a roster file, tagged with its line in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RosterRow {
    pub(crate) line: u64,
    pub(crate) kind: String,
    pub(crate) name: String,
    pub(crate) detail: String,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    kind: String,
    name: String,
    detail: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let mut record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        while record.len() < headers.len() {
            record.push_field("");
        }
        let raw: RawRow = record.deserialize(Some(&headers))?;

        rows.push(RosterRow {
            line,
            kind: raw.kind.to_ascii_lowercase(),
            name: raw.name,
            detail: raw.detail,
        });
    }

    Ok(rows)
}

/// Splits a position's `a;b;c` skill list, ignoring blanks.
pub(crate) fn skill_list(detail: &str) -> Vec<&str> {
    detail
        .split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .collect()
}
