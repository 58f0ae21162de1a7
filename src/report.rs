use anyhow::Context;
use colored::Colorize;
use csv::WriterBuilder;
use itertools::Itertools;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;

use crate::sampler::NameRecord;
use crate::selector::SelectorState;

/// One row of an exported sample.
#[derive(Debug, Serialize)]
pub struct SelectedNameRow<'a> {
    pub rank: usize,
    pub first: &'a str,
    pub last: &'a str,
}

/// Numbered lines, `1. Ann Lee` onwards.
pub fn numbered_names(names: &[NameRecord]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}. {}", i + 1, n))
        .join("\n")
}

pub fn render_state(state: &SelectorState) -> String {
    match state {
        SelectorState::Idle => format!("{}", "Upload a CSV or TSV file".dimmed()),
        SelectorState::Error(msg) => format!("{}", msg.red()),
        SelectorState::Sampled(names) => {
            format!("{}\n{}", "Selected Names:".bold(), numbered_names(names))
        }
    }
}

/// Write the sample to a new csv file. An existing file is never overwritten.
pub fn write_selection_csv(file_path: &Path, names: &[NameRecord]) -> anyhow::Result<()> {
    let output_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_path)
        .with_context(|| format!("when accessing output file {}", file_path.display()))?;

    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_writer(output_file);

    for (i, n) in names.iter().enumerate() {
        wtr.serialize(SelectedNameRow {
            rank: i + 1,
            first: n.first(),
            last: n.last(),
        })
        .with_context(|| format!("writing to {}", file_path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("writing to {}", file_path.display()))?;

    Ok(())
}

/******************************************************************************/
/* Tests                                                                      */
/******************************************************************************/
