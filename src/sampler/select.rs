use std::path::Path;

use super::error::SelectError;
use super::io::{classify_extension, read_text};
use super::name::{parse_names_with_minimum, NameRecord, MINIMUM_NAMES};
use super::sample::{sample_unique, RandomIndex};

/// The full upload pathway: classify, read, parse, sample.
///
/// The file kind is checked before `read` is called, so an unsupported file is never read. The
/// file must hold at least `MINIMUM_NAMES` valid names, and at least `k` when more are asked for.
pub fn select_names<F, R>(
    filename: &str,
    read: F,
    k: usize,
    rng: &mut R,
) -> Result<Vec<NameRecord>, SelectError>
where
    F: FnOnce() -> Result<String, SelectError>,
    R: RandomIndex + ?Sized,
{
    let kind = classify_extension(filename).ok_or(SelectError::UnsupportedFileType)?;
    let text = read()?;
    let names = parse_names_with_minimum(&text, kind.delimiter(), k.max(MINIMUM_NAMES))?;

    sample_unique(&names, k, rng)
}

/// `select_names` for a file on disk, classified by its file name.
pub fn select_names_from_path<R>(
    file_path: &Path,
    k: usize,
    rng: &mut R,
) -> Result<Vec<NameRecord>, SelectError>
where
    R: RandomIndex + ?Sized,
{
    let filename = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    select_names(&filename, || read_text(file_path), k, rng)
}

/******************************************************************************/
/* Tests                                                                      */
/******************************************************************************/
