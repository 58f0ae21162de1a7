use csv::{ReaderBuilder, Terminator};
use getset::Getters;
use std::fmt;

use super::error::SelectError;

/// The smallest number of valid names a file must hold.
pub const MINIMUM_NAMES: usize = 10;

/******************************************************************************/
/* Name record                                                                */
/******************************************************************************/

/// A validated first/last name pair taken from one data row. Both parts are trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct NameRecord {
    #[getset(get = "pub")]
    first: String,
    #[getset(get = "pub")]
    last: String,
}

impl NameRecord {
    /// Trims both parts, returning `None` when either ends up empty.
    pub fn new(first: &str, last: &str) -> Option<Self> {
        let first = first.trim();
        let last = last.trim();

        if first.is_empty() || last.is_empty() {
            None
        } else {
            Some(NameRecord {
                first: first.to_string(),
                last: last.to_string(),
            })
        }
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/******************************************************************************/
/* Parsing                                                                    */
/******************************************************************************/

/// Parse names, requiring at least `MINIMUM_NAMES` valid rows.
pub fn parse_names(raw_text: &str, delimiter: u8) -> Result<Vec<NameRecord>, SelectError> {
    parse_names_with_minimum(raw_text, delimiter, MINIMUM_NAMES)
}

/// Parse every data row of `raw_text` into a `NameRecord`.
///
/// The first line is always a header and is dropped whatever it contains. Of the remaining
/// lines, the first field is the first name and the second field the last name; further fields
/// are ignored. Rows that are blank or that lack either part are skipped silently. Quotes carry
/// no meaning. The whole parse fails only when fewer than `minimum` rows survive.
pub fn parse_names_with_minimum(
    raw_text: &str,
    delimiter: u8,
    minimum: usize,
) -> Result<Vec<NameRecord>, SelectError> {
    let body = raw_text.splitn(2, '\n').nth(1).unwrap_or("");

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quoting(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(body.as_bytes());

    let mut names = vec![];
    for result in rdr.records() {
        let row = result.map_err(|_| SelectError::MalformedInput)?;
        let first = row.get(0).unwrap_or("");
        let last = row.get(1).unwrap_or("");

        if let Some(name) = NameRecord::new(first, last) {
            names.push(name);
        }
    }

    if names.len() < minimum {
        Err(SelectError::InsufficientRecords {
            minimum,
            found: names.len(),
        })
    } else {
        Ok(names)
    }
}

/******************************************************************************/
/* Tests                                                                      */
/******************************************************************************/
#[cfg(test)]
mod test {
    use super::*;

    const TEN_NAMES: &str = "FirstName,LastName
Ann,Lee
Bob,Kim
Cid,Wu
Dan,Oh
Eve,Ng
Fay,Ho
Gus,Ma
Hal,Su
Ira,Po
Joy,Ta
";

    fn rows(n: usize, delimiter: char) -> String {
        (0..n)
            .map(|i| format!("First{}{}Last{}\n", i, delimiter, i))
            .collect()
    }

    #[test]
    fn record_trims_and_rejects_empty_parts() {
        let n = NameRecord::new("  Ann ", "\tLee\r").unwrap();
        assert_eq!(n.first(), "Ann");
        assert_eq!(n.last(), "Lee");
        assert_eq!(n.to_string(), "Ann Lee");

        assert_eq!(NameRecord::new("Ann", "   "), None);
        assert_eq!(NameRecord::new("", "Lee"), None);
    }

    #[test]
    fn ten_names_parse() {
        let names = parse_names(TEN_NAMES, b',').unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], NameRecord::new("Ann", "Lee").unwrap());
        assert_eq!(names[9], NameRecord::new("Joy", "Ta").unwrap());
    }

    #[test]
    fn header_is_never_a_record() {
        let text = format!("Zed,Zulu\n{}", rows(10, ','));
        let names = parse_names(&text, b',').unwrap();
        assert_eq!(names.len(), 10);
        assert!(names.iter().all(|n| n.first() != "Zed"));
    }

    #[test]
    fn blank_first_line_is_still_the_header() {
        let text = format!("\n{}", rows(10, ','));
        let names = parse_names(&text, b',').unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0].first(), "First0");
    }

    #[test]
    fn minimum_count_boundary() {
        let nine = format!("h\n{}", rows(9, ','));
        assert_eq!(
            parse_names(&nine, b','),
            Err(SelectError::InsufficientRecords {
                minimum: 10,
                found: 9
            })
        );

        let ten = format!("h\n{}", rows(10, ','));
        assert_eq!(parse_names(&ten, b',').unwrap().len(), 10);

        let eleven = format!("h\n{}", rows(11, ','));
        assert_eq!(parse_names(&eleven, b',').unwrap().len(), 11);

        let many = format!("h\n{}", rows(250, ','));
        assert_eq!(parse_names(&many, b',').unwrap().len(), 250);
    }

    #[test]
    fn blank_and_half_empty_rows_do_not_count() {
        let text = format!(
            "h\n{}\n   \n\t\nOnly,\n,Last\n  ,  \nNoDelimiter\n",
            rows(9, ',')
        );
        assert_eq!(
            parse_names(&text, b','),
            Err(SelectError::InsufficientRecords {
                minimum: 10,
                found: 9
            })
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = format!("h\nAnn,Lee,extra,more\n{}", rows(9, ','));
        let names = parse_names(&text, b',').unwrap();
        assert_eq!(names[0], NameRecord::new("Ann", "Lee").unwrap());
    }

    #[test]
    fn quotes_are_literal() {
        let text = format!("h\n\"Lee, Ann\",Kim\n{}", rows(9, ','));
        let names = parse_names(&text, b',').unwrap();
        assert_eq!(names[0].first(), "\"Lee");
        assert_eq!(names[0].last(), "Ann\"");
    }

    #[test]
    fn tab_delimited() {
        let text = format!("First\tLast\n{}", rows(10, '\t'));
        let names = parse_names(&text, b'\t').unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[3], NameRecord::new("First3", "Last3").unwrap());

        // Commas are plain text in a tab-delimited file.
        assert!(parse_names(&rows(11, ','), b'\t').is_err());
    }

    #[test]
    fn crlf_line_endings() {
        let text = TEN_NAMES.replace('\n', "\r\n");
        let names = parse_names(&text, b',').unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[4].last(), "Ng");
    }

    #[test]
    fn empty_and_header_only_input() {
        assert!(parse_names("", b',').is_err());
        assert!(parse_names("FirstName,LastName", b',').is_err());
        assert_eq!(parse_names_with_minimum("", b',', 0), Ok(vec![]));
    }

    #[test]
    fn custom_minimum() {
        let text = format!("h\n{}", rows(3, ','));
        assert_eq!(parse_names_with_minimum(&text, b',', 3).unwrap().len(), 3);
        assert_eq!(
            parse_names_with_minimum(&text, b',', 4),
            Err(SelectError::InsufficientRecords {
                minimum: 4,
                found: 3
            })
        );
    }
}
