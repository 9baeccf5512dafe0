use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Program text
///
/// Each line is held as its canonical text, without the line number.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, String>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, line_number: LineNumber) -> Option<&str> {
        self.source.get(&line_number).map(String::as_str)
    }

    /// Stores a numbered line. A line with nothing after its number deletes.
    pub fn edit_text(&mut self, line: &Line) -> Result<()> {
        let line_number = match line.number() {
            Some(n) => n,
            None => return Err(error!(InternalError; "LINE NUMBER EXPECTED")),
        };
        self.store(line_number, line)
    }

    fn store(&mut self, line_number: LineNumber, line: &Line) -> Result<()> {
        if line.is_empty() {
            match self.source.remove(&line_number) {
                Some(_) => Ok(()),
                None => Err(error!(UndefinedLine; format!("LINE {} NOT FOUND", line_number))),
            }
        } else {
            self.source.insert(line_number, line.text());
            Ok(())
        }
    }

    /// Replaces the whole program. Blank lines are skipped and a line
    /// without a number is numbered ten past the one before it.
    pub fn set_text<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<usize> {
        self.clear();
        let mut line_number: LineNumber = 0;
        for text in lines {
            let text = text.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            let line = Line::new(text)?;
            line_number = match line.number() {
                Some(n) => n,
                None => match line_number.checked_add(10) {
                    Some(n) => n,
                    None => {
                        return Err(error!(Overflow; format!("NO LINE NUMBER AFTER {}", line_number)))
                    }
                },
            };
            self.store(line_number, &line)?;
        }
        Ok(self.source.len())
    }

    pub fn line_table(&self) -> Vec<LineNumber> {
        self.source.keys().copied().collect()
    }

    /// Every line that starts with `NAME:`, mapped to its line number.
    pub fn labels(&self) -> HashMap<String, LineNumber> {
        self.source
            .iter()
            .filter_map(|(number, text)| {
                let line = Line::new(text).ok()?;
                line.label().map(|label| (label.to_string(), *number))
            })
            .collect()
    }

    /// `"number text"` for every line in the inclusive range.
    pub fn program_text(&self, start: Option<LineNumber>, end: Option<LineNumber>) -> Vec<String> {
        let start = start.unwrap_or_else(LineNumber::min_value);
        let end = end.unwrap_or_else(LineNumber::max_value);
        if start > end {
            return vec![];
        }
        self.source
            .range(start..=end)
            .map(|(number, text)| format!("{} {}", number, text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(listing: &mut Listing, s: &str) -> Result<()> {
        listing.edit_text(&Line::new(s)?)
    }

    #[test]
    fn test_edit_and_delete() {
        let mut listing = Listing::default();
        edit(&mut listing, "20 print \"b\"").unwrap();
        edit(&mut listing, "10 print \"a\"").unwrap();
        assert_eq!(listing.line_table(), vec![10, 20]);
        assert_eq!(listing.get(20), Some("PRINT \"b\""));
        edit(&mut listing, "20").unwrap();
        assert_eq!(listing.line_table(), vec![10]);
        assert_eq!(edit(&mut listing, "20").unwrap_err().code(), 8);
    }

    #[test]
    fn test_set_text_numbers_missing_lines() {
        let mut listing = Listing::default();
        edit(&mut listing, "999 END").unwrap();
        let n = listing
            .set_text(&["print 1", "", "  ", "100 print 2", "print 3"])
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(listing.line_table(), vec![10, 100, 110]);
    }

    #[test]
    fn test_set_text_numbering_overflow() {
        let mut listing = Listing::default();
        let e = listing
            .set_text(&["9223372036854775807 print 1", "print 2"])
            .unwrap_err();
        assert_eq!(
            e.to_string(),
            "OVERFLOW; NO LINE NUMBER AFTER 9223372036854775807"
        );
    }

    #[test]
    fn test_labels() {
        let mut listing = Listing::default();
        edit(&mut listing, "10 top: print 1").unwrap();
        edit(&mut listing, "20 goto top").unwrap();
        let labels = listing.labels();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("TOP"), Some(&10));
    }

    #[test]
    fn test_program_text_range() {
        let mut listing = Listing::default();
        for s in &["10 A=1", "20 A=2", "30 A=3"] {
            edit(&mut listing, s).unwrap();
        }
        assert_eq!(
            listing.program_text(Some(15), Some(30)),
            vec!["20 A = 2", "30 A = 3"]
        );
        assert_eq!(listing.program_text(None, None).len(), 3);
        assert!(listing.program_text(Some(30), Some(10)).is_empty());
    }
}
