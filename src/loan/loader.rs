//! Load batches of loan terms from CSV
//!
//! Expected header: `principal,annual_rate_percent,term_years`

use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use super::LoanTerms;
use crate::error::{LoanError, Result};

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct CsvRow {
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
}

impl CsvRow {
    fn to_terms(self) -> Result<LoanTerms> {
        LoanTerms::new(self.principal, self.annual_rate_percent, self.term_years)
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LoanTerms>> {
    read_loans(Reader::from_path(path)?)
}

/// Load loans from any reader (e.g., string buffer, stdin)
pub fn load_loans_from_reader<R: Read>(reader: R) -> Result<Vec<LoanTerms>> {
    read_loans(Reader::from_reader(reader))
}

fn read_loans<R: Read>(mut reader: Reader<R>) -> Result<Vec<LoanTerms>> {
    let headers = reader.headers()?.clone();
    let mut loans = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let terms = record
            .deserialize::<CsvRow>(Some(&headers))
            .map_err(LoanError::from)
            .and_then(CsvRow::to_terms)
            .map_err(|source| LoanError::Row {
                line,
                source: Box::new(source),
            })?;

        loans.push(terms);
    }

    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_loans_from_reader() {
        let data = "principal,annual_rate_percent,term_years\n\
                    400000,6.5,30\n\
                    100000,0,10\n\
                    200000,4,15\n";

        let loans = load_loans_from_reader(data.as_bytes()).unwrap();
        assert_eq!(loans.len(), 3);
        assert_eq!(loans[0].principal, 400_000.0);
        assert_eq!(loans[1].annual_rate_percent, 0.0);
        assert_eq!(loans[2].term_years, 15);
    }

    #[test]
    fn test_invalid_row_reports_line() {
        let data = "principal,annual_rate_percent,term_years\n\
                    400000,6.5,30\n\
                    -5,6.5,30\n";

        match load_loans_from_reader(data.as_bytes()) {
            Err(LoanError::Row { line, source }) => {
                assert_eq!(line, 3);
                assert!(matches!(*source, LoanError::InvalidPrincipal(_)));
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_row_reports_line() {
        let data = "principal,annual_rate_percent,term_years\n\
                    400000,six,30\n";

        match load_loans_from_reader(data.as_bytes()) {
            Err(LoanError::Row { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, LoanError::Csv(_)));
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sample_file() {
        let loans = load_loans("data/sample_loans.csv").unwrap();
        assert!(!loans.is_empty());
        assert!(loans.iter().all(|l| l.validate().is_ok()));
    }
}
