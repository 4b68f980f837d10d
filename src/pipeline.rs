//! Processing pipeline
//!
//! Orchestrates the complete run: stream expense records from the input CSV,
//! build a meeting, feed every record through the aggregate, then write the
//! requested report. Recoverable per-record problems (parse failures,
//! rejected expenses) go to stderr and processing continues; only conditions
//! that make the whole run meaningless are fatal.

use crate::cli::ReportKind;
use crate::core::Meeting;
use crate::io::csv_format::{write_balances_csv, write_summary_csv, write_transfers_csv};
use crate::io::sync_reader::SyncReader;
use crate::types::{ExpenseRecord, MemberName};
use chrono::{Local, NaiveDate};
use std::io::Write;
use std::path::Path;

/// Process an expense CSV and write the requested report
///
/// When `members` is None the roster is derived from the records themselves:
/// every payer and applied name, in first-seen order. The meeting's date
/// range is taken from the earliest and latest expense dates, falling back
/// to today for an input with no valid records.
///
/// # Error Handling
///
/// Fatal errors (file not found, invalid roster) are returned immediately.
/// Individual record errors are logged to stderr and processing continues.
pub fn process(
    input_path: &Path,
    members: Option<Vec<MemberName>>,
    meeting_name: &str,
    report: ReportKind,
    output: &mut dyn Write,
) -> Result<(), String> {
    let reader = SyncReader::new(input_path)?;

    let mut records: Vec<ExpenseRecord> = Vec::new();
    for result in reader {
        match result {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("CSV parsing error: {}", e),
        }
    }

    let roster = match members {
        Some(roster) => roster,
        None => derive_roster(&records),
    };

    let (start_date, end_date) = date_range(&records);

    let mut meeting = Meeting::new(meeting_name, start_date, end_date, roster)
        .map_err(|e| format!("Invalid meeting: {}", e))?;

    for record in records {
        let description = record.description.clone();
        if let Err(e) = meeting.add_expense(record) {
            eprintln!("Rejected expense '{}': {}", description, e);
        }
    }

    let view = meeting.compute_settlement();

    match report {
        ReportKind::Balances => write_balances_csv(&view.per_member, output)?,
        ReportKind::Transfers => write_transfers_csv(&view.transfers, output)?,
        ReportKind::Summary => write_summary_csv(&view, output)?,
    }

    Ok(())
}

/// Derive a roster from the records themselves, in first-seen order
///
/// The payer is seen before the applied members of the same record. Blank
/// names never enter the roster; records carrying them are rejected later at
/// the aggregate boundary.
fn derive_roster(records: &[ExpenseRecord]) -> Vec<MemberName> {
    let mut roster: Vec<MemberName> = Vec::new();
    let note = |name: &str, roster: &mut Vec<MemberName>| {
        if !name.trim().is_empty() && !roster.iter().any(|m| m == name) {
            roster.push(name.to_string());
        }
    };
    for record in records {
        note(&record.payer, &mut roster);
        for name in &record.applied_to {
            note(name, &mut roster);
        }
    }
    roster
}

/// Earliest and latest expense dates, or today twice for an empty input
fn date_range(records: &[ExpenseRecord]) -> (NaiveDate, NaiveDate) {
    let start = records.iter().map(|r| r.date).min();
    let end = records.iter().map(|r| r.date).max();
    match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            let today = Local::now().date_naive();
            (today, today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const HEADER: &str = "date,description,amount,payer,applied_to,memo\n";

    fn run(
        content: &str,
        members: Option<Vec<String>>,
        report: ReportKind,
    ) -> Result<String, String> {
        let file = create_temp_csv(content);
        let mut output = Vec::new();
        process(file.path(), members, "meeting", report, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn roster(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_process_writes_transfer_plan() {
        let content = format!("{}2026-03-01,dinner,3000,A,A;B;C,\n", HEADER);
        let output = run(&content, roster(&["A", "B", "C"]), ReportKind::Transfers).unwrap();
        assert_eq!(output, "from,to,amount\nB,A,1000\nC,A,1000\n");
    }

    #[test]
    fn test_process_writes_balances() {
        let content = format!("{}2026-03-01,dinner,3000,A,A;B;C,\n", HEADER);
        let output = run(&content, roster(&["A", "B", "C"]), ReportKind::Balances).unwrap();
        assert_eq!(
            output,
            "member,paid,owed,balance\n\
             A,3000.00,1000.00,2000.00\n\
             B,0.00,1000.00,-1000.00\n\
             C,0.00,1000.00,-1000.00\n"
        );
    }

    #[test]
    fn test_process_writes_summary() {
        let content = format!("{}2026-03-01,dinner,3000,A,A;B;C,\n", HEADER);
        let output = run(&content, roster(&["A", "B", "C"]), ReportKind::Summary).unwrap();
        assert_eq!(
            output,
            "total_expenses,total_splits,consistent\n3000.00,3000.00,true\n"
        );
    }

    #[test]
    fn test_process_derives_roster_in_first_seen_order() {
        let content = format!(
            "{}2026-03-01,dinner,3000,X,X;Y;Z,\n\
             2026-03-02,taxi,600,Y,Y;Z,\n",
            HEADER
        );
        let output = run(&content, None, ReportKind::Balances).unwrap();
        let names: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_process_skips_malformed_and_rejected_records() {
        let content = format!(
            "{}2026-03-01,dinner,3000,A,A;B,\n\
             not-a-date,taxi,600,A,A;B,\n\
             2026-03-02,ghost,500,Nobody,A;B,\n",
            HEADER
        );
        let output = run(&content, roster(&["A", "B"]), ReportKind::Summary).unwrap();
        // only the valid dinner expense survives
        assert_eq!(
            output,
            "total_expenses,total_splits,consistent\n3000.00,3000.00,true\n"
        );
    }

    #[test]
    fn test_process_empty_input_yields_empty_reports() {
        let output = run(HEADER, None, ReportKind::Transfers).unwrap();
        assert_eq!(output, "from,to,amount\n");

        let balances = run(HEADER, None, ReportKind::Balances).unwrap();
        assert_eq!(balances, "member,paid,owed,balance\n");
    }

    #[test]
    fn test_process_missing_file_is_fatal() {
        let mut output = Vec::new();
        let result = process(
            Path::new("nonexistent.csv"),
            None,
            "meeting",
            ReportKind::Transfers,
            &mut output,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_process_duplicate_roster_is_fatal() {
        let content = format!("{}2026-03-01,dinner,3000,A,A;B,\n", HEADER);
        let result = run(&content, roster(&["A", "A"]), ReportKind::Transfers);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid meeting"));
    }
}
