//! CSV format handling for expense records and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Report serialization (balances, transfers, summary)
//!
//! All functions are pure (no I/O beyond the passed writer) for easy testing.

use crate::types::{ExpenseRecord, MemberBalance, SettlementView, Transfer};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// date, description, amount, payer, applied_to, memo
///
/// `applied_to` is a `;`-separated list of member names. The memo column is
/// optional and may be empty or absent entirely.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub payer: String,
    pub applied_to: String,
    pub memo: Option<String>,
}

/// Convert a CsvRecord to an ExpenseRecord
///
/// This function:
/// - Parses the date string as `YYYY-MM-DD`
/// - Parses the amount string into whole currency units
/// - Splits the applied_to column on `;`, trimming each name
/// - Normalizes an empty memo to None
///
/// Structural rules (positive amount, non-empty applied list, roster
/// membership) are NOT checked here; the meeting aggregate enforces those.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<ExpenseRecord, String> {
    let date = NaiveDate::parse_from_str(csv_record.date.trim(), "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid date '{}' for expense '{}'",
            csv_record.date, csv_record.description
        )
    })?;

    let amount: i64 = csv_record.amount.trim().parse().map_err(|_| {
        format!(
            "Invalid amount '{}' for expense '{}'",
            csv_record.amount, csv_record.description
        )
    })?;

    let applied_to: Vec<String> = csv_record
        .applied_to
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    let memo = csv_record
        .memo
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    Ok(ExpenseRecord {
        date,
        description: csv_record.description,
        amount,
        payer: csv_record.payer,
        applied_to,
        memo,
    })
}

/// Format a decimal amount with two decimal places
///
/// Rounds to two places first and collapses negative zero so a balance like
/// -0.004 prints as "0.00" rather than "-0.00".
fn fmt_amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded == Decimal::ZERO {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Write per-member balances to CSV format
///
/// Columns: member, paid, owed, balance. Rows are in roster order.
pub fn write_balances_csv(
    per_member: &[MemberBalance],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["member", "paid", "owed", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for entry in per_member {
        writer
            .write_record(&[
                entry.name.clone(),
                fmt_amount(entry.paid),
                fmt_amount(entry.owed),
                fmt_amount(entry.balance),
            ])
            .map_err(|e| format!("Failed to write balance record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write the transfer plan to CSV format
///
/// Columns: from, to, amount. Rows are in resolver emission order, which is
/// already deterministic; no re-sorting here.
pub fn write_transfers_csv(transfers: &[Transfer], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["from", "to", "amount"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transfer in transfers {
        writer
            .write_record(&[
                transfer.from.clone(),
                transfer.to.clone(),
                transfer.amount.to_string(),
            ])
            .map_err(|e| format!("Failed to write transfer record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write the settlement summary to CSV format
///
/// Columns: total_expenses, total_splits, consistent. Always exactly one
/// data row.
pub fn write_summary_csv(view: &SettlementView, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["total_expenses", "total_splits", "consistent"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record(&[
            fmt_amount(view.total_expenses),
            fmt_amount(view.total_splits),
            view.consistent.to_string(),
        ])
        .map_err(|e| format!("Failed to write summary record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
