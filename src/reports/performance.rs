//! Conversion, closed-amount, and visit-effectiveness reports.

use serde::Serialize;

use crate::core::coercion::{as_decimal, is_closed};
use crate::core::fields;
use crate::core::grouping::{group_by, tally_by};
use crate::core::parsing::Record;

use super::{name_or_na, visits_of};

/// Closed/total conversion for one employee or branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRow {
    pub name: String,
    pub total: usize,
    pub closed: usize,
    pub rate: f64,
}

pub fn conversion_by_employee(records: &[Record]) -> Vec<ConversionRow> {
    conversion_by(records, fields::EMPLOYEE)
}

pub fn conversion_by_branch(records: &[Record]) -> Vec<ConversionRow> {
    conversion_by(records, fields::BRANCH)
}

fn conversion_by(records: &[Record], field: &str) -> Vec<ConversionRow> {
    let mut rows: Vec<ConversionRow> = tally_by(records, |record| name_or_na(record, field))
        .into_iter()
        .map(|(name, tally)| ConversionRow {
            name,
            total: tally.total,
            closed: tally.closed,
            rate: tally.conversion_rate(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Sum of closed-deal amounts for one branch or employee. Only groups
/// with at least one closed lead appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosedAmountRow {
    pub name: String,
    pub amount: f64,
}

pub fn closed_amount_by_branch(records: &[Record]) -> Vec<ClosedAmountRow> {
    closed_amount_by(records, fields::BRANCH)
}

pub fn closed_amount_by_employee(records: &[Record]) -> Vec<ClosedAmountRow> {
    closed_amount_by(records, fields::EMPLOYEE)
}

fn closed_amount_by(records: &[Record], field: &str) -> Vec<ClosedAmountRow> {
    let closed = records
        .iter()
        .filter(|record| is_closed(record.raw(fields::LEAD_STATUS)));
    let mut rows: Vec<ClosedAmountRow> = group_by(closed, |record| name_or_na(record, field))
        .into_iter()
        .map(|(name, group)| ClosedAmountRow {
            name,
            amount: group
                .iter()
                .map(|record| as_decimal(record.raw(fields::CLOSED_AMOUNT)).unwrap_or(0.0))
                .sum(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Lead outcomes bucketed by completed-visit count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitConversionRow {
    pub visits: i64,
    pub total: usize,
    pub closed: usize,
    pub rate: f64,
}

pub fn visit_conversion(records: &[Record]) -> Vec<VisitConversionRow> {
    let mut rows: Vec<VisitConversionRow> = tally_by(records, visits_of)
        .into_iter()
        .map(|(visits, tally)| VisitConversionRow {
            visits,
            total: tally.total,
            closed: tally.closed,
            rate: tally.conversion_rate(),
        })
        .collect();
    rows.sort_by_key(|row| row.visits);
    rows
}
