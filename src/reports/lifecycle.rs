//! Lead lifecycle reports: time-to-close, follow-up frequency, pipeline
//! status counts.

use serde::Serialize;

use crate::core::coercion::{as_date, days_between, is_closed, is_present};
use crate::core::fields;
use crate::core::grouping::{count_by, group_by, round2};
use crate::core::parsing::Record;

use super::name_or_na;

/// Mean whole-day span between intake timestamp and close date, over
/// closed leads with valid, positive spans. `average_days` is `None` when
/// no lead qualifies — the caller renders that as "no data", not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeToClose {
    pub average_days: Option<f64>,
    pub samples: usize,
}

pub fn time_to_close(records: &[Record]) -> TimeToClose {
    let mut total_days = 0i64;
    let mut samples = 0usize;

    for record in records
        .iter()
        .filter(|record| is_closed(record.raw(fields::LEAD_STATUS)))
    {
        let start = as_date(record.raw(fields::TIMESTAMP));
        let end = as_date(record.raw(fields::DATE_CLOSED));
        let (Some(start), Some(end)) = (start, end) else {
            continue;
        };
        let days = days_between(start, end);
        if days > 0 {
            total_days += days;
            samples += 1;
        }
    }

    TimeToClose {
        average_days: (samples > 0).then(|| round2(total_days as f64 / samples as f64)),
        samples,
    }
}

/// How many follow-up fields an employee's leads have filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUpRow {
    pub employee: String,
    pub follow_ups: usize,
}

pub fn follow_up_frequency(records: &[Record], follow_up_fields: &[String]) -> Vec<FollowUpRow> {
    let mut rows: Vec<FollowUpRow> = group_by(records, |record| {
        name_or_na(record, fields::EMPLOYEE)
    })
    .into_iter()
    .map(|(employee, group)| FollowUpRow {
        employee,
        follow_ups: group
            .iter()
            .map(|record| {
                follow_up_fields
                    .iter()
                    .filter(|field| is_present(record.raw(field)))
                    .count()
            })
            .sum(),
    })
    .collect();
    rows.sort_by(|a, b| a.employee.cmp(&b.employee));
    rows
}

/// Lead count per raw pipeline status; placeholder statuses bucket under
/// "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

pub fn pipeline_health(records: &[Record]) -> Vec<StatusCount> {
    let mut rows: Vec<StatusCount> = count_by(records, |record| {
        name_or_na(record, fields::LEAD_STATUS)
    })
    .into_iter()
    .map(|(status, count)| StatusCount { status, count })
    .collect();
    rows.sort_by(|a, b| a.status.cmp(&b.status));
    rows
}
