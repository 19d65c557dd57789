//! Customer demographic breakdowns: job category, age and income bands,
//! geography, family status.

use serde::Serialize;

use crate::core::coercion::is_present;
use crate::core::fields;
use crate::core::grouping::{count_by, AgeBand, IncomeBand};
use crate::core::parsing::Record;

use super::name_or_na;

/// Lead count for one raw category value (job category, district,
/// pincode). Placeholder values bucket under "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

pub fn job_category_counts(records: &[Record]) -> Vec<CategoryCount> {
    category_counts(records, fields::JOB_CATEGORY)
}

pub fn district_counts(records: &[Record]) -> Vec<CategoryCount> {
    category_counts(records, fields::DISTRICT)
}

pub fn pincode_counts(records: &[Record]) -> Vec<CategoryCount> {
    category_counts(records, fields::PINCODE)
}

fn category_counts(records: &[Record], field: &str) -> Vec<CategoryCount> {
    let mut rows: Vec<CategoryCount> = count_by(records, |record| name_or_na(record, field))
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Lead count for one age or income band. Every band of the partition is
/// reported, including empty ones and the not-available band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandCount {
    pub band: String,
    pub count: usize,
}

pub fn age_distribution(records: &[Record]) -> Vec<BandCount> {
    let mut counts = vec![0usize; AgeBand::ALL.len()];
    for record in records {
        counts[AgeBand::from_raw(record.raw(fields::AGE)) as usize] += 1;
    }
    AgeBand::ALL
        .iter()
        .map(|band| BandCount {
            band: band.label().to_string(),
            count: counts[*band as usize],
        })
        .collect()
}

pub fn income_distribution(records: &[Record]) -> Vec<BandCount> {
    let mut counts = vec![0usize; IncomeBand::ALL.len()];
    for record in records {
        counts[IncomeBand::from_raw(record.raw(fields::MONTHLY_INCOME)) as usize] += 1;
    }
    IncomeBand::ALL
        .iter()
        .map(|band| BandCount {
            band: band.label().to_string(),
            count: counts[*band as usize],
        })
        .collect()
}

/// Three-way family classification. The spouse and children flags may
/// both increment for one lead; "other" counts only leads where neither
/// name field is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FamilyStatus {
    pub has_spouse: usize,
    pub has_children: usize,
    pub other: usize,
}

pub fn family_status(records: &[Record]) -> FamilyStatus {
    let mut status = FamilyStatus::default();
    for record in records {
        let has_spouse = is_present(record.raw(fields::SPOUSE_NAME));
        let has_children = is_present(record.raw(fields::CHILDREN_NAMES));
        if has_spouse {
            status.has_spouse += 1;
        }
        if has_children {
            status.has_children += 1;
        }
        if !has_spouse && !has_children {
            status.other += 1;
        }
    }
    status
}
