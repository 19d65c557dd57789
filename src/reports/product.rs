//! Product priority reports: pitch and close counts, band preferences,
//! conversion-rate ranking.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::coercion::{is_closed, is_present};
use crate::core::fields;
use crate::core::grouping::{arg_max, count_by, group_by, tally_by, AgeBand, IncomeBand};
use crate::core::parsing::Record;

use super::product_of;

/// Lead count for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCount {
    pub product: String,
    pub count: usize,
}

/// Closed-lead count per product, alphabetical. Leads with a placeholder
/// product are excluded rather than bucketed.
pub fn closed_by_product(records: &[Record]) -> Vec<ProductCount> {
    let mut rows = product_counts(records, true);
    rows.sort_by(|a, b| a.product.cmp(&b.product));
    rows
}

/// Products ranked by how often they were pitched, most first.
pub fn most_pitched(records: &[Record]) -> Vec<ProductCount> {
    let mut rows = product_counts(records, false);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Products ranked by closed-lead count, most first.
pub fn most_closed(records: &[Record]) -> Vec<ProductCount> {
    let mut rows = product_counts(records, true);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn product_counts(records: &[Record], closed_only: bool) -> Vec<ProductCount> {
    let candidates = records.iter().filter(|record| {
        is_present(product_of(record))
            && (!closed_only || is_closed(record.raw(fields::LEAD_STATUS)))
    });
    count_by(candidates, |record| product_of(record).to_string())
        .into_iter()
        .map(|(product, count)| ProductCount { product, count })
        .collect()
}

/// The single most preferred product within one demographic band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferredProductRow {
    pub band: String,
    pub product: String,
    pub count: usize,
}

/// Arg-max product per age band. Bands with no product-bearing leads are
/// omitted; the not-available band is never reported here, matching the
/// per-report policy of excluding unkeyable records.
pub fn preferred_by_age(records: &[Record]) -> Vec<PreferredProductRow> {
    preferred_by_band(
        records,
        |record| {
            let band = AgeBand::from_raw(record.raw(fields::AGE));
            (band != AgeBand::NotAvailable).then(|| band.label())
        },
        AgeBand::ALL.iter().map(AgeBand::label),
    )
}

/// Arg-max product per income band.
pub fn preferred_by_income(records: &[Record]) -> Vec<PreferredProductRow> {
    preferred_by_band(
        records,
        |record| {
            let band = IncomeBand::from_raw(record.raw(fields::MONTHLY_INCOME));
            (band != IncomeBand::NotAvailable).then(|| band.label())
        },
        IncomeBand::ALL.iter().map(IncomeBand::label),
    )
}

fn preferred_by_band<'a>(
    records: &[Record],
    band_of: impl Fn(&Record) -> Option<&'static str>,
    band_order: impl Iterator<Item = &'a str>,
) -> Vec<PreferredProductRow> {
    let candidates = records
        .iter()
        .filter(|record| is_present(product_of(record)) && band_of(record).is_some());
    let by_band = group_by(candidates, |record| band_of(record).unwrap_or("N/A"));

    band_order
        .filter_map(|band| {
            let (_, group) = by_band.iter().find(|(key, _)| *key == band)?;
            let counts = count_by(
                group.iter().copied(),
                |record| product_of(record).to_string(),
            );
            arg_max(&counts).map(|(product, count)| PreferredProductRow {
                band: band.to_string(),
                product: product.clone(),
                count,
            })
        })
        .collect()
}

/// Conversion-rate ranking for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRate {
    pub product: String,
    pub total: usize,
    pub closed: usize,
    pub rate: f64,
}

/// Products ranked by conversion rate, easiest-to-close first. A stable
/// sort keeps first-pitched products ahead on equal rates.
pub fn most_easily_closed(records: &[Record]) -> Vec<ProductRate> {
    let candidates = records.iter().filter(|record| is_present(product_of(record)));
    let mut rows: Vec<ProductRate> = tally_by(candidates, |record| product_of(record).to_string())
        .into_iter()
        .map(|(product, tally)| ProductRate {
            product,
            total: tally.total,
            closed: tally.closed,
            rate: tally.conversion_rate(),
        })
        .collect();
    rows.sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(Ordering::Equal));
    rows
}
