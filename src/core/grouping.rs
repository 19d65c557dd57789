//! Generic grouping and aggregation over parsed records.
//!
//! Replaces the "if key absent, initialize; then increment" accumulators
//! scattered through ad-hoc report code: each combinator returns a fresh
//! collection per call, never mutates shared state, and makes the initial
//! value explicit. Group order is the order in which keys first occur in
//! the input, which is also the documented tie-break order.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use super::coercion::{as_decimal, as_integer, is_closed};
use super::fields;
use super::parsing::Record;

/// Partition records by a derived key, preserving first-occurrence order.
///
/// The key function must be total: every record lands in exactly one
/// group, so the union of all groups is the input, each record once.
pub fn group_by<'a, I, K, F>(records: I, key_fn: F) -> Vec<(K, Vec<&'a Record>)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Record>)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }
    groups
}

/// Record count per key, in first-occurrence order.
pub fn count_by<'a, I, K, F>(records: I, key_fn: F) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    group_by(records, key_fn)
        .into_iter()
        .map(|(key, group)| (key, group.len()))
        .collect()
}

/// Total and closed-lead counts for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub closed: usize,
}

impl Tally {
    pub fn observe(&mut self, closed: bool) {
        self.total += 1;
        if closed {
            self.closed += 1;
        }
    }

    /// Closed percentage, rounded to two decimals. An empty group rates 0,
    /// not an error and not "not available".
    pub fn conversion_rate(&self) -> f64 {
        percentage(self.closed, self.total)
    }
}

/// `part / total * 100` to two decimals; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(part as f64 / total as f64 * 100.0)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-key [`Tally`] over lead status, in first-occurrence order.
pub fn tally_by<'a, I, K, F>(records: I, key_fn: F) -> Vec<(K, Tally)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    F: Fn(&Record) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut tallies: Vec<(K, Tally)> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.clone(), tallies.len());
                tallies.push((key, Tally::default()));
                tallies.len() - 1
            }
        };
        tallies[slot].1.observe(is_closed(record.raw(fields::LEAD_STATUS)));
    }
    tallies
}

/// Entry with the highest count. The fold only replaces the current best
/// on a strictly greater count, so the first-encountered candidate wins
/// ties — counts are in first-occurrence order, making the tie-break the
/// order of first appearance in the source data.
pub fn arg_max<K>(counts: &[(K, usize)]) -> Option<(&K, usize)> {
    let mut best: Option<(&K, usize)> = None;
    for (key, count) in counts {
        let replace = match best {
            None => true,
            Some((_, best_count)) => *count > best_count,
        };
        if replace {
            best = Some((key, *count));
        }
    }
    best
}

/// Age bands: a total, ordered, non-overlapping partition of the age
/// domain. Boundaries are inclusive as labeled; unparseable ages land in
/// the explicit not-available band rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    UpTo25,
    From26To35,
    From36To45,
    From46To55,
    From56,
    NotAvailable,
}

impl AgeBand {
    pub const ALL: [AgeBand; 6] = [
        AgeBand::UpTo25,
        AgeBand::From26To35,
        AgeBand::From36To45,
        AgeBand::From46To55,
        AgeBand::From56,
        AgeBand::NotAvailable,
    ];

    pub fn classify(age: Option<i64>) -> AgeBand {
        match age {
            None => AgeBand::NotAvailable,
            Some(age) if age <= 25 => AgeBand::UpTo25,
            Some(age) if age <= 35 => AgeBand::From26To35,
            Some(age) if age <= 45 => AgeBand::From36To45,
            Some(age) if age <= 55 => AgeBand::From46To55,
            Some(_) => AgeBand::From56,
        }
    }

    pub fn from_raw(raw: &str) -> AgeBand {
        Self::classify(as_integer(raw))
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::UpTo25 => "25 & under",
            AgeBand::From26To35 => "26-35",
            AgeBand::From36To45 => "36-45",
            AgeBand::From46To55 => "46-55",
            AgeBand::From56 => "56+",
            AgeBand::NotAvailable => "N/A",
        }
    }
}

/// Monthly income bands over the numeric income field. A value carrying a
/// `lakh` marker is scaled to rupees after the suffix-stripped parse, so
/// both source conventions land in one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncomeBand {
    Below25K,
    From25KTo50K,
    From50KTo100K,
    Above100K,
    NotAvailable,
}

impl IncomeBand {
    pub const ALL: [IncomeBand; 5] = [
        IncomeBand::Below25K,
        IncomeBand::From25KTo50K,
        IncomeBand::From50KTo100K,
        IncomeBand::Above100K,
        IncomeBand::NotAvailable,
    ];

    pub fn classify(income: Option<f64>) -> IncomeBand {
        match income {
            None => IncomeBand::NotAvailable,
            Some(value) if value < 25_000.0 => IncomeBand::Below25K,
            Some(value) if value <= 50_000.0 => IncomeBand::From25KTo50K,
            Some(value) if value <= 100_000.0 => IncomeBand::From50KTo100K,
            Some(_) => IncomeBand::Above100K,
        }
    }

    pub fn from_raw(raw: &str) -> IncomeBand {
        const LAKH: f64 = 100_000.0;
        let value = as_decimal(raw).map(|value| {
            if raw.to_ascii_lowercase().contains("lakh") {
                value * LAKH
            } else {
                value
            }
        });
        Self::classify(value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeBand::Below25K => "< 25k",
            IncomeBand::From25KTo50K => "25k-50k",
            IncomeBand::From50KTo100K => "50k-100k",
            IncomeBand::Above100K => "100k+",
            IncomeBand::NotAvailable => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parsing::{parse_records, FillPolicy};

    fn records(text: &str) -> Vec<Record> {
        parse_records(text, FillPolicy::default())
    }

    #[test]
    fn groups_preserve_first_occurrence_order() {
        let records = records("K\nb\na\nb\nc\na\n");
        let groups = group_by(&records, |r| r.raw("K").to_string());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn grouping_partitions_the_input() {
        let records = records("K\n1\n2\n1\n3\n");
        let groups = group_by(&records, |r| r.raw("K").to_string());
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn rate_edge_cases() {
        assert_eq!(Tally::default().conversion_rate(), 0.0);
        let full = Tally { total: 4, closed: 4 };
        assert_eq!(full.conversion_rate(), 100.0);
        let two_thirds = Tally { total: 3, closed: 2 };
        assert_eq!(two_thirds.conversion_rate(), 66.67);
    }

    #[test]
    fn arg_max_first_wins_ties() {
        let counts = vec![("first".to_string(), 2), ("second".to_string(), 2), ("third".to_string(), 1)];
        let (key, count) = arg_max(&counts).unwrap();
        assert_eq!(key, "first");
        assert_eq!(count, 2);
        assert_eq!(arg_max::<String>(&[]), None);
    }

    #[test]
    fn age_band_boundaries() {
        assert_eq!(AgeBand::classify(Some(25)), AgeBand::UpTo25);
        assert_eq!(AgeBand::classify(Some(26)), AgeBand::From26To35);
        assert_eq!(AgeBand::classify(Some(35)), AgeBand::From26To35);
        assert_eq!(AgeBand::classify(Some(36)), AgeBand::From36To45);
        assert_eq!(AgeBand::classify(Some(55)), AgeBand::From46To55);
        assert_eq!(AgeBand::classify(Some(56)), AgeBand::From56);
        assert_eq!(AgeBand::classify(None), AgeBand::NotAvailable);
        assert_eq!(AgeBand::from_raw("unknown"), AgeBand::NotAvailable);
    }

    #[test]
    fn income_band_boundaries() {
        assert_eq!(IncomeBand::classify(Some(24_999.0)), IncomeBand::Below25K);
        assert_eq!(IncomeBand::classify(Some(25_000.0)), IncomeBand::From25KTo50K);
        assert_eq!(IncomeBand::classify(Some(50_000.0)), IncomeBand::From25KTo50K);
        assert_eq!(IncomeBand::classify(Some(50_001.0)), IncomeBand::From50KTo100K);
        assert_eq!(IncomeBand::classify(Some(100_000.0)), IncomeBand::From50KTo100K);
        assert_eq!(IncomeBand::classify(Some(100_001.0)), IncomeBand::Above100K);
        assert_eq!(IncomeBand::classify(None), IncomeBand::NotAvailable);
    }

    #[test]
    fn lakh_values_scale_to_rupees() {
        assert_eq!(IncomeBand::from_raw("2 Lakhs"), IncomeBand::Above100K);
        assert_eq!(IncomeBand::from_raw("0.4 lakh"), IncomeBand::From25KTo50K);
        assert_eq!(IncomeBand::from_raw("30000"), IncomeBand::From25KTo50K);
    }
}
