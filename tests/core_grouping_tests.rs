use leadmap::core::grouping::{arg_max, count_by, group_by, tally_by, AgeBand, IncomeBand, Tally};
use leadmap::core::parsing::{parse_records, FillPolicy, Record};
use proptest::prelude::*;

fn keyed_records(keys: &[String]) -> Vec<Record> {
    let mut text = String::from("Key\n");
    for key in keys {
        text.push_str(key);
        text.push('\n');
    }
    parse_records(&text, FillPolicy::default())
}

proptest! {
    // A total, non-filtering key function partitions the input: every
    // record appears in exactly one group.
    #[test]
    fn grouping_is_a_partition(keys in prop::collection::vec("[a-e]{1,2}", 0..40)) {
        let records = keyed_records(&keys);
        let groups = group_by(&records, |record| record.raw("Key").to_string());

        let regrouped: usize = groups.iter().map(|(_, group)| group.len()).sum();
        prop_assert_eq!(regrouped, records.len());

        // No key appears in two groups.
        let mut seen = std::collections::HashSet::new();
        for (key, _) in &groups {
            prop_assert!(seen.insert(key.clone()));
        }
    }

    #[test]
    fn every_age_lands_in_exactly_one_band(age in -200i64..200) {
        let matching = AgeBand::ALL
            .iter()
            .filter(|band| AgeBand::classify(Some(age)) == **band)
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn every_income_lands_in_exactly_one_band(income in 0.0f64..1_000_000.0) {
        let matching = IncomeBand::ALL
            .iter()
            .filter(|band| IncomeBand::classify(Some(income)) == **band)
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn conversion_rate_stays_in_range(total in 0usize..1000, closed_seed in 0usize..1000) {
        let closed = closed_seed.min(total);
        let tally = Tally { total, closed };
        let rate = tally.conversion_rate();
        prop_assert!((0.0..=100.0).contains(&rate));
    }
}

#[test]
fn group_order_is_first_occurrence() {
    let keys: Vec<String> = ["z", "a", "z", "m", "a"]
        .iter()
        .map(|k| k.to_string())
        .collect();
    let records = keyed_records(&keys);
    let counts = count_by(&records, |record| record.raw("Key").to_string());
    let order: Vec<&str> = counts.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(order, vec!["z", "a", "m"]);
}

#[test]
fn tally_by_counts_closed_case_insensitively() {
    let records = parse_records(
        "EMPLOYEENAME,LeadStatus\nA,Closed\nA,closed\nA,Open\nB,CLOSED\n",
        FillPolicy::default(),
    );
    let tallies = tally_by(&records, |record| record.raw("EMPLOYEENAME").to_string());
    assert_eq!(tallies[0], ("A".to_string(), Tally { total: 3, closed: 2 }));
    assert_eq!(tallies[1], ("B".to_string(), Tally { total: 1, closed: 1 }));
}

#[test]
fn arg_max_prefers_first_on_equal_counts() {
    let counts = vec![
        ("savings".to_string(), 3),
        ("loan".to_string(), 3),
        ("insurance".to_string(), 2),
    ];
    assert_eq!(arg_max(&counts), Some((&"savings".to_string(), 3)));
}

#[test]
fn adjacent_band_boundaries_do_not_overlap() {
    assert_eq!(AgeBand::classify(Some(25)), AgeBand::UpTo25);
    assert_eq!(AgeBand::classify(Some(26)), AgeBand::From26To35);
    assert_eq!(IncomeBand::classify(Some(50_000.0)), IncomeBand::From25KTo50K);
    assert_eq!(IncomeBand::classify(Some(50_001.0)), IncomeBand::From50KTo100K);
}
