//! Lead directory: browse branches, their employees, their customers, and
//! one customer's full detail card.

use serde::Serialize;

use crate::core::coercion::is_placeholder;
use crate::core::fields;
use crate::core::parsing::Record;

use super::sections;

/// Distinct branch names, alphabetical.
pub fn branches(records: &[Record]) -> Vec<String> {
    let mut names = distinct(records.iter(), fields::BRANCH);
    names.sort();
    names
}

/// Distinct employee names of one branch, alphabetical.
pub fn employees(records: &[Record], branch: &str) -> Vec<String> {
    let mut names = distinct(
        records
            .iter()
            .filter(|record| record.raw(fields::BRANCH) == branch),
        fields::EMPLOYEE,
    );
    names.sort();
    names
}

/// Distinct customer names of one branch+employee, in source order.
pub fn customers(records: &[Record], branch: &str, employee: &str) -> Vec<String> {
    distinct(
        records.iter().filter(|record| {
            record.raw(fields::BRANCH) == branch && record.raw(fields::EMPLOYEE) == employee
        }),
        fields::CUSTOMER,
    )
}

fn distinct<'a>(records: impl Iterator<Item = &'a Record>, field: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        let value = record.raw(field);
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// One labeled value of the detail card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSection {
    pub title: String,
    pub items: Vec<DetailItem>,
}

/// A customer's lead, rendered as titled sections of labeled values.
/// Missing or placeholder values display as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDetail {
    pub customer: String,
    pub sections: Vec<DetailSection>,
}

/// Detail card for the first lead matching the customer name.
pub fn customer_detail(records: &[Record], customer: &str) -> Option<CustomerDetail> {
    let record = records
        .iter()
        .find(|record| record.raw(fields::CUSTOMER) == customer)?;

    let sections = sections::DETAIL_SECTIONS
        .iter()
        .map(|section| DetailSection {
            title: section.title.to_string(),
            items: section
                .fields
                .iter()
                .map(|field| {
                    let raw = record.raw(field.key);
                    DetailItem {
                        label: field.label.to_string(),
                        value: if is_placeholder(raw) {
                            "N/A".to_string()
                        } else {
                            raw.to_string()
                        },
                    }
                })
                .collect(),
        })
        .collect();

    Some(CustomerDetail {
        customer: customer.to_string(),
        sections,
    })
}
