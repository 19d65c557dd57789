//! Record-completeness audit: which leads are missing required fields,
//! rolled up per employee within branch, with per-record drill-down.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::coercion::{is_placeholder, is_present};
use crate::core::fields;
use crate::core::grouping::{group_by, percentage};
use crate::core::parsing::Record;

use super::{name_or_na, sections};

/// The audited field list. Defaults to every field of the audit sections;
/// a config file may swap in its own field keys, in which case labels fall
/// back to the key when the field is not in any known section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    fields: Vec<ChecklistField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistField {
    pub key: String,
    pub label: String,
}

static DEFAULT_CHECKLIST: Lazy<Checklist> = Lazy::new(|| Checklist {
    fields: sections::AUDIT_SECTIONS
        .iter()
        .flat_map(|section| section.fields.iter())
        .map(|field| ChecklistField {
            key: field.key.to_string(),
            label: field.label.to_string(),
        })
        .collect(),
});

impl Default for Checklist {
    fn default() -> Self {
        DEFAULT_CHECKLIST.clone()
    }
}

impl Checklist {
    pub fn from_keys(keys: &[String]) -> Self {
        Self {
            fields: keys
                .iter()
                .map(|key| ChecklistField {
                    key: key.clone(),
                    label: sections::label_for(key)
                        .map(str::to_string)
                        .unwrap_or_else(|| key.clone()),
                })
                .collect(),
        }
    }

    pub fn fields(&self) -> &[ChecklistField] {
        &self.fields
    }

    /// Checklist fields whose value fails the presence test for this
    /// record. An absent field counts as missing, like an empty one.
    pub fn missing_fields<'a>(&'a self, record: &Record) -> Vec<&'a ChecklistField> {
        self.fields
            .iter()
            .filter(|field| !is_present(record.raw(&field.key)))
            .collect()
    }

    pub fn is_incomplete(&self, record: &Record) -> bool {
        self.fields
            .iter()
            .any(|field| !is_present(record.raw(&field.key)))
    }
}

/// Whole-company completeness overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub complete_percent: f64,
    pub incomplete_percent: f64,
    pub branches: usize,
    pub employees: usize,
}

pub fn snapshot(records: &[Record], checklist: &Checklist) -> Snapshot {
    let total = records.len();
    let incomplete = records
        .iter()
        .filter(|record| checklist.is_incomplete(record))
        .count();
    let distinct = |field: &str| {
        records
            .iter()
            .map(|record| record.raw(field))
            .collect::<HashSet<_>>()
            .len()
    };

    Snapshot {
        total,
        complete: total - incomplete,
        incomplete,
        complete_percent: percentage(total - incomplete, total),
        incomplete_percent: percentage(incomplete, total),
        branches: distinct(fields::BRANCH),
        employees: distinct(fields::EMPLOYEE),
    }
}

/// One lead flagged by the audit, with the labels of its missing fields
/// for drill-down display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncompleteLead {
    pub customer: String,
    pub missing: Vec<String>,
}

/// Audit roll-up for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeAudit {
    pub employee: String,
    pub total: usize,
    pub incomplete: usize,
    pub incomplete_percent: f64,
    pub incomplete_leads: Vec<IncompleteLead>,
}

/// Audit roll-up for one branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchAudit {
    pub branch: String,
    pub total: usize,
    pub incomplete: usize,
    pub incomplete_percent: f64,
    pub employees: Vec<EmployeeAudit>,
}

/// Completeness audit over the whole record set, branches and employees
/// alphabetical.
pub fn audit(records: &[Record], checklist: &Checklist) -> Vec<BranchAudit> {
    let mut branches: Vec<BranchAudit> =
        group_by(records, |record| name_or_na(record, fields::BRANCH))
            .into_iter()
            .map(|(branch, branch_records)| {
                let mut employees: Vec<EmployeeAudit> = group_by(
                    branch_records.iter().copied(),
                    |record| name_or_na(record, fields::EMPLOYEE),
                )
                .into_iter()
                .map(|(employee, leads)| employee_audit(employee, &leads, checklist))
                .collect();
                employees.sort_by(|a, b| a.employee.cmp(&b.employee));

                let total = branch_records.len();
                let incomplete = employees.iter().map(|e| e.incomplete).sum();
                BranchAudit {
                    branch,
                    total,
                    incomplete,
                    incomplete_percent: percentage(incomplete, total),
                    employees,
                }
            })
            .collect();
    branches.sort_by(|a, b| a.branch.cmp(&b.branch));
    branches
}

/// The audit restricted to one branch, if that branch occurs at all.
pub fn branch_summary(
    records: &[Record],
    checklist: &Checklist,
    branch: &str,
) -> Option<BranchAudit> {
    audit(records, checklist)
        .into_iter()
        .find(|entry| entry.branch == branch)
}

fn employee_audit(employee: String, leads: &[&Record], checklist: &Checklist) -> EmployeeAudit {
    let incomplete_leads: Vec<IncompleteLead> = leads
        .iter()
        .filter_map(|record| {
            let missing = checklist.missing_fields(record);
            if missing.is_empty() {
                return None;
            }
            let customer = record.raw(fields::CUSTOMER);
            Some(IncompleteLead {
                customer: if is_placeholder(customer) {
                    "Unnamed Customer".to_string()
                } else {
                    customer.to_string()
                },
                missing: missing.iter().map(|field| field.label.clone()).collect(),
            })
        })
        .collect();

    EmployeeAudit {
        employee,
        total: leads.len(),
        incomplete: incomplete_leads.len(),
        incomplete_percent: percentage(incomplete_leads.len(), leads.len()),
        incomplete_leads,
    }
}
