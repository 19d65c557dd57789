//! Report definitions.
//!
//! Each report is a pure function from the full record set to a
//! serializable aggregate, computable in a single pass plus at most one
//! sort. [`Dashboard::compute`] bundles every report for rendering; no
//! report depends on another report's output.

pub mod completeness;
pub mod demographics;
pub mod directory;
pub mod lifecycle;
pub mod performance;
pub mod product;
pub mod sections;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::coercion::{as_integer, is_placeholder, is_present};
use crate::core::fields;
use crate::core::parsing::Record;

pub use completeness::{BranchAudit, Checklist, EmployeeAudit, IncompleteLead, Snapshot};
pub use demographics::{BandCount, CategoryCount, FamilyStatus};
pub use directory::CustomerDetail;
pub use lifecycle::{FollowUpRow, StatusCount, TimeToClose};
pub use performance::{ClosedAmountRow, ConversionRow, VisitConversionRow};
pub use product::{PreferredProductRow, ProductCount, ProductRate};

/// Report-level knobs resolved by the caller (CLI flags / config file).
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub follow_up_fields: Vec<String>,
    pub checklist: Checklist,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            follow_up_fields: vec![
                fields::VISIT_DAYS.to_string(),
                fields::SECOND_VISIT.to_string(),
                fields::THIRD_VISIT.to_string(),
                fields::FOURTH_VISIT.to_string(),
            ],
            checklist: Checklist::default(),
        }
    }
}

/// Every report computed from one record set. A new fetch produces a new
/// record set and a freshly computed dashboard; there is no incremental
/// update path.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub snapshot: Snapshot,
    pub conversion_by_employee: Vec<ConversionRow>,
    pub conversion_by_branch: Vec<ConversionRow>,
    pub closed_amount_by_branch: Vec<ClosedAmountRow>,
    pub closed_amount_by_employee: Vec<ClosedAmountRow>,
    pub visit_conversion: Vec<VisitConversionRow>,
    pub time_to_close: TimeToClose,
    pub follow_up_frequency: Vec<FollowUpRow>,
    pub pipeline_health: Vec<StatusCount>,
    pub closed_by_product: Vec<ProductCount>,
    pub most_pitched: Vec<ProductCount>,
    pub most_closed: Vec<ProductCount>,
    pub preferred_by_age: Vec<PreferredProductRow>,
    pub preferred_by_income: Vec<PreferredProductRow>,
    pub most_easily_closed: Vec<ProductRate>,
    pub job_categories: Vec<CategoryCount>,
    pub age_distribution: Vec<BandCount>,
    pub income_distribution: Vec<BandCount>,
    pub districts: Vec<CategoryCount>,
    pub pincodes: Vec<CategoryCount>,
    pub family_status: FamilyStatus,
    pub audit: Vec<BranchAudit>,
}

impl Dashboard {
    pub fn compute(records: &[Record], options: &ReportOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            snapshot: completeness::snapshot(records, &options.checklist),
            conversion_by_employee: performance::conversion_by_employee(records),
            conversion_by_branch: performance::conversion_by_branch(records),
            closed_amount_by_branch: performance::closed_amount_by_branch(records),
            closed_amount_by_employee: performance::closed_amount_by_employee(records),
            visit_conversion: performance::visit_conversion(records),
            time_to_close: lifecycle::time_to_close(records),
            follow_up_frequency: lifecycle::follow_up_frequency(records, &options.follow_up_fields),
            pipeline_health: lifecycle::pipeline_health(records),
            closed_by_product: product::closed_by_product(records),
            most_pitched: product::most_pitched(records),
            most_closed: product::most_closed(records),
            preferred_by_age: product::preferred_by_age(records),
            preferred_by_income: product::preferred_by_income(records),
            most_easily_closed: product::most_easily_closed(records),
            job_categories: demographics::job_category_counts(records),
            age_distribution: demographics::age_distribution(records),
            income_distribution: demographics::income_distribution(records),
            districts: demographics::district_counts(records),
            pincodes: demographics::pincode_counts(records),
            family_status: demographics::family_status(records),
            audit: completeness::audit(records, &options.checklist),
        }
    }
}

/// Group-key policy for name- and status-keyed reports: the raw value,
/// with every placeholder bucketed under an explicit "N/A" key instead of
/// being dropped.
pub(crate) fn name_or_na(record: &Record, field: &str) -> String {
    let value = record.raw(field);
    if is_placeholder(value) {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Product field with fallback: some export revisions carry
/// `ProductDiscussed`, others `ProductOffered`.
pub(crate) fn product_of(record: &Record) -> &str {
    let discussed = record.raw(fields::PRODUCT_DISCUSSED);
    if is_present(discussed) {
        discussed
    } else {
        record.raw(fields::PRODUCT_OFFERED)
    }
}

/// Completed-visit count with fallback across export revisions;
/// unparseable counts bucket at 0.
pub(crate) fn visits_of(record: &Record) -> i64 {
    as_integer(record.raw(fields::VISITS_COMPLETED))
        .or_else(|| as_integer(record.raw(fields::TOTAL_VISITS)))
        .unwrap_or(0)
}
