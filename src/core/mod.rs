//! Record model, coercion, and aggregation primitives shared by every
//! report. Nothing in this module performs I/O.

pub mod coercion;
pub mod grouping;
pub mod parsing;

pub use coercion::{
    as_date, as_decimal, as_integer, days_between, is_closed, is_placeholder, is_present,
    PLACEHOLDER_VALUES,
};
pub use grouping::{
    arg_max, count_by, group_by, percentage, round2, tally_by, AgeBand, IncomeBand, Tally,
};
pub use parsing::{normalize_header, parse_records, split_fields, FillPolicy, Header, Record};

/// Normalized field names consumed from the export's header row. These are
/// opaque string keys; no report may assume a field is actually present.
pub mod fields {
    pub const BRANCH: &str = "BRANCHNAME";
    pub const EMPLOYEE: &str = "EMPLOYEENAME";
    pub const EMPLOYEE_CODE: &str = "EMPLOYEECODE";
    pub const CUSTOMER: &str = "CustomerName";
    pub const CUSTOMER_ADDRESS: &str = "CustomerAddress";
    pub const STREET_PLACE: &str = "StreetPlace";
    pub const DISTRICT: &str = "District";
    pub const PINCODE: &str = "Pincode";
    pub const PHONE: &str = "Customerphonenumber";
    pub const JOB_CATEGORY: &str = "JobCategory";
    pub const JOB_DETAILS: &str = "JobDetails";
    pub const MONTHLY_INCOME: &str = "Averagemonthlycome";
    pub const BIRTHDAY: &str = "Birthday";
    pub const WEDDING_DAY: &str = "WeddingDay";
    pub const AGE: &str = "ApproximateAge";
    pub const SPOUSE_NAME: &str = "HusbandWifeName";
    pub const SPOUSE_JOB: &str = "HusbandWifeJob";
    pub const CHILDREN_NAMES: &str = "ChildrenNames";
    pub const CHILDREN_DETAILS: &str = "ChildrenDetails";
    pub const CUSTOMER_PROFILE: &str = "CustomerProfile";
    pub const CLOSE_CIRCLE: &str = "WhethercloseCircleContact";
    pub const RELATION_DETAIL: &str = "Detaileddescriptionrelation";
    pub const LEAD_STATUS: &str = "LeadStatus";
    pub const CLOSED_AMOUNT: &str = "ClosedAmount";
    pub const DATE_CLOSED: &str = "DateClosed";
    pub const TIMESTAMP: &str = "Timestamp";
    pub const PRODUCT_DISCUSSED: &str = "ProductDiscussed";
    pub const PRODUCT_OFFERED: &str = "ProductOffered";
    pub const VISITS_COMPLETED: &str = "Howmanyvisitcompleted";
    pub const TOTAL_VISITS: &str = "TotalVisits";
    pub const VISIT_DAYS: &str = "VisitDays";
    pub const SECOND_VISIT: &str = "Mention2ndvisit";
    pub const THIRD_VISIT: &str = "Mention3rdvisit";
    pub const FOURTH_VISIT: &str = "Mention4thvisit";
    pub const REMARK_1: &str = "Remark1";
    pub const REMARK_2: &str = "Remark2";
    pub const REMARK_3: &str = "Remark3";
    pub const REMARK_4: &str = "Remark4";
    pub const REMARK_5: &str = "Rmark5";
}
