//! Static field/label tables shared by the customer detail card and the
//! record-completeness checklist.

use crate::core::fields;

/// One field of the export with its human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// A titled group of fields, rendered as one card section.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const LEAD_EMPLOYEE_INFO: Section = Section {
    title: "Lead & Employee Info",
    fields: &[
        FieldSpec { key: fields::BRANCH, label: "Branch Name" },
        FieldSpec { key: fields::EMPLOYEE, label: "Employee Name" },
        FieldSpec { key: fields::EMPLOYEE_CODE, label: "Employee Code" },
        FieldSpec { key: fields::CUSTOMER, label: "Customer Name" },
    ],
};

const CONTACT_DETAILS: Section = Section {
    title: "Customer Contact Details",
    fields: &[
        FieldSpec { key: fields::CUSTOMER, label: "Customer Name" },
        FieldSpec { key: fields::CUSTOMER_ADDRESS, label: "Customer Address" },
        FieldSpec { key: fields::STREET_PLACE, label: "Street / Place" },
        FieldSpec { key: fields::DISTRICT, label: "District" },
        FieldSpec { key: fields::PINCODE, label: "Pincode" },
        FieldSpec { key: fields::PHONE, label: "Customer Phone Number" },
    ],
};

const JOB_INCOME: Section = Section {
    title: "Job & Income",
    fields: &[
        FieldSpec { key: fields::JOB_CATEGORY, label: "Job Category" },
        FieldSpec { key: fields::JOB_DETAILS, label: "Job Details" },
        FieldSpec { key: fields::MONTHLY_INCOME, label: "Average Monthly Income" },
    ],
};

const PERSONAL_FAMILY: Section = Section {
    title: "Personal & Family Details",
    fields: &[
        FieldSpec { key: fields::BIRTHDAY, label: "Birthday" },
        FieldSpec { key: fields::WEDDING_DAY, label: "Wedding Day" },
        FieldSpec { key: fields::AGE, label: "Approximate Age" },
        FieldSpec { key: fields::SPOUSE_NAME, label: "Husband / Wife Name" },
        FieldSpec { key: fields::SPOUSE_JOB, label: "Husband / Wife Job" },
        FieldSpec { key: fields::CHILDREN_NAMES, label: "Children Name(s)" },
        FieldSpec { key: fields::CHILDREN_DETAILS, label: "Children Details" },
        FieldSpec { key: fields::CUSTOMER_PROFILE, label: "Customer Profile" },
        FieldSpec { key: fields::CLOSE_CIRCLE, label: "Close Circle Contact?" },
        FieldSpec { key: fields::RELATION_DETAIL, label: "Detailed Description & Relation" },
    ],
};

const STATUS_FOLLOW_UP: Section = Section {
    title: "Lead Status & Follow-up",
    fields: &[
        FieldSpec { key: fields::PRODUCT_DISCUSSED, label: "Product Discussed" },
        FieldSpec { key: fields::CLOSED_AMOUNT, label: "Closed Amount" },
        FieldSpec { key: fields::VISITS_COMPLETED, label: "Number of Visits Completed" },
        FieldSpec { key: fields::VISIT_DAYS, label: "Visit Days" },
        FieldSpec { key: fields::SECOND_VISIT, label: "Mention 2nd Visit" },
        FieldSpec { key: fields::THIRD_VISIT, label: "Mention 3rd Visit" },
        FieldSpec { key: fields::FOURTH_VISIT, label: "Mention 4th Visit" },
        FieldSpec { key: fields::REMARK_1, label: "Remark 1" },
        FieldSpec { key: fields::REMARK_2, label: "Remark 2" },
        FieldSpec { key: fields::REMARK_3, label: "Remark 3" },
        FieldSpec { key: fields::REMARK_4, label: "Remark 4" },
        FieldSpec { key: fields::REMARK_5, label: "Remark 5" },
        FieldSpec { key: fields::LEAD_STATUS, label: "Lead Status" },
    ],
};

/// Sections of the customer detail card, in render order.
pub const DETAIL_SECTIONS: &[Section] = &[
    LEAD_EMPLOYEE_INFO,
    CONTACT_DETAILS,
    JOB_INCOME,
    PERSONAL_FAMILY,
    STATUS_FOLLOW_UP,
];

/// Sections audited by the completeness report. Status and follow-up
/// fields are legitimately blank for young leads, so they are not audited.
pub const AUDIT_SECTIONS: &[Section] = &[
    LEAD_EMPLOYEE_INFO,
    JOB_INCOME,
    CONTACT_DETAILS,
    PERSONAL_FAMILY,
];

/// Label for a field key, searching every known section.
pub fn label_for(key: &str) -> Option<&'static str> {
    DETAIL_SECTIONS
        .iter()
        .flat_map(|section| section.fields.iter())
        .find(|field| field.key == key)
        .map(|field| field.label)
}
