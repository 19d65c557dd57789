use indoc::indoc;
use leadmap::core::parsing::{parse_records, FillPolicy, Record};
use leadmap::reports::directory;
use pretty_assertions::assert_eq;

fn sample() -> Vec<Record> {
    parse_records(
        indoc! {"
            BRANCHNAME,EMPLOYEENAME,CustomerName,District,JobCategory
            South,Binu,Devi,Idukki,Farmer
            North,Asha,Ravi,Kollam,Teacher
            North,Asha,Hari,Kollam,
            North,Cyril,Ravi,Kollam,Driver
        "},
        FillPolicy::default(),
    )
}

#[test]
fn branches_are_distinct_and_sorted() {
    assert_eq!(directory::branches(&sample()), vec!["North", "South"]);
}

#[test]
fn employees_are_scoped_to_the_branch() {
    let records = sample();
    assert_eq!(directory::employees(&records, "North"), vec!["Asha", "Cyril"]);
    assert_eq!(directory::employees(&records, "South"), vec!["Binu"]);
    assert!(directory::employees(&records, "East").is_empty());
}

#[test]
fn customers_keep_source_order() {
    let records = sample();
    assert_eq!(
        directory::customers(&records, "North", "Asha"),
        vec!["Ravi", "Hari"]
    );
}

#[test]
fn customer_detail_uses_labels_and_na_for_blanks() {
    let records = sample();
    let detail = directory::customer_detail(&records, "Hari").unwrap();
    assert_eq!(detail.customer, "Hari");

    let job_section = detail
        .sections
        .iter()
        .find(|section| section.title == "Job & Income")
        .unwrap();
    let category = job_section
        .items
        .iter()
        .find(|item| item.label == "Job Category")
        .unwrap();
    assert_eq!(category.value, "N/A");

    let contact_section = detail
        .sections
        .iter()
        .find(|section| section.title == "Customer Contact Details")
        .unwrap();
    let district = contact_section
        .items
        .iter()
        .find(|item| item.label == "District")
        .unwrap();
    assert_eq!(district.value, "Kollam");
}

#[test]
fn unknown_customer_has_no_detail() {
    assert!(directory::customer_detail(&sample(), "Nobody").is_none());
}
