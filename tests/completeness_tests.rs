use indoc::indoc;
use leadmap::core::parsing::{parse_records, FillPolicy, Record};
use leadmap::reports::completeness::{audit, branch_summary, snapshot, Checklist};
use pretty_assertions::assert_eq;

fn records(text: &str) -> Vec<Record> {
    parse_records(text, FillPolicy::default())
}

fn checklist(keys: &[&str]) -> Checklist {
    let keys: Vec<String> = keys.iter().map(|key| key.to_string()).collect();
    Checklist::from_keys(&keys)
}

#[test]
fn missing_fields_reports_failing_checklist_entries() {
    let records = records("A,B\n,x\n");
    let checklist = checklist(&["A", "B"]);
    let missing = checklist.missing_fields(&records[0]);
    let keys: Vec<&str> = missing.iter().map(|field| field.key.as_str()).collect();
    assert_eq!(keys, vec!["A"]);
    assert!(checklist.is_incomplete(&records[0]));
}

#[test]
fn absent_checklist_field_counts_as_missing() {
    let records = records("A\nvalue\n");
    let checklist = checklist(&["A", "NeverInHeader"]);
    let missing = checklist.missing_fields(&records[0]);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].key, "NeverInHeader");
}

#[test]
fn checklist_labels_come_from_known_sections() {
    let checklist = checklist(&["CustomerName", "SomethingCustom"]);
    let labels: Vec<&str> = checklist
        .fields()
        .iter()
        .map(|field| field.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Customer Name", "SomethingCustom"]);
}

#[test]
fn snapshot_counts_and_percentages() {
    let records = records(indoc! {"
        BRANCHNAME,EMPLOYEENAME,CustomerName
        North,Asha,Ravi
        North,Binu,
        South,Asha,Devi
    "});
    let snapshot = snapshot(&records, &checklist(&["CustomerName"]));
    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.complete, 2);
    assert_eq!(snapshot.incomplete, 1);
    assert_eq!(snapshot.incomplete_percent, 33.33);
    assert_eq!(snapshot.complete_percent, 66.67);
    assert_eq!(snapshot.branches, 2);
    assert_eq!(snapshot.employees, 2);
}

#[test]
fn snapshot_of_empty_input_is_all_zero() {
    let snapshot = snapshot(&[], &Checklist::default());
    assert_eq!(snapshot.total, 0);
    assert_eq!(snapshot.incomplete_percent, 0.0);
    assert_eq!(snapshot.branches, 0);
}

#[test]
fn audit_rolls_up_employee_within_branch() {
    let records = records(indoc! {"
        BRANCHNAME,EMPLOYEENAME,CustomerName,District
        North,Asha,Ravi,Kollam
        North,Asha,,Kollam
        North,Binu,Devi,
        South,Cyril,Hari,Idukki
    "});
    let audits = audit(&records, &checklist(&["CustomerName", "District"]));
    assert_eq!(audits.len(), 2);

    let north = &audits[0];
    assert_eq!(north.branch, "North");
    assert_eq!(north.total, 3);
    assert_eq!(north.incomplete, 2);
    assert_eq!(north.incomplete_percent, 66.67);

    assert_eq!(north.employees.len(), 2);
    let asha = &north.employees[0];
    assert_eq!(asha.employee, "Asha");
    assert_eq!(asha.total, 2);
    assert_eq!(asha.incomplete, 1);
    assert_eq!(asha.incomplete_percent, 50.0);
    assert_eq!(asha.incomplete_leads.len(), 1);
    assert_eq!(asha.incomplete_leads[0].customer, "Unnamed Customer");
    assert_eq!(asha.incomplete_leads[0].missing, vec!["Customer Name"]);

    let binu = &north.employees[1];
    assert_eq!(binu.incomplete_leads[0].customer, "Devi");
    assert_eq!(binu.incomplete_leads[0].missing, vec!["District"]);

    let south = &audits[1];
    assert_eq!(south.incomplete, 0);
    assert_eq!(south.incomplete_percent, 0.0);
}

#[test]
fn branch_summary_scopes_to_one_branch() {
    let records = records(indoc! {"
        BRANCHNAME,EMPLOYEENAME,CustomerName
        North,Asha,Ravi
        South,Binu,
    "});
    let checklist = checklist(&["CustomerName"]);
    let south = branch_summary(&records, &checklist, "South").unwrap();
    assert_eq!(south.branch, "South");
    assert_eq!(south.incomplete, 1);
    assert!(branch_summary(&records, &checklist, "East").is_none());
}

#[test]
fn default_checklist_audits_the_documented_sections() {
    let checklist = Checklist::default();
    let keys: Vec<&str> = checklist
        .fields()
        .iter()
        .map(|field| field.key.as_str())
        .collect();
    assert!(keys.contains(&"BRANCHNAME"));
    assert!(keys.contains(&"JobCategory"));
    assert!(keys.contains(&"Pincode"));
    assert!(keys.contains(&"ChildrenNames"));
    // Follow-up and status fields are legitimately blank for young leads.
    assert!(!keys.contains(&"LeadStatus"));
    assert!(!keys.contains(&"VisitDays"));
}
