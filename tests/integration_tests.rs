use gradebook_summary::output::{OutputFormat, render_html, write_summary};
use gradebook_summary::parser::parse_table;
use gradebook_summary::summary::summarize;

const GRADEBOOK: &[u8] = include_bytes!("fixtures/gradebook.csv");

#[test]
fn test_full_pipeline() {
    let table = parse_table(GRADEBOOK).expect("Failed to parse gradebook");
    let summary = summarize(&table);

    assert_eq!(summary.modules, vec!["1", "2", "B"]);
    assert_eq!(
        summary.columns(),
        vec![
            "Student",
            "Module 1 Assignments",
            "Module 2 Assignments",
            "Module B Assignments",
            "Module 1 Labs",
            "Module 2 Labs",
            "Module B Labs",
        ]
    );

    let records = summary.records();
    assert_eq!(
        records[0],
        vec!["Alice Nguyen", "90.00%", "80.00%", "", "90.00%", "", "100.00%"]
    );
    assert_eq!(
        records[1],
        vec!["Bob Okafor", "", "60.00%", "", "100.00%", "", ""]
    );
    assert_eq!(
        records[2],
        vec!["Carmen Diaz", "90.00%", "", "", "85.00%", "", "77.50%"]
    );
}

#[test]
fn test_spec_example_end_to_end() {
    let csv = b"Student,Assessment - 1.1.6 Topologies,Lab - 1.2.7 Build\nAlice,80%,90%\nBob,,100\n";
    let summary = summarize(&parse_table(csv).unwrap());

    let mut out = Vec::new();
    write_summary(&summary, OutputFormat::Csv, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Student,Module 1 Assignments,Module 1 Labs\nAlice,80.00%,90.00%\nBob,,100.00%\n"
    );
}

#[test]
fn test_pipeline_is_idempotent() {
    let first = render_html(&summarize(&parse_table(GRADEBOOK).unwrap()));
    let second = render_html(&summarize(&parse_table(GRADEBOOK).unwrap()));
    assert_eq!(first, second);
}

#[test]
fn test_latin1_bytes_are_dropped_not_fatal() {
    let csv = b"Student,Lab - 3.1 Intro\nJos\xe9,50\n";
    let summary = summarize(&parse_table(csv).unwrap());
    assert_eq!(summary.records(), vec![vec!["Jos", "", "50.00%"]]);
}
