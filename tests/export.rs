// tests/export.rs
//
// CSV/TSV shaping of the projected table. The all-versions column carries
// embedded commas, so CSV quoting is load-bearing here.

use modscrape::csv::to_export_string;

fn headers(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|s| s.to_string()).collect())
}

#[test]
fn csv_quotes_fields_containing_the_separator() {
    let h = headers(&["Name", "All Minecraft Versions Listed"]);
    let rows = vec![vec!["Sodium".to_string(), "1.19.4, 1.20, 1.20.1".to_string()]];

    let out = to_export_string(&h, &rows, true, ',');
    assert_eq!(
        out,
        "Name,All Minecraft Versions Listed\nSodium,\"1.19.4, 1.20, 1.20.1\"\n"
    );
}

#[test]
fn tsv_leaves_commas_unquoted() {
    let h = headers(&["Name", "Versions"]);
    let rows = vec![vec!["Sodium".to_string(), "1.20, 1.20.1".to_string()]];

    let out = to_export_string(&h, &rows, true, '\t');
    assert_eq!(out, "Name\tVersions\nSodium\t1.20, 1.20.1\n");
}

#[test]
fn header_row_is_optional() {
    let h = headers(&["Name"]);
    let rows = vec![vec!["Lithium".to_string()]];

    let out = to_export_string(&h, &rows, false, ',');
    assert_eq!(out, "Lithium\n");
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = vec![vec!["He said \"hi\"".to_string()]];
    let out = to_export_string(&None, &rows, true, ',');
    assert_eq!(out, "\"He said \"\"hi\"\"\"\n");
}
