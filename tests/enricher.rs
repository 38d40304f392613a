// tests/enricher.rs
//
// Record derivation from the two API bodies, and projection through the
// caller's field selection.

use modscrape::config::options::FieldOptions;
use modscrape::data::{family_coverage, headers_for, loader_usage, to_dataset};
use modscrape::specs::project::{ProjectInfo, VersionEntry, derive_record};

fn versions_from_json(json: &str) -> Vec<VersionEntry> {
    serde_json::from_str(json).expect("fixture JSON")
}

fn project(title: &str) -> ProjectInfo {
    serde_json::from_str(&format!(r#"{{"title":"{title}"}}"#)).expect("fixture JSON")
}

#[test]
fn loader_flags_follow_release_entries() {
    let versions = versions_from_json(
        r#"[
            {"loaders":["fabric"],"game_versions":["1.20"]},
            {"loaders":["quilt"],"game_versions":["1.20.1"]}
        ]"#,
    );
    let rec = derive_record("m", "https://modrinth.com/mod/m".into(), &project("M"), &versions);
    assert!(rec.fabric);
    assert!(!rec.forge);
}

#[test]
fn loader_flags_false_when_no_releases() {
    let rec = derive_record("m", "u".into(), &project("M"), &[]);
    assert!(!rec.fabric);
    assert!(!rec.forge);
    assert_eq!(rec.all_versions, "");
}

#[test]
fn missing_optional_arrays_are_tolerated() {
    // Entries may omit loaders and game_versions entirely.
    let versions = versions_from_json(r#"[{}, {"loaders":["forge"]}]"#);
    let rec = derive_record("m", "u".into(), &project("M"), &versions);
    assert!(rec.forge);
    assert!(!rec.fabric);
    assert_eq!(rec.all_versions, "");
}

#[test]
fn all_versions_is_sorted_deduped_union() {
    let versions = versions_from_json(
        r#"[
            {"game_versions":["1.20.1","1.19.4"]},
            {"game_versions":["1.20.1","1.18.2"]}
        ]"#,
    );
    let rec = derive_record("m", "u".into(), &project("M"), &versions);
    assert_eq!(rec.all_versions, "1.18.2, 1.19.4, 1.20.1");
}

#[test]
fn family_flags_use_prefix_matching() {
    let versions = versions_from_json(r#"[{"game_versions":["1.20"]}]"#);
    let rec = derive_record("m", "u".into(), &project("M"), &versions);
    // families are parallel to 1.19 / 1.20 / 1.21
    assert_eq!(rec.families, vec![false, true, false]);
}

#[test]
fn family_columns_appear_only_when_selected() {
    let versions = versions_from_json(r#"[{"game_versions":["1.20","1.19.4"]}]"#);
    let rec = derive_record("m", "u".into(), &project("M"), &versions);

    let mut fields = FieldOptions::default();
    fields.families = vec![false, true, false]; // only 1.20.x selected

    let headers = headers_for(&fields);
    assert!(headers.contains(&"Minecraft Version 1.20.x".to_string()));
    assert!(!headers.iter().any(|h| h.contains("1.19")));
    assert!(!headers.iter().any(|h| h.contains("1.21")));

    let ds = to_dataset(&[rec], &fields);
    let row = &ds.rows[0];
    assert_eq!(row.len(), headers.len());
    // last column is the 1.20.x flag
    assert_eq!(row.last().unwrap(), "true");
}

#[test]
fn loader_columns_ignore_inclusion_toggles() {
    // Known quirk, kept on purpose: unchecking the loader toggles does not
    // remove the loader columns. Only family toggles gate columns.
    let mut fields = FieldOptions::default();
    fields.include_fabric = false;
    fields.include_forge = false;

    let headers = headers_for(&fields);
    assert!(headers.contains(&"Forge Modloader".to_string()));
    assert!(headers.contains(&"Fabric Modloader".to_string()));
}

#[test]
fn chart_aggregations_bucket_records() {
    let fabric_only = derive_record(
        "a",
        "u".into(),
        &project("A"),
        &versions_from_json(r#"[{"loaders":["fabric"],"game_versions":["1.20.1"]}]"#),
    );
    let both = derive_record(
        "b",
        "u".into(),
        &project("B"),
        &versions_from_json(
            r#"[{"loaders":["fabric","forge"],"game_versions":["1.19.4","1.20.1"]}]"#,
        ),
    );
    let neither = derive_record("c", "u".into(), &project("C"), &[]);

    let records = vec![fabric_only, both, neither];

    let usage = loader_usage(&records);
    assert_eq!(usage.fabric_only, 1);
    assert_eq!(usage.forge_only, 0);
    assert_eq!(usage.both, 1);
    assert_eq!(usage.neither, 1);
    assert_eq!(usage.total(), records.len());

    let fields = FieldOptions::default();
    let coverage = family_coverage(&records, &fields);
    assert_eq!(
        coverage,
        vec![
            ("Minecraft Version 1.19.x".to_string(), 1),
            ("Minecraft Version 1.20.x".to_string(), 2),
            ("Minecraft Version 1.21.x".to_string(), 0),
        ]
    );
}

#[test]
fn worked_example_end_to_end() {
    // The canonical example: two releases, selection {1.19.x, 1.20.x}.
    let versions = versions_from_json(
        r#"[
            {"loaders":["fabric"],"game_versions":["1.20","1.20.1"]},
            {"loaders":["forge"],"game_versions":["1.19.4"]}
        ]"#,
    );
    let rec = derive_record(
        "example",
        "https://modrinth.com/mod/example".into(),
        &project("Example"),
        &versions,
    );
    assert!(rec.forge);
    assert!(rec.fabric);
    assert_eq!(rec.all_versions, "1.19.4, 1.20, 1.20.1");

    let mut fields = FieldOptions::default();
    fields.families = vec![true, true, false];

    let ds = to_dataset(&[rec], &fields);
    let headers = ds.headers.clone().unwrap();
    let row = &ds.rows[0];

    let col = |name: &str| headers.iter().position(|h| h == name).unwrap();
    assert_eq!(row[col("Name")], "Example");
    assert_eq!(row[col("Mod URL")], "https://modrinth.com/mod/example");
    assert_eq!(row[col("Forge Modloader")], "true");
    assert_eq!(row[col("Fabric Modloader")], "true");
    assert_eq!(row[col("Minecraft Version 1.19.x")], "true");
    assert_eq!(row[col("Minecraft Version 1.20.x")], "true");
    assert_eq!(row[col("All Minecraft Versions Listed")], "1.19.4, 1.20, 1.20.1");
    assert!(!headers.iter().any(|h| h.contains("1.21")));
}
