// tests/pipeline.rs
//
// The enrichment loop against a canned source: failures skip one
// identifier and never stop the run.

use std::time::Duration;

use modscrape::core::ScrapeError;
use modscrape::progress::Progress;
use modscrape::scrape::{ModSource, enrich_all};
use modscrape::specs::project::{ProjectInfo, VersionEntry};

struct FakeSource;

impl ModSource for FakeSource {
    fn fetch_project(&self, mod_id: &str) -> Result<ProjectInfo, ScrapeError> {
        match mod_id {
            "down" => Err(ScrapeError::Fetch("HTTP 500".into())),
            other => Ok(serde_json::from_str(&format!(r#"{{"title":"Mod {other}"}}"#)).unwrap()),
        }
    }

    fn fetch_versions(&self, mod_id: &str) -> Result<Vec<VersionEntry>, ScrapeError> {
        match mod_id {
            "garbled" => Err(ScrapeError::Parse("expected array".into())),
            _ => Ok(serde_json::from_str(
                r#"[{"loaders":["fabric"],"game_versions":["1.20.1"]}]"#,
            )
            .unwrap()),
        }
    }

    fn mod_page_url(&self, mod_id: &str) -> String {
        format!("https://modrinth.com/mod/{mod_id}")
    }
}

#[derive(Default)]
struct RecordingProgress {
    begun: Option<usize>,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.begun = Some(total);
    }
    fn item_done(&mut self, mod_id: &str) {
        self.done.push(mod_id.to_string());
    }
    fn item_failed(&mut self, mod_id: &str) {
        self.failed.push(mod_id.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn failed_identifier_is_skipped_and_later_ones_still_run() {
    let mut prog = RecordingProgress::default();
    let records = enrich_all(
        &FakeSource,
        &ids(&["down", "alpha", "beta"]),
        Duration::ZERO,
        Some(&mut prog),
    );

    // Zero records for the failing id; the two queued after it made it.
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.mod_id != "down"));
    assert_eq!(prog.begun, Some(3));
    assert_eq!(prog.done, vec!["alpha", "beta"]);
    assert_eq!(prog.failed, vec!["down"]);
    assert!(prog.finished);
}

#[test]
fn parse_failure_on_second_request_also_yields_no_record() {
    let records = enrich_all(&FakeSource, &ids(&["garbled"]), Duration::ZERO, None);
    assert!(records.is_empty());
}

#[test]
fn successful_records_carry_derived_fields() {
    let records = enrich_all(&FakeSource, &ids(&["alpha"]), Duration::ZERO, None);
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.name, "Mod alpha");
    assert_eq!(r.url, "https://modrinth.com/mod/alpha");
    assert!(r.fabric);
    assert!(!r.forge);
    assert_eq!(r.all_versions, "1.20.1");
}

#[test]
fn empty_identifier_list_is_a_valid_run() {
    let mut prog = RecordingProgress::default();
    let records = enrich_all(&FakeSource, &[], Duration::ZERO, Some(&mut prog));
    assert!(records.is_empty());
    assert_eq!(prog.begun, Some(0));
    assert!(prog.finished);
}
