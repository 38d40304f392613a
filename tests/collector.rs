// tests/collector.rs
//
// Collection page parsing: well-formed /mod/{id} links in, identifiers
// out; everything else ignored.

use modscrape::specs::collection::extract_mod_ids;

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn extracts_distinct_ids_and_ignores_noise() {
    let html = r#"
        <html><body>
          <a href="/mod/sodium">Sodium</a>
          <a href="/mod/lithium/">Lithium</a>
          <a href="/mod/sodium">Sodium again</a>
          <a href="/mod/phosphor">Phosphor</a>

          <a href="/mod/sodium/versions">deep link, skipped</a>
          <a href="/plugin/whatever">wrong prefix</a>
          <a href="/collection/abc">not a mod</a>
          <a>no href at all</a>
        </body></html>
    "#;

    let ids = extract_mod_ids(html);
    assert_eq!(
        sorted(ids),
        vec!["lithium".to_string(), "phosphor".to_string(), "sodium".to_string()]
    );
}

#[test]
fn empty_page_yields_empty_set() {
    assert!(extract_mod_ids("<html><body>nothing here</body></html>").is_empty());
}

#[test]
fn page_with_only_malformed_links_yields_empty_set() {
    let html = r#"
        <a href="/mod/">prefix only</a>
        <a href="/mod/a/b/c">too deep</a>
    "#;
    assert!(extract_mod_ids(html).is_empty());
}

#[test]
fn ids_survive_messy_markup() {
    // Unclosed tags and attribute noise should not lose well-formed links.
    let html = r#"
        <div class="grid"><a class="x" data-id="1" href="/mod/iris">Iris
        <a href="/mod/indium"><span>Indium</span></a>
    "#;
    let ids = extract_mod_ids(html);
    assert_eq!(sorted(ids), vec!["indium".to_string(), "iris".to_string()]);
}
