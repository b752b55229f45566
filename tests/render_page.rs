use pitchsite::application::populate_page;
use pitchsite::domain::pitch::PitchConfig;
use pitchsite::infrastructure::template::{render_error_page, render_page};
use scraper::{Html, Selector};

fn fixture() -> PitchConfig {
    serde_json::from_str(include_str!("fixtures/pitch.json")).unwrap()
}

fn rendered() -> Html {
    let config = fixture();
    Html::parse_document(&render_page(&populate_page(&config)))
}

fn select(doc: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .map(|node| node.text().collect::<String>())
        .collect()
}

const SECTION_IDS: [&str; 12] = [
    "summary",
    "problem",
    "solution",
    "market",
    "investment",
    "financial",
    "impact",
    "timeline",
    "risks",
    "team",
    "regulatory",
    "faq",
];

#[test]
fn every_section_is_populated() {
    let doc = rendered();
    for id in SECTION_IDS {
        let headings = select(&doc, &format!("section#{} h2", id));
        assert_eq!(headings.len(), 1, "section {} missing heading", id);
        assert!(!headings[0].is_empty(), "section {} heading empty", id);
    }
    assert_eq!(select(&doc, "header h1"), vec!["GreenLoop Materials"]);
    assert_eq!(
        select(&doc, "header .tagline"),
        vec!["Closing the loop on construction waste"]
    );
}

#[test]
fn currency_and_percent_formatting() {
    let doc = rendered();
    let market_cells = select(&doc, "section#market tbody td");
    assert!(market_cells.contains(&"$48,000,000".to_string()));
    assert!(market_cells.contains(&"$500,000".to_string()));

    assert_eq!(select(&doc, "section#investment .amount-sought"), vec!["$2,500,000"]);

    let projection_cells = select(&doc, "section#financial tbody td");
    assert!(projection_cells.contains(&"-$300,000".to_string()));
    assert!(projection_cells.contains(&"25%".to_string()));
}

#[test]
fn initial_active_tab_is_unique() {
    let doc = rendered();
    let active_tabs = select(&doc, ".tab-button.active");
    assert_eq!(active_tabs, vec!["Summary"]);
    let active_selector = Selector::parse("section.deck-section.active").unwrap();
    let active: Vec<_> = doc
        .select(&active_selector)
        .filter_map(|node| node.value().attr("id"))
        .collect();
    assert_eq!(active, vec!["summary"]);
}

#[test]
fn milestones_preserve_input_order() {
    let doc = rendered();
    let cells = select(&doc, "section#timeline tbody tr td:first-child");
    assert_eq!(
        cells,
        vec!["Permit filed", "Groundbreaking", "First processing line live"]
    );
}

#[test]
fn contact_links_are_built_from_config() {
    let doc = rendered();
    let href_selector = Selector::parse("footer .contact a").unwrap();
    let hrefs: Vec<_> = doc
        .select(&href_selector)
        .filter_map(|node| node.value().attr("href").map(str::to_string))
        .collect();
    assert_eq!(
        hrefs,
        vec!["mailto:invest@greenloop.example", "tel:+1-555-010-2030"]
    );
}

#[test]
fn rendering_is_idempotent() {
    let config = fixture();
    let first = render_page(&populate_page(&config));
    let second = render_page(&populate_page(&config));
    assert_eq!(first, second);
}

#[test]
fn faq_entries_start_closed() {
    let doc = rendered();
    let questions = select(&doc, "section#faq .faq-entry .faq-question");
    assert_eq!(questions.len(), 2);
    assert!(select(&doc, "section#faq .faq-entry.open").is_empty());
}

#[test]
fn error_page_replaces_all_content() {
    let html = render_error_page();
    let doc = Html::parse_document(&html);
    assert!(!select(&doc, ".error-panel h1").is_empty());
    assert!(select(&doc, "section.deck-section").is_empty());
    assert!(select(&doc, ".tab-button").is_empty());
}
