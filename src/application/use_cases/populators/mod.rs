use crate::domain::markup::{el, Element};
use crate::domain::pitch::PitchConfig;
use crate::domain::view::PageView;

pub mod faq;
pub mod financial;
pub mod footer;
pub mod header;
pub mod impact;
pub mod investment;
pub mod market;
pub mod problem;
pub mod regulatory;
pub mod risks;
pub mod solution;
pub mod summary;
pub mod team;
pub mod timeline;

/// Maps the whole configuration document onto the typed page view. Each
/// section populator is a pure function of its config subset, so rendering
/// the same document twice yields the same view.
pub fn populate_page(config: &PitchConfig) -> PageView {
    PageView {
        header: header::populate(&config.company),
        summary: summary::populate(&config.summary),
        problem: problem::populate(&config.problem),
        solution: solution::populate(&config.solution),
        market: market::populate(&config.market),
        investment: investment::populate(&config.investment),
        financial: financial::populate(&config.financial),
        impact: impact::populate(&config.impact),
        timeline: timeline::populate(&config.timeline),
        risks: risks::populate(&config.risks),
        team: team::populate(&config.team),
        regulatory: regulatory::populate(&config.regulatory),
        faq: faq::populate(&config.faq),
        footer: footer::populate(&config.company, &config.footer),
    }
}

/// One `<li>` per item, input order preserved.
pub(crate) fn bullet_list(
    class: &'static str,
    items: impl IntoIterator<Item = String>,
) -> Element {
    el("ul")
        .class(class)
        .children(items.into_iter().map(|item| el("li").text(item)))
}

/// Fixed-label header row plus one body row per record, input order preserved.
pub(crate) fn data_table(
    class: &'static str,
    headers: &[&'static str],
    rows: Vec<Vec<String>>,
) -> Element {
    let head = el("thead").child(
        el("tr").children(headers.iter().map(|label| el("th").text(*label))),
    );
    let body = el("tbody").children(
        rows.into_iter()
            .map(|cells| el("tr").children(cells.into_iter().map(|cell| el("td").text(cell)))),
    );
    el("table").class(class).child(head).child(body)
}

/// One `<p>` per paragraph, wrapped so the fragment stays a single element.
pub(crate) fn paragraph_block(class: &'static str, paragraphs: &[String]) -> Element {
    el("div")
        .class(class)
        .children(paragraphs.iter().map(|text| el("p").text(text.clone())))
}
