use crate::application::use_cases::tabs::{TabBar, DECK_TABS};
use crate::domain::markup::{el, Element};
use crate::domain::view::{FooterView, HeaderView, PageView};

pub const DECK_CSS: &str = include_str!("../../assets/deck.css");
pub const DECK_JS: &str = include_str!("../../assets/deck.js");

/// Composes the full page from the typed view. The skeleton is fixed: header,
/// tab navigation, one `<section>` per deck tab, footer. The initial active
/// tab/section comes from the tab state machine (its first entry).
pub fn render_page(view: &PageView) -> String {
    let tabs = TabBar::new();
    let body = el("body")
        .child(page_header(&view.header))
        .child(tab_nav(&tabs))
        .child(deck_sections(view, &tabs))
        .child(page_footer(&view.footer));
    document(&view.header.company_name, body)
}

/// The static notice shown when the configuration document cannot be loaded.
/// It replaces the entire page; nothing partial is rendered.
pub fn render_error_page() -> String {
    let panel = el("main")
        .class("error-panel")
        .child(el("h1").text("Content unavailable"))
        .child(el("p").text("The presentation could not be loaded. Please try again later."));
    document("Content unavailable", el("body").child(panel))
}

fn document(title: &str, body: Element) -> String {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(title))
        .child(el("link").attr("rel", "stylesheet").attr("href", "deck.css"))
        .child(el("script").attr("src", "deck.js").attr("defer", "defer"));

    let mut out = String::from("<!DOCTYPE html>\n");
    el("html").attr("lang", "en").child(head).child(body).render(&mut out);
    out
}

fn page_header(header: &HeaderView) -> Element {
    el("header")
        .class("site-header")
        .child(el("div").class("logo").text(header.logo_text.clone()))
        .child(
            el("div")
                .class("site-title")
                .child(el("h1").text(header.company_name.clone()))
                .child(el("p").class("tagline").text(header.tagline.clone())),
        )
}

fn tab_nav(tabs: &TabBar) -> Element {
    el("nav").class("tab-bar").children(DECK_TABS.iter().map(|tab| {
        let class = if tabs.is_active(tab.id) {
            "tab-button active"
        } else {
            "tab-button"
        };
        el("button")
            .class(class)
            .attr("type", "button")
            .attr("data-target", tab.id)
            .text(tab.label)
    }))
}

fn deck_sections(view: &PageView, tabs: &TabBar) -> Element {
    let sections = [
        section_body("summary", &view.summary.heading, vec![
            view.summary.narrative.clone(),
            view.summary.highlights.clone(),
        ]),
        section_body("problem", &view.problem.heading, vec![
            el("p").text(view.problem.narrative.clone()),
            view.problem.statistics.clone(),
        ]),
        section_body("solution", &view.solution.heading, vec![
            el("p").text(view.solution.description.clone()),
            view.solution.features.clone(),
        ]),
        section_body("market", &view.market.heading, vec![
            el("p").text(view.market.narrative.clone()),
            view.market.sizing_table.clone(),
        ]),
        section_body("investment", &view.investment.heading, vec![
            el("p")
                .class("amount-sought")
                .text(view.investment.amount_sought.clone()),
            el("p").text(view.investment.terms.clone()),
            view.investment.use_of_funds_table.clone(),
        ]),
        section_body("financial", &view.financial.heading, vec![
            el("p").text(view.financial.assumptions.clone()),
            view.financial.projections_table.clone(),
        ]),
        section_body("impact", &view.impact.heading, vec![
            el("p").text(view.impact.narrative.clone()),
            view.impact.metrics.clone(),
        ]),
        section_body("timeline", &view.timeline.heading, vec![
            view.timeline.milestones_table.clone(),
        ]),
        section_body("risks", &view.risks.heading, vec![
            view.risks.entries_table.clone(),
        ]),
        section_body("team", &view.team.heading, vec![view.team.members.clone()]),
        section_body("regulatory", &view.regulatory.heading, vec![
            view.regulatory.permits_table.clone(),
        ]),
        section_body("faq", &view.faq.heading, vec![view.faq.entries.clone()]),
    ];

    el("main").children(sections.into_iter().map(|(id, heading, children)| {
        let class = if tabs.is_active(id) {
            "deck-section active"
        } else {
            "deck-section"
        };
        el("section")
            .attr("id", id)
            .class(class)
            .child(el("h2").text(heading))
            .children(children)
    }))
}

fn section_body(
    id: &'static str,
    heading: &str,
    children: Vec<Element>,
) -> (&'static str, String, Vec<Element>) {
    (id, heading.to_string(), children)
}

fn page_footer(footer: &FooterView) -> Element {
    el("footer")
        .class("site-footer")
        .child(el("p").class("disclaimer").text(footer.disclaimer.clone()))
        .child(
            el("div")
                .class("contact")
                .child(
                    el("a")
                        .attr("href", footer.contact_email_href.clone())
                        .text(footer.contact_email_label.clone()),
                )
                .child(
                    el("a")
                        .attr("href", footer.contact_phone_href.clone())
                        .text(footer.contact_phone_label.clone()),
                ),
        )
        .child(el("p").class("copyright").text(footer.copyright.clone()))
}
