use super::paragraph_block;
use crate::domain::markup::el;
use crate::domain::pitch::Summary;
use crate::domain::view::SummaryView;

pub fn populate(summary: &Summary) -> SummaryView {
    let highlights = el("ul").class("highlights").children(
        summary.highlights.iter().map(|highlight| {
            el("li")
                .child(el("strong").text(highlight.value.clone()))
                .child(el("span").text(highlight.label.clone()))
        }),
    );

    SummaryView {
        heading: summary.heading.clone(),
        narrative: paragraph_block("summary-narrative", &summary.paragraphs),
        highlights,
    }
}
