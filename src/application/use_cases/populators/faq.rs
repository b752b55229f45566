use crate::application::use_cases::faq::FaqToggles;
use crate::domain::markup::el;
use crate::domain::pitch::Faq;
use crate::domain::view::FaqView;

/// The initial open/closed classes come from the toggle state machine (all
/// closed); `deck.js` applies the same per-entry class toggle on click, with
/// no exclusivity between entries.
pub fn populate(faq: &Faq) -> FaqView {
    let toggles = FaqToggles::new(faq.entries.len());
    let entries = el("div").class("faq-list").children(
        faq.entries.iter().enumerate().map(|(index, entry)| {
            let class = if toggles.is_open(index) {
                "faq-entry open"
            } else {
                "faq-entry"
            };
            el("div")
                .class(class)
                .child(
                    el("button")
                        .class("faq-question")
                        .attr("type", "button")
                        .text(entry.question.clone()),
                )
                .child(
                    el("div")
                        .class("faq-answer")
                        .child(el("p").text(entry.answer.clone())),
                )
        }),
    );

    FaqView {
        heading: faq.heading.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pitch::FaqEntry;

    #[test]
    fn test_entries_render_closed() {
        let faq = Faq {
            heading: "FAQ".to_string(),
            entries: vec![
                FaqEntry {
                    question: "When?".to_string(),
                    answer: "Soon.".to_string(),
                },
                FaqEntry {
                    question: "How much?".to_string(),
                    answer: "$25,000 minimum.".to_string(),
                },
            ],
        };
        let html = populate(&faq).entries.to_html();
        assert_eq!(html.matches("class=\"faq-entry\"").count(), 2);
        assert!(!html.contains("faq-entry open"));
    }
}
