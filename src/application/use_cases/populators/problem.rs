use crate::domain::markup::el;
use crate::domain::pitch::Problem;
use crate::domain::view::ProblemView;

pub fn populate(problem: &Problem) -> ProblemView {
    let statistics = el("div").class("stat-grid").children(
        problem.statistics.iter().map(|stat| {
            el("div")
                .class("stat-card")
                .child(el("div").class("stat-value").text(stat.value.clone()))
                .child(el("div").class("stat-label").text(stat.label.clone()))
                .child(el("p").class("stat-detail").text(stat.detail.clone()))
        }),
    );

    ProblemView {
        heading: problem.heading.clone(),
        narrative: problem.narrative.clone(),
        statistics,
    }
}
