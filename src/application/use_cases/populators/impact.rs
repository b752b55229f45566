use crate::domain::markup::el;
use crate::domain::pitch::Impact;
use crate::domain::view::ImpactView;

pub fn populate(impact: &Impact) -> ImpactView {
    let metrics = el("ul").class("impact-metrics").children(
        impact.metrics.iter().map(|metric| {
            el("li")
                .child(el("strong").text(metric.value.clone()))
                .child(el("span").text(metric.metric.clone()))
        }),
    );

    ImpactView {
        heading: impact.heading.clone(),
        narrative: impact.narrative.clone(),
        metrics,
    }
}
