use super::data_table;
use crate::domain::pitch::Timeline;
use crate::domain::view::TimelineView;

pub fn populate(timeline: &Timeline) -> TimelineView {
    let rows = timeline
        .milestones
        .iter()
        .map(|milestone| vec![milestone.event.clone(), milestone.date.clone()])
        .collect();

    TimelineView {
        heading: timeline.heading.clone(),
        milestones_table: data_table("milestones", &["Milestone", "Date"], rows),
    }
}
