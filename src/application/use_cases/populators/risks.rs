use super::data_table;
use crate::domain::pitch::Risks;
use crate::domain::view::RisksView;

pub fn populate(risks: &Risks) -> RisksView {
    let rows = risks
        .entries
        .iter()
        .map(|entry| vec![entry.risk.clone(), entry.mitigation.clone()])
        .collect();

    RisksView {
        heading: risks.heading.clone(),
        entries_table: data_table("risk-register", &["Risk", "Mitigation"], rows),
    }
}
