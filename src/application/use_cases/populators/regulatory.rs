use super::data_table;
use crate::domain::pitch::Regulatory;
use crate::domain::view::RegulatoryView;

pub fn populate(regulatory: &Regulatory) -> RegulatoryView {
    let rows = regulatory
        .permits
        .iter()
        .map(|permit| {
            vec![
                permit.permit.clone(),
                permit.authority.clone(),
                permit.status.clone(),
            ]
        })
        .collect();

    RegulatoryView {
        heading: regulatory.heading.clone(),
        permits_table: data_table("permits", &["Permit", "Authority", "Status"], rows),
    }
}
