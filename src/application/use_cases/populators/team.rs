use crate::domain::markup::el;
use crate::domain::pitch::Team;
use crate::domain::view::TeamView;

pub fn populate(team: &Team) -> TeamView {
    let members = el("div").class("team-grid").children(
        team.members.iter().map(|member| {
            el("div")
                .class("member-card")
                .child(el("h3").text(member.name.clone()))
                .child(el("div").class("member-role").text(member.role.clone()))
                .child(el("p").text(member.bio.clone()))
        }),
    );

    TeamView {
        heading: team.heading.clone(),
        members,
    }
}
