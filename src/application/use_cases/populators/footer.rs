use crate::application::use_cases::format::{mailto_href, tel_href};
use crate::domain::pitch::{Company, Footer};
use crate::domain::view::FooterView;

/// The footer carries the contact affordances: the displayed email/phone text
/// stays as authored, while the hrefs get the mailto:/tel: treatment.
pub fn populate(company: &Company, footer: &Footer) -> FooterView {
    FooterView {
        disclaimer: footer.disclaimer.clone(),
        copyright: footer.copyright.clone(),
        contact_email_label: company.contact_email.clone(),
        contact_email_href: mailto_href(&company.contact_email),
        contact_phone_label: company.contact_phone.clone(),
        contact_phone_href: tel_href(&company.contact_phone),
    }
}
