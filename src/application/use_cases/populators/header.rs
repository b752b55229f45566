use crate::domain::pitch::Company;
use crate::domain::view::HeaderView;

pub fn populate(company: &Company) -> HeaderView {
    HeaderView {
        logo_text: company.logo_text.clone(),
        company_name: company.name.clone(),
        tagline: company.tagline.clone(),
    }
}
