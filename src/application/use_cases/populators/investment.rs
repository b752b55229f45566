use super::data_table;
use crate::application::use_cases::format::format_currency;
use crate::domain::pitch::Investment;
use crate::domain::view::InvestmentView;

pub fn populate(investment: &Investment) -> InvestmentView {
    let rows = investment
        .use_of_funds
        .iter()
        .map(|row| vec![row.purpose.clone(), format_currency(row.amount)])
        .collect();

    InvestmentView {
        heading: investment.heading.clone(),
        amount_sought: format_currency(investment.amount_sought),
        terms: investment.terms.clone(),
        use_of_funds_table: data_table("use-of-funds", &["Purpose", "Amount"], rows),
    }
}
