use super::data_table;
use crate::application::use_cases::format::{
    format_currency, format_currency_signed, format_percent,
};
use crate::domain::pitch::Financial;
use crate::domain::view::FinancialView;

pub fn populate(financial: &Financial) -> FinancialView {
    let rows = financial
        .projections
        .iter()
        .map(|projection| {
            vec![
                projection.year.clone(),
                format_currency(projection.revenue),
                format_currency_signed(projection.ebitda),
                format_percent(projection.margin_pct),
            ]
        })
        .collect();

    FinancialView {
        heading: financial.heading.clone(),
        assumptions: financial.assumptions.clone(),
        projections_table: data_table(
            "projections",
            &["Year", "Revenue", "EBITDA", "Margin"],
            rows,
        ),
    }
}
