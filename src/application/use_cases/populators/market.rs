use super::data_table;
use crate::application::use_cases::format::format_currency;
use crate::domain::pitch::Market;
use crate::domain::view::MarketView;

pub fn populate(market: &Market) -> MarketView {
    let rows = market
        .sizing
        .iter()
        .map(|row| vec![row.segment.clone(), format_currency(row.value)])
        .collect();

    MarketView {
        heading: market.heading.clone(),
        narrative: market.narrative.clone(),
        sizing_table: data_table("market-sizing", &["Segment", "Size"], rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pitch::MarketSegment;

    #[test]
    fn test_sizing_values_are_currency() {
        let market = Market {
            heading: "Market".to_string(),
            narrative: "Growing fast.".to_string(),
            sizing: vec![MarketSegment {
                segment: "TAM".to_string(),
                value: 500000,
            }],
        };
        let view = populate(&market);
        assert!(view.sizing_table.to_html().contains("<td>$500,000</td>"));
    }
}
