use crate::domain::markup::Element;

/// Typed render targets for the page. Every placeholder the template fills is
/// a named field here, so a config field without an output slot (or the other
/// way round) fails at compile time instead of silently rendering blank.
#[derive(Debug, Clone)]
pub struct PageView {
    pub header: HeaderView,
    pub summary: SummaryView,
    pub problem: ProblemView,
    pub solution: SolutionView,
    pub market: MarketView,
    pub investment: InvestmentView,
    pub financial: FinancialView,
    pub impact: ImpactView,
    pub timeline: TimelineView,
    pub risks: RisksView,
    pub team: TeamView,
    pub regulatory: RegulatoryView,
    pub faq: FaqView,
    pub footer: FooterView,
}

#[derive(Debug, Clone)]
pub struct HeaderView {
    pub logo_text: String,
    pub company_name: String,
    pub tagline: String,
}

#[derive(Debug, Clone)]
pub struct SummaryView {
    pub heading: String,
    pub narrative: Element,
    pub highlights: Element,
}

#[derive(Debug, Clone)]
pub struct ProblemView {
    pub heading: String,
    pub narrative: String,
    pub statistics: Element,
}

#[derive(Debug, Clone)]
pub struct SolutionView {
    pub heading: String,
    pub description: String,
    pub features: Element,
}

#[derive(Debug, Clone)]
pub struct MarketView {
    pub heading: String,
    pub narrative: String,
    pub sizing_table: Element,
}

#[derive(Debug, Clone)]
pub struct InvestmentView {
    pub heading: String,
    pub amount_sought: String,
    pub terms: String,
    pub use_of_funds_table: Element,
}

#[derive(Debug, Clone)]
pub struct FinancialView {
    pub heading: String,
    pub assumptions: String,
    pub projections_table: Element,
}

#[derive(Debug, Clone)]
pub struct ImpactView {
    pub heading: String,
    pub narrative: String,
    pub metrics: Element,
}

#[derive(Debug, Clone)]
pub struct TimelineView {
    pub heading: String,
    pub milestones_table: Element,
}

#[derive(Debug, Clone)]
pub struct RisksView {
    pub heading: String,
    pub entries_table: Element,
}

#[derive(Debug, Clone)]
pub struct TeamView {
    pub heading: String,
    pub members: Element,
}

#[derive(Debug, Clone)]
pub struct RegulatoryView {
    pub heading: String,
    pub permits_table: Element,
}

#[derive(Debug, Clone)]
pub struct FaqView {
    pub heading: String,
    pub entries: Element,
}

#[derive(Debug, Clone)]
pub struct FooterView {
    pub disclaimer: String,
    pub copyright: String,
    pub contact_email_label: String,
    pub contact_email_href: String,
    pub contact_phone_label: String,
    pub contact_phone_href: String,
}
