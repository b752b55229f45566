use serde::{Deserialize, Serialize};

/// The configuration document driving every piece of displayed content.
/// Loaded once per invocation and passed by reference into the populators;
/// nothing mutates it after parse.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PitchConfig {
    pub company: Company,
    pub summary: Summary,
    pub problem: Problem,
    pub solution: Solution,
    pub market: Market,
    pub investment: Investment,
    pub financial: Financial,
    pub impact: Impact,
    pub timeline: Timeline,
    pub risks: Risks,
    pub team: Team,
    pub regulatory: Regulatory,
    pub faq: Faq,
    pub footer: Footer,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub logo_text: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub heading: String,
    pub narrative: String,
    pub statistics: Vec<Statistic>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub value: String,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub heading: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub heading: String,
    pub narrative: String,
    pub sizing: Vec<MarketSegment>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketSegment {
    pub segment: String,
    pub value: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub heading: String,
    pub amount_sought: u64,
    pub terms: String,
    pub use_of_funds: Vec<FundAllocation>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FundAllocation {
    pub purpose: String,
    pub amount: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub heading: String,
    pub assumptions: String,
    pub projections: Vec<Projection>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub year: String,
    pub revenue: u64,
    pub ebitda: i64,
    pub margin_pct: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub heading: String,
    pub narrative: String,
    pub metrics: Vec<ImpactMetric>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetric {
    pub metric: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub heading: String,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub event: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Risks {
    pub heading: String,
    pub entries: Vec<RiskEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    pub risk: String,
    pub mitigation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub heading: String,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Regulatory {
    pub heading: String,
    pub permits: Vec<Permit>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
    pub permit: String,
    pub authority: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub heading: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub disclaimer: String,
    pub copyright: String,
}
