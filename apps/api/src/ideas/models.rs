use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated request profile.
///
/// Numeric fields stay as raw JSON values: they are only checked for presence,
/// and the prompt embeds them exactly as the caller sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: Value,
    pub location: String,
    pub strengths: String,
    pub enjoys: String,
    pub skillset: String,
    pub hours_per_week: Value,
    pub seed_budget: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaSet {
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub title: String,
    pub tagline: String,
    pub sections: Vec<Section>,
    pub difficulty: u8,
    pub worthiness: u8,
    pub first_three_steps: Vec<String>,
    pub insights: Insights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub feasibility: String,
    pub numbers: Numbers,
    pub validation: Vec<String>,
    pub risks: Vec<String>,
    pub tooling: Vec<Tool>,
    pub kpis: Kpis,
}

/// Rough unit economics. Money values are in whatever currency the locale hint asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Numbers {
    pub price: f64,
    pub cogs: f64,
    pub margin_pct: f64,
    pub break_even_customers: u64,
    pub startup_cost: f64,
    pub monthly_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(rename = "use")]
    pub purpose: String,
    pub est_monthly: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub week1: String,
    pub month1: String,
    pub quarter1: String,
}
