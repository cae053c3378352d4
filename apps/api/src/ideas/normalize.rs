//! Clamp pass — turns one loosely-typed idea from the generator into an `Idea`
//! that satisfies every bound, whatever the generator actually sent.
//!
//! Strings are sanitized and re-capped; scores are coerced into [1, 10];
//! money is rounded to cents; fixed-size lists are cut or padded.

use serde_json::Value;
use tracing::warn;

use crate::ideas::models::{Idea, Insights, Kpis, Numbers, Section, Tool};
use crate::ideas::sanitize::sanitize_text;
use crate::ideas::schema::*;

pub fn normalize_idea(raw: &Value) -> Idea {
    let insights = &raw["insights"];

    Idea {
        title: text(&raw["title"], TITLE_MAX),
        tagline: text(&raw["tagline"], TAGLINE_MAX),
        sections: sections(&raw["sections"]),
        difficulty: clamp_score(&raw["difficulty"]),
        worthiness: clamp_score(&raw["worthiness"]),
        first_three_steps: text_list(&raw["firstThreeSteps"], STEP_COUNT, STEP_MAX),
        insights: Insights {
            feasibility: text(&insights["feasibility"], FEASIBILITY_MAX),
            numbers: numbers(&insights["numbers"]),
            validation: text_list(&insights["validation"], VALIDATION_COUNT, BULLET_MAX),
            risks: text_list(&insights["risks"], RISK_COUNT, BULLET_MAX),
            tooling: tooling(&insights["tooling"]),
            kpis: Kpis {
                week1: text(&insights["kpis"]["week1"], KPI_WEEK1_MAX),
                month1: text(&insights["kpis"]["month1"], KPI_MONTH1_MAX),
                quarter1: text(&insights["kpis"]["quarter1"], KPI_QUARTER1_MAX),
            },
        },
    }
}

/// Reads a number, accepting numeric strings. Non-finite values count as missing.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Difficulty/worthiness: rounded and clamped into [1, 10]; non-numeric → 1.
pub fn clamp_score(value: &Value) -> u8 {
    match coerce_number(value) {
        Some(n) => {
            let clamped = n.round().clamp(SCORE_MIN as f64, SCORE_MAX as f64);
            if clamped != n {
                warn!("Score {value} out of range or fractional; clamped to {clamped}");
            }
            clamped as u8
        }
        None => {
            warn!("Non-numeric score {value}; defaulting to {SCORE_MIN}");
            SCORE_MIN
        }
    }
}

pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

fn money(value: &Value) -> f64 {
    coerce_number(value).map(round2).unwrap_or(0.0)
}

fn whole_count(value: &Value) -> u64 {
    coerce_number(value)
        .map(|n| n.round().max(0.0) as u64)
        .unwrap_or(0)
}

fn text(value: &Value, max: usize) -> String {
    match value {
        Value::String(s) => sanitize_text(s, max),
        Value::Null => String::new(),
        other => sanitize_text(&other.to_string(), max),
    }
}

/// Exactly `count` entries: extras dropped, missing ones filled with "".
fn text_list(value: &Value, count: usize, max: usize) -> Vec<String> {
    let mut items: Vec<String> = value
        .as_array()
        .map(|arr| arr.iter().take(count).map(|v| text(v, max)).collect())
        .unwrap_or_default();
    items.resize(count, String::new());
    items
}

/// Exactly ten sections under the canonical headings, in canonical order.
/// A body is taken from the section carrying that heading; headings with no
/// match fall back to their position, or to the first section nobody claimed.
/// Each raw section is used at most once.
fn sections(value: &Value) -> Vec<Section> {
    let raw = value.as_array().map(Vec::as_slice).unwrap_or_default();
    let mut claimed = vec![false; raw.len()];
    let mut picks: Vec<Option<usize>> = Vec::with_capacity(CANONICAL_HEADINGS.len());

    for heading in CANONICAL_HEADINGS {
        let found = (0..raw.len()).find(|&j| !claimed[j] && has_heading(&raw[j], heading));
        if let Some(j) = found {
            claimed[j] = true;
        }
        picks.push(found);
    }

    for (i, pick) in picks.iter_mut().enumerate() {
        if pick.is_some() {
            continue;
        }
        let fallback = if i < raw.len() && !claimed[i] {
            Some(i)
        } else {
            (0..raw.len()).find(|&j| !claimed[j])
        };
        if let Some(j) = fallback {
            claimed[j] = true;
        }
        *pick = fallback;
    }

    CANONICAL_HEADINGS
        .iter()
        .zip(picks)
        .map(|(&heading, pick)| Section {
            heading: heading.to_string(),
            body: pick
                .map(|j| text(&raw[j]["body"], SECTION_BODY_MAX))
                .unwrap_or_default(),
        })
        .collect()
}

fn has_heading(section: &Value, heading: &str) -> bool {
    section["heading"]
        .as_str()
        .is_some_and(|h| h.trim().eq_ignore_ascii_case(heading))
}

fn numbers(value: &Value) -> Numbers {
    Numbers {
        price: money(&value["price"]),
        cogs: money(&value["cogs"]),
        margin_pct: money(&value["marginPct"]),
        break_even_customers: whole_count(&value["breakEvenCustomers"]),
        startup_cost: money(&value["startupCost"]),
        monthly_cost: money(&value["monthlyCost"]),
    }
}

fn tooling(value: &Value) -> Vec<Tool> {
    let tools: Vec<Tool> = value
        .as_array()
        .map(|arr| {
            arr.iter()
                .take(TOOLING_MAX)
                .map(|t| Tool {
                    name: text(&t["name"], TOOL_NAME_MAX),
                    purpose: text(&t["use"], TOOL_USE_MAX),
                    est_monthly: money(&t["estMonthly"]),
                })
                .collect()
        })
        .unwrap_or_default();

    if tools.len() < TOOLING_MIN {
        warn!("Generator returned {} tools (expected at least {TOOLING_MIN})", tools.len());
    }
    tools
}
