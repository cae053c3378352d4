//! Output contract — canonical headings, length caps, and the strict JSON
//! schema handed to the generator.
//!
//! Every object carries `additionalProperties: false` and lists all of its
//! properties as required; every array has a fixed or bounded cardinality.

use serde_json::{json, Value};

pub const SCHEMA_NAME: &str = "side_hustle_ideas";

pub const IDEA_COUNT: usize = 3;

/// Section headings, in the order every idea must present them.
pub const CANONICAL_HEADINGS: [&str; 10] = [
    "The problem",
    "The product/service",
    "Target customer",
    "What you need to build it",
    "How it makes money",
    "Pricing",
    "Getting the first customers",
    "Time commitment",
    "Why this difficulty",
    "Why it's worth it",
];

/// Index of "The product/service" in `CANONICAL_HEADINGS`.
pub const PRODUCT_SECTION_INDEX: usize = 1;

pub const TITLE_MAX: usize = 70;
pub const TAGLINE_MAX: usize = 120;
pub const SECTION_BODY_MAX: usize = 550;
pub const STEP_MAX: usize = 140;
pub const FEASIBILITY_MAX: usize = 240;
pub const BULLET_MAX: usize = 140;
pub const TOOL_NAME_MAX: usize = 40;
pub const TOOL_USE_MAX: usize = 100;
pub const KPI_WEEK1_MAX: usize = 120;
pub const KPI_MONTH1_MAX: usize = 140;
pub const KPI_QUARTER1_MAX: usize = 160;

pub const STEP_COUNT: usize = 3;
pub const VALIDATION_COUNT: usize = 3;
pub const RISK_COUNT: usize = 3;
pub const TOOLING_MIN: usize = 2;
pub const TOOLING_MAX: usize = 6;

pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

fn bounded_string(max: usize) -> Value {
    json!({ "type": "string", "maxLength": max })
}

fn string_list(count: usize, max: usize) -> Value {
    json!({
        "type": "array",
        "minItems": count,
        "maxItems": count,
        "items": bounded_string(max),
    })
}

fn strict_object(properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
        "required": required,
    })
}

/// Builds the response schema for one `IdeaSet`.
pub fn ideas_schema() -> Value {
    let section = strict_object(json!({
        "heading": { "type": "string", "enum": CANONICAL_HEADINGS },
        "body": bounded_string(SECTION_BODY_MAX),
    }));

    let numbers = strict_object(json!({
        "price": { "type": "number" },
        "cogs": { "type": "number" },
        "marginPct": { "type": "number" },
        "breakEvenCustomers": { "type": "integer" },
        "startupCost": { "type": "number" },
        "monthlyCost": { "type": "number" },
    }));

    let tool = strict_object(json!({
        "name": bounded_string(TOOL_NAME_MAX),
        "use": bounded_string(TOOL_USE_MAX),
        "estMonthly": { "type": "number" },
    }));

    let kpis = strict_object(json!({
        "week1": bounded_string(KPI_WEEK1_MAX),
        "month1": bounded_string(KPI_MONTH1_MAX),
        "quarter1": bounded_string(KPI_QUARTER1_MAX),
    }));

    let insights = strict_object(json!({
        "feasibility": bounded_string(FEASIBILITY_MAX),
        "numbers": numbers,
        "validation": string_list(VALIDATION_COUNT, BULLET_MAX),
        "risks": string_list(RISK_COUNT, BULLET_MAX),
        "tooling": {
            "type": "array",
            "minItems": TOOLING_MIN,
            "maxItems": TOOLING_MAX,
            "items": tool,
        },
        "kpis": kpis,
    }));

    let idea = strict_object(json!({
        "title": bounded_string(TITLE_MAX),
        "tagline": bounded_string(TAGLINE_MAX),
        "sections": {
            "type": "array",
            "minItems": CANONICAL_HEADINGS.len(),
            "maxItems": CANONICAL_HEADINGS.len(),
            "items": section,
        },
        "difficulty": { "type": "integer", "minimum": SCORE_MIN, "maximum": SCORE_MAX },
        "worthiness": { "type": "integer", "minimum": SCORE_MIN, "maximum": SCORE_MAX },
        "firstThreeSteps": string_list(STEP_COUNT, STEP_MAX),
        "insights": insights,
    }));

    strict_object(json!({
        "ideas": {
            "type": "array",
            "minItems": IDEA_COUNT,
            "maxItems": IDEA_COUNT,
            "items": idea,
        },
    }))
}
