//! Canned generator output shared by the ideas tests.

use serde_json::{json, Value};

use crate::ideas::schema::{CANONICAL_HEADINGS, PRODUCT_SECTION_INDEX};

/// One well-formed idea as the generator would return it.
pub fn raw_idea(title: &str, product_body: &str) -> Value {
    let sections: Vec<Value> = CANONICAL_HEADINGS
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let body = if i == PRODUCT_SECTION_INDEX {
                product_body.to_string()
            } else {
                format!("Notes on {}.", heading.to_lowercase())
            };
            json!({ "heading": heading, "body": body })
        })
        .collect();

    json!({
        "title": title,
        "tagline": "Small, local, and run on weekends",
        "sections": sections,
        "difficulty": 4,
        "worthiness": 7,
        "firstThreeSteps": [
            "List ten people who might buy this",
            "Build a one-page offer",
            "Ask three of them for feedback"
        ],
        "insights": {
            "feasibility": "Fits 8 hours a week and a small budget.",
            "numbers": {
                "price": 40,
                "cogs": 8.5,
                "marginPct": 78.75,
                "breakEvenCustomers": 5,
                "startupCost": 150,
                "monthlyCost": 25
            },
            "validation": ["Post in a local group", "Run a pre-sale", "Interview five buyers"],
            "risks": ["Seasonal demand", "Low repeat rate", "Time overruns"],
            "tooling": [
                { "name": "Canva", "use": "Flyers and social posts", "estMonthly": 13 },
                { "name": "Stripe", "use": "Payments", "estMonthly": 0 }
            ],
            "kpis": {
                "week1": "5 conversations",
                "month1": "3 paying customers",
                "quarter1": "15 repeat customers"
            }
        }
    })
}

pub fn three_distinct_ideas() -> Vec<Value> {
    vec![
        raw_idea("Weekend Bike Repair", "Fix bikes in a garage on Saturdays."),
        raw_idea("Sourdough Subscription", "Deliver fresh loaves to neighbors weekly."),
        raw_idea("Resume Photo Studio", "Headshots for job seekers in a pop-up studio."),
    ]
}

/// Serializes ideas the way the generator returns them: `{"ideas": [...]}` as text.
pub fn model_output(ideas: Vec<Value>) -> String {
    json!({ "ideas": ideas }).to_string()
}
