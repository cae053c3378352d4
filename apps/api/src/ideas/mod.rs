// Side-hustle idea generation.
// Implements: profile validation, prompt assembly, strict output schema,
// one generation call, then sanitize → clamp → deduplicate.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod dedup;
pub mod generator;
pub mod handlers;
pub mod locale;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod sanitize;
pub mod schema;
pub mod validation;

#[cfg(test)]
pub mod fixtures;
