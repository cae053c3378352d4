// All LLM prompt constants for the ideas module.

/// System prompt — persona plus hard output constraints.
pub const IDEAS_SYSTEM: &str = "You are Mr. SideHustle, a pragmatic small-business coach. \
    You design realistic side hustles that fit a person's time, money, skills and location. \
    You write plainly: short sentences, concrete numbers, no hype. \
    You never use emojis. \
    You MUST respond with valid JSON only, matching the provided schema exactly. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Acceptance criteria the model self-checks before answering.
pub const QUALITY_RUBRIC: &str = "QUALITY RUBRIC. Before you answer, check every idea against \
    each rule and rewrite anything that fails:
- UNIQUE: the three ideas differ in customer, product and channel. No two share a title theme.
- CONCISE: every section body is at most 3 short sentences.
- GROUNDED: tooling names are real, widely available products; costs and prices are plausible \
for the user's budget and location.
- NO HYPE: never write guaranteed, effortless, overnight, get rich, no risk, passive income, \
100% success, secret hack, or viral overnight. No emojis.
- SIMPLE NUMBERS: round prices and costs to whole or .99 amounts; marginPct is a percentage \
between 0 and 100; breakEvenCustomers is a whole number.
- CURRENCY: use the currency the LOCALE line asks for, consistently across all numbers.
- ACTIONABLE: firstThreeSteps start with a verb and can each be done within one week.";

/// User prompt template.
/// Replace: {profile_json}, {locale_hint}, {headings}
pub const IDEAS_PROMPT_TEMPLATE: &str = r#"Here is the user's profile:
{profile_json}

{locale_hint}

TASK: Propose exactly 3 side-hustle ideas that fit this profile's weekly hours and seed budget.

For EACH idea return:
- "title" (max 70 chars) and "tagline" (max 120 chars)
- "sections": exactly 10 objects {"heading", "body"}, using these headings EXACTLY and in THIS ORDER:
{headings}
  Each body is at most 550 characters.
- "difficulty" and "worthiness": integers from 1 (lowest) to 10 (highest)
- "firstThreeSteps": exactly 3 concrete actions, max 140 chars each
- "insights":
  - "feasibility": one honest sentence on fit with the user's time and budget (max 240 chars)
  - "numbers": {"price", "cogs", "marginPct", "breakEvenCustomers", "startupCost", "monthlyCost"}
  - "validation": exactly 3 cheap experiments to test demand (max 140 chars each)
  - "risks": exactly 3 main risks (max 140 chars each)
  - "tooling": 2 to 6 tools, each {"name", "use", "estMonthly"}
  - "kpis": {"week1", "month1", "quarter1"} milestone targets

Return a JSON object: {"ideas": [ ...3 ideas... ]}"#;
