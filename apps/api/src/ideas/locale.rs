//! Locale heuristic — decides which currency hint the prompt carries.

/// EU member-state names. Matched as case-insensitive substrings.
const EU_COUNTRY_NAMES: &[&str] = &[
    "austria",
    "belgium",
    "bulgaria",
    "croatia",
    "cyprus",
    "czech",
    "denmark",
    "estonia",
    "finland",
    "france",
    "germany",
    "greece",
    "hungary",
    "ireland",
    "italy",
    "latvia",
    "lithuania",
    "luxembourg",
    "malta",
    "netherlands",
    "poland",
    "portugal",
    "romania",
    "slovakia",
    "slovenia",
    "spain",
    "sweden",
    "europe",
];

/// ISO codes plus "EU". Matched as whole uppercase words in the original text,
/// so "DE" never hits "Denver" and "at home" or "it is" never count.
const EU_COUNTRY_CODES: &[&str] = &[
    "EU", "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE",
    "IT", "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Eu,
    Other,
}

pub fn detect_locale(location: &str) -> Locale {
    let lower = location.to_lowercase();

    if EU_COUNTRY_NAMES.iter().any(|name| lower.contains(name)) {
        return Locale::Eu;
    }

    let has_code = location
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| EU_COUNTRY_CODES.contains(&word));
    if has_code {
        Locale::Eu
    } else {
        Locale::Other
    }
}

/// Currency/locale instruction injected into the user prompt.
pub fn locale_hint(location: &str) -> String {
    match detect_locale(location) {
        Locale::Eu => "LOCALE: The user is in the EU. Quote every price and cost in euros (EUR). \
            Prefer GDPR-friendly tools and EU-available services in tooling examples."
            .to_string(),
        Locale::Other => format!(
            "LOCALE: Quote prices and costs in the local currency for \"{location}\" when it is \
            obvious; otherwise use USD."
        ),
    }
}
