//! Login gate validation: provider id format and required-without-providers.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::schema::ParleyConfig;

fn provider_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("static regex"))
}

pub(crate) fn validate_auth(errors: &mut Vec<String>, config: &ParleyConfig) {
    let auth = &config.auth;

    if auth.required && auth.providers.is_empty() {
        errors.push("auth.required is set but auth.providers is empty".into());
    }

    let mut seen = HashSet::new();
    for provider in &auth.providers {
        if !provider_id_pattern().is_match(provider) {
            errors.push(format!(
                "auth.providers: '{provider}' is not a valid provider id (lowercase letters, digits, '-', '_')"
            ));
        }
        if !seen.insert(provider.as_str()) {
            errors.push(format!("auth.providers: '{provider}' is listed twice"));
        }
    }
}
