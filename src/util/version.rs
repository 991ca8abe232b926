pub const APP_NAME: &str = "AI Advisory - Harmonized Code & Duty Validator";
pub const APP_SHORT_NAME: &str = "Tariff Advisor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Release tag when built from one, otherwise `v` + crate version.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, version: &str) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("v{version}"),
    }
}
