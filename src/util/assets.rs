use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory (stylesheet and default data files) into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
///
/// A missing stylesheet only degrades the look of the window, so it falls back to empty.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            embedded_text("/assets/main.css").unwrap_or_else(|| {
                tracing::warn!("embedded stylesheet missing; rendering unstyled");
                String::new()
            })
        })
        .as_str()
}

/// UTF-8 contents of an embedded file, `None` if absent or not valid UTF-8.
pub fn embedded_text(path: &str) -> Option<String> {
    let bytes = embedded_bytes(path)?;
    String::from_utf8(bytes.into_owned()).ok()
}

fn embedded_bytes(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
