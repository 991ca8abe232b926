//! Class names shared across pages. The rules live in `assets/main.css`.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "btn nav-btn nav-btn-active"
    } else {
        "btn nav-btn"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "field-input";
pub const SELECT: &str = "field-input field-select";
pub const LABEL: &str = "field-label";

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const TWO_COLUMNS: &str = "two-columns";
pub const KPI_GRID: &str = "kpi-grid";

// ============================================
// RESULT BANNERS
// ============================================

pub const BANNER_SUCCESS: &str = "banner banner-success";
pub const BANNER_ERROR: &str = "banner banner-error";
pub const BANNER_INFO: &str = "banner banner-info";

pub const TEXT_MUTED: &str = "text-muted";
