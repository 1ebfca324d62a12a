//! Shared selectors, markers and numeric constants for the page behaviors.

// ── Mobile navigation ───────────────────────────────────────────

pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";

/// Class marking both the toggle and the panel while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// `body.style.overflow` while the mobile menu is open.
pub const SCROLL_LOCKED_OVERFLOW: &str = "hidden";

// ── Anchors ─────────────────────────────────────────────────────

pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// ── Skill bars ──────────────────────────────────────────────────

pub const SKILL_FILL_SELECTOR: &str = ".skill-fill";
pub const SKILL_LEVEL_ATTR: &str = "data-level";
pub const SKILL_THRESHOLD: f64 = 0.3;
pub const SKILL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Card reveal ─────────────────────────────────────────────────

pub const REVEAL_SELECTORS: [&str; 6] = [
    ".timeline-item",
    ".skill-card",
    ".course-card",
    ".edu-item",
    ".about-content",
    ".project-card",
];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -30px 0px";

/// Per-element delay increment, in document order.
pub const REVEAL_STAGGER_MS: u32 = 50;
pub const REVEAL_DURATION_MS: u32 = 500;

/// Vertical offset of a hidden card, in CSS pixels.
pub const REVEAL_OFFSET_PX: u32 = 20;

/// Slack applied to intersection ratios reported right at a threshold.
pub const RATIO_EPSILON: f64 = 0.001;

// ── Project details ─────────────────────────────────────────────

pub const PROJECT_TOGGLE_SELECTOR: &str = ".project-toggle";
pub const PROJECT_TARGET_ATTR: &str = "data-target";
pub const DETAILS_OPEN_CLASS: &str = "is-open";
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";
pub const LABEL_COLLAPSED: &str = "View details";
pub const LABEL_EXPANDED: &str = "Hide details";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_BUTTON_SELECTOR: &str = ".theme-btn";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Theme for a page with no stored or marked-up preference.
pub const DEFAULT_THEME: &str = "dark";

// ── Navbar ──────────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_BG_VAR: &str = "--nav-bg";
pub const NAV_BG_SCROLLED_VAR: &str = "--nav-bg-scrolled";

/// Vertical scroll offset, in CSS pixels, past which the navbar is "scrolled".
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

// ── Configuration ───────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
