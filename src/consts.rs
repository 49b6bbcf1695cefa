//! Selectors, class names, attribute names and default timings shared by the
//! page handlers.

// ── Selectors ───────────────────────────────────────────────────

/// Elements that declare an animation kind.
pub const ANIMATED_SELECTOR: &str = "[data-animation]";

/// Elements revealed with the generic effect even without a declared kind.
pub const GENERIC_REVEAL_SELECTOR: &str = ".section-title, .about-text p, .skill-category, .service-card";

pub const HERO_ANIMATED_SELECTOR: &str = ".hero-text [data-animation]";
pub const HERO_VISUAL_SELECTOR: &str = ".hero-visual";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";
pub const SCROLL_ARROW_SELECTOR: &str = ".scroll-arrow";

pub const THEME_TOGGLE_SELECTOR: &str = "#themeToggle";
pub const THEME_ICON_SELECTOR: &str = "i";

pub const NAV_SELECTOR: &str = ".nav";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_MENU_SELECTOR: &str = ".main";
pub const NAV_ANCHOR_SELECTOR: &str = ".nav a[href^=\"#\"]";
pub const PLACEHOLDER_LINK_SELECTOR: &str = "a[href=\"#\"]";

pub const SECTION_SELECTOR: &str = ".section";
pub const HOME_SELECTOR: &str = "#home";
pub const ABOUT_SELECTOR: &str = "#about";
pub const SKILLS_SELECTOR: &str = "#skills";
pub const SERVICES_SELECTOR: &str = "#services";
pub const CONTACT_SELECTOR: &str = "#contact";

pub const HIRE_BUTTON_SELECTOR: &str = ".hire-btn";
pub const PORTFOLIO_BUTTON_SELECTOR: &str = ".portfolio-btn";
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const STAT_LABEL_SELECTOR: &str = ".stat h3";
pub const HERO_NAME_SELECTOR: &str = ".hero-name";

pub const CONTACT_FORM_SELECTOR: &str = "#contactForm";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";
pub const NOTIFICATION_SELECTOR: &str = ".notification";

/// Optional `<script type="application/json">` carrying config overrides.
pub const PAGE_CONFIG_SELECTOR: &str = "#page-config";

// ── Attributes ──────────────────────────────────────────────────

pub const ANIMATION_ATTR: &str = "data-animation";
pub const DELAY_ATTR: &str = "data-delay";
pub const PERCENT_ATTR: &str = "data-percent";
pub const THEME_ATTR: &str = "data-theme";
pub const HREF_ATTR: &str = "href";
pub const ID_ATTR: &str = "id";

// ── Classes ─────────────────────────────────────────────────────

/// Marker: reveal animation already applied.
pub const ANIMATED_CLASS: &str = "animated";
/// Marker: typing effect already started.
pub const TYPED_CLASS: &str = "typed";
/// Marker: stat counter already started.
pub const COUNTED_CLASS: &str = "counted";
/// Open mobile menu and highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

// ── Form ────────────────────────────────────────────────────────

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const MESSAGE_FIELD: &str = "message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUBMIT_LABEL: &str = "Send Message";

// ── Default timings (ms) ────────────────────────────────────────

pub const HERO_START_DELAY_MS: u32 = 300;
pub const HERO_STAGGER_MS: u32 = 200;
pub const HERO_VISUAL_DELAY_MS: u32 = 400;
pub const SCROLL_INDICATOR_DELAY_MS: u32 = 1000;
pub const BODY_FADE_DELAY_MS: u32 = 100;
pub const THEME_SWAP_DELAY_MS: u32 = 150;
pub const COUNTER_TICK_MS: u32 = 40;
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const NOTIFICATION_SLIDE_IN_MS: u32 = 100;
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const TYPE_SPEED_MS: u32 = 150;

// ── Other defaults ──────────────────────────────────────────────

pub const COUNTER_STEPS: u32 = 50;
pub const NAV_OFFSET_PX: f64 = 80.0;
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const THEME_STORAGE_KEY: &str = "theme";
pub const TYPED_TEXT: &str = "Prannav R";
