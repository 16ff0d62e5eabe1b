//! Shared numeric constants for the site client.

// ── Scrolling ───────────────────────────────────────────────────

/// Height of the fixed navbar, subtracted when scrolling to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the navbar gains a drop shadow.
pub const NAVBAR_SHADOW_PX: f64 = 50.0;

/// Scroll offset past which downward scrolling hides the navbar.
pub const NAVBAR_HIDE_PX: f64 = 200.0;

/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_PX: f64 = 300.0;

// ── Animations ──────────────────────────────────────────────────

/// Total duration of a stat counter animation.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Number of increments a counter animation is divided into.
pub const COUNTER_STEPS: u32 = 50;

/// Per-card reveal delay when filtering the portfolio grid.
pub const PORTFOLIO_STAGGER_MS: u32 = 50;

/// Per-card reveal delay when filtering the blog grid.
pub const BLOG_STAGGER_MS: u32 = 30;

/// Lifetime of the one-shot fade-in class on revealed cards.
pub const FADE_IN_MS: u32 = 600;

// ── Toasts ──────────────────────────────────────────────────────

/// Delay before a toast dismisses itself.
pub const TOAST_DISMISS_MS: u32 = 5000;

// ── Uploads ─────────────────────────────────────────────────────

/// Client-side cap on document uploads (10 MiB), checked before sending.
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;
