//! Pure decision logic for the SmartBot.uz marketing site client.
//!
//! Everything the browser UI has to decide — which canned reply a chat
//! message gets, whether a form field is valid, how a counter ticks, which
//! portfolio cards a filter shows — lives here as plain functions and small
//! state structs with no DOM or network dependencies. The `client` crate
//! owns the rendering side and calls into this crate, so every rule in this
//! crate is unit-testable on the host target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`responder`] | Keyword-table responder for the local chat widget |
//! | [`validate`] | Field validation verdicts and submit guards |
//! | [`phone`] | Uzbek phone number auto-formatting |
//! | [`counter`] | Stat counter animation stepping |
//! | [`filter`] | Category filter visibility and stagger math |
//! | [`scroll`] | Navbar / scroll-to-top / anchor offset decisions |
//! | [`consts`] | Shared thresholds, durations, and limits |

pub mod consts;
pub mod counter;
pub mod filter;
pub mod phone;
pub mod responder;
pub mod scroll;
pub mod validate;
