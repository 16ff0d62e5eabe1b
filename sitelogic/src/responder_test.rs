use super::*;

fn greeting() -> &'static str {
    RULES[0].response
}

// =============================================================
// Greeting triggers
// =============================================================

#[test]
fn salom_returns_greeting() {
    assert_eq!(reply("salom"), greeting());
}

#[test]
fn hello_returns_greeting() {
    assert_eq!(reply("hello"), greeting());
}

#[test]
fn assalom_returns_greeting() {
    assert_eq!(reply("assalomu alaykum"), greeting());
}

#[test]
fn greeting_matches_regardless_of_case() {
    assert_eq!(reply("SALOM"), greeting());
    assert_eq!(reply("HeLLo there"), greeting());
}

#[test]
fn greeting_matches_inside_surrounding_text() {
    assert_eq!(reply("xo'sh, salom deyishim kerakmi?"), greeting());
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn unknown_input_returns_exact_fallback() {
    assert_eq!(reply("qwerty uiop"), FALLBACK);
}

#[test]
fn empty_input_returns_fallback() {
    assert_eq!(reply(""), FALLBACK);
}

// =============================================================
// Rule precedence
// =============================================================

#[test]
fn price_rule_precedes_telegram_rule() {
    // Input mentions both topics; the earlier rule (price) must win.
    let price = RULES[1].response;
    assert_eq!(reply("telegram bot narxi qancha?"), price);
}

#[test]
fn greeting_precedes_every_other_rule() {
    assert_eq!(reply("salom, sayt narxi haqida"), greeting());
}

#[test]
fn rule_order_is_fixed() {
    // The table order is part of the widget's contract; a reorder would
    // silently change which reply multi-topic inputs get.
    let first_triggers: Vec<&str> = RULES.iter().map(|r| r.triggers[0]).collect();
    assert_eq!(
        first_triggers,
        [
            "salom", "narx", "xizmat", "telegram", "instagram", "sayt", "aloqa", "rahmat"
        ]
    );
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn reply_is_deterministic() {
    for input in ["salom", "narx", "nimadir boshqa", ""] {
        assert_eq!(reply(input), reply(input));
    }
}

#[test]
fn every_rule_is_reachable_by_its_own_triggers() {
    for rule in RULES {
        for trigger in rule.triggers {
            // A trigger that belongs to a later rule but is shadowed by an
            // earlier one would make that reply dead.
            if reply(trigger) != rule.response {
                // "bot" may only be shadowed by rules listed above it.
                let index = RULES.iter().position(|r| std::ptr::eq(r, rule));
                let winner = RULES.iter().position(|r| r.response == reply(trigger));
                assert!(winner < index, "trigger {trigger:?} shadowed by a later rule");
            }
        }
    }
}
