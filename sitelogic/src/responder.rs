#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

/// One entry in the canned-response table: a group of trigger substrings
/// and the reply selected when any of them occurs in the input.
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// Reply returned when no rule matches; lists the topics the widget knows.
pub const FALLBACK: &str = "Kechirasiz, savolingizni tushunmadim. Quyidagi mavzularda \
     yordam bera olaman: xizmatlar, narxlar, Telegram botlar, aloqa.";

/// Ordered rule table for the local chat widget.
///
/// Evaluated top to bottom; the first rule with any trigger present in the
/// lower-cased input wins, so earlier rules take precedence when an input
/// mentions several topics (e.g. price beats telegram).
pub const RULES: &[Rule] = &[
    Rule {
        triggers: &["salom", "hello", "assalom"],
        response: "Assalomu alaykum! SmartBot.uz'ga xush kelibsiz. Sizga qanday yordam bera olaman?",
    },
    Rule {
        triggers: &["narx", "qancha", "summa"],
        response: "Narxlar loyiha murakkabligiga qarab belgilanadi: Telegram bot 500 000 so'mdan, \
             veb-sayt 1 000 000 so'mdan boshlanadi. Aniq narx uchun biz bilan bog'laning.",
    },
    Rule {
        triggers: &["xizmat", "servis"],
        response: "Biz Telegram botlar, Instagram avtomatlashtirish, veb-saytlar va CRM \
             integratsiyalarini taklif qilamiz.",
    },
    Rule {
        triggers: &["telegram", "bot"],
        response: "Telegram botlar buyurtma qabul qilish, to'lovlar va mijozlar bilan avtomatik \
             muloqot uchun juda qulay. Namunalarni portfolio bo'limida ko'ring.",
    },
    Rule {
        triggers: &["instagram"],
        response: "Instagram uchun avtojavob va direct xabarlarni avtomatlashtirish xizmatini \
             taklif qilamiz.",
    },
    Rule {
        triggers: &["sayt", "veb", "web"],
        response: "Zamonaviy, mobilga mos veb-saytlar tayyorlaymiz. Portfolio bo'limida \
             ishlarimiz bilan tanishing.",
    },
    Rule {
        triggers: &["aloqa", "telefon", "bog'lan"],
        response: "Biz bilan bog'lanish: +998 90 123 45 67 yoki saytdagi aloqa formasi orqali yozing.",
    },
    Rule {
        triggers: &["rahmat", "tashakkur"],
        response: "Arzimaydi! Yana savollaringiz bo'lsa, bemalol yozing.",
    },
];

/// Pick the canned reply for a widget message.
///
/// Lower-cases the input, then returns the response of the first rule whose
/// trigger set has any substring present, or [`FALLBACK`] when none match.
/// Stateless: each message is classified independently of the transcript.
#[must_use]
pub fn reply(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map_or(FALLBACK, |rule| rule.response)
}
