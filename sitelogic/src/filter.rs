#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Wildcard filter value that shows every card.
pub const ALL: &str = "all";

/// Whether a card with `category` stays visible under `filter`.
#[must_use]
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

/// Reveal delay for the card at `index`, proportional to its position so
/// filtered-in cards fade in as a cascade rather than all at once.
#[must_use]
pub fn stagger_delay_ms(index: usize, per_card_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(per_card_ms)
}

/// Indices of the cards visible under `filter`, in display order.
#[must_use]
pub fn visible_indices(filter: &str, categories: &[&str]) -> Vec<usize> {
    categories
        .iter()
        .enumerate()
        .filter(|(_, category)| matches(filter, category))
        .map(|(index, _)| index)
        .collect()
}
