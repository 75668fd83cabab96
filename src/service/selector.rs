//! Weighted winner selection.
//!
//! The ledger is expanded into a flat pool where each participant occupies as many
//! slots as they have entries, then winners are drawn by repeatedly picking a
//! uniformly random slot and splicing it out. A drawn slot belonging to an already
//! accepted user is simply discarded, and their remaining slots keep shrinking out
//! of the pool until a new distinct user surfaces or the pool runs dry. This gives
//! higher-weight users proportionally higher odds while guaranteeing a duplicate-free
//! winner list.

use rand::Rng;

use entity::types::EntryUser;

use crate::model::giveaway::Giveaway;

/// Draws up to `count` distinct winners from the ledger, weighted by entries.
///
/// Returns the winners in draw order (not sorted). If `count` meets or exceeds the
/// number of distinct participants, every participant is returned exactly once.
pub fn pick_winners(users: &[EntryUser], count: usize) -> Vec<String> {
    pick_winners_with(&mut rand::rng(), users, count)
}

/// [`pick_winners`] over a caller-supplied RNG.
pub fn pick_winners_with<R: Rng>(rng: &mut R, users: &[EntryUser], count: usize) -> Vec<String> {
    let mut pool: Vec<&str> = Vec::new();
    for user in users {
        for _ in 0..user.entries.max(1) {
            pool.push(user.id.as_str());
        }
    }

    let mut winners: Vec<String> = Vec::with_capacity(count.min(users.len()));

    while winners.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        let drawn = pool.remove(index);
        if !winners.iter().any(|w| w == drawn) {
            winners.push(drawn.to_string());
        }
    }

    winners
}

/// The ledger minus everyone already drawn on this giveaway (`won ∪ rerolled`).
///
/// Rerolls sample from this remainder so a past winner cannot win twice.
pub fn reroll_pool(giveaway: &Giveaway) -> Vec<EntryUser> {
    giveaway
        .users
        .iter()
        .filter(|user| {
            !giveaway.won.contains(&user.id) && !giveaway.rerolled.contains(&user.id)
        })
        .cloned()
        .collect()
}
