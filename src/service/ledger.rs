//! Entry ledger: weight computation, gating, and the join/leave toggle.
//!
//! A single "enter" interaction is overloaded as a toggle. Re-triggering it with
//! an unchanged weight means "leave"; re-triggering it after the member's
//! qualifying roles changed means "refresh my weight" and keeps membership.
//! Gating runs on first join only: a participant who later loses a required
//! role is never removed automatically, and a weight refresh does not re-check
//! eligibility. That asymmetry is part of the contract, not an accident of the
//! implementation.

use std::collections::{BTreeSet, HashSet};

use entity::types::{EntryRule, EntryUser};

use crate::error::GiveawayError;
use crate::model::giveaway::Giveaway;
use crate::util::bracket::{parse_prize_tags, PrizeTags};

/// Result of a toggle interaction, so callers can render distinct feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The user entered the giveaway with the given weight.
    Joined(EntryUser),
    /// The user was already entered and their weight was refreshed in place.
    Updated(EntryUser),
    /// The user was already entered with an unchanged weight and has left.
    Left(EntryUser),
}

/// Merges structured rules with the prize-text `entry:` tags, deduplicating.
///
/// A rule is a duplicate when its amount and its role set (order-independent) are
/// identical to one already collected.
pub fn merged_rules(entries: &[EntryRule], tags: &PrizeTags) -> Vec<EntryRule> {
    let mut seen: HashSet<(BTreeSet<&str>, i32)> = HashSet::new();
    let mut rules = Vec::new();

    for rule in entries.iter().chain(tags.rules.iter()) {
        let key: BTreeSet<&str> = rule.roles.iter().map(String::as_str).collect();
        if seen.insert((key, rule.amount)) {
            rules.push(rule.clone());
        }
    }

    rules
}

/// Computes a member's entry weight from the deduplicated rule list.
///
/// Starts at the base weight of 1; every rule whose role set intersects the
/// member's roles adds its amount. Matching rules stack additively. The result
/// never drops below 1, whatever the rule amounts say.
pub fn compute_weight(rules: &[EntryRule], member_roles: &[String]) -> i32 {
    let mut weight = 1i32;

    for rule in rules {
        if rule.roles.iter().any(|role| member_roles.contains(role)) {
            weight = weight.saturating_add(rule.amount);
        }
    }

    weight.max(1)
}

/// Checks the first-join gates: pending state, blocked roles, required roles and
/// the prize-text level gate.
///
/// # Arguments
/// - `level` - The caller's tracked level, if the consuming bot runs a leveling
///   system. A level gate with no supplied level rejects the join.
pub fn check_gates(
    giveaway: &Giveaway,
    tags: &PrizeTags,
    member_roles: &[String],
    level: Option<u32>,
) -> Result<(), GiveawayError> {
    if !giveaway.pending {
        return Err(GiveawayError::Validation(
            "this giveaway has already ended".to_string(),
        ));
    }

    if giveaway
        .roles
        .blocked
        .iter()
        .any(|role| member_roles.contains(role))
    {
        return Err(GiveawayError::Validation(
            "you are not allowed to enter this giveaway".to_string(),
        ));
    }

    if !giveaway.roles.required.is_empty()
        && !giveaway
            .roles
            .required
            .iter()
            .any(|role| member_roles.contains(role))
    {
        return Err(GiveawayError::Validation(
            "you are missing a role required to enter this giveaway".to_string(),
        ));
    }

    if !tags.levels.is_empty() {
        // Meeting any one listed threshold is enough.
        let passes = level
            .map(|l| tags.levels.iter().any(|&threshold| l >= threshold))
            .unwrap_or(false);
        if !passes {
            let lowest = tags.levels.iter().min().copied().unwrap_or(0);
            return Err(GiveawayError::Validation(format!(
                "you must be at least level {lowest} to enter this giveaway"
            )));
        }
    }

    Ok(())
}

/// Applies the toggle contract to a giveaway's ledger.
///
/// Three-way branch:
/// - not present: gate, then insert with the computed weight
/// - present, weight changed: update the stored weight, keep membership
/// - present, weight unchanged: remove the user (this is how users leave)
pub fn toggle_entry(
    giveaway: &mut Giveaway,
    user_id: &str,
    member_roles: &[String],
    level: Option<u32>,
) -> Result<EntryOutcome, GiveawayError> {
    if !giveaway.pending {
        return Err(GiveawayError::Validation(
            "this giveaway has already ended".to_string(),
        ));
    }

    let tags = parse_prize_tags(&giveaway.prize);
    let rules = merged_rules(&giveaway.entries, &tags);
    let weight = compute_weight(&rules, member_roles);

    match giveaway.users.iter().position(|u| u.id == user_id) {
        None => {
            check_gates(giveaway, &tags, member_roles, level)?;
            let user = EntryUser {
                id: user_id.to_string(),
                entries: weight,
            };
            giveaway.users.push(user.clone());
            Ok(EntryOutcome::Joined(user))
        }
        Some(index) if giveaway.users[index].entries != weight => {
            giveaway.users[index].entries = weight;
            Ok(EntryOutcome::Updated(giveaway.users[index].clone()))
        }
        Some(index) => Ok(EntryOutcome::Left(giveaway.users.remove(index))),
    }
}
