//! Bracket-tag parser for prize text.
//!
//! Hosts can embed machine-readable tags directly in the free-text prize
//! description instead of filling out a separate rule UI:
//!
//! - `level:5` or `level:5,10`: level gate; entering requires a tracked level at
//!   or above any one of the listed thresholds
//! - `entry:12345,67890:2`: weight-multiplier rule; holding any listed role adds
//!   2 entries
//! - `required:12345`: roles required to enter
//! - `add:12345` / `remove:12345`: roles granted/revoked from winners
//!
//! The mini-language is regex-based with no escaping, so this module is the only
//! place that ever touches the raw text; everything downstream works on the typed
//! [`PrizeTags`] it produces.

use std::sync::LazyLock;

use regex::Regex;

use entity::types::EntryRule;

static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blevel:(\d+(?:,\d+)*)").expect("invalid level regex"));
static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bentry:(\d+(?:,\d+)*):(\d+)").expect("invalid entry regex"));
static REQUIRED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brequired:(\d+(?:,\d+)*)").expect("invalid required regex"));
static ADD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\badd:(\d+(?:,\d+)*)").expect("invalid add regex"));
static REMOVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bremove:(\d+(?:,\d+)*)").expect("invalid remove regex"));

/// Typed rule list parsed out of a prize description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrizeTags {
    /// Level-gate thresholds; entry passes when the caller's level meets any one.
    pub levels: Vec<u32>,
    /// Weight-multiplier rules from `entry:` tags.
    pub rules: Vec<EntryRule>,
    /// Role IDs from `required:` tags.
    pub required: Vec<String>,
    /// Role IDs from `add:` tags.
    pub add: Vec<String>,
    /// Role IDs from `remove:` tags.
    pub remove: Vec<String>,
}

/// Parses every bracket tag out of a prize description.
///
/// Malformed or overflowing numbers are skipped rather than rejected; a host typo
/// degrades to "tag ignored", never to a failed giveaway.
pub fn parse_prize_tags(prize: &str) -> PrizeTags {
    let mut tags = PrizeTags::default();

    for cap in LEVEL_RE.captures_iter(prize) {
        tags.levels
            .extend(cap[1].split(',').filter_map(|n| n.parse::<u32>().ok()));
    }

    for cap in ENTRY_RE.captures_iter(prize) {
        if let Ok(amount) = cap[2].parse::<i32>() {
            tags.rules.push(EntryRule {
                roles: split_ids(&cap[1]),
                amount,
            });
        }
    }

    for cap in REQUIRED_RE.captures_iter(prize) {
        tags.required.extend(split_ids(&cap[1]));
    }
    for cap in ADD_RE.captures_iter(prize) {
        tags.add.extend(split_ids(&cap[1]));
    }
    for cap in REMOVE_RE.captures_iter(prize) {
        tags.remove.extend(split_ids(&cap[1]));
    }

    tags
}

fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_and_entry_tags() {
        let tags = parse_prize_tags("Nitro level:5 entry:12345,67890:2");

        assert_eq!(tags.levels, vec![5]);
        assert_eq!(
            tags.rules,
            vec![EntryRule {
                roles: vec!["12345".to_string(), "67890".to_string()],
                amount: 2,
            }]
        );
        assert!(tags.required.is_empty());
    }

    #[test]
    fn test_parse_multiple_level_thresholds() {
        let tags = parse_prize_tags("prize level:5,10 level:20");
        assert_eq!(tags.levels, vec![5, 10, 20]);
    }

    #[test]
    fn test_parse_role_gate_tags() {
        let tags = parse_prize_tags("VIP prize required:111 add:222,333 remove:444");

        assert_eq!(tags.required, vec!["111"]);
        assert_eq!(tags.add, vec!["222", "333"]);
        assert_eq!(tags.remove, vec!["444"]);
    }

    #[test]
    fn test_plain_prize_has_no_tags() {
        let tags = parse_prize_tags("A completely normal prize");
        assert_eq!(tags, PrizeTags::default());
    }

    #[test]
    fn test_multiple_entry_rules() {
        let tags = parse_prize_tags("entry:1:2 entry:3,4:5");
        assert_eq!(tags.rules.len(), 2);
        assert_eq!(tags.rules[1].amount, 5);
    }

    #[test]
    fn test_tag_requires_word_boundary() {
        // "badd:1" must not register as an add tag
        let tags = parse_prize_tags("badd:1");
        assert!(tags.add.is_empty());
    }
}
