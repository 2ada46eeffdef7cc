//! Flavor word pools and placeholder filling.
//!
//! Action and effect templates carry `{tag}` placeholders; each tag is
//! resolved by one uniform pick from its pool, and a tag repeated within
//! one template reuses the same pick.

use rand::Rng;

/// Crowd words.
pub const CROWDS: &[&str] = &["the crowd", "the onlookers", "the villagers", "the viewers"];

/// Authority figures.
pub const AUTHORITY: &[&str] = &[
    "the clerk",
    "the guards",
    "the committee",
    "the registrar",
    "the court",
];

/// Rules and procedures.
pub const RULES: &[&str] = &[
    "the protocol",
    "the regulation",
    "the procedure",
    "the standard",
    "the requirement",
    "the guideline",
];

/// Assumed identities.
pub const IDENTITIES: &[&str] = &[
    "a visiting inspector",
    "a distant relative",
    "a trusted messenger",
    "an old friend",
    "a forgotten contact",
];

/// Small obligations.
pub const TASKS: &[&str] = &[
    "a small favor",
    "one simple step",
    "a quick check",
    "a brief confirmation",
    "a minor formality",
];

/// People acting on another's behalf.
pub const AGENTS: &[&str] = &["helpers", "associates", "subordinates", "allies", "contacts"];

/// Convenient accounts of events.
pub const STORIES: &[&str] = &[
    "a compelling narrative",
    "a convenient explanation",
    "a plausible account",
    "a believable version",
];

/// Technical apparatus.
pub const DEVICES: &[&str] = &[
    "a device",
    "the system",
    "the machine",
    "the apparatus",
];

/// Material scenes.
pub const OBJECTS: &[&str] = &[
    "the scene",
    "the arrangement",
    "the setup",
    "the layout",
];

/// Implements of force.
pub const WEAPONS: &[&str] = &["a weapon", "the blade", "the instrument", "the implement"];

/// Cautionary precedents.
pub const PRECEDENTS: &[&str] = &[
    "the last person who refused",
    "the previous challenger",
    "the one who tried before",
    "the earlier opponent",
];

/// Placeholder tags and their pools, in substitution order.
const FLAVOR_TAGS: &[(&str, &[&str])] = &[
    ("{crowd}", CROWDS),
    ("{authority}", AUTHORITY),
    ("{rule}", RULES),
    ("{identity}", IDENTITIES),
    ("{task}", TASKS),
    ("{agents}", AGENTS),
    ("{story}", STORIES),
    ("{device}", DEVICES),
    ("{object}", OBJECTS),
    ("{weapon}", WEAPONS),
    ("{precedent}", PRECEDENTS),
];

/// Pick one word uniformly from a pool.
pub fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Resolve every flavor placeholder in a line, one pick per tag.
pub fn fill_flavor<R: Rng>(mut line: String, rng: &mut R) -> String {
    for (tag, pool) in FLAVOR_TAGS {
        if line.contains(tag) {
            line = line.replace(tag, pick(rng, pool));
        }
    }
    line
}

/// Uppercase the first character of a rendered line.
pub fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pools_are_nonempty() {
        for (tag, pool) in FLAVOR_TAGS {
            assert!(!pool.is_empty(), "empty pool for {tag}");
        }
    }

    #[test]
    fn pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let word = pick(&mut rng, CROWDS);
            assert!(CROWDS.contains(&word));
        }
    }

    #[test]
    fn fill_flavor_resolves_every_tag() {
        let mut rng = StdRng::seed_from_u64(42);
        let line = fill_flavor(
            "{crowd} watches {authority} recite {rule} about {weapon}".to_string(),
            &mut rng,
        );
        assert!(!line.contains('{'), "unresolved tag in {line:?}");
    }

    #[test]
    fn repeated_tag_reuses_one_pick() {
        let mut rng = StdRng::seed_from_u64(42);
        let line = fill_flavor("{rule} and again {rule}".to_string(), &mut rng);
        let parts: Vec<&str> = line.split(" and again ").collect();
        assert_eq!(parts[0], parts[1]);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("the crowd shifts"), "The crowd shifts");
        assert_eq!(capitalize(""), "");
    }
}
