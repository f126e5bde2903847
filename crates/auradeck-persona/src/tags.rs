//! "Looking for" tags.

use serde::{Deserialize, Serialize};

/// Maximum number of looking-for tags a persona may carry.
pub const MAX_LOOKING_FOR: usize = 3;

/// Tags offered by the onboarding picker, in display order.
pub const LOOKING_FOR_TAGS: [&str; 8] = [
    "Relationship",
    "Casual",
    "Friends",
    "Gaming Buddy",
    "Late Night Chats",
    "Vibes Only",
    "Gym Partner",
    "Adventure",
];

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full; the request was dropped.
    Ignored,
}

/// Ordered, duplicate-free set of at most [`MAX_LOOKING_FOR`] tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `tag` if present, otherwise add it when there is room.
    pub fn toggle(&mut self, tag: &str) -> ToggleOutcome {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Ignored;
        }
        self.tags.push(tag.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_LOOKING_FOR
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

/// Keeps the first [`MAX_LOOKING_FOR`] distinct tags.
impl From<Vec<String>> for TagSet {
    fn from(raw: Vec<String>) -> Self {
        raw.into_iter().collect()
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            if set.is_full() {
                break;
            }
            if !set.contains(&tag) {
                set.tags.push(tag);
            }
        }
        set
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fourth_tag_is_ignored() {
        let mut set = TagSet::new();
        assert_eq!(set.toggle("Gaming Buddy"), ToggleOutcome::Added);
        assert_eq!(set.toggle("Casual"), ToggleOutcome::Added);
        assert_eq!(set.toggle("Vibes Only"), ToggleOutcome::Added);
        assert_eq!(set.toggle("Adventure"), ToggleOutcome::Ignored);
        assert_eq!(set.len(), 3);
        assert!(!set.contains("Adventure"));

        assert_eq!(set.toggle("Casual"), ToggleOutcome::Removed);
        assert_eq!(set.as_slice(), ["Gaming Buddy", "Vibes Only"]);
    }

    #[test]
    fn removal_always_allowed_when_full() {
        let mut set: TagSet = ["A", "B", "C"].map(String::from).into_iter().collect();
        assert!(set.is_full());
        assert_eq!(set.toggle("B"), ToggleOutcome::Removed);
        assert_eq!(set.toggle("D"), ToggleOutcome::Added);
        assert_eq!(set.as_slice(), ["A", "C", "D"]);
    }

    #[test]
    fn deserialize_truncates_and_dedups() {
        let set: TagSet = serde_json::from_str(r#"["Hiking","Hiking","Gaming","Chat","Rave"]"#).unwrap();
        assert_eq!(set.as_slice(), ["Hiking", "Gaming", "Chat"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Hiking","Gaming","Chat"]"#);
    }

    proptest! {
        #[test]
        fn never_exceeds_cap(picks in proptest::collection::vec(0usize..LOOKING_FOR_TAGS.len(), 0..64)) {
            let mut set = TagSet::new();
            for i in picks {
                set.toggle(LOOKING_FOR_TAGS[i]);
                prop_assert!(set.len() <= MAX_LOOKING_FOR);
            }
        }
    }
}
