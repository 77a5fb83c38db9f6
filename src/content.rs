//! Static content: memory records and quotes.
//!
//! Loaded before the scene mounts and never mutated. Memory order drives
//! the layout; `id` is identity.

/// One remembered moment, shown as a star in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub emoji: &'static str,
}

impl Memory {
    /// Billboard text shown above the star on hover.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }

    /// Long-form date, e.g. `14 March 2021`. Falls back to the raw string
    /// when it is not a valid ISO date.
    pub fn formatted_date(&self) -> String {
        format_date(self.date).unwrap_or_else(|| self.date.to_string())
    }
}

pub const MEMORIES: &[Memory] = &[
    Memory {
        id: 1,
        title: "The First Hello",
        message: "A single message in a crowded chat, and somehow the whole universe started turning.",
        date: "2021-03-14",
        emoji: "👋",
    },
    Memory {
        id: 2,
        title: "Midnight Talks",
        message: "We talked until the sky changed colour and neither of us noticed the time.",
        date: "2021-05-02",
        emoji: "🌙",
    },
    Memory {
        id: 3,
        title: "The Laugh Attack",
        message: "Nobody else understood the joke. We could not stop laughing for ten minutes.",
        date: "2021-07-19",
        emoji: "😂",
    },
    Memory {
        id: 4,
        title: "Coffee Experiments",
        message: "Three terrible recipes and one perfect cup. Worth every failed attempt.",
        date: "2021-09-08",
        emoji: "☕",
    },
    Memory {
        id: 5,
        title: "The Hard Day",
        message: "You stayed on the line and said nothing, and that was exactly what I needed.",
        date: "2021-11-23",
        emoji: "🤝",
    },
    Memory {
        id: 6,
        title: "Birthday Surprise",
        message: "You planned it for weeks and still almost gave it away the night before.",
        date: "2022-01-30",
        emoji: "🎂",
    },
    Memory {
        id: 7,
        title: "Under the Stars",
        message: "We counted shooting stars and argued about which constellation was which.",
        date: "2022-04-16",
        emoji: "⭐",
    },
    Memory {
        id: 8,
        title: "The Road Trip",
        message: "Wrong turns, bad snacks, the best playlist. I would take every wrong turn again.",
        date: "2022-07-03",
        emoji: "🚗",
    },
    Memory {
        id: 9,
        title: "Rainy Afternoon",
        message: "The plans were cancelled and the day turned out better than any plan.",
        date: "2022-10-11",
        emoji: "🌧️",
    },
    Memory {
        id: 10,
        title: "A Year of Us",
        message: "One whole year of being the person I tell everything to first.",
        date: "2023-03-14",
        emoji: "🎉",
    },
    Memory {
        id: 11,
        title: "The Promise",
        message: "Whatever happens, whatever changes: same orbit, always.",
        date: "2023-08-21",
        emoji: "💫",
    },
    Memory {
        id: 12,
        title: "Still Here",
        message: "Every star in this sky is a moment with you, and there is room for many more.",
        date: "2024-02-09",
        emoji: "💙",
    },
];

pub const QUOTES: &[&str] = &[
    "A true friend is a star you cannot always see, but you know is always there.",
    "Some people make the whole universe feel smaller and warmer.",
    "Friendship doubles the joy and halves the sorrow.",
    "In a sky full of stars, you are the one I would always find.",
    "Distance means so little when someone means so much.",
    "The best things in life are the people you love and the memories you make.",
    "A friend is someone who knows the song in your heart.",
    "Good friends are like stars: always there, even when the clouds roll in.",
];

/// Look up a memory by id.
pub fn find(id: u32) -> Option<&'static Memory> {
    MEMORIES.iter().find(|m| m.id == id)
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `YYYY-MM-DD` → `D Month YYYY`.
pub fn format_date(iso: &str) -> Option<String> {
    let mut parts = iso.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some(format!("{} {} {}", day, name, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = MEMORIES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MEMORIES.len());
        assert!(find(7).is_some());
    }

    #[test]
    fn dates_format() {
        assert_eq!(format_date("2022-04-16").as_deref(), Some("16 April 2022"));
        assert_eq!(format_date("2022-13-01"), None);
        assert_eq!(format_date("soon"), None);
        assert!(MEMORIES.iter().all(|m| format_date(m.date).is_some()));
    }

    #[test]
    fn label_joins_emoji_and_title() {
        let m = find(7).expect("memory 7");
        assert_eq!(m.label(), "⭐ Under the Stars");
    }
}
