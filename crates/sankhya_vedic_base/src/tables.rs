//! Static lookup tables keyed by a numerology digit.
//!
//! Every table has exactly nine rows, row 0 belonging to digit 1.

use crate::numbers::Ank;

/// A gemstone color with its display hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckyColor {
    pub name: &'static str,
    pub hex: &'static str,
}

const BASIC_DESCRIPTIONS: [&str; 9] = [
    "Independent, original, and innovative.",
    "Cooperative, sensitive, and diplomatic.",
    "Optimistic, creative, and expressive.",
    "Practical, reliable, and hardworking.",
    "Adaptable, versatile, and freedom-loving.",
    "Responsible, caring, and artistic.",
    "Analytical, thoughtful, and spiritual.",
    "Ambitious, authoritative, and successful.",
    "Compassionate, generous, and idealistic.",
];

const DESTINY_DESCRIPTIONS: [&str; 9] = [
    "You are a natural leader with strong individuality and pioneering spirit.",
    "You possess diplomatic skills and work well in partnerships.",
    "You are creative, expressive, and blessed with good fortune.",
    "You are practical, systematic, and build solid foundations.",
    "You crave freedom, adventure, and embrace change.",
    "You are nurturing, responsible, and value harmony.",
    "You are analytical, spiritual, and seek deeper truths.",
    "You are ambitious, business-minded, and achieve material success.",
    "You are humanitarian, compassionate, and serve others.",
];

const RECOMMENDATIONS: [&str; 9] = [
    "Take leadership roles and start new ventures.",
    "Focus on relationships and emotional well-being.",
    "Pursue creative projects and educational opportunities.",
    "Build stable foundations and be prepared for changes.",
    "Embrace flexibility and explore new experiences.",
    "Focus on family, home, and creative pursuits.",
    "Engage in spiritual practices and introspection.",
    "Work hard towards career and financial goals.",
    "Serve others and engage in humanitarian activities.",
];

const LUCKY_COLORS: [LuckyColor; 9] = [
    LuckyColor { name: "Ruby Red", hex: "#E0115F" },
    LuckyColor { name: "Pearl White", hex: "#F8F8FF" },
    LuckyColor { name: "Yellow Sapphire", hex: "#FFD700" },
    LuckyColor { name: "Hessonite", hex: "#8B4513" },
    LuckyColor { name: "Emerald Green", hex: "#50C878" },
    LuckyColor { name: "Diamond White", hex: "#FFFFFF" },
    LuckyColor { name: "Cat's Eye", hex: "#8A2BE2" },
    LuckyColor { name: "Blue Sapphire", hex: "#0000FF" },
    LuckyColor { name: "Coral Red", hex: "#FF7F50" },
];

const DIRECTIONS: [&str; 9] = [
    "East",
    "North-West",
    "North-East",
    "South-West",
    "North",
    "South-East",
    "West",
    "South",
    "North-East",
];

const FEATURES: [&[&str]; 9] = [
    &[
        "Confident",
        "Great Leadership Quality",
        "Very Good Management",
        "Authoritative",
        "Dominating",
        "Name & Fame",
        "Egoistic",
        "Short-Tempered",
        "Stubborn",
        "Always Motivated & Motivating Others",
        "Business Number",
    ],
    &[
        "Sentimental",
        "Need Continuous Push",
        "Traditional Fashion",
        "Image Conscious",
        "Attractive",
        "Creative",
        "Emotional",
        "Possessive",
        "Can't deal with stress",
        "Needs Sharing",
        "Motherly Instinct",
        "Suicidal Tendencies",
    ],
    &[
        "Wisdom",
        "Leader",
        "Need Motivation",
        "Confidence",
        "Disciplined",
        "Attaches to Family",
        "High Moral Value",
        "Spiritual People",
        "Excellent Management Skills",
        "Decision With Consent",
        "No to Temptation/Addiction",
        "Justice Lover",
        "Basic: Attached to Family",
        "Destiny: Attached to Current Family",
    ],
    &[
        "Travels Lot",
        "Unfruitful Travelling",
        "Spends lot of money on Unnecessary things",
        "Expensive",
        "Spending Thrift",
        "Execution is Bad by Default",
        "Can't keep Promises, though intents rightly",
        "Love to Explore Party Lovers",
        "Researchers",
        "Risk Takers",
        "Stays away from Birth Place",
        "Destiny: Electronic Items frequent breakdown",
    ],
    &[
        "Money Matters: Very",
        "Calculative",
        "Straight Forward",
        "Logical People",
        "Well aware source of Income",
        "Knows where to incur expenses",
        "Finance Mgmt: None can Compete",
        "Mind: always Active in Money Calculations",
        "Born Business Man/Woman",
    ],
    &[
        "Attractive/Attractive Aura",
        "Attraction Towards Opposite Gender",
        "Harsh Speakers",
        "Fashionable",
        "Brand Cautious/Updated Fashion",
        "Food Lover /Good Cook",
        "Impressed by Show Off & Luxury",
        "Trend Setters",
        "Focus on Love, Materialistic World & Outer Beauty",
    ],
    &[
        "Useful Travels",
        "Positivity & Luck in Life",
        "Work Easily Done",
        "Spiritual",
        "Logical",
        "Demands & Gives Explanation with Logic",
        "Stability",
        "Deep Thinkers",
    ],
    &[
        "Hard Work in each every Field of Life",
        "Easily Gets Disappointment",
        "Spiritual & God Believer",
        "Soft Hearted",
        "Justice Believer & Lover",
        "Can't see one crying",
        "Egoistic",
        "Ambitious",
        "Workaholic: Can't sit idle Else Depressed",
    ],
    &[
        "Courageous",
        "Stubborn",
        "Confident",
        "Sensible",
        "Bold",
        "Active",
        "Very Fast Action",
        "Easily Pumpable",
        "Argument Attire",
    ],
];

/// Temperament of a Basic Number.
pub const fn basic_description(basic: Ank) -> &'static str {
    BASIC_DESCRIPTIONS[basic.index()]
}

/// Life direction of a Destiny Number.
pub const fn destiny_description(destiny: Ank) -> &'static str {
    DESTINY_DESCRIPTIONS[destiny.index()]
}

/// Advice for the period ruled by a Mahadasha digit.
pub const fn recommendation(mahadasha: Ank) -> &'static str {
    RECOMMENDATIONS[mahadasha.index()]
}

pub const fn lucky_color(destiny: Ank) -> LuckyColor {
    LUCKY_COLORS[destiny.index()]
}

pub const fn lucky_direction(destiny: Ank) -> &'static str {
    DIRECTIONS[destiny.index()]
}

/// Personality traits of a Destiny Number.
pub const fn destiny_features(destiny: Ank) -> &'static [&'static str] {
    FEATURES[destiny.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::ALL_ANKS;

    #[test]
    fn feature_list_lengths() {
        for a in ALL_ANKS {
            let n = destiny_features(a).len();
            assert!((8..=14).contains(&n), "destiny {a}: {n} features");
        }
    }

    #[test]
    fn colors_are_hex() {
        for a in ALL_ANKS {
            let c = lucky_color(a);
            assert_eq!(c.hex.len(), 7);
            assert!(c.hex.starts_with('#'));
            assert!(c.hex[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn spot_checks() {
        let one = ALL_ANKS[0];
        let nine = ALL_ANKS[8];
        assert_eq!(lucky_color(one).name, "Ruby Red");
        assert_eq!(lucky_direction(nine), "North-East");
        assert_eq!(recommendation(ALL_ANKS[7]), "Work hard towards career and financial goals.");
        assert_eq!(destiny_features(ALL_ANKS[6]).last(), Some(&"Deep Thinkers"));
        assert!(basic_description(one).starts_with("Independent"));
        assert!(destiny_description(nine).starts_with("You are humanitarian"));
    }
}
