//! Sample journal entries the mock repository is seeded with.

use chrono::{DateTime, NaiveDate, Utc};
use oneiro_core::dream::{Dream, Mood};

fn seed_date(value: &str) -> NaiveDate {
    value.parse().expect("valid seed date")
}

fn seed_moment(value: &str) -> DateTime<Utc> {
    value.parse().expect("valid seed timestamp")
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Returns the six sample dreams, most recent first.
pub fn sample_dreams() -> Vec<Dream> {
    vec![
        Dream {
            id: "dream-1".to_string(),
            title: "Flying Over Mountains".to_string(),
            content: "I was soaring through the clouds above snow-capped mountains. The feeling of freedom was incredible, and I could control my direction just by thinking about it. The landscape below was breathtaking with crystal clear lakes and dense forests.".to_string(),
            date: seed_date("2025-01-10"),
            mood: Mood::Positive,
            tags: labels(&["freedom", "adventure", "nature", "flying"]),
            symbols: labels(&["flying", "mountains", "clouds", "nature", "freedom"]),
            clarity: 5,
            lucid: true,
            ai_insight: Some("Flying dreams often represent liberation from constraints and a desire for freedom in your waking life. The mountain symbolism suggests you're rising above challenges with a new perspective.".to_string()),
            created_at: seed_moment("2025-01-10T08:30:00Z"),
            updated_at: seed_moment("2025-01-10T08:30:00Z"),
        },
        Dream {
            id: "dream-2".to_string(),
            title: "Lost in a Library".to_string(),
            content: "I was in an enormous library with endless shelves reaching up to the sky. I was searching for a specific book but could never find it. The librarian kept changing into different people - my teacher, my mother, then a stranger.".to_string(),
            date: seed_date("2025-01-09"),
            mood: Mood::Anxious,
            tags: labels(&["searching", "knowledge", "confusion", "transformation"]),
            symbols: labels(&["library", "books", "maze", "searching", "transformation"]),
            clarity: 3,
            lucid: false,
            ai_insight: Some("This dream reflects feelings of being overwhelmed by information or searching for answers in your life. The changing librarian represents different sources of guidance you're considering.".to_string()),
            created_at: seed_moment("2025-01-09T07:15:00Z"),
            updated_at: seed_moment("2025-01-09T07:15:00Z"),
        },
        Dream {
            id: "dream-3".to_string(),
            title: "Childhood Home".to_string(),
            content: "I was back in my childhood bedroom, exactly as it was when I was 8 years old. My grandmother was there, making cookies in the kitchen. The smell was so vivid and comforting. Everything felt safe and warm.".to_string(),
            date: seed_date("2025-01-08"),
            mood: Mood::Nostalgic,
            tags: labels(&["family", "memories", "comfort", "childhood"]),
            symbols: labels(&["home", "grandmother", "food", "childhood", "safety"]),
            clarity: 4,
            lucid: false,
            ai_insight: Some("Dreams of childhood homes often represent a longing for security and simpler times. Your grandmother symbolizes wisdom, nurturing, and unconditional love.".to_string()),
            created_at: seed_moment("2025-01-08T06:45:00Z"),
            updated_at: seed_moment("2025-01-08T06:45:00Z"),
        },
        Dream {
            id: "dream-4".to_string(),
            title: "Ocean Waves".to_string(),
            content: "I was standing on a beach watching massive waves crash against the shore. The water was crystal clear but incredibly powerful. I felt both scared and fascinated by the ocean's raw energy.".to_string(),
            date: seed_date("2025-01-07"),
            mood: Mood::Neutral,
            tags: labels(&["water", "ocean", "power", "emotions"]),
            symbols: labels(&["water", "ocean", "waves", "beach", "power"]),
            clarity: 4,
            lucid: false,
            ai_insight: Some("Ocean dreams often represent your emotional state and subconscious mind. The powerful waves suggest you're processing intense emotions or life changes.".to_string()),
            created_at: seed_moment("2025-01-07T09:20:00Z"),
            updated_at: seed_moment("2025-01-07T09:20:00Z"),
        },
        Dream {
            id: "dream-5".to_string(),
            title: "Talking Cat".to_string(),
            content: "A wise old cat was giving me life advice in my kitchen. It spoke in a calm, soothing voice and seemed to know all my secrets. The cat had bright green eyes that seemed to look into my soul.".to_string(),
            date: seed_date("2025-01-06"),
            mood: Mood::Positive,
            tags: labels(&["animals", "wisdom", "communication", "guidance"]),
            symbols: labels(&["cat", "communication", "wisdom", "kitchen", "guidance"]),
            clarity: 5,
            lucid: true,
            ai_insight: Some("Animals speaking in dreams often represent your intuition or inner wisdom trying to communicate important messages. Cats symbolize independence and mysterious knowledge.".to_string()),
            created_at: seed_moment("2025-01-06T05:30:00Z"),
            updated_at: seed_moment("2025-01-06T05:30:00Z"),
        },
        Dream {
            id: "dream-6".to_string(),
            title: "Running Through Forest".to_string(),
            content: "I was running through a dark forest, but not from fear - from pure joy and energy. The trees seemed to part as I approached, creating a clear path. I felt incredibly fast and agile.".to_string(),
            date: seed_date("2025-01-05"),
            mood: Mood::Positive,
            tags: labels(&["running", "forest", "energy", "freedom"]),
            symbols: labels(&["forest", "running", "trees", "path", "speed"]),
            clarity: 3,
            lucid: false,
            ai_insight: Some("Running dreams with positive emotions indicate you're making good progress in life. The forest represents your subconscious, and the clear path suggests clarity in your direction.".to_string()),
            created_at: seed_moment("2025-01-05T07:00:00Z"),
            updated_at: seed_moment("2025-01-05T07:00:00Z"),
        },
    ]
}
