//! 感情分析用の語彙表（英語・中国語）。
use super::LocalizedKeywords;

/// ニュートラル（どの感情キーワードも検出されなかった場合）のラベル。
pub(crate) const NEUTRAL: &str = "neutral";

/// 感情カテゴリ表。宣言順がタイブレーク順を決定する。
pub(crate) const EMOTION_CATEGORIES: &[(&str, LocalizedKeywords)] = &[
    (
        "joy",
        LocalizedKeywords {
            en: &[
                "happy",
                "joy",
                "delight",
                "excited",
                "thrilled",
                "wonderful",
                "amazing",
                "great",
                "love",
                "fantastic",
                "excellent",
                "cheerful",
                "elated",
                "pleased",
                "glad",
                "content",
                "smile",
                "laugh",
            ],
            zh: &["開心", "快樂", "高興", "歡喜", "幸福", "愉快", "興奮", "棒"],
        },
    ),
    (
        "sadness",
        LocalizedKeywords {
            en: &[
                "sad",
                "unhappy",
                "depressed",
                "sorrow",
                "grief",
                "miserable",
                "heartbroken",
                "devastated",
                "lonely",
                "melancholy",
                "gloomy",
                "despair",
                "hopeless",
                "cry",
                "tears",
                "mourn",
            ],
            zh: &["悲傷", "難過", "傷心", "沮喪", "憂鬱", "哀傷", "痛苦", "哭"],
        },
    ),
    (
        "anger",
        LocalizedKeywords {
            en: &[
                "angry",
                "furious",
                "rage",
                "mad",
                "irritated",
                "annoyed",
                "outraged",
                "hostile",
                "bitter",
                "resentful",
                "frustrated",
                "hate",
                "loathe",
                "despise",
            ],
            zh: &["生氣", "憤怒", "惱怒", "氣憤", "火大", "討厭", "恨"],
        },
    ),
    (
        "fear",
        LocalizedKeywords {
            en: &[
                "afraid",
                "scared",
                "terrified",
                "fearful",
                "anxious",
                "worried",
                "nervous",
                "panic",
                "dread",
                "horror",
                "frightened",
                "alarmed",
                "uneasy",
                "threatened",
            ],
            zh: &["害怕", "恐懼", "擔心", "焦慮", "緊張", "驚恐", "不安"],
        },
    ),
    (
        "surprise",
        LocalizedKeywords {
            en: &[
                "surprised",
                "shocked",
                "amazed",
                "astonished",
                "stunned",
                "startled",
                "unexpected",
                "incredible",
                "unbelievable",
                "wonder",
                "awe",
            ],
            zh: &["驚訝", "震驚", "意外", "吃驚", "驚奇", "驚嘆"],
        },
    ),
    (
        "disgust",
        LocalizedKeywords {
            en: &[
                "disgusted",
                "revolted",
                "repulsed",
                "sick",
                "nauseated",
                "gross",
                "awful",
                "terrible",
                "horrible",
                "unpleasant",
            ],
            zh: &["噁心", "厭惡", "反感", "討厭", "作嘔"],
        },
    ),
];

/// センチメント極性の正側に寄与する感情。
pub(crate) const POSITIVE_EMOTIONS: &[&str] = &["joy", "surprise"];

/// センチメント極性の負側に寄与する感情。
pub(crate) const NEGATIVE_EMOTIONS: &[&str] = &["sadness", "anger", "fear", "disgust"];

/// 強調語（intensity計算で1語につき+0.1）。
pub(crate) const INTENSIFIERS: LocalizedKeywords = LocalizedKeywords {
    en: &[
        "very",
        "extremely",
        "incredibly",
        "absolutely",
        "totally",
        "completely",
        "so",
        "really",
        "quite",
        "truly",
    ],
    zh: &["非常", "極度", "超級", "十分", "太"],
};

/// 否定語。1語でも検出されると極性をスワップ減衰させる。
pub(crate) const NEGATIONS: LocalizedKeywords = LocalizedKeywords {
    en: &[
        "not",
        "no",
        "never",
        "neither",
        "none",
        "nobody",
        "nothing",
        "nowhere",
        "hardly",
        "barely",
        "scarcely",
        "don't",
        "doesn't",
        "didn't",
        "won't",
        "wouldn't",
        "couldn't",
        "shouldn't",
    ],
    zh: &["不", "沒有", "沒", "別", "未", "無"],
};
