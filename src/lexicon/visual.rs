//! 視覚コンセプト生成用の語彙表: 要素カテゴリ・ムード・構図・スタイル。
use super::LocalizedKeywords;

/// 視覚要素カテゴリの定義。
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElementCategory {
    pub(crate) name: &'static str,
    pub(crate) keywords: LocalizedKeywords,
    pub(crate) colors: &'static [&'static str],
}

/// ムードの定義（照明とカラーパレット付き）。
#[derive(Debug, Clone, Copy)]
pub(crate) struct MoodEntry {
    pub(crate) name: &'static str,
    pub(crate) keywords: LocalizedKeywords,
    pub(crate) lighting: &'static str,
    pub(crate) colors: &'static [&'static str],
}

/// スタイルプリセットの定義。
#[derive(Debug, Clone, Copy)]
pub(crate) struct StyleEntry {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) characteristics: &'static [&'static str],
}

/// ムードキーワード未検出時のデフォルトムード。
pub(crate) const DEFAULT_MOOD: &str = "peaceful";

/// ムード未対応時のデフォルト照明。
pub(crate) const DEFAULT_LIGHTING: &str = "natural balanced lighting";

/// パレットが5色未満のときの補完色。空テキスト時のパレットでもある。
pub(crate) const NEUTRAL_PALETTE: &[&str] = &["#FFFFFF", "#000000", "#808080"];

/// アクション構図を誘発する語（単語境界を見ない部分文字列マッチ）。
pub(crate) const ACTION_WORDS: &[&str] = &["fight", "run", "chase", "battle", "fly", "escape"];

/// 視覚要素カテゴリ表。宣言順が検出順を決定する。
pub(crate) const VISUAL_ELEMENTS: &[ElementCategory] = &[
    ElementCategory {
        name: "nature",
        keywords: LocalizedKeywords {
            en: &[
                "forest",
                "tree",
                "mountain",
                "river",
                "ocean",
                "sky",
                "sun",
                "moon",
                "star",
                "cloud",
                "rain",
                "snow",
                "flower",
                "grass",
                "leaf",
                "garden",
                "lake",
                "waterfall",
                "beach",
            ],
            zh: &[],
        },
        colors: &["#228B22", "#87CEEB", "#8FBC8F", "#4682B4", "#F0E68C"],
    },
    ElementCategory {
        name: "architecture",
        keywords: LocalizedKeywords {
            en: &[
                "building", "house", "castle", "tower", "bridge", "city", "street", "road",
                "temple", "church", "palace", "ruins",
            ],
            zh: &[],
        },
        colors: &["#696969", "#A9A9A9", "#D3D3D3", "#8B4513", "#CD853F"],
    },
    ElementCategory {
        name: "interior",
        keywords: LocalizedKeywords {
            en: &[
                "room",
                "door",
                "window",
                "chair",
                "table",
                "bed",
                "lamp",
                "floor",
                "ceiling",
                "wall",
                "fireplace",
                "stairs",
            ],
            zh: &[],
        },
        colors: &["#DEB887", "#F5DEB3", "#FAEBD7", "#8B4513", "#D2691E"],
    },
    ElementCategory {
        name: "characters",
        keywords: LocalizedKeywords {
            en: &[
                "person", "man", "woman", "child", "king", "queen", "warrior", "hero", "villain",
                "wizard", "princess", "knight",
            ],
            zh: &[],
        },
        colors: &["#FFE4C4", "#FFDAB9", "#FFE4E1", "#8B0000", "#4169E1"],
    },
    ElementCategory {
        name: "creatures",
        keywords: LocalizedKeywords {
            en: &[
                "dragon",
                "monster",
                "animal",
                "bird",
                "wolf",
                "horse",
                "lion",
                "snake",
                "fish",
                "butterfly",
                "cat",
                "dog",
            ],
            zh: &[],
        },
        colors: &["#800000", "#8B0000", "#FFD700", "#FF6347", "#4B0082"],
    },
    ElementCategory {
        name: "magic",
        keywords: LocalizedKeywords {
            en: &[
                "magic",
                "spell",
                "glow",
                "light",
                "fire",
                "energy",
                "portal",
                "crystal",
                "aura",
                "mystical",
                "enchanted",
            ],
            zh: &[],
        },
        colors: &["#9932CC", "#8A2BE2", "#00CED1", "#FFD700", "#FF69B4"],
    },
];

/// ムード表。宣言順がタイブレーク順を決定する。
pub(crate) const MOODS: &[MoodEntry] = &[
    MoodEntry {
        name: "peaceful",
        keywords: LocalizedKeywords {
            en: &["calm", "quiet", "serene", "gentle", "tranquil", "peaceful"],
            zh: &[],
        },
        lighting: "soft natural light",
        colors: &["#E6F3FF", "#B0E0E6", "#98FB98", "#F0FFF0", "#FFFAF0"],
    },
    MoodEntry {
        name: "dramatic",
        keywords: LocalizedKeywords {
            en: &["intense", "powerful", "dramatic", "epic", "grand", "mighty"],
            zh: &[],
        },
        lighting: "dramatic contrast lighting",
        colors: &["#000000", "#8B0000", "#FFD700", "#4B0082", "#1C1C1C"],
    },
    MoodEntry {
        name: "mysterious",
        keywords: LocalizedKeywords {
            en: &["mysterious", "dark", "shadow", "hidden", "secret", "unknown"],
            zh: &[],
        },
        lighting: "dim atmospheric lighting",
        colors: &["#2F4F4F", "#191970", "#483D8B", "#4A4A4A", "#2E2E2E"],
    },
    MoodEntry {
        name: "romantic",
        keywords: LocalizedKeywords {
            en: &["love", "romantic", "tender", "passionate", "warm", "intimate"],
            zh: &[],
        },
        lighting: "warm golden hour",
        colors: &["#FF69B4", "#FFB6C1", "#FFC0CB", "#FFE4E1", "#FFD700"],
    },
    MoodEntry {
        name: "adventurous",
        keywords: LocalizedKeywords {
            en: &["adventure", "journey", "quest", "explore", "discover", "brave"],
            zh: &[],
        },
        lighting: "bright dynamic lighting",
        colors: &["#FF8C00", "#DAA520", "#32CD32", "#4169E1", "#20B2AA"],
    },
    MoodEntry {
        name: "melancholic",
        keywords: LocalizedKeywords {
            en: &["sad", "lonely", "melancholy", "sorrow", "loss", "grief"],
            zh: &[],
        },
        lighting: "overcast diffused light",
        colors: &["#708090", "#778899", "#B0C4DE", "#A9A9A9", "#696969"],
    },
    MoodEntry {
        name: "joyful",
        keywords: LocalizedKeywords {
            en: &["happy", "joy", "celebration", "bright", "festive", "cheerful"],
            zh: &[],
        },
        lighting: "bright warm light",
        colors: &["#FFD700", "#FFA500", "#FF6347", "#32CD32", "#00CED1"],
    },
    MoodEntry {
        name: "eerie",
        keywords: LocalizedKeywords {
            en: &["strange", "eerie", "creepy", "ghostly", "haunted", "supernatural"],
            zh: &[],
        },
        lighting: "cold pale lighting",
        colors: &["#00CED1", "#40E0D0", "#9370DB", "#6B8E23", "#2F4F4F"],
    },
];

/// 構図タイプ別のプリセットフレーズ。
pub(crate) const COMPOSITIONS: &[(&str, &[&str])] = &[
    (
        "landscape",
        &["wide shot", "panoramic view", "horizon emphasis", "rule of thirds"],
    ),
    (
        "portrait",
        &["centered subject", "close-up", "eye-level", "environmental portrait"],
    ),
    (
        "action",
        &["dynamic angle", "motion blur", "diagonal lines", "low angle"],
    ),
    (
        "atmospheric",
        &["depth of field", "silhouette", "foreground interest", "leading lines"],
    ),
    (
        "intimate",
        &["close framing", "shallow depth", "warm tones", "soft focus background"],
    ),
];

/// スタイルプリセット表。先頭 (`realistic`) が未知スタイルのフォールバック。
pub(crate) const STYLES: &[StyleEntry] = &[
    StyleEntry {
        name: "realistic",
        description: "Photorealistic rendering with accurate lighting and textures",
        characteristics: &["natural colors", "detailed textures", "accurate proportions"],
    },
    StyleEntry {
        name: "artistic",
        description: "Painterly style with expressive brushstrokes",
        characteristics: &["visible brushwork", "color harmony", "artistic interpretation"],
    },
    StyleEntry {
        name: "abstract",
        description: "Non-representational focusing on shapes, colors, and emotions",
        characteristics: &["geometric shapes", "bold colors", "conceptual elements"],
    },
    StyleEntry {
        name: "minimalist",
        description: "Simple, clean designs with essential elements only",
        characteristics: &["negative space", "limited palette", "clean lines"],
    },
];

/// ムード名から照明フレーズを引く。未対応は [`DEFAULT_LIGHTING`]。
#[must_use]
pub(crate) fn lighting_for(mood: &str) -> &'static str {
    MOODS
        .iter()
        .find(|m| m.name == mood)
        .map_or(DEFAULT_LIGHTING, |m| m.lighting)
}

/// 構図タイプ名からプリセットフレーズを引く。
#[must_use]
pub(crate) fn composition_phrases(kind: &str) -> &'static [&'static str] {
    COMPOSITIONS
        .iter()
        .find(|(name, _)| *name == kind)
        .map_or(&[], |(_, phrases)| *phrases)
}

/// スタイル名からプリセットを引く。未知のスタイルは `realistic` に落ちる。
#[must_use]
pub(crate) fn style_entry(name: &str) -> StyleEntry {
    STYLES
        .iter()
        .find(|s| s.name == name)
        .copied()
        .unwrap_or(STYLES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_and_mood_declares_five_colors() {
        for category in VISUAL_ELEMENTS {
            assert_eq!(category.colors.len(), 5, "{}", category.name);
        }
        for mood in MOODS {
            assert_eq!(mood.colors.len(), 5, "{}", mood.name);
        }
    }

    #[test]
    fn unknown_style_falls_back_to_realistic() {
        assert_eq!(style_entry("cubist").name, "realistic");
        assert_eq!(style_entry("minimalist").name, "minimalist");
    }

    #[test]
    fn unknown_mood_gets_default_lighting() {
        assert_eq!(lighting_for("nonexistent"), DEFAULT_LIGHTING);
        assert_eq!(lighting_for("eerie"), "cold pale lighting");
    }
}
