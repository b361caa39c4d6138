//! 香りファミリーの語彙表・レシピ・感情バイアス表・ハードウェアチャネル表。
use super::LocalizedKeywords;

/// 1つの香りレシピ（名称とノート構成）。
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScentRecipe {
    pub(crate) name: &'static str,
    pub(crate) notes: &'static [&'static str],
}

/// 香りファミリーの定義。
///
/// `channel` は出力デバイスのハードウェアチャネルIDです。
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScentFamily {
    pub(crate) name: &'static str,
    pub(crate) keywords: LocalizedKeywords,
    pub(crate) scents: &'static [ScentRecipe],
    pub(crate) base_intensity: f64,
    pub(crate) channel: u8,
}

/// キーワード未検出時のデフォルトファミリー。
pub(crate) const DEFAULT_FAMILY: &str = "fresh";

/// 香りファミリー表。宣言順が検出順・タイブレーク順を決定する。
pub(crate) const SCENT_FAMILIES: &[ScentFamily] = &[
    ScentFamily {
        name: "floral",
        keywords: LocalizedKeywords {
            en: &[
                "flower", "rose", "jasmine", "lavender", "lily", "garden", "blossom", "bloom",
                "petal", "bouquet", "orchid", "violet",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Rose Garden",
                notes: &["rose", "green leaf", "morning dew"],
            },
            ScentRecipe {
                name: "Jasmine Night",
                notes: &["jasmine", "white flower", "honey"],
            },
            ScentRecipe {
                name: "Lavender Fields",
                notes: &["lavender", "herb", "soft musk"],
            },
        ],
        base_intensity: 0.6,
        channel: 1,
    },
    ScentFamily {
        name: "woody",
        keywords: LocalizedKeywords {
            en: &[
                "forest", "tree", "wood", "oak", "pine", "cedar", "bark", "timber", "trunk",
                "log", "cabin",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Deep Forest",
                notes: &["pine", "cedar", "earth"],
            },
            ScentRecipe {
                name: "Oak Study",
                notes: &["oak", "leather", "paper"],
            },
            ScentRecipe {
                name: "Sandalwood Dream",
                notes: &["sandalwood", "cream", "warmth"],
            },
        ],
        base_intensity: 0.5,
        channel: 2,
    },
    ScentFamily {
        name: "citrus",
        keywords: LocalizedKeywords {
            en: &[
                "lemon",
                "orange",
                "lime",
                "citrus",
                "grapefruit",
                "tangerine",
                "zest",
                "fresh",
                "bright",
                "sunny",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Morning Citrus",
                notes: &["lemon", "bergamot", "fresh air"],
            },
            ScentRecipe {
                name: "Orange Grove",
                notes: &["orange", "neroli", "green"],
            },
            ScentRecipe {
                name: "Lime Burst",
                notes: &["lime", "mint", "sparkling"],
            },
        ],
        base_intensity: 0.7,
        channel: 3,
    },
    ScentFamily {
        name: "spicy",
        keywords: LocalizedKeywords {
            en: &[
                "spice", "cinnamon", "pepper", "ginger", "clove", "cardamom", "exotic", "warm",
                "market", "bazaar",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Spice Market",
                notes: &["cinnamon", "cardamom", "saffron"],
            },
            ScentRecipe {
                name: "Warm Ginger",
                notes: &["ginger", "pepper", "honey"],
            },
            ScentRecipe {
                name: "Exotic Blend",
                notes: &["clove", "nutmeg", "vanilla"],
            },
        ],
        base_intensity: 0.6,
        channel: 4,
    },
    ScentFamily {
        name: "fresh",
        keywords: LocalizedKeywords {
            en: &[
                "clean",
                "air",
                "breeze",
                "wind",
                "morning",
                "rain",
                "dew",
                "mist",
                "crisp",
                "cool",
                "refreshing",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Mountain Air",
                notes: &["clean air", "pine", "ice"],
            },
            ScentRecipe {
                name: "After Rain",
                notes: &["petrichor", "wet earth", "ozone"],
            },
            ScentRecipe {
                name: "Morning Dew",
                notes: &["green", "water", "fresh grass"],
            },
        ],
        base_intensity: 0.4,
        channel: 5,
    },
    ScentFamily {
        name: "sweet",
        keywords: LocalizedKeywords {
            en: &[
                "sweet",
                "candy",
                "sugar",
                "honey",
                "vanilla",
                "cake",
                "dessert",
                "chocolate",
                "caramel",
                "cookie",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Vanilla Dream",
                notes: &["vanilla", "cream", "sugar"],
            },
            ScentRecipe {
                name: "Honey Nectar",
                notes: &["honey", "flower", "warmth"],
            },
            ScentRecipe {
                name: "Chocolate Warmth",
                notes: &["cocoa", "milk", "caramel"],
            },
        ],
        base_intensity: 0.6,
        channel: 6,
    },
    ScentFamily {
        name: "earthy",
        keywords: LocalizedKeywords {
            en: &[
                "earth", "soil", "ground", "mud", "dirt", "cave", "stone", "rock", "mineral",
                "ancient", "roots",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Deep Earth",
                notes: &["soil", "roots", "mushroom"],
            },
            ScentRecipe {
                name: "Stone Cave",
                notes: &["mineral", "moss", "damp"],
            },
            ScentRecipe {
                name: "Ancient Ground",
                notes: &["patchouli", "vetiver", "earth"],
            },
        ],
        base_intensity: 0.5,
        channel: 7,
    },
    ScentFamily {
        name: "oceanic",
        keywords: LocalizedKeywords {
            en: &[
                "ocean", "sea", "beach", "wave", "salt", "marine", "coastal", "shore", "tide",
                "seaweed", "coral",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Ocean Breeze",
                notes: &["sea salt", "marine", "driftwood"],
            },
            ScentRecipe {
                name: "Beach Morning",
                notes: &["sand", "coconut", "sun"],
            },
            ScentRecipe {
                name: "Deep Sea",
                notes: &["algae", "water", "mineral"],
            },
        ],
        base_intensity: 0.5,
        channel: 8,
    },
    ScentFamily {
        name: "smoky",
        keywords: LocalizedKeywords {
            en: &[
                "smoke", "fire", "burn", "ash", "ember", "flame", "campfire", "incense",
                "charcoal", "bonfire",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Campfire Night",
                notes: &["smoke", "wood", "embers"],
            },
            ScentRecipe {
                name: "Incense Temple",
                notes: &["frankincense", "myrrh", "smoke"],
            },
            ScentRecipe {
                name: "Ember Glow",
                notes: &["burnt wood", "warmth", "ash"],
            },
        ],
        base_intensity: 0.6,
        channel: 9,
    },
    ScentFamily {
        name: "herbal",
        keywords: LocalizedKeywords {
            en: &[
                "herb",
                "mint",
                "basil",
                "sage",
                "thyme",
                "rosemary",
                "eucalyptus",
                "tea",
                "medicine",
                "apothecary",
            ],
            zh: &[],
        },
        scents: &[
            ScentRecipe {
                name: "Herb Garden",
                notes: &["basil", "thyme", "rosemary"],
            },
            ScentRecipe {
                name: "Mint Fresh",
                notes: &["mint", "eucalyptus", "green"],
            },
            ScentRecipe {
                name: "Sage Wisdom",
                notes: &["sage", "cedar", "dry grass"],
            },
        ],
        base_intensity: 0.5,
        channel: 10,
    },
];

/// 感情ラベル → 優先ファミリーのバイアス表。
///
/// 感情分析の6感情に加えて、呼び出し側が渡しうる拡張ラベルも受け付ける。
pub(crate) const EMOTION_SCENTS: &[(&str, &[&str])] = &[
    ("joy", &["citrus", "floral", "fresh"]),
    ("sadness", &["woody", "earthy", "oceanic"]),
    ("anger", &["spicy", "smoky", "earthy"]),
    ("fear", &["smoky", "earthy", "herbal"]),
    ("surprise", &["citrus", "fresh", "herbal"]),
    ("calm", &["floral", "herbal", "woody"]),
    ("excitement", &["citrus", "spicy", "sweet"]),
    ("romance", &["floral", "sweet", "spicy"]),
];

/// ファミリー名からインデックスを引く。
#[must_use]
pub(crate) fn family_index(name: &str) -> Option<usize> {
    SCENT_FAMILIES.iter().position(|f| f.name == name)
}

/// 感情ラベルから優先ファミリーを引く。未知のラベルは `None`。
#[must_use]
pub(crate) fn preferred_families(emotion: &str) -> Option<&'static [&'static str]> {
    EMOTION_SCENTS
        .iter()
        .find(|(name, _)| *name == emotion)
        .map(|(_, families)| *families)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_recipes_and_unique_channel() {
        let mut channels = Vec::new();
        for family in SCENT_FAMILIES {
            assert!(!family.scents.is_empty(), "{} has no recipes", family.name);
            assert!(!channels.contains(&family.channel));
            channels.push(family.channel);
        }
    }

    #[test]
    fn emotion_bias_targets_exist() {
        for (emotion, families) in EMOTION_SCENTS {
            for family in *families {
                assert!(family_index(family).is_some(), "{emotion} -> {family}");
            }
        }
    }
}
