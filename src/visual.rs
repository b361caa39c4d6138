//! 視覚コンセプトジェネレータ: 要素抽出・ムード判定・パレット構築・構図提案。
//!
//! 感情・香りのスコアラと異なり、要素抽出は出現回数ではなく
//! カテゴリ内のキーワード多様性（重複なしの語彙）を扱います。
//! コンセプト構築では「何が」あるかが重要で、頻度は問わないためです。
use serde::Serialize;
use tracing::debug;

use crate::lexicon::MatcherSet;
use crate::lexicon::visual::{
    ACTION_WORDS, DEFAULT_MOOD, MOODS, NEUTRAL_PALETTE, STYLES, StyleEntry, VISUAL_ELEMENTS,
    composition_phrases, lighting_for, style_entry,
};

/// コンセプトごとのパレットスライス幅。
const CONCEPT_PALETTE_COLORS: usize = 5;

/// カテゴリごとにコンセプト化する要素の上限。
const ELEMENTS_PER_CATEGORY: usize = 2;

/// シーン記述に載せる要素の上限。
const SCENE_ELEMENTS: usize = 4;

/// 全体パレットの色数上限。
const PALETTE_LIMIT: usize = 7;

/// landscape構図に必要なnature要素の最小多様性。
const LANDSCAPE_NATURE_THRESHOLD: usize = 3;

/// 1つの視覚コンセプトレコード。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptEntry {
    pub element: String,
    pub category: String,
    pub color_palette: Vec<String>,
    pub mood: String,
    pub composition: String,
}

/// スタイルプリセットの記述。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    pub description: String,
    pub characteristics: Vec<String>,
}

impl From<StyleEntry> for StyleInfo {
    fn from(entry: StyleEntry) -> Self {
        Self {
            description: entry.description.to_string(),
            characteristics: entry.characteristics.iter().copied().map(String::from).collect(),
        }
    }
}

/// 視覚コンセプト生成の結果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualConcept {
    /// `max_concepts` 件以下。
    pub concepts: Vec<ConceptEntry>,
    pub scene_description: String,
    pub lighting: String,
    pub mood: String,
    /// 色は集合として扱うこと。順序は契約に含まれない。
    pub color_palette: Vec<String>,
    pub style: StyleInfo,
    pub composition_suggestion: String,
}

/// 物語テキストから視覚コンセプトを生成する。
#[derive(Debug)]
pub struct ConceptGenerator {
    elements: MatcherSet,
    moods: MatcherSet,
}

impl Default for ConceptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptGenerator {
    /// 固定語彙表からジェネレータを構築する。
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: MatcherSet::compile(
                VISUAL_ELEMENTS.iter().map(|c| (c.name, c.keywords)),
            ),
            moods: MatcherSet::compile(MOODS.iter().map(|m| (m.name, m.keywords))),
        }
    }

    /// 視覚コンセプトを生成する。
    ///
    /// 未知の `style` は黙って `realistic` に落ちる。
    /// 空テキストは固定の空シーン結果に縮退する。
    #[must_use]
    pub fn generate_concepts(
        &self,
        text: &str,
        style: &str,
        max_concepts: usize,
    ) -> VisualConcept {
        if text.trim().is_empty() {
            return Self::empty_concept();
        }

        let detected = self.extract_elements(text);
        let mood_idx = self.determine_mood(text);
        let mood = MOODS.get(mood_idx).map_or(DEFAULT_MOOD, |m| m.name);
        let palette = build_palette(&detected, mood_idx);
        let composition = suggest_composition(text, &detected);
        let lighting = lighting_for(mood);

        debug!(
            categories = detected.len(),
            mood, composition, "visual concepts assembled"
        );

        let mut concepts = Vec::new();
        for (idx, items) in &detected {
            let category = VISUAL_ELEMENTS[*idx].name;
            for item in items.iter().take(ELEMENTS_PER_CATEGORY) {
                concepts.push(ConceptEntry {
                    element: item.clone(),
                    category: category.to_string(),
                    color_palette: palette
                        .iter()
                        .take(CONCEPT_PALETTE_COLORS)
                        .cloned()
                        .collect(),
                    mood: mood.to_string(),
                    composition: composition.clone(),
                });
            }
        }
        concepts.truncate(max_concepts);

        VisualConcept {
            concepts,
            scene_description: scene_description(&detected, mood, lighting),
            lighting: lighting.to_string(),
            mood: mood.to_string(),
            color_palette: palette,
            style: style_entry(style).into(),
            composition_suggestion: composition,
        }
    }

    /// カテゴリごとに重複なしのマッチ語彙を集める。検出ゼロのカテゴリは含めない。
    fn extract_elements(&self, text: &str) -> Vec<(usize, Vec<String>)> {
        self.elements
            .matchers()
            .iter()
            .enumerate()
            .filter_map(|(idx, category)| {
                let found = category.matcher.distinct_matches(text);
                (!found.is_empty()).then_some((idx, found))
            })
            .collect()
    }

    /// ムード表のインデックスを返す。全ゼロならデフォルトムード。
    fn determine_mood(&self, text: &str) -> usize {
        let counts = self.moods.counts(text);
        let mut best: Option<(usize, usize)> = None;
        for (idx, (_, count)) in counts.iter().enumerate() {
            if *count > 0 && best.is_none_or(|(_, top)| *count > top) {
                best = Some((idx, *count));
            }
        }
        best.map_or_else(
            || {
                MOODS
                    .iter()
                    .position(|m| m.name == DEFAULT_MOOD)
                    .unwrap_or(0)
            },
            |(idx, _)| idx,
        )
    }

    /// 空入力用の固定結果。
    fn empty_concept() -> VisualConcept {
        VisualConcept {
            concepts: Vec::new(),
            scene_description: "Empty scene.".to_string(),
            lighting: "neutral lighting".to_string(),
            mood: "neutral".to_string(),
            color_palette: NEUTRAL_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            style: style_entry("realistic").into(),
            composition_suggestion: "standard framing".to_string(),
        }
    }

    /// スタイル情報を返す。未知のスタイルは `realistic` の情報。
    #[must_use]
    pub fn style_info(&self, style: &str) -> StyleInfo {
        style_entry(style).into()
    }

    /// 利用可能なスタイル名を宣言順で返す。
    #[must_use]
    pub fn list_styles(&self) -> Vec<&'static str> {
        STYLES.iter().map(|s| s.name).collect()
    }
}

/// パレット構築: 検出カテゴリの先頭2色 + ムードの先頭3色。
///
/// 5色未満ならニュートラル色で補完し、7色に切り詰める。
/// 挿入順の重複排除であり、順序は実装定義（呼び出し側は集合として扱う）。
fn build_palette(detected: &[(usize, Vec<String>)], mood_idx: usize) -> Vec<String> {
    let mut palette: Vec<&'static str> = Vec::new();

    for (idx, _) in detected {
        for color in VISUAL_ELEMENTS[*idx].colors.iter().take(2) {
            if !palette.contains(color) {
                palette.push(color);
            }
        }
    }
    if let Some(mood) = MOODS.get(mood_idx) {
        for color in mood.colors.iter().take(3) {
            if !palette.contains(color) {
                palette.push(color);
            }
        }
    }
    if palette.len() < 5 {
        for color in NEUTRAL_PALETTE {
            if !palette.contains(color) {
                palette.push(color);
            }
        }
    }

    palette.truncate(PALETTE_LIMIT);
    palette.into_iter().map(String::from).collect()
}

/// 構図提案: 優先順位付きルール、最初にマッチしたものが勝つ。
fn suggest_composition(text: &str, detected: &[(usize, Vec<String>)]) -> String {
    let category_elements = |name: &str| {
        detected
            .iter()
            .find(|(idx, _)| VISUAL_ELEMENTS[*idx].name == name)
            .map(|(_, items)| items.len())
    };

    let kind = if category_elements("nature").is_some_and(|n| n >= LANDSCAPE_NATURE_THRESHOLD) {
        "landscape"
    } else if category_elements("characters").is_some() {
        "portrait"
    } else {
        // アクション語は単語境界を見ない部分文字列マッチ
        let lowered = text.to_lowercase();
        if ACTION_WORDS.iter().any(|word| lowered.contains(word)) {
            "action"
        } else {
            "atmospheric"
        }
    };

    let phrases = composition_phrases(kind);
    format!("{kind} - {}", phrases[..2.min(phrases.len())].join(", "))
}

/// シーン記述: ムード・代表要素・照明の連結。
fn scene_description(detected: &[(usize, Vec<String>)], mood: &str, lighting: &str) -> String {
    let mut featured: Vec<&str> = Vec::new();
    for (_, items) in detected {
        featured.extend(
            items
                .iter()
                .take(ELEMENTS_PER_CATEGORY)
                .map(String::as_str),
        );
    }
    featured.truncate(SCENE_ELEMENTS);

    let mut parts = vec![format!("A {mood} scene")];
    if !featured.is_empty() {
        parts.push(format!("featuring {}", featured.join(", ")));
    }
    parts.push(format!("with {lighting}"));
    format!("{}.", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ConceptGenerator {
        ConceptGenerator::new()
    }

    #[test]
    fn nature_rich_text_suggests_landscape() {
        let concept = generator().generate_concepts(
            "The mountain rose above the forest, a river winding under the open sky.",
            "realistic",
            5,
        );
        assert!(concept.composition_suggestion.starts_with("landscape - "));
        assert!(concept.composition_suggestion.contains("wide shot"));
    }

    #[test]
    fn characters_trigger_portrait_composition() {
        let concept =
            generator().generate_concepts("The queen waited in silence.", "realistic", 5);
        assert!(concept.composition_suggestion.starts_with("portrait - "));
    }

    #[test]
    fn action_words_trigger_action_composition() {
        let concept =
            generator().generate_concepts("They had to escape before dawn.", "realistic", 5);
        assert!(concept.composition_suggestion.starts_with("action - "));
    }

    #[test]
    fn plain_text_defaults_to_atmospheric() {
        let concept = generator().generate_concepts("It was an ordinary day.", "realistic", 5);
        assert!(concept.composition_suggestion.starts_with("atmospheric - "));
    }

    #[test]
    fn mood_defaults_to_peaceful_without_keywords() {
        let concept = generator().generate_concepts("A tree by the lake.", "realistic", 5);
        assert_eq!(concept.mood, "peaceful");
        assert_eq!(concept.lighting, "soft natural light");
    }

    #[test]
    fn dominant_mood_wins() {
        let concept = generator().generate_concepts(
            "A dark, mysterious shadow crossed the quiet hall.",
            "realistic",
            5,
        );
        assert_eq!(concept.mood, "mysterious");
        assert_eq!(concept.lighting, "dim atmospheric lighting");
    }

    #[test]
    fn empty_text_returns_fixed_empty_scene() {
        let concept = generator().generate_concepts("", "realistic", 5);
        assert!(concept.concepts.is_empty());
        assert_eq!(concept.scene_description, "Empty scene.");
        assert_eq!(concept.color_palette.len(), 3);
        assert_eq!(concept.mood, "neutral");
        assert_eq!(concept.composition_suggestion, "standard framing");
    }

    #[test]
    fn palette_has_between_three_and_seven_colors() {
        let concept = generator().generate_concepts(
            "A dragon circled the castle tower under a bright festive sky.",
            "realistic",
            5,
        );
        assert!(concept.color_palette.len() >= 3);
        assert!(concept.color_palette.len() <= 7);
        // 重複なし
        let mut unique = concept.color_palette.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), concept.color_palette.len());
    }

    #[test]
    fn elements_are_distinct_not_counted() {
        let concept =
            generator().generate_concepts("tree tree tree and one flower", "realistic", 10);
        let nature: Vec<_> = concept
            .concepts
            .iter()
            .filter(|c| c.category == "nature")
            .collect();
        // treeは何度出ても1要素。カテゴリ上限2のためtree+flowerの2件。
        assert_eq!(nature.len(), 2);
    }

    #[test]
    fn concepts_respect_max_concepts() {
        let concept = generator().generate_concepts(
            "forest mountain castle bridge room window hero wizard dragon wolf magic crystal",
            "realistic",
            3,
        );
        assert_eq!(concept.concepts.len(), 3);
    }

    #[test]
    fn unknown_style_falls_back_to_realistic() {
        let generator = generator();
        let concept = generator.generate_concepts("a quiet room", "vaporwave", 5);
        assert_eq!(concept.style, generator.style_info("realistic"));
    }

    #[test]
    fn scene_description_mentions_mood_and_lighting() {
        let concept = generator().generate_concepts(
            "A serene garden with a fountain and gentle light.",
            "realistic",
            5,
        );
        assert!(concept.scene_description.starts_with("A peaceful scene"));
        assert!(concept.scene_description.ends_with("with soft natural light."));
        assert!(concept.scene_description.contains("featuring"));
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = generator();
        let text = "The wizard raised a glowing crystal inside the ancient temple.";
        assert_eq!(
            generator.generate_concepts(text, "artistic", 5),
            generator.generate_concepts(text, "artistic", 5)
        );
    }
}
