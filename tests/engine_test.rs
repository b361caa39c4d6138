//! 公開APIに対する統合テスト。
//!
//! 下流コンシューマが依存する観測可能な性質（正規化、縮退、決定性、
//! JSONワイヤ形状）をエンドツーエンドで固定する。
use rstest::rstest;
use serde_json::Value;

use sense_engine::emotion::HapticEmotion;
use sense_engine::{Config, EmotionAnalyzer, Engine, ScentMapper, ConceptGenerator};

#[rstest]
#[case("I am so happy and glad today!", "joy")]
#[case("Tears of sorrow, a lonely grief.", "sadness")]
#[case("He was furious, full of rage and hate.", "anger")]
#[case("A terrified, anxious silence. Panic.", "fear")]
#[case("Shocked and amazed, she stared in awe.", "surprise")]
#[case("A gross, awful, terrible smell.", "disgust")]
fn primary_emotion_follows_dominant_keywords(#[case] text: &str, #[case] expected: &str) {
    let analyzer = EmotionAnalyzer::new();
    let result = analyzer.analyze(text, false);
    assert_eq!(result.primary_emotion, expected);
    assert!(result.confidence > 0.0);
}

#[rstest]
#[case("happy joy wonderful")]
#[case("sad angry scared shocked happy disgusted")]
#[case("The quick brown fox jumps over the lazy dog.")]
#[case("")]
fn emotion_scores_never_exceed_unit_mass(#[case] text: &str) {
    let analyzer = EmotionAnalyzer::new();
    let result = analyzer.analyze(text, false);
    // 各スコアは3桁丸めのため、丸め分だけ1.0を超えうる
    assert!(result.emotions.total() <= 1.0 + 0.005);
}

#[test]
fn empty_text_degrades_to_neutral_everywhere() {
    let analyzer = EmotionAnalyzer::new();
    let emotion = analyzer.analyze("", false);
    assert_eq!(emotion.primary_emotion, "neutral");
    assert_eq!(emotion.confidence, 0.0);
    assert!(emotion.emotions.is_all_zero());

    let mapper = ScentMapper::new();
    let scent = mapper.generate_profile("   ", 0.7, Some("joy"));
    assert_eq!(scent.primary_scent.name, "Neutral");
    assert_eq!(scent.primary_scent.family, "fresh");
    assert!(scent.detected_families.is_empty());

    let generator = ConceptGenerator::new();
    let visual = generator.generate_concepts("", "realistic", 5);
    assert!(visual.concepts.is_empty());
    assert_eq!(visual.scene_description, "Empty scene.");
    assert_eq!(visual.color_palette.len(), 3);
}

#[test]
fn polarity_sign_tracks_emotion_valence() {
    let analyzer = EmotionAnalyzer::new();
    let positive = analyzer.analyze("joy and delight, a wonderful smile", false);
    assert!(positive.sentiment.polarity > 0.0);

    let negative = analyzer.analyze("sorrow and rage, bitter tears", false);
    assert!(negative.sentiment.polarity < 0.0);
}

#[test]
fn pine_cedar_forest_maps_to_woody() {
    let mapper = ScentMapper::new();
    let profile = mapper.generate_profile("pine cedar forest", 0.5, None);
    assert_eq!(profile.primary_scent.family, "woody");
}

#[rstest]
#[case("pine cedar forest")]
#[case("roses and honey in the warm market")]
#[case("sea breeze over the campfire")]
fn primary_intensity_is_monotone_in_caller_intensity(#[case] text: &str) {
    let mapper = ScentMapper::new();
    let low = mapper.generate_profile(text, 0.2, None);
    let high = mapper.generate_profile(text, 0.9, None);
    assert!(high.primary_scent.intensity >= low.primary_scent.intensity);
}

#[test]
fn emotion_bias_seeds_preferred_families() {
    let mapper = ScentMapper::new();
    // ベーステキスト単独では何も検出されない
    let unbiased = mapper.generate_profile("the ledger was closed", 0.5, None);
    assert!(unbiased.detected_families.is_empty());

    let biased = mapper.generate_profile("the ledger was closed", 0.5, Some("joy"));
    for family in ["citrus", "floral", "fresh"] {
        assert!(biased.detected_families.contains(&family.to_string()));
    }
}

#[rstest]
#[case("rose pine lemon", 0.5)]
#[case("smoke smoke fire honey mint", 0.8)]
#[case("ocean wave salt cedar", 0.3)]
fn blend_percentages_sum_to_one_hundred(#[case] text: &str, #[case] intensity: f64) {
    let mapper = ScentMapper::new();
    let profile = mapper.generate_profile(text, intensity, None);
    assert!(!profile.detected_families.is_empty());
    let sum: f64 = profile
        .blend_recipe
        .channels
        .iter()
        .map(|c| c.percentage)
        .sum();
    assert!((sum - 100.0).abs() < 0.5, "{text}: sum = {sum}");
}

#[test]
fn repeated_calls_yield_byte_identical_results() {
    let engine = Engine::default();
    let text = "A happy wizard crossed the misty forest, chased by a dragon!";

    let emotion_a = serde_json::to_string(&engine.analyze_emotion(text, true)).unwrap();
    let emotion_b = serde_json::to_string(&engine.analyze_emotion(text, true)).unwrap();
    assert_eq!(emotion_a, emotion_b);

    let scent_a =
        serde_json::to_string(&engine.generate_scent_profile(text, Some(0.6), Some("joy")))
            .unwrap();
    let scent_b =
        serde_json::to_string(&engine.generate_scent_profile(text, Some(0.6), Some("joy")))
            .unwrap();
    assert_eq!(scent_a, scent_b);

    let visual_a =
        serde_json::to_string(&engine.generate_visual_concepts(text, Some("artistic"), Some(5)))
            .unwrap();
    let visual_b =
        serde_json::to_string(&engine.generate_visual_concepts(text, Some("artistic"), Some(5)))
            .unwrap();
    assert_eq!(visual_a, visual_b);
}

#[test]
fn emotion_result_wire_shape_is_stable() {
    let analyzer = EmotionAnalyzer::new();
    let value = serde_json::to_value(analyzer.analyze("so very happy!", true)).unwrap();

    assert_eq!(value["primary_emotion"], "joy");
    assert!(value["emotions"].is_object());
    assert!(value["emotions"]["joy"].is_number());
    assert!(value["sentiment"]["polarity"].is_number());
    assert!(value["sentiment"]["subjectivity"].is_number());
    // detailedフィールドはトップレベルに平坦化される
    assert!(value["keyword_counts"].is_object());
    assert_eq!(value["has_negation"], Value::Bool(false));
    assert_eq!(value["has_intensifier"], Value::Bool(true));
}

#[test]
fn detail_fields_are_absent_without_detailed_flag() {
    let analyzer = EmotionAnalyzer::new();
    let value = serde_json::to_value(analyzer.analyze("so very happy!", false)).unwrap();
    assert!(value.get("keyword_counts").is_none());
    assert!(value.get("has_negation").is_none());
}

#[test]
fn scent_profile_wire_shape_is_stable() {
    let mapper = ScentMapper::new();
    let value =
        serde_json::to_value(mapper.generate_profile("pine forest and roses", 0.5, None)).unwrap();

    assert!(value["primary_scent"]["name"].is_string());
    assert!(value["primary_scent"]["notes"].is_array());
    assert!(value["ambient_scents"].is_array());
    assert!(value["blend_recipe"]["channels"][0]["channel_id"].is_number());
    assert_eq!(value["blend_recipe"]["blend_time_ms"], 500);
    assert!(value["detected_families"].is_array());
    assert!(value["overall_intensity"].is_number());
}

#[test]
fn empty_blend_recipe_omits_blend_time() {
    let mapper = ScentMapper::new();
    let value = serde_json::to_value(mapper.generate_profile("", 0.5, None)).unwrap();
    assert!(value["blend_recipe"].get("blend_time_ms").is_none());
    assert_eq!(value["blend_recipe"]["total_intensity"], 0.0);
}

#[test]
fn visual_concept_wire_shape_is_stable() {
    let generator = ConceptGenerator::new();
    let value = serde_json::to_value(generator.generate_concepts(
        "A dragon over the castle in dramatic light",
        "abstract",
        5,
    ))
    .unwrap();

    assert!(value["concepts"].is_array());
    assert!(value["concepts"][0]["element"].is_string());
    assert!(value["concepts"][0]["color_palette"].is_array());
    assert!(value["scene_description"].is_string());
    assert!(value["style"]["description"].is_string());
    assert!(value["style"]["characteristics"].is_array());
    assert!(value["composition_suggestion"].is_string());
}

#[test]
fn snapshot_couples_modalities_through_the_caller() {
    let engine = Engine::new(Config::default());
    let snapshot = engine.render_snapshot("A happy dance in the lemon grove!");

    assert_eq!(snapshot.emotion.primary_emotion, "joy");
    assert_eq!(snapshot.haptic.emotion, HapticEmotion::Happy);
    // joyバイアスによりcitrus系が検出集合に入る
    assert!(
        snapshot
            .scent
            .detected_families
            .contains(&"citrus".to_string())
    );
    assert_eq!(snapshot.visual.mood, "joyful");
}

#[rstest]
#[case("happy", HapticEmotion::Happy)]
#[case("cry and mourn", HapticEmotion::Sad)]
#[case("furious rage", HapticEmotion::Tense)]
#[case("terrified panic", HapticEmotion::Tense)]
#[case("astonished and stunned", HapticEmotion::Surprised)]
#[case("nauseated and revolted", HapticEmotion::Calm)]
#[case("plain report text", HapticEmotion::Calm)]
fn haptic_mapping_covers_all_emotions(#[case] text: &str, #[case] expected: HapticEmotion) {
    let analyzer = EmotionAnalyzer::new();
    let (emotion, _) = analyzer.emotion_for_haptics(text);
    assert_eq!(emotion, expected);
}
