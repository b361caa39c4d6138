//! 感情アナライザ: 6感情スコア・センチメント・強度の導出。
//!
//! キーワード頻度ベースの分析であり、学習済みモデルは使いません。
//! 否定語ヒューリスティックは文単位のスコープを持たず、テキスト中に
//! 否定語が1つでもあれば極性全体をスワップ減衰させます。粗い近似ですが、
//! 下流が依存する出力分布を変えないため意図的にこの形を保っています。
use serde::Serialize;
use tracing::debug;

use crate::lexicon::emotion::{
    EMOTION_CATEGORIES, INTENSIFIERS, NEGATIONS, NEGATIVE_EMOTIONS, NEUTRAL, POSITIVE_EMOTIONS,
};
use crate::lexicon::{CompiledMatcher, MatcherSet};
use crate::scoring::{self, CategoryCounts, CategoryScores};

/// 否定語検出時の極性減衰係数。
const NEGATION_DAMPING: f64 = 0.7;

/// ハプティクスデバイスが解釈できる縮約感情語彙。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticEmotion {
    Happy,
    Sad,
    Tense,
    Surprised,
    Calm,
}

impl HapticEmotion {
    /// 分析感情ラベルからハプティクス感情への固定マッピング。
    #[must_use]
    pub fn from_emotion(emotion: &str) -> Self {
        match emotion {
            "joy" => Self::Happy,
            "sadness" => Self::Sad,
            "anger" | "fear" => Self::Tense,
            "surprise" => Self::Surprised,
            // disgust / neutral / 未知ラベルはcalmに落とす
            _ => Self::Calm,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Tense => "tense",
            Self::Surprised => "surprised",
            Self::Calm => "calm",
        }
    }
}

impl std::fmt::Display for HapticEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// センチメント（極性と主観性）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Sentiment {
    /// [-1, 1]。正がポジティブ。
    pub polarity: f64,
    /// [0, 1]。感情キーワードの密度に比例。
    pub subjectivity: f64,
}

/// `detailed = true` のときだけ付く詳細ブロック。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionDetail {
    /// 感情別の生キーワードカウント。
    pub keyword_counts: CategoryCounts,
    /// テキスト長（文字数）。
    pub text_length: usize,
    /// 否定語が1つ以上あるか。
    pub has_negation: bool,
    /// 強調語が1つ以上あるか。
    pub has_intensifier: bool,
}

/// 感情分析の結果。`analyze` 呼び出しごとに新規構築される。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionResult {
    /// 最優勢の感情。無検出時は `"neutral"`。
    pub primary_emotion: String,
    /// 検出済み感情の中での優勢度 [0, 1]。
    pub confidence: f64,
    /// 感情別の正規化スコア（合計 ≤ 1.0）。
    pub emotions: CategoryScores,
    pub sentiment: Sentiment,
    /// 感情の強度 [0, 1]。
    pub intensity: f64,
    /// `None` のとき直列化出力には何も現れない。
    #[serde(flatten)]
    pub detail: Option<EmotionDetail>,
}

/// テキストの感情コンテンツを分析する。
///
/// 構築時にキーワード表をコンパイルし、以後は呼び出し間で状態を持たない。
#[derive(Debug)]
pub struct EmotionAnalyzer {
    emotions: MatcherSet,
    intensifiers: CompiledMatcher,
    negations: CompiledMatcher,
}

impl Default for EmotionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionAnalyzer {
    /// 固定語彙表からアナライザを構築する。
    #[must_use]
    pub fn new() -> Self {
        Self {
            emotions: MatcherSet::compile(EMOTION_CATEGORIES.iter().copied()),
            intensifiers: CompiledMatcher::compile(INTENSIFIERS.iter()),
            negations: CompiledMatcher::compile(NEGATIONS.iter()),
        }
    }

    /// テキストを分析し [`EmotionResult`] を返す。
    ///
    /// 空・空白のみのテキストはニュートラルな空結果に縮退する（例外なし）。
    #[must_use]
    pub fn analyze(&self, text: &str, detailed: bool) -> EmotionResult {
        if text.trim().is_empty() {
            return Self::empty_result();
        }

        let counts = self.emotions.counts(text);
        let emotions = scoring::normalize(&counts);
        let sentiment = self.sentiment(&emotions, text);
        let intensity = self.intensity(text);
        let (primary_emotion, confidence) = primary_emotion(&emotions);

        debug!(
            primary = %primary_emotion,
            confidence,
            total_matches = counts.iter().map(|(_, c)| c).sum::<usize>(),
            "emotion keywords scored"
        );

        let detail = detailed.then(|| EmotionDetail {
            keyword_counts: CategoryCounts::from(counts.as_slice()),
            text_length: text.chars().count(),
            has_negation: self.negations.is_match(text),
            has_intensifier: self.intensifiers.is_match(text),
        });

        EmotionResult {
            primary_emotion,
            confidence,
            emotions,
            sentiment,
            intensity,
            detail,
        }
    }

    /// ハプティクス生成向けに縮約した (感情, 強度) を返す。
    #[must_use]
    pub fn emotion_for_haptics(&self, text: &str) -> (HapticEmotion, f64) {
        let result = self.analyze(text, false);
        (
            HapticEmotion::from_emotion(&result.primary_emotion),
            result.intensity,
        )
    }

    /// 極性と主観性を計算する。
    ///
    /// 否定語が存在する場合は正負の質量をスワップし0.7倍に減衰させる。
    fn sentiment(&self, emotions: &CategoryScores, text: &str) -> Sentiment {
        let mut positive: f64 = POSITIVE_EMOTIONS.iter().map(|e| emotions.get(e)).sum();
        let mut negative: f64 = NEGATIVE_EMOTIONS.iter().map(|e| emotions.get(e)).sum();

        if self.negations.is_match(text) {
            (positive, negative) = (negative * NEGATION_DAMPING, positive * NEGATION_DAMPING);
        }

        let total = positive + negative;
        let polarity = if total > 0.0 {
            scoring::round3((positive - negative) / total)
        } else {
            0.0
        };
        let subjectivity = scoring::round3((emotions.total() * 2.0).min(1.0));

        Sentiment {
            polarity,
            subjectivity,
        }
    }

    /// 感情強度: ベース0.5に強調語・感嘆符・大文字率を加算し [0,1] に収める。
    #[allow(clippy::cast_precision_loss)]
    fn intensity(&self, text: &str) -> f64 {
        let intensifier_count = self.intensifiers.count(text);
        let exclamation_count = text.chars().filter(|c| *c == '!' || *c == '！').count();
        let char_count = text.chars().count();
        let uppercase_count = text.chars().filter(|c| c.is_uppercase()).count();
        let uppercase_ratio = uppercase_count as f64 / char_count.max(1) as f64;

        let intensity = 0.5
            + intensifier_count as f64 * 0.1
            + exclamation_count as f64 * 0.05
            + uppercase_ratio * 0.2;

        scoring::round3(intensity.clamp(0.0, 1.0))
    }

    /// 空入力用のニュートラル結果。
    fn empty_result() -> EmotionResult {
        let zero_counts: Vec<(&str, usize)> = EMOTION_CATEGORIES
            .iter()
            .map(|(name, _)| (*name, 0))
            .collect();
        EmotionResult {
            primary_emotion: NEUTRAL.to_string(),
            confidence: 0.0,
            emotions: scoring::normalize(&zero_counts),
            sentiment: Sentiment::default(),
            intensity: 0.0,
            detail: None,
        }
    }
}

/// 最優勢感情とその優勢度を決める。
///
/// スコアは正規化済み（合計 ≤ 1.0）のため、ここで再計算する優勢度は
/// 「テキスト全体に占める割合」ではなく「検出済み感情の中での支配度」を表す。
fn primary_emotion(emotions: &CategoryScores) -> (String, f64) {
    if emotions.is_all_zero() {
        return (NEUTRAL.to_string(), 0.5);
    }

    let (name, score) = emotions.argmax().unwrap_or((NEUTRAL, 0.0));
    let total = emotions.total();
    let confidence = if total > 0.0 {
        scoring::round3(score / total)
    } else {
        0.0
    };
    (name.to_string(), confidence)
}
