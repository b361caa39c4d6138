//! エンジンファサード: 3つのアナライザを所有し、クロスモーダル連鎖を提供する。
//!
//! グローバルシングルトンではなく、呼び出し側が構築して所有する明示的DI。
//! アナライザは構築後読み取り専用のため、`Engine` は `Send + Sync` であり
//! ロックなしで複数スレッドから共有できます。
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::emotion::{EmotionAnalyzer, EmotionResult, HapticEmotion};
use crate::scent::{ScentMapper, ScentProfile};
use crate::visual::{ConceptGenerator, VisualConcept};

/// ハプティクスレイヤーへ渡す縮約キュー。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HapticCue {
    pub emotion: HapticEmotion,
    pub intensity: f64,
}

/// 1テキストに対する全モダリティのスナップショット。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenseSnapshot {
    pub emotion: EmotionResult,
    pub haptic: HapticCue,
    pub scent: ScentProfile,
    pub visual: VisualConcept,
}

/// 感覚シグナル抽出エンジン。
///
/// 3つのアナライザと呼び出し既定値を所有する。構築コストは
/// キーワード表のコンパイルのみで、以後の呼び出しは純粋計算。
#[derive(Debug)]
pub struct Engine {
    config: Config,
    emotion: EmotionAnalyzer,
    scent: ScentMapper,
    visual: ConceptGenerator,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    /// 設定からエンジンを構築する。
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            emotion: EmotionAnalyzer::new(),
            scent: ScentMapper::new(),
            visual: ConceptGenerator::new(),
        }
    }

    /// テキストの感情コンテンツを分析する。
    #[must_use]
    pub fn analyze_emotion(&self, text: &str, detailed: bool) -> EmotionResult {
        self.emotion.analyze(text, detailed)
    }

    /// 香りプロファイルを生成する。
    ///
    /// `intensity` / `emotion` を省略すると設定の既定値／バイアスなしになる。
    #[must_use]
    pub fn generate_scent_profile(
        &self,
        text: &str,
        intensity: Option<f64>,
        emotion: Option<&str>,
    ) -> ScentProfile {
        let intensity = intensity.unwrap_or_else(|| self.config.default_intensity());
        self.scent.generate_profile(text, intensity, emotion)
    }

    /// 視覚コンセプトを生成する。
    ///
    /// `style` / `max_concepts` を省略すると設定の既定値になる。
    #[must_use]
    pub fn generate_visual_concepts(
        &self,
        text: &str,
        style: Option<&str>,
        max_concepts: Option<usize>,
    ) -> VisualConcept {
        let style = style.unwrap_or_else(|| self.config.default_style());
        let max_concepts = max_concepts.unwrap_or_else(|| self.config.max_concepts().get());
        self.visual.generate_concepts(text, style, max_concepts)
    }

    /// 全モダリティのスナップショットを生成する。
    ///
    /// 感情分析の結果をそのまま香りマッパーのバイアスとハプティクスキューに
    /// 連鎖させる。アナライザ同士は互いを呼ばず、連鎖はここで行う。
    #[must_use]
    pub fn render_snapshot(&self, text: &str) -> SenseSnapshot {
        let emotion = self.emotion.analyze(text, false);
        let haptic = HapticCue {
            emotion: HapticEmotion::from_emotion(&emotion.primary_emotion),
            intensity: emotion.intensity,
        };
        let scent = self.scent.generate_profile(
            text,
            self.config.default_intensity(),
            Some(&emotion.primary_emotion),
        );
        let visual = self.visual.generate_concepts(
            text,
            self.config.default_style(),
            self.config.max_concepts().get(),
        );

        info!(
            primary_emotion = %emotion.primary_emotion,
            primary_scent = %scent.primary_scent.family,
            mood = %visual.mood,
            "sense snapshot rendered"
        );

        SenseSnapshot {
            emotion,
            haptic,
            scent,
            visual,
        }
    }

    /// 感情アナライザへの参照。
    #[must_use]
    pub fn emotion(&self) -> &EmotionAnalyzer {
        &self.emotion
    }

    /// 香りマッパーへの参照。
    #[must_use]
    pub fn scent(&self) -> &ScentMapper {
        &self.scent
    }

    /// 視覚コンセプトジェネレータへの参照。
    #[must_use]
    pub fn visual(&self) -> &ConceptGenerator {
        &self.visual
    }

    /// エンジン設定への参照。
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
