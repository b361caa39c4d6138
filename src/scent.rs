//! 香りマッパー: 物語テキストから香りプロファイルとブレンドレシピを生成する。
//!
//! 単一パスのパイプライン: ファミリー検出 → 感情バイアス → プライマリ選択
//! → アンビエント選択 → ハードウェア向けブレンドレシピ。
use serde::Serialize;
use tracing::debug;

use crate::lexicon::MatcherSet;
use crate::lexicon::scent::{
    DEFAULT_FAMILY, EMOTION_SCENTS, SCENT_FAMILIES, ScentFamily, ScentRecipe, family_index,
    preferred_families,
};
use crate::scoring::{round1, round2};

/// ブレンド完了までの時間（ms）。ハードウェア仕様の固定値。
const BLEND_TIME_MS: u64 = 500;

/// 検出済みファミリーがプライマリ選択で受ける強度係数。
const PRIMARY_FACTOR: f64 = 1.5;

/// アンビエント香の強度係数（プライマリより控えめ）。
const AMBIENT_FACTOR: f64 = 0.5;

/// アンビエント香の最大数。
const MAX_AMBIENT: usize = 3;

/// 感情バイアス: 既に検出されたファミリーへの加点。
const BIAS_BOOST: usize = 2;

/// 感情バイアス: 未検出ファミリーのシード値。
const BIAS_SEED: usize = 1;

/// 選択された1つの香り。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScentSelection {
    pub name: String,
    pub family: String,
    /// [0, 1]、小数第2位丸め。
    pub intensity: f64,
    pub notes: Vec<String>,
}

/// ブレンドレシピの1チャネル。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendChannel {
    pub family: String,
    /// [0, 100]、小数第1位丸め。全チャネルで合計100（丸め誤差を除く）。
    pub percentage: f64,
    /// [0, 1]、小数第2位丸め。
    pub intensity: f64,
    /// ハードウェアチャネルID。未対応ファミリーは0。
    pub channel_id: u8,
}

/// ハードウェア向けブレンドレシピ。
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct BlendRecipe {
    /// percentage降順。ファミリー未検出時は空。
    pub channels: Vec<BlendChannel>,
    pub total_intensity: f64,
    /// ファミリー未検出時は省略される。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_time_ms: Option<u64>,
}

/// 香りプロファイル全体。`generate_profile` 呼び出しごとに新規構築される。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScentProfile {
    pub primary_scent: ScentSelection,
    /// 最大3件、スコア降順。
    pub ambient_scents: Vec<ScentSelection>,
    pub blend_recipe: BlendRecipe,
    /// 検出順（宣言順、バイアスでシードされたものは末尾）。
    pub detected_families: Vec<String>,
    /// 呼び出し側が与えたベース強度。
    pub overall_intensity: f64,
}

/// ファミリー情報の静的ルックアップ結果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyInfo {
    pub name: String,
    pub keywords: Vec<String>,
    pub available_scents: Vec<String>,
    pub base_intensity: f64,
}

/// 物語テキストを香りプロファイルへ写像する。
#[derive(Debug)]
pub struct ScentMapper {
    families: MatcherSet,
}

impl Default for ScentMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScentMapper {
    /// 固定ファミリー表からマッパーを構築する。
    #[must_use]
    pub fn new() -> Self {
        Self {
            families: MatcherSet::compile(
                SCENT_FAMILIES.iter().map(|f| (f.name, f.keywords)),
            ),
        }
    }

    /// 香りプロファイルを生成する。
    ///
    /// `intensity` は [0, 1] にクランプされる（非有限値はデフォルト0.5）。
    /// `emotion` が既知のラベルなら対応ファミリーのスコアをブーストする。
    /// 未知のラベルは無視される。空テキストはゼロ強度の空結果に縮退する。
    #[must_use]
    pub fn generate_profile(
        &self,
        text: &str,
        intensity: f64,
        emotion: Option<&str>,
    ) -> ScentProfile {
        let intensity = sanitize_intensity(intensity);
        if text.trim().is_empty() {
            return Self::empty_profile();
        }

        let mut families = self.detect_families(text);
        if let Some(label) = emotion {
            apply_emotion_bias(&mut families, label);
        }

        debug!(
            detected = families.len(),
            biased = emotion.is_some(),
            "scent families detected"
        );

        ScentProfile {
            primary_scent: primary_scent(&families, intensity),
            ambient_scents: ambient_scents(&families, intensity),
            blend_recipe: blend_recipe(&families, intensity),
            detected_families: families
                .iter()
                .map(|(idx, _)| SCENT_FAMILIES[*idx].name.to_string())
                .collect(),
            overall_intensity: round2(intensity),
        }
    }

    /// ファミリーごとのキーワードマッチ数を数える。検出ゼロのファミリーは含めない。
    ///
    /// 順序はファミリー表の宣言順であり、同点タイブレークの基準になる。
    fn detect_families(&self, text: &str) -> Vec<(usize, usize)> {
        self.families
            .counts(text)
            .into_iter()
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(idx, (_, count))| (idx, count))
            .collect()
    }

    /// 空入力用のプロファイル。
    fn empty_profile() -> ScentProfile {
        let fresh = family_index(DEFAULT_FAMILY).unwrap_or(0);
        ScentProfile {
            primary_scent: ScentSelection {
                name: "Neutral".to_string(),
                family: SCENT_FAMILIES[fresh].name.to_string(),
                intensity: 0.0,
                notes: Vec::new(),
            },
            ambient_scents: Vec::new(),
            blend_recipe: BlendRecipe::default(),
            detected_families: Vec::new(),
            overall_intensity: 0.0,
        }
    }

    /// ファミリー情報を返す。未知のファミリーは `None`。
    #[must_use]
    pub fn family_info(&self, family: &str) -> Option<FamilyInfo> {
        let entry = SCENT_FAMILIES.iter().find(|f| f.name == family)?;
        Some(FamilyInfo {
            name: entry.name.to_string(),
            keywords: entry.keywords.iter().map(String::from).collect(),
            available_scents: entry.scents.iter().map(|s| s.name.to_string()).collect(),
            base_intensity: entry.base_intensity,
        })
    }

    /// 全ファミリー名を宣言順で返す。
    #[must_use]
    pub fn list_families(&self) -> Vec<&'static str> {
        SCENT_FAMILIES.iter().map(|f| f.name).collect()
    }

    /// 感情に対する推奨ファミリーを返す。未知の感情はデフォルトのfreshのみ。
    #[must_use]
    pub fn emotion_suggestions(&self, emotion: &str) -> Vec<&'static str> {
        match preferred_families(&emotion.to_lowercase()) {
            Some(families) => families.to_vec(),
            None => vec![DEFAULT_FAMILY],
        }
    }

    /// バイアス表に載っている感情ラベルを宣言順で返す。
    #[must_use]
    pub fn known_emotions(&self) -> Vec<&'static str> {
        EMOTION_SCENTS.iter().map(|(name, _)| *name).collect()
    }
}

/// 呼び出し強度を [0, 1] に収める。非有限値はデフォルト0.5。
fn sanitize_intensity(intensity: f64) -> f64 {
    if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// 感情バイアスを適用する。
///
/// 優先ファミリーが検出済みなら+2、未検出ならスコア1でシードする。
/// 未知の感情ラベルは無操作。
fn apply_emotion_bias(families: &mut Vec<(usize, usize)>, emotion: &str) {
    let Some(preferred) = preferred_families(&emotion.to_lowercase()) else {
        return;
    };

    for name in preferred {
        let Some(idx) = family_index(name) else {
            continue;
        };
        if let Some(entry) = families.iter_mut().find(|(i, _)| *i == idx) {
            entry.1 += BIAS_BOOST;
        } else {
            families.push((idx, BIAS_SEED));
        }
    }
}

/// 最高スコアのファミリー（同点は検出順で先のもの）。
fn top_family(families: &[(usize, usize)]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, count) in families {
        if best.is_none_or(|(_, top)| *count > top) {
            best = Some((*idx, *count));
        }
    }
    best.map(|(idx, _)| idx)
}

/// プライマリ香: 最高スコアのファミリーの先頭レシピ。
fn primary_scent(families: &[(usize, usize)], intensity: f64) -> ScentSelection {
    let family_idx = top_family(families)
        .or_else(|| family_index(DEFAULT_FAMILY))
        .unwrap_or(0);
    let family = &SCENT_FAMILIES[family_idx];
    selection(family, &family.scents[0], PRIMARY_FACTOR, intensity)
}

/// アンビエント香: スコア降順で2位以下から最大3件。
///
/// プライマリとの重複を避けるため、各ファミリーの最後のレシピを使う。
fn ambient_scents(families: &[(usize, usize)], intensity: f64) -> Vec<ScentSelection> {
    let mut ranked = families.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .iter()
        .skip(1)
        .take(MAX_AMBIENT)
        .map(|(idx, _)| {
            let family = &SCENT_FAMILIES[*idx];
            let last = &family.scents[family.scents.len() - 1];
            selection(family, last, AMBIENT_FACTOR, intensity)
        })
        .collect()
}

fn selection(
    family: &ScentFamily,
    recipe: &ScentRecipe,
    factor: f64,
    intensity: f64,
) -> ScentSelection {
    ScentSelection {
        name: recipe.name.to_string(),
        family: family.name.to_string(),
        intensity: round2((family.base_intensity * intensity * factor).min(1.0)),
        notes: recipe.notes.iter().copied().map(String::from).collect(),
    }
}

/// ブレンドレシピ: 検出ファミリーのスコア比をチャネル割合に変換する。
#[allow(clippy::cast_precision_loss)]
fn blend_recipe(families: &[(usize, usize)], intensity: f64) -> BlendRecipe {
    if families.is_empty() {
        return BlendRecipe::default();
    }

    let total: usize = families.iter().map(|(_, count)| count).sum();
    let mut channels: Vec<BlendChannel> = families
        .iter()
        .map(|(idx, count)| {
            let family = &SCENT_FAMILIES[*idx];
            let share = *count as f64 / total as f64;
            BlendChannel {
                family: family.name.to_string(),
                percentage: round1(share * 100.0),
                intensity: round2((intensity * share * 2.0).min(1.0)),
                channel_id: family.channel,
            }
        })
        .collect();

    channels.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    BlendRecipe {
        channels,
        total_intensity: round2(intensity),
        blend_time_ms: Some(BLEND_TIME_MS),
    }
}
