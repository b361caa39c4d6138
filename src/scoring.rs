//! 共有シグナルスコアラ: 生カウントの正規化と順序保持スコアマップ。
//!
//! 3つのアナライザはすべてここの正規化規則を共有します:
//! 合計マッチ数が正なら各カテゴリは `count / total`（小数第3位丸め）、
//! そうでなければ全カテゴリ0。カテゴリ同士は共有確率質量を奪い合うため、
//! 多数の感情が混在するテキストでは個々の見かけの強度は薄まります。
//! この挙動は下流互換のため正確に保存されます。
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 小数第1位への丸め。
#[must_use]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 小数第2位への丸め。
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 小数第3位への丸め。
#[must_use]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// カテゴリ名→正規化スコアの順序付きマップ。
///
/// 宣言順のままJSONマップとして直列化され、argmaxの同点は先頭優先です。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryScores(Vec<(String, f64)>);

impl CategoryScores {
    /// カテゴリのスコアを返す。未知のカテゴリは0.0。
    #[must_use]
    pub fn get(&self, category: &str) -> f64 {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0.0, |(_, score)| *score)
    }

    /// 宣言順のイテレータ。
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// 全スコアの合計。
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, score)| score).sum()
    }

    /// 全カテゴリがゼロかどうか。
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|(_, score)| *score == 0.0)
    }

    /// 最大スコアのカテゴリ。同点は宣言順で先のものが勝つ。
    #[must_use]
    pub fn argmax(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, score) in &self.0 {
            if best.is_none_or(|(_, top)| *score > top) {
                best = Some((name.as_str(), *score));
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a CategoryScores {
    type Item = (&'a str, f64);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, f64)>,
        fn(&'a (String, f64)) -> (&'a str, f64),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

/// カテゴリ名→生カウントの順序付きマップ（詳細分析用）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    /// カテゴリの生カウントを返す。未知のカテゴリは0。
    #[must_use]
    pub fn get(&self, category: &str) -> usize {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0, |(_, count)| *count)
    }

    /// 宣言順のイテレータ。
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<'a> IntoIterator for &'a CategoryCounts {
    type Item = (&'a str, usize);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, usize)>,
        fn(&'a (String, usize)) -> (&'a str, usize),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'a> From<&'a [(&'a str, usize)]> for CategoryCounts {
    fn from(counts: &'a [(&'a str, usize)]) -> Self {
        Self(
            counts
                .iter()
                .map(|(name, count)| ((*name).to_string(), *count))
                .collect(),
        )
    }
}

/// 生カウントを正規化スコアへ変換する。
///
/// 合計が0なら全カテゴリ0.0（空入力・無検出のケース）。
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn normalize(counts: &[(&str, usize)]) -> CategoryScores {
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    let scores = counts
        .iter()
        .map(|(name, count)| {
            let score = if total > 0 {
                round3(*count as f64 / total as f64)
            } else {
                0.0
            };
            ((*name).to_string(), score)
        })
        .collect();
    CategoryScores(scores)
}
