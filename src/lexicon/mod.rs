//! パターンレジストリ: カテゴリ別キーワード表とコンパイル済みマッチャ。
//!
//! 各ドメイン（感情・香り・視覚）の語彙表は静的データとして宣言され、
//! アナライザ構築時に一度だけ Aho-Corasick マッチャへコンパイルされます。
//! 構築後は不変であり、カテゴリの宣言順がすべての argmax タイブレークを決定します。
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use rustc_hash::FxHashSet;

pub(crate) mod emotion;
pub(crate) mod scent;
pub(crate) mod visual;

/// 言語バリアントごとのキーワードリスト。
///
/// コンパイル時にマージされ、1つのマッチャになります。
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalizedKeywords {
    pub(crate) en: &'static [&'static str],
    pub(crate) zh: &'static [&'static str],
}

impl LocalizedKeywords {
    /// 全言語バリアントのキーワードを宣言順に返す。
    pub(crate) fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.en.iter().chain(self.zh.iter()).copied()
    }
}

/// 単語文字の判定。正規表現の `\b` と同じ境界セマンティクス
/// （英数字とアンダースコアが単語文字、CJK文字も英数字扱い）。
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// マッチ範囲が単語全体かどうかを判定する。
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_none_or(|c| !is_word_char(c)) && after.is_none_or(|c| !is_word_char(c))
}

/// 1カテゴリ分のキーワード集合に対するコンパイル済みマッチャ。
///
/// 大文字小文字を区別せず、単語全体の非重複出現のみを数えます。
#[derive(Debug)]
pub(crate) struct CompiledMatcher {
    ac: AhoCorasick,
}

impl CompiledMatcher {
    /// キーワード集合からマッチャを構築する。
    ///
    /// 語彙表は静的データであり、構築失敗はビルド時欠陥として扱う。
    pub(crate) fn compile<'a, I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns: Vec<&str> = keywords.into_iter().collect();
        let ac = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(true)
            .build(&patterns)
            .expect("static keyword table must compile");
        Self { ac }
    }

    /// 単語全体のマッチ数を返す。
    #[must_use]
    pub(crate) fn count(&self, text: &str) -> usize {
        self.ac
            .find_iter(text)
            .filter(|m| is_whole_word(text, m.start(), m.end()))
            .count()
    }

    /// 少なくとも1つ単語全体のマッチが存在するか。
    #[must_use]
    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.ac
            .find_iter(text)
            .any(|m| is_whole_word(text, m.start(), m.end()))
    }

    /// マッチしたキーワードを小文字化し、初出順で重複なく返す。
    #[must_use]
    pub(crate) fn distinct_matches(&self, text: &str) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut found = Vec::new();
        for m in self.ac.find_iter(text) {
            if !is_whole_word(text, m.start(), m.end()) {
                continue;
            }
            let keyword = text[m.start()..m.end()].to_lowercase();
            if seen.insert(keyword.clone()) {
                found.push(keyword);
            }
        }
        found
    }
}

/// カテゴリ名とマッチャの組。
#[derive(Debug)]
pub(crate) struct CategoryMatcher {
    pub(crate) name: &'static str,
    pub(crate) matcher: CompiledMatcher,
}

/// 1ドメイン分のカテゴリ別マッチャ集合。宣言順を保持する。
#[derive(Debug)]
pub(crate) struct MatcherSet {
    categories: Vec<CategoryMatcher>,
}

impl MatcherSet {
    /// カテゴリ表からマッチャ集合をコンパイルする。
    pub(crate) fn compile<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, LocalizedKeywords)>,
    {
        let categories = tables
            .into_iter()
            .map(|(name, keywords)| CategoryMatcher {
                name,
                matcher: CompiledMatcher::compile(keywords.iter()),
            })
            .collect();
        Self { categories }
    }

    /// 全カテゴリのマッチ数を宣言順で返す（ゼロ件も含む）。
    #[must_use]
    pub(crate) fn counts(&self, text: &str) -> Vec<(&'static str, usize)> {
        self.categories
            .iter()
            .map(|c| (c.name, c.matcher.count(text)))
            .collect()
    }

    /// カテゴリマッチャを宣言順で返す。
    #[must_use]
    pub(crate) fn matchers(&self) -> &[CategoryMatcher] {
        &self.categories
    }
}
