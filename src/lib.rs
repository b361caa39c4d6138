#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! sense-engine: 物語テキストから感覚シグナルを抽出するエンジン。
//!
//! 3つのアナライザ（感情・香り・視覚コンセプト）が同一のアーキテクチャを共有します:
//! コンパイル済みキーワードマッチャ、頻度スコアリング、正規化、
//! クロスモーダルなバイアス伝播、構造化された結果の組み立て。
//!
//! アナライザは構築後に不変であり、呼び出し間で状態を持ちません。
//! HTTP層・永続化・認証は外部コラボレータの責務です。

pub mod config;
pub mod emotion;
pub mod engine;
pub(crate) mod lexicon;
pub mod observability;
pub mod scent;
pub mod scoring;
pub mod validate;
pub mod visual;

pub use config::Config;
pub use emotion::EmotionAnalyzer;
pub use engine::{Engine, SenseSnapshot};
pub use scent::ScentMapper;
pub use visual::ConceptGenerator;
