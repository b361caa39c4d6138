/// 3モダリティの抽出性能ベンチマーク。
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sense_engine::{ConceptGenerator, EmotionAnalyzer, Engine, ScentMapper};

fn synthetic_narrative(paragraphs: usize) -> String {
    let base = "The happy traveler walked through the pine forest at dawn. \
                Smoke from a distant campfire drifted over the lavender fields, \
                and the castle gates opened with a dramatic, thunderous roar. \
                She was amazed, almost terrified, but kept running toward the ocean. ";
    base.repeat(paragraphs)
}

fn bench_emotion_analysis(c: &mut Criterion) {
    let analyzer = EmotionAnalyzer::new();
    let text = synthetic_narrative(64);

    c.bench_function("emotion_analysis_64_paragraphs", |b| {
        b.iter(|| {
            let result = analyzer.analyze(black_box(&text), false);
            black_box(result.confidence);
        });
    });
}

fn bench_scent_profile(c: &mut Criterion) {
    let mapper = ScentMapper::new();
    let text = synthetic_narrative(64);

    c.bench_function("scent_profile_64_paragraphs", |b| {
        b.iter(|| {
            let profile = mapper.generate_profile(black_box(&text), 0.7, Some("joy"));
            black_box(profile.blend_recipe.channels.len());
        });
    });
}

fn bench_visual_concepts(c: &mut Criterion) {
    let generator = ConceptGenerator::new();
    let text = synthetic_narrative(64);

    c.bench_function("visual_concepts_64_paragraphs", |b| {
        b.iter(|| {
            let concept = generator.generate_concepts(black_box(&text), "realistic", 5);
            black_box(concept.concepts.len());
        });
    });
}

fn bench_full_snapshot(c: &mut Criterion) {
    let engine = Engine::default();
    let text = synthetic_narrative(16);

    c.bench_function("sense_snapshot_16_paragraphs", |b| {
        b.iter(|| {
            let snapshot = engine.render_snapshot(black_box(&text));
            black_box(snapshot.haptic.intensity);
        });
    });
}

criterion_group!(
    benches,
    bench_emotion_analysis,
    bench_scent_profile,
    bench_visual_concepts,
    bench_full_snapshot
);
criterion_main!(benches);
