// Criterion benchmarks for Matri Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matri_algo::core::{compare, evaluate, normalize_preferences, RawPreferences};
use matri_algo::models::{ManglikPreference, ManglikStatus, PreferenceRecord, Profile};
use serde_json::json;

fn create_candidate(id: usize) -> Profile {
    Profile {
        matri_id: format!("MAT{:05}", id),
        age_years: Some(22 + (id % 15) as u8),
        height_cm: Some(150 + (id % 40) as u16),
        religion: Some("Hindu".to_string()),
        caste: Some(if id % 2 == 0 { "Brahmin" } else { "Khatri" }.to_string()),
        mother_tongues: vec!["Odia".to_string(), "Hindi".to_string()],
        education: Some("B.Tech".to_string()),
        occupation: Some("Software Engineer".to_string()),
        annual_income: Some(400_000 + (id as i64 % 10) * 50_000),
        country: Some("India".to_string()),
        manglik: if id % 3 == 0 {
            ManglikStatus::Yes
        } else {
            ManglikStatus::No
        },
        diet: Some("Vegetarian".to_string()),
        drinking: Some("Never".to_string()),
        smoking: Some("Never".to_string()),
    }
}

fn create_preferences() -> PreferenceRecord {
    PreferenceRecord {
        min_age: Some(24),
        max_age: Some(32),
        min_height_cm: Some(155),
        max_height_cm: Some(175),
        religions: vec!["Hindu".to_string()],
        castes: vec!["Brahmin".to_string()],
        mother_tongues: vec!["Hindi".to_string(), "Telugu".to_string()],
        min_income: Some(500_000),
        manglik: ManglikPreference::RequireNo,
        diets: vec!["Vegetarian".to_string()],
        ..Default::default()
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let prefs = create_preferences();
    let profile = create_candidate(1);

    c.bench_function("evaluate_full_checklist", |b| {
        b.iter(|| evaluate(black_box(&profile), black_box(&prefs)));
    });
}

fn bench_bidirectional_compare(c: &mut Criterion) {
    let viewer = create_candidate(1);
    let target = create_candidate(2);
    let viewer_prefs = create_preferences();
    let target_prefs = create_preferences();

    c.bench_function("compare_bidirectional", |b| {
        b.iter(|| {
            compare(
                black_box(&viewer),
                black_box(Some(&viewer_prefs)),
                black_box(&target),
                black_box(Some(&target_prefs)),
            )
        });
    });
}

fn bench_normalize_preferences(c: &mut Criterion) {
    let payload = json!({
        "minAge": 24,
        "maxAge": "30",
        "religions": ["Hindu", "Jain"],
        "castes": "Brahmin",
        "motherTongues": ["Odia", "", "Hindi"],
        "minIncome": "500000",
        "manglik": false,
        "diets": ["Vegetarian"]
    });
    let raw: RawPreferences = serde_json::from_value(payload).unwrap();

    c.bench_function("normalize_preferences", |b| {
        b.iter(|| normalize_preferences(black_box(&raw)));
    });
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let prefs = create_preferences();

    let mut group = c.benchmark_group("evaluate_batch");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("evaluate", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    candidates
                        .iter()
                        .map(|p| evaluate(black_box(p), black_box(&prefs)).score)
                        .sum::<u32>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_bidirectional_compare,
    bench_normalize_preferences,
    bench_evaluate_batch
);

criterion_main!(benches);
