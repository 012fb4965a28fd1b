use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quietcast::{apply_profile, generate_profile, ProfileParams, SpectrumAnalyzer};
use std::f64::consts::PI;

fn noise_sample(sample_rate: u32) -> Vec<f64> {
    let fs = sample_rate as f64;
    (0..sample_rate as usize)
        .map(|i| {
            let t = i as f64 / fs;
            0.5 * (2.0 * PI * 1000.0 * t).sin()
                + 0.3 * (2.0 * PI * 5000.0 * t).sin()
                + 0.2 * (2.0 * PI * 12_000.0 * t).sin()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let fs = 48_000;
    let samples = noise_sample(fs);

    c.bench_function("analyze_1s", |b| {
        let mut analyzer = SpectrumAnalyzer::new();
        b.iter(|| analyzer.analyze(black_box(&samples), fs).unwrap());
    });

    let spectrum = SpectrumAnalyzer::new().analyze(&samples, fs).unwrap();
    c.bench_function("generate_profile", |b| {
        b.iter(|| generate_profile(black_box(&spectrum), fs, &ProfileParams::default()).unwrap());
    });

    let profile = generate_profile(&spectrum, fs, &ProfileParams::default()).unwrap();
    c.bench_function("apply_profile_1s", |b| {
        b.iter(|| apply_profile(black_box(&samples), fs, &profile).unwrap());
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
