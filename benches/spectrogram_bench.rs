//! Performance benchmarks for spectrogram extraction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wav_spectro::{spectrograms_from_waveform, SpectrogramConfig, Waveform};

fn bench_spectrograms(c: &mut Criterion) {
    // Generate synthetic audio (10 seconds at 16kHz)
    let samples: Vec<f32> = (0..16_000 * 10)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 16_000.0).sin() * 0.5)
        .collect();
    let waveform = Waveform::new(samples, 16_000);

    let sequential = SpectrogramConfig::default();
    let parallel = SpectrogramConfig {
        parallel: true,
        ..Default::default()
    };

    c.bench_function("spectrograms_10s", |b| {
        b.iter(|| {
            let _ = spectrograms_from_waveform(black_box(&waveform), black_box(&sequential));
        });
    });

    c.bench_function("spectrograms_10s_parallel", |b| {
        b.iter(|| {
            let _ = spectrograms_from_waveform(black_box(&waveform), black_box(&parallel));
        });
    });
}

criterion_group!(benches, bench_spectrograms);
criterion_main!(benches);
