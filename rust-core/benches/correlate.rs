use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timelag::spectrum::WindowType;
use timelag::{cross_correlate, dft, stft, Mode};

fn two_tone(n: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * 10.0;
            (2.0 * PI * t).sin() + (2.0 * PI * t * 3.0).sin()
        })
        .collect()
}

fn bench_dft_256(c: &mut Criterion) {
    let signal = two_tone(256);

    c.bench_function("dft_256", |b| {
        b.iter(|| black_box(dft(signal.as_slice())));
    });
}

fn bench_stft_256(c: &mut Criterion) {
    let signal = two_tone(256);

    c.bench_function("stft_256_w64_s16", |b| {
        b.iter(|| black_box(stft(signal.as_slice(), 64, 16, WindowType::Hamming).unwrap()));
    });
}

fn bench_cross_correlate_full(c: &mut Criterion) {
    let signal = two_tone(256);
    let window = signal[64..128].to_vec();
    let times: Vec<f64> = (0..256).map(|i| i as f64 / 25.6).collect();

    c.bench_function("cross_correlate_full_256x64", |b| {
        b.iter(|| {
            black_box(cross_correlate(
                signal.as_slice(),
                window.as_slice(),
                times.as_slice(),
                Mode::Full,
                true,
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_dft_256,
    bench_stft_256,
    bench_cross_correlate_full
);
criterion_main!(benches);
