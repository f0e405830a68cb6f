use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qrgen::render::{self, RenderConfig};
use rust_qrgen::{ECLevel, MaskPattern, encode};

fn bench_encode_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let digits = "8675309".repeat(40);
    group.bench_function("numeric_280_digits", |b| {
        b.iter(|| encode(black_box(&digits), ECLevel::M, MaskPattern::Pattern2).unwrap())
    });

    group.bench_function("alphanumeric_scenario", |b| {
        b.iter(|| {
            encode(
                black_box("HELLO WORLD 123 123 123 123 HI"),
                ECLevel::L,
                MaskPattern::Pattern0,
            )
            .unwrap()
        })
    });

    let url = "https://example.com/some/deep/path?query=value&page=2";
    group.bench_function("byte_url", |b| {
        b.iter(|| encode(black_box(url), ECLevel::Q, MaskPattern::Pattern5).unwrap())
    });

    let large = "LARGE SYMBOL PAYLOAD ".repeat(60);
    group.bench_function("alphanumeric_large_version", |b| {
        b.iter(|| encode(black_box(&large), ECLevel::H, MaskPattern::Pattern7).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let qr = encode(
        "https://example.com/render/bench",
        ECLevel::M,
        MaskPattern::Pattern3,
    )
    .unwrap();
    let config = RenderConfig::new(8, 4).unwrap();

    c.bench_function("render_rgba_8px", |b| {
        b.iter(|| render::to_image(black_box(&qr), &config))
    });
    c.bench_function("render_svg", |b| {
        b.iter(|| render::to_svg_string(black_box(&qr), 4))
    });
}

criterion_group!(benches, bench_encode_modes, bench_render);
criterion_main!(benches);
