use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_carousel_core::{
    Carousel, CarouselCommand, CarouselConfig, Inputs, RecordingSurface, SlideExtent,
};

fn bench_navigation(c: &mut Criterion) {
    let mut carousel = Carousel::new(
        24,
        CarouselConfig::default(),
        RecordingSurface::new(SlideExtent::new(320.0, 24.0)),
    )
    .expect("valid config");

    c.bench_function("next_then_settle", |b| {
        b.iter(|| {
            carousel.update(0, Inputs::one(CarouselCommand::Next));
            let out = carousel.update(black_box(500), Inputs::default());
            black_box(out.events.len());
            carousel.surface_mut().ops.clear();
        })
    });
}

criterion_group!(benches, bench_navigation);
criterion_main!(benches);
