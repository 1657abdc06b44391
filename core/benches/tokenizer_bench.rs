use criterion::{criterion_group, criterion_main, Criterion};
use loupe_core::Tokenizer;

fn bench_tokenize(c: &mut Criterion) {
    let text =
        "<p>The glClear function clears buffers to preset values, taking 1 bitfield of \
         GL_COLOR_BUFFER_BIT, GL_DEPTH_BUFFER_BIT and GL_STENCIL_BUFFER_BIT!</p>\n"
            .repeat(500);
    c.bench_function("tokenize_markup", |b| b.iter(|| Tokenizer::new(&text).count()));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
