//! Benchmarks for escaping and rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use plot::{Attribute, Encoding, MemorySource, Node, Renderer, escape};

const PLAIN_TEXT: &str = "The quick brown fox jumps over the lazy dog. ";
const MIXED_TEXT: &str = "Fish &amp; chips & <peas> &#160;&text; ";

/// Build a page with `rows` table rows of escaped text and attributes.
fn sample_page(rows: usize) -> Node {
    Node::group([
        Node::doctype("html"),
        Node::element(
            "html",
            [Attribute::new("lang", "en")],
            [Node::element(
                "body",
                [],
                [
                    Node::raw_file("header.html", Encoding::Utf8),
                    Node::element(
                        "table",
                        [Attribute::new("class", "data")],
                        [Node::for_each(0..rows, |i| {
                            Node::element(
                                "tr",
                                [Attribute::new("id", format!("row-{i}"))],
                                [
                                    Node::element("td", [], [Node::text(MIXED_TEXT)]),
                                    Node::element("td", [], [Node::text(PLAIN_TEXT)]),
                                    Node::self_closed_element(
                                        "img",
                                        [Attribute::new("alt", "\"quoted\" & <b>")],
                                    ),
                                ],
                            )
                        })],
                    ),
                ],
            )],
        ),
    ])
}

// ============================================================================
// Escaping Benchmarks
// ============================================================================

fn bench_escape_plain(c: &mut Criterion) {
    let text = PLAIN_TEXT.repeat(1000);
    c.bench_function("escape_plain", |b| {
        b.iter(|| escape(black_box(&text)).len());
    });
}

fn bench_escape_mixed(c: &mut Criterion) {
    let text = MIXED_TEXT.repeat(1000);
    c.bench_function("escape_mixed", |b| {
        b.iter(|| escape(black_box(&text)).len());
    });
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_render_page(c: &mut Criterion) {
    let page = sample_page(500);
    let renderer =
        Renderer::new(MemorySource::new().with_file("header.html", "<header>Site</header>"));

    c.bench_function("render_page", |b| {
        b.iter(|| renderer.render(black_box(&page)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_escape_plain,
    bench_escape_mixed,
    bench_render_page
);
criterion_main!(benches);
