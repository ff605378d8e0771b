//! End-to-end: generate and render through the public APIs only.

use ulam_integration_tests::WalkGenerator;
use ulam_render::{RendererKind, SpiralRenderer};
use ulam_spiral::{generate, SpiralGenerator};

#[test]
fn every_renderer_agrees_across_generators() {
    for kind in [
        RendererKind::Text,
        RendererKind::Html,
        RendererKind::Code,
        RendererKind::Json,
    ] {
        let renderer = kind.renderer();
        for spiral_to in [0, 5, 24, 99] {
            let a = renderer.render_to_string(&generate(spiral_to)).unwrap();
            let b = renderer
                .render_to_string(&WalkGenerator::default().generate(spiral_to))
                .unwrap();
            assert_eq!(a, b, "{} renderer, target {}", kind, spiral_to);
        }
    }
}

#[test]
fn text_rendering_of_classic_example() {
    let text = RendererKind::Text
        .renderer()
        .render_to_string(&generate(24))
        .unwrap();
    assert_eq!(
        text,
        concat!(
            "20 21 22 23 24\n",
            "19  6  7  8  9\n",
            "18  5  0  1 10\n",
            "17  4  3  2 11\n",
            "16 15 14 13 12\n",
        )
    );
}
