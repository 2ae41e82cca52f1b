use egui::{Color32, pos2, vec2};
use sticker_sketch::drawable::{DrawableType, Stamp, Stroke};
use sticker_sketch::export::{self, MAX_EXPORT_DIMENSION};
use sticker_sketch::style::Style;
use sticker_sketch::{ExportError, GlyphFonts, RasterSurface, Sketch, SketchConfig, SketchError};

fn line(from: (f32, f32), to: (f32, f32), color: Color32) -> DrawableType {
    let mut stroke = Stroke::new(pos2(from.0, from.1), Style::new(color, 3.0));
    stroke.extend(pos2(to.0, to.1));
    stroke.into()
}

fn sketch_with_stroke() -> Sketch {
    let mut sketch = Sketch::with_fonts(SketchConfig::default(), GlyphFonts::empty());
    sketch.pointer_down(pos2(10.0, 10.0));
    sketch.pointer_move(pos2(60.0, 10.0));
    sketch.pointer_up(pos2(60.0, 10.0));
    sketch
}

#[test]
fn test_later_drawable_wins_at_overlap() {
    let drawables = vec![
        line((0.0, 16.0), (32.0, 16.0), Color32::RED),
        line((16.0, 0.0), (16.0, 32.0), Color32::BLUE),
    ];
    let surface =
        export::render_export(&drawables, vec2(32.0, 32.0), 1.0, Color32::WHITE, &GlyphFonts::empty())
            .unwrap();

    assert_eq!(surface.pixel_at(pos2(16.0, 16.0)), Some(Color32::BLUE));
    assert_eq!(surface.pixel_at(pos2(4.0, 16.0)), Some(Color32::RED));
    assert_eq!(surface.pixel_at(pos2(4.0, 4.0)), Some(Color32::WHITE));
}

#[test]
fn test_preview_never_exported() {
    let mut sketch = sketch_with_stroke();
    let without_preview = sketch.export(2.0).unwrap();

    sketch.set_stroke_width(20.0).unwrap();
    sketch.pointer_enter(pos2(100.0, 100.0));
    assert!(sketch.preview().is_some());
    let with_preview = sketch.export(2.0).unwrap();

    assert_eq!(without_preview, with_preview);
}

#[test]
fn test_screen_repaint_shows_preview_on_top() {
    let mut sketch = sketch_with_stroke();
    sketch.set_color(Color32::RED);
    sketch.set_stroke_width(10.0).unwrap();
    sketch.pointer_enter(pos2(30.0, 10.0));

    let mut screen = RasterSurface::new(sketch.canvas_size(), 1.0, GlyphFonts::empty());
    sketch.repaint(&mut screen);
    assert_eq!(screen.pixel_at(pos2(30.0, 10.0)), Some(Color32::RED));
    assert_eq!(screen.pixel_at(pos2(55.0, 10.0)), Some(Color32::BLACK));

    let exported = export::render_export(
        sketch.history().snapshot(),
        sketch.canvas_size(),
        1.0,
        Color32::WHITE,
        &GlyphFonts::empty(),
    )
    .unwrap();
    assert_eq!(exported.pixel_at(pos2(30.0, 10.0)), Some(Color32::BLACK));
}

#[test]
fn test_export_is_upscaled_and_leaves_history_alone() {
    let sketch = sketch_with_stroke();
    let before = sketch.snapshot();

    let bytes = sketch.export(sketch.config().export_scale).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(decoded.dimensions(), (1024, 1024));
    // (35, 10) on the canvas lands on (140, 40) at 4x.
    assert_eq!(decoded.get_pixel(141, 41).0, [0, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(500, 500).0, [255, 255, 255, 255]);
    assert_eq!(sketch.snapshot(), before);
}

#[test]
fn test_export_is_deterministic() {
    let sketch = sketch_with_stroke();
    assert_eq!(sketch.export(3.0).unwrap(), sketch.export(3.0).unwrap());
}

#[test]
fn test_export_failure_is_reported() {
    let sketch = sketch_with_stroke();
    let too_big = (MAX_EXPORT_DIMENSION / 256 + 1) as f32;

    let err = sketch.export(too_big).unwrap_err();
    assert!(matches!(
        err,
        SketchError::Export(ExportError::SurfaceTooLarge { .. })
    ));
    assert_eq!(sketch.history().len(), 1);
}

#[test]
fn test_stamp_renders_glyph_near_anchor() {
    let drawables = vec![DrawableType::from(Stamp::new(
        pos2(32.0, 32.0),
        Style::new(Color32::BLACK, 5.0),
        "#",
    ))];
    let surface =
        export::render_export(&drawables, vec2(64.0, 64.0), 1.0, Color32::WHITE, &GlyphFonts::bundled())
            .unwrap();

    let image = surface.image();
    let dark: Vec<(u32, u32)> = image
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] < 128)
        .map(|(x, y, _)| (x, y))
        .collect();
    assert!(!dark.is_empty());
    // Every inked pixel sits within the 32px glyph box around the anchor.
    assert!(dark.iter().all(|(x, y)| x.abs_diff(32) <= 20 && y.abs_diff(32) <= 20));
}

fn zig_zag_sketch(strokes: usize, samples: usize) -> Sketch {
    let mut sketch = Sketch::with_fonts(SketchConfig::default(), GlyphFonts::empty());
    sketch.set_stroke_width(5.0).unwrap();
    for stroke in 0..strokes {
        let offset = stroke as f32 * 3.0;
        sketch.pointer_down(pos2(offset, 0.0));
        for i in 1..samples {
            let x = if i % 2 == 0 { offset } else { 255.0 - offset };
            sketch.pointer_move(pos2(x, i as f32 * 255.0 / samples as f32));
        }
        sketch.pointer_up(pos2(offset, 255.0));
    }
    sketch
}

#[test]
fn test_repaint_of_long_strokes_stays_fast() {
    let sketch = zig_zag_sketch(10, 300);
    let mut screen = RasterSurface::new(sketch.canvas_size(), 1.0, GlyphFonts::empty());

    let started = std::time::Instant::now();
    sketch.repaint(&mut screen);
    let elapsed = started.elapsed();

    assert!(elapsed < std::time::Duration::from_millis(500), "repaint took {elapsed:?}");
    assert_eq!(screen.pixel_at(pos2(128.0, 0.5)), Some(Color32::BLACK));
    assert_eq!(screen.pixel_at(pos2(255.0, 0.9)), Some(Color32::BLACK));
}

#[test]
fn test_upscaled_export_of_long_strokes_stays_fast() {
    let sketch = zig_zag_sketch(10, 300);

    let started = std::time::Instant::now();
    let surface = export::render_export(
        sketch.history().snapshot(),
        sketch.canvas_size(),
        4.0,
        Color32::WHITE,
        &GlyphFonts::empty(),
    )
    .unwrap();
    let elapsed = started.elapsed();

    assert!(elapsed < std::time::Duration::from_secs(5), "export took {elapsed:?}");
    assert_eq!(surface.image().dimensions(), (1024, 1024));
}
