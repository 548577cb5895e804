use box_canvas::{
    CanvasContext, CanvasEvent, DrawCommand, ImageSource, RecordingSurface, StrokeStyle, Surface,
};
use egui::{pos2, vec2, Color32, ColorImage};
use std::sync::Arc;

fn bytes_source() -> ImageSource {
    ImageSource::Bytes {
        name: "test-background".into(),
        bytes: Arc::from(Vec::new()),
    }
}

fn drag(canvas: &mut CanvasContext, surface: &mut RecordingSurface, from: (f32, f32), to: (f32, f32)) {
    canvas.handle_event(CanvasEvent::PointerDown { pos: pos2(from.0, from.1) }, surface);
    canvas.handle_event(CanvasEvent::PointerMove { pos: pos2(to.0, to.1) }, surface);
    canvas.handle_event(CanvasEvent::PointerUp { pos: pos2(to.0, to.1) }, surface);
}

#[test]
fn test_redraw_is_deterministic() {
    let mut canvas = CanvasContext::default();
    let mut surface = RecordingSurface::new(vec2(200.0, 200.0));
    drag(&mut canvas, &mut surface, (10.0, 10.0), (50.0, 40.0));
    drag(&mut canvas, &mut surface, (80.0, 80.0), (60.0, 20.0));

    canvas.redraw(&mut surface);
    let first = surface.commands().to_vec();
    canvas.redraw(&mut surface);

    assert_eq!(surface.commands(), first.as_slice());
}

#[test]
fn test_committed_boxes_keep_their_own_colors() {
    let mut canvas = CanvasContext::default();
    let mut surface = RecordingSurface::new(vec2(200.0, 200.0)).with_style(StrokeStyle {
        line_width: 3.0,
        ..StrokeStyle::default()
    });
    drag(&mut canvas, &mut surface, (0.0, 0.0), (10.0, 10.0));
    drag(&mut canvas, &mut surface, (20.0, 20.0), (30.0, 30.0));
    drag(&mut canvas, &mut surface, (40.0, 40.0), (50.0, 50.0));

    let colors: Vec<Color32> = surface.stroked_rects().iter().map(|(_, style)| style.color).collect();
    assert_eq!(colors, vec![Color32::RED, Color32::YELLOW, Color32::GREEN]);
    assert!(surface.stroked_rects().iter().all(|(_, style)| style.line_width == 3.0));
}

#[test]
fn test_background_painted_first_once_loaded() {
    let mut canvas = CanvasContext::default();
    let mut surface = RecordingSurface::new(vec2(120.0, 90.0));
    let id = canvas.push_background(bytes_source());

    drag(&mut canvas, &mut surface, (10.0, 10.0), (20.0, 20.0));
    assert!(!surface
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, DrawCommand::Image { .. })));

    let repaints = surface.repaint_count();
    let pixels = Arc::new(ColorImage::new([4, 3], Color32::WHITE));
    canvas.handle_event(CanvasEvent::ImageLoaded { id, pixels }, &mut surface);

    assert_eq!(surface.repaint_count(), repaints + 1);
    assert_eq!(
        surface.commands()[1],
        DrawCommand::Image { id, dest: surface.bounds() }
    );
    assert!(matches!(surface.commands()[2], DrawCommand::StrokeRect { .. }));
}

#[test]
fn test_image_load_during_drag_keeps_provisional_visible() {
    let mut canvas = CanvasContext::default();
    let mut surface = RecordingSurface::new(vec2(120.0, 90.0));
    let id = canvas.push_background(bytes_source());

    canvas.handle_event(CanvasEvent::PointerDown { pos: pos2(5.0, 5.0) }, &mut surface);
    canvas.handle_event(CanvasEvent::PointerMove { pos: pos2(25.0, 15.0) }, &mut surface);
    let pixels = Arc::new(ColorImage::new([1, 1], Color32::WHITE));
    canvas.handle_event(CanvasEvent::ImageLoaded { id, pixels }, &mut surface);

    assert!(canvas.state().is_dragging());
    let outlines = surface.stroked_rects();
    assert_eq!(outlines.len(), 1);
    assert_eq!(outlines[0].0, egui::Rect::from_min_max(pos2(5.0, 5.0), pos2(25.0, 15.0)));

    canvas.handle_event(CanvasEvent::PointerUp { pos: pos2(25.0, 15.0) }, &mut surface);
    assert_eq!(canvas.document().items().len(), 2);
}
