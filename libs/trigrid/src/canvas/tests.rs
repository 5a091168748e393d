use super::*;
use crate::triangle::CoordMode;

fn recorder() -> CommandRecorder {
    CommandRecorder::new()
}

#[test]
fn test_trace_triangle_follows_vertex_order() {
    let mesh = TriangleMesh::new(10.0, CoordMode::Pixel);
    let tri = mesh.triangle_at(0, 0);
    let mut canvas = recorder();
    trace_triangle(&mut canvas, &tri);

    let [a, b, c] = tri.vertices();
    assert_eq!(
        canvas.commands(),
        &[
            DrawCommand::BeginPath,
            DrawCommand::MoveTo { to: a },
            DrawCommand::LineTo { to: b },
            DrawCommand::LineTo { to: c },
            DrawCommand::ClosePath,
        ]
    );
}

#[test]
fn test_fill_triangle_is_balanced() {
    let mesh = TriangleMesh::new(30.0, CoordMode::Pixel);
    let mut canvas = recorder();
    fill_triangle(&mut canvas, &mesh.triangle_at(1, 3), Color::RED);

    assert_eq!(canvas.depth(), 0);
    assert_eq!(canvas.commands().first(), Some(&DrawCommand::Save));
    assert_eq!(canvas.commands().last(), Some(&DrawCommand::Restore));
    assert!(canvas
        .commands()
        .contains(&DrawCommand::SetFillStyle { color: Color::RED }));
    assert_eq!(canvas.count(|c| *c == DrawCommand::Fill), 1);
    assert_eq!(canvas.count(|c| *c == DrawCommand::Stroke), 1);
}

#[test]
fn test_transfer_image_clips_before_drawing() {
    let mesh = TriangleMesh::new(30.0, CoordMode::Pixel);
    let tri = mesh.triangle_at(1, 1);
    let image = ImageSource::new(3, 800, 600);
    let src = Rect::new(200.0, 30.0, 300.0, 300.0);
    let mut canvas = recorder();
    transfer_image(&mut canvas, &tri, &image, src);

    let commands = canvas.commands();
    let clip = commands.iter().position(|c| *c == DrawCommand::Clip).unwrap();
    let draw = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::DrawImage { .. }))
        .unwrap();
    assert!(clip < draw);
    assert_eq!(
        commands[draw],
        DrawCommand::DrawImage {
            image,
            src,
            dst: tri.bounding_box(),
        }
    );
    assert!(commands.contains(&DrawCommand::SetComposite {
        mode: CompositeOp::SourceAtop
    }));
    assert_eq!(canvas.depth(), 0);
}

#[test]
fn test_draw_grid_skips_unstyled_cells() {
    let mesh = TriangleMesh::new(20.0, CoordMode::Pixel);
    let mut canvas = recorder();
    let drawn = draw_grid(&mut canvas, &mesh, GridRange::new(0..3, 0..4), |cell, _| {
        (cell.j % 2 == 0).then_some(Color::BLACK)
    });
    assert_eq!(drawn, 6);
    assert_eq!(canvas.count(|c| *c == DrawCommand::Fill), 6);
}

#[test]
fn test_clear_fills_whole_area() {
    let mut canvas = recorder();
    clear(&mut canvas, 640.0, 480.0, Color::WHITE);
    let area = Rect::new(0.0, 0.0, 640.0, 480.0);
    assert!(canvas.commands().contains(&DrawCommand::ClearRect { rect: area }));
    assert!(canvas.commands().contains(&DrawCommand::FillRect { rect: area }));
}

#[test]
fn test_recorder_clear_and_unbalanced_restore() {
    let mut canvas = recorder();
    canvas.restore();
    assert_eq!(canvas.depth(), 0);
    canvas.save();
    assert_eq!(canvas.depth(), 1);
    canvas.clear();
    assert!(canvas.is_empty());
    assert_eq!(canvas.depth(), 0);
}

#[test]
fn test_command_json_is_tagged() {
    let command = DrawCommand::MoveTo {
        to: Point::new(52.0, 60.0),
    };
    let json = serde_json::to_value(&command).unwrap();
    assert_eq!(json["op"], "moveTo");
    assert_eq!(json["to"][0], 52.0);

    let composite = DrawCommand::SetComposite {
        mode: CompositeOp::SourceAtop,
    };
    let json = serde_json::to_value(&composite).unwrap();
    assert_eq!(json["mode"], "source-atop");

    let back: DrawCommand = serde_json::from_value(json).unwrap();
    assert_eq!(back, composite);
}

#[test]
fn test_color_css() {
    assert_eq!(Color::BLACK.to_string(), "rgba(0, 0, 0, 1)");
    assert_eq!(Color::CYAN.with_alpha(0.5).to_string(), "rgba(0, 255, 255, 0.5)");
    assert_eq!(Color::rgba(1, 2, 3, 7.0).a, 1.0);
    assert_eq!(Color::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(CompositeOp::Lighter.to_string(), "lighter");
    assert_eq!(CompositeOp::default(), CompositeOp::SourceOver);
}
