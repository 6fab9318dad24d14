// File: crates/fuelplot-render-svg/tests/svg.rs
// Purpose: SVG serialization of scenes, element by element.

use fuelplot_core::color::{BLUE_DARK, BLUE_LIGHT};
use fuelplot_core::geometry::{Anchor, Hover, Paint, Shape};
use fuelplot_core::parse::parse_tsv;
use fuelplot_core::record::annotate_days_since_fillup;
use fuelplot_core::{ChartConfig, ChartContext, DeriveOptions, Rgb, Scene};
use fuelplot_render_svg::SvgRenderer;

fn empty_scene() -> Scene {
    Scene::new(&ChartContext::full())
}

#[test]
fn document_shell_carries_dimensions_and_viewbox() {
    let svg = SvgRenderer::new().render_to_string(&empty_scene());
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"400\" viewBox=\"0 0 800 400\">"
    ));
    assert!(svg.ends_with("</svg>\n"));
    // No gradients, no defs block.
    assert!(!svg.contains("<defs>"));
}

#[test]
fn polyline_serializes_points_and_stroke() {
    let mut scene = empty_scene();
    scene.push(Shape::Polyline {
        points: vec![(50.0, 330.0), (150.0, 222.5)],
        stroke: Rgb::from_hex("#1f77b4").unwrap(),
        stroke_width: 2.0,
    });
    let svg = SvgRenderer::new().render_to_string(&scene);
    assert!(svg.contains(
        "<polyline points=\"50,330 150,222.5\" fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"2\"/>"
    ));
}

#[test]
fn gradient_defs_come_first_and_rects_reference_them() {
    let mut scene = empty_scene();
    scene.push(Shape::Rect {
        x: 760.0,
        y: 89.0,
        width: 20.0,
        height: 100.0,
        fill: Paint::GradientRef("average-mpg-gradient-scale".to_string()),
        hover: None,
    });
    scene.push(Shape::GradientDef {
        id: "average-mpg-gradient-scale".to_string(),
        start: BLUE_LIGHT,
        stop: BLUE_DARK,
    });
    let svg = SvgRenderer::new().render_to_string(&scene);

    let defs = svg.find("<defs>").expect("defs block");
    let rect = svg.find("<rect").expect("rect");
    assert!(defs < rect);
    assert!(svg.contains(
        "<linearGradient id=\"average-mpg-gradient-scale\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">"
    ));
    assert!(svg.contains("<stop offset=\"0%\" stop-opacity=\"1\" stop-color=\"#c6dbef\"/>"));
    assert!(svg.contains("<stop offset=\"100%\" stop-opacity=\"1\" stop-color=\"#084594\"/>"));
    assert!(svg.contains("fill=\"url(#average-mpg-gradient-scale)\""));
}

#[test]
fn hover_payloads_become_data_attributes() {
    let mut scene = empty_scene();
    scene.push(Shape::Circle {
        cx: 150.0,
        cy: 72.5,
        r: 4.0,
        fill: Rgb::from_hex("#cb181d").unwrap(),
        hover: Some(Hover { record: 0, tooltip: "[2020/01/05]: 4 days".to_string() }),
    });
    let svg = SvgRenderer::new().render_to_string(&scene);
    assert!(svg.contains(
        "<circle cx=\"150\" cy=\"72.5\" r=\"4\" fill=\"#cb181d\" data-tooltip=\"[2020/01/05]: 4 days\"/>"
    ));
}

#[test]
fn text_rotation_goes_through_a_transform() {
    let mut scene = empty_scene();
    scene.push(Shape::Text {
        x: 0.0,
        y: 0.0,
        dx: -200.0,
        dy: 15.0,
        content: "Miles Driven".to_string(),
        anchor: Anchor::Middle,
        rotate_deg: Some(-90.0),
    });
    let svg = SvgRenderer::new().render_to_string(&scene);
    assert!(svg.contains(
        "<text transform=\"translate(0,0) rotate(-90)\" x=\"-200\" y=\"15\" text-anchor=\"middle\">Miles Driven</text>"
    ));
}

#[test]
fn markup_characters_are_escaped() {
    let mut scene = empty_scene();
    scene.text(10.0, 10.0, "a<b & \"c\"", Anchor::Start);
    scene.push(Shape::Rect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
        fill: Paint::Solid(Rgb::new(0, 0, 0)),
        hover: Some(Hover { record: 0, tooltip: "1 < 2".to_string() }),
    });
    let svg = SvgRenderer::new().render_to_string(&scene);
    assert!(svg.contains(">a&lt;b &amp; &quot;c&quot;</text>"));
    assert!(svg.contains("data-tooltip=\"1 &lt; 2\""));
}

#[test]
fn coordinates_print_without_float_noise() {
    let mut scene = empty_scene();
    scene.push(Shape::Line { x1: 50.0, y1: 330.5, x2: 720.125, y2: 330.0, stroke: Rgb::new(0, 0, 0) });
    let svg = SvgRenderer::new().render_to_string(&scene);
    assert!(svg.contains("<line x1=\"50\" y1=\"330.5\" x2=\"720.125\" y2=\"330\" stroke=\"#000000\"/>"));
}

#[test]
fn full_chart_renders_end_to_end() {
    let sample = "Date\tMileage\tGallons Filled\tPrice Per Gallon\tMiles Remaining\tMPG\n\
2020/01/01\t300\t10\t3.00\t50\t30\n\
2020/02/01\t310\t10.5\t3.10\t40\t29.5\n";
    let mut records = parse_tsv(sample.as_bytes(), &DeriveOptions::default()).expect("parse");
    annotate_days_since_fillup(&mut records);

    let scene = ChartConfig::average_mpg()
        .assemble(&records, &ChartContext::full())
        .expect("assemble");
    let svg = SvgRenderer::new().render_to_string(&scene);

    assert!(svg.contains("<defs>"));
    assert!(svg.contains("url(#average-mpg-gradient-scale)"));
    assert!(svg.contains("data-tooltip=\"30 mpg\""));
    assert!(svg.contains(">Miles Per Gallon</text>"));
    assert!(svg.contains(">Date</text>"));
}

#[test]
fn render_to_file_creates_parent_directories() {
    let dir = std::env::temp_dir().join("fuelplot-svg-test");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("chart.svg");

    SvgRenderer::new()
        .render_to_file(&empty_scene(), &path)
        .expect("write");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("<svg"));

    let _ = std::fs::remove_dir_all(&dir);
}
