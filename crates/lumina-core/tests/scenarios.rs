//! End-to-end behaviour of the public API: configuration, shading and export.

use glam::{Vec2, Vec3};
use lumina_core::shade::{lumina, Fragment, REFERENCE_RESOLUTION};
use lumina_core::{
    render_frame, shade, AnimationClock, ColorStop, Coordinate, Error, ExportRequest, Family,
    LuminaMode, Mode, RenderParams, RenderRequest, Scene,
};

fn colors(hex: &[&str]) -> Vec<ColorStop> {
    hex.iter().map(|h| ColorStop::from_hex(h).unwrap()).collect()
}

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn mesh_centre_is_dominated_by_first_color() {
    let params = RenderParams {
        mode: Mode::Lumina(LuminaMode::Mesh),
        colors: colors(&["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff"]),
        distortion: 0.0,
        noise_strength: 0.0,
        ..RenderParams::default()
    };
    let u = params.validate().uniforms;
    let c = shade(&u, Coordinate::normalized(Vec2::new(0.5, 0.5)), 0.0);
    assert!(c.x > c.y + 0.2, "red should dominate green: {c}");
    assert!(c.x > c.z + 0.2, "red should dominate blue: {c}");
}

#[test]
fn mesh_centre_favours_first_color_with_default_knobs() {
    let params = RenderParams {
        mode: Mode::Lumina(LuminaMode::Mesh),
        colors: colors(&["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff"]),
        ..RenderParams::default()
    };
    let validated = params.validate();
    assert!(validated.diagnostics.is_empty());
    assert_eq!(validated.uniforms.distortion, 1.0);

    let c = shade(
        &validated.uniforms,
        Coordinate::normalized(Vec2::new(0.5, 0.5)),
        0.0,
    );
    assert!(c.x > c.y + 0.2, "red should dominate green: {c}");
    assert!(c.x > c.z + 0.2, "red should dominate blue: {c}");
}

#[test]
fn plasma_origin_snapshot() {
    let params = RenderParams {
        mode: Mode::Lumina(LuminaMode::Plasma),
        colors: vec![
            ColorStop::from_rgb(0.5, 0.5, 0.5),
            ColorStop::from_rgb(0.5, 0.5, 0.5),
            ColorStop::from_rgb(0.5, 0.5, 0.5),
            ColorStop::from_rgb(0.5, 0.5, 0.5),
            ColorStop::from_rgb(1.0, 0.0, 0.0),
        ],
        scale: 1.0,
        complexity: 1.0,
        distortion: 1.0,
        noise_strength: 0.0,
        ..RenderParams::default()
    };
    let u = params.validate().uniforms;
    let c = shade(&u, Coordinate::normalized(Vec2::ZERO), 0.0);
    let expected = Vec3::new(0.7222, 0.4912, 0.4912);
    assert!(approx(c, expected, 5e-3), "got {c}, expected {expected}");

    // Same inputs, same bits.
    assert_eq!(c, shade(&u, Coordinate::normalized(Vec2::ZERO), 0.0));
}

#[test]
fn dot_grid_export_is_two_stop_diagonal() {
    let req = ExportRequest {
        colors: vec!["#112233".into(), "#445566".into()],
        mode: "dotGrid".into(),
        ..ExportRequest::default()
    };
    let description = req.describe().unwrap();
    assert_eq!(
        description.css.background,
        "linear-gradient(135deg, rgb(17,34,51), rgb(68,85,102))"
    );
}

#[test]
fn zero_speed_freezes_the_image() {
    let params = RenderParams {
        speed: 0.0,
        ..RenderParams::default()
    };
    let validated = params.validate();
    assert!(validated.diagnostics.is_empty());
    let u = validated.uniforms;

    let mut clock = AnimationClock::new();
    let p = Coordinate::normalized(Vec2::new(0.37, 0.61));
    let before = shade(&u, p, clock.time());
    clock.advance(0.05, u.speed, u.animate);
    let after = shade(&u, p, clock.time());
    assert_eq!(before, after);
}

#[test]
fn paused_animation_freezes_the_image() {
    let mut scene = Scene::new(RenderParams {
        animate: false,
        ..RenderParams::default()
    });
    let a = render_frame(scene.uniforms(), scene.time(), 24, 16).unwrap();
    scene.tick(0.05);
    let b = render_frame(scene.uniforms(), scene.time(), 24, 16).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_colors_contribute_black() {
    let params = RenderParams {
        colors: colors(&["#ff0000", "#00ff00"]),
        distortion: 0.0,
        ..RenderParams::default()
    };
    let u = params.validate().uniforms;
    assert_eq!(&u.colors[2..], &[Vec3::ZERO; 3]);

    // At the anchor of the third color, the blend is just the weighted first
    // two colors: the unset slots add nothing.
    let anchors = lumina::mesh_anchors(0.0);
    let uv = anchors[3];
    let w = lumina::idw_weights(uv, &anchors, lumina::MESH_FALLOFF);
    let fragment = Fragment {
        uv,
        frag_coord: uv * REFERENCE_RESOLUTION,
        time: 0.0,
        uniforms: &u,
    };
    let c = lumina::mesh(&fragment);
    assert!(approx(c, Vec3::new(w[0], w[1], 0.0), 1e-5), "{c} vs {w:?}");
    assert!(w[3] > w[0], "anchor weight should peak at its own anchor");
}

#[test]
fn unknown_mode_is_rejected_before_rendering() {
    let err = RenderRequest::from_json(r#"{"mode":"sunburst"}"#)
        .unwrap()
        .into_params()
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Invalid mode: sunburst. Valid modes: mesh, aurora, grainy, deep-sea"));

    // Index one past the end never falls back to the first mode.
    assert!(matches!(
        Mode::from_index(Family::Lumina, 11),
        Err(Error::InvalidMode { .. })
    ));
}

#[test]
fn malformed_color_is_rejected_not_substituted() {
    let err = RenderRequest::from_json(r##"{"colors":["#ff0000","#zzzzzz"]}"##)
        .unwrap()
        .into_params()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidColor {
            value: "#zzzzzz".into()
        }
    );
}

#[test]
fn studio_request_renders_a_frame() {
    let params = RenderRequest::from_json(
        r#"{"family":"studio","mode":"kaleidoscope","palette":"neon","noiseStrength":0.05}"#,
    )
    .unwrap()
    .into_params()
    .unwrap();
    let frame = render_frame(&params.validate().uniforms, 4.0, 20, 12).unwrap();
    assert_eq!(frame.as_bytes().len(), 20 * 12 * 4);
    // Studio tone mapping lifts every channel to at least 0.08.
    assert!(frame
        .as_bytes()
        .chunks(4)
        .all(|p| p[0] >= 20 && p[1] >= 20 && p[2] >= 20));
}

#[test]
fn degenerate_scale_still_renders() {
    let params = RenderParams {
        scale: 0.0,
        complexity: 0.0,
        ..RenderParams::default()
    };
    let validated = params.validate();
    assert_eq!(validated.diagnostics.len(), 2);
    for mode in Mode::all() {
        let mut u = validated.uniforms;
        u.mode = mode;
        let c = shade(&u, Coordinate::normalized(Vec2::new(0.25, 0.75)), 1.0);
        assert!(c.is_finite(), "{mode}: {c}");
    }
}
