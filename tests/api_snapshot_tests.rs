use knowledge_timeline::TimelineError;
use knowledge_timeline::api::{InteractionController, TimelineConfig};
use knowledge_timeline::core::{
    CategorySelection, KnowledgeGraph, PlotWindow, ScaleMode, project,
};
use knowledge_timeline::render::{Color, MarkerStyle, NullRenderer, Scene};

const FIXTURE: &str = include_str!("fixtures/knowledge_graph.json");

#[test]
fn timeline_config_json_roundtrip() {
    let config = TimelineConfig::default()
        .with_title("Knowledge")
        .with_initial_scale_mode(ScaleMode::Linear)
        .with_marker_style(MarkerStyle {
            size_px: 6.0,
            outline_width_px: 1.0,
            outline_color: Color::GREY,
        });

    let json = config.to_json_pretty().expect("config should serialize");
    let restored = TimelineConfig::from_json_str(&json).expect("config should deserialize");
    assert_eq!(restored, config);
}

#[test]
fn partial_config_uses_defaults() {
    let config = TimelineConfig::from_json_str(r#"{"initial_scale_mode":"linear"}"#)
        .expect("partial config");

    assert_eq!(config.initial_scale_mode, ScaleMode::Linear);
    assert_eq!(config.label_reveal_span, 2.0);
    assert_eq!(config.log_axis_label, "Logarithmic Scale");
    assert_eq!(config.marker, MarkerStyle::default());
}

#[test]
fn config_rejects_non_positive_marker_size() {
    let err = TimelineConfig::from_json_str(
        r#"{"marker":{"size_px":0.0,"outline_width_px":2.0,"outline_color":{"red":0.0,"green":0.0,"blue":0.5,"alpha":1.0}}}"#,
    )
    .expect_err("zero marker size should fail");
    assert!(matches!(err, TimelineError::InvalidData(_)));
}

#[test]
fn scale_mode_parses_control_values() {
    assert_eq!("log".parse::<ScaleMode>().expect("log"), ScaleMode::Logarithmic);
    assert_eq!("linear".parse::<ScaleMode>().expect("linear"), ScaleMode::Linear);
    assert!("cubic".parse::<ScaleMode>().is_err());
    assert_eq!(ScaleMode::Logarithmic.to_string(), "log");
}

#[test]
fn scene_contract_roundtrip() {
    let graph = KnowledgeGraph::from_json_str(FIXTURE).expect("graph");
    let scene = project(
        graph.nodes(),
        &CategorySelection::all(&graph),
        ScaleMode::Logarithmic,
        Some(PlotWindow::new(3.0, 3.4, 5.0, 10.0)),
    );

    let json = scene
        .to_json_contract_v1_pretty()
        .expect("scene contract should serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = Scene::from_json_compat_str(&json).expect("contract should parse");
    assert_eq!(restored, scene);

    let bare = scene.to_json_pretty().expect("bare scene should serialize");
    let restored = Scene::from_json_compat_str(&bare).expect("bare scene should parse");
    assert_eq!(restored, scene);
}

#[test]
fn scene_contract_rejects_unknown_schema_version() {
    let graph = KnowledgeGraph::from_json_str(FIXTURE).expect("graph");
    let controller =
        InteractionController::new(&graph, NullRenderer::default(), TimelineConfig::default())
            .expect("controller init");

    let json = controller
        .scene_json_contract_v1_pretty()
        .expect("contract json")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    let err = Scene::from_json_compat_str(&json).expect_err("schema 9 should fail");
    assert!(err.to_string().contains("unsupported scene schema version"));
}

#[test]
fn invalid_scene_color_fails_validation() {
    let graph = KnowledgeGraph::from_json_str(FIXTURE).expect("graph");
    let mut scene = project(
        graph.nodes(),
        &CategorySelection::all(&graph),
        ScaleMode::Linear,
        None,
    );
    scene.points[0].color = Color::rgba(1.5, 0.0, 0.0, 1.0);
    assert!(scene.validate().is_err());
}
