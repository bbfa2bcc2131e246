use knowledge_timeline::core::{
    CategorySelection, KnowledgeGraph, PlotWindow, RawNode, ScaleMode, project,
};
use proptest::prelude::*;

const CATEGORIES: [&str; 5] = ["art", "biology", "math", "physics", "philosophy"];

fn graph_from(specs: &[(usize, i64, u8)]) -> KnowledgeGraph {
    let raw: Vec<RawNode> = specs
        .iter()
        .enumerate()
        .map(|(i, &(category, year, complexity))| {
            let date = if year < 0 {
                format!("{}-{} BC", -year, (-year) / 2)
            } else {
                format!("{year} AD")
            };
            RawNode::new(
                format!("node-{i}"),
                CATEGORIES[category],
                date,
                f64::from(complexity),
            )
        })
        .collect();
    KnowledgeGraph::from_raw_nodes(&raw).expect("generated graph")
}

fn mode_from(log: bool) -> ScaleMode {
    if log {
        ScaleMode::Logarithmic
    } else {
        ScaleMode::Linear
    }
}

proptest! {
    #[test]
    fn every_selected_node_appears_exactly_once(
        specs in prop::collection::vec((0usize..5, -50_000i64..3_000, 0u8..10), 0..64),
        mask in prop::collection::vec(any::<bool>(), 5),
        log in any::<bool>()
    ) {
        let graph = graph_from(&specs);
        let selection: CategorySelection = CATEGORIES
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(category, _)| *category)
            .collect();

        let scene = project(graph.nodes(), &selection, mode_from(log), None);

        let expected: Vec<&str> = graph
            .nodes()
            .iter()
            .filter(|node| selection.contains(&node.category))
            .map(|node| node.id.as_str())
            .collect();
        let actual: Vec<&str> = scene.points.iter().map(|p| p.hover_text.as_str()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(scene.annotations.len(), scene.points.len());

        for point in &scene.points {
            let node = graph.find_by_id(&point.hover_text).expect("projected node exists");
            prop_assert!(selection.contains(&node.category));
        }
    }

    #[test]
    fn projection_is_idempotent(
        specs in prop::collection::vec((0usize..5, -50_000i64..3_000, 0u8..10), 0..64),
        log in any::<bool>(),
        x_min in -10.0f64..10.0,
        x_span in -1.0f64..5.0,
        with_viewport in any::<bool>()
    ) {
        let graph = graph_from(&specs);
        let selection = CategorySelection::all(&graph);
        let viewport = with_viewport.then(|| PlotWindow::new(x_min, x_min + x_span, 0.0, 10.0));

        let first = project(graph.nodes(), &selection, mode_from(log), viewport);
        let second = project(graph.nodes(), &selection, mode_from(log), viewport);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn label_visibility_is_all_or_nothing(
        specs in prop::collection::vec((0usize..5, -50_000i64..3_000, 0u8..10), 1..64),
        x_min in -10.0f64..10.0,
        x_span in 0.0f64..4.0
    ) {
        let graph = graph_from(&specs);
        let selection = CategorySelection::all(&graph);
        let window = PlotWindow::new(x_min, x_min + x_span, 0.0, 10.0);
        let scene = project(graph.nodes(), &selection, ScaleMode::Logarithmic, Some(window));

        let reveal = window.x_span().is_some_and(|span| span < 2.0);
        let visible = scene.visible_label_count();
        if reveal {
            prop_assert_eq!(visible, scene.annotations.len());
        } else {
            prop_assert_eq!(visible, 0);
        }
    }

    #[test]
    fn log_x_keeps_sign_of_year(
        specs in prop::collection::vec((0usize..5, -50_000i64..3_000, 0u8..10), 1..32)
    ) {
        let graph = graph_from(&specs);
        let selection = CategorySelection::all(&graph);
        let scene = project(graph.nodes(), &selection, ScaleMode::Logarithmic, None);

        for (point, node) in scene.points.iter().zip(graph.nodes()) {
            prop_assert_eq!(point.x < 0.0, node.year < 0);
            prop_assert!(point.x.abs() <= 5.0);
        }
    }
}
