use knowledge_timeline::core::{
    AxisRange, CategorySelection, KnowledgeGraph, PlotWindow, ScaleMode, project_with,
};
use knowledge_timeline::telemetry::init_default_tracing;
use knowledge_timeline::TimelineConfig;
use std::path::PathBuf;

struct CliArgs {
    graph_path: PathBuf,
    config_path: Option<PathBuf>,
    scale_mode: Option<ScaleMode>,
    categories: Vec<String>,
    x_range: Option<AxisRange>,
    y_range: Option<AxisRange>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let graph = KnowledgeGraph::from_json_path(&args.graph_path).map_err(|e| e.to_string())?;
    let config = match &args.config_path {
        Some(path) => TimelineConfig::from_json_path(path).map_err(|e| e.to_string())?,
        None => TimelineConfig::default(),
    };

    let selection = if args.categories.is_empty() {
        CategorySelection::all(&graph)
    } else {
        args.categories.iter().cloned().collect()
    };
    let viewport = match (args.x_range, args.y_range) {
        (None, None) => None,
        (x, y) => Some(PlotWindow { x, y }),
    };
    let mode = args.scale_mode.unwrap_or(config.initial_scale_mode);

    let scene = project_with(
        graph.nodes(),
        &selection,
        mode,
        viewport,
        &config.projection_settings(),
    );
    let json = scene
        .to_json_contract_v1_pretty()
        .map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut graph_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut scale_mode: Option<ScaleMode> = None;
    let mut categories = Vec::new();
    let mut x_range: Option<AxisRange> = None;
    let mut y_range: Option<AxisRange> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--graph" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --graph".to_owned())?;
                graph_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--scale" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scale".to_owned())?;
                scale_mode = Some(value.parse::<ScaleMode>().map_err(|e| e.to_string())?);
            }
            "--category" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --category".to_owned())?;
                categories.push(value);
            }
            "--x-range" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --x-range".to_owned())?;
                x_range = Some(parse_range(&value)?);
            }
            "--y-range" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --y-range".to_owned())?;
                y_range = Some(parse_range(&value)?);
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin scene_dump -- --graph <path> [--config <path>] [--scale log|linear] [--category <name>]... [--x-range <min>,<max>] [--y-range <min>,<max>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        graph_path: graph_path.ok_or_else(|| "--graph is required".to_owned())?,
        config_path,
        scale_mode,
        categories,
        x_range,
        y_range,
    })
}

fn parse_range(value: &str) -> Result<AxisRange, String> {
    let (min, max) = value
        .split_once(',')
        .ok_or_else(|| format!("range `{value}` must be `<min>,<max>`"))?;
    let min: f64 = min
        .trim()
        .parse()
        .map_err(|err| format!("invalid range start `{min}`: {err}"))?;
    let max: f64 = max
        .trim()
        .parse()
        .map_err(|err| format!("invalid range end `{max}`: {err}"))?;
    Ok(AxisRange::new(min, max))
}
