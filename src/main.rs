// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SpineMark - spinal radiograph measurement engine
//!
//! Command-line front end: loads an annotated study, recomputes every
//! measurement and prints the results.

use anyhow::{bail, Context, Result};
use spinemark::canvas::{selection, HitTester};
use spinemark::config::EngineConfig;
use spinemark::io::serialization::{export_study, import_study};
use spinemark::measure::{self, MeasurementCategory};
use spinemark::models::annotation::{Point, Size};
use spinemark::models::project::StudyData;
use spinemark::util::transform::{CoordinateTransform, SystemClock, TransformContext};
use std::path::PathBuf;

const USAGE: &str = "Usage: spinemark <study.{json,yaml}> [--config <engine.yaml>] [--export <out>]
                 [--view <W>x<H> --pick <X>,<Y>]
       spinemark --catalog";

#[derive(Debug, Default)]
struct Args {
    study: Option<PathBuf>,
    config: Option<PathBuf>,
    export: Option<PathBuf>,
    catalog: bool,
    help: bool,
    view: Option<Size>,
    pick: Option<Point>,
}

/// Parse `a<sep>b` as two numbers.
fn parse_pair(text: &str, sep: char) -> Result<(f64, f64)> {
    let (a, b) = text
        .split_once(sep)
        .with_context(|| format!("Expected two numbers separated by '{sep}', got {text:?}"))?;
    let a = a.trim().parse::<f64>().with_context(|| format!("Invalid number {a:?}"))?;
    let b = b.trim().parse::<f64>().with_context(|| format!("Invalid number {b:?}"))?;
    Ok((a, b))
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--export" => {
                let path = iter.next().context("--export needs a path")?;
                args.export = Some(PathBuf::from(path));
            }
            "--view" => {
                let text = iter.next().context("--view needs <W>x<H>")?;
                let (w, h) = parse_pair(&text, 'x')?;
                args.view = Some(Size::new(w, h));
            }
            "--pick" => {
                let text = iter.next().context("--pick needs <X>,<Y>")?;
                let (x, y) = parse_pair(&text, ',')?;
                args.pick = Some(Point::new(x, y));
            }
            "--catalog" => args.catalog = true,
            "-h" | "--help" => args.help = true,
            flag if flag.starts_with("--") => bail!("Unknown option {flag}\n{USAGE}"),
            _ if args.study.is_none() => args.study = Some(PathBuf::from(&arg)),
            _ => bail!("Unexpected argument {arg}\n{USAGE}"),
        }
    }
    Ok(args)
}

fn print_catalog() {
    for config in measure::all_configs() {
        let points = match config.points_needed {
            0 => "free".to_string(),
            n => n.to_string(),
        };
        let category = match config.category {
            MeasurementCategory::Measurement => "measurement",
            MeasurementCategory::Auxiliary => "auxiliary",
        };
        println!(
            "{:<18} {:<30} {:>5}  {}",
            config.id, config.name, points, category
        );
    }
}

fn print_study(study: &StudyData) {
    let context = study.calculation_context();
    if context.standard_distance.is_none() {
        log::warn!("Study is not calibrated; distances use the fallback ratio");
    }
    for m in &study.measurements {
        let estimated = measure::calculate_results(&m.measurement_type, &m.points, &context)
            .iter()
            .any(|r| r.estimated);
        let marker = if estimated { " (estimated)" } else { "" };
        println!("{}\t{}\t{}{}", m.id, m.measurement_type, m.value, marker);
    }
}

/// Report the measurement under a screen-space pointer in a fitted view.
fn print_pick(study: &StudyData, config: &EngineConfig, view: Size, mouse: Point) {
    let transform = CoordinateTransform::with_clock(SystemClock, config.warn_cooldown());
    let context = match study.image_size() {
        Some(size) => TransformContext::new(size),
        None => TransformContext::default(),
    };
    let tester =
        HitTester::new(&transform, &context, Some(view)).with_tolerances(config.tolerances);

    let image = tester.to_image(&mouse);
    println!("pointer ({:.1}, {:.1}) -> image ({:.1}, {:.1})", mouse.x, mouse.y, image.x, image.y);
    match selection::hovered(&tester, &mouse, &study.measurements, &config.label) {
        Some(hit) => {
            let m = &study.measurements[hit.index];
            println!("hit {} ({}) {:?}", m.id, m.measurement_type, hit.target);
        }
        None => println!("no measurement under pointer"),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.catalog {
        print_catalog();
        if args.study.is_none() {
            return Ok(());
        }
    }

    let Some(study_path) = args.study else {
        bail!("{USAGE}");
    };

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    log::debug!("Engine config: {:?}", config);

    let mut study = import_study(&study_path)?;
    study.refresh_values();
    log::info!(
        "Loaded {} measurement(s) from {}",
        study.measurements.len(),
        study_path.display()
    );
    print_study(&study);

    match (args.view, args.pick) {
        (Some(view), Some(mouse)) => print_pick(&study, &config, view, mouse),
        (None, None) => {}
        _ => bail!("--view and --pick must be given together"),
    }

    if let Some(out) = &args.export {
        export_study(&study, out)?;
    }

    Ok(())
}
