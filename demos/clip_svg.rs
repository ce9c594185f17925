//! Clips SVG path data against a boundary path from the command line.
//!
//! ```text
//! cargo run --example clip_svg -- "M 5 -5 L 15 -5 L 15 15 L 5 15 Z" "M 0 0 L 10 0 L 10 10 L 0 10 Z"
//! ```
//!
//! The first argument is the boundary, every further argument a subject.
//! Set `RUST_LOG=pathclip=debug` for per-subject details.

use pathclip::document::{Drawing, Shape};
use pathclip::operations::{ClipBatch, ClipOptions};
use pathclip::path::{format_path_data, parse_path_data};
use pathclip::ClipError;

fn main() -> Result<(), ClipError> {
    // Default: WARN for everything, INFO for pathclip.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pathclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut drawing = Drawing::new();
    let mut selection = Vec::new();
    for (index, data) in std::env::args().skip(1).enumerate() {
        let label = if index == 0 {
            "boundary".to_owned()
        } else {
            format!("path{index}")
        };
        selection.push(drawing.add_shape(Shape::path(label, parse_path_data(&data)?)));
    }

    let report = ClipBatch::new(selection.clone(), ClipOptions::default()).execute(&mut drawing)?;

    for &id in selection.iter().skip(1) {
        let shape = drawing.shape(id)?;
        if let Some(commands) = shape.commands() {
            println!("{}: {}", shape.label, format_path_data(commands));
        }
    }
    for notice in report.notices() {
        eprintln!("{notice}");
    }
    for (label, err) in report.failures() {
        eprintln!("{label}: {err}");
    }
    Ok(())
}
