//! Print the entities assembled from a DXF file.
//!
//! Usage: `dxf_dump [--failsafe] [--ignored] <file.dxf>`
//!
//! Log output is controlled with `RUST_LOG` (default `warn`).

use anyhow::{bail, Context, Result};
use dxf_assembler::io::dxf::{DxfReader, DxfReaderConfiguration};
use dxf_assembler::{AssemblerConfiguration, Entity, EntityType};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn print_entity(index: usize, entity: &Entity) {
    let a = &entity.attributes;
    println!(
        "#{index:<4} {:<8} layer={} linetype={} color={} width={}",
        entity.kind_name(),
        a.layer,
        a.line_type,
        a.color,
        a.line_weight
    );

    match &entity.specific {
        EntityType::Line(line) => println!("      {} -> {}", line.start, line.end),
        EntityType::Circle(c) => println!("      center {} radius {}", c.center, c.radius),
        EntityType::Arc(arc) => println!(
            "      center {} radius {} angles {}..{}",
            arc.center, arc.radius, arc.start_angle, arc.end_angle
        ),
        EntityType::Text(t) => println!("      {:?} at {}", t.value, t.insertion_point),
        EntityType::MText(t) => println!("      {:?} at {}", t.value, t.insertion_point),
        EntityType::Insert(i) => println!("      block {} at {}", i.block_name, i.insert_point),
        EntityType::Polyline(pl) => {
            let closed = if pl.is_closed() { " closed" } else { "" };
            println!(
                "      {} of {} vertices{closed}",
                pl.vertices.len(),
                pl.declared_vertex_count
            );
            for v in &pl.vertices {
                println!("        {} bulge {}", v.location, v.bulge);
            }
        }
        EntityType::Spline(s) => {
            println!("      degree {}", s.degree);
            for cp in &s.control_points {
                println!("        control {} weight {}", cp.location, cp.weight);
            }
            for fp in &s.fit_points {
                println!("        fit {fp}");
            }
            println!("        knots {:?}", s.knots);
        }
        _ => {}
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut failsafe = false;
    let mut record_ignored = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--failsafe" => failsafe = true,
            "--ignored" => record_ignored = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => path = Some(arg),
        }
    }
    let Some(path) = path else {
        bail!("usage: dxf_dump [--failsafe] [--ignored] <file.dxf>");
    };

    let config = DxfReaderConfiguration {
        failsafe,
        assembler: AssemblerConfiguration { record_ignored },
    };
    let drawing = DxfReader::from_file(&path)
        .with_context(|| format!("cannot open {path}"))?
        .with_configuration(config)
        .read()
        .with_context(|| format!("cannot read {path}"))?;

    for (i, entity) in drawing.iter().enumerate() {
        print_entity(i, entity);
    }

    println!();
    println!("{} entities", drawing.len());
    for (kind, count) in drawing.count_by_kind() {
        println!("  {kind:<8} {count}");
    }

    if !drawing.notifications().is_empty() {
        println!();
        println!("{} notifications", drawing.notifications().len());
        for n in drawing.notifications() {
            println!("  {n}");
        }
    }
    Ok(())
}
