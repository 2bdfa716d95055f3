#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

//! Compares the collision behavior of the four strategies across load
//! factors and renders the results as charts.

use hashlab::{HashTable, Strategy};
use plotters::prelude::*;
use rand::Rng;

/// Slot count of every simulated table.
const TABLE_SIZE: usize = 10_000;
/// Load factors from 0.1 to 0.95, in this many steps.
const NUM_LOAD_FACTORS: usize = 10;

/// Per-strategy measurements at one load factor.
struct Measurement {
    avg_probes: f64,
    avg_collisions: f64,
    failed_inserts: usize,
}

/// Inserts `keys` into a fresh table of `strategy` and aggregates the
/// per-insert cost reported by the table.
fn measure(strategy: Strategy, keys: &[String]) -> Measurement {
    let mut table: HashTable<String, usize> = match HashTable::new(strategy, TABLE_SIZE) {
        Ok(table) => table,
        Err(_) => {
            return Measurement { avg_probes: 0.0, avg_collisions: 0.0, failed_inserts: 0 };
        }
    };

    let mut total_probes = 0_usize;
    let mut total_collisions = 0_usize;
    let mut failed_inserts = 0_usize;

    for (n, key) in keys.iter().enumerate() {
        if table.insert(key.clone(), n).is_err() {
            failed_inserts += 1;
        }
        let stats = table.stats();
        total_probes += stats.probes;
        total_collisions += stats.collisions;
    }

    let inserts = keys.len().max(1) as f64;
    Measurement {
        avg_probes: total_probes as f64 / inserts,
        avg_collisions: total_collisions as f64 / inserts,
        failed_inserts,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {load_factors:?}");
    println!("Number of keys: {num_keys:?}");

    // One shared key corpus so every strategy sees the same insert order.
    let mut rng = rand::rng();
    let max_keys = num_keys.last().copied().unwrap_or(0);
    let keys: Vec<String> =
        (0..max_keys).map(|_| format!("key-{}", rng.random_range(0..u64::MAX))).collect();

    let mut avg_probes: Vec<Vec<f64>> = vec![Vec::new(); Strategy::ALL.len()];
    let mut avg_collisions: Vec<Vec<f64>> = vec![Vec::new(); Strategy::ALL.len()];

    for &n_keys in &num_keys {
        println!("Inserting {n_keys} keys into tables of {TABLE_SIZE} slots");

        for (idx, strategy) in Strategy::ALL.into_iter().enumerate() {
            let measurement = measure(strategy, &keys[..n_keys]);
            println!(
                "  {}: avg probes = {:.2}, avg collisions = {:.2}, failed inserts = {}",
                strategy,
                measurement.avg_probes,
                measurement.avg_collisions,
                measurement.failed_inserts
            );
            avg_probes[idx].push(measurement.avg_probes);
            avg_collisions[idx].push(measurement.avg_collisions);
        }
    }

    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
        RGBColor(180, 50, 180),
    ];

    draw_chart(
        "average_probes.png",
        "Average Probes per Insert",
        "Average Probes",
        &load_factors,
        &avg_probes,
        &colors,
    )?;
    draw_chart(
        "average_collisions.png",
        "Average Collisions per Insert",
        "Average Collisions",
        &load_factors,
        &avg_collisions,
        &colors,
    )?;

    println!("Generated plot images: average_probes.png, average_collisions.png");

    Ok(())
}

/// Renders one line chart with a series per strategy.
fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    load_factors: &[f64],
    series: &[Vec<f64>],
    colors: &[RGBColor],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series
        .iter()
        .flat_map(|values| values.iter())
        .fold(0.0_f64, |max, &value| if value > max { value } else { max })
        * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0_f64, 0.0..max_y.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc(y_desc)
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    for (idx, strategy) in Strategy::ALL.into_iter().enumerate() {
        let color = colors[idx % colors.len()];
        let style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().copied().zip(series[idx].iter().copied()),
                style,
            ))?
            .label(strategy.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart.draw_series(
            load_factors
                .iter()
                .copied()
                .zip(series[idx].iter().copied())
                .map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}
