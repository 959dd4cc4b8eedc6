extern crate plotters;
use plotters::prelude::*;

extern crate bezier_stats;
use bezier_stats::{ChordMode, Sampler, SamplerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // same random curves for both chord modes
    let seed = 2024;
    let magnitude = Sampler::new(SamplerConfig::default().with_seed(seed))?.run();
    let signed = Sampler::new(
        SamplerConfig::default()
            .with_seed(seed)
            .with_chord_mode(ChordMode::Signed),
    )?
    .run();

    // plot against log2(segments) so the levels are evenly spaced
    let to_series = |reports: &bezier_stats::Reports| -> Vec<(f64, f64)> {
        reports
            .iter()
            .map(|r| ((r.segments as f64).log2(), r.max_error))
            .collect()
    };
    let magnitude_graph = to_series(&magnitude);
    let signed_graph = to_series(&signed);

    let ymax = magnitude_graph
        .iter()
        .chain(signed_graph.iter())
        .map(|&(_, e)| e)
        .fold(0.0, f64::max);

    let root = BitMapBackend::new("max_error_per_segments.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Max relative flattening error", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(1.5f64..6.5f64, 0f64..(ymax * 1.1 + 1e-3))?;

    chart
        .configure_mesh()
        .x_desc("log2(segments)")
        .y_desc("max error")
        .draw()?;

    chart
        .draw_series(LineSeries::new(magnitude_graph.clone(), &RED))?
        .label("|dx|, |dy| chord")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart.draw_series(PointSeries::of_element(
        magnitude_graph,
        4,
        &RED,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    chart
        .draw_series(LineSeries::new(signed_graph.clone(), &BLUE))?
        .label("signed chord")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(PointSeries::of_element(
        signed_graph,
        4,
        &BLUE,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    for (m, s) in magnitude.iter().zip(signed.iter()) {
        println!("{}    (signed chord: {})", m, s.max_error);
    }

    Ok(())
}
