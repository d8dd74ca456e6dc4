//! Renders a vertical quantile legend for a skewed sample and prints the SVG.
//!
//! Run with `RUST_LOG=binlegend_guides=debug` to see the layout events.
use binlegend_guides::config::LegendConfig;
use binlegend_guides::legend::{make_legend_svg, DrawRegion};
use binlegend_guides::orientation::LegendOrientation;
use binlegend_scales::formatter::TickFormatter;
use binlegend_scales::spec::ColorScaleSpec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(EnvFilter::from_default_env())
        .init();

    // Unemployment-rate style population, heavier toward the low end
    let sample: Vec<f32> = (1..=200)
        .map(|i| {
            let t = i as f32 / 200.0;
            1.5 + 12.0 * t * t
        })
        .collect();

    let spec = ColorScaleSpec {
        sample: Some(sample),
        bins: Some(9),
        ..serde_json::from_str(
            r##"{"kind": "quantile", "range": ["#f7fbff", "#6baed6", "#08306b"],
                 "color_space": "laba"}"##,
        )?
    };
    let scale = spec.to_binned_scale()?;

    let config = LegendConfig::vertical()
        .with_tick_format(TickFormatter::default().with_precision(1).with_suffix("%"));
    let region = DrawRegion::new(80.0, 320.0);
    let svg = make_legend_svg(&region, &scale, LegendOrientation::Vertical, &config)?;
    println!("{svg}");
    Ok(())
}
