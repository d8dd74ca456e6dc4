use binlegend_common::color::RgbaColor;
use binlegend_scales::binned::BinnedColorScale;
use binlegend_scales::linear::LinearScale;
use binlegend_scales::spec::ColorScaleSpec;
use binlegend_scenegraph::marks::group::SceneGroup;
use serde::{Deserialize, Serialize};

use crate::axis::AxisSpec;
use crate::config::LegendConfig;
use crate::error::LegendError;
use crate::orientation::LegendOrientation;
use crate::surface::{LegendSurface, SceneGraphSurface};

/// Size of the surface the legend is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRegion {
    pub width: f32,
    pub height: f32,
}

impl DrawRegion {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Filled rectangle in region coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: RgbaColor,
}

/// One flat-colored bin of the legend bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub pixel_start: f32,
    pub pixel_end: f32,
    pub secondary_start: f32,
    pub thickness: f32,
    pub fill: RgbaColor,
    pub orientation: LegendOrientation,
}

impl Segment {
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) / 2.0
    }

    pub fn rect(&self) -> LegendRect {
        let [x, y, width, height] = self.orientation.rect(
            (self.pixel_start, self.pixel_end),
            self.secondary_start,
            self.thickness,
        );
        LegendRect {
            x,
            y,
            width,
            height,
            fill: self.fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub segments: Vec<Segment>,
    pub axis: AxisSpec,
}

/// Compute the color segments and tick axis of a binned legend bar.
///
/// Each bin between consecutive boundaries `[min, thresholds.., max]` becomes
/// one segment filled with the scale color at the bin midpoint. Boundaries are
/// mapped to pixels once, so adjacent segments share their edge exactly.
#[tracing::instrument(skip_all, fields(orientation = ?orientation))]
pub fn render_legend(
    region: &DrawRegion,
    scale: &BinnedColorScale,
    orientation: LegendOrientation,
    config: &LegendConfig,
) -> Result<LegendLayout, LegendError> {
    config.validate()?;
    if let Err(err) = scale.validate() {
        tracing::debug!(%err, "rejected legend scale");
        return Err(err.into());
    }

    let primary_extent = orientation.primary_extent(region);
    let secondary_extent = orientation.secondary_extent(region);
    if !(primary_extent > config.insets.primary() && secondary_extent > config.insets.secondary())
    {
        tracing::debug!(?region, insets = ?config.insets, "legend region too small");
        return Err(LegendError::RegionTooSmall {
            width: region.width,
            height: region.height,
            primary_insets: config.insets.primary(),
            secondary_insets: config.insets.secondary(),
        });
    }

    let boundaries = scale.boundaries();
    let pixel_scale = LinearScale::default()
        .with_domain(scale.extent())
        .with_extension(config.extend_percent)
        .with_range(orientation.primary_range(region, config));
    let pixels = pixel_scale.scale(&boundaries);

    let thickness = secondary_extent - config.insets.secondary();
    let secondary_start = config.insets.secondary_near;

    let segments: Vec<Segment> = boundaries
        .windows(2)
        .zip(pixels.windows(2))
        .map(|(data, pixel)| {
            let midpoint = (data[0] + data[1]) / 2.0;
            Segment {
                start: data[0],
                end: data[1],
                pixel_start: pixel[0],
                pixel_end: pixel[1],
                secondary_start,
                thickness,
                fill: scale.color(midpoint),
                orientation,
            }
        })
        .collect();

    let axis = AxisSpec::from_values(
        &boundaries,
        &pixel_scale,
        orientation.axis_placement(),
        orientation.axis_translate(config, thickness),
        &config.tick_format,
    );

    tracing::debug!(
        segments = segments.len(),
        ticks = axis.ticks.len(),
        span = ?pixel_scale.range(),
        "computed legend layout"
    );
    Ok(LegendLayout { segments, axis })
}

/// Lay out the legend, then issue one `append_rect` per segment and a single
/// `attach_axis`. Nothing is drawn when the layout fails.
#[tracing::instrument(skip_all, fields(orientation = ?orientation))]
pub fn draw_legend<S: LegendSurface + ?Sized>(
    surface: &mut S,
    region: &DrawRegion,
    scale: &BinnedColorScale,
    orientation: LegendOrientation,
    config: &LegendConfig,
) -> Result<LegendLayout, LegendError> {
    let layout = render_legend(region, scale, orientation, config)?;
    for segment in &layout.segments {
        surface.append_rect(&segment.rect());
    }
    surface.attach_axis(&layout.axis);
    Ok(layout)
}

/// Build the scale described by `spec` and draw it
pub fn draw_legend_from_spec<S: LegendSurface + ?Sized>(
    surface: &mut S,
    region: &DrawRegion,
    spec: &ColorScaleSpec,
    orientation: LegendOrientation,
    config: &LegendConfig,
) -> Result<LegendLayout, LegendError> {
    let scale = spec.to_binned_scale()?;
    draw_legend(surface, region, &scale, orientation, config)
}

/// Scene graph for a legend bar with its axis
pub fn make_legend_marks(
    region: &DrawRegion,
    scale: &BinnedColorScale,
    orientation: LegendOrientation,
    config: &LegendConfig,
) -> Result<SceneGroup, LegendError> {
    let mut surface = SceneGraphSurface::new();
    draw_legend(&mut surface, region, scale, orientation, config)?;
    Ok(surface.into_scene_group())
}

/// SVG document for a legend bar filling `region`
pub fn make_legend_svg(
    region: &DrawRegion,
    scale: &BinnedColorScale,
    orientation: LegendOrientation,
    config: &LegendConfig,
) -> Result<String, LegendError> {
    let group = make_legend_marks(region, scale, orientation, config)?;
    Ok(group.to_svg(region.width, region.height)?)
}
