//! Two-panel figure: per-game leader bars and an annotated minutes scatter.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use tracing::debug;

use crate::{
    cli::types::Stat,
    error::{Result, StatsError},
    plot::{
        annotate::Annotation,
        layout::{arrow_head, declutter, DeclutterOptions, LabelBox, Point, Rect},
    },
    stats::{Leader, PlayerRecord},
};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const CONNECTOR_GRAY: RGBColor = RGBColor(128, 128, 128);

/// Inputs for one figure.
pub struct Figure<'a> {
    pub records: &'a [PlayerRecord],
    pub stat: Stat,
    pub leaders: &'a [Leader],
    pub annotations: &'a [Annotation],
    /// Requested leaderboard size, used in the bar chart title.
    pub top_n: usize,
}

/// Render `figure` as an SVG file at `path`.
pub fn render_svg(figure: &Figure<'_>, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    render(&root, figure)?;
    root.present().map_err(StatsError::plot)?;
    Ok(())
}

/// Draw both panels side by side onto `root`.
pub fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> Result<()> {
    root.fill(&WHITE).map_err(StatsError::plot)?;
    let panels = root.split_evenly((1, 2));

    draw_leader_bars(&panels[0], figure)?;
    draw_efficiency_scatter(&panels[1], figure)?;
    Ok(())
}

fn draw_leader_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> Result<()> {
    let stat = figure.stat;
    let names: Vec<String> = figure.leaders.iter().map(|l| l.name.clone()).collect();
    let slots = names.len().max(1);

    let y_max = figure
        .leaders
        .iter()
        .map(|l| l.per_game)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Top {} Leaders: {}", figure.top_n, stat.per_game_label()),
            ("sans-serif", 20),
        )
        .margin(15)
        .x_label_area_size(130)
        .y_label_area_size(50)
        .build_cartesian_2d((0..slots as i32).into_segmented(), 0.0..y_top)
        .map_err(StatsError::plot)?;

    let label_for = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => names.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&label_for)
        // Quarter turn keeps long names from colliding.
        .x_label_style(
            FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
                .transform(FontTransform::Rotate90),
        )
        .y_desc(format!("{} / Game", stat))
        .draw()
        .map_err(StatsError::plot)?;

    chart
        .draw_series(figure.leaders.iter().enumerate().map(|(i, leader)| {
            let i = i as i32;
            // Zero-game rows rank first with an infinite rate; draw them full height.
            let height = match leader.per_game {
                v if v.is_finite() => v,
                v if v > 0.0 => y_top,
                _ => 0.0,
            };
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), height)],
                SKY_BLUE.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(StatsError::plot)?;

    Ok(())
}

/// Finite min..max of `values`, padded by 5% on each side.
pub fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return 0.0..1.0;
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}

fn label_style(reference: bool) -> TextStyle<'static> {
    if reference {
        FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Bold).color(&RED)
    } else {
        FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal).color(&BLACK)
    }
}

fn draw_efficiency_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure<'_>,
) -> Result<()> {
    let stat = figure.stat;
    let records = figure.records;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("Minutes Played vs. Total {}", stat), ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            padded_range(records.iter().map(|r| r.minutes)),
            padded_range(records.iter().map(|r| r.value(stat))),
        )
        .map_err(StatsError::plot)?;

    chart
        .configure_mesh()
        .x_desc("Minutes")
        .y_desc(stat.name())
        .draw()
        .map_err(StatsError::plot)?;

    chart
        .draw_series(
            records
                .iter()
                .map(|r| Circle::new((r.minutes, r.value(stat)), 3, ORANGE.mix(0.4).filled())),
        )
        .map_err(StatsError::plot)?;
    chart
        .draw_series(
            figure
                .annotations
                .iter()
                .filter(|a| a.reference)
                .map(|a| Circle::new((a.minutes, a.value), 6, RED.filled())),
        )
        .map_err(StatsError::plot)?;

    let plotting = chart.plotting_area();
    let (x_px, y_px) = plotting.get_pixel_range();
    let bounds = Rect::new(
        x_px.start as f64,
        y_px.start as f64,
        (x_px.end - x_px.start) as f64,
        (y_px.end - y_px.start) as f64,
    );
    let to_pixel = |x: f64, y: f64| -> Point {
        let (px, py) = plotting.map_coordinate(&(x, y));
        (px as f64, py as f64)
    };

    let visible: Vec<&Annotation> = figure
        .annotations
        .iter()
        .filter(|a| a.minutes.is_finite() && a.value.is_finite())
        .collect();
    let mut labels = Vec::with_capacity(visible.len());
    for a in &visible {
        let (w, h) = plotting
            .estimate_text_size(&a.name, &label_style(a.reference))
            .map_err(StatsError::plot)?;
        labels.push(LabelBox {
            anchor: to_pixel(a.minutes, a.value),
            size: (w as f64, h as f64),
        });
    }
    let points: Vec<Point> = records
        .iter()
        .map(|r| to_pixel(r.minutes, r.value(stat)))
        .collect();

    let placed = declutter(&labels, &points, bounds, &DeclutterOptions::default());
    debug!(
        labels = placed.len(),
        connectors = placed.iter().filter(|p| p.connector.is_some()).count(),
        "placed scatter labels"
    );

    let relative = |p: Point, anchor: Point| -> (i32, i32) {
        ((p.0 - anchor.0).round() as i32, (p.1 - anchor.1).round() as i32)
    };
    chart
        .draw_series(visible.iter().zip(&placed).filter_map(|(a, label)| {
            let (from, to) = label.connector?;
            let (barb_a, barb_b) = arrow_head(from, to, 6.0);
            let anchor = label.anchor;
            Some(
                EmptyElement::at((a.minutes, a.value))
                    + PathElement::new(
                        vec![relative(from, anchor), (0, 0)],
                        CONNECTOR_GRAY.stroke_width(1),
                    )
                    + PathElement::new(
                        vec![relative(barb_a, anchor), (0, 0), relative(barb_b, anchor)],
                        CONNECTOR_GRAY.stroke_width(1),
                    ),
            )
        }))
        .map_err(StatsError::plot)?;

    chart
        .draw_series(visible.iter().zip(&placed).map(|(a, label)| {
            EmptyElement::at((a.minutes, a.value))
                + Text::new(a.name.clone(), label.offset(), label_style(a.reference))
        }))
        .map_err(StatsError::plot)?;

    Ok(())
}
