//! Unit tests for label placement

use super::*;

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn label(x: f64, y: f64) -> LabelBox {
    LabelBox {
        anchor: (x, y),
        size: (80.0, 14.0),
    }
}

fn assert_no_overlaps(placed: &[PlacedLabel]) {
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            assert!(
                !a.rect.intersects(&b.rect),
                "labels overlap: {:?} and {:?}",
                a.rect,
                b.rect
            );
        }
    }
}

#[test]
fn test_lone_label_sits_next_to_anchor() {
    let options = DeclutterOptions::default();
    let placed = declutter(&[label(100.0, 200.0)], &[(100.0, 200.0)], bounds(), &options);

    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].rect, Rect::new(104.0, 184.0, 80.0, 14.0));
    assert_eq!(placed[0].offset(), (4, -16));
    assert!(placed[0].connector.is_none());
}

#[test]
fn test_stacked_labels_are_separated() {
    let labels = vec![label(300.0, 300.0), label(300.0, 300.0), label(302.0, 301.0)];
    let points = vec![(300.0, 300.0), (300.0, 300.0), (302.0, 301.0)];

    let placed = declutter(&labels, &points, bounds(), &DeclutterOptions::default());

    assert_eq!(placed.len(), 3);
    assert_no_overlaps(&placed);
}

#[test]
fn test_dense_cluster_is_separated() {
    let labels: Vec<_> = (0..10)
        .map(|i| label(400.0 + (i % 3) as f64 * 5.0, 300.0 + (i / 3) as f64 * 4.0))
        .collect();

    let placed = declutter(&labels, &[], bounds(), &DeclutterOptions::default());

    assert_no_overlaps(&placed);
    assert!(placed.iter().any(|p| p.connector.is_some()));
}

#[test]
fn test_labels_do_not_cover_points() {
    let labels = vec![label(100.0, 100.0)];
    // A marker right where the label would start.
    let points = vec![(100.0, 100.0), (110.0, 92.0)];

    let placed = declutter(&labels, &points, bounds(), &DeclutterOptions::default());

    for p in &points {
        assert!(!placed[0].rect.intersects(&Rect::around(*p, 3.0)));
    }
}

#[test]
fn test_labels_stay_in_bounds() {
    let b = bounds();
    let labels = vec![label(795.0, 5.0), label(795.0, 5.0), label(0.0, 599.0)];

    let placed = declutter(&labels, &[], b, &DeclutterOptions::default());

    for p in &placed {
        assert!(p.rect.x >= b.x && p.rect.right() <= b.right());
        assert!(p.rect.y >= b.y && p.rect.bottom() <= b.bottom());
    }
    assert_no_overlaps(&placed);
}

#[test]
fn test_connector_runs_from_label_to_anchor() {
    let options = DeclutterOptions {
        connector_threshold: 0.0,
        ..DeclutterOptions::default()
    };
    let placed = declutter(&[label(50.0, 50.0)], &[], bounds(), &options);

    let (start, end) = placed[0].connector.expect("connector");
    assert_eq!(end, (50.0, 50.0));
    assert_eq!(start, placed[0].rect.nearest_point((50.0, 50.0)));
}

#[test]
fn test_zero_iterations_still_settles_overlaps() {
    let options = DeclutterOptions {
        max_iterations: 0,
        ..DeclutterOptions::default()
    };
    let placed = declutter(&[label(10.0, 100.0), label(10.0, 100.0)], &[], bounds(), &options);

    assert_eq!(placed[0].rect, Rect::new(14.0, 84.0, 80.0, 14.0));
    assert_no_overlaps(&placed);
}

#[test]
fn test_label_flips_away_from_top_right_edge() {
    let placed = declutter(&[label(795.0, 5.0)], &[], bounds(), &DeclutterOptions::default());

    assert_eq!(placed[0].rect, Rect::new(711.0, 7.0, 80.0, 14.0));
    assert!(placed[0].connector.is_none());
}

/// Deterministic pseudo-random values in `[0, 1)`.
fn unit_sequence(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    }
}

fn assert_in_bounds(placed: &[PlacedLabel], b: &Rect) {
    for p in placed {
        assert!(p.rect.x >= b.x && p.rect.right() <= b.right(), "{:?}", p.rect);
        assert!(p.rect.y >= b.y && p.rect.bottom() <= b.bottom(), "{:?}", p.rect);
    }
}

/// Labels for the `n` highest points, i.e. the top scorers on a scatter.
fn top_labels(points: &[Point], n: usize) -> Vec<LabelBox> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
    sorted
        .into_iter()
        .take(n)
        .map(|anchor| LabelBox {
            anchor,
            size: (90.0, 14.0),
        })
        .collect()
}

#[test]
fn test_labels_separate_within_crowded_scatter() {
    let b = Rect::new(0.0, 0.0, 670.0, 500.0);
    let mut next = unit_sequence(7);
    // Totals grow with minutes, so the cloud runs bottom-left to top-right.
    let points: Vec<Point> = (0..450)
        .map(|_| {
            let t = next();
            let noise = next() - 0.5;
            let y = 480.0 - 440.0 * t + 120.0 * noise;
            (10.0 + 650.0 * t, y.clamp(2.0, 498.0))
        })
        .collect();
    let labels = top_labels(&points, 12);

    let placed = declutter(&labels, &points, b, &DeclutterOptions::default());

    assert_eq!(placed.len(), 12);
    assert_no_overlaps(&placed);
    assert_in_bounds(&placed, &b);
}

#[test]
fn test_labels_separate_within_dense_band() {
    let b = Rect::new(0.0, 0.0, 670.0, 500.0);
    let mut next = unit_sequence(42);
    let points: Vec<Point> = (0..500)
        .map(|_| (5.0 + 660.0 * next(), 230.0 + 40.0 * next()))
        .collect();
    let mut labels = top_labels(&points, 12);
    // Leaders also pile up in the top-right corner.
    labels.extend((0..4).map(|i| LabelBox {
        anchor: (660.0 - i as f64, 4.0 + i as f64),
        size: (90.0, 14.0),
    }));

    let placed = declutter(&labels, &points, b, &DeclutterOptions::default());

    assert_eq!(placed.len(), 16);
    assert_no_overlaps(&placed);
    assert_in_bounds(&placed, &b);
    for (p, l) in placed.iter().zip(&labels) {
        assert_eq!(p.anchor, l.anchor);
    }
}

#[test]
fn test_arrow_head_points_back_along_line() {
    let (a, b) = arrow_head((0.0, 0.0), (10.0, 0.0), 4.0);
    assert!(a.0 < 10.0 && b.0 < 10.0);
    assert!((a.1 + b.1).abs() < 1e-9);
    assert!(((a.0 - 10.0).hypot(a.1) - 4.0).abs() < 1e-9);
}
