//! Greedy label repulsion for scatter plot annotations.
//!
//! Labels start just above and to the right of their anchor point, flipped to
//! the left or below when that would leave the plot area. Each iteration
//! splits the shortest separating move between every overlapping label pair,
//! then moves labels off marker points as long as the move does not land on
//! another label, and clamps them back into the plot area. A final settling
//! pass moves any label still touching an earlier one to the nearest free
//! slot. Labels that end up away from their anchor get a connector line back
//! to it.
//!
//! All coordinates are pixels with `y` growing downward.

#[cfg(test)]
mod tests;

pub type Point = (f64, f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of half-width `r` centred on `p`.
    pub fn around(p: Point, r: f64) -> Self {
        Self::new(p.0 - r, p.1 - r, 2.0 * r, 2.0 * r)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.penetration(other, 0.0).is_some()
    }

    /// Overlap depth on each axis, with `pad` extra spacing required between
    /// the two boxes. `None` when they are at least `pad` apart.
    fn penetration(&self, other: &Rect, pad: f64) -> Option<(f64, f64)> {
        let ox = self.right().min(other.right()) - self.x.max(other.x) + pad;
        let oy = self.bottom().min(other.bottom()) - self.y.max(other.y) + pad;
        (ox > 0.0 && oy > 0.0).then_some((ox, oy))
    }

    /// Smallest translation that moves `self` at least `pad` clear of `other`.
    fn escape(&self, other: &Rect, pad: f64) -> Option<(f64, f64)> {
        self.penetration(other, pad)?;
        let candidates = [
            (0.0, other.y - pad - self.bottom()),
            (0.0, other.bottom() + pad - self.y),
            (other.x - pad - self.right(), 0.0),
            (other.right() + pad - self.x, 0.0),
        ];
        candidates
            .into_iter()
            .min_by(|a, b| (a.0.abs() + a.1.abs()).total_cmp(&(b.0.abs() + b.1.abs())))
    }

    fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn clamp_into(&mut self, bounds: &Rect) {
        self.x = self.x.min(bounds.right() - self.w).max(bounds.x);
        self.y = self.y.min(bounds.bottom() - self.h).max(bounds.y);
    }

    /// Closest point on the rectangle's edge or interior to `p`.
    pub fn nearest_point(&self, p: Point) -> Point {
        (p.0.clamp(self.x, self.right()), p.1.clamp(self.y, self.bottom()))
    }
}

/// A label to place: the data point it describes and its rendered size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub anchor: Point,
    pub size: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclutterOptions {
    pub max_iterations: usize,
    /// Minimum spacing kept between two labels.
    pub padding: f64,
    /// Half-width of the box each marker point occupies.
    pub point_radius: f64,
    /// Initial label offset from its anchor, right and up.
    pub offset: (f64, f64),
    /// Labels further than this from their anchor get a connector.
    pub connector_threshold: f64,
    /// Grid spacing of the free-slot search in the settling pass.
    pub search_step: f64,
    /// Rings searched for a slot clear of markers as well as labels.
    pub marker_search_rings: i32,
}

impl Default for DeclutterOptions {
    fn default() -> Self {
        Self {
            max_iterations: 300,
            padding: 2.0,
            point_radius: 3.0,
            offset: (4.0, 2.0),
            connector_threshold: 12.0,
            search_step: 4.0,
            marker_search_rings: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub anchor: Point,
    pub rect: Rect,
    /// Line from the label box to the anchor, when the label moved away.
    pub connector: Option<(Point, Point)>,
}

impl PlacedLabel {
    /// Top-left corner of the label relative to its anchor.
    pub fn offset(&self) -> (i32, i32) {
        (
            (self.rect.x - self.anchor.0).round() as i32,
            (self.rect.y - self.anchor.1).round() as i32,
        )
    }
}

/// Place `labels` inside `bounds` so that they overlap neither each other nor,
/// where there is room, any of `points`. Label separation always wins over
/// marker avoidance.
pub fn declutter(
    labels: &[LabelBox],
    points: &[Point],
    bounds: Rect,
    options: &DeclutterOptions,
) -> Vec<PlacedLabel> {
    let mut rects: Vec<Rect> = labels
        .iter()
        .map(|l| initial_rect(l, &bounds, options.offset))
        .collect();
    let obstacles: Vec<Rect> = points
        .iter()
        .map(|p| Rect::around(*p, options.point_radius))
        .collect();

    for _ in 0..options.max_iterations {
        let mut moved = false;

        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                let Some((dx, dy)) = rects[i].escape(&rects[j], options.padding) else {
                    continue;
                };
                rects[i].translate(dx / 2.0, dy / 2.0);
                rects[j].translate(-dx / 2.0, -dy / 2.0);
                moved = true;
            }
        }

        for i in 0..rects.len() {
            rects[i].clamp_into(&bounds);
            for obstacle in &obstacles {
                let Some((dx, dy)) = rects[i].escape(obstacle, 0.0) else {
                    continue;
                };
                let mut candidate = rects[i];
                candidate.translate(dx, dy);
                candidate.clamp_into(&bounds);
                let lands_clear = clear_of_labels(&candidate, &rects, i, options.padding);
                if candidate != rects[i] && lands_clear {
                    rects[i] = candidate;
                    moved = true;
                }
            }
        }

        if !moved {
            break;
        }
    }

    settle(&mut rects, &obstacles, &bounds, options);

    labels
        .iter()
        .zip(rects)
        .map(|(label, rect)| {
            let near = rect.nearest_point(label.anchor);
            let dist = (near.0 - label.anchor.0).hypot(near.1 - label.anchor.1);
            PlacedLabel {
                anchor: label.anchor,
                rect,
                connector: (dist > options.connector_threshold).then_some((near, label.anchor)),
            }
        })
        .collect()
}

/// Above-right of the anchor, flipped left or below when that side of the
/// plot area is too close.
fn initial_rect(label: &LabelBox, bounds: &Rect, offset: (f64, f64)) -> Rect {
    let (w, h) = label.size;
    let (ax, ay) = label.anchor;
    let mut x = ax + offset.0;
    if x + w > bounds.right() {
        x = ax - offset.0 - w;
    }
    let mut y = ay - offset.1 - h;
    if y < bounds.y {
        y = ay + offset.1;
    }
    let mut rect = Rect::new(x, y, w, h);
    rect.clamp_into(bounds);
    rect
}

fn clear_of_labels(rect: &Rect, rects: &[Rect], skip: usize, pad: f64) -> bool {
    rects
        .iter()
        .enumerate()
        .all(|(j, other)| j == skip || rect.penetration(other, pad).is_none())
}

/// Move every label that still touches an earlier one to the nearest free
/// grid slot, preferring slots that also keep clear of markers.
fn settle(rects: &mut [Rect], obstacles: &[Rect], bounds: &Rect, options: &DeclutterOptions) {
    let step = options.search_step.max(1.0);
    let rings = (bounds.w.max(bounds.h) / step).ceil() as i32;

    for i in 0..rects.len() {
        let (settled, rest) = rects.split_at_mut(i);
        let current = rest[0];
        let free = |r: &Rect| {
            settled
                .iter()
                .all(|other| r.penetration(other, options.padding).is_none())
        };
        if free(&current) {
            continue;
        }
        let off_markers = |r: &Rect| obstacles.iter().all(|o| !r.intersects(o));

        let near_rings = options.marker_search_rings.min(rings);
        let slot = nearest_slot(current, bounds, step, near_rings, |r| free(r) && off_markers(r))
            .or_else(|| nearest_slot(current, bounds, step, rings, |r| free(r)));
        if let Some(slot) = slot {
            rest[0] = slot;
        }
    }
}

fn nearest_slot(
    start: Rect,
    bounds: &Rect,
    step: f64,
    rings: i32,
    accept: impl Fn(&Rect) -> bool,
) -> Option<Rect> {
    (0..=rings)
        .flat_map(ring_offsets)
        .map(|(dx, dy)| {
            let mut r = start;
            r.translate(dx as f64 * step, dy as f64 * step);
            r
        })
        .find(|r| bounds.contains(r) && accept(r))
}

/// Grid offsets at Chebyshev distance `ring`, nearest first.
fn ring_offsets(ring: i32) -> Vec<(i32, i32)> {
    let mut offsets: Vec<(i32, i32)> = (-ring..=ring)
        .flat_map(|dx| (-ring..=ring).map(move |dy| (dx, dy)))
        .filter(|(dx, dy)| dx.abs().max(dy.abs()) == ring)
        .collect();
    offsets.sort_by_key(|(dx, dy)| dx * dx + dy * dy);
    offsets
}

/// The two barb end points of an arrow head at `tip` pointing away from `from`.
pub fn arrow_head(from: Point, tip: Point, length: f64) -> (Point, Point) {
    let angle = (tip.1 - from.1).atan2(tip.0 - from.0);
    let spread = std::f64::consts::FRAC_PI_6;
    let barb = |a: f64| (tip.0 - length * a.cos(), tip.1 - length * a.sin());
    (barb(angle - spread), barb(angle + spread))
}
