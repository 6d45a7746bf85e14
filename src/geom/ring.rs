// Copyright 2024 Jihyun Yu and contributors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::geom::edge_crossings::{orient, Crossing};
use crate::geom::error::GeomResult;
use crate::geom::options::IndexOptions;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::segment::Segment;
use crate::geom::segment_index::SearchIter;
use crate::geom::series::Series;

/// Ring is a closed boundary. The last point connects back to the first;
/// repeating the first point at the end is allowed and changes nothing.
///
/// Every predicate takes an `allow_boundary` flag. When it is true the
/// boundary itself belongs to the ring, when false only the open interior
/// does.
#[derive(Clone, Debug)]
pub struct Ring(Series);

impl Ring {
    /// Returns a ring over the points, with a segment tree when `indexed`.
    pub fn new(points: Vec<Point>, indexed: bool) -> Self {
        Ring(Series::new(points, true, indexed))
    }

    pub fn with_options(points: Vec<Point>, opts: &IndexOptions) -> Self {
        let indexed = opts.should_index(points.len());
        Ring(Series::new(points, true, indexed))
    }

    /// Returns a ring over the coordinate pairs using the default
    /// IndexOptions.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        Ring::with_options(points, &IndexOptions::default())
    }

    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    pub fn num_points(&self) -> usize {
        self.0.num_points()
    }

    /// Returns the i-th point as given at construction.
    ///
    /// # Panics
    ///
    /// Panics if i is out of range; see try_point_at.
    pub fn point_at(&self, i: usize) -> Point {
        self.0.point_at(i)
    }

    pub fn try_point_at(&self, i: usize) -> GeomResult<Point> {
        self.0.try_point_at(i)
    }

    pub fn rect(&self) -> Rect {
        self.0.rect()
    }

    /// A ring with fewer than two distinct effective points has no boundary
    /// segments and is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        self.0.is_indexed()
    }

    pub fn num_segments(&self) -> usize {
        self.0.num_segments()
    }

    /// # Panics
    ///
    /// Panics if i is not less than num_segments.
    pub fn segment_at(&self, i: usize) -> Segment {
        self.0.segment_at(i)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Ring {
        Ring(self.0.translate(dx, dy))
    }

    pub fn clockwise(&self) -> bool {
        self.0.clockwise()
    }

    /// Returns the enclosed area, whatever the winding.
    pub fn area(&self) -> f64 {
        self.0.signed_area().abs()
    }

    /// Returns the shoelace area, positive for counterclockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.0.signed_area()
    }

    /// Calls f with every boundary segment in order until f returns false.
    pub fn scan<F>(&self, f: F)
    where
        F: FnMut(&Segment) -> bool,
    {
        self.0.scan(f)
    }

    /// Calls f, in boundary order, with every segment whose bounding rect
    /// meets the query, until f returns false.
    pub fn search<F>(&self, query: Rect, f: F)
    where
        F: FnMut(&Segment, usize) -> bool,
    {
        self.0.search(query, f)
    }

    pub fn search_iter(&self, query: Rect) -> SearchIter<'_> {
        self.0.search_iter(query)
    }

    /// Reports whether the ring contains p, by counting boundary crossings
    /// of a ray cast from p toward +x.
    ///
    /// Only segments whose rect meets the ray are visited. An edge counts
    /// when exactly one of its endpoints lies strictly above the ray, so a
    /// vertex on the ray is counted once and horizontal edges never are. A
    /// point lying on any visited segment is reported as `allow_boundary`
    /// whatever the crossing parity.
    pub fn contains_point(&self, p: Point, allow_boundary: bool) -> bool {
        if self.is_empty() || !self.rect().contains_point(p) {
            return false;
        }
        let ray = Rect::from_coords(p.x, p.y, f64::INFINITY, p.y);
        let mut inside = false;
        let mut on_boundary = false;
        self.0.search(ray, |seg, _| {
            if seg.contains_point(p) {
                on_boundary = true;
                return false;
            }
            if (seg.a.y > p.y) != (seg.b.y > p.y) {
                let o = orient(&seg.a, &seg.b, &p);
                if (seg.b.y > seg.a.y && o > 0.0) || (seg.b.y < seg.a.y && o < 0.0) {
                    inside = !inside;
                }
            }
            true
        });
        if on_boundary {
            return allow_boundary;
        }
        inside
    }

    /// Walks the boundary near seg. Returns None when some boundary segment
    /// properly crosses seg, otherwise the sorted parameters along seg of
    /// every point where it touches the boundary.
    fn contacts(&self, seg: &Segment) -> Option<Vec<f64>> {
        let mut ts = Vec::new();
        let mut crossed = false;
        self.0.search(seg.rect(), |edge, _| {
            match seg.crossing(edge) {
                Crossing::Cross => {
                    crossed = true;
                    return false;
                }
                Crossing::Touch => {
                    for q in [edge.a, edge.b] {
                        if seg.contains_point(q) {
                            ts.push(seg.param_of(&q));
                        }
                    }
                    if edge.contains_point(seg.a) {
                        ts.push(0.0);
                    }
                    if edge.contains_point(seg.b) {
                        ts.push(1.0);
                    }
                }
                Crossing::DoNotCross => {}
            }
            true
        });
        if crossed {
            return None;
        }
        ts.sort_by(f64::total_cmp);
        ts.dedup();
        Some(ts)
    }

    /// Reports whether every point of seg lies in the ring.
    pub fn contains_segment(&self, seg: &Segment, allow_boundary: bool) -> bool {
        if self.is_empty() || !self.rect().contains(&seg.rect()) {
            return false;
        }
        if seg.is_degenerate() {
            return self.contains_point(seg.a, allow_boundary);
        }
        let ts = match self.contacts(seg) {
            Some(ts) => ts,
            None => return false,
        };
        if !allow_boundary && !ts.is_empty() {
            return false;
        }
        // Between two consecutive contacts seg is either wholly inside or
        // wholly outside, so one sample per piece decides it.
        samples(seg, &ts)
            .into_iter()
            .all(|p| self.contains_point(p, allow_boundary))
    }

    /// Reports whether seg shares at least one point with the ring.
    pub fn intersects_segment(&self, seg: &Segment, allow_boundary: bool) -> bool {
        if self.is_empty() || !self.rect().intersects(&seg.rect()) {
            return false;
        }
        if seg.is_degenerate() {
            return self.contains_point(seg.a, allow_boundary);
        }
        match self.contacts(seg) {
            None => true,
            Some(ts) => {
                if allow_boundary && !ts.is_empty() {
                    return true;
                }
                samples(seg, &ts)
                    .into_iter()
                    .any(|p| self.contains_point(p, allow_boundary))
            }
        }
    }

    /// Reports whether the whole rect lies in the ring.
    pub fn contains_rect(&self, rect: Rect, allow_boundary: bool) -> bool {
        if self.is_empty() || rect.is_empty() || !self.rect().contains(&rect) {
            return false;
        }
        if rect.is_degenerate() {
            return self.contains_segment(&Segment::new(rect.min, rect.max), allow_boundary);
        }
        if !rect
            .corners()
            .iter()
            .chain(std::iter::once(&rect.center()))
            .all(|&c| self.contains_point(c, allow_boundary))
        {
            return false;
        }
        let mut ok = true;
        self.0.search(rect, |seg, _| {
            ok = if allow_boundary {
                !seg.crosses_interior_of(&rect)
            } else {
                !seg.intersects_rect(&rect)
            };
            ok
        });
        ok
    }

    /// Reports whether the rect shares at least one point with the ring.
    pub fn intersects_rect(&self, rect: Rect, allow_boundary: bool) -> bool {
        if self.is_empty() || !self.rect().intersects(&rect) {
            return false;
        }
        if rect.is_degenerate() {
            return self.intersects_segment(&Segment::new(rect.min, rect.max), allow_boundary);
        }
        let mut hit = false;
        self.0.search(rect, |seg, _| {
            hit = seg.crosses_interior_of(&rect) || (allow_boundary && seg.intersects_rect(&rect));
            !hit
        });
        if hit {
            return true;
        }
        rect.corners()
            .iter()
            .chain(std::iter::once(&rect.center()))
            .any(|&c| self.contains_point(c, allow_boundary))
    }

    /// Reports whether the region bounded by o lies in this ring, checked
    /// segment by segment along o's boundary.
    pub fn contains_ring(&self, o: &Ring, allow_boundary: bool) -> bool {
        if o.is_empty() || !self.rect().contains(&o.rect()) {
            return false;
        }
        o.0.segments().all(|seg| self.contains_segment(seg, allow_boundary))
    }

    /// Reports whether the two rings share at least one point.
    pub fn intersects_ring(&self, o: &Ring, allow_boundary: bool) -> bool {
        if self.is_empty() || o.is_empty() || !self.rect().intersects(&o.rect()) {
            return false;
        }
        if o.0.segments().any(|seg| self.intersects_segment(seg, allow_boundary)) {
            return true;
        }
        // Catches self lying wholly inside o.
        self.0
            .search_iter(o.rect())
            .any(|item| o.intersects_segment(&item.segment, allow_boundary))
    }
}

/// Returns the endpoints of seg plus one point inside each piece left
/// between consecutive contact parameters.
fn samples(seg: &Segment, ts: &[f64]) -> Vec<Point> {
    let mut out = vec![seg.a, seg.b];
    let mut prev = 0.0;
    for &t in ts.iter().chain(std::iter::once(&1.0)) {
        if t > prev {
            out.push(seg.a.lerp(&seg.b, (prev + t) / 2.0));
            prev = t;
        }
    }
    out
}
