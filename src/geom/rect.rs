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

use crate::geom::line::Line;
use crate::geom::point::Point;
use crate::geom::polygon::Polygon;
use crate::geom::ring::Ring;
use crate::geom::segment::Segment;
use crate::geom::shape::Geometry;
use std::f64;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rect is an axis-aligned rectangle, closed on all sides.
///
/// A rect with `min == max` is a single point and a rect with zero width or
/// zero height is a horizontal or vertical segment; both are valid query
/// rectangles. The special empty rect (see Rect::empty) has min at +inf and
/// max at -inf, so it never intersects or contains anything and is the
/// identity for union.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Default for Rect {
    fn default() -> Self {
        Rect::empty()
    }
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Rect { min, max }
    }

    pub const fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Returns the smallest rect containing both points, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Rect::from_coords(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Returns the empty rect.
    pub const fn empty() -> Self {
        Rect::from_coords(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY)
    }

    /// Reports whether the rect owns no points at all.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Reports whether the rect has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && (self.min.x == self.max.x || self.min.y == self.max.y)
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    /// Returns the four corners, counterclockwise from min.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Returns the four sides as segments joining consecutive corners.
    pub fn edges(&self) -> [Segment; 4] {
        let c = self.corners();
        [
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }

    /// Returns the smallest rect containing both rects.
    pub fn union(&self, o: &Rect) -> Rect {
        Rect::from_coords(
            self.min.x.min(o.min.x),
            self.min.y.min(o.min.y),
            self.max.x.max(o.max.x),
            self.max.y.max(o.max.y),
        )
    }

    /// Returns the smallest rect containing self and p.
    pub fn expand(&self, p: Point) -> Rect {
        self.union(&Rect::new(p, p))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        if self.is_empty() {
            return *self;
        }
        Rect::new(self.min.translate(dx, dy), self.max.translate(dx, dy))
    }

    /// Reports whether the rect contains the point; the sides count.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Reports whether the point lies strictly inside the rect.
    pub fn interior_contains_point(&self, p: Point) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Reports whether the two rects share at least one point. Touching
    /// sides or corners count.
    pub fn intersects(&self, o: &Rect) -> bool {
        self.min.x <= o.max.x && self.max.x >= o.min.x && self.min.y <= o.max.y && self.max.y >= o.min.y
    }

    /// Reports whether o lies within self.
    pub fn contains(&self, o: &Rect) -> bool {
        !o.is_empty()
            && o.min.x >= self.min.x
            && o.max.x <= self.max.x
            && o.min.y >= self.min.y
            && o.max.y <= self.max.y
    }

    /// Reports whether every point of the ring lies within the rect.
    pub fn contains_ring(&self, ring: &Ring) -> bool {
        !ring.is_empty() && self.contains(&ring.rect())
    }

    /// Reports whether the rect intersects the ring's boundary or interior.
    pub fn intersects_ring(&self, ring: &Ring) -> bool {
        ring.intersects_rect(*self, true)
    }
}

impl Geometry for Rect {
    fn rect(&self) -> Rect {
        *self
    }

    fn is_empty(&self) -> bool {
        Rect::is_empty(self)
    }

    fn num_points(&self) -> usize {
        if Rect::is_empty(self) {
            0
        } else {
            4
        }
    }

    fn contains_point(&self, point: Point) -> bool {
        Rect::contains_point(self, point)
    }

    fn intersects_point(&self, point: Point) -> bool {
        Rect::contains_point(self, point)
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        self.contains(&rect)
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        self.intersects(&rect)
    }

    fn contains_line(&self, line: &Line) -> bool {
        !line.is_empty() && self.contains(&line.rect())
    }

    fn intersects_line(&self, line: &Line) -> bool {
        line.intersects_rect(*self)
    }

    fn contains_poly(&self, poly: &Polygon) -> bool {
        !poly.is_empty() && self.contains(&poly.rect())
    }

    fn intersects_poly(&self, poly: &Polygon) -> bool {
        poly.intersects_rect(*self)
    }
}
