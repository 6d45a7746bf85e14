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

use crate::geom::edge_crossings::{crossing_sign, on_segment, Crossing};
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment is a directed edge from a to b.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }

    /// Returns the bounding rect of the segment.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.a, self.b)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.b, self.a)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Segment {
        Segment::new(self.a.translate(dx, dy), self.b.translate(dx, dy))
    }

    /// Reports whether p lies exactly on the segment, endpoints included.
    pub fn contains_point(&self, p: Point) -> bool {
        on_segment(&p, &self.a, &self.b)
    }

    /// Reports whether both endpoints of o lie on this segment, which puts
    /// all of o on it. Direction is ignored.
    pub fn contains_segment(&self, o: &Segment) -> bool {
        self.contains_point(o.a) && self.contains_point(o.b)
    }

    /// Classifies how this segment meets o.
    pub fn crossing(&self, o: &Segment) -> Crossing {
        crossing_sign(&self.a, &self.b, &o.a, &o.b)
    }

    /// Reports whether the two segments share a point, touching included.
    pub fn intersects_segment(&self, o: &Segment) -> bool {
        self.crossing(o).intersects()
    }

    /// Reports whether the segment shares a point with the closed rect.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if !self.rect().intersects(rect) {
            return false;
        }
        if rect.contains_point(self.a) || rect.contains_point(self.b) {
            return true;
        }
        rect.edges().iter().any(|e| self.intersects_segment(e))
    }

    /// Returns the parameters [t0, t1] of the part of the segment that lies
    /// inside the closed rect, or None if they do not meet.
    fn clip(&self, rect: &Rect) -> Option<(f64, f64)> {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        for (p, q) in [
            (-dx, self.a.x - rect.min.x),
            (dx, rect.max.x - self.a.x),
            (-dy, self.a.y - rect.min.y),
            (dy, rect.max.y - self.a.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((t0, t1))
    }

    /// Reports whether any part of the segment passes through the interior of
    /// the rect. Running along a side or touching a corner does not count.
    ///
    /// A zero-area rect has no interior of its own; for a rect that collapses
    /// to a segment, a proper crossing of that segment counts instead.
    pub fn crosses_interior_of(&self, rect: &Rect) -> bool {
        if rect.is_empty() {
            return false;
        }
        if rect.is_degenerate() {
            if rect.min == rect.max {
                return false;
            }
            return self.crossing(&Segment::new(rect.min, rect.max)) == Crossing::Cross;
        }
        match self.clip(rect) {
            // The clipped piece is a chord of a convex region: either all of
            // its relative interior is inside the rect or none of it is.
            Some((t0, t1)) => rect.interior_contains_point(self.a.lerp(&self.b, (t0 + t1) / 2.0)),
            None => false,
        }
    }

    /// Returns the parameter of p along the segment, assuming p lies on it.
    pub(crate) fn param_of(&self, p: &Point) -> f64 {
        let d = self.b - self.a;
        let len2 = d.x * d.x + d.y * d.y;
        if len2 == 0.0 {
            return 0.0;
        }
        let v = *p - self.a;
        ((v.x * d.x + v.y * d.y) / len2).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}
