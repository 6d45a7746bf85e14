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
use crate::geom::options::IndexOptions;
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::ring::Ring;
use crate::geom::shape::Geometry;

/// Polygon is an exterior ring with zero or more holes cut out of it.
///
/// The exterior boundary belongs to the polygon and so does every hole
/// boundary; only the open interior of a hole is removed. Holes are not
/// checked to lie inside the exterior or apart from each other.
#[derive(Clone, Debug)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Vec<Point>, holes: Vec<Vec<Point>>, indexed: bool) -> Self {
        Polygon {
            exterior: Ring::new(exterior, indexed),
            holes: holes.into_iter().map(|h| Ring::new(h, indexed)).collect(),
        }
    }

    /// Builds the exterior and each hole with its own index decision.
    pub fn with_options(exterior: Vec<Point>, holes: Vec<Vec<Point>>, opts: &IndexOptions) -> Self {
        Polygon {
            exterior: Ring::with_options(exterior, opts),
            holes: holes
                .into_iter()
                .map(|h| Ring::with_options(h, opts))
                .collect(),
        }
    }

    pub fn from_rings(exterior: Ring, holes: Vec<Ring>) -> Self {
        Polygon { exterior, holes }
    }

    pub fn from_coords(exterior: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Self {
        let to_points = |coords: &[(f64, f64)]| -> Vec<Point> { coords.iter().map(|&c| Point::from(c)).collect() };
        Polygon::with_options(
            to_points(exterior),
            holes.iter().map(|h| to_points(*h)).collect(),
            &IndexOptions::default(),
        )
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        Polygon {
            exterior: self.exterior.translate(dx, dy),
            holes: self.holes.iter().map(|h| h.translate(dx, dy)).collect(),
        }
    }

    pub fn clockwise(&self) -> bool {
        self.exterior.clockwise()
    }

    /// Returns the exterior area less the area of each hole.
    pub fn area(&self) -> f64 {
        self.exterior.area() - self.holes.iter().map(Ring::area).sum::<f64>()
    }

    /// Reports whether p is in the polygon, with the exterior boundary and
    /// every hole boundary counted as in when allow_boundary is set and as
    /// out otherwise.
    pub fn contains_point_with(&self, p: Point, allow_boundary: bool) -> bool {
        self.exterior.contains_point(p, allow_boundary)
            && !self.holes.iter().any(|h| h.contains_point(p, !allow_boundary))
    }
}

impl Geometry for Polygon {
    fn rect(&self) -> Rect {
        self.exterior.rect()
    }

    fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    fn num_points(&self) -> usize {
        self.exterior.num_points()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.contains_point_with(point, true)
    }

    fn intersects_point(&self, point: Point) -> bool {
        self.contains_point_with(point, true)
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        self.exterior.contains_rect(rect, true) && !self.holes.iter().any(|h| h.intersects_rect(rect, false))
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        self.exterior.intersects_rect(rect, true) && !self.holes.iter().any(|h| h.contains_rect(rect, false))
    }

    fn contains_line(&self, line: &Line) -> bool {
        if self.is_empty() || line.is_empty() || !self.rect().contains(&line.rect()) {
            return false;
        }
        let mut ok = true;
        line.scan(|seg| {
            ok = self.exterior.contains_segment(seg, true)
                && !self.holes.iter().any(|h| h.intersects_segment(seg, false));
            ok
        });
        ok
    }

    fn intersects_line(&self, line: &Line) -> bool {
        if self.is_empty() || line.is_empty() {
            return false;
        }
        line.search_iter(self.rect()).any(|item| {
            let seg = &item.segment;
            self.exterior.intersects_segment(seg, true)
                && !self.holes.iter().any(|h| h.contains_segment(seg, false))
        })
    }

    /// Any hole of self that reaches into the interior of o must sit inside
    /// one of o's own holes.
    fn contains_poly(&self, o: &Polygon) -> bool {
        if self.is_empty() || o.is_empty() || !self.exterior.contains_ring(&o.exterior, true) {
            return false;
        }
        self.holes.iter().all(|hole| {
            !hole.intersects_ring(&o.exterior, false) || o.holes.iter().any(|oh| oh.contains_ring(hole, true))
        })
    }

    fn intersects_poly(&self, o: &Polygon) -> bool {
        if self.is_empty() || o.is_empty() || !self.exterior.intersects_ring(&o.exterior, true) {
            return false;
        }
        !self.holes.iter().any(|h| h.contains_ring(&o.exterior, false))
            && !o.holes.iter().any(|h| h.contains_ring(&self.exterior, false))
    }
}
