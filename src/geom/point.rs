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
use crate::geom::polygon::Polygon;
use crate::geom::rect::Rect;
use crate::geom::shape::Geometry;
use cgmath::{Point2, Vector2};
use std::fmt;
use std::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point is a location in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns a new point offset by (dx, dy).
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Returns the point halfway between self and o.
    pub fn midpoint(&self, o: &Point) -> Point {
        Point::new((self.x + o.x) / 2.0, (self.y + o.y) / 2.0)
    }

    /// Returns the point at parameter t along the segment self -> o.
    pub(crate) fn lerp(&self, o: &Point, t: f64) -> Point {
        Point::new(self.x + (o.x - self.x) * t, self.y + (o.y - self.y) * t)
    }

    pub(crate) fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Point) -> Self::Output {
        self.to_vector() - rhs.to_vector()
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Geometry for Point {
    fn rect(&self) -> Rect {
        Rect::new(*self, *self)
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn num_points(&self) -> usize {
        1
    }

    fn contains_point(&self, point: Point) -> bool {
        *self == point
    }

    fn intersects_point(&self, point: Point) -> bool {
        *self == point
    }

    fn contains_rect(&self, rect: Rect) -> bool {
        rect.min == *self && rect.max == *self
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        rect.contains_point(*self)
    }

    fn contains_line(&self, line: &Line) -> bool {
        !line.is_empty() && line.points().iter().all(|p| p == self)
    }

    fn intersects_line(&self, line: &Line) -> bool {
        line.contains_point(*self)
    }

    fn contains_poly(&self, poly: &Polygon) -> bool {
        !poly.is_empty() && poly.exterior().points().iter().all(|p| p == self)
    }

    fn intersects_poly(&self, poly: &Polygon) -> bool {
        poly.intersects_point(*self)
    }
}
