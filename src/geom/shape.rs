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

use std::convert::TryInto;

use crate::geom::line::Line;
use crate::geom::point::Point;
use crate::geom::polygon::Polygon;
use crate::geom::rect::Rect;

/// Geometry is the containment and intersection interface shared by every
/// shape, with one method per kind of target.
///
/// "Contains" means every point of the target lies in the shape; boundaries
/// count. "Intersects" means the two share at least one point. An empty
/// shape contains nothing, intersects nothing and is contained by nothing.
#[enum_delegate::register]
pub trait Geometry {
    /// Returns the bounding rect, or the empty rect for an empty shape with
    /// no points.
    fn rect(&self) -> Rect;
    fn is_empty(&self) -> bool;
    fn num_points(&self) -> usize;

    fn contains_point(&self, point: Point) -> bool;
    fn intersects_point(&self, point: Point) -> bool;
    fn contains_rect(&self, rect: Rect) -> bool;
    fn intersects_rect(&self, rect: Rect) -> bool;
    fn contains_line(&self, line: &Line) -> bool;
    fn intersects_line(&self, line: &Line) -> bool;
    fn contains_poly(&self, poly: &Polygon) -> bool;
    fn intersects_poly(&self, poly: &Polygon) -> bool;
}

/// Shape is any one of the concrete geometries.
#[enum_delegate::implement(Geometry)]
#[derive(Clone, Debug)]
pub enum Shape {
    Point(Point),
    Rect(Rect),
    Line(Line),
    Polygon(Polygon),
}

impl Shape {
    pub fn contains(&self, other: &Shape) -> bool {
        match other {
            Shape::Point(p) => self.contains_point(*p),
            Shape::Rect(r) => self.contains_rect(*r),
            Shape::Line(l) => self.contains_line(l),
            Shape::Polygon(p) => self.contains_poly(p),
        }
    }

    pub fn intersects(&self, other: &Shape) -> bool {
        match other {
            Shape::Point(p) => self.intersects_point(*p),
            Shape::Rect(r) => self.intersects_rect(*r),
            Shape::Line(l) => self.intersects_line(l),
            Shape::Polygon(p) => self.intersects_poly(p),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(p.translate(dx, dy)),
            Shape::Rect(r) => Shape::Rect(r.translate(dx, dy)),
            Shape::Line(l) => Shape::Line(l.translate(dx, dy)),
            Shape::Polygon(p) => Shape::Polygon(p.translate(dx, dy)),
        }
    }
}
