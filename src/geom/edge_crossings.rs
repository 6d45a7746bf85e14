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

use crate::geom::point::Point;

/// A Crossing indicates how two edges meet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Crossing {
    /// The edges cross at a single point interior to both of them.
    Cross,
    /// The edges share at least one point, but not as a proper crossing:
    /// an endpoint of one lies on the other, or they overlap colinearly.
    Touch,
    /// The edges have no point in common.
    DoNotCross,
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crossing::Cross => write!(f, "Cross"),
            Crossing::Touch => write!(f, "Touch"),
            Crossing::DoNotCross => write!(f, "DoNotCross"),
        }
    }
}

impl Crossing {
    /// Reports whether the edges have any point in common.
    pub fn intersects(self) -> bool {
        self != Crossing::DoNotCross
    }
}

/// Returns twice the signed area of the triangle ABC: positive when C lies to
/// the left of the directed line AB, negative to the right and zero when the
/// three points are colinear.
pub fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
    (*b - *a).perp_dot(*c - *a)
}

/// Reports whether p lies in the closed bounding box of the segment AB.
/// Combined with a zero orientation this is the on-segment test.
pub(crate) fn in_span(p: &Point, a: &Point, b: &Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Reports whether p lies exactly on the closed segment AB.
pub fn on_segment(p: &Point, a: &Point, b: &Point) -> bool {
    in_span(p, a, b) && orient(a, b, p) == 0.0
}

fn opposite_signs(x: f64, y: f64) -> bool {
    (x > 0.0 && y < 0.0) || (x < 0.0 && y > 0.0)
}

/// crossing_sign reports how the edge AB meets the edge CD.
///
/// Properties of crossing_sign:
///
///	(1) crossing_sign(b,a,c,d) == crossing_sign(a,b,c,d)
///	(2) crossing_sign(c,d,a,b) == crossing_sign(a,b,c,d)
///	(3) crossing_sign(a,b,c,d) == Touch if a==c, a==d, b==c or b==d
///	(4) crossing_sign(a,b,c,d) is never Cross if a==b or c==d
pub fn crossing_sign(a: &Point, b: &Point, c: &Point, d: &Point) -> Crossing {
    let abc = orient(a, b, c);
    let abd = orient(a, b, d);
    let cda = orient(c, d, a);
    let cdb = orient(c, d, b);

    if opposite_signs(abc, abd) && opposite_signs(cda, cdb) {
        return Crossing::Cross;
    }

    if (abc == 0.0 && in_span(c, a, b))
        || (abd == 0.0 && in_span(d, a, b))
        || (cda == 0.0 && in_span(a, c, d))
        || (cdb == 0.0 && in_span(b, c, d))
    {
        return Crossing::Touch;
    }

    Crossing::DoNotCross
}
