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
use lazy_static::lazy_static;
use std::f64::consts::PI;

pub const RECTANGLE: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
pub const NOT_CLOSED: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
pub const PENTAGON: &[(f64, f64)] = &[(2.0, 2.0), (8.0, 0.0), (10.0, 6.0), (5.0, 10.0), (0.0, 6.0), (2.0, 2.0)];
pub const TRIANGLE: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0), (0.0, 0.0)];
pub const OCTAGON: &[(f64, f64)] = &[
    (3.0, 0.0),
    (7.0, 0.0),
    (10.0, 3.0),
    (10.0, 7.0),
    (7.0, 10.0),
    (3.0, 10.0),
    (0.0, 7.0),
    (0.0, 3.0),
    (3.0, 0.0),
];
/// Square with the lower left quarter cut away.
pub const CONCAVE: &[(f64, f64)] = &[
    (5.0, 0.0),
    (10.0, 0.0),
    (10.0, 10.0),
    (0.0, 10.0),
    (0.0, 5.0),
    (5.0, 5.0),
    (5.0, 0.0),
];
pub const BOWTIE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (5.0, 4.0),
    (10.0, 0.0),
    (10.0, 10.0),
    (5.0, 6.0),
    (0.0, 10.0),
    (0.0, 0.0),
];

// Open paths, every pair of which meets somewhere.
pub const U1: &[(f64, f64)] = &[(0.0, 10.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
pub const U2: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
pub const U3: &[(f64, f64)] = &[(10.0, 0.0), (0.0, 0.0), (0.0, 10.0), (10.0, 10.0)];
pub const U4: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
pub const V1: &[(f64, f64)] = &[(0.0, 10.0), (5.0, 0.0), (10.0, 10.0)];
pub const V2: &[(f64, f64)] = &[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)];
pub const V3: &[(f64, f64)] = &[(0.0, 0.0), (10.0, 5.0), (0.0, 10.0)];
pub const V4: &[(f64, f64)] = &[(10.0, 0.0), (0.0, 5.0), (10.0, 10.0)];

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

/// Radius of the star outline at angle theta. Always at least 5.5, so the
/// outline is a simple polygon that is star-shaped around the origin.
pub fn star_radius(theta: f64) -> f64 {
    10.0 + 3.0 * (7.0 * theta).sin() + 1.5 * (31.0 * theta).sin()
}

fn star(n: usize) -> Vec<Point> {
    let mut pts: Vec<Point> = (0..n)
        .map(|i| {
            let theta = 2.0 * PI * (i as f64) / (n as f64);
            let r = star_radius(theta);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    pts.push(pts[0]);
    pts
}

lazy_static! {
    /// A closed wiggly outline with a few thousand vertices, standing in
    /// for a real-world boundary.
    pub static ref STAR: Vec<Point> = star(5000);
}
