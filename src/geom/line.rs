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

use crate::geom::edge_crossings::on_segment;
use crate::geom::error::GeomResult;
use crate::geom::options::IndexOptions;
use crate::geom::point::Point;
use crate::geom::polygon::Polygon;
use crate::geom::rect::Rect;
use crate::geom::segment::Segment;
use crate::geom::segment_index::SearchIter;
use crate::geom::series::Series;
use crate::geom::shape::Geometry;
use std::collections::HashSet;

/// Line is an open path through its points. Unlike Ring it is never
/// closed implicitly, so a Line with fewer than two points has no segments
/// and is empty.
#[derive(Clone, Debug)]
pub struct Line(Series);

impl Line {
    pub fn new(points: Vec<Point>, indexed: bool) -> Self {
        Line(Series::new(points, false, indexed))
    }

    pub fn with_options(points: Vec<Point>, opts: &IndexOptions) -> Self {
        let indexed = opts.should_index(points.len());
        Line(Series::new(points, false, indexed))
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let points: Vec<Point> = coords.iter().map(|&c| Point::from(c)).collect();
        Line::with_options(points, &IndexOptions::default())
    }

    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    /// # Panics
    ///
    /// Panics if i is out of range; see try_point_at.
    pub fn point_at(&self, i: usize) -> Point {
        self.0.point_at(i)
    }

    pub fn try_point_at(&self, i: usize) -> GeomResult<Point> {
        self.0.try_point_at(i)
    }

    pub fn is_indexed(&self) -> bool {
        self.0.is_indexed()
    }

    pub fn num_segments(&self) -> usize {
        self.0.num_segments()
    }

    pub fn segment_at(&self, i: usize) -> Segment {
        self.0.segment_at(i)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Line {
        Line(self.0.translate(dx, dy))
    }

    /// Reports whether the path winds clockwise, reading it as if its last
    /// point joined back to its first.
    pub fn clockwise(&self) -> bool {
        self.0.clockwise()
    }

    pub fn scan<F>(&self, f: F)
    where
        F: FnMut(&Segment) -> bool,
    {
        self.0.scan(f)
    }

    pub fn search<F>(&self, query: Rect, f: F)
    where
        F: FnMut(&Segment, usize) -> bool,
    {
        self.0.search(query, f)
    }

    pub fn search_iter(&self, query: Rect) -> SearchIter<'_> {
        self.0.search_iter(query)
    }

    /// Follows seg along this path. `from` holds the segments the walk may
    /// currently be on, each of which contains seg.a. Returns the segments
    /// the walk may be on once it reaches seg.b.
    ///
    /// The walk can only leave a segment through one of its own endpoints,
    /// onto the previous or next segment, and only at a point of seg.
    fn advance(&self, from: &[usize], seg: &Segment) -> Vec<usize> {
        let n = self.0.num_segments();
        let mut next = Vec::new();
        let mut seen = HashSet::new();

        // The position is seg.a, or the path vertex with the given index.
        let mut work: Vec<(usize, Option<usize>)> = from.iter().map(|&k| (k, None)).collect();
        while let Some((k, at)) = work.pop() {
            if !seen.insert((k, at)) {
                continue;
            }
            let host = self.0.segment_at(k);
            let pos = at.map_or(seg.a, |v| self.0.point_at(v));

            if host.contains_point(seg.b) && !next.contains(&k) {
                next.push(k);
            }
            if host.a == pos && k > 0 {
                work.push((k - 1, at));
            }
            if host.b == pos && k + 1 < n {
                work.push((k + 1, at));
            }
            for (v, end) in [(k, host.a), (k + 1, host.b)] {
                if end != pos && on_segment(&end, &pos, &seg.b) {
                    work.push((k, Some(v)));
                }
            }
        }
        next
    }
}

impl Geometry for Line {
    fn rect(&self) -> Rect {
        self.0.rect()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn num_points(&self) -> usize {
        self.0.num_points()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.0
            .search_iter(Rect::new(point, point))
            .any(|item| item.segment.contains_point(point))
    }

    fn intersects_point(&self, point: Point) -> bool {
        self.contains_point(point)
    }

    /// A line has no area, so only a rect collapsed to a point or to a
    /// horizontal or vertical segment can lie on it.
    fn contains_rect(&self, rect: Rect) -> bool {
        if rect.is_empty() || (rect.width() > 0.0 && rect.height() > 0.0) {
            return false;
        }
        self.contains_line(&Line::new(vec![rect.min, rect.max], false))
    }

    fn intersects_rect(&self, rect: Rect) -> bool {
        self.0
            .search_iter(rect)
            .any(|item| item.segment.intersects_rect(&rect))
    }

    /// Reports whether other can be traced by walking along this path,
    /// forward or back and as many times over as needed, without leaving it.
    fn contains_line(&self, other: &Line) -> bool {
        if self.is_empty() || other.is_empty() || !self.rect().contains(&other.rect()) {
            return false;
        }
        let start = other.0.point_at(0);
        let mut states: Vec<usize> = self
            .0
            .search_iter(Rect::new(start, start))
            .filter(|item| item.segment.contains_point(start))
            .map(|item| item.index)
            .collect();
        for seg in other.0.segments() {
            if states.is_empty() {
                return false;
            }
            states = self.advance(&states, seg);
        }
        !states.is_empty()
    }

    fn intersects_line(&self, other: &Line) -> bool {
        if self.is_empty() || other.is_empty() || !self.rect().intersects(&other.rect()) {
            return false;
        }
        self.0.search_iter(other.rect()).any(|item| {
            other
                .0
                .search_iter(item.rect)
                .any(|o| item.segment.intersects_segment(&o.segment))
        })
    }

    /// A line can only hold a polygon whose exterior encloses no area, by
    /// containing the exterior's closed path.
    fn contains_poly(&self, poly: &Polygon) -> bool {
        if self.is_empty() || poly.is_empty() {
            return false;
        }
        let exterior = poly.exterior();
        if exterior.signed_area() != 0.0 {
            return false;
        }
        let mut path = exterior.points().to_vec();
        if path.first() != path.last() {
            path.push(path[0]);
        }
        self.contains_line(&Line::new(path, false))
    }

    fn intersects_poly(&self, poly: &Polygon) -> bool {
        poly.intersects_line(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::test_util::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn line(coords: &[(f64, f64)], indexed: bool) -> Line {
        Line::new(points(coords), indexed)
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn r(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rect {
        Rect::from_coords(min_x, min_y, max_x, max_y)
    }

    #[rstest]
    fn test_line_new(#[values(true, false)] indexed: bool) {
        let l = line(U1, indexed);
        assert!(!l.is_empty());
        assert_eq!(l.num_points(), 4);
        assert_eq!(l.num_segments(), 3);
        assert!(line(&[], indexed).is_empty());
        assert!(line(&[(5.0, 0.0)], indexed).is_empty());
        assert_eq!(line(&[(5.0, 0.0)], indexed).num_points(), 1);
    }

    #[test]
    fn test_line_translate() {
        let ln1 = Line::from_coords(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
        let ln2 = ln1.translate(7.0, 8.0);
        assert_eq!(ln1.num_points(), ln2.num_points());
        for i in 0..ln2.num_points() {
            assert_eq!(ln2.point_at(i), ln1.point_at(i).translate(7.0, 8.0));
        }
        assert_eq!(ln2.translate(-7.0, -8.0).points(), ln1.points());
    }

    #[rstest]
    fn test_line_contains_point(#[values(true, false)] indexed: bool) {
        let u1 = line(U1, indexed);
        assert!(u1.contains_point(p(0.0, 0.0)));
        assert!(u1.contains_point(p(10.0, 10.0)));
        assert!(u1.contains_point(p(0.0, 5.0)));
        assert!(!u1.contains_point(p(5.0, 5.0)));

        let v1 = line(V1, indexed);
        for (pt, want) in [
            (p(0.0, 10.0), true),
            (p(0.0, 0.0), false),
            (p(5.0, 0.0), true),
            (p(2.5, 5.0), true),
        ] {
            assert_eq!(v1.contains_point(pt), want, "{}", pt);
            assert_eq!(v1.intersects_point(pt), want, "{}", pt);
        }
    }

    #[rstest]
    fn test_line_contains_rect(#[values(true, false)] indexed: bool) {
        let v1 = line(V1, indexed);
        assert!(!v1.contains_rect(r(0.0, 0.0, 10.0, 10.0)));
        assert!(v1.contains_rect(r(0.0, 10.0, 0.0, 10.0)));
        assert!(!v1.contains_rect(Rect::empty()));
        let u1 = line(U1, indexed);
        assert!(u1.contains_rect(r(0.0, 0.0, 0.0, 10.0)));
        assert!(u1.contains_rect(r(0.0, 0.0, 10.0, 0.0)));
        assert!(!u1.contains_rect(r(0.0, 0.0, 11.0, 0.0)));
    }

    #[rstest]
    fn test_line_never_contains_area(#[values(true, false)] indexed: bool) {
        let mut rng = StdRng::seed_from_u64(3);
        let lines = [line(U1, indexed), line(V3, indexed), Line::new(STAR.clone(), indexed)];
        for _ in 0..500 {
            let x = rng.gen_range(-15.0..15.0);
            let y = rng.gen_range(-15.0..15.0);
            let rect = r(x, y, x + rng.gen_range(1e-9..5.0), y + rng.gen_range(1e-9..5.0));
            for l in &lines {
                assert!(!l.contains_rect(rect));
            }
        }
    }

    #[rstest]
    fn test_line_intersects_rect(#[values(true, false)] indexed: bool) {
        let v1 = line(V1, indexed);
        assert!(v1.intersects_rect(r(0.0, 0.0, 10.0, 10.0)));
        assert!(v1.intersects_rect(r(0.0, 0.0, 2.5, 5.0)));
        assert!(!v1.intersects_rect(r(0.0, 0.0, 2.4, 5.0)));
        assert!(!line(&[], indexed).intersects_rect(r(0.0, 0.0, 10.0, 10.0)));
    }

    #[rstest]
    fn test_line_contains_line(#[values(true, false)] indexed: bool) {
        let ln1 = line(
            &[(5.0, 0.0), (5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (15.0, 10.0), (15.0, 15.0)],
            indexed,
        );
        let contained: [&[(f64, f64)]; 3] = [
            &[(7.0, 5.0), (10.0, 5.0), (10.0, 10.0), (12.0, 10.0)],
            &[(7.0, 5.0), (8.0, 5.0), (10.0, 5.0), (10.0, 10.0), (12.0, 10.0)],
            &[
                (7.0, 5.0),
                (8.0, 5.0),
                (6.0, 5.0),
                (10.0, 5.0),
                (10.0, 8.0),
                (10.0, 5.0),
                (5.0, 5.0),
                (10.0, 5.0),
                (10.0, 10.0),
                (12.0, 10.0),
            ],
        ];
        for coords in contained {
            assert!(ln1.contains_line(&line(coords, indexed)), "{:?}", coords);
        }

        let rejected: [&[(f64, f64)]; 3] = [
            &[(5.0, -1.0), (5.0, 5.0), (10.0, 5.0)],
            &[(5.0, 0.0), (5.0, 5.0), (5.0, 0.0), (10.0, 0.0)],
            &[
                (5.0, 0.0),
                (5.0, 5.0),
                (10.0, 5.0),
                (10.0, 10.0),
                (15.0, 10.0),
                (15.0, 15.0),
                (20.0, 20.0),
            ],
        ];
        for coords in rejected {
            assert!(!ln1.contains_line(&line(coords, indexed)), "{:?}", coords);
        }

        assert!(!ln1.contains_line(&line(&[], indexed)));
        assert!(!line(&[], indexed).contains_line(&line(&[(5.0, 0.0)], indexed)));
        assert!(!line(&[(5.0, 0.0), (10.0, 0.0)], indexed).contains_line(&line(&[(5.0, 0.0)], indexed)));
        assert!(ln1.contains_line(&ln1));
    }

    #[rstest]
    fn test_line_contains_line_across_vertices(#[values(true, false)] indexed: bool) {
        let straight = line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)], indexed);
        assert!(straight.contains_line(&line(&[(2.0, 0.0), (8.0, 0.0)], indexed)));
        assert!(straight.contains_line(&line(&[(8.0, 0.0), (2.0, 0.0)], indexed)));
        assert!(!straight.contains_line(&line(&[(2.0, 0.0), (8.0, 0.0), (8.0, 1.0)], indexed)));

        // Touching another part of the path is not a way onto it.
        let hook = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, 5.0), (5.0, -5.0)], indexed);
        assert!(!hook.contains_line(&line(&[(2.0, 0.0), (5.0, 0.0), (5.0, -3.0)], indexed)));
        assert!(hook.contains_line(&line(&[(8.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, 5.0), (5.0, -3.0)], indexed)));
    }

    #[test]
    fn test_line_clockwise() {
        assert!(Line::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]).clockwise());
        assert!(!Line::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]).clockwise());
        assert!(Line::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]).clockwise());
        assert!(!Line::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).clockwise());
    }

    #[rstest]
    fn test_line_intersects_line(#[values(true, false)] indexed: bool) {
        let lns = [U1, U2, U3, U4, V1, V2, V3, V4];
        for a in lns.iter() {
            for b in lns.iter() {
                assert!(line(a, indexed).intersects_line(&line(b, indexed)), "{:?} {:?}", a, b);
            }
        }

        let u1 = line(U1, indexed);
        let empty = line(&[], indexed);
        assert!(!u1.intersects_line(&empty));
        assert!(!empty.intersects_line(&empty));
        assert!(!empty.intersects_line(&u1));
        assert!(u1.intersects_line(&u1.translate(5.0, 0.0)));
        assert!(u1.intersects_line(&u1.translate(10.0, 0.0)));
        assert!(!u1.intersects_line(&u1.translate(11.0, 0.0)));

        let v1 = line(V1, indexed);
        assert!(!v1.intersects_line(&v1.translate(0.0, 1.0)));
        assert!(!v1.intersects_line(&v1.translate(0.0, -1.0)));
    }

    #[rstest]
    fn test_line_contains_poly(#[values(true, false)] indexed: bool) {
        let u1 = line(U1, indexed);
        assert!(!u1.contains_poly(&Polygon::new(points(OCTAGON), Vec::new(), indexed)));
        assert!(u1.contains_poly(&Polygon::from_coords(&[(0.0, 10.0), (0.0, 0.0), (0.0, 10.0)], &[])));
        assert!(u1.contains_poly(&Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)], &[])));
        assert!(!line(&[], indexed).contains_poly(&Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)], &[])));
        assert!(!u1.contains_poly(&Polygon::from_coords(&[], &[])));
    }

    #[rstest]
    fn test_line_intersects_poly(#[values(true, false)] indexed: bool) {
        let u1 = line(U1, indexed);
        let poly = Polygon::new(points(OCTAGON), Vec::new(), indexed);
        assert!(u1.intersects_poly(&poly));
        assert!(u1.intersects_poly(&poly.translate(5.0, 0.0)));
        assert!(u1.intersects_poly(&poly.translate(10.0, 0.0)));
        assert!(!u1.intersects_poly(&poly.translate(11.0, 0.0)));
        assert!(!u1.intersects_poly(&poly.translate(15.0, 0.0)));
    }
}
