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

use crate::geom::error::{GeomError, GeomResult};
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::geom::segment::Segment;
use crate::geom::segment_index::{BoundarySegmentIndex, SearchIter};

/// Series is the ordered point storage shared by Ring and Line: the points
/// as given, their bounding rect, and the boundary segments with the index
/// over them.
///
/// A closed series joins its last effective point back to its first. An
/// explicit closing point equal to the first point is kept in `points` but
/// does not produce an extra zero-length segment.
#[derive(Clone, Debug)]
pub(crate) struct Series {
    points: Vec<Point>,
    closed: bool,
    rect: Rect,
    index: BoundarySegmentIndex,
}

impl Series {
    pub(crate) fn new(points: Vec<Point>, closed: bool, indexed: bool) -> Self {
        let rect = points.iter().fold(Rect::empty(), |r, p| r.expand(*p));
        let index = BoundarySegmentIndex::new(segments_of(&points, closed), indexed);
        Series {
            points,
            closed,
            rect,
            index,
        }
    }

    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn num_points(&self) -> usize {
        self.points.len()
    }

    /// # Panics
    ///
    /// Panics if i is not less than num_points.
    pub(crate) fn point_at(&self, i: usize) -> Point {
        self.points[i]
    }

    pub(crate) fn try_point_at(&self, i: usize) -> GeomResult<Point> {
        self.points.get(i).copied().ok_or(GeomError::OutOfRange {
            index: i,
            len: self.points.len(),
        })
    }

    pub(crate) fn rect(&self) -> Rect {
        self.rect
    }

    /// A series without any segment is empty.
    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn is_indexed(&self) -> bool {
        self.index.has_tree()
    }

    pub(crate) fn num_segments(&self) -> usize {
        self.index.len()
    }

    /// # Panics
    ///
    /// Panics if i is not less than num_segments.
    pub(crate) fn segment_at(&self, i: usize) -> Segment {
        self.index.items()[i].segment
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.index.items().iter().map(|item| &item.segment)
    }

    pub(crate) fn search_iter(&self, query: Rect) -> SearchIter<'_> {
        self.index.search_iter(query)
    }

    pub(crate) fn search<F>(&self, query: Rect, f: F)
    where
        F: FnMut(&Segment, usize) -> bool,
    {
        self.index.search(query, f)
    }

    pub(crate) fn scan<F>(&self, f: F)
    where
        F: FnMut(&Segment) -> bool,
    {
        self.index.scan(f)
    }

    /// Returns a translated copy with its own index, built the same way as
    /// this one.
    pub(crate) fn translate(&self, dx: f64, dy: f64) -> Series {
        let points = self.points.iter().map(|p| p.translate(dx, dy)).collect();
        Series::new(points, self.closed, self.is_indexed())
    }

    /// Reports whether the points wind clockwise when read as a closed path
    /// with y pointing up.
    pub(crate) fn clockwise(&self) -> bool {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += (b.x - a.x) * (b.y + a.y);
        }
        sum > 0.0
    }

    /// Returns the shoelace area of the points read as a closed path,
    /// positive when they wind counterclockwise.
    pub(crate) fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }
}

fn segments_of(points: &[Point], closed: bool) -> Vec<Segment> {
    let mut pts = points;
    if closed && pts.len() > 1 && pts[0] == pts[pts.len() - 1] {
        pts = &pts[..pts.len() - 1];
    }
    if pts.len() < 2 {
        return Vec::new();
    }
    let mut segments: Vec<Segment> = pts.windows(2).map(|w| Segment::new(w[0], w[1])).collect();
    if closed {
        segments.push(Segment::new(pts[pts.len() - 1], pts[0]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::test_util::points;

    #[test]
    fn test_series_segments() {
        let open = Series::new(points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), false, false);
        assert_eq!(open.num_segments(), 2);

        let closed = Series::new(points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), true, false);
        assert_eq!(closed.num_segments(), 3);
        assert_eq!(
            closed.segment_at(2),
            Segment::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0))
        );

        // An explicit closing point does not add a zero-length segment.
        let explicit = Series::new(
            points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            true,
            false,
        );
        assert_eq!(explicit.num_segments(), 3);
        assert_eq!(explicit.num_points(), 4);

        let pair = Series::new(points(&[(0.0, 0.0), (1.0, 0.0)]), true, false);
        assert_eq!(pair.num_segments(), 2);

        for coords in [&[][..], &[(1.0, 1.0)][..], &[(1.0, 1.0), (1.0, 1.0)][..]] {
            assert!(Series::new(points(coords), true, true).is_empty());
        }
        assert!(Series::new(points(&[(1.0, 1.0)]), false, true).is_empty());
    }

    #[test]
    fn test_series_point_at() {
        let s = Series::new(points(&[(0.0, 1.0), (2.0, 3.0)]), false, false);
        assert_eq!(s.point_at(1), Point::new(2.0, 3.0));
        assert_eq!(s.try_point_at(0), Ok(Point::new(0.0, 1.0)));
        assert_eq!(
            s.try_point_at(2),
            Err(GeomError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    #[should_panic]
    fn test_series_point_at_out_of_range() {
        Series::new(Vec::new(), false, false).point_at(0);
    }

    #[test]
    fn test_series_translate_keeps_index_kind() {
        let coords: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, (i * i) as f64)).collect();
        let s = Series::new(points(&coords), false, true);
        let moved = s.translate(7.0, 8.0);
        assert!(moved.is_indexed());
        assert_eq!(moved.num_points(), s.num_points());
        assert_eq!(moved.rect(), s.rect().translate(7.0, 8.0));
        assert_eq!(moved.translate(-7.0, -8.0).points(), s.points());
        assert!(!Series::new(points(&coords), false, false).translate(1.0, 1.0).is_indexed());
    }

    #[test]
    fn test_series_area() {
        let ccw = Series::new(
            points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            true,
            false,
        );
        assert_eq!(ccw.signed_area(), 100.0);
        assert!(!ccw.clockwise());
        let back_and_forth = Series::new(points(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]), true, false);
        assert_eq!(back_and_forth.signed_area(), 0.0);
    }
}
