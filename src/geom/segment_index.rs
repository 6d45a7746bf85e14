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

use crate::geom::rect::Rect;
use crate::geom::segment::Segment;

/// BoundedItem pairs a boundary segment with its bounding rect and its
/// position along the boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundedItem {
    pub segment: Segment,
    pub rect: Rect,
    pub index: usize,
}

/// BoundarySegmentIndex answers "which boundary segments have a bounding box
/// that meets this rect" and always reports them in boundary order.
///
/// The index is a static complete binary tree of rects laid over the
/// segment array in the order it was given. It is never sorted by
/// coordinate, so an in-order walk of the surviving leaves reproduces the
/// boundary traversal exactly. The tree lives in a flat array: node 1 is the
/// root, node k has children 2k and 2k+1, and leaf i is node `leaf_base + i`.
/// Leaves past the last segment hold the empty rect and are always pruned.
///
/// An index built without a tree answers the same queries by a linear scan
/// over the same array, with identical results and ordering.
#[derive(Clone, Debug)]
pub struct BoundarySegmentIndex {
    items: Vec<BoundedItem>,

    // nodes is empty when the index has no tree.
    nodes: Vec<Rect>,
    leaf_base: usize,
}

impl BoundarySegmentIndex {
    /// Builds an index over the segments in the order given. When
    /// `build_tree` is false the index only keeps the ordered array.
    pub fn new<I>(segments: I, build_tree: bool) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        let items: Vec<BoundedItem> = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| BoundedItem {
                segment,
                rect: segment.rect(),
                index,
            })
            .collect();

        let mut idx = BoundarySegmentIndex {
            items,
            nodes: Vec::new(),
            leaf_base: 0,
        };
        if build_tree {
            idx.build_tree();
        }
        idx
    }

    fn build_tree(&mut self) {
        let n = self.items.len();
        if n == 0 {
            return;
        }

        let leaf_base = n.next_power_of_two();
        let mut nodes = vec![Rect::empty(); 2 * leaf_base];
        for (i, item) in self.items.iter().enumerate() {
            nodes[leaf_base + i] = item.rect;
        }
        for k in (1..leaf_base).rev() {
            nodes[k] = nodes[2 * k].union(&nodes[2 * k + 1]);
        }

        log::trace!(
            "built boundary segment tree: {} segments, {} nodes",
            n,
            nodes.len()
        );
        self.nodes = nodes;
        self.leaf_base = leaf_base;
    }

    /// Reports whether queries are answered through the tree.
    pub fn has_tree(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the indexed items in boundary order.
    pub fn items(&self) -> &[BoundedItem] {
        &self.items
    }

    /// Returns the union of all segment rects.
    pub fn bound(&self) -> Rect {
        if self.has_tree() {
            return self.nodes[1];
        }
        self.items
            .iter()
            .fold(Rect::empty(), |acc, item| acc.union(&item.rect))
    }

    /// Returns a lazy iterator over the items whose rect meets the query,
    /// in boundary order. Dropping the iterator early stops the search.
    pub fn search_iter(&self, query: Rect) -> SearchIter<'_> {
        let cursor = if self.has_tree() {
            Cursor::Tree(vec![1])
        } else {
            Cursor::Linear(0)
        };
        SearchIter {
            index: self,
            query,
            cursor,
        }
    }

    /// Calls f with each segment whose rect meets the query, in boundary
    /// order, together with its position. Stops as soon as f returns false.
    pub fn search<F>(&self, query: Rect, mut f: F)
    where
        F: FnMut(&Segment, usize) -> bool,
    {
        for item in self.search_iter(query) {
            if !f(&item.segment, item.index) {
                return;
            }
        }
    }

    /// Calls f with every segment in boundary order. Stops as soon as f
    /// returns false.
    pub fn scan<F>(&self, mut f: F)
    where
        F: FnMut(&Segment) -> bool,
    {
        for item in &self.items {
            if !f(&item.segment) {
                return;
            }
        }
    }
}

#[derive(Clone, Debug)]
enum Cursor {
    Linear(usize),
    Tree(Vec<usize>),
}

/// SearchIter walks a BoundarySegmentIndex for one query rect.
#[derive(Clone, Debug)]
pub struct SearchIter<'a> {
    index: &'a BoundarySegmentIndex,
    query: Rect,
    cursor: Cursor,
}

impl<'a> Iterator for SearchIter<'a> {
    type Item = &'a BoundedItem;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        match &mut self.cursor {
            Cursor::Linear(pos) => {
                while *pos < index.items.len() {
                    let item = &index.items[*pos];
                    *pos += 1;
                    if item.rect.intersects(&self.query) {
                        return Some(item);
                    }
                }
                None
            }
            Cursor::Tree(stack) => {
                while let Some(k) = stack.pop() {
                    if !index.nodes[k].intersects(&self.query) {
                        continue;
                    }
                    if k >= index.leaf_base {
                        return Some(&index.items[k - index.leaf_base]);
                    }
                    // Right first so the left subtree pops first.
                    stack.push(2 * k + 1);
                    stack.push(2 * k);
                }
                None
            }
        }
    }
}
