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
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IndexKind selects how a shape answers range queries over its boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexKind {
    /// Linear scan over the boundary segments.
    None,
    /// Order-preserving bounding-box tree.
    Tree,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::None => write!(f, "none"),
            IndexKind::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for IndexKind {
    type Err = GeomError;

    fn from_str(s: &str) -> GeomResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(IndexKind::None),
            "tree" => Ok(IndexKind::Tree),
            other => Err(GeomError::InvalidArgument(format!(
                "unknown index kind {:?}, expected \"none\" or \"tree\"",
                other
            ))),
        }
    }
}

/// IndexOptions decides, at construction time, whether a Ring or Line builds
/// a tree over its boundary segments.
///
/// Short boundaries are cheaper to scan than to search, so a tree is only
/// built once the shape has at least `min_points` points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexOptions {
    pub kind: IndexKind,
    pub min_points: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            kind: IndexKind::Tree,
            min_points: 64,
        }
    }
}

impl IndexOptions {
    /// Never build a tree.
    pub const fn none() -> Self {
        IndexOptions {
            kind: IndexKind::None,
            min_points: 0,
        }
    }

    /// Always build a tree, whatever the point count.
    pub const fn tree() -> Self {
        IndexOptions {
            kind: IndexKind::Tree,
            min_points: 0,
        }
    }

    pub fn with_min_points(self, min_points: usize) -> Self {
        IndexOptions { min_points, ..self }
    }

    /// Reports whether a shape of num_points points should build a tree.
    pub fn should_index(&self, num_points: usize) -> bool {
        match self.kind {
            IndexKind::None => false,
            IndexKind::Tree if num_points < self.min_points => {
                log::debug!(
                    "{} points is below the tree threshold of {}, using linear scan",
                    num_points,
                    self.min_points
                );
                false
            }
            IndexKind::Tree => true,
        }
    }
}

impl From<bool> for IndexOptions {
    fn from(indexed: bool) -> Self {
        if indexed {
            IndexOptions::tree()
        } else {
            IndexOptions::none()
        }
    }
}
