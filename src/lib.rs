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

//! Planar containment and intersection predicates over points, rectangles,
//! open paths and polygons with holes.
//!
//! Rings and lines keep their boundary segments in an order-preserving
//! bounding-box tree so that range queries stay sub-linear on large
//! real-world outlines while still visiting segments in boundary order.

pub mod geom;

pub use geom::*;
