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

use thiserror::Error;

/// GeomError represents misuse of the geometry API.
///
/// Malformed geometry is never an error: degenerate shapes are valid values
/// that simply answer false to most predicates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A point index outside of `0..len`
    #[error("Index {index} out of range for {len} points")]
    OutOfRange { index: usize, len: usize },
}

/// Result type for geometry operations
pub type GeomResult<T> = Result<T, GeomError>;
