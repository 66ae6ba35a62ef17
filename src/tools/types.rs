//! Common types shared across tools for type safety without dependencies

use serde_json::{Map, Value};

/// Normalized metadata: flat key-value pairs, insertion order preserved.
pub type Metadata = Map<String, Value>;
