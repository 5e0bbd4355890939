//! Immutable property paths
//!
//! A [`Path`] identifies a location inside a record tree as an ordered
//! sequence of string segments. It is append-only and structurally shared:
//! extending a path allocates one node that points back at the receiver's
//! chain, so the receiver stays valid and unchanged, and clones are cheap.

use std::fmt;
use std::sync::Arc;

/// Immutable, append-only property path within a record tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    head: Option<Arc<Segment>>,
}

#[derive(Debug, PartialEq, Eq)]
struct Segment {
    value: String,
    parent: Option<Arc<Segment>>,
}

impl Path {
    /// The zero-length path. Renders as the empty string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a new path equal to the receiver plus one segment.
    ///
    /// The receiver is not altered and remains usable independently.
    pub fn extend(&self, segment: impl Into<String>) -> Path {
        Path {
            head: Some(Arc::new(Segment {
                value: segment.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Build a path from segments in order; equivalent to repeated
    /// [`Path::extend`] starting from [`Path::empty`].
    pub fn from_segments<I, S>(segments: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Path::empty();
        for segment in segments {
            path = path.extend(segment);
        }
        path
    }
}

impl fmt::Display for Path {
    /// Dotted rendering: segments joined with `.`, except that an index
    /// segment (one starting with `[`) attaches to the preceding segment
    /// without a separator — `list[1].property`, never `list.[1].property`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Collect leaf-to-root by walking parent links, then reverse to
        // get traversal order.
        let mut segments: Vec<&str> = Vec::new();
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            segments.push(node.value.as_str());
            current = node.parent.as_deref();
        }
        segments.reverse();

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 && !segment.starts_with('[') {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
