use std::fmt;

/// A slash-delimited navigation path, stored as its non-empty segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NavPath {
    segments: Vec<String>,
}

impl NavPath {
    /// Parse a path, discarding empty segments (`"/a//b/"` is `a/b`)
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The first `len` segments
    pub fn prefix(&self, len: usize) -> NavPath {
        Self {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }

    /// Everything after the first `len` segments
    pub fn suffix(&self, len: usize) -> NavPath {
        Self {
            segments: self.segments[len.min(self.segments.len())..].to_vec(),
        }
    }

    /// Append a segment, ignoring empty ones
    pub fn child(&self, segment: &str) -> NavPath {
        let mut path = self.clone();
        path.segments.extend(Self::parse(segment).segments);
        path
    }
}

impl fmt::Display for NavPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&str> for NavPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_segments_are_discarded() {
        let path = NavPath::parse("//courses/42//submissions/");
        assert_eq!(path.segments(), ["courses", "42", "submissions"]);
        assert_eq!(path.to_string(), "courses/42/submissions");
        assert_eq!(path, NavPath::parse("courses/42/submissions"));
    }

    #[test]
    fn test_root_path_is_empty() {
        assert!(NavPath::parse("").is_empty());
        assert!(NavPath::parse("///").is_empty());
        assert_eq!(NavPath::parse("/").to_string(), "");
    }

    #[test]
    fn test_prefix_and_suffix() {
        let path = NavPath::parse("a/b/c/d");
        assert_eq!(path.prefix(2).to_string(), "a/b");
        assert_eq!(path.suffix(2).to_string(), "c/d");
        assert!(path.suffix(4).is_empty());
        assert!(path.suffix(9).is_empty());
        assert_eq!(path.prefix(9), path);
    }

    #[test]
    fn test_child() {
        let path = NavPath::parse("courses").child("42/results");
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "courses/42/results");
    }
}
