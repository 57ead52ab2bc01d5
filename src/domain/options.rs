/// How the builder brings the record count to a complete binary tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Duplicate the last record once when the count is odd, then reject
    /// anything that is still not a power of two.
    #[default]
    DuplicateLast,
    /// Duplicate the last record until the count reaches a power of two.
    NextPowerOfTwo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    pub padding: PaddingPolicy,
    /// Hash leaves and assemble subtrees on the rayon pool.
    pub parallel: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            padding: PaddingPolicy::DuplicateLast,
            parallel: true,
        }
    }
}

impl TreeOptions {
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{PaddingPolicy, TreeOptions};

    #[test]
    fn test_defaults() {
        let options = TreeOptions::default();
        assert_eq!(options.padding, PaddingPolicy::DuplicateLast);
        assert!(options.parallel);
    }

    #[test]
    fn test_builders() {
        let options = TreeOptions::default()
            .with_padding(PaddingPolicy::NextPowerOfTwo)
            .with_parallel(false);
        assert_eq!(
            options,
            TreeOptions {
                padding: PaddingPolicy::NextPowerOfTwo,
                parallel: false,
            }
        );
    }
}
