/// How the random-access cursor of a [`CaptureFile`](crate::storage::CaptureFile)
/// reaches the file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomAccess {
    /// A second, independently opened file handle.
    #[default]
    File,
    /// A read-only memory map; reads take `&self`.
    Mmap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Upper bound on a record's `caplen` before its payload is allocated.
    pub max_caplen: u32,
    pub random_access: RandomAccess,
}

impl ReaderConfig {
    pub const DEFAULT_MAX_CAPLEN: u32 = 262_144;

    pub fn new() -> Self {
        Self {
            max_caplen: Self::DEFAULT_MAX_CAPLEN,
            random_access: RandomAccess::File,
        }
    }

    pub fn with_max_caplen(mut self, max_caplen: u32) -> Self {
        self.max_caplen = max_caplen;
        self
    }

    pub fn with_random_access(mut self, random_access: RandomAccess) -> Self {
        self.random_access = random_access;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}
