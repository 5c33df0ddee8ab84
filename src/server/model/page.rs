/// Offset pagination passed straight through to the query layer.
///
/// `size: None` means no limit. Callers are expected to reject negative offsets and
/// zero sizes before constructing a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    /// Number of rows to skip.
    pub from: u64,
    /// Maximum number of rows to return.
    pub size: Option<u64>,
}

impl Page {
    pub fn new(from: u64, size: Option<u64>) -> Self {
        Self { from, size }
    }

    /// A page returning every row.
    pub fn unbounded() -> Self {
        Self::default()
    }
}
