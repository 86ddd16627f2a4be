//! Fallback anchor numbering.

use serde::{Deserialize, Serialize};

/// Counter for headings whose slug comes out empty.
///
/// One registry belongs to one render call. It starts at 1 and advances
/// once per fallback id handed out, in document order.
///
/// ```
/// use handmark_core::AnchorRegistry;
/// let mut registry = AnchorRegistry::new();
/// assert_eq!(registry.fallback("section"), "section-1");
/// assert_eq!(registry.fallback("section"), "section-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRegistry {
    next: usize,
}

impl Default for AnchorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorRegistry {
    /// Create a registry whose first fallback is number 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next fallback id, `<prefix>-N`.
    pub fn fallback(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next);
        self.next += 1;
        id
    }

    /// Number of fallback ids issued so far.
    pub fn issued(&self) -> usize {
        self.next - 1
    }
}
