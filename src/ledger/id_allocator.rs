/// Hands out sequential identifiers starting at 1. Each ledger owns its own allocators.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Returns the id the next call to [`IdAllocator::allocate`] will hand out.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_in_sequence() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn allocators_are_independent() {
        let mut first = IdAllocator::default();
        let mut second = IdAllocator::default();
        first.allocate();
        first.allocate();
        assert_eq!(second.allocate(), 1);
        assert_eq!(first.allocate(), 3);
    }
}
