//! Clipboard and shared memory capabilities.
//!
//! The system clipboard only accepts data in OS-owned movable memory, so the
//! publisher needs two services: an [`Allocator`] producing [`MemoryBlock`]s,
//! and a [`Clipboard`] that takes such a block over.

use crate::error::*;

/// Movable memory block owned by the caller until handed to a clipboard.
///
/// Dropping a block that is still owned releases it.
pub trait MemoryBlock {
    /// Size of the block in bytes.
    fn size(&self) -> usize;

    /// Lock the block, copy `data` to its start and unlock.
    ///
    /// `data` must fit in the block.
    fn write(&mut self, data: &[u8]) -> Result<(), Error>;
}

/// Allocation strategy for clipboard data.
pub trait Allocator {
    type Block: MemoryBlock;

    /// Allocate a zero initialized block of exactly `size` bytes.
    fn alloc(&self, size: usize) -> Result<Self::Block, Error>;
}

/// Exclusive access to a clipboard.
///
/// Prefer [`ClipboardSession`] over calling `open` and `close` by hand.
pub trait Clipboard {
    type Block: MemoryBlock;

    fn open(&mut self) -> Result<(), Error>;

    /// Remove all current content.
    fn empty(&mut self) -> Result<(), Error>;

    /// Install `block` under `format`.
    ///
    /// On success the clipboard owns the block. On failure the block is
    /// dropped, and thus released, by the implementation.
    fn set_data(&mut self, format: u32, block: Self::Block) -> Result<(), Error>;

    fn close(&mut self);
}

/// Open clipboard, closed when dropped.
pub struct ClipboardSession<'a, C: Clipboard> {
    clipboard: &'a mut C,
}

impl<'a, C: Clipboard> ClipboardSession<'a, C> {
    pub fn open(clipboard: &'a mut C) -> Result<Self, Error> {
        clipboard.open()?;
        log::debug!("Clipboard opened");
        Ok(Self { clipboard })
    }

    pub fn empty(&mut self) -> Result<(), Error> {
        self.clipboard.empty()
    }

    pub fn set_data(&mut self, format: u32, block: C::Block) -> Result<(), Error> {
        self.clipboard.set_data(format, block)
    }
}

impl<C: Clipboard> Drop for ClipboardSession<'_, C> {
    fn drop(&mut self) {
        self.clipboard.close();
        log::debug!("Clipboard closed");
    }
}

/// In-memory clipboard for exercising the publishing logic.
#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Bookkeeping shared between the allocator, its blocks and the clipboard.
    #[derive(Default)]
    pub struct Ledger {
        /// Blocks currently owned by the caller.
        pub live: Cell<isize>,
        pub frees: Cell<usize>,
        pub allocations: RefCell<Vec<usize>>,
        pub opens: Cell<usize>,
        pub closes: Cell<usize>,
    }

    pub struct Block {
        data: Vec<u8>,
        owned: bool,
        fail_lock: bool,
        ledger: Rc<Ledger>,
    }

    impl MemoryBlock for Block {
        fn size(&self) -> usize {
            self.data.len()
        }

        fn write(&mut self, data: &[u8]) -> Result<(), Error> {
            if self.fail_lock {
                return Err(Error::LockFailed("locked out".into()));
            }
            if data.len() > self.data.len() {
                return Err(Error::LogicError("Data does not fit in memory block."));
            }
            self.data[..data.len()].copy_from_slice(data);
            Ok(())
        }
    }

    impl Drop for Block {
        fn drop(&mut self) {
            if self.owned {
                self.ledger.live.set(self.ledger.live.get() - 1);
                self.ledger.frees.set(self.ledger.frees.get() + 1);
            }
        }
    }

    #[derive(Default)]
    pub struct MemoryAllocator {
        pub ledger: Rc<Ledger>,
        pub fail_alloc: bool,
        pub fail_lock: bool,
    }

    impl Allocator for MemoryAllocator {
        type Block = Block;

        fn alloc(&self, size: usize) -> Result<Block, Error> {
            if self.fail_alloc {
                return Err(Error::AllocationFailed("out of memory".into()));
            }
            self.ledger.allocations.borrow_mut().push(size);
            self.ledger.live.set(self.ledger.live.get() + 1);
            Ok(Block {
                data: vec![0; size],
                owned: true,
                fail_lock: self.fail_lock,
                ledger: Rc::clone(&self.ledger),
            })
        }
    }

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub ledger: Rc<Ledger>,
        pub contents: HashMap<u32, Vec<u8>>,
        pub is_open: bool,
        /// Simulate another process holding the clipboard.
        pub busy: bool,
        pub fail_empty: bool,
        pub fail_set: bool,
    }

    impl MemoryClipboard {
        pub fn with_ledger(ledger: &Rc<Ledger>) -> Self {
            Self {
                ledger: Rc::clone(ledger),
                ..Default::default()
            }
        }
    }

    impl Clipboard for MemoryClipboard {
        type Block = Block;

        fn open(&mut self) -> Result<(), Error> {
            if self.busy || self.is_open {
                return Err(Error::ClipboardUnavailable("access denied".into()));
            }
            self.is_open = true;
            self.ledger.opens.set(self.ledger.opens.get() + 1);
            Ok(())
        }

        fn empty(&mut self) -> Result<(), Error> {
            assert!(self.is_open, "empty on a closed clipboard");
            if self.fail_empty {
                return Err(Error::PublishFailed("not owner".into()));
            }
            self.contents.clear();
            Ok(())
        }

        fn set_data(&mut self, format: u32, mut block: Block) -> Result<(), Error> {
            assert!(self.is_open, "set_data on a closed clipboard");
            if self.fail_set {
                return Err(Error::PublishFailed("rejected".into()));
            }
            // ownership moves to the clipboard
            block.owned = false;
            self.ledger.live.set(self.ledger.live.get() - 1);
            self.contents.insert(format, std::mem::take(&mut block.data));
            Ok(())
        }

        fn close(&mut self) {
            assert!(self.is_open, "close on a closed clipboard");
            self.is_open = false;
            self.ledger.closes.set(self.ledger.closes.get() + 1);
        }
    }
}
