// ultralight/src/transport/mock.rs

use crate::constants::PAGE_SIZE;
use crate::transport::traits::TagTransport;
use crate::types::Uid;
use crate::{Error, Result};

/// Mock transport for unit tests. It simulates page-addressed tag memory
/// and records every page access so tests can assert on I/O order.
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Simulated tag memory, one entry per page.
    pub pages: Vec<[u8; PAGE_SIZE]>,
    pub uid: Uid,
    /// Record of page numbers handed to `read_page`, in order.
    pub reads: Vec<u8>,
    /// Record of every `write_page` call, in order.
    pub writes: Vec<(u8, [u8; PAGE_SIZE])>,
    /// Testing hook: number of read_page calls that should fail first.
    pub read_failures: usize,
    /// Testing hook: write calls with index >= this value fail.
    pub fail_writes_from: Option<usize>,
}

impl MockTransport {
    /// Tag with `page_count` zeroed pages and the default UID.
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![[0u8; PAGE_SIZE]; page_count],
            uid: Uid::default(),
            reads: Vec::new(),
            writes: Vec::new(),
            read_failures: 0,
            fail_writes_from: None,
        }
    }

    /// Set how many subsequent read_page calls should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Lay `bytes` into simulated memory starting at `page`, without going
    /// through `write_page` (no logging, no failure injection).
    pub fn load(&mut self, page: u8, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            let index = page as usize + i / PAGE_SIZE;
            self.pages[index][i % PAGE_SIZE] = *byte;
        }
    }

    /// Flatten `len` bytes of simulated memory starting at `page`, for
    /// assertions on what a write sequence left behind.
    pub fn bytes_at(&self, page: u8, len: usize) -> Vec<u8> {
        let start = page as usize * PAGE_SIZE;
        let flat: Vec<u8> = self.pages.iter().flatten().copied().collect();
        flat[start..start + len].to_vec()
    }
}

impl TagTransport for MockTransport {
    fn read_page(&mut self, page: u8) -> Result<[u8; PAGE_SIZE]> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Transport("induced read failure".to_string()));
        }
        self.reads.push(page);
        self.pages
            .get(page as usize)
            .copied()
            .ok_or_else(|| Error::Transport(format!("page {} out of range", page)))
    }

    fn write_page(&mut self, page: u8, data: &[u8; PAGE_SIZE]) -> Result<()> {
        if let Some(from) = self.fail_writes_from {
            if self.writes.len() >= from {
                return Err(Error::Transport("induced write failure".to_string()));
            }
        }
        let slot = self
            .pages
            .get_mut(page as usize)
            .ok_or_else(|| Error::Transport(format!("page {} out of range", page)))?;
        *slot = *data;
        self.writes.push((page, *data));
        Ok(())
    }

    fn uid(&mut self) -> Result<Uid> {
        Ok(self.uid)
    }
}
