// ultralight/src/transport/traits.rs

use crate::constants::PAGE_SIZE;
use crate::types::Uid;
use crate::Result;

/// Transport trait abstracts the reader chip away from the tag driver.
///
/// Implementations own authentication, anti-collision, and the raw page
/// commands of a particular reader. The driver only ever asks for whole
/// pages and the UID of the tag currently in the field.
pub trait TagTransport {
    /// Read one page from the tag.
    fn read_page(&mut self, page: u8) -> Result<[u8; PAGE_SIZE]>;

    /// Write one page to the tag.
    fn write_page(&mut self, page: u8, data: &[u8; PAGE_SIZE]) -> Result<()>;

    /// UID of the tag currently in the field.
    fn uid(&mut self) -> Result<Uid>;
}

impl<T: TagTransport + ?Sized> TagTransport for Box<T> {
    fn read_page(&mut self, page: u8) -> Result<[u8; PAGE_SIZE]> {
        (**self).read_page(page)
    }

    fn write_page(&mut self, page: u8, data: &[u8; PAGE_SIZE]) -> Result<()> {
        (**self).write_page(page, data)
    }

    fn uid(&mut self) -> Result<Uid> {
        (**self).uid()
    }
}
