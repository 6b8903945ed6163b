//! Owns the on-disk file and the in-memory page cache sitting in front of it.
//!
//! Page slots are a fixed-capacity `heapless::Vec` rather than a growable
//! `Vec`, so `TABLE_MAX_PAGES` is enforced by the type rather than by a
//! runtime check alone.

use crate::errors::Error;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, trace};

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;

pub struct Pager {
    file: File,
    file_length: u64,
    pub num_pages: u32,
    pages: heapless::Vec<Option<Box<[u8; PAGE_SIZE]>>, TABLE_MAX_PAGES>,
}

impl Pager {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        let file_length = file.metadata()?.len();
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(Error::CorruptFile(
                "db file is not a whole number of pages. Corrupt file.".to_owned(),
            ));
        }
        let num_pages = (file_length / PAGE_SIZE as u64) as u32;

        let mut pages = heapless::Vec::new();
        for _ in 0..TABLE_MAX_PAGES {
            // Capacity is fixed at TABLE_MAX_PAGES, so this can never fail.
            let _ = pages.push(None);
        }

        debug!(num_pages, "Opened pager");
        Ok(Pager {
            file,
            file_length,
            num_pages,
            pages,
        })
    }

    pub fn get_page(&mut self, page_num: u32) -> Result<&mut [u8; PAGE_SIZE], Error> {
        if page_num as usize >= TABLE_MAX_PAGES {
            return Err(Error::OutOfBounds(format!(
                "Tried to fetch page number out of bounds. {} >= {}",
                page_num, TABLE_MAX_PAGES
            )));
        }

        let idx = page_num as usize;
        if self.pages[idx].is_none() {
            let mut buf = Box::new([0u8; PAGE_SIZE]);
            let pages_on_disk = (self.file_length / PAGE_SIZE as u64) as u32;
            if page_num < pages_on_disk {
                self.file
                    .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
                let mut tmp = vec![0u8; PAGE_SIZE];
                let n = self.file.read(&mut tmp)?;
                buf[..n].copy_from_slice(&tmp[..n]);
            }
            trace!(page_num, "Materialized page into cache");
            self.pages[idx] = Some(buf);
            if page_num >= self.num_pages {
                self.num_pages = page_num + 1;
            }
        }

        Ok(self.pages[idx].as_mut().unwrap())
    }

    /// Reserves the next page number. The slot itself is only materialized
    /// the first time it's fetched via `get_page`, but the number is claimed
    /// immediately so two allocations in a row never collide.
    pub fn allocate_page(&mut self) -> u32 {
        let page_num = self.num_pages;
        self.num_pages += 1;
        page_num
    }

    pub fn flush(&mut self, page_num: u32) -> Result<(), Error> {
        let idx = page_num as usize;
        let page = self.pages[idx].as_ref().ok_or_else(|| {
            Error::OutOfBounds(format!("Tried to flush null page {}", page_num))
        })?;
        self.file
            .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
        self.file.write_all(page.as_ref())?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), Error> {
        for i in 0..self.num_pages {
            if self.pages[i as usize].is_some() {
                self.flush(i)?;
            }
        }
        self.file.sync_all()?;
        debug!(num_pages = self.num_pages, "Closed pager");
        Ok(())
    }
}
