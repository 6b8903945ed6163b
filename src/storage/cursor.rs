//! A cursor points at a particular cell of a particular leaf page, and knows
//! how to advance to the next leaf once it runs off the end of the current
//! one via the leaf chain's `next_leaf_page` pointer.

use super::btree::{
    get_node_type, internal_node_child, internal_node_find_child, leaf_node_find_cell,
    leaf_node_key, leaf_node_num_cells, leaf_node_value, leaf_node_value_mut, leaf_node_next_leaf,
    NodeType,
};
use super::pager::Pager;
use crate::errors::Error;

pub struct Cursor {
    pub page_num: u32,
    pub cell_num: u32,
    pub end_of_table: bool,
}

impl Cursor {
    /// A cursor positioned at the first row of the table (the leftmost cell
    /// of the leftmost leaf).
    pub fn table_start(pager: &mut Pager, root_page_num: u32) -> Result<Self, Error> {
        let mut cursor = Self::find(pager, root_page_num, 0)?;
        let num_cells = leaf_node_num_cells(pager.get_page(cursor.page_num)?);
        cursor.end_of_table = num_cells == 0;
        Ok(cursor)
    }

    /// Descends from `page_num` to the leaf where `key` belongs, returning a
    /// cursor at the matching cell or at the insertion point if absent.
    pub fn find(pager: &mut Pager, page_num: u32, key: u32) -> Result<Self, Error> {
        let node_type = get_node_type(pager.get_page(page_num)?);
        match node_type {
            NodeType::Leaf => {
                let buf = pager.get_page(page_num)?;
                let cell_num = leaf_node_find_cell(buf, key);
                let num_cells = leaf_node_num_cells(buf);
                Ok(Cursor {
                    page_num,
                    cell_num,
                    end_of_table: cell_num >= num_cells,
                })
            }
            NodeType::Internal => {
                let buf = pager.get_page(page_num)?;
                let child_index = internal_node_find_child(buf, key);
                let child_page = internal_node_child(buf, child_index);
                Self::find(pager, child_page, key)
            }
        }
    }

    pub fn value<'a>(&self, pager: &'a mut Pager) -> Result<&'a [u8], Error> {
        let buf = pager.get_page(self.page_num)?;
        Ok(leaf_node_value(buf, self.cell_num))
    }

    pub fn value_mut<'a>(&self, pager: &'a mut Pager) -> Result<&'a mut [u8], Error> {
        let buf = pager.get_page(self.page_num)?;
        Ok(leaf_node_value_mut(buf, self.cell_num))
    }

    pub fn key(&self, pager: &mut Pager) -> Result<u32, Error> {
        let buf = pager.get_page(self.page_num)?;
        Ok(leaf_node_key(buf, self.cell_num))
    }

    pub fn advance(&mut self, pager: &mut Pager) -> Result<(), Error> {
        let buf = pager.get_page(self.page_num)?;
        self.cell_num += 1;
        if self.cell_num >= leaf_node_num_cells(buf) {
            let next_leaf = leaf_node_next_leaf(buf);
            if next_leaf == 0 {
                self.end_of_table = true;
            } else {
                self.page_num = next_leaf;
                self.cell_num = 0;
            }
        }
        Ok(())
    }
}
