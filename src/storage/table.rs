//! The `Table` type ties a `Pager` to a B+tree root page and exposes the two
//! operations the rest of the crate needs: `insert` and `select_all`.

use std::path::Path;

use super::btree::{
    get_node_type, initialize_leaf_node, leaf_insert, leaf_node_key, leaf_node_num_cells,
    set_node_root, NodeType,
};
use super::cursor::Cursor;
use super::pager::Pager;
use super::row::Row;
use crate::errors::Error;

pub struct Table {
    pager: Pager,
    root_page_num: u32,
}

impl Table {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let mut pager = Pager::open(path)?;
        if pager.num_pages == 0 {
            let root = pager.get_page(0)?;
            initialize_leaf_node(root);
            set_node_root(root, true);
        }
        Ok(Table {
            pager,
            root_page_num: 0,
        })
    }

    pub fn close(&mut self) -> Result<(), Error> {
        self.pager.close()
    }

    pub fn insert(&mut self, row: &Row) -> Result<(), Error> {
        let cursor = Cursor::find(&mut self.pager, self.root_page_num, row.id)?;
        if !cursor.end_of_table {
            let buf = self.pager.get_page(cursor.page_num)?;
            if get_node_type(buf) == NodeType::Leaf
                && cursor.cell_num < leaf_node_num_cells(buf)
                && leaf_node_key(buf, cursor.cell_num) == row.id
            {
                return Err(Error::DuplicateKey);
            }
        }
        leaf_insert(&mut self.pager, cursor.page_num, cursor.cell_num, row.id, row)
    }

    pub fn select_all(&mut self) -> Result<Vec<Row>, Error> {
        let mut rows = Vec::new();
        let mut cursor = Cursor::table_start(&mut self.pager, self.root_page_num)?;
        while !cursor.end_of_table {
            let value = cursor.value(&mut self.pager)?;
            rows.push(Row::decode(value));
            cursor.advance(&mut self.pager)?;
        }
        Ok(rows)
    }

    pub fn root_page_num(&self) -> u32 {
        self.root_page_num
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn insert_then_select_round_trips() {
        let file = NamedTempFile::new().unwrap();
        let mut table = Table::open(file.path()).unwrap();
        table.insert(&Row::new(1, "alice", "alice@example.com").unwrap()).unwrap();
        table.insert(&Row::new(2, "bob", "bob@example.com").unwrap()).unwrap();

        let rows = table.select_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let mut table = Table::open(file.path()).unwrap();
        table.insert(&Row::new(1, "alice", "alice@example.com").unwrap()).unwrap();
        let result = table.insert(&Row::new(1, "eve", "eve@example.com").unwrap());
        assert!(matches!(result, Err(Error::DuplicateKey)));
    }

    #[test]
    fn rows_come_back_in_key_order_after_many_inserts() {
        let file = NamedTempFile::new().unwrap();
        let mut table = Table::open(file.path()).unwrap();
        for id in (1..=50u32).rev() {
            table
                .insert(&Row::new(id, "u", "e@e").unwrap())
                .unwrap();
        }
        let rows = table.select_all().unwrap();
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn reopening_the_file_preserves_rows() {
        let file = NamedTempFile::new().unwrap();
        {
            let mut table = Table::open(file.path()).unwrap();
            table.insert(&Row::new(1, "alice", "a@a").unwrap()).unwrap();
            table.insert(&Row::new(2, "bob", "b@b").unwrap()).unwrap();
            table.close().unwrap();
        }
        let mut reopened = Table::open(file.path()).unwrap();
        let rows = reopened.select_all().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
