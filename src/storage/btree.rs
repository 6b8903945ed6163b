//! B+tree node codec and the search/insert/split machinery that operates on
//! pages through the pager.
//!
//! Every multi-byte integer in a page is little-endian. This is a deliberate,
//! documented choice (unlike the host-endian layout this engine's ancestor
//! tutorial code used, which made its files non-portable across machines).

use super::pager::{Pager, PAGE_SIZE};
use super::row::{Row, ROW_SIZE};
use crate::errors::Error;

pub const INVALID_PAGE_NUM: u32 = u32::MAX;

// --- Common node header ---------------------------------------------------

const NODE_TYPE_OFFSET: usize = 0;
const IS_ROOT_OFFSET: usize = 1;
const PARENT_POINTER_OFFSET: usize = 2;
pub const COMMON_NODE_HEADER_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

pub fn get_node_type(buf: &[u8; PAGE_SIZE]) -> NodeType {
    match buf[NODE_TYPE_OFFSET] {
        1 => NodeType::Leaf,
        _ => NodeType::Internal,
    }
}

pub fn set_node_type(buf: &mut [u8; PAGE_SIZE], node_type: NodeType) {
    buf[NODE_TYPE_OFFSET] = node_type as u8;
}

pub fn is_node_root(buf: &[u8; PAGE_SIZE]) -> bool {
    buf[IS_ROOT_OFFSET] != 0
}

pub fn set_node_root(buf: &mut [u8; PAGE_SIZE], is_root: bool) {
    buf[IS_ROOT_OFFSET] = is_root as u8;
}

pub fn node_parent(buf: &[u8; PAGE_SIZE]) -> u32 {
    u32::from_le_bytes(buf[PARENT_POINTER_OFFSET..PARENT_POINTER_OFFSET + 4].try_into().unwrap())
}

pub fn set_node_parent(buf: &mut [u8; PAGE_SIZE], parent_page_num: u32) {
    buf[PARENT_POINTER_OFFSET..PARENT_POINTER_OFFSET + 4].copy_from_slice(&parent_page_num.to_le_bytes());
}

// --- Leaf node --------------------------------------------------------------

const LEAF_NODE_NUM_CELLS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;
const LEAF_NODE_NEXT_LEAF_OFFSET: usize = LEAF_NODE_NUM_CELLS_OFFSET + 4;
pub const LEAF_NODE_HEADER_SIZE: usize = LEAF_NODE_NEXT_LEAF_OFFSET + 4;

const LEAF_NODE_KEY_SIZE: usize = 4;
const LEAF_NODE_VALUE_SIZE: usize = ROW_SIZE;
pub const LEAF_NODE_CELL_SIZE: usize = LEAF_NODE_KEY_SIZE + LEAF_NODE_VALUE_SIZE;
const LEAF_NODE_SPACE_FOR_CELLS: usize = PAGE_SIZE - LEAF_NODE_HEADER_SIZE;
pub const LEAF_NODE_MAX_CELLS: usize = LEAF_NODE_SPACE_FOR_CELLS / LEAF_NODE_CELL_SIZE;

pub fn leaf_split_counts() -> (usize, usize) {
    let total = LEAF_NODE_MAX_CELLS + 1;
    let left = total / 2 + total % 2;
    (left, total - left)
}

pub fn initialize_leaf_node(buf: &mut [u8; PAGE_SIZE]) {
    set_node_type(buf, NodeType::Leaf);
    set_node_root(buf, false);
    set_leaf_node_num_cells(buf, 0);
    set_leaf_node_next_leaf(buf, 0);
}

pub fn leaf_node_num_cells(buf: &[u8; PAGE_SIZE]) -> u32 {
    u32::from_le_bytes(buf[LEAF_NODE_NUM_CELLS_OFFSET..LEAF_NODE_NUM_CELLS_OFFSET + 4].try_into().unwrap())
}

pub fn set_leaf_node_num_cells(buf: &mut [u8; PAGE_SIZE], num_cells: u32) {
    buf[LEAF_NODE_NUM_CELLS_OFFSET..LEAF_NODE_NUM_CELLS_OFFSET + 4].copy_from_slice(&num_cells.to_le_bytes());
}

pub fn leaf_node_next_leaf(buf: &[u8; PAGE_SIZE]) -> u32 {
    u32::from_le_bytes(buf[LEAF_NODE_NEXT_LEAF_OFFSET..LEAF_NODE_NEXT_LEAF_OFFSET + 4].try_into().unwrap())
}

pub fn set_leaf_node_next_leaf(buf: &mut [u8; PAGE_SIZE], next_leaf_page: u32) {
    buf[LEAF_NODE_NEXT_LEAF_OFFSET..LEAF_NODE_NEXT_LEAF_OFFSET + 4].copy_from_slice(&next_leaf_page.to_le_bytes());
}

fn leaf_node_cell_offset(cell_num: u32) -> usize {
    LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE
}

pub fn leaf_node_key(buf: &[u8; PAGE_SIZE], cell_num: u32) -> u32 {
    let off = leaf_node_cell_offset(cell_num);
    u32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

pub fn set_leaf_node_key(buf: &mut [u8; PAGE_SIZE], cell_num: u32, key: u32) {
    let off = leaf_node_cell_offset(cell_num);
    buf[off..off + 4].copy_from_slice(&key.to_le_bytes());
}

pub fn leaf_node_value(buf: &[u8; PAGE_SIZE], cell_num: u32) -> &[u8] {
    let off = leaf_node_cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
    &buf[off..off + LEAF_NODE_VALUE_SIZE]
}

pub fn leaf_node_value_mut(buf: &mut [u8; PAGE_SIZE], cell_num: u32) -> &mut [u8] {
    let off = leaf_node_cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
    &mut buf[off..off + LEAF_NODE_VALUE_SIZE]
}

/// Binary search for `key` among a leaf's cells. Returns the matching cell, or
/// the index of the first cell with a strictly greater key (the insertion point).
pub fn leaf_node_find_cell(buf: &[u8; PAGE_SIZE], key: u32) -> u32 {
    let num_cells = leaf_node_num_cells(buf);
    let mut lo = 0u32;
    let mut hi = num_cells;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let mid_key = leaf_node_key(buf, mid);
        if mid_key == key {
            return mid;
        }
        if key < mid_key {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

// --- Internal node -----------------------------------------------------------

const INTERNAL_NODE_NUM_KEYS_OFFSET: usize = COMMON_NODE_HEADER_SIZE;
const INTERNAL_NODE_RIGHT_CHILD_OFFSET: usize = INTERNAL_NODE_NUM_KEYS_OFFSET + 4;
pub const INTERNAL_NODE_HEADER_SIZE: usize = INTERNAL_NODE_RIGHT_CHILD_OFFSET + 4;
pub const INTERNAL_NODE_CELL_SIZE: usize = 8; // (child_page: u32, key: u32)

/// Deliberately small so splits trigger with modest inserts, which keeps
/// end-to-end tests fast.
pub const INTERNAL_NODE_MAX_CELLS: usize = 3;

pub fn initialize_internal_node(buf: &mut [u8; PAGE_SIZE]) {
    set_node_type(buf, NodeType::Internal);
    set_node_root(buf, false);
    set_internal_node_num_keys(buf, 0);
    set_internal_node_right_child(buf, INVALID_PAGE_NUM);
}

pub fn internal_node_num_keys(buf: &[u8; PAGE_SIZE]) -> u32 {
    u32::from_le_bytes(buf[INTERNAL_NODE_NUM_KEYS_OFFSET..INTERNAL_NODE_NUM_KEYS_OFFSET + 4].try_into().unwrap())
}

pub fn set_internal_node_num_keys(buf: &mut [u8; PAGE_SIZE], num_keys: u32) {
    buf[INTERNAL_NODE_NUM_KEYS_OFFSET..INTERNAL_NODE_NUM_KEYS_OFFSET + 4].copy_from_slice(&num_keys.to_le_bytes());
}

pub fn internal_node_right_child(buf: &[u8; PAGE_SIZE]) -> u32 {
    u32::from_le_bytes(
        buf[INTERNAL_NODE_RIGHT_CHILD_OFFSET..INTERNAL_NODE_RIGHT_CHILD_OFFSET + 4]
            .try_into()
            .unwrap(),
    )
}

pub fn set_internal_node_right_child(buf: &mut [u8; PAGE_SIZE], page_num: u32) {
    buf[INTERNAL_NODE_RIGHT_CHILD_OFFSET..INTERNAL_NODE_RIGHT_CHILD_OFFSET + 4].copy_from_slice(&page_num.to_le_bytes());
}

fn internal_node_cell_offset(cell_num: u32) -> usize {
    INTERNAL_NODE_HEADER_SIZE + cell_num as usize * INTERNAL_NODE_CELL_SIZE
}

fn internal_node_cell_child(buf: &[u8; PAGE_SIZE], cell_num: u32) -> u32 {
    let off = internal_node_cell_offset(cell_num);
    u32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

fn set_internal_node_cell_child(buf: &mut [u8; PAGE_SIZE], cell_num: u32, page_num: u32) {
    let off = internal_node_cell_offset(cell_num);
    buf[off..off + 4].copy_from_slice(&page_num.to_le_bytes());
}

pub fn internal_node_key(buf: &[u8; PAGE_SIZE], cell_num: u32) -> u32 {
    let off = internal_node_cell_offset(cell_num) + 4;
    u32::from_le_bytes(buf[off..off + 4].try_into().unwrap())
}

fn set_internal_node_cell_key(buf: &mut [u8; PAGE_SIZE], cell_num: u32, key: u32) {
    let off = internal_node_cell_offset(cell_num) + 4;
    buf[off..off + 4].copy_from_slice(&key.to_le_bytes());
}

/// Logical child lookup: `child_num == num_keys` means the right child.
pub fn internal_node_child(buf: &[u8; PAGE_SIZE], child_num: u32) -> u32 {
    let num_keys = internal_node_num_keys(buf);
    if child_num == num_keys {
        internal_node_right_child(buf)
    } else {
        internal_node_cell_child(buf, child_num)
    }
}

/// Smallest index `i` in `0..num_keys` with `key[i] >= target`, or `num_keys`
/// if every key is smaller (meaning `target` belongs under `right_child`).
pub fn internal_node_find_child(buf: &[u8; PAGE_SIZE], key: u32) -> u32 {
    let num_keys = internal_node_num_keys(buf);
    let mut lo = 0u32;
    let mut hi = num_keys;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if internal_node_key(buf, mid) >= key {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// The greatest key reachable in `page_num`'s subtree: the last cell's key for
/// a leaf, or recursively the max key of `right_child` for an internal node.
pub fn max_key(pager: &mut Pager, page_num: u32) -> Result<u32, Error> {
    let node_type = get_node_type(pager.get_page(page_num)?);
    match node_type {
        NodeType::Leaf => {
            let buf = pager.get_page(page_num)?;
            let num_cells = leaf_node_num_cells(buf);
            if num_cells == 0 {
                Ok(0)
            } else {
                Ok(leaf_node_key(buf, num_cells - 1))
            }
        }
        NodeType::Internal => {
            let right_child = internal_node_right_child(pager.get_page(page_num)?);
            max_key(pager, right_child)
        }
    }
}

// --- Insert / split cascade --------------------------------------------------

/// Inserts `row` (keyed by `row.id`) at the leaf `cursor.page_num` /
/// `cursor.cell_num`, splitting the leaf first if it's full.
pub fn leaf_insert(pager: &mut Pager, page_num: u32, cell_num: u32, key: u32, row: &Row) -> Result<(), Error> {
    let num_cells = leaf_node_num_cells(pager.get_page(page_num)?);
    if num_cells as usize >= LEAF_NODE_MAX_CELLS {
        return leaf_split_and_insert(pager, page_num, cell_num, key, row);
    }

    let buf = pager.get_page(page_num)?;
    if cell_num < num_cells {
        let start = leaf_node_cell_offset(cell_num);
        let end = leaf_node_cell_offset(num_cells);
        buf.copy_within(start..end, start + LEAF_NODE_CELL_SIZE);
    }
    set_leaf_node_num_cells(buf, num_cells + 1);
    set_leaf_node_key(buf, cell_num, key);
    leaf_node_value_mut(buf, cell_num).copy_from_slice(&row.encode());
    Ok(())
}

fn leaf_split_and_insert(
    pager: &mut Pager,
    old_page_num: u32,
    cell_num: u32,
    key: u32,
    row: &Row,
) -> Result<(), Error> {
    let (old_parent, old_next_leaf, mut cells) = {
        let buf = pager.get_page(old_page_num)?;
        let mut cells = Vec::with_capacity(LEAF_NODE_MAX_CELLS + 1);
        for i in 0..LEAF_NODE_MAX_CELLS as u32 {
            let mut value = [0u8; ROW_SIZE];
            value.copy_from_slice(leaf_node_value(buf, i));
            cells.push((leaf_node_key(buf, i), value));
        }
        (node_parent(buf), leaf_node_next_leaf(buf), cells)
    };
    cells.insert(cell_num as usize, (key, row.encode()));

    let (left_count, right_count) = leaf_split_counts();
    let new_page_num = pager.allocate_page();

    {
        let buf = pager.get_page(new_page_num)?;
        initialize_leaf_node(buf);
        set_node_parent(buf, old_parent);
        set_leaf_node_next_leaf(buf, old_next_leaf);
    }
    {
        let buf = pager.get_page(old_page_num)?;
        set_leaf_node_next_leaf(buf, new_page_num);
        set_leaf_node_num_cells(buf, left_count as u32);
        for (i, (k, v)) in cells[..left_count].iter().enumerate() {
            set_leaf_node_key(buf, i as u32, *k);
            leaf_node_value_mut(buf, i as u32).copy_from_slice(v);
        }
    }
    {
        let buf = pager.get_page(new_page_num)?;
        set_leaf_node_num_cells(buf, right_count as u32);
        for (i, (k, v)) in cells[left_count..].iter().enumerate() {
            set_leaf_node_key(buf, i as u32, *k);
            leaf_node_value_mut(buf, i as u32).copy_from_slice(v);
        }
    }

    let was_root = is_node_root(pager.get_page(old_page_num)?);
    if was_root {
        create_new_root(pager, old_page_num, new_page_num)?;
    } else {
        // `cells` holds every key the old leaf had before the split, so its
        // last entry is the key the parent still has on file for this child.
        let old_max = cells.last().map(|(k, _)| *k).unwrap_or(0);
        let new_max = max_key(pager, old_page_num)?;
        update_internal_node_key(pager, old_parent, old_max, new_max)?;
        internal_node_insert(pager, old_parent, new_page_num)?;
    }
    Ok(())
}

/// Allocates a new left child holding a copy of the current root, then
/// reinitializes the root (page 0) as an internal node with that left child
/// and `right_child_page_num` as its right child. Returns the new left
/// child's page number — callers must keep operating on that page number,
/// not the (now rewritten) root page, for any further work on the "old" node.
pub fn create_new_root(pager: &mut Pager, root_page_num: u32, right_child_page_num: u32) -> Result<u32, Error> {
    let root_copy: [u8; PAGE_SIZE] = *pager.get_page(root_page_num)?;
    let left_page_num = pager.allocate_page();

    {
        let left_buf = pager.get_page(left_page_num)?;
        *left_buf = root_copy;
        set_node_root(left_buf, false);
    }

    let left_is_internal = get_node_type(pager.get_page(left_page_num)?) == NodeType::Internal;
    if left_is_internal {
        let num_keys = internal_node_num_keys(pager.get_page(left_page_num)?);
        for i in 0..=num_keys {
            let child_page = internal_node_child(pager.get_page(left_page_num)?, i);
            set_node_parent(pager.get_page(child_page)?, left_page_num);
        }
    }

    let left_max = max_key(pager, left_page_num)?;
    {
        let root_buf = pager.get_page(root_page_num)?;
        initialize_internal_node(root_buf);
        set_node_root(root_buf, true);
        set_internal_node_num_keys(root_buf, 1);
        set_internal_node_cell_child(root_buf, 0, left_page_num);
        set_internal_node_cell_key(root_buf, 0, left_max);
        set_internal_node_right_child(root_buf, right_child_page_num);
    }
    set_node_parent(pager.get_page(left_page_num)?, root_page_num);
    set_node_parent(pager.get_page(right_child_page_num)?, root_page_num);

    Ok(left_page_num)
}

pub fn internal_node_insert(pager: &mut Pager, parent_page_num: u32, child_page_num: u32) -> Result<(), Error> {
    let child_max = max_key(pager, child_page_num)?;
    let buf = pager.get_page(parent_page_num)?;
    let num_keys = internal_node_num_keys(buf);
    let index = internal_node_find_child(buf, child_max);
    let right_child = internal_node_right_child(buf);

    if num_keys as usize >= INTERNAL_NODE_MAX_CELLS {
        return internal_node_split_and_insert(pager, parent_page_num, child_page_num);
    }

    if right_child == INVALID_PAGE_NUM {
        set_internal_node_right_child(pager.get_page(parent_page_num)?, child_page_num);
        return Ok(());
    }

    let right_child_max = max_key(pager, right_child)?;
    let buf = pager.get_page(parent_page_num)?;
    if child_max > right_child_max {
        set_internal_node_cell_child(buf, num_keys, right_child);
        set_internal_node_cell_key(buf, num_keys, right_child_max);
        set_internal_node_right_child(buf, child_page_num);
    } else {
        let start = internal_node_cell_offset(index);
        let end = internal_node_cell_offset(num_keys);
        buf.copy_within(start..end, start + INTERNAL_NODE_CELL_SIZE);
        set_internal_node_cell_child(buf, index, child_page_num);
        set_internal_node_cell_key(buf, index, child_max);
    }
    set_internal_node_num_keys(buf, num_keys + 1);
    Ok(())
}

fn internal_node_split_and_insert(pager: &mut Pager, parent_page_num: u32, child_page_num: u32) -> Result<(), Error> {
    let old_max = max_key(pager, parent_page_num)?;
    let splitting_root = is_node_root(pager.get_page(parent_page_num)?);
    let grandparent_page_num = if splitting_root {
        0
    } else {
        node_parent(pager.get_page(parent_page_num)?)
    };

    let new_page_num = pager.allocate_page();
    let old_page_num = if splitting_root {
        let left = create_new_root(pager, parent_page_num, new_page_num)?;
        let new_buf = pager.get_page(new_page_num)?;
        initialize_internal_node(new_buf);
        set_node_parent(new_buf, parent_page_num);
        left
    } else {
        let new_buf = pager.get_page(new_page_num)?;
        initialize_internal_node(new_buf);
        set_node_parent(new_buf, grandparent_page_num);
        parent_page_num
    };

    // Move old's right child over to new.
    let old_right_child = internal_node_right_child(pager.get_page(old_page_num)?);
    internal_node_insert(pager, new_page_num, old_right_child)?;
    set_node_parent(pager.get_page(old_right_child)?, new_page_num);
    set_internal_node_right_child(pager.get_page(old_page_num)?, INVALID_PAGE_NUM);

    // Move the top half of old's keyed children into new.
    let mut i = (INTERNAL_NODE_MAX_CELLS - 1) as i64;
    let lower_bound = (INTERNAL_NODE_MAX_CELLS / 2) as i64;
    while i > lower_bound {
        let idx = i as u32;
        let moving_child = internal_node_cell_child(pager.get_page(old_page_num)?, idx);
        internal_node_insert(pager, new_page_num, moving_child)?;
        set_node_parent(pager.get_page(moving_child)?, new_page_num);
        let num_keys = internal_node_num_keys(pager.get_page(old_page_num)?);
        set_internal_node_num_keys(pager.get_page(old_page_num)?, num_keys - 1);
        i -= 1;
    }

    // Old's last remaining keyed child becomes its new right child.
    let num_keys = internal_node_num_keys(pager.get_page(old_page_num)?);
    let last_child = internal_node_cell_child(pager.get_page(old_page_num)?, num_keys - 1);
    {
        let buf = pager.get_page(old_page_num)?;
        set_internal_node_right_child(buf, last_child);
        set_internal_node_num_keys(buf, num_keys - 1);
    }

    // Place the child that triggered the split.
    let child_max = max_key(pager, child_page_num)?;
    let destination = if child_max < max_key(pager, old_page_num)? {
        old_page_num
    } else {
        new_page_num
    };
    internal_node_insert(pager, destination, child_page_num)?;
    set_node_parent(pager.get_page(child_page_num)?, destination);

    let new_old_max = max_key(pager, old_page_num)?;
    update_internal_node_key(pager, grandparent_page_num, old_max, new_old_max)?;
    if !splitting_root {
        internal_node_insert(pager, grandparent_page_num, new_page_num)?;
        set_node_parent(pager.get_page(new_page_num)?, grandparent_page_num);
    }
    Ok(())
}

/// Finds the cell in `node` whose key is `old_key` and overwrites it with
/// `new_key`. A no-op if `old_key` belonged to the right-child subtree — the
/// caller is expected to have updated the grandparent in that case.
pub fn update_internal_node_key(pager: &mut Pager, node_page_num: u32, old_key: u32, new_key: u32) -> Result<(), Error> {
    let buf = pager.get_page(node_page_num)?;
    let num_keys = internal_node_num_keys(buf);
    let index = internal_node_find_child(buf, old_key);
    if index < num_keys {
        set_internal_node_cell_key(pager.get_page(node_page_num)?, index, new_key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::cursor::Cursor;
    use crate::storage::table::Table;
    use tempfile::NamedTempFile;

    fn open_table() -> (Table, NamedTempFile) {
        let file = NamedTempFile::new().unwrap();
        let table = Table::open(file.path()).unwrap();
        (table, file)
    }

    #[test]
    fn leaf_node_layout_round_trips() {
        let mut buf = [0u8; PAGE_SIZE];
        initialize_leaf_node(&mut buf);
        assert_eq!(leaf_node_num_cells(&buf), 0);
        set_leaf_node_key(&mut buf, 0, 42);
        leaf_node_value_mut(&mut buf, 0).copy_from_slice(&[7u8; ROW_SIZE]);
        assert_eq!(leaf_node_key(&buf, 0), 42);
        assert_eq!(leaf_node_value(&buf, 0), &[7u8; ROW_SIZE][..]);
    }

    #[test]
    fn internal_node_find_child_binary_searches() {
        let mut buf = [0u8; PAGE_SIZE];
        initialize_internal_node(&mut buf);
        set_internal_node_num_keys(&mut buf, 3);
        set_internal_node_cell_key(&mut buf, 0, 10);
        set_internal_node_cell_key(&mut buf, 1, 20);
        set_internal_node_cell_key(&mut buf, 2, 30);
        assert_eq!(internal_node_find_child(&buf, 15), 1);
        assert_eq!(internal_node_find_child(&buf, 30), 2);
        assert_eq!(internal_node_find_child(&buf, 31), 3);
    }

    #[test]
    fn inserting_past_leaf_capacity_splits_and_promotes_root() {
        let (mut table, _file) = open_table();
        for id in 0..=LEAF_NODE_MAX_CELLS as u32 {
            let row = Row::new(id, "u", "e@e").unwrap();
            table.insert(&row).unwrap();
        }
        let root = get_node_type(table.pager_mut().get_page(0).unwrap());
        assert_eq!(root, NodeType::Internal);
    }

    #[test]
    fn root_level_internal_split_keeps_key_routing_correct() {
        let (mut table, _file) = open_table();
        let ids: Vec<u32> = (0..200).collect();
        for &id in &ids {
            table.insert(&Row::new(id, "u", "e@e").unwrap()).unwrap();
        }

        // With this many rows the root must have been through at least one
        // internal-node split of its own, not just leaf splits.
        let root_type = get_node_type(table.pager_mut().get_page(0).unwrap());
        assert_eq!(root_type, NodeType::Internal);

        // Every key must still be reachable by direct tree descent, not just
        // by walking the physical leaf chain — this is what a stale
        // internal-node key (key[i] != max_key(child[i])) would break.
        for &id in &ids {
            let cursor = Cursor::find(table.pager_mut(), table.root_page_num(), id).unwrap();
            assert!(!cursor.end_of_table, "key {} not found via Cursor::find", id);
            let found_key = cursor.key(table.pager_mut()).unwrap();
            assert_eq!(found_key, id, "Cursor::find misrouted lookup for key {}", id);
            let row = Row::decode(cursor.value(table.pager_mut()).unwrap());
            assert_eq!(row.id, id);
        }
    }
}
