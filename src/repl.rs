//! The REPL (Read-Eval-Print-Loop): a plain line-oriented loop over
//! stdin/stdout. No raw terminal mode, no line-editing widgets — just a
//! prompt, a line, and a dispatch to either a meta-command or a statement.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::errors::Error;
use crate::sql::{self, Statement};
use crate::storage::btree::{
    get_node_type, internal_node_child, internal_node_key, internal_node_num_keys,
    leaf_node_key, leaf_node_num_cells, NodeType, INTERNAL_NODE_MAX_CELLS, LEAF_NODE_MAX_CELLS,
};
use crate::storage::pager::{Pager, PAGE_SIZE, TABLE_MAX_PAGES};
use crate::storage::row::ROW_SIZE;
use crate::storage::Table;
use crate::{echo, error};

const PROMPT: &str = "db > ";

enum MetaOutcome {
    Continue,
    Exit,
}

pub fn start(path: &Path) -> Result<(), Error> {
    info!(path = %path.display(), "opening database");
    let mut table = Table::open(path)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt();
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('.') {
            match run_meta_command(command, &mut table) {
                MetaOutcome::Exit => return table.close(),
                MetaOutcome::Continue => continue,
            }
        }

        run_statement(line, &mut table)?;
    }

    table.close()
}

fn print_prompt() {
    print!("{}", PROMPT);
    let _ = io::stdout().flush();
}

fn run_meta_command(command: &str, table: &mut Table) -> MetaOutcome {
    match command {
        "exit" => MetaOutcome::Exit,
        "btree" => {
            echo!("Tree:\n");
            if let Err(e) = print_tree(table.pager_mut(), table.root_page_num(), 0) {
                error!("{}\n", e);
            }
            MetaOutcome::Continue
        }
        "constants" => {
            echo!("Constants:\n");
            echo!("ROW_SIZE: {}\n", ROW_SIZE);
            echo!("PAGE_SIZE: {}\n", PAGE_SIZE);
            echo!("TABLE_MAX_PAGES: {}\n", TABLE_MAX_PAGES);
            echo!("LEAF_NODE_MAX_CELLS: {}\n", LEAF_NODE_MAX_CELLS);
            echo!("INTERNAL_NODE_MAX_CELLS: {}\n", INTERNAL_NODE_MAX_CELLS);
            MetaOutcome::Continue
        }
        other => {
            error!("Unrecognized command '.{}'.\n", other);
            MetaOutcome::Continue
        }
    }
}

fn run_statement(line: &str, table: &mut Table) -> Result<(), Error> {
    match sql::parse(line) {
        Ok(Statement::Insert(row)) => match table.insert(&row) {
            Ok(()) => {
                echo!("Executed.\n");
                Ok(())
            }
            Err(Error::DuplicateKey) => {
                warn!(id = row.id, "duplicate key on insert");
                echo!("Error: Duplicate key.\n");
                Ok(())
            }
            Err(e @ (Error::Io(_) | Error::OutOfBounds(_) | Error::CorruptFile(_))) => Err(e),
            Err(e) => {
                error!("{}\n", e);
                Ok(())
            }
        },
        Ok(Statement::Select) => match table.select_all() {
            Ok(rows) => {
                for row in rows {
                    echo!("{}\n", row);
                }
                echo!("Executed.\n");
                Ok(())
            }
            Err(e) => Err(e),
        },
        Err(e) => {
            echo!("{}\n", e);
            Ok(())
        }
    }
}

/// Recursively dumps the tree, indenting each level by its depth. Leaves
/// print their keys; internal nodes print a header, then each child
/// (recursing) followed by its separating key.
fn print_tree(pager: &mut Pager, page_num: u32, indent_level: usize) -> Result<(), Error> {
    let node_type = get_node_type(pager.get_page(page_num)?);

    match node_type {
        NodeType::Leaf => {
            let buf = pager.get_page(page_num)?;
            let num_cells = leaf_node_num_cells(buf);
            print_indent(indent_level);
            echo!("- leaf (size {})\n", num_cells);
            for i in 0..num_cells {
                let key = leaf_node_key(pager.get_page(page_num)?, i);
                print_indent(indent_level + 1);
                echo!("- {}\n", key);
            }
        }
        NodeType::Internal => {
            let num_keys = internal_node_num_keys(pager.get_page(page_num)?);
            print_indent(indent_level);
            echo!("- internal (size {})\n", num_keys);
            for i in 0..num_keys {
                let child = internal_node_child(pager.get_page(page_num)?, i);
                print_tree(pager, child, indent_level + 1)?;
                let key = internal_node_key(pager.get_page(page_num)?, i);
                print_indent(indent_level + 1);
                echo!("- key {}\n", key);
            }
            let right_child = internal_node_child(pager.get_page(page_num)?, num_keys);
            print_tree(pager, right_child, indent_level + 1)?;
        }
    }
    Ok(())
}

fn print_indent(level: usize) {
    for _ in 0..level {
        echo!("  ");
    }
}
