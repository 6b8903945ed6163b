//! Tokenizes and parses the tiny statement grammar this engine supports:
//! `insert <id> <username> <email>` and `select`.

use crate::errors::Error;
use crate::storage::Row;

pub enum Statement {
    Insert(Row),
    Select,
}

pub fn parse(line: &str) -> Result<Statement, Error> {
    let mut tokens = line.split_ascii_whitespace();
    let keyword = tokens.next().unwrap_or("");

    match keyword {
        "insert" => parse_insert(tokens),
        "select" => Ok(Statement::Select),
        "" => Err(Error::Syntax("Syntax error. Could not parse statement.".to_owned())),
        other => Err(Error::Syntax(format!(
            "Unrecognized keyword at start of '{}'.",
            other
        ))),
    }
}

fn parse_insert<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Statement, Error> {
    let id_token = tokens.next();
    let username = tokens.next();
    let email = tokens.next();
    if tokens.next().is_some() {
        return Err(Error::Syntax("Syntax error. Could not parse statement.".to_owned()));
    }
    let (id_token, username, email) = match (id_token, username, email) {
        (Some(i), Some(u), Some(e)) => (i, u, e),
        _ => return Err(Error::Syntax("Syntax error. Could not parse statement.".to_owned())),
    };

    let id: i64 = id_token
        .parse()
        .map_err(|_| Error::Syntax("ID must be positive.".to_owned()))?;
    if id < 0 {
        return Err(Error::Syntax("ID must be positive.".to_owned()));
    }

    let row = Row::new(id as u32, username, email)?;
    Ok(Statement::Insert(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_insert() {
        match parse("insert 1 user1 person1@example.com").unwrap() {
            Statement::Insert(row) => {
                assert_eq!(row.id, 1);
                assert_eq!(row.username_str(), "user1");
                assert_eq!(row.email_str(), "person1@example.com");
            }
            _ => panic!("expected insert"),
        }
    }

    #[test]
    fn parses_select() {
        assert!(matches!(parse("select").unwrap(), Statement::Select));
    }

    #[test]
    fn rejects_negative_id() {
        let err = parse("insert -1 u e@e").unwrap_err();
        assert_eq!(err.to_string(), "ID must be positive.");
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = parse("insert abc u e@e").unwrap_err();
        assert_eq!(err.to_string(), "ID must be positive.");
    }

    #[test]
    fn rejects_malformed_insert() {
        let err = parse("insert 1 onlyusername").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error. Could not parse statement.");
    }

    #[test]
    fn rejects_unknown_keyword() {
        let err = parse("frobnicate 1").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized keyword at start of 'frobnicate'.");
    }
}
