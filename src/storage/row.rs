//! The fixed `users` row layout: `id: u32`, `username: bytes[33]`, `email: bytes[256]`.

use crate::errors::Error;

pub const USERNAME_SIZE: usize = 32;
pub const EMAIL_SIZE: usize = 255;
pub const ROW_SIZE: usize = 4 + (USERNAME_SIZE + 1) + (EMAIL_SIZE + 1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: [u8; USERNAME_SIZE + 1],
    pub email: [u8; EMAIL_SIZE + 1],
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self, Error> {
        if username.len() > USERNAME_SIZE || email.len() > EMAIL_SIZE {
            return Err(Error::Syntax("String is too long.".to_owned()));
        }
        Ok(Row {
            id,
            username: str_to_fixed_bytes(username),
            email: str_to_fixed_bytes(email),
        })
    }

    pub fn encode(&self) -> [u8; ROW_SIZE] {
        let mut buf = [0u8; ROW_SIZE];
        buf[0..4].copy_from_slice(&self.id.to_le_bytes());
        buf[4..4 + USERNAME_SIZE + 1].copy_from_slice(&self.username);
        buf[4 + USERNAME_SIZE + 1..].copy_from_slice(&self.email);
        buf
    }

    pub fn decode(buf: &[u8]) -> Self {
        let id = u32::from_le_bytes(buf[0..4].try_into().unwrap());
        let mut username = [0u8; USERNAME_SIZE + 1];
        username.copy_from_slice(&buf[4..4 + USERNAME_SIZE + 1]);
        let mut email = [0u8; EMAIL_SIZE + 1];
        email.copy_from_slice(&buf[4 + USERNAME_SIZE + 1..ROW_SIZE]);
        Row { id, username, email }
    }

    pub fn username_str(&self) -> String {
        fixed_bytes_to_str(&self.username)
    }

    pub fn email_str(&self) -> String {
        fixed_bytes_to_str(&self.email)
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username_str(), self.email_str())
    }
}

pub fn str_to_fixed_bytes<const N: usize>(input: &str) -> [u8; N] {
    let mut buf = [0u8; N];
    let bytes = input.as_bytes();
    let len = bytes.len().min(N);
    buf[..len].copy_from_slice(&bytes[..len]);
    buf
}

fn fixed_bytes_to_str(buf: &[u8]) -> String {
    let trimmed = buf.split(|&b| b == 0).next().unwrap_or(&[]);
    String::from_utf8_lossy(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_encode_decode() {
        let row = Row::new(7, "seven", "seven@x").unwrap();
        let decoded = Row::decode(&row.encode());
        assert_eq!(row, decoded);
    }

    #[test]
    fn rejects_oversized_username() {
        let long = "a".repeat(USERNAME_SIZE + 1);
        assert!(Row::new(1, &long, "e@e").is_err());
    }

    #[test]
    fn rejects_oversized_email() {
        let long = "a".repeat(EMAIL_SIZE + 1);
        assert!(Row::new(1, "u", &long).is_err());
    }

    #[test]
    fn accepts_exact_boundary_lengths() {
        let username = "a".repeat(USERNAME_SIZE);
        let email = "b".repeat(EMAIL_SIZE);
        assert!(Row::new(1, &username, &email).is_ok());
    }
}
