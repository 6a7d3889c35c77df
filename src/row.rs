use std::fmt;

use crate::error::{Error, Result};
use crate::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE};

/// A single `(id, username, email)` record.
///
/// Fields are private so that the byte bounds checked in [`Row::new`] hold
/// for every row that reaches a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: u32,
    username: String,
    email: String,
}

impl Row {
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let email = email.into();

        if username.len() > COLUMN_USERNAME_SIZE {
            return Err(Error::StringTooLong {
                column: "username",
                max: COLUMN_USERNAME_SIZE,
            });
        }
        if email.len() > COLUMN_EMAIL_SIZE {
            return Err(Error::StringTooLong {
                column: "email",
                max: COLUMN_EMAIL_SIZE,
            });
        }

        Ok(Self {
            id,
            username,
            email,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}
