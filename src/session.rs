//! Decoded session representation
//!
//! Every decoder produces a [`Session`]: the endpoint string and the auth key.
//! Nothing else is carried between the decode and encode stages.

use std::fmt;

use crate::{gogram, Error, Result, AUTH_KEY_SIZE};

/// Session string formats understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionFormat {
    /// Pyrogram: unprefixed, fixed 271-byte payload
    Pyrogram,
    /// Telethon: `1` prefix, IPv4 or IPv6 payload
    Telethon,
    /// Gogram: varint-prefixed hostname followed by the auth key
    Gogram,
}

impl SessionFormat {
    /// Prefix that marks a Telethon session string
    pub const TELETHON_PREFIX: char = '1';

    /// Guess the legacy format of a session string from its first character
    ///
    /// Only the prefix is inspected. A Pyrogram string whose base64 happens
    /// to begin with `1` is reported as Telethon.
    pub fn detect(session: &str) -> Self {
        if session.trim().starts_with(Self::TELETHON_PREFIX) {
            Self::Telethon
        } else {
            Self::Pyrogram
        }
    }

    /// Human-readable name of the format
    pub fn name(self) -> &'static str {
        match self {
            Self::Pyrogram => "Pyrogram",
            Self::Telethon => "Telethon",
            Self::Gogram => "Gogram",
        }
    }
}

impl fmt::Display for SessionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Authorization key shared by all session formats
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey {
    data: [u8; AUTH_KEY_SIZE],
}

impl AuthKey {
    /// Create an AuthKey from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let data: [u8; AUTH_KEY_SIZE] = bytes.try_into().map_err(|_| {
            Error::invalid_format(format!(
                "auth key must be {} bytes, got {}",
                AUTH_KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self { data })
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8; AUTH_KEY_SIZE] {
        &self.data
    }
}

impl From<[u8; AUTH_KEY_SIZE]> for AuthKey {
    fn from(data: [u8; AUTH_KEY_SIZE]) -> Self {
        Self { data }
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Don't expose key in debug output
        f.debug_struct("AuthKey")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// A decoded session: where to connect and which key to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// `host:port`, or the directory's placeholder for an unknown DC
    endpoint: String,
    /// Authorization key (256 bytes)
    auth_key: AuthKey,
}

impl Session {
    /// Create a new session
    pub fn new(endpoint: impl Into<String>, auth_key: AuthKey) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_key,
        }
    }

    /// Get the endpoint string
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the auth key
    pub fn auth_key(&self) -> &AuthKey {
        &self.auth_key
    }

    /// Split into endpoint and auth key
    pub fn into_parts(self) -> (String, AuthKey) {
        (self.endpoint, self.auth_key)
    }

    /// Encode as a gogram session string
    pub fn to_gogram_string(&self) -> String {
        gogram::encode(&self.endpoint, &self.auth_key)
    }
}
