//! Telethon session strings
//!
//! A Telethon string is the character `1` followed by URL-safe base64 of:
//! - `[0]`: dc_id (not interpreted)
//! - 4 or 16 bytes: IPv4 or IPv6 address
//! - 2 bytes: port (Big Endian)
//! - 256 bytes: auth_key

use std::net::IpAddr;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use crate::encoding;
use crate::reader::ByteReader;
use crate::session::{AuthKey, Session, SessionFormat};
use crate::{Error, Result, AUTH_KEY_SIZE};

/// Address family of a Telethon payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    V4,
    V6,
}

impl AddressKind {
    /// Pick the address family from the decoded payload size
    ///
    /// Only an exact IPv4-sized payload is IPv4; everything else is treated
    /// as IPv6 and left to the length check.
    pub fn from_payload_len(len: usize) -> Self {
        if len == Self::V4.payload_len() {
            Self::V4
        } else {
            Self::V6
        }
    }

    /// Size of the raw address in bytes
    pub fn address_len(self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V6 => 16,
        }
    }

    /// Total payload size for this address family
    pub fn payload_len(self) -> usize {
        1 + self.address_len() + 2 + AUTH_KEY_SIZE
    }

    /// Render raw address bytes
    ///
    /// IPv6 is written as eight full 4-digit lowercase groups with no `::`
    /// compression.
    fn render(self, address: &[u8]) -> String {
        match self {
            Self::V4 => address
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join("."),
            Self::V6 => address
                .chunks(2)
                .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
                .collect::<Vec<_>>()
                .join(":"),
        }
    }
}

/// Decode a Telethon session string
pub fn decode(session: &str) -> Result<Session> {
    let payload = session
        .strip_prefix(SessionFormat::TELETHON_PREFIX)
        .ok_or(Error::InvalidPrefix)?;
    let data = encoding::decode(payload)?;

    let kind = AddressKind::from_payload_len(data.len());
    if data.len() != kind.payload_len() {
        return Err(Error::invalid_length(
            SessionFormat::Telethon,
            data.len(),
            kind.payload_len(),
        ));
    }

    let mut reader = ByteReader::new(&data);
    let dc_id = reader.read_u8()?;
    let address = kind.render(reader.read_bytes(kind.address_len())?);
    let port = reader.read_u16()?;
    let auth_key = AuthKey::from_bytes(reader.read_bytes(AUTH_KEY_SIZE)?)?;

    tracing::debug!(
        "Telethon session: dc_id={}, address={:?}, endpoint={}:{}",
        dc_id,
        kind,
        address,
        port
    );

    Ok(Session::new(format!("{}:{}", address, port), auth_key))
}

/// Build a Telethon session string
///
/// Output uses padded URL-safe base64, as Telethon exports it.
pub fn encode_envelope(dc_id: u8, address: IpAddr, port: u16, auth_key: &AuthKey) -> String {
    let mut data = Vec::with_capacity(AddressKind::V6.payload_len());
    data.push(dc_id);
    match address {
        IpAddr::V4(ip) => data.extend_from_slice(&ip.octets()),
        IpAddr::V6(ip) => data.extend_from_slice(&ip.octets()),
    }
    data.extend_from_slice(&port.to_be_bytes());
    data.extend_from_slice(auth_key.as_bytes());

    let mut session = String::from(SessionFormat::TELETHON_PREFIX);
    session.push_str(&URL_SAFE.encode(&data));
    session
}
