//! Pyrogram session strings
//!
//! Payload layout (271 bytes, Big Endian):
//! - `[0]`: dc_id
//! - `[1..5]`: api_id (ignored)
//! - `[5]`: test_mode flag, nonzero means test servers
//! - `[6..262]`: auth_key
//! - `[262..271]`: user_id and is_bot (ignored)

use crate::encoding;
use crate::reader::ByteReader;
use crate::session::{AuthKey, Session, SessionFormat};
use crate::{dc, Error, Result, AUTH_KEY_SIZE};

/// Size of a decoded Pyrogram payload
pub const PAYLOAD_LEN: usize = 271;

/// Offset of the test_mode flag
const TEST_MODE_OFFSET: usize = 5;

/// Decode a Pyrogram session string
///
/// The datacenter endpoint comes from the built-in directory; an unknown
/// datacenter yields the `Unknown DC {id}` placeholder rather than an error.
pub fn decode(session: &str) -> Result<Session> {
    let data = encoding::decode(&encoding::pad(session))?;

    if data.len() != PAYLOAD_LEN {
        return Err(Error::invalid_length(
            SessionFormat::Pyrogram,
            data.len(),
            PAYLOAD_LEN,
        ));
    }

    let mut reader = ByteReader::new(&data);
    let dc_id = reader.read_u8()?;
    reader.skip(TEST_MODE_OFFSET - 1)?;
    let test_mode = reader.read_bool()?;
    let auth_key = AuthKey::from_bytes(reader.read_bytes(AUTH_KEY_SIZE)?)?;

    let endpoint = dc::endpoint(dc_id, test_mode);
    tracing::debug!(
        "Pyrogram session: dc_id={}, test_mode={}, endpoint={}",
        dc_id,
        test_mode,
        endpoint
    );

    Ok(Session::new(endpoint, auth_key))
}

/// Build a Pyrogram session string
///
/// Fields this crate never reads (api_id, user_id, is_bot) are zero.
/// Output is unpadded URL-safe base64, as Pyrogram exports it.
pub fn encode_envelope(dc_id: u8, test_mode: bool, auth_key: &AuthKey) -> String {
    let mut data = Vec::with_capacity(PAYLOAD_LEN);
    data.push(dc_id);
    data.extend_from_slice(&0u32.to_be_bytes());
    data.push(u8::from(test_mode));
    data.extend_from_slice(auth_key.as_bytes());
    data.extend_from_slice(&0u64.to_be_bytes());
    data.push(0);

    encoding::encode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> AuthKey {
        let mut data = [0u8; AUTH_KEY_SIZE];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = i as u8;
        }
        AuthKey::from(data)
    }

    #[test]
    fn test_decode_production() {
        let session = decode(&encode_envelope(2, false, &test_key())).unwrap();
        assert_eq!(session.endpoint(), "149.154.167.51:443");
        assert_eq!(session.auth_key(), &test_key());
    }

    #[test]
    fn test_decode_test_mode() {
        let session = decode(&encode_envelope(3, true, &test_key())).unwrap();
        assert_eq!(session.endpoint(), "149.154.175.117:443");
    }

    #[test]
    fn test_any_nonzero_flag_is_test_mode() {
        let mut data = vec![0u8; PAYLOAD_LEN];
        data[0] = 1;
        data[5] = 0x80;
        let session = decode(&encoding::encode(&data)).unwrap();
        assert_eq!(session.endpoint(), "149.154.175.10:443");
    }

    #[test]
    fn test_ignores_header_and_trailer_bytes() {
        let mut data = vec![0xEE; PAYLOAD_LEN];
        data[0] = 5;
        data[5] = 0;
        data[6..262].copy_from_slice(test_key().as_bytes());
        let session = decode(&encoding::encode(&data)).unwrap();
        assert_eq!(session.endpoint(), "91.108.56.130:443");
        assert_eq!(session.auth_key(), &test_key());
    }

    #[test]
    fn test_unknown_dc_is_not_an_error() {
        let session = decode(&encode_envelope(9, false, &test_key())).unwrap();
        assert_eq!(session.endpoint(), "Unknown DC 9");
    }

    #[test]
    fn test_truncated_payload() {
        let data = vec![0u8; PAYLOAD_LEN - 1];
        let err = decode(&encoding::encode(&data)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                format: SessionFormat::Pyrogram,
                observed: 270,
                expected: 271,
            }
        ));
    }

    #[test]
    fn test_malformed_base64() {
        let mut session = encode_envelope(2, false, &test_key());
        session.replace_range(10..11, "!");
        assert!(matches!(decode(&session), Err(Error::MalformedInput { .. })));
    }

    #[test]
    fn test_padded_input() {
        let session = encode_envelope(1, false, &test_key());
        let padded = encoding::pad(&session).into_owned();
        assert_ne!(session, padded);
        assert_eq!(decode(&padded).unwrap(), decode(&session).unwrap());
    }
}
