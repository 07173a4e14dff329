//! Gogram session strings
//!
//! A gogram session is unpadded URL-safe base64 of:
//! - varint: hostname length in bytes
//! - hostname (UTF-8)
//! - 256 bytes: auth_key
//!
//! The varint stores 7 bits per byte, least significant group first, with
//! the high bit set on every byte except the last.

use crate::encoding;
use crate::reader::ByteReader;
use crate::session::{AuthKey, Session, SessionFormat};
use crate::{Error, Result, AUTH_KEY_SIZE};

/// Longest varint needed for a 64-bit length
const MAX_VARINT_LEN: usize = 10;

/// Append `value` as a varint
pub fn write_varint(buf: &mut Vec<u8>, value: usize) {
    let mut value = value as u64;
    while value >= 0x80 {
        buf.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Read a varint written by [`write_varint`]
pub fn read_varint(reader: &mut ByteReader<'_>) -> Result<usize> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = reader.read_u8()?;
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return usize::try_from(value)
                .map_err(|_| Error::invalid_format("varint does not fit in usize"));
        }
    }
    Err(Error::invalid_format("varint is longer than 10 bytes"))
}

/// Encode an endpoint and auth key as a gogram session string
pub fn encode(endpoint: &str, auth_key: &AuthKey) -> String {
    let hostname = endpoint.as_bytes();

    let mut data = Vec::with_capacity(MAX_VARINT_LEN + hostname.len() + AUTH_KEY_SIZE);
    write_varint(&mut data, hostname.len());
    data.extend_from_slice(hostname);
    data.extend_from_slice(auth_key.as_bytes());

    encoding::encode(&data)
}

/// Decode a gogram session string
pub fn decode(session: &str) -> Result<Session> {
    let data = encoding::decode(session.trim())?;
    let mut reader = ByteReader::new(&data);

    let hostname_len = read_varint(&mut reader)?;
    let hostname = std::str::from_utf8(reader.read_bytes(hostname_len)?)
        .map_err(|_| Error::invalid_format("hostname is not valid UTF-8"))?;

    if reader.remaining() != AUTH_KEY_SIZE {
        return Err(Error::invalid_length(
            SessionFormat::Gogram,
            data.len(),
            reader.position() as usize + AUTH_KEY_SIZE,
        ));
    }
    let auth_key = AuthKey::from_bytes(reader.read_rest())?;

    Ok(Session::new(hostname, auth_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn varint(value: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        buf
    }

    #[test]
    fn test_varint_boundaries() {
        assert_eq!(varint(0), [0x00]);
        assert_eq!(varint(1), [0x01]);
        assert_eq!(varint(127), [0x7F]);
        assert_eq!(varint(128), [0x80, 0x01]);
        assert_eq!(varint(16383), [0xFF, 0x7F]);
        assert_eq!(varint(16384), [0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_varint_shape() {
        for value in [0usize, 1, 127, 128, 16383, 16384, 300, 2_097_151, 2_097_152] {
            let bytes = varint(value);
            let bits = usize::BITS - value.leading_zeros();
            let expected_len = ((bits as usize) + 6) / 7;
            assert_eq!(bytes.len(), expected_len.max(1), "length of {}", value);

            let (last, rest) = bytes.split_last().unwrap();
            assert!(rest.iter().all(|b| b & 0x80 != 0));
            assert_eq!(last & 0x80, 0);

            let mut reader = ByteReader::new(&bytes);
            assert_eq!(read_varint(&mut reader).unwrap(), value);
            assert!(reader.at_end());
        }
    }

    #[test]
    fn test_read_varint_too_long() {
        let bytes = [0xFF; 11];
        let mut reader = ByteReader::new(&bytes);
        assert!(matches!(
            read_varint(&mut reader),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_encode_layout() {
        let key = AuthKey::from([0x11; AUTH_KEY_SIZE]);
        let session = encode("149.154.167.51:443", &key);
        assert!(!session.ends_with('='));

        let data = encoding::decode(&session).unwrap();
        assert_eq!(data.len(), 1 + 18 + AUTH_KEY_SIZE);
        assert_eq!(data[0], 18);
        assert_eq!(&data[1..19], b"149.154.167.51:443");
        assert_eq!(&data[19..], key.as_bytes());
    }

    #[test]
    fn test_encode_long_hostname() {
        let key = AuthKey::from([0x22; AUTH_KEY_SIZE]);
        let hostname = "h".repeat(200);
        let data = encoding::decode(&encode(&hostname, &key)).unwrap();
        assert_eq!(&data[..2], [0xC8, 0x01]);
        assert_eq!(&data[2..202], hostname.as_bytes());
    }

    #[test]
    fn test_decode_inverts_encode() {
        let key = AuthKey::from([0x33; AUTH_KEY_SIZE]);
        let session = decode(&encode("Unknown DC 9", &key)).unwrap();
        assert_eq!(session.endpoint(), "Unknown DC 9");
        assert_eq!(session.auth_key(), &key);
    }

    #[test]
    fn test_decode_wrong_key_length() {
        let mut data = Vec::new();
        write_varint(&mut data, 3);
        data.extend_from_slice(b"a:1");
        data.extend_from_slice(&[0u8; 100]);
        assert!(matches!(
            decode(&encoding::encode(&data)),
            Err(Error::InvalidLength {
                format: SessionFormat::Gogram,
                observed: 104,
                expected: 260,
            })
        ));
    }

    #[test]
    fn test_decode_truncated_hostname() {
        let data = [0x20, b'a', b'b'];
        assert!(matches!(
            decode(&encoding::encode(&data)),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
