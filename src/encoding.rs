//! Base64 handling shared by the session codecs
//!
//! Every format uses the URL-safe alphabet. Decoding is forgiving: padding
//! may be present or missing, the standard alphabet is accepted, and
//! leftover bits in the final symbol are ignored.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::Result;

/// URL-safe engine: unpadded output, padding-indifferent input
pub const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Pad with `=` until the length is a multiple of 4
pub fn pad(input: &str) -> Cow<'_, str> {
    match input.len() % 4 {
        0 => Cow::Borrowed(input),
        rem => {
            let mut padded = String::with_capacity(input.len() + 4 - rem);
            padded.push_str(input);
            padded.extend(std::iter::repeat('=').take(4 - rem));
            Cow::Owned(padded)
        }
    }
}

/// Decode URL-safe (or standard) base64
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let input: Cow<'_, str> = if input.contains(&['+', '/'][..]) {
        Cow::Owned(input.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(input)
    };
    Ok(URL_SAFE_LENIENT.decode(input.as_bytes())?)
}

/// Encode as unpadded URL-safe base64
pub fn encode(data: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(data)
}
