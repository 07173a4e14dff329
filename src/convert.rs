//! Format detection and conversion
//!
//! Main entry point: takes a Pyrogram or Telethon session string and
//! produces the equivalent gogram session string.

use crate::session::{Session, SessionFormat};
use crate::{pyrogram, telethon, Result};

/// How the legacy format of an input is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detection {
    /// Trust the leading `1`: Telethon if present, Pyrogram otherwise
    #[default]
    Prefix,
    /// Like `Prefix`, but a `1`-prefixed string that fails to decode as
    /// Telethon is retried as Pyrogram
    Fallback,
}

/// Session converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    detection: Detection,
}

impl Converter {
    /// Create a converter with prefix-only detection
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detection mode
    pub fn with_detection(mut self, detection: Detection) -> Self {
        self.detection = detection;
        self
    }

    /// Get the detection mode
    pub fn detection(&self) -> Detection {
        self.detection
    }

    /// Decode a legacy session string without re-encoding it
    ///
    /// Leading and trailing whitespace is ignored.
    pub fn decode(&self, session: &str) -> Result<Session> {
        let session = session.trim();
        let format = SessionFormat::detect(session);
        tracing::debug!("Detected {} session", format);

        match decode_as(format, session) {
            Ok(decoded) => Ok(decoded),
            // A string without the prefix can never be Telethon, so only
            // the Telethon branch has something to fall back to.
            Err(e) if self.detection == Detection::Fallback && format == SessionFormat::Telethon => {
                tracing::warn!("Telethon decoding failed ({}), retrying as Pyrogram", e);
                decode_as(SessionFormat::Pyrogram, session).map_err(|_| e)
            }
            Err(e) => Err(e),
        }
    }

    /// Convert a legacy session string to a gogram session string
    pub fn convert(&self, session: &str) -> Result<String> {
        let decoded = self.decode(session)?;
        tracing::debug!(
            "Endpoint: {}, auth key: {} bytes",
            decoded.endpoint(),
            decoded.auth_key().as_bytes().len()
        );
        Ok(decoded.to_gogram_string())
    }
}

fn decode_as(format: SessionFormat, session: &str) -> Result<Session> {
    match format {
        SessionFormat::Pyrogram => pyrogram::decode(session),
        SessionFormat::Telethon => telethon::decode(session),
        SessionFormat::Gogram => crate::gogram::decode(session),
    }
}

/// Decode a legacy session string using prefix detection
pub fn decode(session: &str) -> Result<Session> {
    Converter::default().decode(session)
}

/// Convert a legacy session string to gogram using prefix detection
pub fn convert(session: &str) -> Result<String> {
    Converter::default().convert(session)
}
