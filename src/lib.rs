//! # tgsession
//!
//! Convert Telegram session strings between client libraries.
//!
//! ## Features
//!
//! - Decode Pyrogram session strings (datacenter resolved from a built-in table)
//! - Decode Telethon session strings (IPv4 and IPv6)
//! - Encode gogram session strings
//! - Prefix-based format detection, with optional fallback
//!
//! ## Example
//!
//! ```rust,no_run
//! fn main() -> Result<(), tgsession::Error> {
//!     let session = tgsession::decode(tgsession::DEFAULT_SAMPLE_SESSION)?;
//!     println!("Endpoint: {}", session.endpoint());
//!
//!     let gogram = tgsession::convert(tgsession::DEFAULT_SAMPLE_SESSION)?;
//!     println!("Session: {}", gogram);
//!
//!     Ok(())
//! }
//! ```

mod error;
mod reader;
mod encoding;
mod dc;
mod session;
pub mod pyrogram;
pub mod telethon;
pub mod gogram;
mod convert;

pub use error::{Error, Result};
pub use reader::ByteReader;
pub use dc::endpoint as dc_endpoint;
pub use session::{AuthKey, Session, SessionFormat};
pub use convert::{convert, decode, Converter, Detection};

/// Auth key size in bytes (256 bytes = 2048 bits)
pub const AUTH_KEY_SIZE: usize = 256;

/// Pyrogram session (DC 2, production) converted when no input is given
pub const DEFAULT_SAMPLE_SESSION: &str = "AgGIzloAS4zC-M9OIJYQfFRHYO0mGR81rqYFx3v9AKqhi3qRZvinIIP3xeif7YiitdzoVwtDX5P8U_XPkl91ZDmcX8MvhxSgFZ02Z5VKOuWF4eEZOJr9zFOR9ZH7xEdbbah58cS3OsyaVyuiJdeb94n5WmpHQSM0jR4Ciiprj4OCdlHFyRfxnUdU6_A1M8_C-QXFcFnrybuCAtV1ITPk4WQdA2qbCghSRww47m33skNzne50KxTzB811-Nbs2lt_rIl3sqqmfRzfDg4ukLgSKbFLw1uR3EmjsgPU-fyzV-_7d3EdFEZJ26pUA39rV8vPuc3pEhIs1L0zmCXNwfNaGurCgoMCMwAAAAHjG_iTAA";
