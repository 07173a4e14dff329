//! Telegram datacenter directory

use std::borrow::Cow;

/// Telegram datacenter addresses (production)
const PRODUCTION: [(u8, &str); 5] = [
    (1, "149.154.175.53:443"),
    (2, "149.154.167.51:443"),
    (3, "149.154.175.100:443"),
    (4, "149.154.167.91:443"),
    (5, "91.108.56.130:443"),
];

/// Telegram datacenter addresses (test servers)
const TEST: [(u8, &str); 3] = [
    (1, "149.154.175.10:443"),
    (2, "149.154.167.40:443"),
    (3, "149.154.175.117:443"),
];

/// Resolve a datacenter ID to its `host:port` endpoint
///
/// Unknown IDs resolve to `Unknown DC {id}` instead of failing; callers
/// still get a usable session with a placeholder endpoint.
pub fn endpoint(dc_id: u8, test_mode: bool) -> Cow<'static, str> {
    let table: &[(u8, &'static str)] = if test_mode { &TEST } else { &PRODUCTION };

    match table.iter().find(|(id, _)| *id == dc_id) {
        Some((_, address)) => Cow::Borrowed(*address),
        None => {
            tracing::warn!("Unknown DC {} (test_mode={})", dc_id, test_mode);
            Cow::Owned(format!("Unknown DC {}", dc_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_table() {
        assert_eq!(endpoint(1, false), "149.154.175.53:443");
        assert_eq!(endpoint(2, false), "149.154.167.51:443");
        assert_eq!(endpoint(3, false), "149.154.175.100:443");
        assert_eq!(endpoint(4, false), "149.154.167.91:443");
        assert_eq!(endpoint(5, false), "91.108.56.130:443");
    }

    #[test]
    fn test_test_table() {
        assert_eq!(endpoint(1, true), "149.154.175.10:443");
        assert_eq!(endpoint(2, true), "149.154.167.40:443");
        assert_eq!(endpoint(3, true), "149.154.175.117:443");
    }

    #[test]
    fn test_unknown_dc() {
        assert_eq!(endpoint(9, false), "Unknown DC 9");
        assert_eq!(endpoint(0, false), "Unknown DC 0");
        // DC 4 only exists in production
        assert_eq!(endpoint(4, true), "Unknown DC 4");
    }
}
