//! Cached session token shared by all exchanges of a client.

use parking_lot::RwLock;

/// The `X-Transmission-Session-Id` value last issued by the daemon.
///
/// Starts empty. Stale values are corrected by the 409 challenge, never by any other source.
#[derive(Debug, Default)]
pub(crate) struct SessionToken {
    current: RwLock<String>,
}

impl SessionToken {
    pub(crate) fn current(&self) -> String {
        self.current.read().clone()
    }

    /// Replaces the token with `fresh` if it still equals `stale`, the value the rejected
    /// request carried. Returns whether the token was replaced.
    pub(crate) fn refresh(&self, stale: &str, fresh: String) -> bool {
        let mut current = self.current.write();
        if *current != stale {
            return false;
        }
        *current = fresh;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(SessionToken::default().current(), "");
    }

    #[test]
    fn refresh_replaces_matching_token() {
        let token = SessionToken::default();
        assert!(token.refresh("", "abc123".into()));
        assert_eq!(token.current(), "abc123");
        assert!(token.refresh("abc123", "def456".into()));
        assert_eq!(token.current(), "def456");
    }

    #[test]
    fn concurrent_refreshes_converge() {
        let token = SessionToken::default();
        // Both callers sent the empty token and were challenged.
        assert!(token.refresh("", "first".into()));
        assert!(!token.refresh("", "second".into()));
        assert_eq!(token.current(), "first");
    }
}
