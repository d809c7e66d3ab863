//! Challenge messages: issuance and reconstruction.
//!
//! A challenge is never stored server-side. Everything the verifier needs
//! (the claimed address and the issue time) is bound into the message
//! string itself and parsed back out at verification time.

use std::time::Duration;

use starledger_core::WalletAddress;

use crate::error::{ProofError, Result};

/// Protocol tag terminating every challenge message.
pub const CHALLENGE_TAG: &str = "star-registry/v0";

/// How long a challenge stays valid for authorization.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::from_secs(300);

/// An ownership challenge, reconstructed from its message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// The wallet address the challenge was issued for.
    pub address: WalletAddress,

    /// Issue time, truncated to whole Unix seconds.
    pub issued_at_secs: u64,
}

impl Challenge {
    /// Reconstruct a challenge from its message string.
    pub fn parse(message: &str) -> Result<Self> {
        // The address may itself contain separators; only the final two
        // segments belong to the protocol.
        let mut parts = message.rsplitn(3, ':');

        let tag = parts.next().unwrap_or_default();
        if tag != CHALLENGE_TAG {
            return Err(ProofError::MalformedMessage(format!(
                "unknown protocol tag: {tag:?}"
            )));
        }

        let issued_at_secs = parts
            .next()
            .ok_or_else(|| ProofError::MalformedMessage("missing issue time".to_string()))?
            .parse::<u64>()
            .map_err(|e| ProofError::MalformedMessage(format!("bad issue time: {e}")))?;

        let address = parts
            .next()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| ProofError::MalformedMessage("missing address".to_string()))?;

        Ok(Self {
            address: WalletAddress::new(address),
            issued_at_secs,
        })
    }

    /// Seconds elapsed since issuance. Future-dated challenges count as
    /// zero age.
    pub fn age_secs(&self, now_secs: u64) -> u64 {
        now_secs.saturating_sub(self.issued_at_secs)
    }
}

/// Issue a challenge message for `address` at the given time.
///
/// Fails with [`ProofError::EmptyAddress`] when the address is empty.
/// The returned message binds the address, the issue time in whole
/// seconds, and the protocol tag.
pub fn issue_challenge(address: &WalletAddress, now_secs: u64) -> Result<String> {
    if address.is_empty() {
        return Err(ProofError::EmptyAddress);
    }
    Ok(format!("{address}:{now_secs}:{CHALLENGE_TAG}"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_issue_and_parse_roundtrip() {
        let address = WalletAddress::new("addr1");
        let message = issue_challenge(&address, 1736870400).unwrap();

        assert!(message.contains("addr1"));
        let challenge = Challenge::parse(&message).unwrap();
        assert_eq!(challenge.address, address);
        assert_eq!(challenge.issued_at_secs, 1736870400);
    }

    #[test]
    fn test_empty_address_rejected() {
        let result = issue_challenge(&WalletAddress::new(""), 1736870400);
        assert!(matches!(result, Err(ProofError::EmptyAddress)));
    }

    #[test]
    fn test_parse_rejects_wrong_tag() {
        let result = Challenge::parse("addr1:1736870400:some-other-protocol");
        assert!(matches!(result, Err(ProofError::MalformedMessage(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric_time() {
        let result = Challenge::parse(&format!("addr1:yesterday:{CHALLENGE_TAG}"));
        assert!(matches!(result, Err(ProofError::MalformedMessage(_))));
    }

    #[test]
    fn test_parse_rejects_missing_segments() {
        assert!(Challenge::parse(CHALLENGE_TAG).is_err());
        assert!(Challenge::parse(&format!("1736870400:{CHALLENGE_TAG}")).is_err());
        assert!(Challenge::parse("").is_err());
    }

    #[test]
    fn test_address_with_separator_survives() {
        let address = WalletAddress::new("ns:addr1");
        let message = issue_challenge(&address, 42).unwrap();
        let challenge = Challenge::parse(&message).unwrap();
        assert_eq!(challenge.address, address);
    }

    #[test]
    fn test_age_saturates_for_future_challenges() {
        let challenge = Challenge {
            address: WalletAddress::new("addr1"),
            issued_at_secs: 2000,
        };
        assert_eq!(challenge.age_secs(1500), 0);
        assert_eq!(challenge.age_secs(2301), 301);
    }

    proptest! {
        #[test]
        fn prop_issue_parse_roundtrip(
            addr in "[a-f0-9]{8,64}",
            issued_at in any::<u64>(),
        ) {
            let address = WalletAddress::new(addr);
            let message = issue_challenge(&address, issued_at).unwrap();
            let challenge = Challenge::parse(&message).unwrap();
            prop_assert_eq!(challenge.address, address);
            prop_assert_eq!(challenge.issued_at_secs, issued_at);
        }
    }
}
