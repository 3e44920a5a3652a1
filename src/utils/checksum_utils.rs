//! Address checksum checks
//!
//! Declared addresses must be written in their EIP-55 mixed-case form. Icon
//! addresses, when present, must point at the same token and be checksummed too.

use crate::types::{ContractToken, Finding, FindingKind};

/// Canonical EIP-55 form of a token's address
pub fn checksummed(token: &ContractToken) -> String {
    token.address.to_checksum(None)
}

/// Check a token's declared address and icon address
///
/// Produces at most one `NotChecksummed` and one `IconAddressMismatch` finding.
/// An empty icon address is never checked.
pub fn check_token_address(token: &ContractToken) -> Vec<Finding> {
    let mut findings = Vec::new();
    let canonical = checksummed(token);
    let declared = &token.record.address;

    if *declared != canonical {
        findings.push(Finding::new(token, FindingKind::NotChecksummed { checksummed: canonical.clone() }));
    }

    let icon = &token.record.icon_address;
    if !icon.is_empty() && (*icon != canonical || !icon.eq_ignore_ascii_case(declared)) {
        findings.push(Finding::new(token, FindingKind::IconAddressMismatch { icon_address: icon.clone() }));
    }

    findings
}
