use super::error::DetailsError;
use super::output::ClaimantOutput;
use crate::ledger::{ClaimableBalanceId, Claimant};

/// Lowercase hex of the balance id's binary form: the 4-byte big-endian
/// discriminant followed by the hash.
pub fn balance_id_hex(balance_id: &ClaimableBalanceId) -> Result<String, DetailsError> {
    let hash = balance_id.hash();
    if hash.len() != ClaimableBalanceId::HASH_LEN {
        return Err(DetailsError::MalformedBalanceId(hash.len()));
    }

    let mut bytes = Vec::with_capacity(4 + ClaimableBalanceId::HASH_LEN);
    bytes.extend_from_slice(&balance_id.discriminant().to_be_bytes());
    bytes.extend_from_slice(hash.as_bytes());
    Ok(hex::encode(bytes))
}

pub fn transform_claimants(claimants: &[Claimant]) -> Result<Vec<ClaimantOutput>, DetailsError> {
    claimants
        .iter()
        .map(|claimant| {
            let Claimant::V0(v0) = claimant;
            Ok(ClaimantOutput {
                destination: v0
                    .destination
                    .address()
                    .map_err(DetailsError::address("claimant destination"))?,
                predicate: v0.predicate.clone(),
            })
        })
        .collect()
}
