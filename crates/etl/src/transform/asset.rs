use super::error::DetailsError;
use super::output::{Details, PathAsset};
use crate::ledger::{AlphaNum, Asset, TrustLineAsset};

/// Which group of asset columns a triplet is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Unprefixed,
    Buying,
    Selling,
    Source,
}

/// Type, code and issuer of an asset; code and issuer are empty for native.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTriplet {
    pub asset_type: String,
    pub code: String,
    pub issuer: String,
}

impl AssetTriplet {
    pub fn from_asset(asset: &Asset) -> Result<Self, DetailsError> {
        let asset_type = asset.type_name().to_string();
        match asset.alpha_num() {
            None => Ok(Self {
                asset_type,
                ..Default::default()
            }),
            Some(alpha_num) => Ok(Self {
                asset_type,
                code: alpha_num.code().to_string(),
                issuer: alpha_num
                    .issuer
                    .address()
                    .map_err(DetailsError::address("asset issuer"))?,
            }),
        }
    }
}

impl From<AssetTriplet> for PathAsset {
    fn from(triplet: AssetTriplet) -> Self {
        PathAsset {
            asset_type: triplet.asset_type,
            asset_code: triplet.code,
            asset_issuer: triplet.issuer,
        }
    }
}

impl Details {
    /// Fills one group of asset columns.
    pub fn with_asset(mut self, slot: AssetSlot, triplet: AssetTriplet) -> Self {
        let AssetTriplet {
            asset_type,
            code,
            issuer,
        } = triplet;
        let (type_field, code_field, issuer_field) = match slot {
            AssetSlot::Unprefixed => (
                &mut self.asset_type,
                &mut self.asset_code,
                &mut self.asset_issuer,
            ),
            AssetSlot::Buying => (
                &mut self.buying_asset_type,
                &mut self.buying_asset_code,
                &mut self.buying_asset_issuer,
            ),
            AssetSlot::Selling => (
                &mut self.selling_asset_type,
                &mut self.selling_asset_code,
                &mut self.selling_asset_issuer,
            ),
            AssetSlot::Source => (
                &mut self.source_asset_type,
                &mut self.source_asset_code,
                &mut self.source_asset_issuer,
            ),
        };
        *type_field = asset_type;
        *code_field = code;
        *issuer_field = issuer;
        self
    }
}

fn alpha_num_string(alpha_num: &AlphaNum) -> Result<String, DetailsError> {
    let issuer = alpha_num
        .issuer
        .address()
        .map_err(DetailsError::address("asset issuer"))?;
    Ok(format!("{}:{}", alpha_num.code(), issuer))
}

/// `native` or `CODE:ISSUER`
pub fn canonical_asset_string(asset: &Asset) -> Result<String, DetailsError> {
    match asset.alpha_num() {
        None => Ok("native".to_string()),
        Some(alpha_num) => alpha_num_string(alpha_num),
    }
}

/// Canonical string of a trustline asset; pool shares render as the hex pool id.
pub fn canonical_trust_line_asset_string(asset: &TrustLineAsset) -> Result<String, DetailsError> {
    match asset {
        TrustLineAsset::Native => Ok("native".to_string()),
        TrustLineAsset::CreditAlphanum4(alpha_num) | TrustLineAsset::CreditAlphanum12(alpha_num) => {
            alpha_num_string(alpha_num)
        }
        TrustLineAsset::PoolShare(pool_id) => Ok(pool_id.to_string()),
    }
}

/// Intermediate hops of a path payment, in order.
pub fn transform_path(path: &[Asset]) -> Result<Vec<PathAsset>, DetailsError> {
    path.iter()
        .map(|asset| AssetTriplet::from_asset(asset).map(PathAsset::from))
        .collect()
}
