//! Seller Lead Commands

use serde::Deserialize;

use crate::error::{ShopError, ShopResult};
use crate::models::SellerLead;
use super::post_json;

#[derive(Debug, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub submission_id: Option<i64>,
    error: Option<String>,
}

impl SubmitReceipt {
    fn into_result(mut self) -> ShopResult<Self> {
        match self.error.take() {
            Some(error) => Err(ShopError::Backend(error)),
            None => Ok(self),
        }
    }
}

pub async fn submit_seller(endpoint: &str, lead: &SellerLead) -> ShopResult<SubmitReceipt> {
    let receipt: SubmitReceipt = post_json(endpoint, lead).await?;
    receipt.into_result()
}

/// Submit and log the outcome; the visitor never sees it
pub async fn submit_seller_logged(endpoint: &str, lead: &SellerLead) {
    match submit_seller(endpoint, lead).await {
        Ok(receipt) if receipt.success => log::info!(
            "[SELLER] Submission successful: #{:?} {}",
            receipt.submission_id,
            receipt.message.unwrap_or_default()
        ),
        Ok(receipt) => log::warn!(
            "[SELLER] Submission not confirmed: {}",
            receipt.message.unwrap_or_default()
        ),
        Err(e) => log::error!("[SELLER] Error submitting data: {}", e),
    }
}
