pub mod issuer;
pub mod keys;
pub mod verify;

use anyhow::{Result, bail};
use idguard_auth::ProviderConfig;

/// Checks the identifiers needed to locate the pool, without requiring a
/// client id.
fn require_pool(provider: &ProviderConfig) -> Result<()> {
    if provider.region.trim().is_empty() {
        bail!("region is not set (use --region or IDGUARD__PROVIDER__REGION)");
    }
    if provider.user_pool_id.trim().is_empty() {
        bail!("user pool id is not set (use --user-pool-id or IDGUARD__PROVIDER__USER_POOL_ID)");
    }
    Ok(())
}
