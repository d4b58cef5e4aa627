use anyhow::Result;
use idguard_auth::ProviderConfig;

use super::require_pool;
use crate::output::print_field;

pub fn issuer(provider: &ProviderConfig) -> Result<()> {
    require_pool(provider)?;
    print_field("Issuer", &provider.issuer());
    print_field("JWKS", provider.jwks_uri()?.as_str());
    Ok(())
}
