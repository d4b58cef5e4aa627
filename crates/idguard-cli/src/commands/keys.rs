use anyhow::Result;
use idguard_auth::{KeySetResolver, ProviderConfig};

use super::require_pool;
use crate::output::{print_success, print_table};

pub async fn keys(provider: &ProviderConfig) -> Result<()> {
    require_pool(provider)?;
    let jwks_uri = provider.jwks_uri()?;

    let resolver = KeySetResolver::new(provider.jwks.clone())?;
    let key_set = resolver.resolve(&jwks_uri).await?;

    let mut materials: Vec<_> = key_set.iter().collect();
    materials.sort_by(|a, b| a.kid().cmp(b.kid()));
    let rows = materials
        .into_iter()
        .map(|m| {
            [
                m.kid().to_string(),
                m.key().key_type().to_string(),
                m.algorithm().to_string(),
                m.key_use().to_string(),
                m.key().size_bits().to_string(),
            ]
        })
        .collect();

    print_table(["KID", "KTY", "ALG", "USE", "BITS"], rows);
    print_success(&format!("{} key(s) from {jwks_uri}", key_set.len()));
    Ok(())
}
