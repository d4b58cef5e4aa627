use anyhow::{Result, bail};
use colored::Colorize;
use idguard_auth::{IdTokenVerifier, ProviderConfig, TokenError, token_from_auth_header};
use serde_json::Value;

use crate::cli::VerifyArgs;
use crate::output::{print_error, print_json, print_success};

pub async fn verify(provider: &ProviderConfig, args: &VerifyArgs) -> Result<()> {
    let token = match (&args.token, &args.authorization) {
        (Some(token), _) => token.as_str(),
        (None, header) => token_from_auth_header(header.as_deref())?,
    };

    let verifier = IdTokenVerifier::connect(provider).await?;
    let result = match args.at {
        Some(at) => verifier.verify_at(token, at),
        None => verifier.verify(token),
    };

    match result {
        Ok(parsed) => {
            print_json(&Value::Object(parsed.claims().as_map().clone()))?;
            let who = parsed.claims().username().unwrap_or("unknown user");
            print_success(&format!("Token valid for {}", who.bold()));
            Ok(())
        }
        Err(TokenError::Claim {
            claim,
            violation,
            token,
        }) => {
            print_json(&Value::Object(token.claims().as_map().clone()))?;
            print_error(&format!("{} check failed: {violation}", claim.to_string().bold()));
            bail!("token rejected")
        }
        Err(e) => Err(e.into()),
    }
}
