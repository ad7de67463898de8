//! Check command - evaluates one request against a seed file without a server

use std::str::FromStr;

use anyhow::Context;
use axum::http::Method;
use clap::Args;

use crate::api::state::AppState;
use crate::config::AppConfig;
use crate::domain::authz::{AccessRequest, BasicCredentials, Decision};

/// Path prefixes whose remainder is the `namespace/repository` capture
const PROTECTED_PREFIXES: [&str; 3] = ["/v1/repositories/", "/v1/images/", "/v2/"];

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Seed file to load (defaults to `seed.path` from configuration)
    #[arg(long)]
    pub seed: Option<String>,

    /// Username to authenticate as; omit for an anonymous request
    #[arg(long)]
    pub user: Option<String>,

    /// Password for `--user`
    #[arg(long, default_value = "")]
    pub password: String,

    /// HTTP method of the simulated request
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Request path, e.g. `/v2/acme/tool/manifests/latest`
    #[arg(long)]
    pub path: String,
}

pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("loading configuration")?;
    let seed_path = args.seed.as_deref().or(config.seed.path.as_deref());

    let stores = crate::create_stores(seed_path).await?;
    let state = AppState::from_config(&config.authz, stores.credentials, stores.entities)
        .context("invalid authz.legacy_image_pattern")?;

    let request = build_request(&args)?;
    let decision = state.gate.evaluate(&request).await;

    println!("{}", render(&decision));
    Ok(())
}

fn build_request(args: &CheckArgs) -> anyhow::Result<AccessRequest> {
    let method = Method::from_str(&args.method.to_uppercase())
        .with_context(|| format!("invalid method '{}'", args.method))?;

    let resource = resource_capture(&args.path)
        .with_context(|| format!("'{}' is not a protected registry path", args.path))?;

    let request = AccessRequest::new(method, args.path.as_str(), resource);

    Ok(match &args.user {
        Some(user) => {
            request.with_authorization(BasicCredentials::new(user, &args.password).to_header())
        }
        None => request,
    })
}

/// The wildcard capture the router would hand to the gate
fn resource_capture(path: &str) -> Option<&str> {
    let path = path.split('?').next().unwrap_or(path);

    PROTECTED_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
}

fn render(decision: &Decision) -> String {
    match decision {
        Decision::Allow(user) => format!("allow user={}", user.username()),
        Decision::Deny(err) => format!("deny kind={} reason=\"{}\"", err.kind(), err),
    }
}
