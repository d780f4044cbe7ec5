use crate::adapters::SesSuppressionApi;
use crate::utils::error::{Result, SuppressError};
use crate::utils::validation::validate_aws_region;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_sesv2::Client as SesClient;

/// Resolves credentials and region from the environment / shared profile.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Fails before any API call when no region could be resolved.
pub fn resolved_region(sdk_config: &SdkConfig) -> Result<String> {
    let region = sdk_config
        .region()
        .map(|region| region.as_ref().to_string())
        .ok_or_else(|| SuppressError::ConfigError {
            message: "AWS region is not set".to_string(),
        })?;

    validate_aws_region("region", &region)?;
    Ok(region)
}

pub async fn build_suppression_api() -> Result<SesSuppressionApi> {
    let sdk_config = load_sdk_config().await;
    let region = resolved_region(&sdk_config)?;
    tracing::info!("🔧 Using SES in region {}", region);

    Ok(SesSuppressionApi::new(SesClient::new(&sdk_config)))
}
