//! Logging and tracing bootstrap.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use voyage_kernel::settings::{LogFormat, TelemetrySettings};
use voyage_kernel::{InitCtx, Module};

/// Build the log filter, preferring `RUST_LOG` over configured directives.
pub fn env_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|err| anyhow!("invalid log filter '{}': {}", settings.log_filter, err))
}

/// Install the global tracing subscriber, writing to stdout.
///
/// Fails when the filter cannot be parsed or a subscriber is already set.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    install(settings, std::io::stdout)
}

/// Same as [`init`] but writes to stderr, for tools whose stdout is data.
pub fn init_stderr(settings: &TelemetrySettings) -> anyhow::Result<()> {
    install(settings, std::io::stderr)
}

fn install<W>(settings: &TelemetrySettings, writer: W) -> anyhow::Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))?;

    tracing::info!(
        target: "voyage-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );
    Ok(())
}

/// Core module reporting the telemetry configuration through the lifecycle.
pub struct TelemetryModule;

#[async_trait]
impl Module for TelemetryModule {
    fn name(&self) -> &'static str {
        "telemetry"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            format = ?ctx.settings.telemetry.log_format,
            filter = %ctx.settings.telemetry.log_filter,
            "telemetry module initialized"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "telemetry module stopped");
        Ok(())
    }
}

pub fn create_module() -> Arc<dyn Module> {
    Arc::new(TelemetryModule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_kernel::settings::Settings;

    #[test]
    fn rejects_malformed_filter() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let settings = TelemetrySettings {
            log_filter: "voyage=loudest".to_string(),
            ..TelemetrySettings::default()
        };
        assert!(env_filter(&settings).is_err());
    }

    #[test]
    fn accepts_default_filter() {
        assert!(env_filter(&TelemetrySettings::default()).is_ok());
    }

    #[tokio::test]
    async fn module_lifecycle_is_infallible() {
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };
        let module = create_module();
        assert_eq!(module.name(), "telemetry");
        module.init(&ctx).await.unwrap();
        module.stop().await.unwrap();
    }
}
