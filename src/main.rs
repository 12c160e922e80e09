use anyhow::Context;
use voyage_kernel::settings::Settings;
use voyage_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load voyage settings")?;
    voyage_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        "voyage-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    registry.register_core(voyage_telemetry::create_module());
    voyage_app::register_all(&mut registry, &settings)
        .with_context(|| "failed to register modules")?;

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("voyage-app bootstrap complete");

    let served = voyage_http::start_server(&registry, &settings).await;
    registry.stop_all().await?;
    served
}
