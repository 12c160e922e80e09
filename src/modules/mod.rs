pub mod posts;

use voyage_kernel::settings::Settings;
use voyage_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    registry.register_custom(posts::create_module(&settings.generator)?);
    Ok(())
}
