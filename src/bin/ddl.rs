use ecommerce_schema::{config::DdlConfig, schema::render_script, telemetry::init_tracing};

/// Prints the schema script; `DDL_BACKEND` picks the dialect.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DdlConfig::from_env()?;
    tracing::debug!(backend = ?config.backend, with_seed = config.with_seed, "rendering schema");
    print!(
        "{}",
        render_script(config.backend, &config.database_name, config.with_seed)
    );
    Ok(())
}
