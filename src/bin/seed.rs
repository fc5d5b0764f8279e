use ecommerce_schema::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_database,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let outcome = seed_database(&orm).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
