use antenne_common::connect_to_database;

use crate::settings::Settings;

mod settings;
mod tables;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let database = connect_to_database(&settings.database).await?;
    println!("Connected to DB");

    database
        .execute_in_transaction(tables::schema_statements(), "schema migration")
        .await?;
    println!("Schema migrated");

    Ok(())
}
