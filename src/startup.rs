use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::GiveawayError;

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the given connection string, then runs all
/// pending SeaORM migrations. This must complete successfully before a
/// [`GiveawayManager`](crate::manager::GiveawayManager) can be constructed; a
/// missing database is the one fatal misconfiguration of this crate.
///
/// # Arguments
/// - `database_url` - SQLx connection string (e.g. `sqlite://giveaways.db?mode=rwc`)
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(GiveawayError)` - Failed to connect or migrate
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, GiveawayError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
