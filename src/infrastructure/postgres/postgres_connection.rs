use anyhow::Result;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

use crate::config::config_model::Database;

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

pub fn establish_connection(database: &Database) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(&database.url);
    let pool = Pool::builder()
        .max_size(database.max_connections)
        .build(manager)?;
    Ok(pool)
}
