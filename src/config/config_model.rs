#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub database: Database,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}
