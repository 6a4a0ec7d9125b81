use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PsqlSettings {
    pub ip: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub db_name: Option<String>,
    pub max_connections: u32,
    pub root_cert: Option<String>,
    #[serde(default)]
    pub log_statements: PsqlLogStatements,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum PsqlLogStatements {
    #[default]
    Enable,
    Disable,
}
