use clap::Parser;
use nutrimate_core::domain::common::{DatabaseConfig, LlmConfig, NutrimateConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrimate-api", about = "Nutrition assistant HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub user_db: UserDatabaseArgs,

    #[command(flatten)]
    pub health_db: HealthDatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    /// Log output format: pretty or json
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UserDatabaseArgs {
    #[arg(long, env = "USER_DATABASE_HOST", default_value = "localhost")]
    pub user_database_host: String,

    #[arg(long, env = "USER_DATABASE_PORT", default_value_t = 5432)]
    pub user_database_port: u16,

    #[arg(long, env = "USER_DATABASE_USER", default_value = "postgres")]
    pub user_database_user: String,

    #[arg(long, env = "USER_DATABASE_PASSWORD", default_value = "postgres")]
    pub user_database_password: String,

    #[arg(long, env = "USER_DATABASE_NAME", default_value = "nutrimate_user")]
    pub user_database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct HealthDatabaseArgs {
    #[arg(long, env = "HEALTH_DATABASE_HOST", default_value = "localhost")]
    pub health_database_host: String,

    #[arg(long, env = "HEALTH_DATABASE_PORT", default_value_t = 5432)]
    pub health_database_port: u16,

    #[arg(long, env = "HEALTH_DATABASE_USER", default_value = "postgres")]
    pub health_database_user: String,

    #[arg(long, env = "HEALTH_DATABASE_PASSWORD", default_value = "postgres")]
    pub health_database_password: String,

    #[arg(long, env = "HEALTH_DATABASE_NAME", default_value = "nutrimate_health")]
    pub health_database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

impl From<Args> for NutrimateConfig {
    fn from(args: Args) -> Self {
        Self {
            user_database: DatabaseConfig {
                host: args.user_db.user_database_host,
                port: args.user_db.user_database_port,
                username: args.user_db.user_database_user,
                password: args.user_db.user_database_password,
                name: args.user_db.user_database_name,
            },
            health_database: DatabaseConfig {
                host: args.health_db.health_database_host,
                port: args.health_db.health_database_port,
                username: args.health_db.health_database_user,
                password: args.health_db.health_database_password,
                name: args.health_db.health_database_name,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
