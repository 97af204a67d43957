//! Configuration loading for the server binary.

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> prosuite_core::Config {
    prosuite_core::config::load_dotenv();
    prosuite_core::Config::from_env()
}
