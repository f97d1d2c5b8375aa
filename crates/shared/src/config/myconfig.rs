use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub dev_mode: bool,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;

        let run_migrations = parse_flag("RUN_MIGRATIONS", &run_migrations_str)?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let dev_mode = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let seed_demo_data = match std::env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_flag("SEED_DEMO_DATA", &value)?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
            dev_mode,
            seed_demo_data,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_only_true_or_false() {
        assert!(parse_flag("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_flag("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_flag("RUN_MIGRATIONS", "yes").is_err());
    }

    #[test]
    fn flag_error_names_the_variable() {
        let err = parse_flag("SEED_DEMO_DATA", "1").unwrap_err();
        assert!(err.to_string().contains("SEED_DEMO_DATA"));
    }
}
