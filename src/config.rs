use std::net::{IpAddr, SocketAddr};

/// Server configuration.
#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,
    /// Server port (default: 3000)
    pub port: u16,
    /// Log filter used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Address the listening socket is bound to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read configuration from defaults, `.env` and `PING_*` variables.
pub fn get_config() -> anyhow::Result<Config> {
    let _ = dotenvy::dotenv();
    from_source(config::Environment::with_prefix("PING").try_parsing(true))
}

fn from_source(env: config::Environment) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 3000)?
        .set_default("log_level", "info")?
        .add_source(env)
        .build()?;

    let my_config: Config = config.try_deserialize()?;

    Ok(my_config)
}
