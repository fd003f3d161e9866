use clap::Parser;

/// Police records HTTP server.
#[derive(Parser, Debug, Clone)]
#[command(name = "police-records", about = "Police department records API")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of each actor's request channel.
    #[arg(long, env = "MAILBOX_SIZE", default_value_t = 32)]
    pub mailbox_size: usize,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::try_parse_from(["police-records"]).unwrap();
        assert_eq!(config.mailbox_size, 32);
        assert!(config.port > 0);
    }

    #[test]
    fn flags_override() {
        let config = ServerConfig::try_parse_from([
            "police-records",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--mailbox-size",
            "4",
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.mailbox_size, 4);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["police-records", "--port", "abc"]).is_err());
    }
}
