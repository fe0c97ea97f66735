use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Parser, Clone)]
#[command(version, about = "Tenant directory GraphQL service")]
pub struct TenantServiceOptions {
    /// Database server host name
    #[arg(long, env = "DB_HOST")]
    pub db_host: String,

    /// Database server port
    #[arg(long, env = "DB_PORT")]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// TLS mode for the database connection
    /// (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, default_value = "prefer", env = "DB_SSL_MODE")]
    pub db_ssl_mode: PgSslMode,

    /// Address the GraphQL listener binds to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), env = "API_HOST")]
    pub host: IpAddr,

    /// Port the GraphQL listener binds to
    #[arg(long, default_value_t = 4000, env = "PORT")]
    pub port: u16,
}

impl TenantServiceOptions {
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(self.db_ssl_mode)
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Debug for TenantServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantServiceOptions")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"***REDACTED***")
            .field("db_name", &self.db_name)
            .field("db_ssl_mode", &self.db_ssl_mode)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 11] = [
        "tenant-directory",
        "--db-host",
        "db.internal",
        "--db-port",
        "5432",
        "--db-user",
        "app",
        "--db-password",
        "hunter2",
        "--db-name",
        "tenants",
    ];

    #[test]
    fn test_defaults() {
        let opts = TenantServiceOptions::try_parse_from(REQUIRED).unwrap();

        assert_eq!(opts.port, 4000);
        assert_eq!(opts.listen_addr(), "0.0.0.0:4000".parse().unwrap());
        assert!(matches!(opts.db_ssl_mode, PgSslMode::Prefer));
        assert_eq!(opts.db_port, 5432);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut args = REQUIRED.to_vec();
        args[4] = "not-a-port";

        assert!(TenantServiceOptions::try_parse_from(args).is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let opts = TenantServiceOptions::try_parse_from(REQUIRED).unwrap();
        let rendered = format!("{opts:?}");

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***REDACTED***"));
        assert!(rendered.contains("db.internal"));
    }

    #[test]
    fn test_ssl_mode_parses() {
        let mut args = REQUIRED.to_vec();
        args.extend(["--db-ssl-mode", "disable", "--port", "8080"]);
        let opts = TenantServiceOptions::try_parse_from(args).unwrap();

        assert!(matches!(opts.db_ssl_mode, PgSslMode::Disable));
        assert_eq!(opts.port, 8080);
    }
}
