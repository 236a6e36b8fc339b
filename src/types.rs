use crate::modules::bank::repository;
use async_trait::async_trait;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Serves bank records from a JSON file as XML")]
pub struct Config {
    /// Path to the JSON file with bank records
    #[arg(short, long, env = "INPUT")]
    pub input: PathBuf,

    /// Address to bind the server to
    #[arg(long, env = "HOST")]
    pub host: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT")]
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct DataContext {
    pub input: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Context {
    pub app: AppContext,
    pub data: DataContext,
}

#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("Cannot find input file: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly: {0}")]
    Serve(std::io::Error),
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        if !repository::exists(&self.input).await {
            return Err(StartupError::InputNotFound(self.input));
        }

        tracing::info!("Input file found: {}", self.input.display());

        let url = format!("http://{}:{}", self.host, self.port);

        Ok(Context {
            app: AppContext {
                host: self.host,
                port: self.port,
                url,
            },
            data: DataContext { input: self.input },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_required_options() {
        let config = Config::try_parse_from([
            "bank_xml_server",
            "--input",
            "banks.json",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
        ])
        .unwrap();

        assert_eq!(config.input, PathBuf::from("banks.json"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = Config::try_parse_from([
            "bank_xml_server",
            "-i",
            "banks.json",
            "--host",
            "localhost",
            "-p",
            "http",
        ]);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_input_fails_startup() {
        let config = Config {
            input: PathBuf::from("/definitely/not/here/banks.json"),
            host: "127.0.0.1".to_string(),
            port: 0,
        };

        let err = config.to_context().await.unwrap_err();
        assert!(matches!(err, StartupError::InputNotFound(_)));
        assert!(err.to_string().starts_with("Cannot find input file"));
    }

    #[tokio::test]
    async fn existing_input_builds_context() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            input: file.path().to_path_buf(),
            host: "localhost".to_string(),
            port: 8000,
        };

        let ctx = config.to_context().await.unwrap();
        assert_eq!(ctx.app.url, "http://localhost:8000");
        assert_eq!(ctx.data.input.as_path(), file.path());
    }
}
