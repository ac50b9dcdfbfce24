//! Resolve command - look up the version and URL for a product.

use clap::ValueEnum;
use filezilla_url::processor::{PRODUCT_NAME, URL, VERSION};
use filezilla_url::{Environment, FileZillaUrlProcessor, ProviderConfig, Release, UrlProvider};
use serde_json::Value;

use crate::error::CliError;

/// Output format for resolved values.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub enum OutputFormat {
    /// `key=value` lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Arguments for the resolve command.
pub struct ResolveArgs {
    pub product_name: String,
    pub format: OutputFormat,
}

/// Outcome of a successful resolve.
#[derive(Debug)]
pub struct Resolved {
    /// Confirmation naming the resolved URL.
    pub message: String,
    /// Rendered `version`/`url` output.
    pub output: String,
}

/// Run the resolve command.
///
/// The confirmation goes to stderr so stdout carries only the outputs.
pub fn run(args: ResolveArgs, config: &ProviderConfig) -> Result<(), CliError> {
    let resolved = execute(args, config)?;
    eprintln!("{}", resolved.message);
    println!("{}", resolved.output);
    Ok(())
}

/// Resolve `args.product_name` and render the result.
pub fn execute(args: ResolveArgs, config: &ProviderConfig) -> Result<Resolved, CliError> {
    let provider = UrlProvider::from_config(config)?;
    let processor = FileZillaUrlProcessor::new(provider);

    let mut env = Environment::new();
    env.insert(PRODUCT_NAME.to_string(), args.product_name.clone());
    let message = processor.process(&mut env)?;

    let release = Release {
        version: env.remove(VERSION).unwrap_or_default(),
        url: env.remove(URL).unwrap_or_default(),
    };
    let output = render(&args.product_name, &release, args.format)?;

    Ok(Resolved { message, output })
}

/// Render a release in `format`.
fn render(product_name: &str, release: &Release, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{}={}\n{}={}",
            VERSION, release.version, URL, release.url
        )),
        OutputFormat::Json => {
            let mut value =
                serde_json::to_value(release).map_err(|e| CliError::Output(e.to_string()))?;
            if let Value::Object(map) = &mut value {
                map.insert(
                    PRODUCT_NAME.to_string(),
                    Value::String(product_name.to_lowercase()),
                );
            }
            serde_json::to_string_pretty(&value).map_err(|e| CliError::Output(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    fn release() -> Release {
        Release {
            version: "3.66.4".to_string(),
            url: "https://dl.example.com/fz.tar.bz2".to_string(),
        }
    }

    /// Serves one manifest response on a local port and returns its URL.
    fn serve_manifest(body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/updatecheck.php", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, handle)
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render("filezilla", &release(), OutputFormat::Text).unwrap(),
            "version=3.66.4\nurl=https://dl.example.com/fz.tar.bz2"
        );
    }

    #[test]
    fn test_render_json_serializes_release() {
        let out = render("FileZilla", &release(), OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["product_name"], "filezilla");
        assert_eq!(parsed["version"], "3.66.4");
        assert_eq!(parsed["url"], "https://dl.example.com/fz.tar.bz2");
    }

    #[test]
    fn test_execute_reports_found_url() {
        let (url, server) =
            serve_manifest("release 3.66.4 https://dl.example.com/FileZilla_3.66.4.tar.bz2\n");
        let config = ProviderConfig::default().with_manifest_url(url);

        let resolved = execute(
            ResolveArgs {
                product_name: "filezilla".to_string(),
                format: OutputFormat::Text,
            },
            &config,
        )
        .unwrap();

        assert_eq!(
            resolved.message,
            "Found URL https://dl.example.com/FileZilla_3.66.4.tar.bz2"
        );
        assert_eq!(
            resolved.output,
            "version=3.66.4\nurl=https://dl.example.com/FileZilla_3.66.4.tar.bz2"
        );
        server.join().unwrap();
    }
}
