use std::{collections::BTreeMap, process::ExitCode, time::Duration};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vimeo_net::{
    CacheControl, extract_error,
    cli_arguments::{CliArguments, Command},
    config::ClientConfig,
    http_client::{http_client::HttpClient, request::Request},
    simple_query_map,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();
    let config = ClientConfig::from(&args);

    match args.command {
        Command::Query { uri } => {
            let query_map: BTreeMap<_, _> = simple_query_map(&uri).into_iter().collect();
            print_json(&config, &query_map)
        }
        Command::CacheControl { value, max_stale } => {
            let mut builder = CacheControl::parse(&value).to_builder();
            if let Some(seconds) = max_stale {
                builder = builder.max_stale(Duration::from_secs(seconds));
            }
            println!("{}", builder.build());
            ExitCode::SUCCESS
        }
        Command::Fetch { path, access_token } => fetch(&config, &path, access_token).await,
    }
}

async fn fetch(config: &ClientConfig, path: &str, access_token: Option<String>) -> ExitCode {
    let http_client = match config.build_http_client() {
        Ok(http_client) => http_client,
        Err(err) => {
            error!("Could not build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut request = Request::get(config.url_for(path));
    request.headers.insert(
        "accept".to_string(),
        "application/vnd.vimeo.*+json;version=3.4".to_string(),
    );
    if let Some(token) = access_token {
        request
            .headers
            .insert("authorization".to_string(), format!("bearer {token}"));
    }

    info!("Fetching {}", request.url);

    let response = match http_client.execute(request).await {
        Ok(response) => response,
        Err(err) => {
            error!("Request failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cache_control = response.cache_control();
    if cache_control != Default::default() {
        info!("Response cache directives: {cache_control}");
    }

    match extract_error(&config.codec(), Some(&response)) {
        Some(api_error) => {
            error!("{api_error}");
            print_json(config, &api_error);
            ExitCode::FAILURE
        }
        None => {
            println!("{}", String::from_utf8_lossy(&response.body));
            ExitCode::SUCCESS
        }
    }
}

fn print_json<T: serde::Serialize>(config: &ClientConfig, value: &T) -> ExitCode {
    let codec = vimeo_net::JsonCodec::builder()
        .field_naming(config.field_naming)
        .pretty(true)
        .build();

    match codec.encode(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
