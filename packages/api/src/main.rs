use std::env::set_var;
use std::net::SocketAddr;
use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_http::{run, Error};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use policy_api::state::AppState;
use policy_shared::config::AppConfig;
use policy_shared::models::account::seed_accounts;
use policy_shared::repositories::account_repository::DynamoDbAccountRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;
    let on_lambda = std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok();
    init_tracing(config.debug, on_lambda);

    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set, signing tokens with the insecure default");
    }

    // Set up services
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(endpoint) = &config.database_url {
        info!("Using DynamoDB endpoint {}", endpoint);
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);

    let account_repository = Arc::new(DynamoDbAccountRepository::new(
        client,
        config.accounts_table.clone(),
    ));
    let app_state = AppState::new(&config, account_repository);

    // Seed before serving so no request observes a half-written store.
    app_state.account_service.bootstrap(&seed_accounts()).await?;

    let app = policy_api::create_app(app_state, &config.frontend_dir);

    if on_lambda {
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        info!("Starting Lambda handler");
        return run(app).await;
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {} (debug: {})", addr, config.debug);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(debug: bool, json: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,policy_api={level},policy_shared={level},tower_http={level}"
        ))
    });

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        // CloudWatch adds its own timestamps
        subscriber.json().without_time().init();
    } else {
        subscriber.init();
    }
}
