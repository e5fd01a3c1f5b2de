use clap::Parser;
use taxcloud_client::config::cli::{EXIT_FAULT, EXIT_OK};
use taxcloud_client::utils::timestamp::timestamp_or_now;
use taxcloud_client::utils::{logger, validation::Validate};
use taxcloud_client::{
    exit_code, CaptureOperation, CartFile, Cli, Command, LookupOperation, Operation,
    PingOperation, ReturnOperation, ServiceConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    // 載入並驗證配置
    let config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::from_env()?,
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(EXIT_FAULT);
    }

    match run(cli.command, config).await {
        Ok(EXIT_OK) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("❌ Request failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(EXIT_FAULT);
        }
    }
}

/// 印出服務端訊息並決定結束碼
fn finish<O: Operation>(op: &O) -> i32 {
    if let Some(response) = op.response() {
        if !response.is_ok() {
            let status = response
                .response_type
                .as_ref()
                .map_or("missing", |t| t.as_str());
            eprintln!("⚠️  Response status: {}", status);
        }
    }
    for message in op.error_messages() {
        eprintln!("⚠️  {}", message);
    }
    exit_code(op)
}

/// 執行一個操作並回傳結束碼
async fn run(command: Command, config: ServiceConfig) -> anyhow::Result<i32> {
    match command {
        Command::Ping => {
            let mut ping = PingOperation::new(config);
            ping.execute().await?;
            if ping.response().is_some_and(|r| r.is_ok()) {
                println!("✅ Credentials accepted");
            }
            Ok(finish(&ping))
        }
        Command::Lookup { cart } => {
            let cart = CartFile::from_file(&cart)?;
            cart.validate()?;
            let (origin, destination) = cart.lookup_parts()?;

            let mut lookup = LookupOperation::new(
                config,
                cart.customer_id.clone(),
                cart.items.clone(),
                destination.clone(),
                origin.clone(),
            )
            .delivered_by_seller(cart.delivered_by_seller);
            if let Some(cart_id) = &cart.cart_id {
                lookup = lookup.with_cart_id(cart_id.clone());
            }

            lookup.execute().await?;
            if let Some(cart_id) = lookup.cart_id() {
                println!("🛒 Cart ID: {}", cart_id);
            }
            match lookup.tax() {
                Some(tax) => println!("💰 Sales tax: {}", tax),
                None => println!("💰 Sales tax: unavailable"),
            }
            Ok(finish(&lookup))
        }
        Command::Capture {
            customer_id,
            cart_id,
            order_id,
            authorized_at,
            captured_at,
        } => {
            let mut capture = CaptureOperation::new(config, customer_id, cart_id, order_id)
                .with_date_authorized(timestamp_or_now(authorized_at))
                .with_date_captured(timestamp_or_now(captured_at));
            capture.execute().await?;
            if capture.response().is_some_and(|r| r.is_ok()) {
                println!("✅ Order captured");
            }
            Ok(finish(&capture))
        }
        Command::Return {
            order_id,
            cart,
            returned_at,
        } => {
            let cart = CartFile::from_file(&cart)?;
            cart.validate()?;

            let mut returned = ReturnOperation::new(config, order_id, cart.items)
                .with_returned_date(timestamp_or_now(returned_at));
            returned.execute().await?;
            if returned.response().is_some_and(|r| r.is_ok()) {
                println!("✅ Return recorded");
            }
            Ok(finish(&returned))
        }
    }
}
