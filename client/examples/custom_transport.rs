use std::time::Duration;

use anyhow::Result;
use tbsign::{Client, Config, Context, HistoryFilter};
use tbsign_core::OsEnv;
use tbsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Timeouts are a transport concern: configure them on the reqwest client.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("tbsign-example/0.1")
        .build()?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(http))
        .with_env(OsEnv);
    let cfg = Config::new().from_env(&ctx);
    let client = Client::from_config(cfg, ctx)?;

    let account_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "42".to_string());

    match client
        .get_account_history(&account_id, &HistoryFilter::new().with_page(50, 0))
        .await
    {
        Ok(history) => println!("{history:#}"),
        Err(e) if e.is_auth_rejected() => {
            eprintln!("signature rejected: {:?}", e.body());
        }
        Err(e) => eprintln!("request failed: {e}"),
    }

    Ok(())
}
