use anyhow::Context;
use braintree_rust::{
    apis::{customers::CustomerRequest, transparent_redirect::ConfirmResult},
    client::Environment,
    configuration::Credentials,
    BraintreeClient,
};
use url::Url;

#[derive(serde::Deserialize, Debug)]
struct Config {
    merchant_id: String,
    public_key: String,
    private_key: String,
    redirect_uri: Url,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    let client = BraintreeClient::builder(Credentials::Keys {
        merchant_id: config.merchant_id,
        public_key: config.public_key,
        private_key: config.private_key.into(),
    })
    .with_environment(Environment::Sandbox)
    .build()?;

    // Sign a customer creation form
    let tr_data = client.transparent_redirect.create_customer_data(
        &CustomerRequest {
            company: Some("Some Company".to_string()),
            ..Default::default()
        },
        config.redirect_uri.as_str(),
    )?;

    println!(
        r#"<form method="POST" action="{}">
  <input type="hidden" name="tr_data" value="{}" />
  <input type="text" name="customer[first_name]" />
  <input type="text" name="customer[credit_card][number]" />
  <input type="text" name="customer[credit_card][expiration_date]" />
  <input type="submit" />
</form>"#,
        client.transparent_redirect.url()?,
        tr_data.replace('"', "&quot;")
    );

    // Confirm the request once the browser lands back on the redirect URI
    let mut query = String::new();
    tracing::info!("Paste the query string of the redirect:");
    std::io::stdin().read_line(&mut query)?;

    match client.transparent_redirect.confirm(query.trim()).await? {
        ConfirmResult::Customer(res) => {
            let customer = res.into_result()?;
            tracing::info!("Created customer {}", customer.id);
        }
        other => anyhow::bail!("Unexpected confirmation: {:?}", other),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
