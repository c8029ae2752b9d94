use anyhow::Context;
use braintree_rust::{
    apis::{
        credit_cards::CreditCardRequest,
        customers::CustomerRequest,
        transactions::{TransactionOptions, TransactionRequest},
    },
    client::Environment,
    configuration::Credentials,
    BraintreeClient, GatewayResult,
};
use rust_decimal::Decimal;

#[derive(serde::Deserialize, Debug)]
struct Config {
    merchant_id: String,
    public_key: String,
    private_key: String,
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

    // Vault a customer with a test card
    let customer = client
        .customers
        .create_strict(&CustomerRequest {
            first_name: Some("Some".to_string()),
            last_name: Some("One".to_string()),
            email: Some("some.one@email.com".to_string()),
            credit_card: Some(CreditCardRequest {
                number: Some("4111111111111111".to_string()),
                expiration_date: Some("05/2030".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await?;
    let card = customer
        .credit_cards
        .first()
        .context("Customer has no card")?;

    tracing::info!(
        "Created customer {} with card {}",
        customer.id,
        card.masked_number().unwrap_or_default()
    );

    // Charge the card
    let res = client
        .transactions
        .sale(&TransactionRequest {
            amount: Some(Decimal::new(1000, 2)),
            payment_method_token: Some(card.token.clone()),
            options: Some(TransactionOptions {
                submit_for_settlement: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await?;

    let transaction = match res {
        GatewayResult::Success(transaction) => transaction,
        GatewayResult::Failure(failure) => {
            for error in failure.errors.deep_errors() {
                tracing::error!("{} {}: {}", error.code, error.attribute, error.message);
            }
            anyhow::bail!("Sale failed: {}", failure.message);
        }
    };

    tracing::info!("Created transaction {}: {:?}", transaction.id, transaction.status);

    // Cancel it before it settles
    let voided = client.transactions.void_strict(&transaction.id).await?;
    tracing::info!("{:#?}", voided);

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
