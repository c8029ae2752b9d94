use crate::{
    apis::{
        require_id,
        transactions::{
            AmountRequest, CloneTransactionRequest, LineItem, Transaction, TransactionRequest,
            TransactionSearch, TransactionType, TypedTransactionRequest, UpdateDetailsRequest,
        },
        BraintreeClientInner,
    },
    result::GatewayResult,
    xml, Error,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use urlencoding::encode;

/// Transactions APIs client.
///
/// Every operation moving money answers a declined or rejected transaction with a
/// failed [`GatewayResult`] carrying the transaction in
/// [`ErrorResult::transaction`](crate::result::ErrorResult::transaction).
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<BraintreeClientInner>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<BraintreeClientInner>) -> Self {
        Self { inner }
    }

    /// Charges a payment method.
    #[tracing::instrument(name = "Create Sale", skip(self, request))]
    pub async fn sale(
        &self,
        request: &TransactionRequest,
    ) -> Result<GatewayResult<Transaction>, Error> {
        self.create(TransactionType::Sale, request).await
    }

    /// Same as [`sale`](Self::sale), failing with
    /// [`Error::ValidationsFailed`](crate::Error::ValidationsFailed) on validation errors.
    pub async fn sale_strict(&self, request: &TransactionRequest) -> Result<Transaction, Error> {
        self.sale(request).await?.into_result()
    }

    /// Pays money out to a payment method.
    #[tracing::instrument(name = "Create Credit", skip(self, request))]
    pub async fn credit(
        &self,
        request: &TransactionRequest,
    ) -> Result<GatewayResult<Transaction>, Error> {
        self.create(TransactionType::Credit, request).await
    }

    pub async fn credit_strict(&self, request: &TransactionRequest) -> Result<Transaction, Error> {
        self.credit(request).await?.into_result()
    }

    async fn create(
        &self,
        kind: TransactionType,
        request: &TransactionRequest,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let body = xml::to_xml("transaction", &TypedTransactionRequest { kind, request })?;

        self.inner
            .post("/transactions", Some(body))
            .await?
            .into_result("transaction")
    }

    #[tracing::instrument(name = "Get Transaction by ID", skip(self))]
    pub async fn find(&self, id: &str) -> Result<Transaction, Error> {
        self.inner
            .get(&transaction_path(id)?)
            .await?
            .into_entity("transaction")
    }

    /// Cancels an authorized or submitted transaction before it settles.
    #[tracing::instrument(name = "Void Transaction", skip(self))]
    pub async fn void(&self, id: &str) -> Result<GatewayResult<Transaction>, Error> {
        self.put_action(id, "void", None).await
    }

    pub async fn void_strict(&self, id: &str) -> Result<Transaction, Error> {
        self.void(id).await?.into_result()
    }

    /// Submits an authorized transaction for settlement, for its full amount or for `amount`.
    #[tracing::instrument(name = "Submit Transaction for settlement", skip(self))]
    pub async fn submit_for_settlement(
        &self,
        id: &str,
        amount: Option<Decimal>,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let body = xml::to_xml("transaction", &AmountRequest { amount })?;
        self.put_action(id, "submit_for_settlement", Some(body))
            .await
    }

    pub async fn submit_for_settlement_strict(
        &self,
        id: &str,
        amount: Option<Decimal>,
    ) -> Result<Transaction, Error> {
        self.submit_for_settlement(id, amount).await?.into_result()
    }

    /// Settles part of an authorized transaction. Returns the new partial settlement
    /// transaction, referencing the authorization through `authorized_transaction_id`.
    #[tracing::instrument(name = "Submit Transaction for partial settlement", skip(self))]
    pub async fn submit_for_partial_settlement(
        &self,
        id: &str,
        amount: Decimal,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let body = xml::to_xml(
            "transaction",
            &AmountRequest {
                amount: Some(amount),
            },
        )?;

        self.inner
            .post(
                &format!("{}/submit_for_partial_settlement", transaction_path(id)?),
                Some(body),
            )
            .await?
            .into_result("transaction")
    }

    pub async fn submit_for_partial_settlement_strict(
        &self,
        id: &str,
        amount: Decimal,
    ) -> Result<Transaction, Error> {
        self.submit_for_partial_settlement(id, amount)
            .await?
            .into_result()
    }

    /// Refunds a settled transaction, fully or by `amount`.
    ///
    /// The refund is a new credit transaction referencing the original through
    /// `refunded_transaction_id`.
    #[tracing::instrument(name = "Refund Transaction", skip(self))]
    pub async fn refund(
        &self,
        id: &str,
        amount: Option<Decimal>,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let body = xml::to_xml("transaction", &AmountRequest { amount })?;

        self.inner
            .post(&format!("{}/refund", transaction_path(id)?), Some(body))
            .await?
            .into_result("transaction")
    }

    pub async fn refund_strict(&self, id: &str, amount: Option<Decimal>) -> Result<Transaction, Error> {
        self.refund(id, amount).await?.into_result()
    }

    /// Holds the funds of a marketplace transaction in escrow.
    #[tracing::instrument(name = "Hold Transaction in escrow", skip(self))]
    pub async fn hold_in_escrow(&self, id: &str) -> Result<GatewayResult<Transaction>, Error> {
        self.put_action(id, "hold_in_escrow", None).await
    }

    pub async fn hold_in_escrow_strict(&self, id: &str) -> Result<Transaction, Error> {
        self.hold_in_escrow(id).await?.into_result()
    }

    #[tracing::instrument(name = "Release Transaction from escrow", skip(self))]
    pub async fn release_from_escrow(&self, id: &str) -> Result<GatewayResult<Transaction>, Error> {
        self.put_action(id, "release_from_escrow", None).await
    }

    pub async fn release_from_escrow_strict(&self, id: &str) -> Result<Transaction, Error> {
        self.release_from_escrow(id).await?.into_result()
    }

    /// Cancels a pending release from escrow.
    #[tracing::instrument(name = "Cancel Transaction release", skip(self))]
    pub async fn cancel_release(&self, id: &str) -> Result<GatewayResult<Transaction>, Error> {
        self.put_action(id, "cancel_release", None).await
    }

    pub async fn cancel_release_strict(&self, id: &str) -> Result<Transaction, Error> {
        self.cancel_release(id).await?.into_result()
    }

    /// Creates a new transaction with the payment method and details of an existing one.
    #[tracing::instrument(name = "Clone Transaction", skip(self, request))]
    pub async fn clone_transaction(
        &self,
        id: &str,
        request: &CloneTransactionRequest,
    ) -> Result<GatewayResult<Transaction>, Error> {
        self.inner
            .post(
                &format!("{}/clone", transaction_path(id)?),
                Some(xml::to_xml("transaction_clone", request)?),
            )
            .await?
            .into_result("transaction")
    }

    pub async fn clone_transaction_strict(
        &self,
        id: &str,
        request: &CloneTransactionRequest,
    ) -> Result<Transaction, Error> {
        self.clone_transaction(id, request).await?.into_result()
    }

    /// Changes the amount, order id or descriptor of a transaction submitted for settlement.
    #[tracing::instrument(name = "Update Transaction details", skip(self, request))]
    pub async fn update_details(
        &self,
        id: &str,
        request: &UpdateDetailsRequest,
    ) -> Result<GatewayResult<Transaction>, Error> {
        let body = xml::to_xml("transaction", request)?;
        self.put_action(id, "update_details", Some(body)).await
    }

    pub async fn update_details_strict(
        &self,
        id: &str,
        request: &UpdateDetailsRequest,
    ) -> Result<Transaction, Error> {
        self.update_details(id, request).await?.into_result()
    }

    /// Finds all the transactions matching `search`.
    #[tracing::instrument(name = "Search Transactions", skip(self, search))]
    pub async fn search(&self, search: &TransactionSearch) -> Result<Vec<Transaction>, Error> {
        self.inner
            .search(
                "/transactions/advanced_search_ids",
                Some(xml::to_xml("search", search)?),
                "/transactions/advanced_search",
                "credit_card_transactions",
                "transaction",
            )
            .await
    }

    /// Gets the line items of a transaction.
    #[tracing::instrument(name = "Get Transaction line items", skip(self))]
    pub async fn line_items(&self, id: &str) -> Result<Vec<LineItem>, Error> {
        self.inner
            .get(&format!("{}/line_items", transaction_path(id)?))
            .await?
            .into_collection("line_items", "line_item")
    }

    async fn put_action(
        &self,
        id: &str,
        action: &str,
        body: Option<String>,
    ) -> Result<GatewayResult<Transaction>, Error> {
        self.inner
            .put(&format!("{}/{}", transaction_path(id)?, action), body)
            .await?
            .into_result("transaction")
    }
}

fn transaction_path(id: &str) -> Result<String, Error> {
    Ok(format!("/transactions/{}", encode(require_id(id)?)))
}
