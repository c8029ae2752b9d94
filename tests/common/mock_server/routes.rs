use crate::common::mock_server::{MockServerStorage, MockServerStorageInner};
use actix_web::{http::StatusCode, web, HttpResponse};
use braintree_rust::{
    error_codes,
    xml::{from_xml, to_xml},
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use uuid::Uuid;

static DECLINED_AMOUNT: &str = "2000.00";

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn xml_response(status: StatusCode, root: &str, value: &Value) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("application/xml")
        .body(to_xml(root, value).unwrap())
}

/// Content of the request document, `Null` for an empty body.
fn request_content(body: &str) -> Value {
    from_xml(body).unwrap().1
}

/// A `422` error document with a single error nested under `path`.
fn validation_failure(path: &[&str], attribute: &str, code: &str, message: &str) -> HttpResponse {
    let mut node = json!({
        "errors": [{ "code": code, "attribute": attribute, "message": message }]
    });
    for object in path.iter().rev() {
        let mut parent = Map::new();
        parent.insert("errors".to_string(), json!([]));
        parent.insert(object.to_string(), node);
        node = Value::Object(parent);
    }

    xml_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "api_error_response",
        &json!({ "errors": node, "message": message }),
    )
}

/// A `422` error document without validation errors, carrying the declined transaction.
fn processor_decline(transaction: &Value) -> HttpResponse {
    xml_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "api_error_response",
        &json!({
            "errors": { "errors": [] },
            "message": transaction["processor_response_text"],
            "transaction": transaction,
        }),
    )
}

/// Copies the scalar fields of `from` into `into`, skipping `excluded` keys.
fn merge_scalars(into: &mut Value, from: &Value, excluded: &[&str]) {
    if let Value::Object(fields) = from {
        for (key, value) in fields {
            if !value.is_object() && !value.is_array() && !excluded.contains(&key.as_str()) {
                into[key.as_str()] = value.clone();
            }
        }
    }
}

fn customer_document(storage: &MockServerStorageInner, customer: &Value) -> Value {
    let mut customer = customer.clone();
    customer["credit_cards"] = Value::Array(
        storage
            .credit_cards
            .iter()
            .filter(|card| card["customer_id"] == customer["id"])
            .cloned()
            .collect(),
    );
    customer["addresses"] = json!([]);
    customer["paypal_accounts"] = json!([]);
    customer
}

/// Builds a vaulted card, or the validation failure to answer with.
fn new_credit_card(
    request: &Value,
    customer_id: &str,
    path: &[&str],
) -> Result<Value, HttpResponse> {
    let number = request["number"].as_str().unwrap_or_default();
    if !(12..=19).contains(&number.len()) || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(validation_failure(
            path,
            "number",
            error_codes::credit_card::NUMBER_HAS_INVALID_LENGTH,
            "Credit card number must be 12-19 digits.",
        ));
    }

    let (month, year) = match request["expiration_date"].as_str() {
        Some(date) => date.split_once('/').unwrap_or((date, "")),
        None => (
            request["expiration_month"].as_str().unwrap_or_default(),
            request["expiration_year"].as_str().unwrap_or_default(),
        ),
    };

    let card_type = match number.chars().next() {
        Some('4') => "Visa",
        Some('5') => "MasterCard",
        _ => "Unknown",
    };

    Ok(json!({
        "token": request["token"].as_str().map_or_else(new_id, str::to_string),
        "bin": &number[..6],
        "last_4": &number[number.len() - 4..],
        "card_type": card_type,
        "expiration_month": month,
        "expiration_year": year,
        "cardholder_name": request["cardholder_name"],
        "customer_id": customer_id,
        "default": false,
        "expired": false,
        "unique_number_identifier": format!("unique-{}", number),
        "verifications": [],
        "created_at": now(),
        "updated_at": now(),
    }))
}

/// Stores `card`, making it the default of its customer when asked to or when it is the first.
fn vault_credit_card(storage: &mut MockServerStorageInner, mut card: Value, make_default: bool) {
    let customer_id = card["customer_id"].clone();
    let first = !storage
        .credit_cards
        .iter()
        .any(|c| c["customer_id"] == customer_id);

    if make_default || first {
        for other in storage
            .credit_cards
            .iter_mut()
            .filter(|c| c["customer_id"] == customer_id)
        {
            other["default"] = json!(false);
        }
        card["default"] = json!(true);
    }

    storage.credit_cards.push(card);
}

/// POST /customers
pub(super) async fn create_customer(
    storage: web::Data<MockServerStorage>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);

    if let Some(email) = request["email"].as_str() {
        if !email.contains('@') {
            return validation_failure(
                &["customer"],
                "email",
                error_codes::customer::EMAIL_IS_INVALID,
                "Email is an invalid format.",
            );
        }
    }

    let mut storage = storage.write().unwrap();
    let id = request["id"].as_str().map_or_else(new_id, str::to_string);
    if storage.customers.contains_key(&id) {
        return validation_failure(
            &["customer"],
            "id",
            error_codes::customer::ID_IS_IN_USE,
            "Customer ID has already been taken.",
        );
    }

    let card = match request.get("credit_card") {
        Some(card_request) => {
            match new_credit_card(card_request, &id, &["customer", "credit_card"]) {
                Ok(card) => Some(card),
                Err(failure) => return failure,
            }
        }
        None => None,
    };

    let mut customer = json!({ "id": id, "created_at": now(), "updated_at": now() });
    merge_scalars(
        &mut customer,
        &request,
        &["id", "payment_method_nonce", "device_data"],
    );
    if let Some(custom_fields) = request.get("custom_fields") {
        customer["custom_fields"] = custom_fields.clone();
    }

    if let Some(card) = card {
        vault_credit_card(&mut storage, card, true);
    }
    storage.customers.insert(id, customer.clone());

    xml_response(
        StatusCode::CREATED,
        "customer",
        &customer_document(&storage, &customer),
    )
}

/// GET /customers/{id}
pub(super) async fn find_customer(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let storage = storage.read().unwrap();

    storage.customers.get(&path.into_inner()).map_or_else(
        || HttpResponse::NotFound().finish(),
        |customer| {
            xml_response(
                StatusCode::OK,
                "customer",
                &customer_document(&storage, customer),
            )
        },
    )
}

/// PUT /customers/{id}
pub(super) async fn update_customer(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let customer = match storage.customers.get_mut(&path.into_inner()) {
        Some(customer) => customer,
        None => return HttpResponse::NotFound().finish(),
    };
    merge_scalars(
        customer,
        &request,
        &["id", "payment_method_nonce", "device_data"],
    );
    customer["updated_at"] = json!(now());

    let customer = customer.clone();
    xml_response(
        StatusCode::OK,
        "customer",
        &customer_document(&storage, &customer),
    )
}

/// DELETE /customers/{id}
pub(super) async fn delete_customer(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut storage = storage.write().unwrap();

    if storage.customers.remove(&id).is_none() {
        return HttpResponse::NotFound().finish();
    }
    storage
        .credit_cards
        .retain(|card| card["customer_id"].as_str() != Some(id.as_str()));

    HttpResponse::Ok().finish()
}

/// POST /payment_methods
pub(super) async fn create_credit_card(
    storage: web::Data<MockServerStorage>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let customer_id = match request["customer_id"].as_str() {
        Some(id) if storage.customers.contains_key(id) => id.to_string(),
        _ => {
            return validation_failure(
                &["credit_card"],
                "customer_id",
                error_codes::credit_card::CUSTOMER_ID_IS_INVALID,
                "Customer ID is invalid.",
            )
        }
    };

    let card = match new_credit_card(&request, &customer_id, &["credit_card"]) {
        Ok(card) => card,
        Err(failure) => return failure,
    };
    let token = card["token"].clone();
    let make_default = request["options"]["make_default"] == json!(true);
    vault_credit_card(&mut storage, card, make_default);

    let card = storage
        .credit_cards
        .iter()
        .find(|card| card["token"] == token)
        .unwrap();
    xml_response(StatusCode::CREATED, "credit_card", card)
}

/// GET /payment_methods/credit_card/{token}
pub(super) async fn find_credit_card(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let token = path.into_inner();

    storage
        .read()
        .unwrap()
        .credit_cards
        .iter()
        .find(|card| card["token"].as_str() == Some(token.as_str()))
        .map_or_else(
            || HttpResponse::NotFound().finish(),
            |card| xml_response(StatusCode::OK, "credit_card", card),
        )
}

/// PUT /payment_methods/credit_card/{token}
pub(super) async fn update_credit_card(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: String,
) -> HttpResponse {
    let token = path.into_inner();
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let position = match storage
        .credit_cards
        .iter()
        .position(|card| card["token"].as_str() == Some(token.as_str()))
    {
        Some(position) => position,
        None => return HttpResponse::NotFound().finish(),
    };

    let mut card = storage.credit_cards.remove(position);
    merge_scalars(
        &mut card,
        &request,
        &["number", "cvv", "expiration_date", "token", "customer_id"],
    );
    if let Some((month, year)) = request["expiration_date"]
        .as_str()
        .and_then(|date| date.split_once('/'))
    {
        card["expiration_month"] = json!(month);
        card["expiration_year"] = json!(year);
    }
    card["updated_at"] = json!(now());

    let make_default = request["options"]["make_default"] == json!(true);
    let was_default = card["default"] == json!(true);
    vault_credit_card(&mut storage, card, make_default || was_default);

    let card = storage.credit_cards.last().unwrap();
    xml_response(StatusCode::OK, "credit_card", card)
}

/// DELETE /payment_methods/credit_card/{token}
pub(super) async fn delete_credit_card(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let token = path.into_inner();
    let mut storage = storage.write().unwrap();

    let before = storage.credit_cards.len();
    storage
        .credit_cards
        .retain(|card| card["token"].as_str() != Some(token.as_str()));

    if storage.credit_cards.len() == before {
        HttpResponse::NotFound().finish()
    } else {
        HttpResponse::Ok().finish()
    }
}

/// POST /transactions
pub(super) async fn create_transaction(
    storage: web::Data<MockServerStorage>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let amount = match request["amount"].as_str() {
        Some(amount) => amount.to_string(),
        None => {
            return validation_failure(
                &["transaction"],
                "amount",
                error_codes::transaction::AMOUNT_IS_REQUIRED,
                "Amount is required.",
            )
        }
    };

    let credit_card = match (
        request["payment_method_token"].as_str(),
        request.get("credit_card"),
    ) {
        (Some(token), _) => match storage
            .credit_cards
            .iter()
            .find(|card| card["token"].as_str() == Some(token))
        {
            Some(card) => card.clone(),
            None => return HttpResponse::NotFound().finish(),
        },
        (None, Some(card_request)) => {
            match new_credit_card(card_request, "", &["transaction", "credit_card"]) {
                Ok(card) => card,
                Err(failure) => return failure,
            }
        }
        (None, None) => json!({}),
    };

    let kind = request["type"].as_str().unwrap_or("sale");
    let declined = amount == DECLINED_AMOUNT;
    let (response_code, response_text) = if declined {
        ("2000", "Do Not Honor")
    } else {
        ("1000", "Approved")
    };
    let status = if declined {
        "processor_declined"
    } else if kind == "credit" || request["options"]["submit_for_settlement"] == json!(true) {
        "submitted_for_settlement"
    } else {
        "authorized"
    };

    let transaction = json!({
        "id": new_id(),
        "type": kind,
        "amount": amount,
        "currency_iso_code": "USD",
        "status": status,
        "order_id": request["order_id"],
        "processor_response_code": response_code,
        "processor_response_text": response_text,
        "credit_card": {
            "token": credit_card["token"],
            "bin": credit_card["bin"],
            "last_4": credit_card["last_4"],
            "card_type": credit_card["card_type"],
            "expiration_month": credit_card["expiration_month"],
            "expiration_year": credit_card["expiration_year"],
            "cardholder_name": credit_card["cardholder_name"],
        },
        "customer": { "id": credit_card["customer_id"] },
        "refund_ids": [],
        "created_at": now(),
        "updated_at": now(),
    });

    let id = transaction["id"].as_str().unwrap().to_string();
    storage.transactions.insert(id, transaction.clone());

    if declined {
        return processor_decline(&transaction);
    }

    xml_response(StatusCode::CREATED, "transaction", &transaction)
}

/// GET /transactions/{id}
pub(super) async fn find_transaction(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let mut storage = storage.write().unwrap();

    let transaction = match storage.transactions.get_mut(&path.into_inner()) {
        Some(transaction) => transaction,
        None => return HttpResponse::NotFound().finish(),
    };

    let response = xml_response(StatusCode::OK, "transaction", transaction);

    // Simulate the settlement batch
    let next = match transaction["status"].as_str() {
        Some("submitted_for_settlement") => Some("settling"),
        Some("settling") => Some("settled"),
        _ => None,
    };
    if let Some(next) = next {
        transaction["status"] = json!(next);
    }

    response
}

/// PUT /transactions/{id}/void
pub(super) async fn void_transaction(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let mut storage = storage.write().unwrap();

    let transaction = match storage.transactions.get_mut(&path.into_inner()) {
        Some(transaction) => transaction,
        None => return HttpResponse::NotFound().finish(),
    };

    match transaction["status"].as_str() {
        Some("authorized") | Some("submitted_for_settlement") => {
            transaction["status"] = json!("voided");
            xml_response(StatusCode::OK, "transaction", transaction)
        }
        _ => validation_failure(
            &["transaction"],
            "base",
            error_codes::transaction::CANNOT_BE_VOIDED,
            "Transaction can only be voided if status is authorized, submitted_for_settlement, or - for PayPal - settlement_pending.",
        ),
    }
}

/// PUT /transactions/{id}/submit_for_settlement
pub(super) async fn submit_for_settlement(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let transaction = match storage.transactions.get_mut(&path.into_inner()) {
        Some(transaction) => transaction,
        None => return HttpResponse::NotFound().finish(),
    };

    if transaction["status"].as_str() != Some("authorized") {
        return validation_failure(
            &["transaction"],
            "base",
            error_codes::transaction::CANNOT_SUBMIT_FOR_SETTLEMENT,
            "Cannot submit for settlement unless status is authorized.",
        );
    }

    if let Some(amount) = request["amount"].as_str() {
        transaction["amount"] = json!(amount);
    }
    transaction["status"] = json!("submitted_for_settlement");
    xml_response(StatusCode::OK, "transaction", transaction)
}

/// POST /transactions/{id}/refund
pub(super) async fn refund_transaction(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: String,
) -> HttpResponse {
    let request = request_content(&body);
    let mut storage = storage.write().unwrap();

    let original = match storage.transactions.get_mut(&path.into_inner()) {
        Some(transaction) => transaction,
        None => return HttpResponse::NotFound().finish(),
    };

    if !matches!(original["status"].as_str(), Some("settling") | Some("settled")) {
        return validation_failure(
            &["transaction"],
            "base",
            error_codes::transaction::CANNOT_REFUND_UNLESS_SETTLED,
            "Cannot refund transaction unless it is settled.",
        );
    }

    let mut refund = original.clone();
    refund["id"] = json!(new_id());
    refund["type"] = json!("credit");
    refund["status"] = json!("submitted_for_settlement");
    refund["refunded_transaction_id"] = original["id"].clone();
    refund["refund_ids"] = json!([]);
    if let Some(amount) = request["amount"].as_str() {
        refund["amount"] = json!(amount);
    }

    if let Some(Value::Array(refund_ids)) = original.get_mut("refund_ids") {
        refund_ids.push(refund["id"].clone());
    }

    let id = refund["id"].as_str().unwrap().to_string();
    storage.transactions.insert(id, refund.clone());

    xml_response(StatusCode::CREATED, "transaction", &refund)
}
