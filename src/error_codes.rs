//! Validation error codes returned by the gateway, grouped by the object they refer to.
//!
//! Compare them against [`ValidationError::code`](crate::result::ValidationError).

pub mod address {
    pub const CANNOT_BE_BLANK: &str = "81801";
    pub const COMPANY_IS_TOO_LONG: &str = "81802";
    pub const COUNTRY_CODE_ALPHA2_IS_NOT_ACCEPTED: &str = "91814";
    pub const COUNTRY_CODE_ALPHA3_IS_NOT_ACCEPTED: &str = "91816";
    pub const COUNTRY_CODE_NUMERIC_IS_NOT_ACCEPTED: &str = "91817";
    pub const COUNTRY_NAME_IS_NOT_ACCEPTED: &str = "91803";
    pub const EXTENDED_ADDRESS_IS_TOO_LONG: &str = "81804";
    pub const FIRST_NAME_IS_TOO_LONG: &str = "81805";
    pub const INCONSISTENT_COUNTRY: &str = "91815";
    pub const LAST_NAME_IS_TOO_LONG: &str = "81806";
    pub const LOCALITY_IS_TOO_LONG: &str = "81807";
    pub const POSTAL_CODE_IS_REQUIRED: &str = "81808";
    pub const POSTAL_CODE_IS_TOO_LONG: &str = "81809";
    pub const REGION_IS_TOO_LONG: &str = "81810";
    pub const STREET_ADDRESS_IS_REQUIRED: &str = "81811";
    pub const STREET_ADDRESS_IS_TOO_LONG: &str = "81812";
    pub const TOO_MANY_ADDRESSES_PER_CUSTOMER: &str = "91818";
}

pub mod credit_card {
    pub const BILLING_ADDRESS_CONFLICT: &str = "91701";
    pub const BILLING_ADDRESS_ID_IS_INVALID: &str = "91702";
    pub const CARDHOLDER_NAME_IS_TOO_LONG: &str = "81723";
    pub const CREDIT_CARD_TYPE_IS_NOT_ACCEPTED: &str = "81703";
    pub const CUSTOMER_ID_IS_INVALID: &str = "91705";
    pub const CUSTOMER_ID_IS_REQUIRED: &str = "91704";
    pub const CVV_IS_INVALID: &str = "81707";
    pub const CVV_IS_REQUIRED: &str = "81706";
    pub const DUPLICATE_CARD_EXISTS: &str = "81724";
    pub const EXPIRATION_DATE_CONFLICT: &str = "91708";
    pub const EXPIRATION_DATE_IS_INVALID: &str = "81710";
    pub const EXPIRATION_DATE_IS_REQUIRED: &str = "81709";
    pub const EXPIRATION_DATE_YEAR_IS_INVALID: &str = "81711";
    pub const EXPIRATION_MONTH_IS_INVALID: &str = "81712";
    pub const EXPIRATION_YEAR_IS_INVALID: &str = "81713";
    pub const NUMBER_HAS_INVALID_LENGTH: &str = "81716";
    pub const NUMBER_IS_INVALID: &str = "81715";
    pub const NUMBER_IS_REQUIRED: &str = "81714";
    pub const NUMBER_MUST_BE_TEST_NUMBER: &str = "81717";
    pub const PAYMENT_METHOD_CONFLICT: &str = "81725";
    pub const TOKEN_INVALID: &str = "91718";
    pub const TOKEN_IS_IN_USE: &str = "91719";
    pub const TOKEN_IS_NOT_ALLOWED: &str = "91721";
    pub const TOKEN_IS_TOO_LONG: &str = "91720";
    pub const VERIFICATION_NOT_SUPPORTED_ON_THIS_MERCHANT_ACCOUNT: &str = "91730";
}

pub mod customer {
    pub const COMPANY_IS_TOO_LONG: &str = "81601";
    pub const CUSTOM_FIELD_IS_INVALID: &str = "91602";
    pub const CUSTOM_FIELD_IS_TOO_LONG: &str = "81603";
    pub const EMAIL_IS_INVALID: &str = "81604";
    pub const EMAIL_IS_REQUIRED: &str = "81606";
    pub const EMAIL_IS_TOO_LONG: &str = "81605";
    pub const FAX_IS_TOO_LONG: &str = "81607";
    pub const FIRST_NAME_IS_TOO_LONG: &str = "81608";
    pub const ID_IS_IN_USE: &str = "91609";
    pub const ID_IS_INVALID: &str = "91610";
    pub const ID_IS_NOT_ALLOWED: &str = "91611";
    pub const ID_IS_REQUIRED: &str = "91613";
    pub const ID_IS_TOO_LONG: &str = "91612";
    pub const LAST_NAME_IS_TOO_LONG: &str = "81613";
    pub const PHONE_IS_TOO_LONG: &str = "81614";
    pub const WEBSITE_IS_INVALID: &str = "81616";
    pub const WEBSITE_IS_TOO_LONG: &str = "81615";
}

pub mod dispute {
    pub const CAN_ONLY_ADD_EVIDENCE_TO_OPEN_DISPUTE: &str = "95701";
    pub const CAN_ONLY_REMOVE_EVIDENCE_FROM_OPEN_DISPUTE: &str = "95702";
    pub const CAN_ONLY_ACCEPT_OPEN_DISPUTE: &str = "95705";
    pub const CAN_ONLY_FINALIZE_OPEN_DISPUTE: &str = "95706";
    pub const EVIDENCE_CONTENT_IS_REQUIRED: &str = "95709";
}

pub mod merchant_account {
    pub const ID_FORMAT_IS_INVALID: &str = "82603";
    pub const ID_IS_IN_USE: &str = "82604";
    pub const ID_IS_NOT_ALLOWED: &str = "82605";
    pub const ID_IS_TOO_LONG: &str = "82602";
    pub const MASTER_MERCHANT_ACCOUNT_ID_IS_INVALID: &str = "82607";
    pub const MASTER_MERCHANT_ACCOUNT_ID_IS_REQUIRED: &str = "82606";
    pub const MASTER_MERCHANT_ACCOUNT_MUST_BE_ACTIVE: &str = "82608";
    pub const TOS_ACCEPTED_IS_REQUIRED: &str = "82610";
    pub const CANNOT_BE_UPDATED: &str = "82674";
    pub const CURRENCY_IS_INVALID: &str = "93605";
    pub const CURRENCY_IS_REQUIRED: &str = "93606";
    pub const MERCHANT_ACCOUNT_EXISTS_FOR_CURRENCY: &str = "93607";
    pub const MERCHANT_ACCOUNT_EXISTS_FOR_ID: &str = "93608";
}

pub mod payment_method {
    pub const CANNOT_FORWARD_PAYMENT_METHOD_TYPE: &str = "93106";
    pub const CUSTOMER_ID_IS_INVALID: &str = "93105";
    pub const CUSTOMER_ID_IS_REQUIRED: &str = "93104";
    pub const NONCE_IS_INVALID: &str = "93102";
    pub const NONCE_IS_REQUIRED: &str = "93103";
    pub const PAYMENT_METHOD_NONCE_CONSUMED: &str = "93107";
    pub const PAYMENT_METHOD_NONCE_LOCKED: &str = "93109";
    pub const PAYMENT_METHOD_NONCE_UNKNOWN: &str = "93108";
}

pub mod subscription {
    pub const CANNOT_EDIT_CANCELED_SUBSCRIPTION: &str = "81901";
    pub const ID_IS_IN_USE: &str = "81902";
    pub const PAYMENT_METHOD_TOKEN_IS_INVALID: &str = "91903";
    pub const PLAN_ID_IS_INVALID: &str = "91904";
    pub const PRICE_CANNOT_BE_BLANK: &str = "81903";
    pub const PRICE_FORMAT_IS_INVALID: &str = "81904";
    pub const STATUS_IS_CANCELED: &str = "81905";
    pub const TOKEN_FORMAT_IS_INVALID: &str = "81906";
}

pub mod transaction {
    pub const AMOUNT_CANNOT_BE_NEGATIVE: &str = "81501";
    pub const AMOUNT_IS_INVALID: &str = "81503";
    pub const AMOUNT_IS_REQUIRED: &str = "81502";
    pub const AMOUNT_IS_TOO_LARGE: &str = "81528";
    pub const AMOUNT_MUST_BE_GREATER_THAN_ZERO: &str = "81531";
    pub const BILLING_ADDRESS_CONFLICT: &str = "91530";
    pub const CANNOT_BE_VOIDED: &str = "91504";
    pub const CANNOT_CANCEL_RELEASE: &str = "91562";
    pub const CANNOT_CLONE_CREDIT: &str = "91543";
    pub const CANNOT_HOLD_IN_ESCROW: &str = "91560";
    pub const CANNOT_REFUND_CREDIT: &str = "91505";
    pub const CANNOT_REFUND_UNLESS_SETTLED: &str = "91506";
    pub const CANNOT_RELEASE_FROM_ESCROW: &str = "91561";
    pub const CANNOT_SUBMIT_FOR_PARTIAL_SETTLEMENT: &str = "915103";
    pub const CANNOT_SUBMIT_FOR_SETTLEMENT: &str = "91507";
    pub const CHANNEL_IS_TOO_LONG: &str = "91550";
    pub const CREDIT_CARD_IS_REQUIRED: &str = "91508";
    pub const CUSTOMER_DEFAULT_PAYMENT_METHOD_CARD_TYPE_IS_NOT_ACCEPTED: &str = "81509";
    pub const CUSTOMER_DOES_NOT_HAVE_CREDIT_CARD: &str = "91511";
    pub const CUSTOMER_ID_IS_INVALID: &str = "91510";
    pub const HAS_ALREADY_BEEN_REFUNDED: &str = "91512";
    pub const MERCHANT_ACCOUNT_ID_IS_INVALID: &str = "91513";
    pub const MERCHANT_ACCOUNT_IS_SUSPENDED: &str = "91514";
    pub const ORDER_ID_IS_TOO_LONG: &str = "91501";
    pub const PAYMENT_METHOD_CONFLICT: &str = "91515";
    pub const PAYMENT_METHOD_DOES_NOT_BELONG_TO_CUSTOMER: &str = "91516";
    pub const PAYMENT_METHOD_NONCE_UNKNOWN: &str = "91565";
    pub const PAYMENT_METHOD_TOKEN_IS_INVALID: &str = "91518";
    pub const PROCESSOR_AUTHORIZATION_CODE_CANNOT_BE_SET: &str = "91519";
    pub const REFUND_AMOUNT_IS_TOO_LARGE: &str = "91521";
    pub const SETTLEMENT_AMOUNT_IS_TOO_LARGE: &str = "91522";
    pub const SERVICE_FEE_AMOUNT_IS_TOO_LARGE: &str = "91556";
    pub const SERVICE_FEE_AMOUNT_NOT_ALLOWED_ON_MASTER_MERCHANT_ACCOUNT: &str = "91557";
    pub const SUB_MERCHANT_ACCOUNT_REQUIRES_SERVICE_FEE_AMOUNT: &str = "91553";
    pub const TYPE_IS_INVALID: &str = "91523";
    pub const TYPE_IS_REQUIRED: &str = "91524";
    pub const UNSUPPORTED_VOICE_AUTHORIZATION: &str = "91539";
}

pub mod verification {
    pub const AMOUNT_CANNOT_BE_NEGATIVE: &str = "94501";
    pub const AMOUNT_FORMAT_IS_INVALID: &str = "94502";
    pub const AMOUNT_IS_TOO_LARGE: &str = "94503";
    pub const AMOUNT_NOT_SUPPORTED_BY_PROCESSOR: &str = "94504";
    pub const MERCHANT_ACCOUNT_ID_IS_INVALID: &str = "94505";
    pub const MERCHANT_ACCOUNT_IS_SUSPENDED: &str = "94506";
}
