mod auth;
mod credit_cards;
mod customers;
mod helpers;
mod transactions;
