//! Verdemar Cart - client-side cart state management.
//!
//! This crate is the storefront's cart state manager: an ordered collection
//! of line items kept in durable client-side storage, reconciled against
//! periodically fetched authoritative stock levels, and submitted to the
//! backend's order-creation endpoint at checkout.
//!
//! # Architecture
//!
//! - All mutations flow through a single sequential command queue
//!   ([`manager::CartManager`]); user edits and timer-driven stock
//!   reconciliation cannot race because the actor awaits the stock fetch
//!   inside its own turn.
//! - The persisted store is write-through: the in-memory collection and the
//!   serialized state are equal after every mutation.
//! - Views observe changes through [`store::CartEvent`] broadcasts instead of
//!   polling; user-facing messages go out as [`notify::Notice`] broadcasts.
//! - Stock lookup, order creation, and authentication are collaborator traits
//!   ([`clients`]) implemented over the backend REST API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clients;
pub mod config;
pub mod error;
pub mod manager;
pub mod model;
pub mod notify;
pub mod storage;
pub mod store;

pub use clients::{ApiClient, OrderGateway, StockLookup, StockRecord, TokenStore};
pub use config::CartConfig;
pub use error::CartError;
pub use manager::{CartCollaborators, CartHandle, CartManager, RefreshGuard};
pub use model::{Cart, LineItem};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use store::{CartEvent, CartStore};
