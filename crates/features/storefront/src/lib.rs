//! Storefront session state.
//!
//! Everything here lives on the client: explicit state objects over a [`ClientStore`]
//! (the browser's local storage), each with a clear init and teardown.
//!
//! * [`session::AuthSession`]: restore, sign in, sign out; feeds the shell access check.
//! * [`cart::Cart`]: line items, totals and checkout.
//! * [`builder::PcBuilder`]: one part per component category, gated by the `pcBuilder` flag.
//! * [`orders::OrderBook`]: per-user order history persisted under the `orders` key.
//!
//! [`ClientStore`]: nshop_kernel::store::ClientStore

pub mod builder;
pub mod cart;
mod error;
pub mod orders;
pub mod session;

pub use crate::error::{StorefrontError, StorefrontErrorExt};
