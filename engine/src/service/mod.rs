//! Serialized access to a [`crate::Table`].
//!
//! Play requests may arrive from many tasks at once. The [`Actor`] owns the
//! table and drains a bounded mailbox one request at a time — the
//! serializing-transaction strategy that keeps balance updates and cooldown
//! check-and-sets atomic per key without any per-row locking. [`Mailbox`]
//! handles are cheap to clone and hand to every caller.

mod actor;
pub use actor::Actor;
mod ingress;
pub use ingress::{Mailbox, Message};
