use commonware_runtime::{Clock, Handle, Spawner};
use futures::{channel::mpsc, StreamExt};
use rand::{CryptoRng, Rng};
use tracing::debug;

use super::ingress::{Mailbox, Message};
use crate::store::Store;
use crate::table::Table;

/// Owns a [`Table`] and services mailbox requests one at a time.
///
/// Sequential draining is the whole point: while one play settles, every
/// other request for any account waits its turn, so no two settlements ever
/// interleave on the same row.
pub struct Actor<E: Rng + CryptoRng + Clock + Spawner, S: Store> {
    context: E,
    mailbox: mpsc::Receiver<Message>,
    table: Table<E, S>,
}

impl<E: Rng + CryptoRng + Clock + Spawner, S: Store + Send + Sync + 'static> Actor<E, S> {
    /// Create an actor around `table` with a mailbox of `mailbox_size`
    /// pending requests. Senders block (asynchronously) once it fills.
    pub fn new(context: E, table: Table<E, S>, mailbox_size: usize) -> (Self, Mailbox) {
        let (sender, mailbox) = mpsc::channel(mailbox_size);
        (
            Self {
                context,
                mailbox,
                table,
            },
            Mailbox::new(sender),
        )
    }

    pub fn start(mut self) -> Handle<()> {
        self.context.spawn_ref()(self.run())
    }

    async fn run(mut self) {
        while let Some(message) = self.mailbox.next().await {
            // Responses are best-effort: the requester may have given up
            match message {
                Message::Play {
                    account,
                    community,
                    kind,
                    amount,
                    params,
                    response,
                } => {
                    let result = self
                        .table
                        .play(account, community, kind, amount, params)
                        .await;
                    let _ = response.send(result);
                }
                Message::Balance {
                    account,
                    community,
                    response,
                } => {
                    let _ = response.send(self.table.balance(account, community).await);
                }
                Message::Stats {
                    account,
                    community,
                    response,
                } => {
                    let _ = response.send(self.table.stats(account, community).await);
                }
                Message::Leaderboard {
                    community,
                    limit,
                    response,
                } => {
                    let _ = response.send(self.table.leaderboard(community, limit).await);
                }
                Message::SetBalance {
                    account,
                    community,
                    value,
                    response,
                } => {
                    let _ = response.send(self.table.set_balance(account, community, value).await);
                }
                Message::Grant {
                    account,
                    community,
                    delta,
                    response,
                } => {
                    let _ = response.send(self.table.grant(account, community, delta).await);
                }
                Message::Reset {
                    account,
                    community,
                    response,
                } => {
                    let _ = response.send(self.table.reset(account, community).await);
                }
            }
        }
        debug!("mailbox closed, table actor stopping");
    }
}
