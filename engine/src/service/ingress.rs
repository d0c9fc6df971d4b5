use futures::{
    channel::{mpsc, oneshot},
    SinkExt,
};
use tablestakes_types::economy::{Account, GameKind, GameParams, LeaderboardEntry};
use tablestakes_types::{AccountId, CommunityId};

use crate::error::EngineError;
use crate::table::Receipt;

/// Requests the table actor services.
pub enum Message {
    Play {
        account: AccountId,
        community: CommunityId,
        kind: GameKind,
        amount: u64,
        params: GameParams,
        response: oneshot::Sender<Result<Receipt, EngineError>>,
    },
    Balance {
        account: AccountId,
        community: CommunityId,
        response: oneshot::Sender<Result<u64, EngineError>>,
    },
    Stats {
        account: AccountId,
        community: CommunityId,
        response: oneshot::Sender<Result<Option<Account>, EngineError>>,
    },
    Leaderboard {
        community: CommunityId,
        limit: usize,
        response: oneshot::Sender<Result<Vec<LeaderboardEntry>, EngineError>>,
    },
    SetBalance {
        account: AccountId,
        community: CommunityId,
        value: u64,
        response: oneshot::Sender<Result<u64, EngineError>>,
    },
    Grant {
        account: AccountId,
        community: CommunityId,
        delta: i64,
        response: oneshot::Sender<Result<u64, EngineError>>,
    },
    Reset {
        account: AccountId,
        community: CommunityId,
        response: oneshot::Sender<Result<u64, EngineError>>,
    },
}

/// Handle for submitting requests to the table actor.
#[derive(Clone)]
pub struct Mailbox {
    sender: mpsc::Sender<Message>,
}

impl Mailbox {
    pub(super) fn new(sender: mpsc::Sender<Message>) -> Self {
        Self { sender }
    }

    pub async fn play(
        &mut self,
        account: AccountId,
        community: CommunityId,
        kind: GameKind,
        amount: u64,
        params: GameParams,
    ) -> Result<Receipt, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Play {
                account,
                community,
                kind,
                amount,
                params,
                response,
            })
            .await
            .expect("Failed to send play");
        receiver.await.expect("Failed to receive play")
    }

    pub async fn balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<u64, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Balance {
                account,
                community,
                response,
            })
            .await
            .expect("Failed to send balance");
        receiver.await.expect("Failed to receive balance")
    }

    pub async fn stats(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<Option<Account>, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Stats {
                account,
                community,
                response,
            })
            .await
            .expect("Failed to send stats");
        receiver.await.expect("Failed to receive stats")
    }

    pub async fn leaderboard(
        &mut self,
        community: CommunityId,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Leaderboard {
                community,
                limit,
                response,
            })
            .await
            .expect("Failed to send leaderboard");
        receiver.await.expect("Failed to receive leaderboard")
    }

    pub async fn set_balance(
        &mut self,
        account: AccountId,
        community: CommunityId,
        value: u64,
    ) -> Result<u64, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::SetBalance {
                account,
                community,
                value,
                response,
            })
            .await
            .expect("Failed to send set_balance");
        receiver.await.expect("Failed to receive set_balance")
    }

    pub async fn grant(
        &mut self,
        account: AccountId,
        community: CommunityId,
        delta: i64,
    ) -> Result<u64, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Grant {
                account,
                community,
                delta,
                response,
            })
            .await
            .expect("Failed to send grant");
        receiver.await.expect("Failed to receive grant")
    }

    pub async fn reset(
        &mut self,
        account: AccountId,
        community: CommunityId,
    ) -> Result<u64, EngineError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(Message::Reset {
                account,
                community,
                response,
            })
            .await
            .expect("Failed to send reset");
        receiver.await.expect("Failed to receive reset")
    }
}
