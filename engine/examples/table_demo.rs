//! Short interactive session against an in-memory table.
//!
//! Seeds two players, runs one round of each game through the service
//! mailbox, and prints the resulting leaderboard.

use commonware_runtime::{tokio, Runner};
use tablestakes_engine::service::Actor;
use tablestakes_engine::{Config, Memory, Table};
use tablestakes_types::economy::{GameKind, GameParams};
use tracing::info;

const COMMUNITY: u64 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let executor = tokio::Runner::new(tokio::Config::default());
    executor.start(|context| async move {
        let config = Config {
            min_bet: 1,
            max_bet: 1_000,
            initial_balance: 500,
            ..Config::default()
        };
        let mailbox_size = config.mailbox_size;

        let table = Table::new(
            context.clone(),
            config,
            Memory::default(),
            Memory::default(),
        )
        .expect("default demo config is valid");
        let (actor, mut mailbox) = Actor::new(context, table, mailbox_size);
        actor.start();

        // Three plays, one per game; different commands don't share a
        // cooldown window, so no waiting between them.
        let flip = mailbox
            .play(
                1,
                COMMUNITY,
                GameKind::CoinFlip,
                50,
                GameParams::CoinFlip {
                    choice: "heads".to_string(),
                },
            )
            .await
            .expect("coin flip settles");
        info!(
            won = flip.outcome.won,
            payout = flip.payout,
            balance = flip.new_balance,
            "{}",
            flip.outcome.detail
        );

        let dice = mailbox
            .play(
                1,
                COMMUNITY,
                GameKind::DiceRoll,
                100,
                GameParams::DiceRoll { target: Some(3) },
            )
            .await
            .expect("dice roll settles");
        info!(
            won = dice.outcome.won,
            payout = dice.payout,
            balance = dice.new_balance,
            "{}",
            dice.outcome.detail
        );

        let slots = mailbox
            .play(2, COMMUNITY, GameKind::Slots, 200, GameParams::Slots)
            .await
            .expect("slots settle");
        info!(
            won = slots.outcome.won,
            payout = slots.payout,
            balance = slots.new_balance,
            "{}",
            slots.outcome.detail
        );

        for entry in mailbox
            .leaderboard(COMMUNITY, 10)
            .await
            .expect("leaderboard")
        {
            info!(
                rank = entry.rank,
                account = entry.account,
                balance = entry.balance,
                "standing"
            );
        }
    });
}
