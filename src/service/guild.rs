//! Guild membership, contributions, and rankings.

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::types::GuildKind;

use crate::{
    data::{guild::GuildRepository, user::UserRepository},
    error::{Error, GameError},
    service::progression,
};

/// Founding guilds created on first startup, each with an NPC leader.
const DEFAULT_GUILDS: [(&str, GuildKind, &str, &str); 4] = [
    (
        "Stellar Dominion",
        GuildKind::Military,
        "Elite combat pilots defending the frontier",
        "npc_dominion_leader",
    ),
    (
        "Cosmic Traders",
        GuildKind::Trade,
        "Merchant alliance controlling the trade lanes",
        "npc_traders_leader",
    ),
    (
        "Void Explorers",
        GuildKind::Exploration,
        "Pioneers charting the uncharted sectors",
        "npc_explorers_leader",
    ),
    (
        "Nexus Researchers",
        GuildKind::Research,
        "Scientists unlocking the secrets of nexium",
        "npc_researchers_leader",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionCurrency {
    Credits,
    Nexium,
}

/// Nexium contributions weigh ten times their face amount.
fn contribution_value(currency: ContributionCurrency, amount: i32) -> i32 {
    match currency {
        ContributionCurrency::Credits => amount,
        ContributionCurrency::Nexium => amount * 10,
    }
}

/// Joining can fail for reasons the caller presents to the player
/// rather than treats as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    Joined(entity::guild::Model),
    AlreadyInGuild,
    NotFound,
    Full,
}

pub struct ContributionReceipt {
    pub guild: entity::guild::Model,
    pub guild_experience_gained: i32,
    pub personal_experience: i32,
    pub leveled_up: bool,
}

pub struct GuildRanking {
    pub rank: i32,
    pub power: i32,
    pub guild: entity::guild::Model,
}

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the founding guilds if no guilds exist yet.
    pub async fn seed_default_guilds(&self) -> Result<(), Error> {
        let guilds = GuildRepository::new(self.db);
        if !guilds.get_all().await?.is_empty() {
            return Ok(());
        }

        for (name, kind, description, leader_id) in DEFAULT_GUILDS {
            guilds.create(name, kind, description, leader_id).await?;
            tracing::info!("seeded guild {name}");
        }

        Ok(())
    }

    pub async fn join(&self, user_id: i32, guild_id: i32) -> Result<JoinOutcome, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        if user.guild_id.is_some() {
            return Ok(JoinOutcome::AlreadyInGuild);
        }

        let guilds = GuildRepository::new(&txn);
        let Some(mut guild) = guilds.get(guild_id).await? else {
            return Ok(JoinOutcome::NotFound);
        };
        if guild.member_count >= guild.max_members {
            return Ok(JoinOutcome::Full);
        }

        users.set_guild(user_id, Some(guild.id)).await?;
        guild.member_count += 1;
        guilds.set_member_count(guild.id, guild.member_count).await?;

        txn.commit().await?;

        tracing::info!("user {user_id} joined guild {}", guild.name);

        Ok(JoinOutcome::Joined(guild))
    }

    pub async fn leave(&self, user_id: i32) -> Result<entity::guild::Model, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        let guild_id = user.guild_id.ok_or(GameError::NotInGuild(user_id))?;

        let guilds = GuildRepository::new(&txn);
        let mut guild = guilds
            .get(guild_id)
            .await?
            .ok_or(GameError::GuildNotFound(guild_id))?;

        users.set_guild(user_id, None).await?;
        // The NPC leader always counts as a member.
        guild.member_count = (guild.member_count - 1).max(1);
        guilds.set_member_count(guild.id, guild.member_count).await?;

        txn.commit().await?;

        Ok(guild)
    }

    /// Donates credits or nexium to the commander's guild. The guild
    /// earns a tenth of the contribution value as experience, the
    /// contributor half of that personally.
    pub async fn contribute(
        &self,
        rng: &mut impl Rng,
        user_id: i32,
        currency: ContributionCurrency,
        amount: i32,
    ) -> Result<ContributionReceipt, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        let guild_id = user.guild_id.ok_or(GameError::NotInGuild(user_id))?;

        let guilds = GuildRepository::new(&txn);
        let guild = guilds
            .get(guild_id)
            .await?
            .ok_or(GameError::GuildNotFound(guild_id))?;

        match currency {
            ContributionCurrency::Credits => {
                if user.credits < amount {
                    return Err(GameError::InsufficientCredits {
                        required: amount,
                        available: user.credits,
                    }
                    .into());
                }
                users.add_credits(user_id, -amount).await?;
            }
            ContributionCurrency::Nexium => {
                if user.nexium < amount {
                    return Err(GameError::InsufficientNexium {
                        required: amount,
                        available: user.nexium,
                    }
                    .into());
                }
                users.add_nexium(user_id, -amount).await?;
            }
        }

        let guild_experience_gained = contribution_value(currency, amount) / 10;
        let experience = guild.experience + guild_experience_gained;
        let level = progression::level_for_experience(experience);
        let leveled_up = level > guild.level;

        let mut max_members = guild.max_members;
        if leveled_up && level % 5 == 0 {
            max_members += 25;
        }
        let guild = guilds
            .set_progress(guild.id, experience, level, max_members)
            .await?;

        if leveled_up && level % 10 == 0 {
            let payout = level * 1000;
            let paid = users.credit_guild_members(guild.id, payout).await?;
            tracing::info!(
                "guild {} reached level {level}, paid {payout} credits to {paid} members",
                guild.name
            );
        }

        let personal_experience = guild_experience_gained / 2;
        progression::grant_experience(&txn, rng, user_id, personal_experience).await?;

        txn.commit().await?;

        Ok(ContributionReceipt {
            guild,
            guild_experience_gained,
            personal_experience,
            leveled_up,
        })
    }

    /// All guilds ranked by level then experience, with a derived
    /// power score.
    pub async fn rankings(&self) -> Result<Vec<GuildRanking>, Error> {
        let guilds = GuildRepository::new(self.db).get_all().await?;
        Ok(guilds
            .into_iter()
            .enumerate()
            .map(|(index, guild)| GuildRanking {
                rank: index as i32 + 1,
                power: guild.level * 100 + guild.member_count * 10 + guild.experience,
                guild,
            })
            .collect())
    }

    pub async fn members(&self, guild_id: i32) -> Result<Vec<entity::user::Model>, Error> {
        Ok(UserRepository::new(self.db).guild_members(guild_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use starforge_test_utils::{fixtures, TestSetup};

    use entity::types::GuildKind;

    use crate::{
        data::{guild::GuildRepository, user::UserRepository},
        error::Error,
    };

    use super::{ContributionCurrency, GuildService, JoinOutcome};

    #[tokio::test]
    async fn test_seed_default_guilds_is_idempotent() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);

        service.seed_default_guilds().await?;
        service.seed_default_guilds().await?;

        let guilds = GuildRepository::new(&test.db).get_all().await?;
        assert_eq!(guilds.len(), 4);
        assert!(guilds.iter().any(|g| g.name == "Stellar Dominion"));
        assert!(guilds.iter().all(|g| g.max_members == 100));

        Ok(())
    }

    #[tokio::test]
    async fn test_join_and_leave() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let guild = fixtures::guild(&test.db, "Void Explorers", GuildKind::Exploration, 100).await?;

        let outcome = service.join(user.id, guild.id).await?;
        let JoinOutcome::Joined(joined) = outcome else {
            panic!("expected to join");
        };
        assert_eq!(joined.member_count, 2);

        let outcome = service.join(user.id, guild.id).await?;
        assert_eq!(outcome, JoinOutcome::AlreadyInGuild);

        let left = service.leave(user.id).await?;
        assert_eq!(left.member_count, 1);

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.guild_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_join_full_guild_leaves_no_trace() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let guild = fixtures::guild(&test.db, "Tiny Cell", GuildKind::Military, 1).await?;

        let outcome = service.join(user.id, guild.id).await?;
        assert_eq!(outcome, JoinOutcome::Full);

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.guild_id, None);
        let guild = GuildRepository::new(&test.db).get(guild.id).await?.unwrap();
        assert_eq!(guild.member_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_contribute_credits() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let guild = fixtures::guild(&test.db, "Cosmic Traders", GuildKind::Trade, 100).await?;
        service.join(user.id, guild.id).await?;

        let receipt = service
            .contribute(&mut rng, user.id, ContributionCurrency::Credits, 500)
            .await?;

        assert_eq!(receipt.guild_experience_gained, 50);
        assert_eq!(receipt.personal_experience, 25);
        assert_eq!(receipt.guild.experience, 50);
        assert!(!receipt.leveled_up);

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.credits, 500);
        assert_eq!(user.experience, 25);

        Ok(())
    }

    #[tokio::test]
    async fn test_contribute_nexium_weighs_tenfold() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let guild = fixtures::guild(&test.db, "Nexus Researchers", GuildKind::Research, 100).await?;
        service.join(user.id, guild.id).await?;

        let receipt = service
            .contribute(&mut rng, user.id, ContributionCurrency::Nexium, 20)
            .await?;

        assert_eq!(receipt.guild_experience_gained, 20);
        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.nexium, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_level_milestones_expand_and_pay() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = GuildService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let guild = fixtures::guild(&test.db, "Stellar Dominion", GuildKind::Military, 100).await?;
        service.join(user.id, guild.id).await?;
        let guilds = GuildRepository::new(&test.db);

        // Crossing into level 5 grows the roster cap.
        guilds.set_progress(guild.id, 3990, 4, 100).await?;
        let receipt = service
            .contribute(&mut rng, user.id, ContributionCurrency::Credits, 200)
            .await?;
        assert!(receipt.leveled_up);
        assert_eq!(receipt.guild.level, 5);
        assert_eq!(receipt.guild.max_members, 125);

        // Crossing into level 10 pays every member level * 1000 credits.
        guilds.set_progress(guild.id, 8990, 9, 125).await?;
        let before = UserRepository::new(&test.db)
            .get(user.id)
            .await?
            .unwrap()
            .credits;
        let receipt = service
            .contribute(&mut rng, user.id, ContributionCurrency::Credits, 200)
            .await?;
        assert_eq!(receipt.guild.level, 10);

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.credits, before - 200 + 10_000);

        Ok(())
    }
}
