//! Experience accounting and reward application, shared by every
//! service that pays a commander.

use rand::Rng;
use sea_orm::ConnectionTrait;

use entity::types::{Reward, UserStats};

use crate::{
    data::{resource::ResourceRepository, user::UserRepository},
    error::{Error, GameError},
    reward,
};

/// What a grant of experience did to the commander.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceGain {
    pub gained: i32,
    pub new_level: i32,
    pub leveled_up: bool,
    pub rewards: Vec<Reward>,
}

/// Level is a pure function of lifetime experience.
pub fn level_for_experience(experience: i32) -> i32 {
    experience / 1000 + 1
}

/// Adds experience to a commander, recomputes the level, and pays
/// level-up rewards when a threshold was crossed.
///
/// Runs against whatever connection it is given; callers inside a
/// larger mutation pass their open transaction.
pub async fn grant_experience<C: ConnectionTrait>(
    db: &C,
    rng: &mut impl Rng,
    user_id: i32,
    amount: i32,
) -> Result<ExperienceGain, Error> {
    let users = UserRepository::new(db);
    let user = users
        .get(user_id)
        .await?
        .ok_or(GameError::UserNotFound(user_id))?;

    let new_experience = user.experience + amount;
    let new_level = level_for_experience(new_experience);
    let leveled_up = new_level > user.level;

    users.set_experience(user_id, new_experience, new_level).await?;

    let rewards = if leveled_up {
        let rewards = reward::level_up_rewards(rng, new_level);
        apply_rewards(db, user_id, &rewards).await?;
        rewards
    } else {
        Vec::new()
    };

    Ok(ExperienceGain {
        gained: amount,
        new_level,
        leveled_up,
        rewards,
    })
}

/// Persists a reward list: currencies onto the user row, everything
/// else into the inventory. Artifact grants also bump the artifacts
/// counter.
pub async fn apply_rewards<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    rewards: &[Reward],
) -> Result<(), Error> {
    use entity::types::ResourceKind;

    let users = UserRepository::new(db);
    let resources = ResourceRepository::new(db);
    let mut artifacts_found = 0;

    for reward in rewards {
        match reward {
            Reward::Credits { amount, .. } => users.add_credits(user_id, *amount).await?,
            Reward::Nexium { amount, .. } => users.add_nexium(user_id, *amount).await?,
            Reward::Material {
                name,
                quantity,
                value,
            } => {
                resources
                    .grant(
                        user_id,
                        name,
                        ResourceKind::Material,
                        *quantity,
                        Reward::rarity_for_value(*value),
                        *value,
                    )
                    .await?;
            }
            Reward::Artifact { name, value } => {
                resources
                    .grant(
                        user_id,
                        name,
                        ResourceKind::Artifact,
                        1,
                        Reward::rarity_for_value(*value),
                        *value,
                    )
                    .await?;
                artifacts_found += 1;
            }
            Reward::Component { name, value } => {
                resources
                    .grant(
                        user_id,
                        name,
                        ResourceKind::Component,
                        1,
                        Reward::rarity_for_value(*value),
                        *value,
                    )
                    .await?;
            }
            Reward::Upgrade { name, value } => {
                resources
                    .grant(
                        user_id,
                        name,
                        ResourceKind::Upgrade,
                        1,
                        Reward::rarity_for_value(*value),
                        *value,
                    )
                    .await?;
            }
        }
    }

    if artifacts_found > 0 {
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        users
            .set_stats(
                user_id,
                UserStats {
                    artifacts: user.stats.artifacts + artifacts_found,
                    ..user.stats
                },
            )
            .await?;
    }

    Ok(())
}
