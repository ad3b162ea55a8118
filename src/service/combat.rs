//! Combat resolution against generated enemies and other commanders.
//!
//! The dice are rolled by pure functions over an injected [`Rng`];
//! the service methods only persist what the dice decided.

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::types::{CombatKind, CombatOutcome, UserStats};

use crate::{
    data::{combat::CombatLogRepository, ship::ShipRepository, user::UserRepository},
    error::{Error, GameError},
    generator::enemy::{self, Enemy},
    reward,
    service::progression,
};

const PVP_WINNER_EXPERIENCE: i32 = 150;
const PVP_LOSER_EXPERIENCE: i32 = 50;

/// A ship's single combat rating.
pub fn ship_power(ship: &entity::ship::Model) -> i32 {
    ship.health + ship.speed + ship.weapons * 20 + ship.sensors
}

/// Dice for one PvE encounter. Victory and damage come from
/// independent rolls: a losing fight can still land heavy hits.
pub struct PveResolution {
    pub victory: bool,
    pub attacker_damage: i32,
    pub defender_damage: i32,
    pub experience: i32,
}

pub fn resolve_pve(
    rng: &mut impl Rng,
    ship: &entity::ship::Model,
    enemy: &Enemy,
) -> PveResolution {
    let player_roll = rng.random::<f64>() * ship_power(ship) as f64;
    let enemy_roll = rng.random::<f64>() * enemy.power as f64;

    let victory = player_roll > enemy_roll;

    PveResolution {
        victory,
        attacker_damage: (player_roll * 0.3 + ship.weapons as f64 * 10.0).floor() as i32,
        defender_damage: (enemy_roll * 0.2 + enemy.weapons as f64 * 8.0).floor() as i32,
        experience: enemy.difficulty * 25 + if victory { 50 } else { 25 },
    }
}

/// Dice for one PvP engagement. Damage received is the opponent's
/// dealt damage reduced by the defender's speed (capped at 200).
pub struct PvpResolution {
    pub attacker_won: bool,
    pub attacker_damage_dealt: i32,
    pub defender_damage_dealt: i32,
    pub attacker_damage_received: i32,
    pub defender_damage_received: i32,
}

pub fn resolve_pvp(
    rng: &mut impl Rng,
    attacker: &entity::ship::Model,
    defender: &entity::ship::Model,
) -> PvpResolution {
    let attacker_roll = rng.random::<f64>() * ship_power(attacker) as f64;
    let defender_roll = rng.random::<f64>() * ship_power(defender) as f64;

    let attacker_dealt = (attacker_roll * 0.25 + attacker.weapons as f64 * 12.0).floor() as i32;
    let defender_dealt = (defender_roll * 0.25 + defender.weapons as f64 * 12.0).floor() as i32;

    PvpResolution {
        attacker_won: attacker_roll > defender_roll,
        attacker_damage_dealt: attacker_dealt,
        defender_damage_dealt: defender_dealt,
        attacker_damage_received: (defender_dealt as f64 * (1.0 - attacker.speed as f64 / 200.0))
            .floor() as i32,
        defender_damage_received: (attacker_dealt as f64 * (1.0 - defender.speed as f64 / 200.0))
            .floor() as i32,
    }
}

pub struct PveReport {
    pub victory: bool,
    pub enemy: Enemy,
    pub log: entity::combat_log::Model,
    pub ship_health: i32,
}

#[derive(Debug)]
pub struct PvpReport {
    pub winner_id: i32,
    pub log: entity::combat_log::Model,
    pub attacker_ship_health: i32,
    pub defender_ship_health: i32,
}

pub struct CombatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CombatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fights a generated enemy with the commander's active ship.
    /// `enemy_kind` of `None` draws a random enemy within the level's
    /// difficulty cap.
    pub async fn pve(
        &self,
        rng: &mut impl Rng,
        user_id: i32,
        enemy_kind: Option<&str>,
    ) -> Result<PveReport, Error> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let user = users
            .get(user_id)
            .await?
            .ok_or(GameError::UserNotFound(user_id))?;
        let ships = ShipRepository::new(&txn);
        let ship = ships
            .get_active(user_id)
            .await?
            .ok_or(GameError::NoActiveShip(user_id))?;

        let enemy = enemy::generate(rng, enemy_kind, user.level);
        let resolution = resolve_pve(rng, &ship, &enemy);

        let rewards = if resolution.victory {
            reward::combat_rewards(rng, enemy.difficulty, user.level)
        } else {
            Vec::new()
        };

        let ship_health = (ship.health - resolution.defender_damage).max(0);
        ships.set_health(ship.id, ship_health).await?;

        // Stats first: reward application may bump counters of its own.
        users
            .set_stats(
                user_id,
                UserStats {
                    combat: user.stats.combat + 1,
                    ..user.stats
                },
            )
            .await?;
        progression::grant_experience(&txn, rng, user_id, resolution.experience).await?;
        progression::apply_rewards(&txn, user_id, &rewards).await?;

        let outcome = CombatOutcome {
            winner_id: resolution.victory.then_some(user_id),
            attacker_damage: resolution.attacker_damage,
            defender_damage: resolution.defender_damage,
            rewards,
            experience: resolution.experience,
        };
        let log = CombatLogRepository::new(&txn)
            .add(user_id, None, CombatKind::Pve, outcome)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "PvE against {} for user {user_id}: victory={}",
            enemy.name,
            resolution.victory
        );

        Ok(PveReport {
            victory: resolution.victory,
            enemy,
            log,
            ship_health,
        })
    }

    /// Fights another commander. Both active ships take damage, both
    /// sides earn experience, one log row is written under the attacker.
    pub async fn pvp(
        &self,
        rng: &mut impl Rng,
        attacker_id: i32,
        defender_id: i32,
    ) -> Result<PvpReport, Error> {
        if attacker_id == defender_id {
            return Err(GameError::CannotSelfAttack.into());
        }

        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let attacker = users
            .get(attacker_id)
            .await?
            .ok_or(GameError::UserNotFound(attacker_id))?;
        let defender = users
            .get(defender_id)
            .await?
            .ok_or(GameError::UserNotFound(defender_id))?;

        let ships = ShipRepository::new(&txn);
        let attacker_ship = ships
            .get_active(attacker_id)
            .await?
            .ok_or(GameError::NoActiveShip(attacker_id))?;
        let defender_ship = ships
            .get_active(defender_id)
            .await?
            .ok_or(GameError::NoActiveShip(defender_id))?;

        let resolution = resolve_pvp(rng, &attacker_ship, &defender_ship);

        let attacker_ship_health =
            (attacker_ship.health - resolution.attacker_damage_received).max(0);
        let defender_ship_health =
            (defender_ship.health - resolution.defender_damage_received).max(0);
        ships.set_health(attacker_ship.id, attacker_ship_health).await?;
        ships.set_health(defender_ship.id, defender_ship_health).await?;

        let (winner_id, winner_experience, loser_id, loser_experience) =
            if resolution.attacker_won {
                (attacker_id, PVP_WINNER_EXPERIENCE, defender_id, PVP_LOSER_EXPERIENCE)
            } else {
                (defender_id, PVP_WINNER_EXPERIENCE, attacker_id, PVP_LOSER_EXPERIENCE)
            };
        users
            .set_stats(
                attacker_id,
                UserStats {
                    combat: attacker.stats.combat + 1,
                    ..attacker.stats
                },
            )
            .await?;
        users
            .set_stats(
                defender_id,
                UserStats {
                    combat: defender.stats.combat + 1,
                    ..defender.stats
                },
            )
            .await?;
        progression::grant_experience(&txn, rng, winner_id, winner_experience).await?;
        progression::grant_experience(&txn, rng, loser_id, loser_experience).await?;

        let outcome = CombatOutcome {
            winner_id: Some(winner_id),
            attacker_damage: resolution.attacker_damage_dealt,
            defender_damage: resolution.defender_damage_dealt,
            rewards: Vec::new(),
            experience: winner_experience,
        };
        let log = CombatLogRepository::new(&txn)
            .add(attacker_id, Some(defender_id), CombatKind::Pvp, outcome)
            .await?;

        txn.commit().await?;

        Ok(PvpReport {
            winner_id,
            log,
            attacker_ship_health,
            defender_ship_health,
        })
    }

    pub async fn history(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::combat_log::Model>, Error> {
        Ok(CombatLogRepository::new(self.db)
            .get_by_attacker(user_id, limit)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use starforge_test_utils::{fixtures, TestSetup};

    use entity::types::CombatKind;

    use crate::{
        data::{ship::ShipRepository, user::UserRepository},
        error::{Error, GameError},
        generator::enemy,
    };

    use super::{resolve_pve, resolve_pvp, ship_power, CombatService};

    #[tokio::test]
    async fn test_pve_writes_log_and_clamps_health() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = CombatService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let ship = fixtures::active_scout(&test.db, user.id).await?;

        let report = service.pve(&mut rng, user.id, None).await?;

        assert!(report.ship_health >= 0);
        assert!(report.ship_health <= ship.max_health);
        assert_eq!(report.log.kind, CombatKind::Pve);
        assert_eq!(report.log.defender_id, None);
        assert_eq!(report.victory, report.log.outcome.winner_id.is_some());
        if report.victory {
            assert!(!report.log.outcome.rewards.is_empty());
        }

        let user = UserRepository::new(&test.db).get(user.id).await?.unwrap();
        assert_eq!(user.stats.combat, 1);
        assert_eq!(user.experience, report.log.outcome.experience);

        let persisted = ShipRepository::new(&test.db).get(ship.id).await?.unwrap();
        assert_eq!(persisted.health, report.ship_health);

        Ok(())
    }

    #[tokio::test]
    async fn test_pvp_rejects_self_attack() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = CombatService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);
        let user = fixtures::user(&test.db, "discord-1", "Reza").await?;

        let err = service.pvp(&mut rng, user.id, user.id).await.unwrap_err();
        assert!(matches!(err, Error::Game(GameError::CannotSelfAttack)));

        Ok(())
    }

    #[tokio::test]
    async fn test_pvp_splits_experience_150_50() -> Result<(), Error> {
        let test = TestSetup::with_game_tables().await?;
        let service = CombatService::new(&test.db);
        let mut rng = StdRng::seed_from_u64(1);

        let attacker = fixtures::user(&test.db, "discord-1", "Reza").await?;
        let defender = fixtures::user(&test.db, "discord-2", "Kael").await?;
        fixtures::active_scout(&test.db, attacker.id).await?;
        fixtures::active_scout(&test.db, defender.id).await?;

        let report = service.pvp(&mut rng, attacker.id, defender.id).await?;

        let users = UserRepository::new(&test.db);
        let attacker = users.get(attacker.id).await?.unwrap();
        let defender = users.get(defender.id).await?.unwrap();

        let (winner, loser) = if report.winner_id == attacker.id {
            (&attacker, &defender)
        } else {
            (&defender, &attacker)
        };
        assert_eq!(winner.experience, 150);
        assert_eq!(loser.experience, 50);
        assert_eq!(attacker.stats.combat, 1);
        assert_eq!(defender.stats.combat, 1);
        assert_eq!(report.log.outcome.winner_id, Some(report.winner_id));

        Ok(())
    }

    #[test]
    fn test_ship_power_formula() {
        // Tier-1 scout template: 100 + 80 + 1*20 + 60.
        let ship = entity::ship::Model {
            id: 1,
            user_id: 1,
            name: "Test Hull".into(),
            class: entity::types::ShipClass::Scout,
            tier: 1,
            variant: "Testbed".into(),
            health: 100,
            max_health: 100,
            speed: 80,
            cargo: 20,
            weapons: 1,
            sensors: 60,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        };
        assert_eq!(ship_power(&ship), 260);
    }

    /// Identical seeds must produce identical resolutions.
    #[test]
    fn test_resolution_is_deterministic_under_a_seed() {
        let ship = entity::ship::Model {
            id: 1,
            user_id: 1,
            name: "Test Hull".into(),
            class: entity::types::ShipClass::Scout,
            tier: 1,
            variant: "Testbed".into(),
            health: 100,
            max_health: 100,
            speed: 80,
            cargo: 20,
            weapons: 1,
            sensors: 60,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        };
        let enemy = {
            let mut rng = StdRng::seed_from_u64(9);
            enemy::generate(&mut rng, Some("pirate"), 1)
        };

        let first = {
            let mut rng = StdRng::seed_from_u64(42);
            resolve_pve(&mut rng, &ship, &enemy)
        };
        let second = {
            let mut rng = StdRng::seed_from_u64(42);
            resolve_pve(&mut rng, &ship, &enemy)
        };
        assert_eq!(first.victory, second.victory);
        assert_eq!(first.attacker_damage, second.attacker_damage);
        assert_eq!(first.defender_damage, second.defender_damage);
        assert_eq!(first.experience, second.experience);

        let mut defender = ship.clone();
        defender.speed = 40;
        let first = {
            let mut rng = StdRng::seed_from_u64(42);
            resolve_pvp(&mut rng, &ship, &defender)
        };
        let second = {
            let mut rng = StdRng::seed_from_u64(42);
            resolve_pvp(&mut rng, &ship, &defender)
        };
        assert_eq!(first.attacker_won, second.attacker_won);
        assert_eq!(first.attacker_damage_dealt, second.attacker_damage_dealt);
        assert_eq!(
            first.defender_damage_received,
            second.defender_damage_received
        );
    }

    /// Damage received is reduced by speed, so the faster hull takes
    /// less from the same dealt damage.
    #[test]
    fn test_pvp_speed_mitigation() {
        let fast = entity::ship::Model {
            id: 1,
            user_id: 1,
            name: "Test Hull".into(),
            class: entity::types::ShipClass::Scout,
            tier: 1,
            variant: "Testbed".into(),
            health: 100,
            max_health: 100,
            speed: 160,
            cargo: 20,
            weapons: 1,
            sensors: 60,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        };
        let slow = {
            let mut ship = fast.clone();
            ship.speed = 0;
            ship
        };

        let mut rng = StdRng::seed_from_u64(7);
        let resolution = resolve_pvp(&mut rng, &fast, &slow);

        // 80% mitigation vs none on identical dealt-damage formulas.
        assert!(
            resolution.attacker_damage_received
                <= resolution.defender_damage_dealt / 4
        );
        assert_eq!(
            resolution.defender_damage_received,
            resolution.attacker_damage_dealt
        );
    }
}
