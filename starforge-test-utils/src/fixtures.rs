//! Row factories for tests that need persisted state without going
//! through the full service flows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use entity::types::{GuildKind, Rarity, ResourceKind, ShipClass, UserStats};

/// Creates a user row with registration defaults (1000 credits, 25 nexium).
pub async fn user<C: ConnectionTrait>(
    db: &C,
    discord_id: &str,
    username: &str,
) -> Result<entity::user::Model, DbErr> {
    entity::user::ActiveModel {
        discord_id: ActiveValue::Set(discord_id.to_string()),
        username: ActiveValue::Set(username.to_string()),
        level: ActiveValue::Set(1),
        experience: ActiveValue::Set(0),
        credits: ActiveValue::Set(1000),
        nexium: ActiveValue::Set(25),
        stats: ActiveValue::Set(UserStats::default()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an active Tier-1 scout for the given user.
pub async fn active_scout<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> Result<entity::ship::Model, DbErr> {
    ship(db, user_id, ShipClass::Scout, true).await
}

/// Creates a Tier-1 ship row with flat placeholder stats.
pub async fn ship<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    class: ShipClass,
    is_active: bool,
) -> Result<entity::ship::Model, DbErr> {
    entity::ship::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set("Test Hull".to_string()),
        class: ActiveValue::Set(class),
        tier: ActiveValue::Set(1),
        variant: ActiveValue::Set("Testbed".to_string()),
        health: ActiveValue::Set(100),
        max_health: ActiveValue::Set(100),
        speed: ActiveValue::Set(80),
        cargo: ActiveValue::Set(20),
        weapons: ActiveValue::Set(1),
        sensors: ActiveValue::Set(60),
        is_active: ActiveValue::Set(is_active),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn resource<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    name: &str,
    kind: ResourceKind,
    quantity: i32,
) -> Result<entity::resource::Model, DbErr> {
    entity::resource::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(name.to_string()),
        kind: ActiveValue::Set(kind),
        quantity: ActiveValue::Set(quantity),
        rarity: ActiveValue::Set(Rarity::Common),
        value: ActiveValue::Set(5),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn guild<C: ConnectionTrait>(
    db: &C,
    name: &str,
    kind: GuildKind,
    max_members: i32,
) -> Result<entity::guild::Model, DbErr> {
    entity::guild::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        kind: ActiveValue::Set(kind),
        level: ActiveValue::Set(1),
        experience: ActiveValue::Set(0),
        member_count: ActiveValue::Set(1),
        max_members: ActiveValue::Set(max_members),
        leader_id: ActiveValue::Set(format!("npc_{}_leader", name.to_lowercase())),
        description: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
