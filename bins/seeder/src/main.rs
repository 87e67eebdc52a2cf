//! Database seeder for Worklog development and testing.
//!
//! Seeds a demo user and the national holiday table for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;
use worklog_core::auth::hash_password;
use worklog_db::entities::users;
use worklog_db::repositories::HolidayRepository;

/// Demo user ID (consistent for all seeds)
const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo user credentials for local development
const DEMO_EMAIL: &str = "demo@worklog.dev";
const DEMO_PASSWORD: &str = "demo-password";

/// Fixed-date national holidays seeded for this year.
const HOLIDAYS_2026: &[(u32, u32, &str)] = &[
    (1, 1, "New Year's Day"),
    (4, 21, "Tiradentes Day"),
    (5, 1, "Labour Day"),
    (9, 7, "Independence Day"),
    (10, 12, "Our Lady of Aparecida"),
    (11, 2, "All Souls' Day"),
    (11, 15, "Republic Proclamation Day"),
    (12, 25, "Christmas Day"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = worklog_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo user...");
    seed_demo_user(&db).await;

    println!("Seeding holiday table...");
    seed_holidays(&db).await;

    println!("Seeding complete!");
}

fn demo_user_id() -> Uuid {
    Uuid::parse_str(DEMO_USER_ID).unwrap()
}

async fn seed_demo_user(db: &DatabaseConnection) {
    use sea_orm::EntityTrait;

    if users::Entity::find_by_id(demo_user_id())
        .one(db)
        .await
        .expect("Failed to query users")
        .is_some()
    {
        println!("  demo user already present, skipping");
        return;
    }

    let password_hash = hash_password(DEMO_PASSWORD).expect("Failed to hash password");

    users::ActiveModel {
        id: Set(demo_user_id()),
        email: Set(DEMO_EMAIL.to_string()),
        password_hash: Set(password_hash),
        display_name: Set(Some("Demo User".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert demo user");

    println!("  {DEMO_EMAIL} / {DEMO_PASSWORD}");
}

async fn seed_holidays(db: &DatabaseConnection) {
    let repo = HolidayRepository::new(db.clone());

    for (month, day, name) in HOLIDAYS_2026 {
        let date = NaiveDate::from_ymd_opt(2026, *month, *day).expect("valid holiday date");
        repo.upsert(date, name).await.expect("Failed to seed holiday");
    }

    println!("  {} holidays", HOLIDAYS_2026.len());
}
