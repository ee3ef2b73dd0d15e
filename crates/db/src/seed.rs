//! Demo data for local development.
//!
//! Inserts two drivers, one car each and two recurring rides through the
//! regular repositories, but only into an empty database.

use chrono::NaiveTime;
use commute_core::recurring_ride::ScheduleType;
use sqlx::PgPool;

use crate::models::car::CreateCar;
use crate::models::recurring_ride::CreateRecurringRide;
use crate::models::user::CreateUser;
use crate::repositories::{CarRepo, RecurringRideRepo, UserRepo};

struct DemoDriver {
    name: &'static str,
    email: &'static str,
    make: &'static str,
    model: &'static str,
    color: &'static str,
    license_plate: &'static str,
    ride: DemoRide,
}

struct DemoRide {
    start_location: &'static str,
    end_location: &'static str,
    day_of_week: i16,
    hour: u32,
    minute: u32,
    seats_available: i32,
    total_fare: f64,
}

const DEMO_DRIVERS: [DemoDriver; 2] = [
    DemoDriver {
        name: "John Driver",
        email: "john.driver@example.com",
        make: "Toyota",
        model: "Prius",
        color: "Silver",
        license_plate: "7ABC123",
        ride: DemoRide {
            start_location: "Stanford University",
            end_location: "San Francisco Downtown",
            day_of_week: 1,
            hour: 8,
            minute: 0,
            seats_available: 3,
            total_fare: 25.0,
        },
    },
    DemoDriver {
        name: "Sarah Commuter",
        email: "sarah.commuter@example.com",
        make: "Honda",
        model: "Civic",
        color: "Blue",
        license_plate: "8XYZ789",
        ride: DemoRide {
            start_location: "Palo Alto",
            end_location: "Mountain View",
            day_of_week: 4,
            hour: 18,
            minute: 30,
            seats_available: 2,
            total_fare: 15.0,
        },
    },
];

/// Advisory lock key serialising concurrent seeders (ASCII "commute1").
const SEED_LOCK_KEY: i64 = 0x636f_6d6d_7574_6531;

/// Seed the demo drivers, cars and rides. Returns `false` without writing
/// anything when the `users` table already has rows.
///
/// The emptiness check and the inserts share one transaction that first
/// takes a transaction-scoped advisory lock, so two instances starting at
/// once cannot both seed.
pub async fn seed_demo_data(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    if UserRepo::count(&mut *tx).await? > 0 {
        tracing::debug!("Users present, skipping demo seed");
        return Ok(false);
    }

    for driver in &DEMO_DRIVERS {
        let user = UserRepo::create(
            &mut *tx,
            &CreateUser {
                name: Some(driver.name.to_string()),
                email: driver.email.to_string(),
                photo_url: None,
                is_driver: true,
            },
        )
        .await?;

        let car = CarRepo::create(
            &mut *tx,
            &CreateCar {
                user_id: user.id,
                make: driver.make.to_string(),
                model: driver.model.to_string(),
                color: Some(driver.color.to_string()),
                license_plate: Some(driver.license_plate.to_string()),
            },
        )
        .await?;

        let ride = &driver.ride;
        let start_time = NaiveTime::from_hms_opt(ride.hour, ride.minute, 0)
            .ok_or_else(|| sqlx::Error::Protocol("invalid demo start time".into()))?;
        RecurringRideRepo::create(
            &mut *tx,
            user.id,
            &CreateRecurringRide {
                car_id: car.id,
                start_location: ride.start_location.to_string(),
                end_location: ride.end_location.to_string(),
                day_of_week: ride.day_of_week,
                start_time,
                seats_available: ride.seats_available,
                total_fare: ride.total_fare,
                schedule_type: ScheduleType::Weekly,
            },
        )
        .await?;
    }

    tx.commit().await?;
    tracing::info!(drivers = DEMO_DRIVERS.len(), "Seeded demo recurring rides");
    Ok(true)
}
