//! Demo records loaded at startup for local runs.
//!
//! Records go through the regular `create` path, so on a fresh store they
//! receive the first ids of each sequence.

use spothub_app::ports::{SpotRepository, UserRepository};
use spothub_domain::error::SpotHubError;
use spothub_domain::spot::Spot;
use spothub_domain::user::User;

/// Counts of the records inserted by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeded {
    pub users: usize,
    pub spots: usize,
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            firstname: Some("Kari".to_string()),
            lastname: Some("Nordmann".to_string()),
            email: Some("kari@nordmann.example".to_string()),
            password: Some("hemmelig".to_string()),
            phone: Some("41234567".to_string()),
            is_firm: false,
        },
        User {
            firstname: Some("Oslo".to_string()),
            lastname: Some("Parkering AS".to_string()),
            email: Some("post@osloparkering.example".to_string()),
            password: Some("passord123".to_string()),
            phone: Some("22000000".to_string()),
            is_firm: true,
        },
    ]
}

fn demo_spots(owners: &[String]) -> Vec<Spot> {
    let owner = |index: usize| owners.get(index).cloned().unwrap_or_default();
    vec![
        Spot::builder()
            .owner_id(owner(0))
            .address("Karl Johans gate 1")
            .zipcode("0150")
            .hour_price("40")
            .day_price("250")
            .spots("1")
            .build(),
        Spot::builder()
            .owner_id(owner(1))
            .address("Dronningens gate 10")
            .zipcode("0150")
            .hour_price("55")
            .day_price("320")
            .spots("12")
            .build(),
        Spot::builder()
            .owner_id(owner(1))
            .address("Bryggen 3")
            .zipcode("5003")
            .hour_price("35")
            .day_price("210")
            .spots("4")
            .build(),
    ]
}

/// Insert the demo users, then demo spots owned by them.
///
/// # Errors
///
/// Returns the first storage error raised by either repository.
pub async fn seed_demo_data<S, U>(spots: &S, users: &U) -> Result<Seeded, SpotHubError>
where
    S: SpotRepository,
    U: UserRepository,
{
    let mut owners = Vec::new();
    for user in demo_users() {
        owners.push(users.create(user).await?.id.to_string());
    }

    let mut spot_count = 0;
    for spot in demo_spots(&owners) {
        spots.create(spot).await?;
        spot_count += 1;
    }

    tracing::info!(users = owners.len(), spots = spot_count, "demo data seeded");
    Ok(Seeded {
        users: owners.len(),
        spots: spot_count,
    })
}
