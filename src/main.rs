use chrono::NaiveTime;
use restaurant_recipe::config::RestaurantConfig;
use restaurant_recipe::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_recipe::model::{MenuItem, RestaurantCreate};
use restaurant_recipe::restaurant::Restaurant;
use restaurant_recipe::restaurant_actor::{RestaurantClient, RestaurantError};
use tracing::{error, info, Instrument};

fn demo_restaurant() -> Result<Restaurant, String> {
    let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| format!("invalid time {h}:{m}"));
    Ok(Restaurant::from_create_params(RestaurantCreate {
        name: "Amelie's cafe".to_string(),
        location: "Chennai".to_string(),
        opening_time: time(10, 30)?,
        closing_time: time(22, 0)?,
        menu: vec![
            MenuItem::new("Sweet corn soup", 119),
            MenuItem::new("Vegetable lasagne", 269),
        ],
    }))
}

/// Lists the menu and prices an order of its first two dishes.
async fn sample_order(client: &RestaurantClient) -> Result<u64, RestaurantError> {
    let menu = client.menu().await?;
    for item in &menu {
        info!(item = %item.name, price = item.price, "On the menu");
    }
    let selected: Vec<&str> = menu.iter().take(2).map(|item| item.name.as_str()).collect();
    client.order_total(selected.as_slice()).await
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let restaurant = match std::env::args().nth(1) {
        Some(path) => RestaurantConfig::from_file(&path)
            .map_err(|e| e.to_string())?
            .into_restaurant(),
        None => demo_restaurant()?,
    };

    info!("Starting restaurant system");
    let system = RestaurantSystem::new(restaurant);
    let client = &system.client;

    let details = client.details().await.map_err(|e| e.to_string())?;
    let open = client.is_open().await.map_err(|e| e.to_string())?;
    info!(
        name = %details.name,
        location = %details.location,
        opening = %details.opening_time,
        closing = %details.closing_time,
        open,
        "Restaurant status"
    );

    let span = tracing::info_span!("order_processing");
    let total = sample_order(client).instrument(span).await;

    match total {
        Ok(total) => info!(total, "Order total computed"),
        Err(e) => error!(error = %e, "Order total failed"),
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
