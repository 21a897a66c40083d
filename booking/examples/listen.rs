use abi::Config;
use sqlx::postgres::PgListener;
use tokio_stream::StreamExt;

/// Tails the `booking_update` channel so another process can refresh its
/// property list when bookings change.
#[tokio::main]
async fn main() {
    let filename =
        std::env::var("SMARTBOOKING_CONFIG").unwrap_or_else(|_| "smartbooking.yml".to_string());
    let config = Config::load(&filename).expect("failed to load configuration");

    let mut listener = PgListener::connect(&config.db.url()).await.unwrap();
    listener.listen("booking_update").await.unwrap();
    println!("listening for booking_update notifications");

    let stream = listener.into_stream();
    let stream = stream.throttle(std::time::Duration::from_secs(10));
    tokio::pin!(stream);

    while let Some(Ok(event)) = stream.next().await {
        println!("received event: {:?}", event);
    }
}
