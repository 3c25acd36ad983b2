use mongodb::{Client, bson::doc};
use std::time::{Duration, Instant};

use crate::error::DatabaseResult;

/// Round-trip a `ping` and return the latency.
pub async fn ping(client: &Client) -> DatabaseResult<Duration> {
    let start = Instant::now();
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(start.elapsed())
}
