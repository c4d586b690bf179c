/// Dashboard commands
///
/// Each command drives the core components against the presence API and
/// returns printable output.
use crate::console::ConsoleView;
use crate::error::Result;
use presence_client::PresenceClient;
use presence_core::{
    mean_time_rows, start_end_rows, weekday_presence_rows, AvatarDisplay, SelectorController,
    SelectorState,
};
use std::fmt::Write;
use tracing::info;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Load the user selector. Fetch failures are reflected in the controller
/// state and view rather than returned.
pub async fn load_selector(client: &PresenceClient) -> SelectorController<ConsoleView> {
    let mut selector = SelectorController::new(ConsoleView::new());
    if let Ok(summary) = selector.initialize(client).await {
        info!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            "Users loaded"
        );
    }
    selector
}

/// Load the selector, then choose `user_id`
pub async fn select_user(
    client: &PresenceClient,
    user_id: i64,
) -> Result<(SelectorController<ConsoleView>, AvatarDisplay)> {
    let mut selector = load_selector(client).await;
    if let SelectorState::Failed { message } = selector.state() {
        return Err(presence_core::PresenceError::Fetch(message.clone()).into());
    }
    let display = selector.select(user_id)?;
    Ok((selector, display))
}

/// Start-end timeline for one user
pub async fn start_end(client: &PresenceClient, user_id: i64) -> Result<String> {
    let rows = start_end_rows(&client.presence_start_end(user_id).await?);

    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(
            out,
            "{:<4} {} - {}",
            row.weekday,
            row.start.format(TIME_FORMAT),
            row.end.format(TIME_FORMAT)
        );
    }
    Ok(out)
}

/// Mean time of presence per weekday for one user
pub async fn mean_time(client: &PresenceClient, user_id: i64) -> Result<String> {
    let rows = mean_time_rows(&client.mean_time_weekday(user_id).await?);

    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(out, "{:<4} {}", row.weekday, row.mean.format(TIME_FORMAT));
    }
    Ok(out)
}

/// Total presence per weekday for one user
pub async fn weekday(client: &PresenceClient, user_id: i64) -> Result<String> {
    let rows = weekday_presence_rows(&client.presence_weekday(user_id).await?);

    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(out, "{:<4} {:>6} s", row.weekday, row.seconds);
    }
    Ok(out)
}
