use axum::Extension;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::domain::AppState;
use crate::domain::events::{LiveEvent, LiveEvents};
use crate::domain::repository::ShowRepository;
use crate::infrastructure::realtime::RealtimeHub;

/// WebSocket endpoint for the live feed: every connection counts as one
/// viewer and receives every broadcast event.
pub async fn live_socket<S: AppState>(
    ws: WebSocketUpgrade,
    Extension(hub): Extension<RealtimeHub>,
    State(state): State<S>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, hub, state))
}

async fn handle_socket<S: AppState>(socket: WebSocket, hub: RealtimeHub, state: S) {
    hub.viewer_joined();

    let (mut sink, mut stream) = socket.split();
    let mut feed = hub.subscribe();

    loop {
        tokio::select! {
            event = feed.recv() => {
                match event {
                    Ok(event) => {
                        let Ok(text) = serde_json::to_string(&event) else {
                            continue;
                        };
                        if sink.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    // a slow consumer skips ahead; the feed carries state
                    // changes, not history
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        handle_command(text.as_str(), &hub, &state).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    hub.viewer_left();
}

async fn handle_command<S: AppState>(command: &str, hub: &RealtimeHub, state: &S) {
    match command {
        "launchLiveStream" => match state.shows().current().await {
            Ok(Some(show)) if show.status.is_live() => {
                hub.publish(LiveEvent::ShowLive(show.without_prompter()));
            }
            Ok(_) => {}
            Err(error) => tracing::error!(?error, "current show lookup failed"),
        },
        "stopLiveStream" => hub.publish(LiveEvent::ShowStopped),
        _ => {}
    }
}
