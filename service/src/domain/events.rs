use antenne_common::WebradioShow;
use serde::Serialize;

/// Events fanned out to every connected listener. Broadcast is best-effort:
/// no delivery guarantee, no per-client state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum LiveEvent {
    ShowLive(WebradioShow),
    ShowStopped,
    QuestionsUpdated,
    ViewersUpdated(i64),
}

/// Publish-only port onto the realtime channel.
pub trait LiveEvents: Send + Sync + 'static {
    fn publish(&self, event: LiveEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_their_wire_names() {
        let stopped = serde_json::to_value(LiveEvent::ShowStopped).unwrap();
        assert_eq!(stopped["event"], "showStopped");

        let viewers = serde_json::to_value(LiveEvent::ViewersUpdated(17)).unwrap();
        assert_eq!(viewers["event"], "viewersUpdated");
        assert_eq!(viewers["data"], 17);
    }
}
