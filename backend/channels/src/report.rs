//! Reply Composer
//!
//! Runs the fetch → extract → resolve pipeline and assembles the two
//! outbound replies. Errors flow back to the channel adapter, which is the
//! single catch point for the whole pipeline.

use issbot_core::{BotContext, IssBotError, Reply, TriggerEvent};

/// Build the report for one trigger: a text message with coordinates and
/// address, followed by a map pin at the same coordinates.
pub async fn build_report(
    ctx: &BotContext,
    event: &TriggerEvent,
) -> Result<Vec<Reply>, IssBotError> {
    let coords = ctx.position.current_position().await?;
    // Check the numeric form up front; no point in a geocoder round-trip
    // for a payload the location reply cannot use.
    let (latitude, longitude) = coords.as_floats()?;
    let address = ctx
        .geocoder
        .reverse(&coords, event.language.as_deref())
        .await?;

    let text = format!(
        "Right now ISS's coordinates are\n{}° N and {}° E. \n{}",
        coords.latitude, coords.longitude, address
    );

    Ok(vec![Reply::Text(text), Reply::Location { latitude, longitude }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use issbot_core::{Coordinates, PositionSource, ReverseGeocoder};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FixedPosition(Coordinates);

    #[async_trait]
    impl PositionSource for FixedPosition {
        async fn current_position(&self) -> Result<Coordinates, IssBotError> {
            Ok(self.0.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl PositionSource for DownSource {
        async fn current_position(&self) -> Result<Coordinates, IssBotError> {
            Err(IssBotError::SourceUnreachable(anyhow::anyhow!(
                "connection refused"
            )))
        }
    }

    struct RecordingGeocoder {
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ReverseGeocoder for RecordingGeocoder {
        async fn reverse(
            &self,
            _coords: &Coordinates,
            _language: Option<&str>,
        ) -> Result<String, IssBotError> {
            self.called.store(true, Ordering::SeqCst);
            Ok("Atlantic Ocean".to_string())
        }
    }

    struct FixedGeocoder(&'static str);

    #[async_trait]
    impl ReverseGeocoder for FixedGeocoder {
        async fn reverse(
            &self,
            _coords: &Coordinates,
            _language: Option<&str>,
        ) -> Result<String, IssBotError> {
            Ok(self.0.to_string())
        }
    }

    fn event() -> TriggerEvent {
        TriggerEvent {
            conversation_id: 4242,
            language: Some("en".into()),
        }
    }

    #[tokio::test]
    async fn report_carries_coordinates_and_address() {
        let ctx = BotContext::new(
            Arc::new(FixedPosition(Coordinates::new("10.00", "20.00"))),
            Arc::new(FixedGeocoder("Atlantic Ocean")),
        );

        let replies = build_report(&ctx, &event()).await.unwrap();
        assert_eq!(replies.len(), 2);

        let Reply::Text(text) = &replies[0] else {
            panic!("first reply must be text");
        };
        assert!(text.contains("10.00° N and 20.00° E"));
        assert!(text.contains("Atlantic Ocean"));

        assert_eq!(
            replies[1],
            Reply::Location {
                latitude: 10.0,
                longitude: 20.0
            }
        );
    }

    #[tokio::test]
    async fn non_numeric_coordinates_skip_the_geocoder() {
        let called = Arc::new(AtomicBool::new(false));
        let ctx = BotContext::new(
            Arc::new(FixedPosition(Coordinates::new("north-ish", "20.00"))),
            Arc::new(RecordingGeocoder {
                called: called.clone(),
            }),
        );

        let err = build_report(&ctx, &event()).await.unwrap_err();
        assert!(matches!(err, IssBotError::CoordsUnavailable(_)));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn source_failure_yields_no_replies() {
        let ctx = BotContext::new(
            Arc::new(DownSource),
            Arc::new(FixedGeocoder("Atlantic Ocean")),
        );

        let err = build_report(&ctx, &event()).await.unwrap_err();
        assert!(matches!(err, IssBotError::SourceUnreachable(_)));
    }
}
