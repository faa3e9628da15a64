use super::{
    audit::audit_locations,
    dto::LocationMap,
    prompt::build_prompt,
};
use crate::{
    domain::location::{
        errors::LocationError, repair::parse_locations, value_objects::LocationQuery,
        value_objects::map_center,
    },
    infrastructure::llm::traits::LanguageModel,
};
use std::{sync::Arc, time::Duration};
use tracing::{debug, info, instrument, warn};

/// Asks the model for candidate locations and turns the reply into a map model.
///
/// One call, one attempt: there is no retry and no partial result. The model
/// call is bounded by `upstream_timeout` so a stalled stream cannot hold the
/// request forever.
pub struct GenerateMapUseCase {
    model: Arc<dyn LanguageModel>,
    upstream_timeout: Duration,
}

impl GenerateMapUseCase {
    pub fn new(model: Arc<dyn LanguageModel>, upstream_timeout: Duration) -> Self {
        Self {
            model,
            upstream_timeout,
        }
    }

    #[instrument(skip(self, query), fields(area = %query.area, language = %query.language))]
    pub async fn execute(&self, query: &LocationQuery) -> Result<LocationMap, LocationError> {
        let prompt = build_prompt(query);

        let reply = match tokio::time::timeout(self.upstream_timeout, self.model.stream_text(&prompt)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(err)) => return Err(self.upstream_error(err)),
            Err(_) => {
                warn!(timeout_secs = self.upstream_timeout.as_secs(), "Model call timed out");
                return Err(LocationError::Timeout(self.upstream_timeout.as_secs()));
            }
        };
        debug!(reply_len = reply.len(), "Model reply received");

        let records = parse_locations(&reply).inspect_err(|e| {
            warn!(error = %e, reply_len = reply.len(), "Model reply could not be used");
        })?;

        let audit = audit_locations(&records);
        if audit.matches_request() {
            info!(total = audit.total, "Locations parsed");
        } else {
            warn!(
                total = audit.total,
                prime = audit.prime,
                non_prime = audit.non_prime,
                outside_radius = audit.outside_radius,
                "Reply deviates from requested location mix"
            );
        }

        let center = map_center(&records).ok_or(LocationError::NoLocations)?;
        Ok(LocationMap {
            records,
            center,
            audit,
        })
    }

    fn upstream_error(&self, err: anyhow::Error) -> LocationError {
        let timed_out = err.chain().any(|cause| {
            cause
                .downcast_ref::<reqwest::Error>()
                .is_some_and(|e| e.is_timeout())
        });
        if timed_out {
            warn!(error = %err, "Model request timed out");
            return LocationError::Timeout(self.upstream_timeout.as_secs());
        }
        warn!(error = %err, "Model request failed");
        LocationError::Upstream(format!("{:#}", err))
    }
}
