//! Backend Status Component
//!
//! Polls the API health endpoint on a fixed interval and shows whether the
//! backend is reachable and has an OpenAI key configured.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::{self, HealthResponse};

/// Probe cadence in milliseconds
const PROBE_INTERVAL_MS: u32 = 10_000;

/// Backend connection status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Before the first probe resolves
    Checking,
    /// Most recent probe succeeded
    Connected,
    /// Most recent probe failed
    Disconnected,
    /// Nothing produces this variant today; probe failures all collapse
    /// into `Disconnected`
    #[allow(dead_code)]
    Error,
}

/// Result of a single health probe
type ProbeOutcome = Result<HealthResponse, String>;

/// Next (status, openai_configured) pair after a probe resolves.
///
/// Every failure mode (network error, non-success status, parse error)
/// arrives here as `Err` and maps to `Disconnected` with the configured
/// flag cleared.
fn apply_probe(outcome: &ProbeOutcome) -> (ConnectionStatus, bool) {
    match outcome {
        Ok(health) => (ConnectionStatus::Connected, health.openai_configured),
        Err(_) => (ConnectionStatus::Disconnected, false),
    }
}

/// Backend status indicator
#[component]
pub fn BackendStatus(
    /// Base URL of the backend API
    #[prop(into)]
    api_base: String,
) -> impl IntoView {
    let (status, set_status) = create_signal(ConnectionStatus::Checking);
    let (openai_configured, set_openai_configured) = create_signal(false);

    let probe = move |api_base: String| {
        spawn_local(async move {
            let outcome = api::check_health(&api_base).await;
            let (next_status, configured) = apply_probe(&outcome);

            // try_set: a probe can resolve after this component was torn
            // down, in which case the result is discarded
            let _ = set_status.try_set(next_status);
            let _ = set_openai_configured.try_set(configured);
        });
    };

    // Check immediately
    probe(api_base.clone());

    // Check every 10 seconds. Probes are not serialized against the timer;
    // overlapping results overwrite state in completion order.
    let interval = Interval::new(PROBE_INTERVAL_MS, move || probe(api_base.clone()));

    // Dropping the interval cancels it
    on_cleanup(move || drop(interval));

    view! {
        {move || {
            let status = status.get();
            let configured = openai_configured.get();

            if status == ConnectionStatus::Checking {
                view! {
                    <div class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400">
                        <span class="w-2 h-2 bg-yellow-500 rounded-full animate-pulse" />
                        <span>"Checking backend..."</span>
                    </div>
                }.into_view()
            } else if status == ConnectionStatus::Disconnected {
                view! {
                    <div class="flex items-center gap-2 text-sm text-red-600 dark:text-red-400">
                        <span class="w-2 h-2 bg-red-500 rounded-full" />
                        <span>"Backend disconnected"</span>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="flex items-center gap-2 text-sm">
                        <span class="w-2 h-2 bg-green-500 rounded-full" />
                        <span class="text-green-600 dark:text-green-400">"Backend connected"</span>
                        {(!configured).then(|| view! {
                            <span class="text-yellow-600 dark:text-yellow-400 text-xs">
                                "(OpenAI key not configured)"
                            </span>
                        })}
                    </div>
                }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_probe(openai_configured: bool) -> ProbeOutcome {
        Ok(HealthResponse {
            status: "ok".to_string(),
            openai_configured,
            ..Default::default()
        })
    }

    fn failed_probe() -> ProbeOutcome {
        Err("Network error: connection refused".to_string())
    }

    /// Fold a sequence of probe results in completion order
    fn resolve_all(outcomes: &[ProbeOutcome]) -> (ConnectionStatus, bool) {
        outcomes
            .iter()
            .fold((ConnectionStatus::Checking, false), |_, outcome| {
                apply_probe(outcome)
            })
    }

    #[test]
    fn test_success_with_key() {
        assert_eq!(
            apply_probe(&ok_probe(true)),
            (ConnectionStatus::Connected, true)
        );
    }

    #[test]
    fn test_success_without_key() {
        assert_eq!(
            apply_probe(&ok_probe(false)),
            (ConnectionStatus::Connected, false)
        );
    }

    #[test]
    fn test_failure_maps_to_disconnected() {
        assert_eq!(
            apply_probe(&failed_probe()),
            (ConnectionStatus::Disconnected, false)
        );
    }

    #[test]
    fn test_failure_resets_configured_flag() {
        let (status, configured) = resolve_all(&[ok_probe(true), failed_probe()]);

        assert_eq!(status, ConnectionStatus::Disconnected);
        assert!(!configured);
    }

    #[test]
    fn test_recovery_after_failure() {
        let (status, configured) = resolve_all(&[failed_probe(), ok_probe(true)]);

        assert_eq!(status, ConnectionStatus::Connected);
        assert!(configured);
    }

    #[test]
    fn test_last_resolved_probe_wins() {
        // Overlapping probes apply in completion order, so the final
        // resolution determines the displayed state regardless of how the
        // probes were dispatched.
        let (status, _) = resolve_all(&[
            ok_probe(true),
            ok_probe(false),
            failed_probe(),
            ok_probe(false),
        ]);

        assert_eq!(status, ConnectionStatus::Connected);
    }
}
