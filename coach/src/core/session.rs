//! Session lifecycle state machine
//!
//! Tracks a single practice session from connect through analysis. All
//! mutable session state lives here; the transport and analyzer are
//! injected collaborators. Not reentrant: a second `begin` while a
//! session is underway is rejected.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::context::build_context;
use crate::error::{CoachError, CoachResult};
use crate::traits::{SessionAnalyzer, VoiceTransport};
use crate::types::{AnalysisRequest, AnalysisResult, SessionConfig, SessionState};

/// Elapsed-seconds counter driven by a one-second interval task
///
/// Advances only between `start` and `stop`; the tick task is aborted on
/// every exit from the active state so no timer outlives its session.
struct ElapsedTimer {
    seconds: Arc<AtomicU64>,
    ticker: Option<JoinHandle<()>>,
}

impl ElapsedTimer {
    fn new() -> Self {
        Self {
            seconds: Arc::new(AtomicU64::new(0)),
            ticker: None,
        }
    }

    fn start(&mut self) {
        self.stop();
        self.seconds.store(0, Ordering::Relaxed);

        let seconds = Arc::clone(&self.seconds);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            // The first tick completes immediately; elapsed starts at 0
            interval.tick().await;
            loop {
                interval.tick().await;
                seconds.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    /// Cancel the ticker, retaining the counted value
    fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    fn reset(&mut self) {
        self.stop();
        self.seconds.store(0, Ordering::Relaxed);
    }

    fn elapsed_secs(&self) -> u64 {
        self.seconds.load(Ordering::Relaxed)
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State machine for one practice session at a time
pub struct SessionController<T, A>
where
    T: VoiceTransport,
    A: SessionAnalyzer,
{
    transport: T,
    analyzer: A,
    /// Trivial-session guard: analysis is skipped when the transcript is
    /// empty and fewer seconds than this elapsed
    min_analysis_secs: u64,
    state: SessionState,
    session_id: Option<Uuid>,
    snapshot: Option<SessionConfig>,
    transcript: Vec<String>,
    timer: ElapsedTimer,
    elapsed_at_end: u64,
    last_result: Option<AnalysisResult>,
}

impl<T, A> SessionController<T, A>
where
    T: VoiceTransport,
    A: SessionAnalyzer,
{
    pub fn new(transport: T, analyzer: A, min_analysis_secs: u64) -> Self {
        Self {
            transport,
            analyzer,
            min_analysis_secs,
            state: SessionState::Idle,
            session_id: None,
            snapshot: None,
            transcript: Vec::new(),
            timer: ElapsedTimer::new(),
            elapsed_at_end: 0,
            last_result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Start a session from a config snapshot
    ///
    /// Rejected unless idle. Permission refusal and transport failures
    /// leave the controller idle.
    pub async fn begin(&mut self, config: &SessionConfig) -> CoachResult<()> {
        if self.state != SessionState::Idle {
            return Err(CoachError::SessionBusy);
        }

        self.transport.request_permission().await.map_err(|_| CoachError::PermissionDenied)?;

        let session_id = Uuid::new_v4();
        info!(%session_id, mode = %config.mode, "starting practice session");

        self.snapshot = Some(config.clone());
        self.session_id = Some(session_id);
        self.state = SessionState::Connecting;

        if let Err(e) = self.transport.open().await {
            warn!("transport failed to open: {e}");
            self.abort_to_idle();
            return Err(e);
        }
        Ok(())
    }

    /// Remote agent accepted the connection: send context, go active
    pub async fn on_remote_connected(&mut self) -> CoachResult<()> {
        if self.state != SessionState::Connecting {
            warn!(state = %self.state, "ignoring connect event outside connecting state");
            return Ok(());
        }

        let snapshot = self.snapshot.as_ref().ok_or_else(|| CoachError::Transport {
            message: "connected without a session snapshot".to_string(),
        })?;

        // Exactly one outbound context message per session
        let context = build_context(snapshot);
        if let Err(e) = self.transport.send_context(&context).await {
            warn!("failed to send agent context: {e}");
            self.abort_to_idle();
            return Err(e);
        }

        self.transcript.clear();
        self.last_result = None;
        self.elapsed_at_end = 0;
        self.timer.start();
        self.state = SessionState::Active;
        Ok(())
    }

    /// Append a live transcript fragment; arrival order is truth
    pub fn on_transcript_fragment(&mut self, text: &str) {
        if self.state != SessionState::Active {
            warn!(state = %self.state, "dropping transcript fragment outside active state");
            return;
        }
        self.transcript.push(text.to_string());
    }

    /// User ended the session
    ///
    /// While connecting this is an abort, not a graceful close.
    pub async fn end(&mut self) -> CoachResult<()> {
        match self.state {
            SessionState::Active => {
                self.timer.stop();
                self.elapsed_at_end = self.timer.elapsed_secs();
                self.state = SessionState::Ending;
                if let Err(e) = self.transport.close().await {
                    warn!("transport close failed: {e}");
                    self.abort_to_idle();
                    return Err(e);
                }
                Ok(())
            }
            SessionState::Connecting => {
                info!("session ended while connecting, aborting");
                let _ = self.transport.close().await;
                self.abort_to_idle();
                Ok(())
            }
            _ => {
                warn!(state = %self.state, "end requested outside a running session");
                Ok(())
            }
        }
    }

    /// Remote transport closed: run analysis unless the session was trivial
    ///
    /// Returns the stored result, or `None` when the guard suppressed
    /// analysis.
    pub async fn on_remote_closed(&mut self) -> CoachResult<Option<AnalysisResult>> {
        if self.state != SessionState::Ending {
            warn!(state = %self.state, "remote closed outside ending state");
            self.abort_to_idle();
            return Ok(None);
        }

        if self.transcript.is_empty() && self.elapsed_at_end < self.min_analysis_secs {
            info!(
                elapsed = self.elapsed_at_end,
                "trivial session, skipping provider analysis"
            );
            self.timer.reset();
            self.state = SessionState::Idle;
            return Ok(None);
        }

        let request = self.build_analysis_request()?;
        self.state = SessionState::Analyzing;

        let result = self.analyzer.analyze(&request).await;
        self.last_result = Some(result.clone());
        self.timer.reset();
        self.state = SessionState::Idle;
        Ok(Some(result))
    }

    /// Abnormal termination from any state; no analysis is attempted
    pub fn on_remote_error(&mut self, message: &str) {
        warn!(state = %self.state, "remote error: {message}");
        self.abort_to_idle();
    }

    fn abort_to_idle(&mut self) {
        self.timer.reset();
        self.elapsed_at_end = 0;
        self.state = SessionState::Idle;
    }

    /// Snapshot everything the orchestrator needs; no controller back-pointer
    fn build_analysis_request(&self) -> CoachResult<AnalysisRequest> {
        let snapshot = self.snapshot.as_ref().ok_or_else(|| CoachError::Transport {
            message: "session ended without a config snapshot".to_string(),
        })?;
        Ok(AnalysisRequest {
            speaker_name: snapshot.speaker(),
            mode: snapshot.mode,
            topic: snapshot.resolved_topic(),
            duration_secs: self.elapsed_at_end,
            focus_areas: snapshot.focus_areas().to_vec(),
            transcript: self.transcript.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockSessionAnalyzer, MockVoiceTransport};
    use shared::SessionMode;

    const MIN_ANALYSIS_SECS: u64 = 10;

    fn config() -> SessionConfig {
        SessionConfig::new(SessionMode::ElevatorPitch)
    }

    fn permissive_transport() -> MockVoiceTransport {
        let mut transport = MockVoiceTransport::new();
        transport.expect_request_permission().returning(|| Ok(()));
        transport.expect_open().returning(|| Ok(()));
        transport.expect_send_context().returning(|_| Ok(()));
        transport.expect_close().returning(|| Ok(()));
        transport
    }

    fn canned_analyzer(times: usize) -> MockSessionAnalyzer {
        let mut analyzer = MockSessionAnalyzer::new();
        analyzer.expect_analyze().times(times).returning(|_| AnalysisResult {
            provider: "local".to_string(),
            body: "demo feedback".to_string(),
        });
        analyzer
    }

    #[tokio::test]
    async fn test_full_session_walk_ends_idle_with_one_result() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(1), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        assert_eq!(controller.state(), SessionState::Connecting);

        controller.on_remote_connected().await.unwrap();
        assert_eq!(controller.state(), SessionState::Active);

        controller.on_transcript_fragment("hello everyone");
        controller.on_transcript_fragment("today I will");

        controller.end().await.unwrap();
        assert_eq!(controller.state(), SessionState::Ending);

        let result = controller.on_remote_closed().await.unwrap();
        assert!(result.is_some());
        assert_eq!(controller.state(), SessionState::Idle);
        assert_eq!(controller.elapsed_secs(), 0);
        assert_eq!(controller.last_result().unwrap().body, "demo feedback");
    }

    #[tokio::test]
    async fn test_trivial_session_skips_analysis() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        controller.on_remote_connected().await.unwrap();
        // No transcript, no elapsed time
        controller.end().await.unwrap();

        let result = controller.on_remote_closed().await.unwrap();
        assert!(result.is_none());
        assert_eq!(controller.state(), SessionState::Idle);
        assert!(controller.last_result().is_none());
    }

    #[tokio::test]
    async fn test_transcript_alone_satisfies_guard() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(1), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        controller.on_remote_connected().await.unwrap();
        controller.on_transcript_fragment("short but real");
        controller.end().await.unwrap();

        let result = controller.on_remote_closed().await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_second_begin_rejected_while_running() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        let second = controller.begin(&config()).await;
        assert!(matches!(second, Err(CoachError::SessionBusy)));
        assert_eq!(controller.state(), SessionState::Connecting);
    }

    #[tokio::test]
    async fn test_permission_denied_returns_to_idle() {
        let mut transport = MockVoiceTransport::new();
        transport
            .expect_request_permission()
            .returning(|| Err(CoachError::PermissionDenied));
        transport.expect_open().times(0);

        let mut controller =
            SessionController::new(transport, canned_analyzer(0), MIN_ANALYSIS_SECS);
        let outcome = controller.begin(&config()).await;
        assert!(matches!(outcome, Err(CoachError::PermissionDenied)));
        assert_eq!(controller.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_end_while_connecting_aborts_without_analysis() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        controller.end().await.unwrap();
        assert_eq!(controller.state(), SessionState::Idle);
        assert_eq!(controller.elapsed_secs(), 0);
    }

    #[tokio::test]
    async fn test_remote_error_resets_from_active() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        controller.on_remote_connected().await.unwrap();
        controller.on_transcript_fragment("partial");
        controller.on_remote_error("connection dropped");

        assert_eq!(controller.state(), SessionState::Idle);
        assert_eq!(controller.elapsed_secs(), 0);
        assert!(controller.last_result().is_none());
    }

    #[tokio::test]
    async fn test_fragments_dropped_outside_active() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.on_transcript_fragment("too early");
        assert!(controller.transcript().is_empty());

        controller.begin(&config()).await.unwrap();
        controller.on_transcript_fragment("still connecting");
        assert!(controller.transcript().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_advances_only_while_active() {
        let mut controller =
            SessionController::new(permissive_transport(), canned_analyzer(0), MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        assert_eq!(controller.elapsed_secs(), 0);

        controller.on_remote_connected().await.unwrap();
        // Let the ticker task register its interval before moving the clock
        tokio::task::yield_now().await;
        let mut previous = 0;
        for _ in 0..3 {
            time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
            let now = controller.elapsed_secs();
            assert!(now >= previous, "elapsed must be non-decreasing while active");
            previous = now;
        }
        assert_eq!(controller.elapsed_secs(), 3);

        controller.end().await.unwrap();
        // Stopped but retained through ending
        time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(controller.elapsed_secs(), 3);

        // Trivial-session guard resolves to idle with the timer cleared
        let result = controller.on_remote_closed().await.unwrap();
        assert!(result.is_none());
        assert_eq!(controller.elapsed_secs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_carried_into_analysis_request_and_reset_after() {
        let mut analyzer = MockSessionAnalyzer::new();
        analyzer
            .expect_analyze()
            .times(1)
            .withf(|request| request.duration_secs == 12)
            .returning(|_| AnalysisResult {
                provider: "local".to_string(),
                body: "demo feedback".to_string(),
            });

        let mut controller =
            SessionController::new(permissive_transport(), analyzer, MIN_ANALYSIS_SECS);

        controller.begin(&config()).await.unwrap();
        controller.on_remote_connected().await.unwrap();
        tokio::task::yield_now().await;
        for _ in 0..12 {
            time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.elapsed_secs(), 12);

        controller.end().await.unwrap();
        let result = controller.on_remote_closed().await.unwrap();
        assert!(result.is_some());
        assert_eq!(controller.elapsed_secs(), 0);
        assert_eq!(controller.state(), SessionState::Idle);
    }
}
