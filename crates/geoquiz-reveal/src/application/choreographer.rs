//! Reveal choreographer.
//!
//! Orchestrates a question round: absorbs game-state snapshots, runs the
//! reset camera sequence on every question change, and, when the host
//! triggers it, commits the reveal and plays the fly-to / publish / fit
//! sequence.
//!
//! The `RevealRound` mutex is locked only around synchronous domain calls,
//! never across an await. Each sequence carries the `RoundTicket` it was
//! started with and checks it before every camera command, so a question
//! change cancels whatever was in flight for the previous question.

use std::sync::{Arc, Mutex, PoisonError};

use geoquiz_core::camera::{CameraCommand, SurfaceFactory};
use geoquiz_core::clock::Clock;
use geoquiz_core::collaborator::{QuestionAdvancer, RevealCommitter};
use geoquiz_core::error::DomainError;
use geoquiz_core::game::GameSnapshot;
use geoquiz_core::geo::{Coordinate, compute_bounds};
use tracing::{debug, error, info, instrument, warn};

use crate::application::camera_controller::CameraController;
use crate::application::query_handlers::{self, HostView};
use crate::config::RevealConfig;
use crate::domain::aggregates::{RevealPhase, RevealRound, RoundTicket};
use crate::domain::commands;
use crate::domain::events::RevealEvent;
use crate::domain::markers::Marker;

/// Drives the reveal state machine against the camera and collaborators.
pub struct RevealChoreographer {
    round: Mutex<RevealRound>,
    camera: CameraController,
    surfaces: Arc<dyn SurfaceFactory>,
    committer: Arc<dyn RevealCommitter>,
    advancer: Arc<dyn QuestionAdvancer>,
    clock: Arc<dyn Clock>,
    config: RevealConfig,
}

impl RevealChoreographer {
    /// Creates a choreographer that has not yet observed any game state.
    #[must_use]
    pub fn new(
        config: RevealConfig,
        clock: Arc<dyn Clock>,
        surfaces: Arc<dyn SurfaceFactory>,
        committer: Arc<dyn RevealCommitter>,
        advancer: Arc<dyn QuestionAdvancer>,
    ) -> Self {
        Self {
            round: Mutex::new(RevealRound::new()),
            camera: CameraController::new(Arc::clone(&clock), config.single_point_zoom),
            surfaces,
            committer,
            advancer,
            clock,
            config,
        }
    }

    /// Absorbs a game-state snapshot.
    ///
    /// On a new question this remounts the map surface, waits for it to
    /// settle, and plays the reset camera sequence before returning. A reset
    /// that is itself overtaken by another question change stops quietly.
    #[instrument(skip(self, snapshot), fields(question_index = snapshot.question_index))]
    pub async fn observe(&self, snapshot: GameSnapshot) {
        let reset = self.with_round(|round| round.observe(snapshot, self.clock.as_ref()));
        let Some(ticket) = reset else {
            return;
        };

        match self.run_reset(ticket).await {
            Ok(()) => debug!("reset sequence finished"),
            Err(DomainError::Superseded { question_index }) => {
                info!(question_index, "reset sequence superseded");
            }
            Err(err) => warn!(error = %err, "reset sequence stopped"),
        }
    }

    /// Triggers the reveal of the active question.
    ///
    /// If the map surface of the question is still settling, the reveal
    /// waits for it to attach before committing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GateViolation` or `DomainError::InvalidTransition`
    /// if the reveal may not start, `DomainError::CommitFailure` if the commit
    /// collaborator rejects it, `DomainError::Superseded` if the question
    /// changes mid-sequence, and any camera or bounds error that failed the
    /// reveal.
    #[instrument(skip(self))]
    pub async fn trigger_reveal(&self) -> Result<(), DomainError> {
        let ticket = self.with_round(|round| round.begin_reveal(self.clock.as_ref()))?;
        info!(
            question_index = ticket.question_index,
            "reveal triggered, waiting for map surface"
        );

        // The surface of a fresh question settles before it takes commands.
        if let Err(err) = self.camera.wait_ready(ticket.mount_key).await {
            error!(error = %err, "map surface never became ready");
            self.with_round(|round| round.fail(ticket, self.clock.as_ref()))?;
            return Err(err);
        }
        self.with_round(|round| round.ensure_current(ticket))?;
        debug!("map surface ready, committing");

        if let Err(err) = self.committer.commit_reveal().await {
            let err = match err {
                DomainError::CommitFailure(_) => err,
                other => DomainError::CommitFailure(other.to_string()),
            };
            error!(error = %err, "reveal commit failed");
            self.with_round(|round| round.fail(ticket, self.clock.as_ref()))?;
            return Err(err);
        }

        match self.run_reveal(ticket).await {
            Ok(()) => {
                info!(question_index = ticket.question_index, "reveal complete");
                Ok(())
            }
            Err(err @ DomainError::Superseded { .. }) => {
                info!(error = %err, "reveal sequence superseded");
                Err(err)
            }
            Err(err) => {
                error!(error = %err, "reveal sequence failed");
                self.with_round(|round| round.fail(ticket, self.clock.as_ref()))?;
                Err(err)
            }
        }
    }

    /// Signals the advance-question collaborator once the reveal is complete.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the phase is `Complete`.
    pub fn advance_question(&self) -> Result<(), DomainError> {
        self.with_round(|round| round.request_advance(self.clock.as_ref()))?;
        info!("advancing to next question");
        self.advancer.advance();
        Ok(())
    }

    /// Current reveal phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.with_round(|round| round.phase())
    }

    /// Markers currently visible on the map.
    #[must_use]
    pub fn markers(&self) -> Vec<Marker> {
        self.with_round(|round| round.markers().to_vec())
    }

    /// The error currently shown to the host, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.with_round(|round| round.error().map(str::to_owned))
    }

    /// Read model for the host screen.
    #[must_use]
    pub fn host_view(&self) -> HostView {
        self.with_round(|round| query_handlers::host_view(round, &self.config))
    }

    /// Removes and returns the events recorded so far.
    pub fn drain_events(&self) -> Vec<RevealEvent> {
        self.with_round(RevealRound::drain_events)
    }

    async fn run_reset(&self, ticket: RoundTicket) -> Result<(), DomainError> {
        self.camera
            .mount(ticket.mount_key, self.surfaces.mount(ticket.mount_key));
        self.clock.sleep(self.config.mount_settle()).await;
        self.with_round(|round| round.ensure_current(ticket))?;
        self.camera.attach(ticket.mount_key);

        for command in [
            commands::reset_zoom_out(&self.config),
            commands::reset_overview(&self.config),
        ] {
            match self.issue(ticket, command).await {
                Err(DomainError::CameraUnavailable) => {
                    warn!(
                        command_type = command.command_type(),
                        "skipping reset camera step"
                    );
                }
                other => other?,
            }
        }
        Ok(())
    }

    async fn run_reveal(&self, ticket: RoundTicket) -> Result<(), DomainError> {
        let targets = self.with_round(|round| round.reveal_targets(ticket))?;
        debug!(ranked = targets.ranked.len(), "answers ranked");

        self.issue(ticket, commands::fly_to_truth(&self.config, targets.truth))
            .await?;

        self.with_round(|round| round.publish_markers(ticket, self.clock.as_ref()))?;

        if !targets.ranked.is_empty() {
            let points: Vec<Coordinate> = std::iter::once(targets.truth)
                .chain(targets.ranked.iter().map(|answer| answer.guess))
                .collect();
            let bounds = compute_bounds(&points)?;
            self.issue(ticket, commands::fit_all(&self.config, bounds))
                .await?;
        }

        self.with_round(|round| round.complete(ticket, self.clock.as_ref()))
    }

    async fn issue(&self, ticket: RoundTicket, command: CameraCommand) -> Result<(), DomainError> {
        self.with_round(|round| round.ensure_current(ticket))?;
        let issued = self.camera.issue(command).await?;
        self.with_round(|round| {
            round.ensure_current(ticket)?;
            round.record_camera_command(issued, self.clock.as_ref());
            Ok(())
        })
    }

    fn with_round<T>(&self, f: impl FnOnce(&mut RevealRound) -> T) -> T {
        // Domain methods leave the round consistent even if a caller panicked.
        let mut round = self.round.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use geoquiz_core::camera::{FitBoundsOptions, FlyToOptions, Padding};
    use geoquiz_core::game::{Answer, Player, Question};
    use geoquiz_core::clock::SystemClock;
    use geoquiz_core::geo::Bounds;
    use geoquiz_test_support::{
        FailingCommitter, FixedClock, FlakyCommitter, RecordingAdvancer, RecordingClock,
        RecordingCommitter, RecordingSurfaceFactory,
    };
    use std::time::Duration;
    use uuid::Uuid;

    use crate::domain::events::RevealEventKind;
    use crate::domain::markers::MarkerColor;

    const EIFFEL: Coordinate = Coordinate::new(2.2945, 48.8584);

    struct Harness {
        choreographer: Arc<RevealChoreographer>,
        surfaces: Arc<RecordingSurfaceFactory>,
        advancer: Arc<RecordingAdvancer>,
    }

    fn harness_with(committer: Arc<dyn RevealCommitter>, clock: Arc<dyn Clock>) -> Harness {
        let surfaces = Arc::new(RecordingSurfaceFactory::new());
        let advancer = Arc::new(RecordingAdvancer::new());
        let choreographer = Arc::new(RevealChoreographer::new(
            RevealConfig::default(),
            clock,
            Arc::clone(&surfaces) as Arc<dyn SurfaceFactory>,
            committer,
            Arc::clone(&advancer) as Arc<dyn QuestionAdvancer>,
        ));
        Harness {
            choreographer,
            surfaces,
            advancer,
        }
    }

    fn harness(committer: Arc<dyn RevealCommitter>) -> Harness {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        harness_with(committer, clock)
    }

    fn player(initials: &str, has_answered: bool) -> Player {
        Player {
            id: Uuid::new_v4(),
            initials: initials.to_owned(),
            game_id: Uuid::nil(),
            score: 0,
            has_answered,
            last_score: None,
        }
    }

    fn answer(player: &Player, score: u32, guess: Coordinate) -> Answer {
        Answer {
            id: Uuid::new_v4(),
            player_id: player.id,
            game_id: Uuid::nil(),
            question_id: 0,
            guess,
            distance_km: 0.0,
            score,
        }
    }

    fn question(id: u32) -> Question {
        Question {
            id,
            text: "Where is the Eiffel Tower?".to_owned(),
            location: EIFFEL,
            image: None,
            hint: None,
        }
    }

    /// Three answered players scoring 900/500/100 around Paris.
    fn scenario_a() -> GameSnapshot {
        let p1 = player("P1", true);
        let p2 = player("P2", true);
        let p3 = player("P3", true);
        let answers = vec![
            answer(&p3, 100, Coordinate::new(-0.1276, 51.5072)),
            answer(&p1, 900, Coordinate::new(2.3522, 48.8566)),
            answer(&p2, 500, Coordinate::new(4.8357, 45.7640)),
        ];
        GameSnapshot {
            question_index: 1,
            question: question(0),
            players: vec![p1, p2, p3],
            answers,
        }
    }

    fn next_question(snapshot: &GameSnapshot) -> GameSnapshot {
        GameSnapshot {
            question_index: snapshot.question_index + 1,
            question: question(snapshot.question.id + 1),
            players: snapshot
                .players
                .iter()
                .cloned()
                .map(|p| Player {
                    has_answered: false,
                    ..p
                })
                .collect(),
            answers: snapshot.answers.clone(),
        }
    }

    fn encloses(bounds: &Bounds, point: Coordinate) -> bool {
        (bounds.southwest.longitude..=bounds.northeast.longitude).contains(&point.longitude)
            && (bounds.southwest.latitude..=bounds.northeast.latitude).contains(&point.latitude)
    }

    fn reset_commands() -> Vec<CameraCommand> {
        let config = RevealConfig::default();
        vec![
            commands::reset_zoom_out(&config),
            commands::reset_overview(&config),
        ]
    }

    // --- observe tests ---

    #[tokio::test]
    async fn test_first_observe_mounts_surface_and_plays_reset() {
        let h = harness(Arc::new(RecordingCommitter::new()));

        h.choreographer.observe(scenario_a()).await;

        assert_eq!(h.surfaces.mounts(), vec![1]);
        assert_eq!(h.surfaces.command_values(), reset_commands());
        assert_eq!(h.choreographer.phase(), RevealPhase::AwaitingTrigger);
        assert!(h.choreographer.markers().is_empty());
    }

    #[tokio::test]
    async fn test_same_question_snapshot_does_not_remount() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        let snapshot = scenario_a();
        h.choreographer.observe(snapshot.clone()).await;

        h.choreographer.observe(snapshot).await;

        assert_eq!(h.surfaces.mounts(), vec![1]);
        assert_eq!(h.surfaces.commands().len(), 2);
    }

    #[tokio::test]
    async fn test_reset_waits_out_settle_delay_before_camera_steps() {
        let clock = Arc::new(RecordingClock::new(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        let h = harness_with(
            Arc::new(RecordingCommitter::new()),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );

        h.choreographer.observe(scenario_a()).await;

        assert_eq!(
            clock.sleeps(),
            vec![
                Duration::from_millis(100),
                Duration::from_millis(1000),
                Duration::from_millis(1000),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_camera_command_reaches_surface_during_settle() {
        let h = harness_with(Arc::new(RecordingCommitter::new()), Arc::new(SystemClock));
        let observe = {
            let choreographer = Arc::clone(&h.choreographer);
            tokio::spawn(async move { choreographer.observe(scenario_a()).await })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(h.surfaces.mounts(), vec![1]);
        assert!(h.surfaces.commands().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(h.surfaces.command_values(), reset_commands()[..1].to_vec());

        observe.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_triggered_during_settle_waits_for_surface() {
        let committer = Arc::new(RecordingCommitter::new());
        let h = harness_with(
            Arc::clone(&committer) as Arc<dyn RevealCommitter>,
            Arc::new(SystemClock),
        );
        let observe = {
            let choreographer = Arc::clone(&h.choreographer);
            tokio::spawn(async move { choreographer.observe(scenario_a()).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(h.choreographer.phase(), RevealPhase::AwaitingTrigger);

        let result = h.choreographer.trigger_reveal().await;
        observe.await.unwrap();

        assert_eq!(result, Ok(()));
        assert_eq!(h.choreographer.phase(), RevealPhase::Complete);
        assert!(h.choreographer.error().is_none());
        assert_eq!(committer.calls(), 1);
        assert_eq!(h.choreographer.markers().len(), 4);
        assert!(
            h.surfaces
                .command_values()
                .iter()
                .any(|c| matches!(c, CameraCommand::FitBounds { .. }))
        );
    }

    // --- Scenario A ---

    #[tokio::test]
    async fn test_reveal_ranks_publishes_and_fits_all_markers() {
        let committer = Arc::new(RecordingCommitter::new());
        let h = harness(Arc::clone(&committer) as Arc<dyn RevealCommitter>);
        let snapshot = scenario_a();
        h.choreographer.observe(snapshot.clone()).await;

        h.choreographer.trigger_reveal().await.unwrap();

        assert_eq!(committer.calls(), 1);
        assert_eq!(h.choreographer.phase(), RevealPhase::Complete);

        let markers = h.choreographer.markers();
        assert_eq!(markers.len(), 4);
        assert_eq!(markers[0].color, MarkerColor::Truth);
        let labels: Vec<&str> = markers[1..]
            .iter()
            .map(|m| m.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec!["P1 (900 pts)", "P2 (500 pts)", "P3 (100 pts)"]);

        let commands = h.surfaces.command_values();
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[2],
            CameraCommand::FlyTo(FlyToOptions {
                center: Some(EIFFEL),
                zoom: Some(5.0),
                duration: Duration::from_millis(2000),
            })
        );
        match commands[3] {
            CameraCommand::FitBounds { bounds, options } => {
                assert!(markers.iter().all(|m| encloses(&bounds, m.position)));
                assert_eq!(options.padding, Padding::uniform(50));
            }
            other => panic!("expected FitBounds, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reveal_without_answers_skips_bounds_fit() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        let mut snapshot = scenario_a();
        snapshot.answers.clear();
        h.choreographer.observe(snapshot).await;

        h.choreographer.trigger_reveal().await.unwrap();

        assert_eq!(h.choreographer.phase(), RevealPhase::Complete);
        assert_eq!(h.choreographer.markers().len(), 1);
        let commands = h.surfaces.command_values();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[2], CameraCommand::FlyTo(_)));
    }

    #[tokio::test]
    async fn test_reveal_with_coincident_answer_still_completes() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        let p1 = player("P1", true);
        let snapshot = GameSnapshot {
            question_index: 1,
            question: question(0),
            answers: vec![answer(&p1, 5000, EIFFEL)],
            players: vec![p1],
        };
        h.choreographer.observe(snapshot).await;

        h.choreographer.trigger_reveal().await.unwrap();

        assert_eq!(h.choreographer.phase(), RevealPhase::Complete);
        let last = *h.surfaces.command_values().last().unwrap();
        assert!(matches!(last, CameraCommand::FlyTo(opts) if opts.center == Some(EIFFEL)));
    }

    // --- Scenario B ---

    #[tokio::test]
    async fn test_reveal_rejected_while_players_still_answering() {
        let committer = Arc::new(RecordingCommitter::new());
        let h = harness(Arc::clone(&committer) as Arc<dyn RevealCommitter>);
        let mut snapshot = scenario_a();
        snapshot.players.truncate(2);
        snapshot.players[1].has_answered = false;
        h.choreographer.observe(snapshot).await;

        assert_eq!(h.choreographer.phase(), RevealPhase::Idle);

        let result = h.choreographer.trigger_reveal().await;

        assert_eq!(
            result,
            Err(DomainError::GateViolation {
                answered: 1,
                total: 2
            })
        );
        assert_eq!(committer.calls(), 0);
        assert_eq!(h.choreographer.phase(), RevealPhase::Idle);
        assert_eq!(h.surfaces.commands().len(), 2);
    }

    // --- Scenario C ---

    #[tokio::test]
    async fn test_commit_failure_fails_without_publishing_markers() {
        let h = harness(Arc::new(FailingCommitter));
        h.choreographer.observe(scenario_a()).await;

        let result = h.choreographer.trigger_reveal().await;

        assert!(matches!(result, Err(DomainError::CommitFailure(_))));
        assert_eq!(h.choreographer.phase(), RevealPhase::Failed);
        assert_eq!(
            h.choreographer.error().as_deref(),
            Some("Failed to reveal answers")
        );
        assert!(h.choreographer.markers().is_empty());
        assert_eq!(h.surfaces.commands().len(), 2);
    }

    #[tokio::test]
    async fn test_retry_after_commit_failure_is_accepted() {
        let committer = Arc::new(FlakyCommitter::new(1));
        let h = harness(Arc::clone(&committer) as Arc<dyn RevealCommitter>);
        h.choreographer.observe(scenario_a()).await;
        assert!(h.choreographer.trigger_reveal().await.is_err());

        h.choreographer.trigger_reveal().await.unwrap();

        assert_eq!(committer.calls(), 2);
        assert_eq!(h.choreographer.phase(), RevealPhase::Complete);
        assert!(h.choreographer.error().is_none());
        assert_eq!(h.choreographer.markers().len(), 4);
    }

    // --- Scenario D ---

    #[tokio::test]
    async fn test_question_change_after_complete_resets_everything() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        let snapshot = scenario_a();
        h.choreographer.observe(snapshot.clone()).await;
        h.choreographer.trigger_reveal().await.unwrap();

        h.choreographer.observe(next_question(&snapshot)).await;

        assert_eq!(h.choreographer.phase(), RevealPhase::Idle);
        assert!(h.choreographer.markers().is_empty());
        assert_eq!(h.surfaces.mounts(), vec![1, 2]);
        let on_new_surface: Vec<CameraCommand> = h
            .surfaces
            .commands()
            .into_iter()
            .filter(|(mount_key, _)| *mount_key == 2)
            .map(|(_, command)| command)
            .collect();
        assert_eq!(on_new_surface, reset_commands());
    }

    #[tokio::test(start_paused = true)]
    async fn test_question_change_cancels_reveal_in_flight() {
        let h = harness_with(Arc::new(RecordingCommitter::new()), Arc::new(SystemClock));
        let snapshot = scenario_a();
        h.choreographer.observe(snapshot.clone()).await;

        let reveal = {
            let choreographer = Arc::clone(&h.choreographer);
            tokio::spawn(async move { choreographer.trigger_reveal().await })
        };
        // Part-way through the 2000 ms fly to the truth coordinate.
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(h.choreographer.phase(), RevealPhase::Revealing);

        h.choreographer.observe(next_question(&snapshot)).await;
        let result = reveal.await.unwrap();

        assert_eq!(result, Err(DomainError::Superseded { question_index: 2 }));
        assert_eq!(h.choreographer.phase(), RevealPhase::Idle);
        assert!(h.choreographer.markers().is_empty());
        assert!(
            h.surfaces
                .command_values()
                .iter()
                .all(|c| !matches!(c, CameraCommand::FitBounds { .. }))
        );
    }

    // --- trigger guard tests ---

    #[tokio::test]
    async fn test_trigger_after_complete_is_rejected() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        h.choreographer.observe(scenario_a()).await;
        h.choreographer.trigger_reveal().await.unwrap();

        let result = h.choreographer.trigger_reveal().await;

        assert!(matches!(
            result,
            Err(DomainError::InvalidTransition { phase: "complete", .. })
        ));
    }

    #[tokio::test]
    async fn test_trigger_before_any_snapshot_is_rejected() {
        let h = harness(Arc::new(RecordingCommitter::new()));

        assert!(matches!(
            h.choreographer.trigger_reveal().await,
            Err(DomainError::GateViolation { total: 0, .. })
        ));
    }

    // --- advance tests ---

    #[tokio::test]
    async fn test_advance_only_after_complete() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        h.choreographer.observe(scenario_a()).await;

        assert!(h.choreographer.advance_question().is_err());
        assert_eq!(h.advancer.calls(), 0);

        h.choreographer.trigger_reveal().await.unwrap();
        h.choreographer.advance_question().unwrap();

        assert_eq!(h.advancer.calls(), 1);
    }

    // --- event journal tests ---

    #[tokio::test]
    async fn test_events_record_camera_and_markers_in_order() {
        let h = harness(Arc::new(RecordingCommitter::new()));
        h.choreographer.observe(scenario_a()).await;
        h.choreographer.drain_events();

        h.choreographer.trigger_reveal().await.unwrap();

        let types: Vec<&str> = h
            .choreographer
            .drain_events()
            .iter()
            .map(RevealEvent::event_type)
            .collect();
        assert_eq!(
            types,
            vec![
                "reveal.phase_changed",
                "reveal.camera_command_issued",
                "reveal.markers_published",
                "reveal.camera_command_issued",
                "reveal.phase_changed",
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_surfaces_error_event() {
        let h = harness(Arc::new(FailingCommitter));
        h.choreographer.observe(scenario_a()).await;
        h.choreographer.drain_events();

        let _ = h.choreographer.trigger_reveal().await;

        let surfaced = h
            .choreographer
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e.kind, RevealEventKind::ErrorSurfaced(_)))
            .count();
        assert_eq!(surfaced, 1);
    }

    #[test]
    fn test_fit_options_default_padding_is_uniform() {
        let config = RevealConfig::default();
        let bounds = Bounds {
            southwest: Coordinate::new(0.0, 0.0),
            northeast: Coordinate::new(1.0, 1.0),
        };

        assert_eq!(
            commands::fit_all(&config, bounds),
            CameraCommand::FitBounds {
                bounds,
                options: FitBoundsOptions {
                    padding: Padding::uniform(50),
                    duration: Duration::from_millis(2000),
                },
            }
        );
    }
}
