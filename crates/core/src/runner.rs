//! Tick-driven state machine for one round of the lane-running quiz.
//!
//! The engine owns the round state and decides what happens each frame; it
//! never renders. Everything visible goes through a [`SceneHost`], so the same
//! engine runs under the desktop view and under a recording host in tests.

use rand::Rng;
use rand::seq::{SliceRandom, index};
use tracing::{debug, info};

use crate::model::{
    InputEdges, Lane, Question, QuestionBank, RoundOutcome, RoundResult, RoundState,
};

/// Distractors drawn from each question's pool per presentation.
pub const DISTRACTORS_PER_QUESTION: usize = 2;

/// How far past the right edge answer blocks start their slide.
pub const OFFSCREEN_MARGIN: f64 = 200.0;

/// Handle to an answer block owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(u64);

impl VisualId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Horizontal geometry the engine needs to plan block animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub width: f64,
    pub player_x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HudField {
    Timer,
    Score,
    Lives,
    Question,
}

/// Rendering capabilities the engine drives.
pub trait SceneHost {
    fn layout(&self) -> SceneLayout;

    /// Create an answer block in `lane` at horizontal position `x`.
    fn spawn_block(&mut self, lane: Lane, label: &str, x: f64) -> VisualId;

    /// Slide a block linearly to `to_x` over `duration_ms`.
    fn animate_block(&mut self, id: VisualId, to_x: f64, duration_ms: f64);

    fn destroy_block(&mut self, id: VisualId);

    fn set_hud(&mut self, field: HudField, text: &str);

    fn move_player(&mut self, lane: Lane);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// `init` has not been called yet.
    Idle,
    Running,
    /// The round ended during this tick.
    Completed(RoundResult),
    /// The round had already ended; nothing happened.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished(RoundResult),
}

type CompletionCallback = Box<dyn FnMut(RoundResult)>;

pub struct RunnerEngine<R: Rng> {
    bank: QuestionBank,
    rng: R,
    state: RoundState,
    visuals: Vec<VisualId>,
    phase: Phase,
    on_complete: Option<CompletionCallback>,
}

impl<R: Rng> RunnerEngine<R> {
    #[must_use]
    pub fn new(bank: QuestionBank, rng: R) -> Self {
        Self {
            bank,
            rng,
            state: RoundState::new(),
            visuals: Vec::new(),
            phase: Phase::Idle,
            on_complete: None,
        }
    }

    /// Register the callback invoked once when the round ends.
    pub fn on_complete(&mut self, callback: impl FnMut(RoundResult) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Reset the round and present the first question.
    pub fn init(&mut self, host: &mut impl SceneHost) {
        self.clear_visuals(host);
        self.state = RoundState::new();
        self.phase = Phase::Running;
        host.move_player(self.state.current_lane);
        debug!(questions = self.bank.len(), "round started");
        self.present_question(host);
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Question currently on screen, if the round is running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Running => self.bank.get(self.state.question_index),
            Phase::Idle | Phase::Finished(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            Phase::Finished(result) => Some(result),
            Phase::Idle | Phase::Running => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Advance the round by one frame.
    ///
    /// A confirm edge resolves the question and skips the countdown for this
    /// frame, so a confirm and a timeout never both count.
    pub fn tick(
        &mut self,
        host: &mut impl SceneHost,
        delta_seconds: f64,
        input: InputEdges,
    ) -> TickOutcome {
        match self.phase {
            Phase::Idle => return TickOutcome::Idle,
            Phase::Finished(_) => return TickOutcome::Finished,
            Phase::Running => {}
        }

        if input.up {
            self.state.current_lane = self.state.current_lane.up();
            host.move_player(self.state.current_lane);
        }
        if input.down {
            self.state.current_lane = self.state.current_lane.down();
            host.move_player(self.state.current_lane);
        }

        self.render_hud(host);

        if input.confirm {
            let correct = self.chose_correctly();
            if correct {
                self.state.score += 1;
            } else {
                self.state.lives = self.state.lives.saturating_sub(1);
            }
            debug!(
                question = self.state.question_index,
                correct,
                lane = self.state.current_lane.index(),
                "answer confirmed"
            );
            return self.resolve(host);
        }

        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        self.state.time_remaining -= delta;
        if self.state.time_remaining <= 0.0 {
            self.state.lives = self.state.lives.saturating_sub(1);
            debug!(question = self.state.question_index, "question timed out");
            return self.resolve(host);
        }

        TickOutcome::Running
    }

    fn chose_correctly(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        self.state.chosen_answer() == Some(question.correct_answer())
    }

    fn resolve(&mut self, host: &mut impl SceneHost) -> TickOutcome {
        self.state.question_index += 1;
        self.present_question(host);
        match self.phase {
            Phase::Finished(result) => TickOutcome::Completed(result),
            Phase::Idle | Phase::Running => TickOutcome::Running,
        }
    }

    fn present_question(&mut self, host: &mut impl SceneHost) {
        self.clear_visuals(host);

        if self.state.lives == 0 {
            self.finish(host);
            return;
        }
        let Some(question) = self.bank.get(self.state.question_index) else {
            self.finish(host);
            return;
        };

        let pool = question.distractors();
        let picks = index::sample(&mut self.rng, pool.len(), DISTRACTORS_PER_QUESTION);
        let mut answers = Vec::with_capacity(DISTRACTORS_PER_QUESTION + 1);
        answers.push(question.correct_answer().to_string());
        answers.extend(picks.iter().map(|i| pool[i].clone()));
        answers.shuffle(&mut self.rng);

        host.set_hud(HudField::Question, question.prompt());
        debug!(
            question = self.state.question_index,
            prompt = question.prompt(),
            "presenting question"
        );

        self.state.active_answers = answers;
        self.state.time_remaining = RoundState::SECONDS_PER_QUESTION;

        let layout = host.layout();
        let start_x = layout.width + OFFSCREEN_MARGIN;
        let duration_ms = self.state.time_remaining * 1000.0;
        for (lane, label) in Lane::all().zip(self.state.active_answers.iter()) {
            let id = host.spawn_block(lane, label, start_x);
            host.animate_block(id, layout.player_x, duration_ms);
            self.visuals.push(id);
        }

        self.render_hud(host);
    }

    fn finish(&mut self, host: &mut impl SceneHost) {
        let outcome = if self.state.lives == 0 {
            RoundOutcome::Lose
        } else {
            RoundOutcome::Win
        };
        let result = RoundResult {
            score: self.state.score,
            lives: self.state.lives,
            outcome,
        };
        self.phase = Phase::Finished(result);
        self.state.active_answers.clear();
        self.render_hud(host);
        info!(
            score = result.score,
            lives = result.lives,
            outcome = outcome.as_str(),
            "round complete"
        );

        if let Some(callback) = self.on_complete.as_mut() {
            callback(result);
        }
    }

    fn render_hud(&self, host: &mut impl SceneHost) {
        host.set_hud(
            HudField::Timer,
            &format!("Time: {}", self.state.countdown_secs()),
        );
        host.set_hud(HudField::Score, &format!("Score: {}", self.state.score));
        host.set_hud(HudField::Lives, &format!("Lives: {}", self.state.lives));
    }

    fn clear_visuals(&mut self, host: &mut impl SceneHost) {
        for id in self.visuals.drain(..) {
            host.destroy_block(id);
        }
    }
}
