use canto_core::model::{InputEdges, Lane, QuestionBank, RoundOutcome, RoundResult};
use canto_core::runner::{HudField, RunnerEngine, SceneHost, SceneLayout, TickOutcome, VisualId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Board size in CSS pixels; the view scales nothing.
pub const BOARD_WIDTH: f64 = 800.0;
pub const BOARD_HEIGHT: f64 = 480.0;
pub const PLAYER_X: f64 = 150.0;
pub const LANE_GAP: f64 = 120.0;
const TOP_LANE_Y: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStage {
    Home,
    Playing,
    Result(RoundResult),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Confirm,
}

/// Vertical centre of a lane on the board.
#[must_use]
pub fn lane_y(lane: Lane) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = lane.index() as f64;
    TOP_LANE_Y + index * LANE_GAP
}

#[derive(Clone, Debug, PartialEq)]
struct Slide {
    from_x: f64,
    to_x: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockVm {
    pub id: VisualId,
    pub lane: Lane,
    pub label: String,
    pub x: f64,
    slide: Option<Slide>,
}

impl BlockVm {
    fn advance(&mut self, delta_ms: f64) {
        let Some(slide) = self.slide.as_mut() else {
            return;
        };
        slide.elapsed_ms += delta_ms;
        let progress = if slide.duration_ms <= 0.0 {
            1.0
        } else {
            (slide.elapsed_ms / slide.duration_ms).min(1.0)
        };
        self.x = slide.from_x + (slide.to_x - slide.from_x) * progress;
        if progress >= 1.0 {
            self.slide = None;
        }
    }
}

/// Render model the engine draws into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardVm {
    next_id: u64,
    blocks: Vec<BlockVm>,
    player_lane: Lane,
    timer: String,
    score: String,
    lives: String,
    question: String,
}

impl BoardVm {
    #[must_use]
    pub fn blocks(&self) -> &[BlockVm] {
        &self.blocks
    }

    #[must_use]
    pub fn player_lane(&self) -> Lane {
        self.player_lane
    }

    #[must_use]
    pub fn hud(&self, field: HudField) -> &str {
        match field {
            HudField::Timer => &self.timer,
            HudField::Score => &self.score,
            HudField::Lives => &self.lives,
            HudField::Question => &self.question,
        }
    }

    /// Step block slides forward by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        for block in &mut self.blocks {
            block.advance(delta_ms);
        }
    }
}

impl SceneHost for BoardVm {
    fn layout(&self) -> SceneLayout {
        SceneLayout {
            width: BOARD_WIDTH,
            player_x: PLAYER_X,
        }
    }

    fn spawn_block(&mut self, lane: Lane, label: &str, x: f64) -> VisualId {
        self.next_id += 1;
        let id = VisualId::new(self.next_id);
        self.blocks.push(BlockVm {
            id,
            lane,
            label: label.to_string(),
            x,
            slide: None,
        });
        id
    }

    fn animate_block(&mut self, id: VisualId, to_x: f64, duration_ms: f64) {
        if let Some(block) = self.blocks.iter_mut().find(|block| block.id == id) {
            block.slide = Some(Slide {
                from_x: block.x,
                to_x,
                duration_ms,
                elapsed_ms: 0.0,
            });
        }
    }

    fn destroy_block(&mut self, id: VisualId) {
        self.blocks.retain(|block| block.id != id);
    }

    fn set_hud(&mut self, field: HudField, text: &str) {
        let slot = match field {
            HudField::Timer => &mut self.timer,
            HudField::Score => &mut self.score,
            HudField::Lives => &mut self.lives,
            HudField::Question => &mut self.question,
        };
        text.clone_into(slot);
    }

    fn move_player(&mut self, lane: Lane) {
        self.player_lane = lane;
    }
}

/// Home → Playing → Result flow around one engine per round.
pub struct GameController {
    bank: QuestionBank,
    stage: SessionStage,
    engine: Option<RunnerEngine<StdRng>>,
    board: BoardVm,
    pending: InputEdges,
}

impl GameController {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            stage: SessionStage::Home,
            engine: None,
            board: BoardVm::default(),
            pending: InputEdges::none(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    #[must_use]
    pub fn board(&self) -> &BoardVm {
        &self.board
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Start a fresh round. Also used for "Play Again".
    pub fn start(&mut self) {
        self.start_with_rng(StdRng::from_os_rng());
    }

    /// Start a round with a reproducible answer order.
    pub fn start_seeded(&mut self, seed: u64) {
        self.start_with_rng(StdRng::seed_from_u64(seed));
    }

    fn start_with_rng(&mut self, rng: StdRng) {
        if self.stage == SessionStage::Playing {
            warn!("start ignored: a round is already running");
            return;
        }
        self.board = BoardVm::default();
        self.pending = InputEdges::none();
        let mut engine = RunnerEngine::new(self.bank.clone(), rng);
        engine.init(&mut self.board);
        self.engine = Some(engine);
        self.stage = SessionStage::Playing;
    }

    /// Queue a key press for the next tick. Ignored outside a round.
    pub fn press(&mut self, key: GameKey) {
        if self.stage != SessionStage::Playing {
            return;
        }
        match key {
            GameKey::Up => self.pending.up = true,
            GameKey::Down => self.pending.down = true,
            GameKey::Confirm => self.pending.confirm = true,
        }
    }

    /// Advance the running round by `delta_seconds`.
    pub fn tick(&mut self, delta_seconds: f64) -> SessionStage {
        let Some(engine) = self.engine.as_mut() else {
            return self.stage;
        };
        let input = std::mem::take(&mut self.pending);
        self.board.advance(delta_seconds * 1000.0);
        if let TickOutcome::Completed(result) = engine.tick(&mut self.board, delta_seconds, input)
        {
            self.finish(result);
        }
        self.stage
    }

    fn finish(&mut self, result: RoundResult) {
        info!(score = result.score, outcome = result.outcome.as_str(), "showing result");
        self.engine = None;
        self.pending = InputEdges::none();
        self.stage = SessionStage::Result(result);
    }

    /// Leave the round or result screen.
    pub fn home(&mut self) {
        self.engine = None;
        self.board = BoardVm::default();
        self.pending = InputEdges::none();
        self.stage = SessionStage::Home;
    }
}

/// Headline shown on the result screen.
#[must_use]
pub fn result_headline(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "Congratulations! You won!",
        RoundOutcome::Lose => "You ran out of HP!",
    }
}
