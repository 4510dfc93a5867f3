use glam::Vec2;
use hecs::World;
use tracing::{debug, info, trace};

use crate::systems::reset_after_goal;
use crate::{
    spawn_match, step, Action, Audio, Ball, BallState, Body, Config, Display, Events, GameError,
    GameRng, InputQueue, Label, MatchAction, MatchEntities, Paddle, Score, Screen, ScreenFsm,
    Side, Sound, Table, Time, TransitionResult,
};

/// Match controller: owns the world, the score and the active screen, and
/// drives the audio and display collaborators
pub struct GameState {
    pub world: World,
    pub time: Time,
    pub table: Table,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    fsm: ScreenFsm,
    active: bool, // A screen has been activated at least once
    entities: Option<MatchEntities>,
    summary: Option<String>,
    confirm_pending: bool,
    audio: Box<dyn Audio>,
    display: Box<dyn Display>,
}

impl GameState {
    pub fn new(
        config: Config,
        seed: u64,
        audio: Box<dyn Audio>,
        display: Box<dyn Display>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: Time::default(),
            table: Table::from_config(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: ScreenFsm::new(),
            active: false,
            entities: None,
            summary: None,
            confirm_pending: false,
            audio,
            display,
        })
    }

    /// Bring up the start screen
    pub fn start(&mut self) {
        self.go_to_state(Screen::Start);
    }

    pub fn screen(&self) -> Screen {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// End-of-match summary, e.g. "Left player won 3-1."
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn entities(&self) -> Option<MatchEntities> {
        self.entities
    }

    pub fn ball_state(&self) -> Option<BallState> {
        let entities = self.entities?;
        let ball = self.world.get::<&Ball>(entities.ball).ok()?;
        Some(ball.state)
    }

    pub fn ball_position(&self) -> Option<Vec2> {
        let entities = self.entities?;
        let body = self.world.get::<&Body>(entities.ball).ok()?;
        Some(body.center)
    }

    pub fn ball_velocity(&self) -> Option<Vec2> {
        let entities = self.entities?;
        let ball = self.world.get::<&Ball>(entities.ball).ok()?;
        Some(ball.vel)
    }

    pub fn paddle_z(&self, side: Side) -> Option<f32> {
        let entities = self.entities?;
        let body = self.world.get::<&Body>(entities.paddle(side)).ok()?;
        Some(body.center.y)
    }

    pub fn paddle_half_depth(&self, side: Side) -> Option<f32> {
        let entities = self.entities?;
        let paddle = self.world.get::<&Paddle>(entities.paddle(side)).ok()?;
        Some(self.config.paddle_half_depth(paddle.size_index))
    }

    /// Key edge from the input collaborator. Only records intent; the next
    /// `tick` acts on it.
    pub fn handle_key(&mut self, code: &str, pressed: bool) {
        match self.config.bindings.resolve(code) {
            Some(Action::Confirm) => {
                if pressed {
                    self.confirm_pending = true;
                }
            }
            Some(action) => {
                if self.fsm.is_playing() {
                    self.input_queue.push(action, pressed);
                }
            }
            None => trace!(code, "unbound key"),
        }
    }

    /// Menu button press
    pub fn confirm(&mut self) {
        self.confirm_pending = true;
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32) {
        if std::mem::take(&mut self.confirm_pending) {
            let result = self.fsm.transition(MatchAction::Confirm);
            if result.success {
                self.switch_screen(result);
            }
        }

        if !self.fsm.is_playing() {
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.table,
            &self.config,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );

        if self.events.served || self.events.wall_bounces > 0 {
            trace!(
                served = self.events.served,
                wall_bounces = self.events.wall_bounces,
                "frame events"
            );
        }
        for _ in 0..self.events.paddle_hits.len() {
            self.audio.play(Sound::PaddleHit);
        }
        if let Some(scorer) = self.events.goal {
            self.audio.play(Sound::Goal);
            self.goal_scored(scorer);
        }
    }

    /// `side` scored: reset the table with the ball parked on the conceding
    /// side, bump the score and end the match at the winning score
    pub fn goal_scored(&mut self, side: Side) {
        if !self.fsm.is_playing() {
            debug!(?side, "goal outside of play ignored");
            return;
        }

        reset_after_goal(&mut self.world, &self.table, &self.config, side.opposite());

        self.score.increment(side);
        let points = self.score.get(side).to_string();
        self.display.set_label(Label::score(side), &points);
        info!(
            scorer = side.name(),
            left = self.score.left,
            right = self.score.right,
            "goal"
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            let summary = format!(
                "{} player won {}-{}.",
                winner.name(),
                self.score.left,
                self.score.right
            );
            info!(%summary, "match over");
            self.summary = Some(summary);

            let result = self.fsm.transition(MatchAction::GameOver);
            if result.success {
                self.switch_screen(result);
            }
        }
    }

    /// Tear down the active screen and activate `screen`
    pub fn go_to_state(&mut self, screen: Screen) {
        let from_state = self.fsm.state();
        self.fsm.enter(screen);
        self.change_screen(from_state, screen);
    }

    fn switch_screen(&mut self, result: TransitionResult) {
        debug!(action = ?result.action, "screen transition");
        self.change_screen(result.from_state, result.to_state);
    }

    fn change_screen(&mut self, from: Screen, to: Screen) {
        if self.active {
            self.deactivate(from);
        }
        self.active = true;
        self.activate(to);
        info!(?from, ?to, "screen changed");
    }

    fn deactivate(&mut self, screen: Screen) {
        match screen {
            Screen::Start => self.audio.stop(Sound::MenuMusic),
            Screen::Play => {
                self.world.clear();
                self.entities = None;
                self.input_queue.clear();
                self.events.clear();
            }
            Screen::End => {}
        }
    }

    fn activate(&mut self, screen: Screen) {
        match screen {
            Screen::Start => {
                self.display.set_label(Label::MenuButton, "Play");
                self.display.show_screen(Screen::Start);
                self.audio.play(Sound::MenuMusic);
            }
            Screen::Play => {
                self.score.reset();
                self.summary = None;
                self.time = Time::default();
                self.input_queue.clear();
                self.events.clear();
                self.world.clear();
                self.entities = Some(spawn_match(&mut self.world, &self.table, &self.config));

                for side in Side::BOTH {
                    self.display.set_label(Label::score(side), "0");
                    let text = self.config.bindings.instructions(side);
                    self.display.set_label(Label::instructions(side), &text);
                }
                self.display.show_screen(Screen::Play);
                self.audio.play(Sound::MatchStart);
            }
            Screen::End => {
                let text = format!("{} Go to main menu", self.summary.as_deref().unwrap_or(""));
                self.display.set_label(Label::EndSummary, text.trim_start());
                self.display.show_screen(Screen::End);
            }
        }
    }
}
