//! Local round state: the simulation context plus the round phase

use game_core::{
    start_round, step, Config, Events, GameRng, InputState, RoundAction, RoundPhase, Score,
};
use hecs::World;

pub struct LocalRound {
    pub world: World,
    pub input: InputState,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub phase: RoundPhase,
}

impl LocalRound {
    pub fn new(seed: u64) -> Self {
        Self {
            world: World::new(),
            input: InputState::new(),
            config: Config::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            phase: RoundPhase::new(),
        }
    }

    /// Start a round from the menu. Returns false if the phase rejects it.
    pub fn start(&mut self) -> bool {
        if !self.phase.transition(RoundAction::Start) {
            return false;
        }
        self.init_round();
        true
    }

    /// Start a fresh round from a terminal screen
    pub fn restart(&mut self) -> bool {
        if !self.phase.transition(RoundAction::Restart) {
            return false;
        }
        self.init_round();
        true
    }

    /// Back to the menu from a terminal screen
    pub fn reset(&mut self) -> bool {
        self.phase.transition(RoundAction::Reset)
    }

    /// One scheduler tick; returns whether the round is still playing so
    /// the host loop knows when to stop rescheduling.
    pub fn tick(&mut self) -> bool {
        step(
            &mut self.world,
            &self.input,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &mut self.phase,
        );
        self.phase.is_playing()
    }

    fn init_round(&mut self) {
        start_round(&mut self.world, &self.config, &mut self.score, &mut self.rng);
    }
}
