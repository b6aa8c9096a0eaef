use alloc::boxed::Box;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - SelectingDifficulty -> AwaitingFirstClick (new game)
/// - AwaitingFirstClick -> Playing (first click generates the board)
/// - Playing -> Won
/// - Playing -> Lost
/// - Won | Lost -> Playing (result dialog dismissed)
/// - any -> SelectingDifficulty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial state, no board chosen yet
    #[default]
    SelectingDifficulty,
    /// Blank board shown, mines are placed on the first dig
    AwaitingFirstClick,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Numeric code used by older front ends: -2 select, -1 new game, 0 playing, 1 won, 2 lost.
    pub const fn code(self) -> i8 {
        match self {
            Self::SelectingDifficulty => -2,
            Self::AwaitingFirstClick => -1,
            Self::Playing => 0,
            Self::Won => 1,
            Self::Lost => 2,
        }
    }

    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -2 => Some(Self::SelectingDifficulty),
            -1 => Some(Self::AwaitingFirstClick),
            0 => Some(Self::Playing),
            1 => Some(Self::Won),
            2 => Some(Self::Lost),
            _ => None,
        }
    }
}

/// Everything about the game in progress. Only the [`Engine`] mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    phase: Phase,
    config: GameConfig,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    preset_name: Option<String>,
}

impl GameState {
    fn new(config: GameConfig) -> Self {
        Self {
            board: Board::blank(config.size),
            phase: Phase::default(),
            config,
            started_at: None,
            ended_at: None,
            preset_name: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> Coord {
        self.config.width()
    }

    pub fn height(&self) -> Coord {
        self.config.height()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    /// Set on the first click.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Instant> {
        self.ended_at
    }

    /// Name of the preset this game counts towards, if any.
    pub fn preset_name(&self) -> Option<&str> {
        self.preset_name.as_deref()
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.board.flag_count())
    }

    /// Seconds played as seen at `now`, frozen once the game ended, 0 before the first click.
    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        match self.started_at {
            Some(started_at) => whole_seconds(started_at, self.ended_at.unwrap_or(now)),
            None => 0,
        }
    }
}

/// Read-only view handed to front ends after each call.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    pub game: &'a GameState,
    pub presets: &'a [DifficultyPreset],
}

/// The game engine: owns the game state and the preset store, and applies player actions to them.
pub struct Engine<S> {
    game: GameState,
    presets: PresetStore<S>,
    generator: Box<dyn MinefieldGenerator>,
    clock: Box<dyn Clock>,
}

impl<S: BlobStore> Engine<S> {
    /// Engine with random boards from `seed`, wall-clock timing, and presets loaded from `storage`.
    pub fn new(storage: S, seed: u64) -> Self {
        Self {
            game: GameState::new(GameConfig::default()),
            presets: PresetStore::load(storage),
            generator: Box::new(RandomMinefieldGenerator::new(seed)),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_generator(mut self, generator: impl MinefieldGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            game: &self.game,
            presets: self.presets.list(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.game
    }

    pub fn presets(&self) -> &[DifficultyPreset] {
        self.presets.list()
    }

    pub fn preset_storage(&self) -> &S {
        self.presets.storage()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.game.elapsed_secs_at(self.clock.now())
    }

    /// Starts a game on a blank board. Mines are only placed once the first tile is dug.
    pub fn new_game(&mut self, config: GameConfig, preset_name: Option<&str>) -> Result<()> {
        config.validate()?;

        self.game = GameState {
            phase: Phase::AwaitingFirstClick,
            preset_name: preset_name.map(ToString::to_string),
            ..GameState::new(config)
        };
        log::info!(
            "New game: {}x{} with {} mines, preset: {:?}",
            config.width(),
            config.height(),
            config.mines,
            preset_name
        );
        Ok(())
    }

    /// Starts a game on a saved preset, so that winning it can set a best time.
    pub fn new_game_from_preset(&mut self, name: &str) -> Result<()> {
        let preset = self.presets.get(name).ok_or(GameError::UnknownPreset)?;
        let config = preset.config()?;
        let name = preset.name.clone();
        self.new_game(config, Some(&name))
    }

    /// Places the mines around a safe first click, starts the timer, and digs at `coords`.
    pub fn init_board(&mut self, coords: Coord2) -> Result<DigOutcome> {
        if self.game.phase != Phase::AwaitingFirstClick {
            return Err(GameError::UnexpectedPhase(self.game.phase));
        }
        let coords = self.game.board.validate_coords(coords)?;

        self.game.board = self.generator.generate(self.game.config, Some(coords))?;
        self.game.started_at = Some(self.clock.now());
        self.game.phase = Phase::Playing;
        log::info!("Board generated around first click at {:?}", coords);

        self.dig_tile(coords)
    }

    pub fn dig_tile(&mut self, coords: Coord2) -> Result<DigOutcome> {
        use DigOutcome::*;

        match self.game.phase {
            Phase::AwaitingFirstClick => return self.init_board(coords),
            Phase::Playing => self.check_not_ended()?,
            Phase::Won | Phase::Lost => return Err(GameError::AlreadyEnded),
            phase @ Phase::SelectingDifficulty => return Err(GameError::UnexpectedPhase(phase)),
        }
        let coords = self.game.board.validate_coords(coords)?;

        let tile = self.game.board[coords];
        if tile.is_flagged {
            log::debug!("Flag at {:?} blocks digging", coords);
            return Ok(NoChange);
        }

        if tile.is_mine {
            let revealed = self.game.board.dig_all_mines();
            log::debug!("Hit mine at {:?}, revealed {} mines", coords, revealed);
            debug_assert!(check_loss(&self.game.board));
            self.finish(Phase::Lost);
            return Ok(HitMine);
        }

        let dug = reveal(&mut self.game.board, coords)?;
        Ok(if self.evaluate_win() {
            Won
        } else if dug > 0 {
            Revealed
        } else {
            NoChange
        })
    }

    /// Toggles the flag on an undug tile. Dug tiles cannot carry a flag and are left as they are.
    pub fn flag_tile(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        match self.game.phase {
            Phase::Playing => self.check_not_ended()?,
            Phase::Won | Phase::Lost => return Err(GameError::AlreadyEnded),
            phase => return Err(GameError::UnexpectedPhase(phase)),
        }
        let coords = self.game.board.validate_coords(coords)?;

        let tile = self.game.board[coords];
        if tile.is_dug {
            return Ok(NoChange);
        }

        self.game.board.set(coords, tile.with_flag_toggled());
        log::debug!("Flag at {:?}: {}", coords, !tile.is_flagged);
        self.evaluate_win();
        Ok(Changed)
    }

    /// Back to difficulty selection, typically from the result dialog's restart button.
    pub fn start_difficulty_select(&mut self) {
        self.game.phase = Phase::SelectingDifficulty;
    }

    /// Closes the result dialog. The finished board stays on display but takes no more moves until a new game
    /// starts.
    pub fn dismiss_dialog(&mut self) {
        if self.game.phase.is_finished() {
            self.game.phase = Phase::Playing;
        }
    }

    /// Sets the phase without any of the usual bookkeeping.
    pub fn force_phase(&mut self, phase: Phase) {
        log::debug!("Phase forced from {:?} to {:?}", self.game.phase, phase);
        self.game.phase = phase;
    }

    /// [`Engine::force_phase`] with a numeric [`Phase::code`].
    pub fn update_state(&mut self, code: i8) -> Result<()> {
        let phase = Phase::from_code(code).ok_or(GameError::UnknownPhaseCode(code))?;
        self.force_phase(phase);
        Ok(())
    }

    pub fn save_preset(
        &mut self,
        name: &str,
        width: Coord,
        height: Coord,
        mines: CellCount,
    ) -> core::result::Result<(), PresetError> {
        self.presets.save(name, width, height, mines)
    }

    pub fn delete_preset(&mut self, name: &str) -> bool {
        self.presets.delete(name)
    }

    fn evaluate_win(&mut self) -> bool {
        if self.game.ended_at.is_some() || !check_win(&self.game.board) {
            return false;
        }

        self.finish(Phase::Won);
        if let Some(name) = &self.game.preset_name {
            let seconds = self.game.elapsed_secs_at(self.clock.now());
            self.presets.record_best_time(name, seconds);
        }
        true
    }

    /// A finished game stays finished even after its dialog is dismissed.
    fn check_not_ended(&self) -> Result<()> {
        if self.game.ended_at.is_some() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, phase: Phase) {
        let now = self.clock.now();
        self.game.phase = phase;
        self.game.ended_at = Some(now);
        log::info!("Game {:?} after {}s", phase, self.game.elapsed_secs_at(now));
    }
}
