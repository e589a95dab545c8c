use crate::odds::{Decision, Verdict};
use crate::puzzle::{Puzzle, PuzzleConfig, PuzzleGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Puzzle,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleOuts,
    NewPuzzle,
    Call,
    Fold,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub generator: PuzzleGenerator,
    pub puzzle: Puzzle,
    /// Set once the user has called or folded on the current puzzle.
    pub verdict: Option<Verdict>,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg: PuzzleConfig,
    pub answered: u32,
    pub correct: u32,
    help_open: bool,
    outs_open: bool,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PuzzleGenerator::new(PuzzleConfig::default()))
    }
}

impl AppState {
    pub fn new(mut generator: PuzzleGenerator) -> Self {
        let puzzle = generator.generate();
        let cfg = *generator.config();
        let error = Self::fallback_notice(&puzzle);
        Self {
            scene: Scene::Menu,
            generator,
            puzzle,
            verdict: None,
            menu_index: 0,
            cfg,
            answered: 0,
            correct: 0,
            help_open: false,
            outs_open: false,
            error,
        }
    }

    fn fallback_notice(puzzle: &Puzzle) -> Option<String> {
        (!puzzle.constrained).then(|| {
            format!(
                "No drawing spot found in {} deals; this one is a plain random deal.",
                puzzle.attempts
            )
        })
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn outs_open(&self) -> bool {
        self.outs_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_outs(&mut self) {
        self.outs_open = false;
    }

    fn decide(&mut self, decision: Decision) -> bool {
        if self.scene != Scene::Puzzle || self.verdict.is_some() {
            return false;
        }
        match self.puzzle.judge(decision) {
            Ok(v) => {
                self.answered += 1;
                if v.is_correct() {
                    self.correct += 1;
                }
                self.verdict = Some(v);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn new_puzzle(&mut self) {
        self.puzzle = self.generator.generate();
        self.verdict = None;
        self.outs_open = false;
        self.error = Self::fallback_notice(&self.puzzle);
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Puzzle {
                    self.outs_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleOuts => {
                if self.scene == Scene::Puzzle && self.verdict.is_some() {
                    self.help_open = false;
                    self.outs_open = !self.outs_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewPuzzle => {
                if self.scene == Scene::Puzzle {
                    self.new_puzzle();
                    return true;
                }
                false
            }
            InputAction::Call => self.decide(Decision::Call),
            InputAction::Fold => self.decide(Decision::Fold),
        }
    }
}
