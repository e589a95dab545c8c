use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    MaxAttempts,
    StakeStep,
    StakeSteps,
}

const MENU_ITEMS: [MenuItem; 3] =
    [MenuItem::MaxAttempts, MenuItem::StakeStep, MenuItem::StakeSteps];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::MaxAttempts => format!("Max Deal Attempts: {}", app.cfg.max_attempts),
            MenuItem::StakeStep => format!("Stake Step: ${}", app.cfg.stake_step),
            MenuItem::StakeSteps => format!(
                "Stake Steps: {} (up to ${})",
                app.cfg.stake_max_steps,
                app.cfg.max_stake()
            ),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::MaxAttempts => {
                app.cfg.max_attempts = app.cfg.max_attempts.saturating_add(100);
            }
            MenuItem::StakeStep => {
                app.cfg.stake_step = app.cfg.stake_step.saturating_add(5);
            }
            MenuItem::StakeSteps => {
                app.cfg.stake_max_steps = app.cfg.stake_max_steps.saturating_add(10);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::MaxAttempts => {
                app.cfg.max_attempts = app.cfg.max_attempts.saturating_sub(100).max(1);
            }
            MenuItem::StakeStep => {
                app.cfg.stake_step = app.cfg.stake_step.saturating_sub(5).max(1);
            }
            MenuItem::StakeSteps => {
                app.cfg.stake_max_steps = app.cfg.stake_max_steps.saturating_sub(10).max(1);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_outs();
        match self.scene {
            Scene::Menu => self.scene = Scene::Puzzle,
            Scene::Puzzle => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_outs();
        self.menu_index = 0;
        self.cfg = *self.generator.config();
        self.scene = Scene::Menu;
    }

    /// Commit the edited config and deal a fresh puzzle with it.
    pub fn apply_menu(&mut self) {
        if let Err(e) = self.cfg.validate() {
            log::warn!("rejected puzzle config: {e}");
            self.cfg = *self.generator.config();
            return;
        }
        log::info!(
            "puzzle config: {} attempts, stakes ${}..=${}",
            self.cfg.max_attempts,
            self.cfg.stake_step,
            self.cfg.max_stake()
        );
        self.generator.set_config(self.cfg);
        self.new_puzzle();
        self.scene = Scene::Puzzle;
    }

    pub fn cancel_menu(&mut self) {
        self.cfg = *self.generator.config();
        self.scene = Scene::Puzzle;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
