use super::main::Spotter;
use crate::spotter::core::{init, transition, Effect};
use crate::spotter::render::SpotterWindow;

impl Spotter {
    /// Starts the core loop on a background thread and hands the main thread
    /// to the window until it is closed.
    pub fn run(&self) -> Result<(), eframe::Error> {
        let looper = self.clone();
        std::thread::spawn(move || looper.run_loop());

        let window = SpotterWindow::new(
            self.model.clone(),
            self.event_sender.clone(),
            self.previews.clone(),
            self.logger.with_namespace("window"),
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 720.0])
                .with_min_inner_size([380.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(
            "Fish Species Classifier",
            options,
            Box::new(|_cc| Box::new(window)),
        )
    }

    fn run_loop(&self) {
        let initial = init();
        *self.model.lock().unwrap() = initial.0.clone();
        self.spawn_effects(initial.1);

        let mut current_model = initial.0;

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                // The window side hung up; nothing left to drive.
                Err(_) => return,
            };

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nevent:\n\t{:?}",
                current_model, event
            ));

            let (new_model, effects) = transition(current_model, event);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            self.spawn_effects(effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let effect_clone = effect.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect_clone));
        }
    }
}
