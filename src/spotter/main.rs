use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::prediction_api::interface::PredictionApi;
use crate::spotter::core::{init, Event, State};
use crate::spotter::preview::PreviewStore;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Spotter {
    pub model: Arc<Mutex<State>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub prediction_api: Arc<dyn PredictionApi + Send + Sync>,
    pub previews: Arc<PreviewStore>,
}

impl Spotter {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_api: Arc<dyn PredictionApi + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init();

        Self {
            model: Arc::new(Mutex::new(initial.0)),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            config,
            logger: logger.with_namespace("spotter"),
            prediction_api,
            previews: Arc::new(PreviewStore::new()),
        }
    }
}
