use std::sync::mpsc::{Receiver, Sender};

use log::{debug, info};

use crate::engine::image_client::ImageLookup;
use crate::engine::llm_client::TextGenerator;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::workflow::{Action, Transition, Workflow};

/// Runs the session workflow on its own thread so the blocking
/// HTTP calls never stall the UI.
pub struct Engine<G, I> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    workflow: Workflow<G, I>,

    /// Called after each response so the UI repaints
    waker: Option<Box<dyn Fn() + Send>>,
}

impl<G: TextGenerator, I: ImageLookup> Engine<G, I> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        workflow: Workflow<G, I>,
    ) -> Self {
        Self {
            rx,
            tx,
            workflow,
            waker: None,
        }
    }

    pub fn with_waker(mut self, waker: impl Fn() + Send + 'static) -> Self {
        self.waker = Some(Box::new(waker));
        self
    }

    fn send(&self, response: EngineResponse) {
        let _ = self.tx.send(response);
        if let Some(wake) = &self.waker {
            wake();
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Dispatch(action) => self.handle(action),
                EngineCommand::Shutdown => break,
            }
        }
        info!("Engine stopped");
    }

    fn handle(&mut self, action: Action) {
        let kind = action.kind();

        let transition = match self.workflow.dispatch(action) {
            Ok(t) => t,
            Err(e) => {
                self.send(EngineResponse::Failed {
                    action: kind,
                    message: e.to_string(),
                    retryable: e.is_retryable(),
                });
                return;
            }
        };

        let photo = match &transition {
            Transition::DestinationChosen {
                choice,
                image_url: Some(url),
                ..
            } => Some((choice.destination.clone(), url.clone())),
            _ => None,
        };

        self.send(EngineResponse::Transitioned(transition));

        if let Some((destination, url)) = photo {
            debug!("Downloading photo for {}", destination);
            if let Some(image) = self.workflow.images().download(&url) {
                self.send(EngineResponse::ImageReady { destination, image });
            }
        }
    }
}
