use crate::engine::image_client::DecodedImage;
use crate::engine::workflow::{Action, ActionKind, Transition};

pub enum EngineCommand {
    Dispatch(Action),
    Shutdown,
}

#[derive(Debug)]
pub enum EngineResponse {
    Transitioned(Transition),

    Failed {
        action: ActionKind,
        message: String,
        retryable: bool,
    },

    ImageReady {
        destination: String,
        image: DecodedImage,
    },
}
