use common::api::SubmitResponse;
use common::form::TransportError;
use common::model::application::TextField;
use common::model::interview::InterviewSlot;

pub enum Msg {
    SetText(TextField, String),
    ToggleSlot(InterviewSlot, bool),
    Submit,
    /// The response (or transport failure) of the request started by `Submit`.
    Settled(Result<SubmitResponse, TransportError>),
    Cancel,
}
