use common::api::{ApplicationDetail, ApplicationList};

pub enum Msg {
    SetKey(String),
    Login,
    Refresh,
    Logout,
    /// Result of a list request made with the given key.
    Listed(String, Result<ApplicationList, String>),
    Open(String),
    Opened(Result<ApplicationDetail, String>),
    CloseDetail,
}
