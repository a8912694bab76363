use common::i18n::Locale;
use common::model::application::StoredApplication;
use yew::Context;

use crate::theme::{theme_from_scope, Theme};

pub const LOCALE: Locale = Locale::Ko;

pub struct AdminPage {
    /// Contents of the key input.
    pub key_input: String,
    /// Key the server last accepted; `Some` means the dashboard is unlocked.
    pub key: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub applications: Vec<StoredApplication>,
    pub selected: Option<StoredApplication>,
    pub theme: Theme,
}

impl AdminPage {
    pub fn new(ctx: &Context<Self>) -> Self {
        Self {
            key_input: String::new(),
            key: None,
            loading: false,
            error: None,
            applications: Vec::new(),
            selected: None,
            theme: theme_from_scope(ctx.link()),
        }
    }
}
