use common::form::RecruitForm;
use yew::Context;

use crate::theme::{theme_from_scope, Theme};

pub struct RecruitFormComponent {
    pub form: RecruitForm,
    pub theme: Theme,
}

impl RecruitFormComponent {
    pub fn new(ctx: &Context<Self>) -> Self {
        Self {
            form: RecruitForm::new(ctx.props().locale),
            theme: theme_from_scope(ctx.link()),
        }
    }
}
