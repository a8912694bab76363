//! Update function for the recruit form.
//!
//! Submission is split in two messages so the component never holds a borrow
//! across an await: `Submit` takes a validated draft out of the form (which
//! flips it to submitting and disables the button) and spawns the request;
//! `Settled` hands the result back to the form and toasts the outcome.
//! A second `Submit` while a request is in flight is refused by the form
//! itself and causes no render.

use common::form::{SubmissionTransport, SubmitRejected};
use common::i18n::{localized_path, Message, Page};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RecruitFormComponent;
use super::transport::HttpTransport;
use crate::helpers::{navigate, show_toast};

pub fn update(
    component: &mut RecruitFormComponent,
    ctx: &Context<RecruitFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetText(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::ToggleSlot(slot, checked) => {
            component.form.set_interview_slot(slot, checked);
            true
        }
        Msg::Submit => match component.form.begin_submit() {
            Ok(draft) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = HttpTransport.send(draft).await;
                    link.send_message(Msg::Settled(result));
                });
                true
            }
            Err(SubmitRejected::AlreadySubmitting) => false,
            Err(SubmitRejected::Invalid(errors)) => {
                gloo_console::log!(format!("recruit form has {} invalid field(s)", errors.len()));
                true
            }
        },
        Msg::Settled(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("recruit submission failed: {err}"));
            }
            let outcome = component.form.settle(result);
            show_toast(outcome.message());
            true
        }
        Msg::Cancel => {
            navigate(&localized_path(ctx.props().locale, Page::Home));
            false
        }
    }
}
