use common::i18n::Message;
use common::model::application::StoredApplication;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AdminPage, LOCALE};
use crate::components::controls::{Button, ButtonVariant, Card, TextField};
use crate::components::section::{Section, SectionHeader};
use crate::components::top_sheet::TopSheet;
use crate::helpers::format_kst;

pub fn view(component: &AdminPage, ctx: &Context<AdminPage>) -> Html {
    html! {
        <Section id="admin">
            if component.key.is_some() {
                { dashboard(component, ctx) }
            } else {
                { login(component, ctx) }
            }
        </Section>
    }
}

fn login(component: &AdminPage, ctx: &Context<AdminPage>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Login
    });

    html! {
        <Card title={Message::AdminTitle.text(LOCALE)}>
            <form {onsubmit}>
                <TextField
                    id="admin-key"
                    label={Message::AdminKeyLabel.text(LOCALE)}
                    value={component.key_input.clone()}
                    error={component.error.clone().map(AttrValue::from)}
                    oninput={link.callback(Msg::SetKey)}
                />
                <Button kind="submit" disabled={component.loading}>
                    { if component.loading { Message::AdminLoading.text(LOCALE) } else { Message::AdminLogin.text(LOCALE) } }
                </Button>
            </form>
        </Card>
    }
}

fn dashboard(component: &AdminPage, ctx: &Context<AdminPage>) -> Html {
    let link = ctx.link();
    let theme = &component.theme;
    let summary = Message::AdminSummary
        .text(LOCALE)
        .replace("{count}", &component.applications.len().to_string());
    let row_style = format!(
        "display: grid; grid-template-columns: 1fr 1fr 1.5fr 1.5fr; gap: {}; padding: {}; \
         border-bottom: 1px solid {}; cursor: pointer; color: {};",
        theme.spacing.sm, theme.spacing.sm, theme.colors.border, theme.colors.text_secondary
    );

    html! {
        <>
            <SectionHeader title={Message::AdminDashboardTitle.text(LOCALE)} subtitle={summary} />
            <div style={format!("display: flex; gap: {}; margin-bottom: {};", theme.spacing.sm, theme.spacing.md)}>
                <Button disabled={component.loading} onclick={link.callback(|_: MouseEvent| Msg::Refresh)}>
                    { if component.loading { Message::AdminLoading.text(LOCALE) } else { Message::AdminRefresh.text(LOCALE) } }
                </Button>
                <Button variant={ButtonVariant::Secondary} onclick={link.callback(|_: MouseEvent| Msg::Logout)}>
                    { Message::AdminLogout.text(LOCALE) }
                </Button>
            </div>
            if let Some(error) = &component.error {
                <p role="alert" style={format!("color: {};", theme.colors.error)}>{ error.clone() }</p>
            }
            if component.applications.is_empty() {
                <p style={format!("color: {};", theme.colors.text_tertiary)}>{ Message::AdminEmpty.text(LOCALE) }</p>
            } else {
                <div role="table">
                    { for component.applications.iter().map(|application| {
                        let id = application.id.clone();
                        html! {
                            <div role="row" style={row_style.clone()} onclick={link.callback(move |_: MouseEvent| Msg::Open(id.clone()))}>
                                <span>{ application.name.clone() }</span>
                                <span>{ application.student_id.clone() }</span>
                                <span>{ application.contact.clone() }</span>
                                <span>{ format_kst(&application.submitted_at) }</span>
                            </div>
                        }
                    }) }
                </div>
            }
            <TopSheet open={component.selected.is_some()} on_close={link.callback(|_| Msg::CloseDetail)}>
                { component.selected.as_ref().map(|application| detail(component, ctx, application)).unwrap_or_default() }
            </TopSheet>
        </>
    }
}

fn detail(component: &AdminPage, ctx: &Context<AdminPage>, application: &StoredApplication) -> Html {
    let theme = &component.theme;
    let label_style = format!("margin: {} 0 {}; color: {}; font-size: 0.85rem;", theme.spacing.md, theme.spacing.xs, theme.colors.text_tertiary);
    let body_style = format!("margin: 0; white-space: pre-wrap; color: {};", theme.colors.text_primary);
    let block = |label: Message, value: &str| {
        html! {
            <>
                <h4 style={label_style.clone()}>{ label.text(LOCALE) }</h4>
                <p style={body_style.clone()}>{ value.to_string() }</p>
            </>
        }
    };
    let slots = application
        .interview_times
        .iter()
        .map(|slot| slot.label())
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div style={format!("max-width: {}; margin: 0 auto;", theme.max_width)}>
            <h3 style={format!("margin: 0; color: {};", theme.colors.text_primary)}>
                { format!("{} ({})", application.name, application.student_id) }
            </h3>
            { block(Message::ContactLabel, &application.contact) }
            { block(Message::AdminSubmittedAt, &format_kst(&application.submitted_at)) }
            { block(Message::MotivationLabel, &application.motivation) }
            { block(Message::ActivitiesLabel, &application.activities) }
            { block(Message::InterviewHeading, &slots) }
            if let Some(comments) = &application.additional_comments {
                { block(Message::AdditionalLabel, comments) }
            }
            if let Some(notes) = &application.interview_notes {
                { block(Message::InterviewNotesLabel, notes) }
            }
            <div style={format!("margin-top: {};", theme.spacing.lg)}>
                <Button variant={ButtonVariant::Secondary} onclick={ctx.link().callback(|_: MouseEvent| Msg::CloseDetail)}>
                    { Message::AdminClose.text(LOCALE) }
                </Button>
            </div>
        </div>
    }
}
