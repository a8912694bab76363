use common::i18n::Message;
use common::model::application::{Field, TextField as FormText};
use common::model::interview::InterviewSlot;
use yew::prelude::*;

use super::messages::Msg;
use super::state::RecruitFormComponent;
use crate::components::controls::{Button, ButtonVariant, Card, Checkbox, TextField};

pub fn view(component: &RecruitFormComponent, ctx: &Context<RecruitFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;
    let locale = form.locale();
    let theme = &component.theme;
    let submitting = form.is_submitting();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let error = |field: Field| form.error(field).map(|message| AttrValue::from(message.to_string()));
    let text = |field: FormText, label: Message, placeholder: Option<Message>, rows: Option<u32>, required: bool| {
        html! {
            <TextField
                id={field.field().as_str()}
                label={label.text(locale)}
                value={form.draft().text(field).to_string()}
                placeholder={placeholder.map(|p| AttrValue::from(p.text(locale)))}
                error={error(field.field())}
                rows={rows}
                required={required}
                max_chars={field.max_chars()}
                oninput={link.callback(move |value: String| Msg::SetText(field, value))}
            />
        }
    };
    let heading_style = format!(
        "margin: {} 0 {}; font-size: 1.1rem; color: {};",
        theme.spacing.lg, theme.spacing.md, theme.colors.text_primary
    );

    html! {
        <Card title={Message::FormTitle.text(locale)}>
            <p style={format!("color: {};", theme.colors.text_tertiary)}>{ Message::PeriodInfo.text(locale) }</p>
            <form novalidate={true} {onsubmit}>
                <h4 style={heading_style.clone()}>{ Message::BasicInfo.text(locale) }</h4>
                { text(FormText::Name, Message::NameLabel, None, None, true) }
                { text(FormText::StudentId, Message::StudentIdLabel, None, None, true) }
                { text(FormText::Contact, Message::ContactLabel, None, None, true) }

                <h4 style={heading_style.clone()}>{ Message::MotivationHeading.text(locale) }</h4>
                { text(FormText::Motivation, Message::MotivationLabel, Some(Message::MotivationPlaceholder), Some(6), true) }

                <h4 style={heading_style.clone()}>{ Message::ActivitiesHeading.text(locale) }</h4>
                { text(FormText::Activities, Message::ActivitiesLabel, Some(Message::ActivitiesPlaceholder), Some(6), true) }

                <h4 style={heading_style.clone()}>{ Message::InterviewHeading.text(locale) }</h4>
                <p style={format!("color: {};", theme.colors.text_tertiary)}>{ Message::InterviewNote.text(locale) }</p>
                <fieldset
                    style={format!("display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: {}; border: none; padding: 0; margin: 0;", theme.spacing.sm)}
                    aria-invalid={form.error(Field::InterviewTimes).is_some().to_string()}
                >
                    { for InterviewSlot::ALL.iter().enumerate().map(|(index, &slot)| html! {
                        <Checkbox
                            id={format!("interview-slot-{index}")}
                            label={slot.label()}
                            checked={form.draft().interview_times.is_selected(slot)}
                            onchange={link.callback(move |checked: bool| Msg::ToggleSlot(slot, checked))}
                        />
                    }) }
                </fieldset>
                if let Some(message) = form.error(Field::InterviewTimes) {
                    <p role="alert" style={format!("color: {}; font-size: 0.85rem;", theme.colors.error)}>{ message.to_string() }</p>
                }

                <h4 style={heading_style}>{ Message::AdditionalHeading.text(locale) }</h4>
                { text(FormText::AdditionalComments, Message::AdditionalLabel, Some(Message::AdditionalPlaceholder), Some(4), false) }
                { text(FormText::InterviewNotes, Message::InterviewNotesLabel, Some(Message::InterviewNotesPlaceholder), Some(3), false) }

                <div style={format!("display: flex; justify-content: flex-end; gap: {}; margin-top: {};", theme.spacing.sm, theme.spacing.lg)}>
                    <Button variant={ButtonVariant::Secondary} onclick={link.callback(|_: MouseEvent| Msg::Cancel)}>
                        { Message::Cancel.text(locale) }
                    </Button>
                    <Button kind="submit" disabled={submitting}>
                        { if submitting { Message::Submitting.text(locale) } else { Message::SubmitButton.text(locale) } }
                    </Button>
                </div>
            </form>
            <p style={format!("margin-top: {}; color: {}; font-size: 0.85rem;", theme.spacing.md, theme.colors.text_tertiary)}>
                { Message::ContactInfo.text(locale) }
            </p>
        </Card>
    }
}
