use common::api::ApiResponse;
use common::i18n::Message;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AdminPage, LOCALE};
use crate::helpers::show_toast;

pub fn update(component: &mut AdminPage, ctx: &Context<AdminPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetKey(value) => {
            component.key_input = value;
            false
        }
        Msg::Login => {
            let key = component.key_input.trim().to_string();
            if key.is_empty() {
                component.error = Some(Message::AdminKeyRequired.text(LOCALE).to_string());
                return true;
            }
            load_list(component, ctx, key);
            true
        }
        Msg::Refresh => match component.key.clone() {
            Some(key) => {
                load_list(component, ctx, key);
                true
            }
            None => false,
        },
        Msg::Logout => {
            component.key = None;
            component.key_input.clear();
            component.applications.clear();
            component.selected = None;
            component.error = None;
            true
        }
        Msg::Listed(key, result) => {
            component.loading = false;
            match result {
                Ok(response) if response.success => {
                    component.key = Some(key);
                    component.error = None;
                    component.applications = response.data.unwrap_or_default();
                }
                Ok(response) => {
                    component.key = None;
                    component.applications.clear();
                    component.error = Some(response.message);
                }
                Err(err) => {
                    gloo_console::error!(format!("admin list failed: {err}"));
                    component.error = Some(Message::AdminConnectionFailed.text(LOCALE).to_string());
                }
            }
            true
        }
        Msg::Open(id) => {
            let Some(key) = component.key.clone() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let url = format!("/api/recruit/{}?admin={}", encode(&id), encode(&key));
                link.send_message(Msg::Opened(fetch(&url).await));
            });
            false
        }
        Msg::Opened(result) => match result {
            Ok(response) if response.success => {
                component.selected = response.data;
                true
            }
            Ok(response) => {
                show_toast(&response.message);
                false
            }
            Err(err) => {
                gloo_console::error!(format!("admin detail failed: {err}"));
                show_toast(Message::AdminConnectionFailed.text(LOCALE));
                false
            }
        },
        Msg::CloseDetail => {
            component.selected = None;
            true
        }
    }
}

fn load_list(component: &mut AdminPage, ctx: &Context<AdminPage>, key: String) {
    component.loading = true;
    component.error = None;
    let link = ctx.link().clone();
    spawn_local(async move {
        let url = format!("/api/recruit?admin={}", encode(&key));
        let result = fetch(&url).await;
        link.send_message(Msg::Listed(key, result));
    });
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// GETs an API envelope. Error statuses still decode as envelopes.
async fn fetch<T: DeserializeOwned>(url: &str) -> Result<ApiResponse<T>, String> {
    let response = Request::get(url).send().await.map_err(|err| err.to_string())?;
    response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|err| err.to_string())
}
