/// Popup UI for Domain Switcher extension

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser::{delay, ChromeSyncStore, ChromeTabs};
use crate::config::NOTICE_CLEAR_DELAY_MS;
use crate::domain::origin_of;
use crate::domain_data::DomainRecord;
use crate::operations::{delete_domain, load_domains, save_domain, switch_active_tab, TabController};
use crate::storage::DomainList;
use crate::ui::components::{DomainRow, ShortcutHint};
use crate::ui::view_state::{NoticeKind, PopupAction, PopupView};

const COLLISION_WARNING: &str = "Warning: This URL already exists with a different name";

#[derive(Clone, PartialEq)]
struct PopupData {
    domains: DomainList,
    /// Origin of the active tab, used to highlight the matching domain
    active_origin: Option<String>,
}

/// Callbacks the form needs; grouped so `view_form` stays a plain function
struct FormHandlers {
    name_ref: NodeRef,
    url_ref: NodeRef,
    on_name_input: Callback<InputEvent>,
    on_url_input: Callback<InputEvent>,
    on_name_keypress: Callback<KeyboardEvent>,
    on_url_keypress: Callback<KeyboardEvent>,
    on_save: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_reducer(PopupView::default);
    let data = use_state(|| None::<PopupData>);
    let name_ref = use_node_ref();
    let url_ref = use_node_ref();

    // Load domains and the active tab on mount and after every change
    {
        let data = data.clone();
        let dispatcher = view.dispatcher();

        use_effect_with(view.reloads, move |_| {
            spawn_local(async move {
                match load_popup_data().await {
                    Ok((popup_data, warning)) => {
                        if let Some(message) = warning {
                            dispatcher.dispatch(PopupAction::Fail(message));
                        }
                        data.set(Some(popup_data));
                    }
                    Err(e) => dispatcher.dispatch(PopupAction::Fail(e)),
                }
            });
            || ()
        });
    }

    // Auto-hide each notice after a fixed delay
    {
        let dispatcher = view.dispatcher();
        let generation = view.notice.as_ref().map(|n| n.generation);

        use_effect_with(generation, move |generation| {
            if let Some(generation) = *generation {
                spawn_local(async move {
                    delay(NOTICE_CLEAR_DELAY_MS).await;
                    dispatcher.dispatch(PopupAction::ExpireNotice(generation));
                });
            }
            || ()
        });
    }

    // Focus the name input whenever the form is opened
    {
        let name_ref = name_ref.clone();
        use_effect_with(view.form_opened, move |opened| {
            if *opened > 0 {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let on_add = {
        let view = view.clone();
        Callback::from(move |_| view.dispatch(PopupAction::OpenAdd))
    };

    let save = {
        let view = view.clone();

        Callback::from(move |_: ()| {
            let name = view.name_input.clone();
            let raw_url = view.url_input.clone();
            let dispatcher = view.dispatcher();

            spawn_local(async move {
                match save_domain(&ChromeSyncStore, &name, &raw_url).await {
                    Ok(outcome) => {
                        let warning = outcome.url_collision.then(|| COLLISION_WARNING.to_string());
                        dispatcher.dispatch(PopupAction::Saved { warning });
                    }
                    Err(e) => dispatcher.dispatch(PopupAction::Fail(e.to_string())),
                }
            });
        })
    };

    let on_edit = {
        let view = view.clone();
        Callback::from(move |record: DomainRecord| view.dispatch(PopupAction::OpenEdit(record)))
    };

    let on_delete = {
        let view = view.clone();

        Callback::from(move |index: usize| {
            if !confirm("Are you sure you want to delete this domain?") {
                return;
            }

            let dispatcher = view.dispatcher();
            spawn_local(async move {
                match delete_domain(&ChromeSyncStore, index).await {
                    Ok(_) => dispatcher.dispatch(PopupAction::Reload),
                    Err(e) => dispatcher.dispatch(PopupAction::Fail(e.to_string())),
                }
            });
        })
    };

    let on_switch = {
        let view = view.clone();

        Callback::from(move |target: String| {
            let dispatcher = view.dispatcher();
            spawn_local(async move {
                match switch_active_tab(&ChromeTabs, &target).await {
                    Ok(_) => close_popup(),
                    Err(e) => dispatcher.dispatch(PopupAction::Fail(format!("Error switching domain: {}", e))),
                }
            });
        })
    };

    let handlers = FormHandlers {
        name_ref: name_ref.clone(),
        url_ref: url_ref.clone(),
        on_name_input: {
            let view = view.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    view.dispatch(PopupAction::NameInput(input.value()));
                }
            })
        },
        on_url_input: {
            let view = view.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    view.dispatch(PopupAction::UrlInput(input.value()));
                }
            })
        },
        on_name_keypress: {
            let url_ref = url_ref.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    if let Some(input) = url_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
            })
        },
        on_url_keypress: {
            let save = save.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    save.emit(());
                }
            })
        },
        on_save: save.reform(|_| ()),
        on_cancel: {
            let view = view.clone();
            Callback::from(move |_| view.dispatch(PopupAction::CloseForm))
        },
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Domain Switcher"}</h1>

            <Button onclick={on_add} variant={ButtonVariant::Primary} block={true}>
                {"Add Domain"}
            </Button>

            {view_form(&view, &handlers)}

            <div class="domain-list">
                {match &*data {
                    None => html! {
                        <div class="loading-text-center">
                            <Spinner />
                        </div>
                    },
                    Some(popup_data) => html! {
                        <>
                            <ShortcutHint has_domains={!popup_data.domains.is_empty()} />
                            {for popup_data.domains.iter().enumerate().map(|(index, record)| {
                                let active = popup_data.active_origin.as_deref() == Some(record.url.as_str());
                                html! {
                                    <DomainRow
                                        key={record.name.clone()}
                                        record={record.clone()}
                                        index={index}
                                        active={active}
                                        on_switch={on_switch.clone()}
                                        on_edit={on_edit.clone()}
                                        on_delete={on_delete.clone()}
                                    />
                                }
                            })}
                        </>
                    },
                }}
            </div>

            {view_notice(&view)}
        </div>
    }
}

/// Add/edit form, shown only while `form_visible` is set
fn view_form(view: &PopupView, handlers: &FormHandlers) -> Html {
    if !view.form_visible {
        return html! {};
    }

    html! {
        <div class="domain-form">
            <input
                ref={handlers.name_ref.clone()}
                type="text"
                placeholder="Name (e.g. Production)"
                value={view.name_input.clone()}
                oninput={handlers.on_name_input.clone()}
                onkeypress={handlers.on_name_keypress.clone()}
                class="form-input"
            />
            <input
                ref={handlers.url_ref.clone()}
                type="text"
                placeholder="Domain (e.g. example.com or localhost:3000)"
                value={view.url_input.clone()}
                oninput={handlers.on_url_input.clone()}
                onkeypress={handlers.on_url_keypress.clone()}
                class="form-input"
            />
            <Button onclick={handlers.on_save.clone()} variant={ButtonVariant::Primary}>
                {"Save"}
            </Button>
            <Button onclick={handlers.on_cancel.clone()} variant={ButtonVariant::Secondary}>
                {"Cancel"}
            </Button>
        </div>
    }
}

fn view_notice(view: &PopupView) -> Html {
    match &view.notice {
        Some(notice) => {
            let (alert_type, title) = match notice.kind {
                NoticeKind::Warning => (AlertType::Warning, "Warning"),
                NoticeKind::Error => (AlertType::Danger, "Error"),
            };
            html! {
                <div class="message-top-margin">
                    <Alert r#type={alert_type} title={title} inline={true}>
                        {notice.text.clone()}
                    </Alert>
                </div>
            }
        }
        None => html! {},
    }
}

// Helper functions

/// Read the domain list and the active tab's origin.
///
/// A missing or unparsable tab is not fatal: the list still renders, and the
/// problem comes back as a message to show.
async fn load_popup_data() -> Result<(PopupData, Option<String>), String> {
    let domains = load_domains(&ChromeSyncStore)
        .await
        .map_err(|e| e.to_string())?;

    let (active_origin, warning) = match ChromeTabs.active_tab().await {
        Ok(tab) => match tab.url.as_deref().map(origin_of) {
            Some(Ok(origin)) => (Some(origin), None),
            Some(Err(e)) => (None, Some(format!("Invalid current URL: {}", e))),
            None => (None, Some("Invalid current URL: not readable".to_string())),
        },
        Err(e) => (None, Some(e.to_string())),
    };

    Ok((
        PopupData {
            domains,
            active_origin,
        },
        warning,
    ))
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn close_popup() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.close() {
            log::warn!("Failed to close popup: {:?}", e);
        }
    }
}
