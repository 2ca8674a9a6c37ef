/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::config::SHORTCUT_SLOTS;
use crate::domain_data::DomainRecord;

#[derive(Properties, PartialEq)]
pub struct DomainRowProps {
    pub record: DomainRecord,
    pub index: usize,
    /// The current tab is already on this domain
    pub active: bool,
    pub on_switch: Callback<String>,
    pub on_edit: Callback<DomainRecord>,
    pub on_delete: Callback<usize>,
}

#[function_component(DomainRow)]
pub fn domain_row(props: &DomainRowProps) -> Html {
    let row_class = if props.active {
        "domain-row domain-row-active"
    } else {
        "domain-row"
    };

    html! {
        <div class={row_class}>
            if props.index < SHORTCUT_SLOTS {
                <small class="shortcut-label">{format!("#{}", props.index + 1)}</small>
            }
            <span class="domain-name">{&props.record.name}</span>
            <Button
                onclick={props.on_switch.reform({
                    let url = props.record.url.clone();
                    move |_| url.clone()
                })}
                variant={ButtonVariant::Primary}
                size={ButtonSize::Small}
            >
                {"Switch"}
            </Button>
            <Button
                onclick={props.on_edit.reform({
                    let record = props.record.clone();
                    move |_| record.clone()
                })}
                variant={ButtonVariant::Secondary}
                size={ButtonSize::Small}
            >
                {"Edit"}
            </Button>
            <Button
                onclick={props.on_delete.reform({
                    let index = props.index;
                    move |_| index
                })}
                variant={ButtonVariant::Danger}
                size={ButtonSize::Small}
            >
                {"Delete"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShortcutHintProps {
    pub has_domains: bool,
}

#[function_component(ShortcutHint)]
pub fn shortcut_hint(props: &ShortcutHintProps) -> Html {
    if props.has_domains {
        html! {
            <div class="shortcut-hint">
                <small>
                    {"Keyboard shortcuts: Press "}<kbd>{"Ctrl+Shift+1"}</kbd>{" through "}
                    <kbd>{format!("Ctrl+Shift+{}", SHORTCUT_SLOTS)}</kbd>
                    {" (or "}<kbd>{"⌘+Shift+1"}</kbd>{" through "}
                    <kbd>{format!("⌘+Shift+{}", SHORTCUT_SLOTS)}</kbd>
                    {format!(" on Mac) to quickly switch to your first {} domains", SHORTCUT_SLOTS)}
                </small>
            </div>
        }
    } else {
        html! {
            <div class="empty-state">
                <p>{"No domains added yet. Click \"Add Domain\" to get started."}</p>
                <p>
                    <small>
                        {"Tip: Use "}<kbd>{"Ctrl+Shift+D"}</kbd>{" (or "}<kbd>{"⌘+Shift+D"}</kbd>
                        {" on Mac) to open this panel quickly."}
                    </small>
                </p>
            </div>
        }
    }
}
