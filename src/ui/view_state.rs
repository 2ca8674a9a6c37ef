/// Popup view state: form visibility, input contents and the transient notice
///
/// All popup UI state lives here and changes only through `PopupAction`s, so
/// async tasks dispatching late cannot overwrite newer state with a stale copy.

use std::rc::Rc;

use yew::Reducible;

use crate::domain::display_input;
use crate::domain_data::DomainRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Distinguishes this notice from later ones for delayed clearing
    pub generation: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PopupView {
    pub form_visible: bool,
    pub name_input: String,
    pub url_input: String,
    pub notice: Option<Notice>,
    /// Bumped every time the form is opened; drives focusing the name input
    pub form_opened: u32,
    /// Bumped after every store change; the popup reloads the list when it moves
    pub reloads: u32,
    notices_posted: u32,
}

pub enum PopupAction {
    OpenAdd,
    OpenEdit(DomainRecord),
    CloseForm,
    NameInput(String),
    UrlInput(String),
    /// Save went through; hide the form, optionally keeping a warning up
    Saved { warning: Option<String> },
    /// The stored list changed; read it again
    Reload,
    Fail(String),
    ClearNotice,
    /// Clear the notice only if it is still the one with this generation
    ExpireNotice(u32),
}

impl PopupView {
    fn post(&mut self, kind: NoticeKind, text: String) {
        self.notices_posted = self.notices_posted.wrapping_add(1);
        self.notice = Some(Notice {
            kind,
            text,
            generation: self.notices_posted,
        });
    }

    pub fn apply(&mut self, action: PopupAction) {
        match action {
            PopupAction::OpenAdd => {
                self.form_visible = true;
                self.name_input.clear();
                self.url_input.clear();
                self.notice = None;
                self.form_opened = self.form_opened.wrapping_add(1);
            }
            PopupAction::OpenEdit(record) => {
                self.form_visible = true;
                self.url_input = display_input(&record.url);
                self.name_input = record.name;
                self.form_opened = self.form_opened.wrapping_add(1);
            }
            PopupAction::CloseForm => self.form_visible = false,
            PopupAction::NameInput(value) => self.name_input = value,
            PopupAction::UrlInput(value) => self.url_input = value,
            PopupAction::Saved { warning } => {
                self.form_visible = false;
                self.reloads = self.reloads.wrapping_add(1);
                match warning {
                    Some(text) => self.post(NoticeKind::Warning, text),
                    None => self.notice = None,
                }
            }
            PopupAction::Reload => self.reloads = self.reloads.wrapping_add(1),
            PopupAction::Fail(text) => self.post(NoticeKind::Error, text),
            PopupAction::ClearNotice => self.notice = None,
            PopupAction::ExpireNotice(generation) => {
                if self.notice.as_ref().map(|n| n.generation) == Some(generation) {
                    self.notice = None;
                }
            }
        }
    }
}

impl Reducible for PopupView {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
