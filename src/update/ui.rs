//! UI message handlers (status line, error modal, URL field)

use super::report_error;
use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Some(Cmd::Redraw)
        }

        UiMsg::SetUrlInput(input) => {
            model.ui.url_input = input;
            None
        }

        UiMsg::ReportError(error) => {
            report_error(model, error);
            Some(Cmd::Redraw)
        }

        UiMsg::DismissError => {
            if !model.ui.has_error_modal() {
                return None;
            }
            model.ui.hide_error();
            Some(Cmd::Redraw)
        }
    }
}
