//! Problem and language navigation

use crate::commands::Cmd;
use crate::messages::NavigationMsg;
use crate::model::AppModel;

pub fn update_navigation(model: &mut AppModel, msg: NavigationMsg) -> Option<Cmd> {
    let (day, language) = match msg {
        NavigationMsg::SelectDay(day) => (day, model.language()),
        NavigationMsg::PreviousDay => (model.catalog().previous_id(model.day())?, model.language()),
        NavigationMsg::NextDay => (model.catalog().next_id(model.day())?, model.language()),
        NavigationMsg::SetLanguage(language) => (model.day(), language),
    };
    model.switch_pairing(day, language);
    None
}
