//! Editor surface messages

use crate::commands::Cmd;
use crate::editable::{EditorKey, KeyOutcome, SurfaceEdit};
use crate::messages::EditorMsg;
use crate::model::AppModel;

pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::Key(key) => {
            let code = model.code().to_string();
            match model.editor_mut().key_down(&code, key) {
                KeyOutcome::Replace(change) => {
                    model.apply_change(change.text, change.origin);
                    None
                }
                KeyOutcome::Suppressed => None,
                KeyOutcome::PassThrough => match key {
                    EditorKey::Char(ch) => {
                        update_editor(model, EditorMsg::Input(SurfaceEdit::InsertText(ch.into())))
                    }
                    _ => None,
                },
            }
        }
        EditorMsg::Input(edit) => {
            let code = model.code().to_string();
            let input = model.editor_mut().input(&code, edit)?;
            model.apply_change(input.change.text, input.change.origin);
            input.cut.map(Cmd::SetClipboard)
        }
        EditorMsg::Select(selection) => {
            model.editor_mut().select(selection);
            None
        }
        EditorMsg::Scroll { top, left } => {
            model.editor_mut().scroll(top, left);
            None
        }
    }
}
