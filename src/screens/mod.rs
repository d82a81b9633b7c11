//! Screen-level controllers. Each owns its view model and talks to the
//! backend only through `LinksApi`; moving between screens happens by
//! returning a `Screen`.

mod dashboard;
mod editor;
mod gate;
mod login;

use crate::model::LinkKind;

pub use self::dashboard::{
    COLUMNS, CREATE_MENU, DELETE_PROMPT, DashboardController, EMPTY_PLACEHOLDER, TableBody,
    row_cells,
};
pub use self::editor::{FieldRow, FormScreen, mount_editor, new_editor};
pub use self::gate::{initial_screen, logout, screen_for_credential};
pub use self::login::LoginController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Create(LinkKind),
    Edit(LinkKind, u64),
}

impl Screen {
    pub fn title(self) -> String {
        match self {
            Screen::Login => "LOGIN".to_string(),
            Screen::Dashboard => "Links".to_string(),
            Screen::Create(kind) => match kind {
                LinkKind::Contact => "Option 1: Contact".to_string(),
                LinkKind::Pdf => "Option 2: PDF".to_string(),
                LinkKind::Url => "Option 3: URL".to_string(),
            },
            Screen::Edit(kind, id) => format!("Edit {} #{}", kind.tag(), id),
        }
    }

    /// Screens behind the session gate.
    pub fn requires_credential(self) -> bool {
        !matches!(self, Screen::Login)
    }
}
