//! Context menu policy: which entries a page gets, and what they do.

use tracing::debug;

use crate::engine::{Browser, ContextMenuParams, ContextMenuTypeFlags, MediaType, MenuModel};
use crate::sink::UiSink;

/// First command id free for embedders; lower ids belong to the engine.
pub const MENU_ID_USER_FIRST: i32 = 26500;

/// Every command the controller puts in a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MenuCommand {
    Back = 100,
    Forward = 101,
    Reload = 102,
    Undo = 110,
    Redo = 111,
    Cut = 112,
    Copy = 113,
    Paste = 114,
    SelectAll = 116,
    OpenLinkInNewTab = MENU_ID_USER_FIRST,
    CopyLink = MENU_ID_USER_FIRST + 1,
    CopyImage = MENU_ID_USER_FIRST + 2,
    SaveImageAs = MENU_ID_USER_FIRST + 3,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 13] = [
        MenuCommand::Back,
        MenuCommand::Forward,
        MenuCommand::Reload,
        MenuCommand::Undo,
        MenuCommand::Redo,
        MenuCommand::Cut,
        MenuCommand::Copy,
        MenuCommand::Paste,
        MenuCommand::SelectAll,
        MenuCommand::OpenLinkInNewTab,
        MenuCommand::CopyLink,
        MenuCommand::CopyImage,
        MenuCommand::SaveImageAs,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Back => "Back",
            MenuCommand::Forward => "Forward",
            MenuCommand::Reload => "Reload",
            MenuCommand::Undo => "Undo",
            MenuCommand::Redo => "Redo",
            MenuCommand::Cut => "Cut",
            MenuCommand::Copy => "Copy",
            MenuCommand::Paste => "Paste",
            MenuCommand::SelectAll => "Select All",
            MenuCommand::OpenLinkInNewTab => "Open Link in New Tab",
            MenuCommand::CopyLink => "Copy Link",
            MenuCommand::CopyImage => "Copy Image",
            MenuCommand::SaveImageAs => "Save Image As...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuCommand),
    Separator,
}

/// Entries for a context, in display order.
///
/// Link, image, selection and editable sections stack in that order. A page
/// context with none of link, media or selection gets the navigation
/// section instead (unless it is editable).
pub fn entries_for(params: &ContextMenuParams) -> Vec<MenuEntry> {
    use MenuCommand::*;
    use MenuEntry::{Item, Separator};

    let flags = params.type_flags;
    let mut entries = Vec::new();

    if flags.contains(ContextMenuTypeFlags::LINK) {
        entries.extend([Item(OpenLinkInNewTab), Item(CopyLink), Separator]);
    }

    if flags.contains(ContextMenuTypeFlags::MEDIA) && params.media_type == MediaType::Image {
        entries.extend([Item(CopyImage), Item(SaveImageAs), Separator]);
    }

    if flags.contains(ContextMenuTypeFlags::SELECTION) {
        entries.extend([Item(Copy), Separator]);
    }

    let content = ContextMenuTypeFlags::LINK
        | ContextMenuTypeFlags::MEDIA
        | ContextMenuTypeFlags::SELECTION;

    if flags.contains(ContextMenuTypeFlags::EDITABLE) {
        entries.extend([
            Item(Undo),
            Item(Redo),
            Separator,
            Item(Cut),
            Item(Copy),
            Item(Paste),
            Separator,
            Item(SelectAll),
        ]);
    } else if !flags.intersects(content) {
        entries.extend([Item(Back), Item(Forward), Item(Reload)]);
    }

    entries
}

/// Replace the engine's default model with the entries for `params`.
pub fn populate(model: &mut dyn MenuModel, params: &ContextMenuParams) {
    model.clear();
    for entry in entries_for(params) {
        match entry {
            MenuEntry::Item(command) => model.add_item(command.id(), command.label()),
            MenuEntry::Separator => model.add_separator(),
        }
    }
}

/// Run a chosen command. Returns `true` when handled here, `false` to let
/// the engine's default handling run.
pub fn execute(
    command_id: i32,
    browser: &dyn Browser,
    params: &ContextMenuParams,
    sink: &dyn UiSink,
) -> bool {
    let Some(command) = MenuCommand::from_id(command_id) else {
        return false;
    };
    debug!(browser_id = %browser.identifier(), ?command, "context menu command");

    match command {
        MenuCommand::OpenLinkInNewTab => {
            sink.open_link_in_new_tab(&params.link_url);
            true
        }
        // The engine's default handler puts the link on the clipboard.
        MenuCommand::CopyLink => false,
        MenuCommand::Back => {
            if browser.can_go_back() {
                browser.go_back();
            }
            true
        }
        MenuCommand::Forward => {
            if browser.can_go_forward() {
                browser.go_forward();
            }
            true
        }
        MenuCommand::Reload => {
            browser.reload();
            true
        }
        _ => false,
    }
}
