#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub title: &'static str,
    pub content_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Logout,
    Unsupported,
}

pub static DRAWER_ITEMS: [MenuItem; 4] = [
    MenuItem {
        id: "direct message",
        title: "New Direct Message",
        content_description: "See available channels",
    },
    MenuItem {
        id: "groups",
        title: "Groups",
        content_description: "See your groups",
    },
    MenuItem {
        id: "settings",
        title: "Settings",
        content_description: "Go to settings screen",
    },
    MenuItem {
        id: "logout",
        title: "Logout",
        content_description: "log out",
    },
];

impl MenuItem {
    pub fn action(&self) -> MenuAction {
        match self.id {
            "logout" => MenuAction::Logout,
            _ => MenuAction::Unsupported,
        }
    }
}
