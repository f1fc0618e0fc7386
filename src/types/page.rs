use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// The page a session is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Records,
    AddRecord,
    DeleteRecord,
    UpdateRecord,
    SearchRecord,
    CreateTable,
}

/// A button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    GetStarted,
    SeeAllRecords,
    AddNewRecord,
    DeleteRecord,
    UpdateRecord,
    SearchRecord,
    CreateTable,
    Back,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Dashboard,
        Page::Records,
        Page::AddRecord,
        Page::DeleteRecord,
        Page::UpdateRecord,
        Page::SearchRecord,
        Page::CreateTable,
    ];

    /// Next page after `event`. Events the current page does not offer leave it unchanged.
    pub fn transition(self, event: NavEvent) -> Page {
        match (self, event) {
            (Page::Home, NavEvent::GetStarted) => Page::Dashboard,
            (Page::Dashboard, NavEvent::SeeAllRecords) => Page::Records,
            (Page::Dashboard, NavEvent::AddNewRecord) => Page::AddRecord,
            (Page::Dashboard, NavEvent::DeleteRecord) => Page::DeleteRecord,
            (Page::Dashboard, NavEvent::UpdateRecord) => Page::UpdateRecord,
            (Page::Dashboard, NavEvent::SearchRecord) => Page::SearchRecord,
            (Page::Dashboard, NavEvent::CreateTable) => Page::CreateTable,
            (Page::Dashboard, NavEvent::Back) => Page::Home,
            (Page::Home | Page::Dashboard, _) => self,
            (_, NavEvent::Back) => Page::Dashboard,
            _ => self,
        }
    }

    /// Events offered as buttons on this page, in display order.
    pub fn events(self) -> &'static [NavEvent] {
        match self {
            Page::Home => &[NavEvent::GetStarted],
            Page::Dashboard => &[
                NavEvent::SeeAllRecords,
                NavEvent::AddNewRecord,
                NavEvent::DeleteRecord,
                NavEvent::UpdateRecord,
                NavEvent::SearchRecord,
                NavEvent::CreateTable,
                NavEvent::Back,
            ],
            _ => &[NavEvent::Back],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Records => "records",
            Page::AddRecord => "add_record",
            Page::DeleteRecord => "delete_record",
            Page::UpdateRecord => "update_record",
            Page::SearchRecord => "search_record",
            Page::CreateTable => "create_table",
        }
    }

    /// Pages that can be navigated to but have no form yet.
    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            Page::DeleteRecord | Page::UpdateRecord | Page::SearchRecord | Page::CreateTable
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL.into_iter().find(|p| p.as_str() == s).ok_or(())
    }
}

impl NavEvent {
    pub const ALL: [NavEvent; 8] = [
        NavEvent::GetStarted,
        NavEvent::SeeAllRecords,
        NavEvent::AddNewRecord,
        NavEvent::DeleteRecord,
        NavEvent::UpdateRecord,
        NavEvent::SearchRecord,
        NavEvent::CreateTable,
        NavEvent::Back,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavEvent::GetStarted => "get_started",
            NavEvent::SeeAllRecords => "see_all_records",
            NavEvent::AddNewRecord => "add_new_record",
            NavEvent::DeleteRecord => "delete_record",
            NavEvent::UpdateRecord => "update_record",
            NavEvent::SearchRecord => "search_record",
            NavEvent::CreateTable => "create_table",
            NavEvent::Back => "back",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            NavEvent::GetStarted => "Getting Started ->",
            NavEvent::SeeAllRecords => "See all records ->",
            NavEvent::AddNewRecord => "Add a new record ->",
            NavEvent::DeleteRecord => "Delete a record ->",
            NavEvent::UpdateRecord => "Update a record ->",
            NavEvent::SearchRecord => "Search a record ->",
            NavEvent::CreateTable => "Create a new table ->",
            NavEvent::Back => "<- Back",
        }
    }
}

impl FromStr for NavEvent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavEvent::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| AppError::UnknownEvent(s.to_string()))
    }
}
