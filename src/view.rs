//! Catalog View Model
//!
//! What a surface draws for a catalog. Built fresh from every fetched
//! catalog; nothing here is diffed against the previous render.

use crate::catalog::Catalog;
use std::fmt::Write;

/// Placeholder shown before the first catalog arrives
pub const LOADING_TEXT: &str = "Loading activities...";
/// Replaces the list when the catalog cannot be fetched
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

/// What the activities container currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(CatalogView),
    Failed,
}

impl ViewState {
    pub fn catalog(&self) -> Option<&CatalogView> {
        match self {
            ViewState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// Visible text of the activities container
    pub fn text_content(&self) -> String {
        match self {
            ViewState::Loading => LOADING_TEXT.to_string(),
            ViewState::Ready(view) => view.text_content(),
            ViewState::Failed => LOAD_FAILURE_TEXT.to_string(),
        }
    }
}

/// Rendered catalog: activity cards plus the selection options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub removal: RemovalTarget,
}

/// The (activity, participant) pair a removal affordance acts on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Identifier carried by the rendered affordance.
    ///
    /// Both halves are percent-encoded so the `/` separator is unambiguous.
    pub fn id(&self) -> String {
        format!(
            "{}/{}",
            urlencoding::encode(&self.activity),
            urlencoding::encode(&self.email)
        )
    }
}

impl ActivityCard {
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

impl CatalogView {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let cards = catalog
            .iter()
            .map(|(name, activity)| ActivityCard {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        removal: RemovalTarget::new(name, email.as_str()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            cards,
            options: catalog.names().map(str::to_string).collect(),
        }
    }

    /// Every removal affordance in render order
    pub fn removal_targets(&self) -> impl Iterator<Item = &RemovalTarget> {
        self.cards
            .iter()
            .flat_map(|card| card.participants.iter().map(|row| &row.removal))
    }

    /// Resolve a rendered affordance identifier
    pub fn find_removal(&self, id: &str) -> Option<&RemovalTarget> {
        self.removal_targets().find(|target| target.id() == id)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for card in &self.cards {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{}", card.name);
            let _ = writeln!(out, "{}", card.description);
            let _ = writeln!(out, "Schedule: {}", card.schedule);
            let _ = writeln!(out, "Availability: {}", card.availability_label());
            let _ = writeln!(out, "Participants:");
            for row in &card.participants {
                let _ = writeln!(out, "  {}", row.email);
            }
        }
        out
    }
}
